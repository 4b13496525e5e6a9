use serde::{Deserialize, Serialize};

/// Opt-in/opt-out counts over a population (all users for the newsletter,
/// all administrators for the dashboard). Opt-in and opt-out are counted
/// independently: the source schema does not make them mutually exclusive,
/// so a row may contribute to both, or to neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptInTally {
    pub total: i64,
    pub opted_in: i64,
    pub opted_out: i64,
}
