use serde::{Deserialize, Serialize};

/// One bucket of a grouped-by-state booking count. The state label is
/// whatever the source rows carry (free-form), with NULL coalesced to
/// "unknown" by the query; the set of states is never hard-coded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateTally {
    pub state: String,
    pub tally: i64,
}

impl StateTally {
    pub fn new(state: impl Into<String>, tally: i64) -> Self {
        StateTally {
            state: state.into(),
            tally,
        }
    }
}
