use serde::{Deserialize, Serialize};

/// A participant together with its owning event, as listed for the
/// per-participant aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRef {
    pub id: i32,
    pub event_id: i32,
}
