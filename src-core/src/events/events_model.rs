use serde::{Deserialize, Serialize};

/// An event (a "settings" row in the source schema). Only the fields the
/// aggregation needs are carried; the lifecycle filter happens in the
/// repository query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    pub workspace_id: i32,
}
