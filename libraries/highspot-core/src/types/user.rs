/// User record
use super::ids::UserId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User account as stored in a library document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name and anything else the document carries
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            extra: Map::new(),
        }
    }
}
