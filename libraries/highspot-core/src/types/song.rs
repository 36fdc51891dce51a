/// Song record
use super::ids::SongId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Song as stored in a library document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Song {
    pub fn new(id: SongId) -> Self {
        Self {
            id,
            extra: Map::new(),
        }
    }
}
