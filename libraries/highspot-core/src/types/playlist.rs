/// Playlist record
use super::ids::{PlaylistId, SongId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Playlist as stored in a library document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Songs in play order; duplicates are allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_ids: Option<Vec<SongId>>,

    /// Owner, when the record carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// Any other fields, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Playlist {
    /// Create a playlist with no songs
    pub fn new(id: PlaylistId) -> Self {
        Self {
            id,
            song_ids: None,
            user_id: None,
            extra: Map::new(),
        }
    }

    /// Songs in the playlist (empty when the record has no `song_ids`)
    pub fn songs(&self) -> &[SongId] {
        self.song_ids.as_deref().unwrap_or_default()
    }

    /// Append songs, then sort the whole list ascending
    pub fn append_songs(&mut self, songs: impl IntoIterator<Item = SongId>) {
        let list = self.song_ids.get_or_insert_with(Vec::new);
        list.extend(songs);
        list.sort();
    }
}
