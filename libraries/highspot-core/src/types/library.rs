/// Library document: the full catalog snapshot
use super::ids::{PlaylistId, SongId, UserId};
use super::{Playlist, Song, User};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Library snapshot with its three collections
///
/// A collection missing from the source document is `None` and stays missing
/// when written back out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlists: Option<Vec<Playlist>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<Song>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,

    /// Top-level fields other than the three collections
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LibraryDocument {
    /// Playlists in document order
    pub fn playlists(&self) -> &[Playlist] {
        self.playlists.as_deref().unwrap_or_default()
    }

    /// Songs in document order
    pub fn songs(&self) -> &[Song] {
        self.songs.as_deref().unwrap_or_default()
    }

    /// Users in document order
    pub fn users(&self) -> &[User] {
        self.users.as_deref().unwrap_or_default()
    }

    pub fn playlist_ids(&self) -> impl Iterator<Item = &PlaylistId> {
        self.playlists().iter().map(|p| &p.id)
    }

    pub fn song_ids(&self) -> impl Iterator<Item = &SongId> {
        self.songs().iter().map(|s| &s.id)
    }

    pub fn user_ids(&self) -> impl Iterator<Item = &UserId> {
        self.users().iter().map(|u| &u.id)
    }

    /// Find a playlist by ID
    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists().iter().find(|p| &p.id == id)
    }
}
