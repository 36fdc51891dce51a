/// Change set: a batch of declarative edits against a library document
use super::ids::{PlaylistId, SongId, UserId};
use super::Playlist;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Batch of playlist edits
///
/// `playlist_add_song` and `user_add_playlist` default to empty when absent.
/// `playlist_remove` is kept optional here; whether its absence is an error
/// is decided by [`RemovePolicy`] when the change index is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_remove: Option<Vec<PlaylistId>>,

    #[serde(default)]
    pub playlist_add_song: Vec<AddSong>,

    #[serde(default)]
    pub user_add_playlist: Vec<NewPlaylistRequest>,
}

/// "Append this song to this playlist"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSong {
    pub playlist_id: PlaylistId,
    pub song_id: SongId,
}

/// Request to create a playlist on behalf of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlaylistRequest {
    pub user_id: UserId,

    /// Absent and `null` both mean no songs
    #[serde(default, deserialize_with = "null_as_empty")]
    pub song_ids: Vec<SongId>,

    /// Remaining request fields, copied onto the new playlist
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewPlaylistRequest {
    pub fn new(user_id: UserId, song_ids: Vec<SongId>) -> Self {
        Self {
            user_id,
            song_ids,
            extra: Map::new(),
        }
    }

    /// Turn the request into a playlist record with the given ID
    ///
    /// Any `id` the request carried is overwritten. Songs keep request order.
    pub fn into_playlist(self, id: PlaylistId) -> Playlist {
        let mut extra = self.extra;
        extra.remove("id");
        Playlist {
            id,
            song_ids: Some(self.song_ids),
            user_id: Some(self.user_id),
            extra,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<SongId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SongId>>::deserialize(deserializer)?.unwrap_or_default())
}

/// What to do when a change set has no `playlist_remove` key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovePolicy {
    /// Reject the change set
    #[default]
    Required,
    /// Treat it as an empty list
    DefaultEmpty,
}
