//! Reference index builder
//!
//! Flattens a change set and a library document into the plain ID lists the
//! validator checks against each other. Lists are not deduplicated.

use crate::error::{HighspotError, Result};
use crate::types::{ChangeSet, LibraryDocument, PlaylistId, RemovePolicy, SongId, UserId};

/// IDs referenced by a change set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeIndex {
    /// `playlist_id` of every `playlist_add_song` entry
    pub playlists_for_add_song: Vec<PlaylistId>,
    /// `playlist_remove`, verbatim
    pub playlists_to_remove: Vec<PlaylistId>,
    /// Songs from `playlist_add_song`, then songs from every `user_add_playlist` request
    pub referenced_songs: Vec<SongId>,
    /// `user_id` of every `user_add_playlist` request
    pub referenced_users: Vec<UserId>,
}

impl ChangeIndex {
    pub fn build(changes: &ChangeSet, remove_policy: RemovePolicy) -> Result<Self> {
        let playlists_to_remove = match (&changes.playlist_remove, remove_policy) {
            (Some(list), _) => list.clone(),
            (None, RemovePolicy::DefaultEmpty) => Vec::new(),
            (None, RemovePolicy::Required) => {
                return Err(HighspotError::MissingOperation("playlist_remove"))
            }
        };

        let playlists_for_add_song = changes
            .playlist_add_song
            .iter()
            .map(|change| change.playlist_id.clone())
            .collect();

        let referenced_songs = changes
            .playlist_add_song
            .iter()
            .map(|change| change.song_id.clone())
            .chain(
                changes
                    .user_add_playlist
                    .iter()
                    .flat_map(|request| request.song_ids.iter().cloned()),
            )
            .collect();

        let referenced_users = changes
            .user_add_playlist
            .iter()
            .map(|request| request.user_id.clone())
            .collect();

        Ok(Self {
            playlists_for_add_song,
            playlists_to_remove,
            referenced_songs,
            referenced_users,
        })
    }
}

/// IDs that exist in a library document, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryIndex {
    pub valid_playlists: Vec<PlaylistId>,
    pub valid_songs: Vec<SongId>,
    pub valid_users: Vec<UserId>,
}

impl LibraryIndex {
    pub fn build(document: &LibraryDocument) -> Self {
        Self {
            valid_playlists: document.playlist_ids().cloned().collect(),
            valid_songs: document.song_ids().cloned().collect(),
            valid_users: document.user_ids().cloned().collect(),
        }
    }
}
