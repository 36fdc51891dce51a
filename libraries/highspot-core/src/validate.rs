//! Change validator
//!
//! Runs the referential and conflict checks in a fixed order and stops at the
//! first failure:
//!
//! 1. add-song targets exist
//! 2. removal targets exist
//! 3. no playlist is both removed and given songs
//! 4. referenced songs exist
//! 5. referenced users exist

use crate::error::{HighspotError, PlaylistFault, Result};
use crate::index::{ChangeIndex, LibraryIndex};
use crate::types::{PlaylistId, SongId, UserId};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

/// Working lists handed to the applicator once validation passes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedChanges {
    pub playlists_for_add_song: HashSet<PlaylistId>,
    pub playlists_to_remove: HashSet<PlaylistId>,
    /// Playlist IDs present before any change was applied
    pub valid_playlists: Vec<PlaylistId>,
}

/// Check a change index against the library it targets
pub fn validate(changes: &ChangeIndex, library: &LibraryIndex) -> Result<ValidatedChanges> {
    let valid_playlists: HashSet<&PlaylistId> = library.valid_playlists.iter().collect();

    if let Some(id) = first_missing(&changes.playlists_for_add_song, &valid_playlists) {
        return Err(reject(
            HighspotError::playlist(PlaylistFault::MissingAddSongTarget),
            id,
        ));
    }

    if let Some(id) = first_missing(&changes.playlists_to_remove, &valid_playlists) {
        return Err(reject(
            HighspotError::playlist(PlaylistFault::MissingRemoveTarget),
            id,
        ));
    }

    let to_remove: HashSet<PlaylistId> = changes.playlists_to_remove.iter().cloned().collect();
    if let Some(id) = changes
        .playlists_for_add_song
        .iter()
        .find(|id| to_remove.contains(*id))
    {
        return Err(reject(
            HighspotError::playlist(PlaylistFault::AddRemoveConflict),
            id,
        ));
    }

    let valid_songs: HashSet<&SongId> = library.valid_songs.iter().collect();
    if let Some(id) = first_missing(&changes.referenced_songs, &valid_songs) {
        return Err(reject(HighspotError::Song, id));
    }

    let valid_users: HashSet<&UserId> = library.valid_users.iter().collect();
    if let Some(id) = first_missing(&changes.referenced_users, &valid_users) {
        return Err(reject(HighspotError::User, id));
    }

    tracing::debug!(
        add_song_targets = changes.playlists_for_add_song.len(),
        removals = to_remove.len(),
        songs = changes.referenced_songs.len(),
        users = changes.referenced_users.len(),
        "Change set validated"
    );

    Ok(ValidatedChanges {
        playlists_for_add_song: changes.playlists_for_add_song.iter().cloned().collect(),
        playlists_to_remove: to_remove,
        valid_playlists: library.valid_playlists.clone(),
    })
}

fn first_missing<'a, T>(ids: &'a [T], valid: &HashSet<&T>) -> Option<&'a T>
where
    T: Eq + Hash,
{
    ids.iter().find(|id| !valid.contains(id))
}

fn reject(err: HighspotError, id: &impl Display) -> HighspotError {
    tracing::warn!(id = %id, "Rejecting change set: {}", err);
    err
}
