//! Change applicator
//!
//! Two passes over an already-validated change set:
//!
//! - playlist edits: drop removed playlists and append songs to targeted ones,
//!   keeping the surviving playlists in document order
//! - playlist creation: turn each `user_add_playlist` request into a new
//!   playlist numbered from the current maximum ID
//!
//! Nothing here checks references. Callers go through [`crate::apply_changes`]
//! unless they have run [`crate::validate`] themselves.

use crate::error::Result;
use crate::types::{AddSong, ChangeSet, LibraryDocument, NewPlaylistRequest, Playlist, PlaylistId};
use crate::validate::ValidatedChanges;

/// Build the updated document; the input is left untouched
///
/// Fails only when no fresh playlist ID can be assigned, in which case no
/// document is produced.
pub fn apply_validated(
    document: &LibraryDocument,
    changes: &ChangeSet,
    validated: &ValidatedChanges,
) -> Result<LibraryDocument> {
    tracing::debug!(
        playlists_before = validated.valid_playlists.len(),
        "Applying change set"
    );

    let mut playlists =
        apply_playlist_edits(document.playlists(), &changes.playlist_add_song, validated);
    let created = append_new_playlists(&mut playlists, &changes.user_add_playlist)?;

    let mut updated = document.clone();
    updated.playlists = if document.playlists.is_some() || !created.is_empty() {
        Some(playlists)
    } else {
        None
    };

    tracing::info!(
        removed = validated.playlists_to_remove.len(),
        songs_added = changes.playlist_add_song.len(),
        created = created.len(),
        "Change set applied"
    );

    Ok(updated)
}

/// Drop removed playlists and append songs to the targeted ones
///
/// A playlist that receives songs gets every matching `playlist_add_song`
/// entry, in change order, and its whole song list is then sorted ascending.
/// Playlists without add-song entries keep their songs exactly as they were.
pub fn apply_playlist_edits(
    playlists: &[Playlist],
    add_song: &[AddSong],
    validated: &ValidatedChanges,
) -> Vec<Playlist> {
    playlists
        .iter()
        .filter(|playlist| !validated.playlists_to_remove.contains(&playlist.id))
        .map(|playlist| {
            let mut playlist = playlist.clone();
            if validated.playlists_for_add_song.contains(&playlist.id) {
                let songs: Vec<_> = add_song
                    .iter()
                    .filter(|change| change.playlist_id == playlist.id)
                    .map(|change| change.song_id.clone())
                    .collect();
                playlist.append_songs(songs);
            }
            playlist
        })
        .collect()
}

/// Append one playlist per request, returning the IDs handed out
///
/// Each ID is one past the largest ID in `playlists` at the moment the request
/// is handled, so later requests in the batch see earlier ones.
pub fn append_new_playlists(
    playlists: &mut Vec<Playlist>,
    requests: &[NewPlaylistRequest],
) -> Result<Vec<PlaylistId>> {
    let mut created = Vec::with_capacity(requests.len());
    for request in requests {
        let id = PlaylistId::next_after(playlists.iter().map(|p| &p.id))?;
        tracing::debug!(playlist_id = %id, user_id = %request.user_id, "Creating playlist");
        playlists.push(request.clone().into_playlist(id.clone()));
        created.push(id);
    }
    Ok(created)
}
