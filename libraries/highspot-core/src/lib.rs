//! Highspot Core
//!
//! Validation and apply pipeline for batches of music-library edits.
//!
//! A [`LibraryDocument`] (playlists, songs, users) and a [`ChangeSet`]
//! (playlist removals, songs to append, playlists to create) go through three
//! stages:
//!
//! - **Index**: [`ChangeIndex`] and [`LibraryIndex`] flatten both inputs into ID lists
//! - **Validate**: [`validate`] checks references and conflicts, failing fast
//! - **Apply**: [`apply_validated`] builds the new document
//!
//! [`apply_changes`] runs all three. It never touches its input, and nothing is
//! applied unless validation passes.
//!
//! # Example
//!
//! ```rust
//! use highspot_core::{apply_changes, ChangeOptions, ChangeSet, LibraryDocument};
//! use highspot_core::types::{PlaylistId, SongId};
//!
//! let document: LibraryDocument = serde_json::from_str(
//!     r#"{"playlists": [{"id": 1, "song_ids": [5]}], "songs": [{"id": 5}, {"id": 7}], "users": []}"#,
//! ).unwrap();
//! let changes: ChangeSet = serde_json::from_str(
//!     r#"{"playlist_remove": [], "playlist_add_song": [{"playlist_id": 1, "song_id": 7}]}"#,
//! ).unwrap();
//!
//! let updated = apply_changes(&document, &changes, &ChangeOptions::default()).unwrap();
//! let playlist = updated.playlist(&PlaylistId::from(1)).unwrap();
//! assert_eq!(playlist.songs(), &[SongId::from(5), SongId::from(7)]);
//! ```

#![forbid(unsafe_code)]

pub mod apply;
pub mod document;
pub mod error;
pub mod index;
pub mod types;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use apply::{append_new_playlists, apply_playlist_edits, apply_validated};
pub use document::{load_document, save_document, to_sorted_json, DocumentKind};
pub use error::{HighspotError, PlaylistFault, Result};
pub use index::{ChangeIndex, LibraryIndex};
pub use types::{ChangeSet, LibraryDocument, RemovePolicy};
pub use validate::{validate, ValidatedChanges};

/// Knobs for the pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeOptions {
    /// Whether a change set must carry `playlist_remove`
    #[serde(default)]
    pub remove_policy: RemovePolicy,
}

/// Validate `changes` against `document` and return the updated document
pub fn apply_changes(
    document: &LibraryDocument,
    changes: &ChangeSet,
    options: &ChangeOptions,
) -> Result<LibraryDocument> {
    let change_index = ChangeIndex::build(changes, options.remove_policy)?;
    let library_index = LibraryIndex::build(document);
    tracing::debug!(
        playlists = library_index.valid_playlists.len(),
        songs = library_index.valid_songs.len(),
        users = library_index.valid_users.len(),
        "Indexed library"
    );

    let validated = validate(&change_index, &library_index)?;
    apply_validated(document, changes, &validated)
}
