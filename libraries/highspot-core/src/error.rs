/// Core error types for Highspot
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `HighspotError`
pub type Result<T> = std::result::Result<T, HighspotError>;

/// Which playlist rule a change set broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistFault {
    /// A `playlist_add_song` entry names a playlist the library lacks
    MissingAddSongTarget,
    /// A `playlist_remove` entry names a playlist the library lacks
    MissingRemoveTarget,
    /// The same playlist is both removed and given songs
    AddRemoveConflict,
}

impl std::fmt::Display for PlaylistFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            PlaylistFault::MissingAddSongTarget => {
                "target playlist for song-addition does not exist"
            }
            PlaylistFault::MissingRemoveTarget => "target playlist for removal does not exist",
            PlaylistFault::AddRemoveConflict => "conflicting add-song and remove on same playlist",
        };
        f.write_str(msg)
    }
}

/// Core error type for Highspot
///
/// Validation variants carry no offending ID; the validator logs it instead.
#[derive(Error, Debug)]
pub enum HighspotError {
    /// Playlist reference or conflict violation
    #[error("Playlist error: {0}")]
    Playlist(PlaylistFault),

    /// Dangling song reference
    #[error("Song error: referenced song does not exist")]
    Song,

    /// Dangling user reference
    #[error("User error: referenced user does not exist")]
    User,

    /// No integer above the current maximum playlist ID is left to assign
    #[error("Playlist IDs exhausted: the largest ID is already {}", i64::MAX)]
    PlaylistIdsExhausted,

    /// A mandatory operation list is absent from the change set
    #[error("Change set is missing required key `{0}`")]
    MissingOperation(&'static str),

    /// Source library file is zero bytes
    #[error("Source file is empty: {}", .0.display())]
    EmptySource(PathBuf),

    /// Change set file is zero bytes
    #[error("Changes file is empty: {}", .0.display())]
    EmptyChanges(PathBuf),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl HighspotError {
    /// Create a playlist error
    pub fn playlist(fault: PlaylistFault) -> Self {
        Self::Playlist(fault)
    }

    /// True for the referential and conflict checks run by the validator
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Playlist(_) | Self::Song | Self::User | Self::MissingOperation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_messages_are_fixed_per_fault() {
        assert_eq!(
            HighspotError::playlist(PlaylistFault::AddRemoveConflict).to_string(),
            "Playlist error: conflicting add-song and remove on same playlist"
        );
        assert_eq!(
            HighspotError::playlist(PlaylistFault::MissingRemoveTarget).to_string(),
            "Playlist error: target playlist for removal does not exist"
        );
    }

    #[test]
    fn boundary_errors_are_not_validation() {
        assert!(HighspotError::Song.is_validation());
        assert!(HighspotError::MissingOperation("playlist_remove").is_validation());
        assert!(!HighspotError::EmptySource(PathBuf::from("in.json")).is_validation());
    }
}
