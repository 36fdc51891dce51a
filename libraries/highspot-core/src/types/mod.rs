mod changes;
mod ids;
mod library;
mod playlist;
mod song;
mod user;

pub use changes::{AddSong, ChangeSet, NewPlaylistRequest, RemovePolicy};
pub use ids::{EntityId, PlaylistId, SongId, UserId};
pub use library::LibraryDocument;
pub use playlist::Playlist;
pub use song::Song;
pub use user::User;
