/// ID types for Highspot library entities
use crate::error::{HighspotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier as it appears in a library document
///
/// Documents may use integers or strings for IDs. Ordering puts every
/// integer before every string; integers compare numerically and strings
/// lexicographically. `1` and `"1"` are different IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    /// Integer ID (`7`)
    Int(i64),
    /// String ID (`"7"` or `"abc"`)
    Text(String),
}

impl EntityId {
    /// Numeric value used for playlist numbering, if the ID has one
    pub fn numeric(&self) -> Option<i64> {
        match self {
            EntityId::Int(n) => Some(*n),
            EntityId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(EntityId);

        impl $name {
            /// Create a new ID
            pub fn new(id: impl Into<EntityId>) -> Self {
                Self(id.into())
            }

            /// Get the underlying token
            pub fn as_entity(&self) -> &EntityId {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(EntityId::Int(value))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(EntityId::from(value))
            }
        }
    };
}

typed_id!(
    /// Playlist identifier
    PlaylistId
);

typed_id!(
    /// Song identifier
    SongId
);

typed_id!(
    /// User identifier
    UserId
);

impl PlaylistId {
    /// ID for the next new playlist: one past the largest numeric ID, or `1`
    ///
    /// Recomputed from whatever IDs are passed in; there is no cached counter,
    /// so freed numbers below the maximum are never handed out again. Fails
    /// once the maximum is `i64::MAX` rather than repeat an existing ID.
    pub fn next_after<'a>(ids: impl IntoIterator<Item = &'a PlaylistId>) -> Result<Self> {
        let next = match ids.into_iter().filter_map(|id| id.0.numeric()).max() {
            None => 1,
            Some(max) => max
                .checked_add(1)
                .ok_or(HighspotError::PlaylistIdsExhausted)?,
        };
        Ok(Self(EntityId::Int(next)))
    }
}
