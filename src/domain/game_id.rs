//! Type-safe game identifier.
//!
//! [`GameId`] wraps the integer identifier the API assigns to each game
//! (e.g. `2023020718`) so it cannot be confused with seasons or scores.

use std::fmt;

use serde::Deserialize;

/// Unique identifier of a single game.
///
/// Encodes season, game type and sequence number, but the crate treats it
/// as opaque. Used to build landing URLs and carried on every goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    /// Creates a `GameId` from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GameId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<GameId> for u64 {
    fn from(id: GameId) -> Self {
        id.0
    }
}
