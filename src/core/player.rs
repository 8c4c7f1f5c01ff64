//! Player identification.
//!
//! The engine treats players as opaque tokens: a match is configured with
//! exactly two distinct [`PlayerId`]s and never interprets them. Display
//! names, colors, and "human vs computer" tagging live in the driving
//! loop, which maps its own labels onto the ids it supplied.

use serde::{Deserialize, Serialize};

/// Opaque player identifier.
///
/// The caller picks any two distinct values per match, e.g. `PlayerId::new(0)`
/// for the human side and `PlayerId::new(1)` for the computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.raw(), 0);
        assert_ne!(p0, p1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_serde() {
        let id = PlayerId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
