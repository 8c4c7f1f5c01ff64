//! Error taxonomy shared by configuration and play.
//!
//! Every error is a value returned synchronously from the call that
//! triggered it; the engine never prints. The driving loop translates
//! [`MoveError`] into retry prompts and treats [`ConfigError`] as fatal.

use crate::core::PlayerId;

/// A proposed move was rejected. Recoverable: the state is untouched and
/// the caller may submit another value.
///
/// The variants distinguish "outside the configured bounds" from "fewer
/// tokens remain than requested", so a driver can phrase its retry prompt
/// accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cannot take {requested} token(s): at least {min} must be taken")]
    BelowMinimum { requested: u32, min: u32 },

    #[error("cannot take {requested} token(s): at most {max} may be taken")]
    AboveMaximum { requested: u32, max: u32 },

    #[error("cannot take {requested} token(s): only {remaining} remain")]
    ExceedsRemaining { requested: u32, remaining: u32 },

    #[error("the match is already over")]
    MatchOver,
}

/// Malformed setup. Fatal to starting or continuing a match; surfaced
/// immediately and never retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("pile must hold at least one token")]
    EmptyPile,

    #[error("removal bounds must be positive")]
    ZeroBound,

    #[error("minimum removal {min} exceeds maximum removal {max}")]
    InvertedBounds { min: u32, max: u32 },

    #[error("a match needs two distinct players, got {0} twice")]
    IdenticalPlayers(PlayerId),

    #[error("starting player {0} is not part of this match")]
    UnknownStartingPlayer(PlayerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::ExceedsRemaining {
            requested: 4,
            remaining: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot take 4 token(s): only 3 remain"
        );

        let err = MoveError::AboveMaximum {
            requested: 9,
            max: 4,
        };
        assert_eq!(
            err.to_string(),
            "cannot take 9 token(s): at most 4 may be taken"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvertedBounds { min: 5, max: 2 };
        assert_eq!(
            err.to_string(),
            "minimum removal 5 exceeds maximum removal 2"
        );

        let err = ConfigError::UnknownStartingPlayer(PlayerId::new(3));
        assert_eq!(
            err.to_string(),
            "starting player Player 3 is not part of this match"
        );
    }
}
