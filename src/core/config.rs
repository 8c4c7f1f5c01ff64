//! Match configuration: pile size and removal bounds.
//!
//! A [`MatchConfig`] is validated once at construction and immutable for
//! the life of the match. Legality of individual takes is a pure function
//! of the config plus the current pile, so both the state machine and the
//! strategies query it here.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, MoveError};

/// Immutable match configuration.
///
/// `max_remove < initial_pile` is the usual setup but is not required:
/// on the final turns the practical ceiling on a take is
/// `min(max_remove, remaining)`, and legality accounts for that.
///
/// ## Example
///
/// ```
/// use rust_nim::core::MatchConfig;
///
/// let config = MatchConfig::new(21, 1, 4).unwrap();
/// assert!(config.is_legal(21, 4));
/// assert!(!config.is_legal(3, 4)); // only 3 remain
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    initial_pile: u32,
    min_remove: u32,
    max_remove: u32,
}

impl Default for MatchConfig {
    /// The classic 21-token game: take 1 to 4 tokens per turn.
    fn default() -> Self {
        Self {
            initial_pile: 21,
            min_remove: 1,
            max_remove: 4,
        }
    }
}

impl MatchConfig {
    /// Create a validated configuration.
    ///
    /// Fails if the pile is empty, either bound is zero, or the bounds
    /// are inverted.
    pub fn new(initial_pile: u32, min_remove: u32, max_remove: u32) -> Result<Self, ConfigError> {
        if initial_pile == 0 {
            return Err(ConfigError::EmptyPile);
        }
        if min_remove == 0 || max_remove == 0 {
            return Err(ConfigError::ZeroBound);
        }
        if min_remove > max_remove {
            return Err(ConfigError::InvertedBounds {
                min: min_remove,
                max: max_remove,
            });
        }

        Ok(Self {
            initial_pile,
            min_remove,
            max_remove,
        })
    }

    /// Tokens in the pile at match start.
    #[must_use]
    pub const fn initial_pile(&self) -> u32 {
        self.initial_pile
    }

    /// Smallest take allowed on a turn.
    #[must_use]
    pub const fn min_remove(&self) -> u32 {
        self.min_remove
    }

    /// Largest take allowed on a turn.
    #[must_use]
    pub const fn max_remove(&self) -> u32 {
        self.max_remove
    }

    /// Is `take` legal with `remaining` tokens left?
    ///
    /// True iff `min_remove <= take <= max_remove` and `take <= remaining`.
    #[must_use]
    pub fn is_legal(&self, remaining: u32, take: u32) -> bool {
        take >= self.min_remove && take <= self.max_remove && take <= remaining
    }

    /// Check a take, reporting which bound it violates.
    ///
    /// Bound violations are reported before `ExceedsRemaining`, so a take
    /// that is both too large for the config and larger than the pile is
    /// flagged as `AboveMaximum`.
    pub fn check(&self, remaining: u32, take: u32) -> Result<(), MoveError> {
        if take < self.min_remove {
            return Err(MoveError::BelowMinimum {
                requested: take,
                min: self.min_remove,
            });
        }
        if take > self.max_remove {
            return Err(MoveError::AboveMaximum {
                requested: take,
                max: self.max_remove,
            });
        }
        if take > remaining {
            return Err(MoveError::ExceedsRemaining {
                requested: take,
                remaining,
            });
        }
        Ok(())
    }

    /// The takes legal right now: `min_remove ..= min(max_remove, remaining)`.
    ///
    /// Empty when `remaining < min_remove` (in particular on an empty pile).
    #[must_use]
    pub fn legal_moves(&self, remaining: u32) -> std::ops::RangeInclusive<u32> {
        self.min_remove..=self.max_remove.min(remaining)
    }
}
