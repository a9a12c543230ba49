//! Simulation-specific error types.
//!
//! Magnet profiles are validated eagerly when they are constructed, never
//! inside the per-step attraction routine — by the time a profile reaches the
//! simulation loop it is guaranteed usable, so the hot path carries no error
//! handling at all.
//!
//! ## Usage
//!
//! ```rust
//! use infinite_snake::error::SimResult;
//! use infinite_snake::magnet::MagnetProfile;
//!
//! fn build(range: f32) -> SimResult<MagnetProfile> {
//!     MagnetProfile {
//!         magnet_range: range,
//!         ..MagnetProfile::ELEMENT
//!     }
//!     .validated()
//! }
//! ```

use std::fmt;

/// Top-level error enum for the snake simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    /// Magnet range is zero or negative.  The falloff formula divides by the
    /// range, so this must be rejected before the profile is ever stepped.
    NonPositiveRange {
        /// The value that was rejected.
        value: f32,
    },

    /// Magnet range does not exceed the footprint radius, leaving no distance
    /// band in which attraction can occur.
    EmptyAttractionWindow {
        /// Configured maximum attraction distance.
        range: f32,
        /// Configured footprint radius (minimum-approach threshold).
        size: f32,
    },

    /// Magnet strength is negative; a magnet never pushes.
    NegativeStrength {
        /// The value that was rejected.
        value: f32,
    },

    /// Footprint radius is negative.
    NegativeSize {
        /// The value that was rejected.
        value: f32,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NonPositiveRange { value } => {
                write!(f, "magnet range must be > 0, got {}", value)
            }
            SimError::EmptyAttractionWindow { range, size } => write!(
                f,
                "magnet range {} must exceed footprint radius {} or nothing can ever be attracted",
                range, size
            ),
            SimError::NegativeStrength { value } => {
                write!(f, "magnet strength must be ≥ 0, got {}", value)
            }
            SimError::NegativeSize { value } => {
                write!(f, "footprint radius must be ≥ 0, got {}", value)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `range` is strictly positive and strictly greater
/// than `size`.
pub fn validate_magnet_range(range: f32, size: f32) -> SimResult<()> {
    if range <= 0.0 {
        Err(SimError::NonPositiveRange { value: range })
    } else if range <= size {
        Err(SimError::EmptyAttractionWindow { range, size })
    } else {
        Ok(())
    }
}

/// Returns an error if `strength` is negative.
pub fn validate_magnet_strength(strength: f32) -> SimResult<()> {
    if strength < 0.0 {
        Err(SimError::NegativeStrength { value: strength })
    } else {
        Ok(())
    }
}

/// Returns an error if `size` is negative.
pub fn validate_footprint(size: f32) -> SimResult<()> {
    if size < 0.0 {
        Err(SimError::NegativeSize { value: size })
    } else {
        Ok(())
    }
}
