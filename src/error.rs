//! Error types for contour.
//!
//! The generators themselves never fail: degenerate input shows up as
//! non-finite coordinates in the emitted path. These errors are returned by
//! the opt-in `validate` methods on the parameter structs and by the color
//! parser.

use thiserror::Error;

/// A shape parameter combination that produces malformed geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Target rectangle has no area.
    #[error("invalid target size {width}x{height}: both dimensions must be positive")]
    InvalidDimensions {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },

    /// Fewer points or corners than a closed outline needs.
    #[error("{name} must be at least {min}, got {got}")]
    TooFewPoints {
        /// Parameter name.
        name: &'static str,
        /// Smallest accepted value.
        min: usize,
        /// Value provided.
        got: usize,
    },

    /// A parameter outside of its documented range.
    #[error("{name} must be within [{min}, {max}], got {got}")]
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
        /// Value provided.
        got: f64,
    },

    /// A divisor or exponent that must not be zero.
    #[error("{name} must not be zero")]
    Zero {
        /// Parameter name.
        name: &'static str,
    },
}

impl ShapeError {
    /// Check that a target rectangle is drawable.
    pub fn check_dimensions(width: f64, height: f64) -> Result<(), ShapeError> {
        if width > 0.0 && height > 0.0 {
            Ok(())
        } else {
            Err(ShapeError::InvalidDimensions { width, height })
        }
    }

    pub(crate) fn check_range(
        name: &'static str,
        got: f64,
        min: f64,
        max: f64,
    ) -> Result<(), ShapeError> {
        if (min..=max).contains(&got) {
            Ok(())
        } else {
            Err(ShapeError::OutOfRange {
                name,
                min,
                max,
                got,
            })
        }
    }

    pub(crate) fn check_count(
        name: &'static str,
        got: usize,
        min: usize,
    ) -> Result<(), ShapeError> {
        if got >= min {
            Ok(())
        } else {
            Err(ShapeError::TooFewPoints { name, min, got })
        }
    }

    pub(crate) fn check_non_zero(name: &'static str, got: f64) -> Result<(), ShapeError> {
        if got != 0.0 {
            Ok(())
        } else {
            Err(ShapeError::Zero { name })
        }
    }
}

/// Errors from parsing CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Input was empty or whitespace.
    #[error("empty color string")]
    Empty,

    /// `#` followed by something other than 3, 4, 6 or 8 hex digits.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Malformed `rgb()`/`rgba()` function.
    #[error("invalid color function: {0}")]
    InvalidFunction(String),

    /// Not a known color keyword.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = ShapeError::check_dimensions(0.0, 10.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid target size 0x10: both dimensions must be positive"
        );
        let err = ShapeError::check_count("point_count", 2, 3).unwrap_err();
        assert_eq!(err.to_string(), "point_count must be at least 3, got 2");
    }

    #[test]
    fn nan_is_out_of_range() {
        assert!(ShapeError::check_range("bend", f64::NAN, -1.0, 1.0).is_err());
        assert!(ShapeError::check_dimensions(f64::NAN, 1.0).is_err());
    }
}
