//! Parameter validation errors.

use thiserror::Error;

/// Rejected layout parameter.
///
/// Layout itself never fails; only the constructors that accept raw numbers
/// from callers or manifests validate them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A length that must be non-negative was negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative {
        /// Parameter name
        field: &'static str,
        /// Rejected value
        value: f32,
    },

    /// A length was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Parameter name
        field: &'static str,
    },
}

/// Check that `value` is a finite, non-negative length.
pub fn check_length(field: &'static str, value: f32) -> Result<f32, LayoutError> {
    if !value.is_finite() {
        return Err(LayoutError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(LayoutError::Negative { field, value });
    }
    Ok(value)
}
