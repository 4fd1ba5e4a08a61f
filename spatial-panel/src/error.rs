//! Error handling for spatial-panel
//!
//! The controllers themselves never fail at runtime: a missed gesture or an
//! untracked hand is a normal boolean outcome re-evaluated next frame. The
//! only true fault class is invalid configuration, which is rejected at
//! construction time so degenerate numeric results (division by zero, NaN
//! propagation) cannot enter a controller's state.

use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Result type for spatial-panel operations
pub type PanelResult<T> = Result<T, PanelError>;

/// Errors that can occur when constructing spatial-panel widgets
#[derive(Error, Debug)]
pub enum PanelError {
    /// Window configuration rejected at construction time
    #[error("invalid window configuration: {reason}")]
    InvalidWindowConfig {
        /// Why the configuration was rejected
        reason: String,
    },

    /// Knob configuration rejected at construction time
    #[error("invalid knob configuration: {reason}")]
    InvalidKnobConfig {
        /// Why the configuration was rejected
        reason: String,
    },

    /// Two knobs on the same panel were bound to the same control tag
    #[error("duplicate knob binding: {binding}")]
    DuplicateBinding {
        /// Debug rendering of the offending binding tag
        binding: String,
    },
}

impl PanelError {
    /// Create an invalid window configuration error
    pub fn invalid_window_config(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        #[cfg(feature = "tracing")]
        warn!("invalid window configuration: {}", reason);
        Self::InvalidWindowConfig { reason }
    }

    /// Create an invalid knob configuration error
    pub fn invalid_knob_config(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        #[cfg(feature = "tracing")]
        warn!("invalid knob configuration: {}", reason);
        Self::InvalidKnobConfig { reason }
    }

    /// Create a duplicate binding error
    pub fn duplicate_binding(binding: impl Into<String>) -> Self {
        let binding = binding.into();
        #[cfg(feature = "tracing")]
        warn!("duplicate knob binding: {}", binding);
        Self::DuplicateBinding { binding }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanelError::invalid_knob_config("maximum <= minimum");
        assert!(err.to_string().contains("maximum <= minimum"));

        let err = PanelError::invalid_window_config("grab_distance must be positive");
        assert!(err.to_string().contains("grab_distance"));
    }

    #[test]
    fn test_duplicate_binding_display() {
        let err = PanelError::duplicate_binding("Volume");
        assert_eq!(err.to_string(), "duplicate knob binding: Volume");
    }
}
