// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// A rejected gesture configuration value.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A distance, width, or velocity that must be strictly positive was not.
    #[error("`{field}` must be a positive, finite number (got {value})")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A duration that must be non-zero was zero.
    #[error("`{field}` must be a non-zero duration")]
    ZeroDuration {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Two related values were given in the wrong order.
    #[error("`{lower}` must be smaller than `{upper}`")]
    Inverted {
        /// Name of the field that must be smaller.
        lower: &'static str,
        /// Name of the field that must be larger.
        upper: &'static str,
    },
}

impl ConfigError {
    /// Checks that `value` is strictly positive and finite.
    pub fn check_positive(field: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Self::NotPositive { field, value })
        }
    }

    /// Checks that a millisecond duration is non-zero.
    pub fn check_duration(field: &'static str, value_ms: u64) -> Result<(), Self> {
        if value_ms == 0 {
            Err(Self::ZeroDuration { field })
        } else {
            Ok(())
        }
    }
}
