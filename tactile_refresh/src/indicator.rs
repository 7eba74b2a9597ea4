// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tactile_pointer::{ConfigError, Transition};

use crate::PullState;

/// Threshold for a [`PullToRefreshController`](crate::PullToRefreshController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullConfig {
    /// Pull distance beyond which a release triggers a refresh. Also the
    /// largest height the indicator is drawn at.
    pub threshold_px: f64,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self { threshold_px: 80.0 }
    }
}

impl PullConfig {
    /// Sets the refresh threshold.
    #[must_use]
    pub fn with_threshold(mut self, px: f64) -> Self {
        self.threshold_px = px;
        self
    }

    /// Checks that the threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("threshold_px", self.threshold_px)
    }
}

/// The prompt shown next to the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PullLabel {
    /// "Pull to refresh".
    Pull,
    /// "Release to refresh".
    Release,
    /// A refresh is running.
    Refreshing,
}

/// Visual parameters for the pull-to-refresh indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullIndicator {
    /// Height of the indicator; never exceeds the threshold.
    pub height_px: f64,
    /// Pull progress towards the threshold in `[0, 1]`.
    pub progress: f64,
    /// Prompt to show.
    pub label: PullLabel,
    /// How to animate to these values.
    pub transition: Transition,
}

impl PullIndicator {
    /// Maps pull state to paint parameters.
    #[must_use]
    pub fn from_state(state: &PullState, config: &PullConfig, transition: Transition) -> Self {
        let threshold = config.threshold_px;
        if state.is_refreshing {
            return Self {
                height_px: threshold,
                progress: 1.0,
                label: PullLabel::Refreshing,
                transition,
            };
        }
        let height_px = state.pull_distance_px.clamp(0.0, threshold);
        Self {
            height_px,
            progress: height_px / threshold,
            label: if state.is_armed {
                PullLabel::Release
            } else {
                PullLabel::Pull
            },
            transition,
        }
    }

    /// Returns `true` if nothing needs to be drawn.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.height_px == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulled(distance: f64, armed: bool) -> PullState {
        PullState {
            pull_distance_px: distance,
            is_armed: armed,
            is_refreshing: false,
        }
    }

    #[test]
    fn height_is_capped_at_threshold() {
        let config = PullConfig::default();
        let i = PullIndicator::from_state(&pulled(40.0, false), &config, Transition::Track);
        assert_eq!(i.height_px, 40.0);
        assert_eq!(i.progress, 0.5);
        assert_eq!(i.label, PullLabel::Pull);

        let i = PullIndicator::from_state(&pulled(150.0, true), &config, Transition::Track);
        assert_eq!(i.height_px, 80.0);
        assert_eq!(i.progress, 1.0);
        assert_eq!(i.label, PullLabel::Release);
    }

    #[test]
    fn refreshing_holds_full_height() {
        let state = PullState {
            pull_distance_px: 0.0,
            is_armed: false,
            is_refreshing: true,
        };
        let i = PullIndicator::from_state(&state, &PullConfig::default(), Transition::Settle);
        assert_eq!(i.height_px, 80.0);
        assert_eq!(i.label, PullLabel::Refreshing);
    }

    #[test]
    fn idle_is_hidden() {
        let i = PullIndicator::from_state(
            &PullState::default(),
            &PullConfig::default(),
            Transition::None,
        );
        assert!(i.is_hidden());
    }

    #[test]
    fn config_validation() {
        assert!(PullConfig::default().validate().is_ok());
        assert!(PullConfig::default().with_threshold(0.0).validate().is_err());
    }
}
