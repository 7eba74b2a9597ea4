// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tactile_pointer::ConfigError;

/// Geometry and release thresholds for a [`DrawerGestureController`](crate::DrawerGestureController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Width of the drawer panel; drags are clamped to `[-drawer_width_px, 0]`.
    pub drawer_width_px: f64,
    /// Leftward travel that closes the drawer regardless of speed.
    pub close_distance_px: f64,
    /// Leftward speed that closes the drawer regardless of travel.
    pub velocity_threshold_px_per_ms: f64,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            drawer_width_px: 280.0,
            close_distance_px: 70.0,
            velocity_threshold_px_per_ms: 0.3,
        }
    }
}

/// What to do with the drawer when a drag is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// Close the drawer.
    Close,
    /// Return to fully open.
    SnapOpen,
}

impl DrawerConfig {
    /// Sets the drawer width.
    #[must_use]
    pub fn with_drawer_width(mut self, px: f64) -> Self {
        self.drawer_width_px = px;
        self
    }

    /// Sets the close distance threshold.
    #[must_use]
    pub fn with_close_distance(mut self, px: f64) -> Self {
        self.close_distance_px = px;
        self
    }

    /// Sets the close velocity threshold.
    #[must_use]
    pub fn with_velocity_threshold(mut self, px_per_ms: f64) -> Self {
        self.velocity_threshold_px_per_ms = px_per_ms;
        self
    }

    /// Checks that every threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("drawer_width_px", self.drawer_width_px)?;
        ConfigError::check_positive("close_distance_px", self.close_distance_px)?;
        ConfigError::check_positive(
            "velocity_threshold_px_per_ms",
            self.velocity_threshold_px_per_ms,
        )?;
        if self.close_distance_px > self.drawer_width_px {
            return Err(ConfigError::Inverted {
                lower: "close_distance_px",
                upper: "drawer_width_px",
            });
        }
        Ok(())
    }

    /// Decides the outcome of a released drag.
    ///
    /// The drawer closes when the drag travelled further left than
    /// `close_distance_px`, or when it moved left at all faster than
    /// `velocity_threshold_px_per_ms`. Zero-length drags count as one
    /// millisecond.
    #[must_use]
    pub fn decide(&self, final_delta_x: f64, elapsed_ms: u64) -> ReleaseDecision {
        let velocity = final_delta_x.abs() / elapsed_ms.max(1) as f64;
        let far_enough = final_delta_x < -self.close_distance_px;
        let fast_enough = velocity > self.velocity_threshold_px_per_ms && final_delta_x < 0.0;
        if far_enough || fast_enough {
            ReleaseDecision::Close
        } else {
            ReleaseDecision::SnapOpen
        }
    }
}
