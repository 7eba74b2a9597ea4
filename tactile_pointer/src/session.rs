// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session: the bounded lifetime of one continuous touch.
//!
//! ## Usage
//!
//! 1) Begin a session with [`GestureSession::begin`] from the touch-down sample.
//! 2) On each move, call [`GestureSession::advance`] to get the delta since the
//!    previous sample; the accumulated [`GestureSession::distance`] is updated.
//! 3) Let a [`GestureClassifier`](crate::GestureClassifier) resolve the axis lock.
//! 4) Drop the session when the touch ends or is cancelled.
//!
//! Sessions are normally owned by a [`PointerSampler`](crate::PointerSampler),
//! which guarantees at most one active session per surface.

use kurbo::Vec2;

use crate::TouchSample;

/// The resolved dominant direction of a gesture session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisLock {
    /// Not enough travel yet to pick an axis.
    #[default]
    Unresolved,
    /// Locked to the horizontal axis for the rest of the session.
    Horizontal,
    /// Locked to the vertical axis for the rest of the session.
    Vertical,
    /// A horizontal lock was invalidated by vertical drift; no axis owns the
    /// session any more.
    None,
}

impl AxisLock {
    /// Returns `true` once the session has been locked or invalidated.
    #[must_use]
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

/// State of one active touch on a bound surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// The touch-down sample.
    pub start: TouchSample,
    /// The most recent sample.
    pub last: TouchSample,
    /// Current axis lock.
    pub axis_lock: AxisLock,
    /// Offset of `last` from `start`.
    pub distance: Vec2,
    /// Whether the surface's scroll container was at its top-most position at
    /// touch-down. Fixed for the lifetime of the session.
    pub pull_eligible: bool,
}

impl GestureSession {
    /// Begins a session at `sample`.
    #[must_use]
    pub fn begin(sample: TouchSample, pull_eligible: bool) -> Self {
        Self {
            start: sample,
            last: sample,
            axis_lock: AxisLock::Unresolved,
            distance: Vec2::ZERO,
            pull_eligible,
        }
    }

    /// Records `sample` and returns the movement delta since the previous one.
    pub fn advance(&mut self, sample: TouchSample) -> Vec2 {
        let delta = sample.offset_from(&self.last);
        self.last = sample;
        self.distance = sample.offset_from(&self.start);
        delta
    }

    /// Horizontal travel from the start sample.
    #[must_use]
    pub fn distance_x(&self) -> f64 {
        self.distance.x
    }

    /// Vertical travel from the start sample.
    #[must_use]
    pub fn distance_y(&self) -> f64 {
        self.distance.y
    }

    /// Milliseconds between the start sample and the latest one.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.last.elapsed_since(&self.start)
    }

    /// Average horizontal speed in pixels per millisecond.
    ///
    /// Zero-length sessions are treated as lasting one millisecond.
    #[must_use]
    pub fn velocity_x(&self) -> f64 {
        self.distance.x.abs() / self.elapsed_ms().max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_starts_unresolved_with_no_travel() {
        let s = GestureSession::begin(TouchSample::new(10.0, 20.0, 5), true);
        assert_eq!(s.axis_lock, AxisLock::Unresolved);
        assert_eq!(s.distance, Vec2::ZERO);
        assert_eq!(s.start, s.last);
        assert!(s.pull_eligible);
    }

    #[test]
    fn advance_returns_incremental_delta_and_tracks_total() {
        let mut s = GestureSession::begin(TouchSample::new(0.0, 0.0, 0), false);

        assert_eq!(s.advance(TouchSample::new(5.0, 3.0, 10)), Vec2::new(5.0, 3.0));
        assert_eq!(s.advance(TouchSample::new(8.0, 7.0, 20)), Vec2::new(3.0, 4.0));
        assert_eq!(s.distance, Vec2::new(8.0, 7.0));
        assert_eq!(s.elapsed_ms(), 20);
    }

    #[test]
    fn negative_travel() {
        let mut s = GestureSession::begin(TouchSample::new(100.0, 100.0, 0), false);
        s.advance(TouchSample::new(90.0, 85.0, 8));
        assert_eq!(s.distance_x(), -10.0);
        assert_eq!(s.distance_y(), -15.0);
    }

    #[test]
    fn velocity_uses_absolute_horizontal_travel() {
        let mut s = GestureSession::begin(TouchSample::new(200.0, 0.0, 1000), false);
        s.advance(TouchSample::new(170.0, 0.0, 1050));
        assert!((s.velocity_x() - 0.6).abs() < 1e-9, "30px over 50ms");
    }

    #[test]
    fn zero_duration_velocity_is_finite() {
        let mut s = GestureSession::begin(TouchSample::new(0.0, 0.0, 7), false);
        s.advance(TouchSample::new(-12.0, 0.0, 7));
        assert_eq!(s.velocity_x(), 12.0);
    }
}
