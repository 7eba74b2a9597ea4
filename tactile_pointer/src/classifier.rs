// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-lock resolution and gesture naming.
//!
//! The axis lock stays [`AxisLock::Unresolved`] until the larger of the two
//! absolute deltas exceeds [`ClassifierConfig::lock_threshold_px`]. The axis
//! with the larger delta then wins for the rest of the session; ties go to
//! the vertical axis so that ambiguous motion falls back to native scrolling.
//!
//! A horizontal lock only holds while vertical drift stays within
//! [`ClassifierConfig::drift_tolerance_px`]. Exceeding it moves the session to
//! [`AxisLock::None`]; it never flips to vertical.

use tracing::debug;

use crate::{AxisLock, ConfigError, GestureSession};

/// Thresholds used by [`GestureClassifier`] and [`PointerSampler`](crate::PointerSampler).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierConfig {
    /// Travel (in either axis) needed before an axis is locked.
    pub lock_threshold_px: f64,
    /// Maximum vertical travel a horizontal lock tolerates.
    pub drift_tolerance_px: f64,
    /// Longest unresolved session still reported as a tap.
    pub tap_max_duration_ms: u64,
    /// Sessions with no sample for this long are cancelled.
    pub session_timeout_ms: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            lock_threshold_px: 10.0,
            drift_tolerance_px: 30.0,
            tap_max_duration_ms: 250,
            session_timeout_ms: 10_000,
        }
    }
}

impl ClassifierConfig {
    /// Sets the axis-lock threshold.
    #[must_use]
    pub fn with_lock_threshold(mut self, px: f64) -> Self {
        self.lock_threshold_px = px;
        self
    }

    /// Sets the vertical drift tolerance for horizontal locks.
    #[must_use]
    pub fn with_drift_tolerance(mut self, px: f64) -> Self {
        self.drift_tolerance_px = px;
        self
    }

    /// Sets the longest duration reported as a tap.
    #[must_use]
    pub fn with_tap_max_duration(mut self, ms: u64) -> Self {
        self.tap_max_duration_ms = ms;
        self
    }

    /// Sets the idle timeout after which a session is cancelled.
    #[must_use]
    pub fn with_session_timeout(mut self, ms: u64) -> Self {
        self.session_timeout_ms = ms;
        self
    }

    /// Checks that every threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("lock_threshold_px", self.lock_threshold_px)?;
        ConfigError::check_positive("drift_tolerance_px", self.drift_tolerance_px)?;
        ConfigError::check_duration("session_timeout_ms", self.session_timeout_ms)?;
        if self.tap_max_duration_ms >= self.session_timeout_ms {
            return Err(ConfigError::Inverted {
                lower: "tap_max_duration_ms",
                upper: "session_timeout_ms",
            });
        }
        Ok(())
    }
}

/// The intent of a gesture session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Still in progress and not yet locked to an axis.
    Pending,
    /// Locked horizontally with vertical drift inside tolerance.
    HorizontalSwipe,
    /// Locked vertically, not a pull-down.
    VerticalScroll,
    /// Locked vertically, moving down, and started at the top of its scroll
    /// container.
    PullDown,
    /// Released without locking, quickly.
    Tap,
    /// Released without locking after the tap window.
    Press,
    /// A horizontal lock that was invalidated by vertical drift.
    Abandoned,
}

/// Resolves axis locks and names gestures from accumulated deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureClassifier {
    config: ClassifierConfig,
}

impl GestureClassifier {
    /// Creates a classifier with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier with the given thresholds.
    pub fn with_config(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Updates `session.axis_lock` from its current distance.
    ///
    /// Returns `true` if the lock changed.
    pub fn resolve_lock(&self, session: &mut GestureSession) -> bool {
        let dx = session.distance.x.abs();
        let dy = session.distance.y.abs();
        let next = match session.axis_lock {
            AxisLock::Unresolved if dx.max(dy) > self.config.lock_threshold_px => {
                if dx > dy {
                    AxisLock::Horizontal
                } else {
                    AxisLock::Vertical
                }
            }
            AxisLock::Horizontal if dy > self.config.drift_tolerance_px => AxisLock::None,
            lock => lock,
        };
        if next == session.axis_lock {
            return false;
        }
        debug!(from = ?session.axis_lock, to = ?next, dx, dy, "axis lock changed");
        session.axis_lock = next;
        true
    }

    /// Names an in-progress session.
    #[must_use]
    pub fn classify(&self, session: &GestureSession) -> Gesture {
        match session.axis_lock {
            AxisLock::Unresolved => Gesture::Pending,
            AxisLock::Horizontal => Gesture::HorizontalSwipe,
            AxisLock::Vertical if session.pull_eligible && session.distance.y > 0.0 => {
                Gesture::PullDown
            }
            AxisLock::Vertical => Gesture::VerticalScroll,
            AxisLock::None => Gesture::Abandoned,
        }
    }

    /// Names a session that has just been released.
    ///
    /// Unlike [`classify`](Self::classify), this never returns
    /// [`Gesture::Pending`]: unresolved sessions become taps or presses.
    #[must_use]
    pub fn classify_release(&self, session: &GestureSession) -> Gesture {
        match self.classify(session) {
            Gesture::Pending if session.elapsed_ms() <= self.config.tap_max_duration_ms => {
                Gesture::Tap
            }
            Gesture::Pending => Gesture::Press,
            gesture => gesture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TouchSample;

    fn session_at(dx: f64, dy: f64, t: u64, pull_eligible: bool) -> GestureSession {
        let mut s = GestureSession::begin(TouchSample::new(100.0, 100.0, 0), pull_eligible);
        s.advance(TouchSample::new(100.0 + dx, 100.0 + dy, t));
        s
    }

    #[test]
    fn stays_unresolved_below_threshold() {
        let c = GestureClassifier::new();
        let mut s = session_at(7.0, -9.0, 16, false);
        assert!(!c.resolve_lock(&mut s));
        assert_eq!(s.axis_lock, AxisLock::Unresolved);
        assert_eq!(c.classify(&s), Gesture::Pending);
    }

    #[test]
    fn exactly_at_threshold_does_not_lock() {
        let c = GestureClassifier::new();
        let mut s = session_at(10.0, 0.0, 16, false);
        c.resolve_lock(&mut s);
        assert_eq!(s.axis_lock, AxisLock::Unresolved);
    }

    #[test]
    fn dominant_axis_wins() {
        let c = GestureClassifier::new();

        let mut h = session_at(-14.0, 6.0, 16, false);
        assert!(c.resolve_lock(&mut h));
        assert_eq!(h.axis_lock, AxisLock::Horizontal);
        assert_eq!(c.classify(&h), Gesture::HorizontalSwipe);

        let mut v = session_at(4.0, -12.0, 16, false);
        assert!(c.resolve_lock(&mut v));
        assert_eq!(v.axis_lock, AxisLock::Vertical);
        assert_eq!(c.classify(&v), Gesture::VerticalScroll);
    }

    #[test]
    fn diagonal_tie_locks_vertical() {
        let c = GestureClassifier::new();
        let mut s = session_at(12.0, 12.0, 16, false);
        c.resolve_lock(&mut s);
        assert_eq!(s.axis_lock, AxisLock::Vertical);
    }

    #[test]
    fn horizontal_lock_is_sticky_within_drift_tolerance() {
        let c = GestureClassifier::new();
        let mut s = session_at(-20.0, 0.0, 16, false);
        c.resolve_lock(&mut s);
        assert_eq!(s.axis_lock, AxisLock::Horizontal);

        // Large vertical move, no further horizontal travel.
        s.advance(TouchSample::new(80.0, 128.0, 32));
        assert!(!c.resolve_lock(&mut s));
        assert_eq!(s.axis_lock, AxisLock::Horizontal);
    }

    #[test]
    fn drift_beyond_tolerance_invalidates_horizontal_lock() {
        let c = GestureClassifier::new();
        let mut s = session_at(-20.0, 0.0, 16, false);
        c.resolve_lock(&mut s);

        s.advance(TouchSample::new(70.0, 131.0, 32));
        assert!(c.resolve_lock(&mut s));
        assert_eq!(s.axis_lock, AxisLock::None);
        assert_eq!(c.classify(&s), Gesture::Abandoned);

        // Never reclassified, however the finger moves afterwards.
        s.advance(TouchSample::new(70.0, 300.0, 48));
        assert!(!c.resolve_lock(&mut s));
        assert_eq!(s.axis_lock, AxisLock::None);
    }

    #[test]
    fn vertical_lock_ignores_later_horizontal_travel() {
        let c = GestureClassifier::new();
        let mut s = session_at(0.0, 20.0, 16, false);
        c.resolve_lock(&mut s);
        s.advance(TouchSample::new(400.0, 120.0, 32));
        assert!(!c.resolve_lock(&mut s));
        assert_eq!(s.axis_lock, AxisLock::Vertical);
    }

    #[test]
    fn pull_down_requires_eligibility_and_downward_travel() {
        let c = GestureClassifier::new();

        let mut eligible = session_at(0.0, 40.0, 16, true);
        c.resolve_lock(&mut eligible);
        assert_eq!(c.classify(&eligible), Gesture::PullDown);

        let mut upward = session_at(0.0, -40.0, 16, true);
        c.resolve_lock(&mut upward);
        assert_eq!(c.classify(&upward), Gesture::VerticalScroll);

        let mut scrolled = session_at(0.0, 40.0, 16, false);
        c.resolve_lock(&mut scrolled);
        assert_eq!(c.classify(&scrolled), Gesture::VerticalScroll);
    }

    #[test]
    fn release_turns_unresolved_sessions_into_taps_or_presses() {
        let c = GestureClassifier::new();
        assert_eq!(c.classify_release(&session_at(2.0, 1.0, 120, false)), Gesture::Tap);
        assert_eq!(c.classify_release(&session_at(2.0, 1.0, 250, false)), Gesture::Tap);
        assert_eq!(c.classify_release(&session_at(2.0, 1.0, 600, false)), Gesture::Press);
    }

    #[test]
    fn config_validation() {
        assert!(ClassifierConfig::default().validate().is_ok());
        assert_eq!(
            ClassifierConfig::default().with_lock_threshold(0.0).validate(),
            Err(ConfigError::NotPositive {
                field: "lock_threshold_px",
                value: 0.0
            })
        );
        assert!(
            ClassifierConfig::default()
                .with_drift_tolerance(f64::NAN)
                .validate()
                .is_err()
        );
        assert_eq!(
            ClassifierConfig::default().with_session_timeout(0).validate(),
            Err(ConfigError::ZeroDuration {
                field: "session_timeout_ms"
            })
        );
        assert_eq!(
            ClassifierConfig::default()
                .with_tap_max_duration(20_000)
                .validate(),
            Err(ConfigError::Inverted {
                lower: "tap_max_duration_ms",
                upper: "session_timeout_ms"
            })
        );
        assert!(
            GestureClassifier::with_config(ClassifierConfig::default().with_lock_threshold(-1.0))
                .is_err()
        );
    }
}
