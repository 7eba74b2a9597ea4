// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer sampler: one gesture session per bound surface.
//!
//! ## Usage
//!
//! 1) Call [`PointerSampler::start`] on touch-down. A second touch-down while a
//!    session is active is ignored.
//! 2) Call [`PointerSampler::move_to`] for every move, in delivery order.
//! 3) Call [`PointerSampler::end`] on release or [`PointerSampler::cancel`] on
//!    interruption. Both always clear the session.
//! 4) Optionally call [`PointerSampler::poll_timeout`] from a frame or timer
//!    callback so a session whose release was never delivered still ends.
//!
//! Moves, ends, and cancels without an active session return `None`.

use tracing::{debug, trace};

use crate::{ConfigError, Gesture, GestureClassifier, GestureSession, TouchSample};

/// A change to the sampler's active session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionEvent {
    /// A new session began.
    Started(GestureSession),
    /// The active session received a sample.
    Moved {
        /// Session state after the sample was applied.
        session: GestureSession,
        /// Whether this sample changed the axis lock.
        lock_changed: bool,
    },
    /// The session was released normally.
    Ended {
        /// Session state including the final sample.
        session: GestureSession,
        /// Classification at release.
        gesture: Gesture,
    },
    /// The session was interrupted. Consumers must revert without acting.
    Cancelled(GestureSession),
}

impl SessionEvent {
    /// Returns the session this event describes.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        match self {
            Self::Started(session)
            | Self::Moved { session, .. }
            | Self::Ended { session, .. }
            | Self::Cancelled(session) => session,
        }
    }

    /// Returns `true` if this event ends the session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended { .. } | Self::Cancelled(_))
    }
}

/// Tracks raw pointer input for one surface.
#[derive(Clone, Debug, Default)]
pub struct PointerSampler {
    classifier: GestureClassifier,
    active: Option<GestureSession>,
}

impl PointerSampler {
    /// Creates a sampler with the default classifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sampler with the given classifier.
    #[must_use]
    pub fn with_classifier(classifier: GestureClassifier) -> Self {
        Self {
            classifier,
            active: None,
        }
    }

    /// Creates a sampler with a classifier built from `config`.
    pub fn try_with_config(config: crate::ClassifierConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_classifier(GestureClassifier::with_config(config)?))
    }

    /// Returns the classifier in use.
    #[must_use]
    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    /// Returns the active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.active.as_ref()
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begins a session at `sample`.
    ///
    /// `pull_eligible` records whether the surface's scroll container is at its
    /// top-most position right now; it is not re-evaluated later. Returns
    /// `None` if a session is already active.
    pub fn start(&mut self, sample: TouchSample, pull_eligible: bool) -> Option<SessionEvent> {
        if self.active.is_some() {
            trace!("ignoring touch start while a session is active");
            return None;
        }
        let session = GestureSession::begin(sample, pull_eligible);
        self.active = Some(session);
        debug!(x = sample.x, y = sample.y, pull_eligible, "session started");
        Some(SessionEvent::Started(session))
    }

    /// Applies a move sample to the active session.
    ///
    /// A sample arriving after the session timeout cancels the session instead.
    pub fn move_to(&mut self, sample: TouchSample) -> Option<SessionEvent> {
        let session = self.active.as_mut()?;
        if sample.elapsed_since(&session.last) > self.classifier.config().session_timeout_ms {
            debug!("move arrived after session timeout");
            return self.cancel();
        }
        session.advance(sample);
        let lock_changed = self.classifier.resolve_lock(session);
        trace!(dx = session.distance.x, dy = session.distance.y, "session moved");
        Some(SessionEvent::Moved {
            session: *session,
            lock_changed,
        })
    }

    /// Releases the active session with its final sample.
    pub fn end(&mut self, sample: TouchSample) -> Option<SessionEvent> {
        let mut session = self.active.take()?;
        session.advance(sample);
        self.classifier.resolve_lock(&mut session);
        let gesture = self.classifier.classify_release(&session);
        debug!(?gesture, elapsed_ms = session.elapsed_ms(), "session ended");
        Some(SessionEvent::Ended { session, gesture })
    }

    /// Cancels the active session.
    pub fn cancel(&mut self) -> Option<SessionEvent> {
        let session = self.active.take()?;
        debug!("session cancelled");
        Some(SessionEvent::Cancelled(session))
    }

    /// Cancels the active session if it has been idle for longer than the
    /// session timeout at `now_ms`.
    pub fn poll_timeout(&mut self, now_ms: u64) -> Option<SessionEvent> {
        let last = self.active.as_ref()?.last.timestamp_ms;
        if now_ms.saturating_sub(last) > self.classifier.config().session_timeout_ms {
            debug!(now_ms, "session timed out");
            self.cancel()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AxisLock, ClassifierConfig};

    fn sample(x: f64, y: f64, t: u64) -> TouchSample {
        TouchSample::new(x, y, t)
    }

    #[test]
    fn move_and_end_without_start_are_ignored() {
        let mut sampler = PointerSampler::new();
        assert_eq!(sampler.move_to(sample(1.0, 1.0, 1)), None);
        assert_eq!(sampler.end(sample(1.0, 1.0, 2)), None);
        assert_eq!(sampler.cancel(), None);
        assert_eq!(sampler.poll_timeout(1_000_000), None);
        assert!(!sampler.is_active());
    }

    #[test]
    fn second_start_is_ignored_while_active() {
        let mut sampler = PointerSampler::new();
        assert!(sampler.start(sample(10.0, 10.0, 0), false).is_some());
        assert_eq!(sampler.start(sample(50.0, 50.0, 5), true), None);

        let session = sampler.session().unwrap();
        assert_eq!(session.start, sample(10.0, 10.0, 0));
        assert!(!session.pull_eligible);
    }

    #[test]
    fn move_reports_lock_change_once() {
        let mut sampler = PointerSampler::new();
        sampler.start(sample(100.0, 100.0, 0), false);

        let Some(SessionEvent::Moved { lock_changed, .. }) = sampler.move_to(sample(95.0, 100.0, 8))
        else {
            panic!("expected a move event");
        };
        assert!(!lock_changed);

        let Some(SessionEvent::Moved {
            session,
            lock_changed,
        }) = sampler.move_to(sample(85.0, 101.0, 16))
        else {
            panic!("expected a move event");
        };
        assert!(lock_changed);
        assert_eq!(session.axis_lock, AxisLock::Horizontal);

        let Some(SessionEvent::Moved { lock_changed, .. }) =
            sampler.move_to(sample(60.0, 102.0, 24))
        else {
            panic!("expected a move event");
        };
        assert!(!lock_changed);
    }

    #[test]
    fn end_applies_final_sample_and_clears_session() {
        let mut sampler = PointerSampler::new();
        sampler.start(sample(200.0, 100.0, 0), false);
        sampler.move_to(sample(185.0, 101.0, 20));

        let event = sampler.end(sample(170.0, 101.0, 50)).unwrap();
        assert!(event.is_terminal());
        let SessionEvent::Ended { session, gesture } = event else {
            panic!("expected an end event");
        };
        assert_eq!(session.distance_x(), -30.0);
        assert_eq!(session.elapsed_ms(), 50);
        assert_eq!(gesture, Gesture::HorizontalSwipe);
        assert!(!sampler.is_active());

        // A new session can begin immediately.
        assert!(sampler.start(sample(0.0, 0.0, 60), false).is_some());
    }

    #[test]
    fn quick_release_without_travel_is_a_tap() {
        let mut sampler = PointerSampler::new();
        sampler.start(sample(40.0, 40.0, 0), true);
        let Some(SessionEvent::Ended { gesture, .. }) = sampler.end(sample(42.0, 41.0, 90)) else {
            panic!("expected an end event");
        };
        assert_eq!(gesture, Gesture::Tap);
    }

    #[test]
    fn cancel_clears_session() {
        let mut sampler = PointerSampler::new();
        sampler.start(sample(0.0, 0.0, 0), true);
        sampler.move_to(sample(0.0, 150.0, 100));
        let Some(SessionEvent::Cancelled(session)) = sampler.cancel() else {
            panic!("expected a cancel event");
        };
        assert_eq!(session.distance_y(), 150.0);
        assert!(!sampler.is_active());
    }

    #[test]
    fn idle_session_times_out() {
        let config = ClassifierConfig::default().with_session_timeout(500);
        let mut sampler = PointerSampler::try_with_config(config).unwrap();
        sampler.start(sample(0.0, 0.0, 1_000), false);
        sampler.move_to(sample(0.0, 5.0, 1_200));

        assert_eq!(sampler.poll_timeout(1_700), None);
        assert!(matches!(
            sampler.poll_timeout(1_701),
            Some(SessionEvent::Cancelled(_))
        ));
        assert!(!sampler.is_active());
    }

    #[test]
    fn late_move_cancels_instead_of_moving() {
        let config = ClassifierConfig::default().with_session_timeout(500);
        let mut sampler = PointerSampler::try_with_config(config).unwrap();
        sampler.start(sample(0.0, 0.0, 0), false);
        assert!(matches!(
            sampler.move_to(sample(0.0, 50.0, 900)),
            Some(SessionEvent::Cancelled(_))
        ));
        assert_eq!(sampler.end(sample(0.0, 50.0, 910)), None);
    }
}
