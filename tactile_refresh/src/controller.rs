// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;

use tactile_haptics::{HapticEmitter, HapticIntensity};
use tactile_pointer::{AxisLock, ConfigError, GestureSession, SessionEvent, Transition};
use tracing::{debug, trace};

use crate::action::InFlight;
use crate::{PendingRefresh, PullConfig, PullIndicator, RefreshAction};

/// Pull state visible to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PullState {
    /// Raw downward travel of the current pull. Not clamped.
    pub pull_distance_px: f64,
    /// Whether releasing now would refresh.
    pub is_armed: bool,
    /// Whether a refresh is in flight.
    pub is_refreshing: bool,
}

/// Phase of the pull-to-refresh state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PullPhase {
    /// No pull in progress.
    #[default]
    Idle,
    /// Pulling, below the threshold.
    Pulling,
    /// Pulling, beyond the threshold.
    Armed,
    /// A refresh is in flight.
    Refreshing,
}

/// What the host should do after a session event.
#[derive(Debug)]
pub struct PullResponse<F> {
    /// Suppress the surface's native scroll/overscroll for this event.
    pub prevent_default: bool,
    /// A refresh started by this event.
    pub refresh: Option<PendingRefresh<F>>,
}

impl<F> PullResponse<F> {
    fn pass() -> Self {
        Self {
            prevent_default: false,
            refresh: None,
        }
    }

    fn tracking(prevent_default: bool) -> Self {
        Self {
            prevent_default,
            refresh: None,
        }
    }
}

/// Pull-to-refresh controller for one scroll container.
///
/// A pull is only considered when the session started with the container
/// scrolled to the top and no refresh is in flight. Releasing beyond the
/// threshold emits one medium haptic and starts the bound
/// [`RefreshAction`]; at most one refresh runs at a time.
#[derive(Debug)]
pub struct PullToRefreshController<R, H> {
    config: PullConfig,
    action: R,
    haptics: H,
    pull_distance_px: f64,
    armed: bool,
    tracking: bool,
    accepted: bool,
    in_flight: Rc<Cell<bool>>,
    transition: Transition,
}

impl<R: RefreshAction, H: HapticEmitter> PullToRefreshController<R, H> {
    /// Creates a controller with the default threshold.
    pub fn new(action: R, haptics: H) -> Self {
        Self::build(PullConfig::default(), action, haptics)
    }

    /// Creates a controller with `config`.
    pub fn try_new(config: PullConfig, action: R, haptics: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, action, haptics))
    }

    fn build(config: PullConfig, action: R, haptics: H) -> Self {
        Self {
            config,
            action,
            haptics,
            pull_distance_px: 0.0,
            armed: false,
            tracking: false,
            accepted: false,
            in_flight: Rc::new(Cell::new(false)),
            transition: Transition::None,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &PullConfig {
        &self.config
    }

    /// Returns the current pull state.
    #[must_use]
    pub fn state(&self) -> PullState {
        PullState {
            pull_distance_px: self.pull_distance_px,
            is_armed: self.armed,
            is_refreshing: self.is_refreshing(),
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> PullPhase {
        if self.is_refreshing() {
            PullPhase::Refreshing
        } else if self.armed {
            PullPhase::Armed
        } else if self.tracking {
            PullPhase::Pulling
        } else {
            PullPhase::Idle
        }
    }

    /// Returns `true` while a refresh is in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.get()
    }

    /// Returns `true` while a pull owns the current gesture.
    #[must_use]
    pub fn is_pulling(&self) -> bool {
        self.tracking
    }

    /// Returns the paint parameters for the current state.
    #[must_use]
    pub fn indicator(&self) -> PullIndicator {
        PullIndicator::from_state(&self.state(), &self.config, self.transition)
    }

    /// Returns the haptic emitter.
    #[must_use]
    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// Returns the refresh action.
    #[must_use]
    pub fn action(&self) -> &R {
        &self.action
    }

    /// Applies one session event from the scroll container.
    pub fn handle(&mut self, event: &SessionEvent) -> PullResponse<R::Future> {
        match event {
            SessionEvent::Started(session) => {
                self.accepted = session.pull_eligible && !self.is_refreshing();
                if session.pull_eligible && !self.accepted {
                    debug!("pull ignored while a refresh is in flight");
                }
                PullResponse::pass()
            }
            SessionEvent::Moved { session, .. } => PullResponse::tracking(self.on_move(session)),
            SessionEvent::Ended { session, .. } => self.on_release(session),
            SessionEvent::Cancelled(_) => {
                self.cancel();
                PullResponse::pass()
            }
        }
    }

    /// Starts a refresh unless one is already in flight.
    ///
    /// Used on release beyond the threshold; hosts may also call it directly
    /// (for example from a refresh button) under the same single-flight rule.
    pub fn refresh(&mut self) -> Option<PendingRefresh<R::Future>> {
        let Some(in_flight) = InFlight::acquire(&self.in_flight) else {
            debug!("refresh already in flight");
            return None;
        };
        debug!("refresh started");
        self.haptics.trigger(HapticIntensity::Medium);
        self.transition = Transition::Settle;
        Some(PendingRefresh::new(self.action.refresh(), in_flight))
    }

    /// Abandons the current pull without refreshing.
    pub fn cancel(&mut self) {
        self.accepted = false;
        if self.tracking {
            debug!(distance = self.pull_distance_px, "pull cancelled");
        }
        self.reset();
    }

    /// Reports that the renderer finished the current settle animation.
    pub fn transition_finished(&mut self) {
        if self.transition == Transition::Settle {
            self.transition = Transition::None;
        }
    }

    fn on_move(&mut self, session: &GestureSession) -> bool {
        if !self.accepted {
            return false;
        }
        if !self.pull_axis(session) {
            self.accepted = false;
            self.reset();
            return false;
        }
        let dy = session.distance_y();
        if dy <= 0.0 {
            self.reset();
            return false;
        }

        self.tracking = true;
        self.pull_distance_px = dy;
        self.transition = Transition::Track;
        let armed = dy > self.config.threshold_px;
        if armed != self.armed {
            debug!(distance = dy, armed, "pull threshold crossed");
            if armed {
                self.haptics.trigger(HapticIntensity::Light);
            }
            self.armed = armed;
        }
        trace!(distance = dy, "pulling");
        true
    }

    /// Decides on the released session, which already includes the final
    /// sample.
    fn on_release(&mut self, session: &GestureSession) -> PullResponse<R::Future> {
        let distance = session.distance_y();
        let should_refresh =
            self.accepted && self.pull_axis(session) && distance > self.config.threshold_px;
        self.accepted = false;
        self.reset();
        if !should_refresh {
            return PullResponse::pass();
        }
        debug!(distance, "pull released beyond threshold");
        PullResponse {
            prevent_default: false,
            refresh: self.refresh(),
        }
    }

    fn pull_axis(&self, session: &GestureSession) -> bool {
        !self.is_refreshing()
            && !matches!(session.axis_lock, AxisLock::Horizontal | AxisLock::None)
    }

    fn reset(&mut self) {
        if self.tracking {
            self.transition = Transition::Settle;
        }
        self.pull_distance_px = 0.0;
        self.armed = false;
        self.tracking = false;
    }
}
