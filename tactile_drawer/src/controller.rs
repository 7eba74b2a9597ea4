// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tactile_haptics::{HapticEmitter, HapticIntensity};
use tactile_pointer::{AxisLock, ConfigError, GestureSession, SessionEvent, Transition};
use tracing::{debug, trace};

use crate::{DrawerConfig, DrawerTransform, ReleaseDecision};

/// The navigation store that owns the drawer's open/closed state.
///
/// Both setters must be idempotent.
pub trait DrawerNavigation {
    /// Marks the drawer open.
    fn open_drawer(&mut self);
    /// Marks the drawer closed.
    fn close_drawer(&mut self);
}

/// Drawer state visible to renderers.
///
/// `drag_offset_px` is only non-zero while a drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DrawerState {
    /// Whether the drawer is open.
    pub is_open: bool,
    /// Live drag offset, in `[-drawer_width_px, 0]`.
    pub drag_offset_px: f64,
}

/// Phase of the drawer gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DrawerPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// A horizontal drag is moving the drawer.
    Dragging,
    /// The drawer was closed and is animating out.
    Closing,
    /// A drag was released without closing and the drawer is animating back.
    SnappingOpen,
}

/// Swipe-to-close controller for a navigation drawer.
///
/// Feed it the [`SessionEvent`]s of the drawer surface's
/// [`PointerSampler`](tactile_pointer::PointerSampler). It drags the drawer
/// while the session is locked horizontally and decides close or snap-back on
/// release. [`close`](Self::close) is always available for overlay clicks and
/// the Escape key, whatever the gesture is doing.
#[derive(Debug)]
pub struct DrawerGestureController<N, H> {
    config: DrawerConfig,
    navigation: N,
    haptics: H,
    state: DrawerState,
    phase: DrawerPhase,
    transition: Transition,
    session_aborted: bool,
}

impl<N: DrawerNavigation, H: HapticEmitter> DrawerGestureController<N, H> {
    /// Creates a controller for a closed drawer with the default configuration.
    pub fn new(navigation: N, haptics: H) -> Self {
        Self::build(DrawerConfig::default(), navigation, haptics)
    }

    /// Creates a controller for a closed drawer with `config`.
    pub fn try_new(config: DrawerConfig, navigation: N, haptics: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, navigation, haptics))
    }

    fn build(config: DrawerConfig, navigation: N, haptics: H) -> Self {
        Self {
            config,
            navigation,
            haptics,
            state: DrawerState::default(),
            phase: DrawerPhase::Idle,
            transition: Transition::None,
            session_aborted: false,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Returns the current drawer state.
    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> DrawerPhase {
        self.phase
    }

    /// Returns `true` while a drag owns the current gesture.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DrawerPhase::Dragging
    }

    /// Returns the paint parameters for the current state.
    #[must_use]
    pub fn transform(&self) -> DrawerTransform {
        DrawerTransform::from_state(&self.state, &self.config, self.transition)
    }

    /// Returns the navigation store.
    #[must_use]
    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    /// Returns the navigation store mutably.
    pub fn navigation_mut(&mut self) -> &mut N {
        &mut self.navigation
    }

    /// Returns the haptic emitter.
    #[must_use]
    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// Mirrors an open/closed change made by the navigation store itself.
    pub fn sync_open(&mut self, is_open: bool) {
        if self.state.is_open == is_open {
            return;
        }
        if self.is_dragging() {
            self.session_aborted = true;
        }
        self.state = DrawerState {
            is_open,
            drag_offset_px: 0.0,
        };
        self.phase = DrawerPhase::Idle;
        self.transition = Transition::Settle;
    }

    /// Opens the drawer.
    pub fn open(&mut self) {
        self.navigation.open_drawer();
        if !self.state.is_open {
            debug!("drawer opened");
            self.sync_open(true);
        }
    }

    /// Closes the drawer without a gesture (overlay click, Escape key).
    ///
    /// Any drag in progress is dropped and the rest of its session ignored.
    pub fn close(&mut self) {
        if self.is_dragging() {
            self.session_aborted = true;
        }
        self.navigation.close_drawer();
        if self.state.is_open {
            debug!("drawer closed");
            self.state = DrawerState::default();
            self.phase = DrawerPhase::Closing;
            self.transition = Transition::Settle;
        }
    }

    /// Applies one session event from the drawer surface.
    ///
    /// Returns `true` while the controller owns the gesture, meaning the host
    /// should suppress native scrolling and clicks for this event.
    pub fn handle(&mut self, event: &SessionEvent) -> bool {
        match event {
            SessionEvent::Started(_) => {
                self.session_aborted = false;
                false
            }
            SessionEvent::Moved { session, .. } => self.on_move(session),
            SessionEvent::Ended { session, .. } => {
                self.on_release(session);
                false
            }
            SessionEvent::Cancelled(_) => {
                self.cancel();
                false
            }
        }
    }

    /// Reverts any drag in progress without closing.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("drawer drag cancelled");
            self.revert_drag();
        }
    }

    /// Reports that the renderer finished the current settle animation.
    pub fn transition_finished(&mut self) {
        self.transition = Transition::None;
        if matches!(self.phase, DrawerPhase::Closing | DrawerPhase::SnappingOpen) {
            self.phase = DrawerPhase::Idle;
        }
    }

    fn on_move(&mut self, session: &GestureSession) -> bool {
        if !self.state.is_open || self.session_aborted {
            return false;
        }
        match (self.phase, session.axis_lock) {
            (DrawerPhase::Dragging, AxisLock::Horizontal) => {
                self.drag_to(session.distance_x());
                true
            }
            (DrawerPhase::Dragging, _) => {
                debug!(dy = session.distance_y(), "drawer drag abandoned after vertical drift");
                self.session_aborted = true;
                self.revert_drag();
                false
            }
            (_, AxisLock::Horizontal) => {
                debug!("drawer drag started");
                self.phase = DrawerPhase::Dragging;
                self.drag_to(session.distance_x());
                true
            }
            _ => false,
        }
    }

    fn on_release(&mut self, session: &GestureSession) {
        let eligible = self.state.is_open
            && !self.session_aborted
            && session.axis_lock == AxisLock::Horizontal;
        if !eligible {
            if self.is_dragging() {
                self.revert_drag();
            }
            return;
        }

        let dx = session.distance_x();
        let elapsed_ms = session.elapsed_ms();
        match self.config.decide(dx, elapsed_ms) {
            ReleaseDecision::Close => {
                debug!(dx, elapsed_ms, velocity = session.velocity_x(), "drawer swiped closed");
                self.navigation.close_drawer();
                self.haptics.trigger(HapticIntensity::Medium);
                self.state = DrawerState::default();
                self.phase = DrawerPhase::Closing;
            }
            ReleaseDecision::SnapOpen => {
                debug!(dx, elapsed_ms, velocity = session.velocity_x(), "drawer snapped open");
                self.state.drag_offset_px = 0.0;
                self.phase = DrawerPhase::SnappingOpen;
            }
        }
        self.transition = Transition::Settle;
    }

    fn drag_to(&mut self, dx: f64) {
        self.state.drag_offset_px = dx.clamp(-self.config.drawer_width_px, 0.0);
        self.transition = Transition::Track;
        trace!(offset = self.state.drag_offset_px, "drawer dragged");
    }

    fn revert_drag(&mut self) {
        self.state.drag_offset_px = 0.0;
        self.phase = DrawerPhase::Idle;
        self.transition = Transition::Settle;
    }
}
