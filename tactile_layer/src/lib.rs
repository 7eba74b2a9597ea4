// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_layer --heading-base-level=0

//! Tactile Layer: the mountable gesture layer of a mobile view.
//!
//! [`GestureLayer`] wires the Tactile crates together for one mounted view:
//!
//! - one [`PointerSampler`] per [`Surface`]: the drawer panel and the scrollable
//!   content;
//! - a [`DrawerGestureController`] fed by the drawer surface;
//! - a [`PullToRefreshController`] fed by the content surface;
//! - a [`ResponsiveModeSwitcher`] deciding whether the layer is mounted.
//!
//! Hosts forward raw touch input with surface-local [`TouchSample`]s and apply
//! the returned [`EventResponse`]: `prevent_default` is `true` only while a
//! controller owns a classified gesture, and is released by the event that ends
//! it.
//!
//! When the viewport grows to desktop width the layer cancels every active
//! session and resets transient state before reporting itself unmounted; events
//! are ignored until a mobile or tablet width returns.
//!
//! ## Example
//!
//! ```rust
//! use tactile_drawer::{DrawerGestureController, DrawerNavigation};
//! use tactile_haptics::NoopHaptics;
//! use tactile_layer::{GestureLayer, Surface};
//! use tactile_pointer::TouchSample;
//! use tactile_refresh::PullToRefreshController;
//! use tactile_viewport::ResponsiveModeSwitcher;
//!
//! #[derive(Default)]
//! struct Nav;
//! impl DrawerNavigation for Nav {
//!     fn open_drawer(&mut self) {}
//!     fn close_drawer(&mut self) {}
//! }
//!
//! let mut layer = GestureLayer::new(
//!     DrawerGestureController::new(Nav, NoopHaptics),
//!     PullToRefreshController::new(|| async { Ok::<(), ()>(()) }, NoopHaptics),
//!     ResponsiveModeSwitcher::new(390.0),
//! );
//!
//! layer.touch_start(Surface::Content, TouchSample::new(40.0, 10.0, 0), 0.0);
//! let response = layer.touch_move(Surface::Content, TouchSample::new(40.0, 60.0, 50));
//! assert!(response.prevent_default);
//!
//! let release = layer.touch_end(Surface::Content, TouchSample::new(40.0, 60.0, 60));
//! assert!(!release.prevent_default);
//! assert!(release.refresh.is_none(), "50px is below the refresh threshold");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use tactile_drawer::{DrawerGestureController, DrawerNavigation};
use tactile_haptics::HapticEmitter;
use tactile_pointer::{GestureClassifier, PointerSampler, SessionEvent, TouchSample};
use tactile_refresh::{PendingRefresh, PullResponse, PullToRefreshController, RefreshAction};
use tactile_viewport::{ModeChange, ResponsiveModeSwitcher};
use tracing::{debug, trace};

/// A touch surface owned by the layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The navigation drawer panel.
    Drawer,
    /// The scrollable page content.
    Content,
}

/// What the host should do with the native event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Suppress native scrolling and click synthesis for this event.
    pub prevent_default: bool,
}

/// What the host should do after a touch release.
#[derive(Debug)]
pub struct ReleaseResponse<F> {
    /// Suppress native handling for this event.
    pub prevent_default: bool,
    /// A refresh started by this release. Drive it on the event loop.
    pub refresh: Option<PendingRefresh<F>>,
}

impl<F> ReleaseResponse<F> {
    fn ignored() -> Self {
        Self {
            prevent_default: false,
            refresh: None,
        }
    }

    fn event(&self) -> EventResponse {
        EventResponse {
            prevent_default: self.prevent_default,
        }
    }
}

/// Touch gesture layer for one mounted mobile view.
#[derive(Debug)]
pub struct GestureLayer<N, R, HD, HR> {
    drawer_sampler: PointerSampler,
    content_sampler: PointerSampler,
    drawer: DrawerGestureController<N, HD>,
    refresh: PullToRefreshController<R, HR>,
    viewport: ResponsiveModeSwitcher,
}

impl<N, R, HD, HR> GestureLayer<N, R, HD, HR>
where
    N: DrawerNavigation,
    R: RefreshAction,
    HD: HapticEmitter,
    HR: HapticEmitter,
{
    /// Creates a layer around the given controllers.
    pub fn new(
        drawer: DrawerGestureController<N, HD>,
        refresh: PullToRefreshController<R, HR>,
        viewport: ResponsiveModeSwitcher,
    ) -> Self {
        Self {
            drawer_sampler: PointerSampler::new(),
            content_sampler: PointerSampler::new(),
            drawer,
            refresh,
            viewport,
        }
    }

    /// Uses `classifier` for both surfaces.
    #[must_use]
    pub fn with_classifier(mut self, classifier: GestureClassifier) -> Self {
        self.drawer_sampler = PointerSampler::with_classifier(classifier);
        self.content_sampler = PointerSampler::with_classifier(classifier);
        self
    }

    /// Returns `true` while the viewport mounts touch gestures.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.viewport.gestures_enabled()
    }

    /// Returns the drawer controller.
    #[must_use]
    pub fn drawer(&self) -> &DrawerGestureController<N, HD> {
        &self.drawer
    }

    /// Returns the drawer controller mutably, for open/close and animation
    /// completion.
    pub fn drawer_mut(&mut self) -> &mut DrawerGestureController<N, HD> {
        &mut self.drawer
    }

    /// Returns the pull-to-refresh controller.
    #[must_use]
    pub fn refresh(&self) -> &PullToRefreshController<R, HR> {
        &self.refresh
    }

    /// Returns the pull-to-refresh controller mutably.
    pub fn refresh_mut(&mut self) -> &mut PullToRefreshController<R, HR> {
        &mut self.refresh
    }

    /// Returns the viewport switcher.
    #[must_use]
    pub fn viewport(&self) -> &ResponsiveModeSwitcher {
        &self.viewport
    }

    /// Returns the sampler of `surface`.
    #[must_use]
    pub fn sampler(&self, surface: Surface) -> &PointerSampler {
        match surface {
            Surface::Drawer => &self.drawer_sampler,
            Surface::Content => &self.content_sampler,
        }
    }

    /// Handles touch-down on `surface`.
    ///
    /// `scroll_top` is the surface's scroll offset right now; pull-to-refresh
    /// is only possible for a content session that starts at zero.
    pub fn touch_start(
        &mut self,
        surface: Surface,
        sample: TouchSample,
        scroll_top: f64,
    ) -> EventResponse {
        if !self.is_mounted() {
            trace!(?surface, "touch ignored while unmounted");
            return EventResponse::default();
        }
        let pull_eligible = surface == Surface::Content && scroll_top <= 0.0;
        let event = self.sampler_mut(surface).start(sample, pull_eligible);
        self.dispatch(surface, event).event()
    }

    /// Handles a touch move on `surface`.
    pub fn touch_move(&mut self, surface: Surface, sample: TouchSample) -> EventResponse {
        if !self.is_mounted() {
            return EventResponse::default();
        }
        let event = self.sampler_mut(surface).move_to(sample);
        self.dispatch(surface, event).event()
    }

    /// Handles touch release on `surface`.
    pub fn touch_end(
        &mut self,
        surface: Surface,
        sample: TouchSample,
    ) -> ReleaseResponse<R::Future> {
        if !self.is_mounted() {
            return ReleaseResponse::ignored();
        }
        let event = self.sampler_mut(surface).end(sample);
        self.dispatch(surface, event)
    }

    /// Handles a system cancellation on `surface`.
    pub fn touch_cancel(&mut self, surface: Surface) -> EventResponse {
        let event = self.sampler_mut(surface).cancel();
        self.dispatch(surface, event).event()
    }

    /// Cancels sessions on either surface that have been idle past their
    /// timeout at `now_ms`.
    pub fn poll_timeouts(&mut self, now_ms: u64) {
        for surface in [Surface::Drawer, Surface::Content] {
            let event = self.sampler_mut(surface).poll_timeout(now_ms);
            self.dispatch(surface, event);
        }
    }

    /// Cancels every active session and resets transient gesture state.
    ///
    /// An in-flight refresh is left to complete.
    pub fn cancel_all(&mut self) {
        for surface in [Surface::Drawer, Surface::Content] {
            self.touch_cancel(surface);
        }
        self.drawer.cancel();
        self.refresh.cancel();
    }

    /// Records a viewport resize; unmounting cancels all gestures first.
    pub fn resize(&mut self, width: f64) -> Option<ModeChange> {
        let change = self.viewport.resize(width)?;
        if change.unmounts_gestures() {
            debug!("gesture layer unmounting");
            self.cancel_all();
        } else if change.mounts_gestures() {
            debug!("gesture layer mounted");
        }
        Some(change)
    }

    fn sampler_mut(&mut self, surface: Surface) -> &mut PointerSampler {
        match surface {
            Surface::Drawer => &mut self.drawer_sampler,
            Surface::Content => &mut self.content_sampler,
        }
    }

    fn dispatch(
        &mut self,
        surface: Surface,
        event: Option<SessionEvent>,
    ) -> ReleaseResponse<R::Future> {
        let Some(event) = event else {
            return ReleaseResponse::ignored();
        };
        match surface {
            Surface::Drawer => ReleaseResponse {
                prevent_default: self.drawer.handle(&event),
                refresh: None,
            },
            Surface::Content => {
                let PullResponse {
                    prevent_default,
                    refresh,
                } = self.refresh.handle(&event);
                ReleaseResponse {
                    prevent_default,
                    refresh,
                }
            }
        }
    }
}
