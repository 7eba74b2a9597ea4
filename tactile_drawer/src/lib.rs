// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_drawer --heading-base-level=0

//! Tactile Drawer: swipe-to-close for a slide-in navigation drawer.
//!
//! [`DrawerGestureController`] consumes the session events of the drawer
//! surface and runs a small state machine:
//!
//! ```text
//! Idle ──horizontal lock──▶ Dragging ──release──▶ Closing | SnappingOpen ──settled──▶ Idle
//! ```
//!
//! - While dragging, the offset follows the finger, clamped to
//!   `[-drawer_width_px, 0]`.
//! - On release, the drawer closes if the drag travelled further left than
//!   the close distance **or** moved left faster than the velocity threshold.
//!   Closing calls the navigation store and emits one medium haptic.
//! - Vertical drift beyond the classifier's tolerance, or a cancelled session,
//!   snaps the drawer back with no action.
//! - [`DrawerGestureController::close`] is independent of the gesture and
//!   always closes.
//!
//! Paint the drawer from [`DrawerTransform`], a pure mapping of
//! [`DrawerState`], and report [`DrawerGestureController::transition_finished`]
//! when a settle animation completes.
//!
//! ## Example
//!
//! ```rust
//! use tactile_drawer::{DrawerGestureController, DrawerNavigation, DrawerPhase};
//! use tactile_haptics::NoopHaptics;
//! use tactile_pointer::{PointerSampler, TouchSample};
//!
//! #[derive(Default)]
//! struct Nav { open: bool }
//! impl DrawerNavigation for Nav {
//!     fn open_drawer(&mut self) { self.open = true; }
//!     fn close_drawer(&mut self) { self.open = false; }
//! }
//!
//! let mut drawer = DrawerGestureController::new(Nav::default(), NoopHaptics);
//! drawer.open();
//!
//! let mut sampler = PointerSampler::new();
//! let events = [
//!     sampler.start(TouchSample::new(200.0, 100.0, 0), false),
//!     sampler.move_to(TouchSample::new(185.0, 101.0, 20)),
//!     sampler.end(TouchSample::new(170.0, 101.0, 50)),
//! ];
//! for event in events.iter().flatten() {
//!     drawer.handle(event);
//! }
//!
//! // A 30px flick in 50ms is fast enough to close.
//! assert_eq!(drawer.phase(), DrawerPhase::Closing);
//! assert!(!drawer.navigation().open);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod transform;

pub use config::{DrawerConfig, ReleaseDecision};
pub use controller::{DrawerGestureController, DrawerNavigation, DrawerPhase, DrawerState};
pub use transform::DrawerTransform;
