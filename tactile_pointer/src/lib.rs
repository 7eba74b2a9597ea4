// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_pointer --heading-base-level=0

//! Tactile Pointer: raw touch sampling and gesture classification.
//!
//! This crate is the bottom layer of the Tactile gesture stack. It turns a
//! stream of raw pointer readings for one bound surface into a single
//! [`GestureSession`] and classifies that session into a [`Gesture`]:
//!
//! - [`TouchSample`]: one pointer reading in surface-local pixels plus a
//!   monotonic timestamp.
//! - [`PointerSampler`]: owns at most one active [`GestureSession`] and turns
//!   start/move/end/cancel input into [`SessionEvent`]s.
//! - [`GestureClassifier`]: resolves the axis lock from accumulated deltas and
//!   names the gesture (horizontal swipe, vertical scroll, pull-down, tap).
//! - [`Transition`]: how a renderer should reach the next visual state, shared
//!   by the higher-level controllers.
//!
//! The crate does not assume any event system. Hosts feed it samples they have
//! already converted to surface-local coordinates and act on the events it
//! returns.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_pointer::{AxisLock, Gesture, PointerSampler, SessionEvent, TouchSample};
//!
//! let mut sampler = PointerSampler::new();
//!
//! // Touch down at the top of a scroll container.
//! sampler.start(TouchSample::new(100.0, 40.0, 0), true);
//!
//! // Move mostly downward: the session locks to the vertical axis.
//! sampler.move_to(TouchSample::new(102.0, 70.0, 16));
//! assert_eq!(sampler.session().unwrap().axis_lock, AxisLock::Vertical);
//!
//! // Release: the session is classified as a pull-down.
//! let Some(SessionEvent::Ended { gesture, .. }) = sampler.end(TouchSample::new(102.0, 130.0, 48))
//! else {
//!     unreachable!();
//! };
//! assert_eq!(gesture, Gesture::PullDown);
//! assert!(!sampler.is_active());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//!
//! This crate is `no_std`.

#![no_std]

mod classifier;
mod error;
mod sample;
mod sampler;
mod session;
mod transition;

pub use classifier::{ClassifierConfig, Gesture, GestureClassifier};
pub use error::ConfigError;
pub use sample::TouchSample;
pub use sampler::{PointerSampler, SessionEvent};
pub use session::{AxisLock, GestureSession};
pub use transition::Transition;
