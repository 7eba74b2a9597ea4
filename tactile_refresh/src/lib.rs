// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_refresh --heading-base-level=0

//! Tactile Refresh: pull-to-refresh for a scroll container.
//!
//! [`PullToRefreshController`] consumes the session events of the content
//! surface and runs:
//!
//! ```text
//! Idle ──pull down from top──▶ Pulling ⇄ Armed ──release──▶ Refreshing ──settled──▶ Idle
//!                                   └──────release below threshold / cancel──────▶ Idle
//! ```
//!
//! - A pull is only eligible if the container was scrolled to the top when the
//!   touch began and no refresh is in flight. Eligibility is decided once per
//!   session.
//! - `pull_distance_px` is the raw downward travel. It is deliberately left
//!   unclamped; only the [`PullIndicator`] caps its height at the threshold.
//! - Releasing beyond the threshold emits one medium haptic and returns a
//!   [`PendingRefresh`] wrapping the host's [`RefreshAction`]. The controller
//!   reports `is_refreshing` until that future completes or is dropped,
//!   whatever the outcome.
//! - Cancellation never refreshes.
//!
//! ## Example
//!
//! ```rust
//! use tactile_haptics::NoopHaptics;
//! use tactile_pointer::{PointerSampler, TouchSample};
//! use tactile_refresh::PullToRefreshController;
//!
//! let mut pull = PullToRefreshController::new(
//!     || async { Ok::<(), ()>(()) },
//!     NoopHaptics,
//! );
//! let mut sampler = PointerSampler::new();
//!
//! pull.handle(&sampler.start(TouchSample::new(50.0, 10.0, 0), true).unwrap());
//! pull.handle(&sampler.move_to(TouchSample::new(50.0, 110.0, 100)).unwrap());
//! let response = pull.handle(&sampler.end(TouchSample::new(50.0, 110.0, 120)).unwrap());
//!
//! let pending = response.refresh.expect("pulled past the threshold");
//! assert!(pull.is_refreshing());
//! pollster::block_on(pending).unwrap();
//! assert!(!pull.is_refreshing());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod action;
mod controller;
mod indicator;

pub use action::{PendingRefresh, RefreshAction};
pub use controller::{PullPhase, PullResponse, PullState, PullToRefreshController};
pub use indicator::{PullConfig, PullIndicator, PullLabel};
