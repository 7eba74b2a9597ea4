// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_web --heading-base-level=0

//! Tactile Web: browser bindings for the Tactile gesture layer.
//!
//! The [`css`] module renders [`DrawerTransform`](tactile_drawer::DrawerTransform)
//! and [`PullIndicator`](tactile_refresh::PullIndicator) as inline styles and
//! is available on every target.
//!
//! When targeting `wasm32`, the `dom` module adds:
//!
//! - `VibrateHaptics`, a haptic emitter over `navigator.vibrate`;
//! - `touch_sample`, converting a `TouchEvent` into a surface-local
//!   [`TouchSample`](tactile_pointer::TouchSample);
//! - `scroll_top` and `viewport_width` for pull eligibility and mode switching;
//! - `apply_response`, which calls `preventDefault` only on cancelable events.
//!
//! Touch listeners should be registered with `passive: false`; otherwise the
//! browser ignores `preventDefault` and native scrolling fights the gesture.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn on_touch_move<N, R, HD, HR>(
//!     layer: &mut tactile_layer::GestureLayer<N, R, HD, HR>,
//!     event: &web_sys::TouchEvent,
//!     content: &web_sys::Element,
//! ) where
//!     N: tactile_drawer::DrawerNavigation,
//!     R: tactile_refresh::RefreshAction,
//!     HD: tactile_haptics::HapticEmitter,
//!     HR: tactile_haptics::HapticEmitter,
//! {
//!     use tactile_layer::Surface;
//!     use tactile_web::dom;
//!
//!     if let Some(sample) = dom::touch_sample(event, content) {
//!         let response = layer.touch_move(Surface::Content, sample);
//!         dom::apply_response(event, response);
//!     }
//! }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod css;

#[cfg(target_arch = "wasm32")]
pub mod dom;
