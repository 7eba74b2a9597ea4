// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM glue. Only built for `wasm32`.

use tactile_haptics::{HapticEmitter, HapticIntensity};
use tactile_layer::EventResponse;
use tactile_pointer::TouchSample;
use tracing::{debug, trace};
use wasm_bindgen::JsValue;
use web_sys::{Element, Event, Navigator, TouchEvent, Window};

/// Haptics through the Vibration API.
///
/// Browsers without `navigator.vibrate` (or that refuse the call) are ignored.
#[derive(Clone, Debug, Default)]
pub struct VibrateHaptics {
    navigator: Option<Navigator>,
}

impl VibrateHaptics {
    /// Binds to the current window's navigator, if there is one.
    #[must_use]
    pub fn new() -> Self {
        Self {
            navigator: web_sys::window().map(|window| window.navigator()),
        }
    }
}

impl HapticEmitter for VibrateHaptics {
    fn trigger(&mut self, intensity: HapticIntensity) {
        let Some(navigator) = &self.navigator else {
            return;
        };
        if !navigator.vibrate_with_duration(intensity.duration_ms()) {
            debug!(?intensity, "vibration refused");
        }
    }
}

/// Current time in milliseconds on the clock of [`touch_sample`] timestamps.
///
/// Intended for [`GestureLayer::poll_timeouts`](tactile_layer::GestureLayer::poll_timeouts).
/// Returns `None` outside a window context.
#[must_use]
pub fn now_ms() -> Option<u64> {
    let performance = web_sys::window()?.performance()?;
    Some(to_millis(performance.now()))
}

/// Converts the first changed touch of `event` into a sample local to
/// `surface`.
///
/// Returns `None` for events carrying no touch.
#[must_use]
pub fn touch_sample(event: &TouchEvent, surface: &Element) -> Option<TouchSample> {
    let touch = event.changed_touches().get(0)?;
    let rect = surface.get_bounding_client_rect();
    let sample = TouchSample::new(
        f64::from(touch.client_x()) - rect.left(),
        f64::from(touch.client_y()) - rect.top(),
        to_millis(event.time_stamp()),
    );
    trace!(x = sample.x, y = sample.y, t = sample.timestamp_ms, "touch sampled");
    Some(sample)
}

/// Vertical scroll offset of a scroll container.
#[must_use]
pub fn scroll_top(element: &Element) -> f64 {
    f64::from(element.scroll_top())
}

/// Layout viewport width, in CSS pixels.
pub fn viewport_width(window: &Window) -> Result<f64, JsValue> {
    let width = window.inner_width()?;
    width
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))
}

/// Applies a layer response to the native event.
///
/// Non-cancelable events (a scroll already under way) are left alone.
pub fn apply_response(event: &Event, response: EventResponse) {
    if response.prevent_default && event.cancelable() {
        event.prevent_default();
    }
}

/// Replaces the inline style of `element`.
pub fn set_style(element: &Element, css: &str) -> Result<(), JsValue> {
    element.set_attribute("style", css)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "DOM timestamps are non-negative milliseconds well below u64::MAX"
)]
fn to_millis(ms: f64) -> u64 {
    ms.max(0.0) as u64
}
