// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline CSS for the paint parameters produced by the controllers.

use alloc::format;
use alloc::string::String;

use tactile_drawer::DrawerTransform;
use tactile_pointer::Transition;
use tactile_refresh::{PullIndicator, PullLabel};

/// Length of the settle animation, in milliseconds.
pub const SETTLE_DURATION_MS: u32 = 300;

/// Easing curve of the settle animation.
pub const SETTLE_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Returns the CSS `transition` value animating `property` under `transition`.
///
/// Tracking follows the finger, so it never animates.
#[must_use]
pub fn transition_value(transition: Transition, property: &str) -> String {
    match transition {
        Transition::None | Transition::Track => String::from("none"),
        Transition::Settle => format!("{property} {SETTLE_DURATION_MS}ms {SETTLE_EASING}"),
    }
}

/// Inline style for the drawer panel.
#[must_use]
pub fn drawer_panel_style(transform: &DrawerTransform) -> String {
    format!(
        "transform: translateX({}px); transition: {};",
        transform.translate_x_px,
        transition_value(transform.transition, "transform"),
    )
}

/// Inline style for the backdrop behind the drawer.
///
/// A closed drawer's backdrop stops intercepting clicks.
#[must_use]
pub fn drawer_backdrop_style(transform: &DrawerTransform) -> String {
    let pointer_events = if transform.is_open { "auto" } else { "none" };
    format!(
        "opacity: {}; pointer-events: {pointer_events}; transition: {};",
        transform.backdrop_opacity,
        transition_value(transform.transition, "opacity"),
    )
}

/// Inline style for the pull-to-refresh indicator.
#[must_use]
pub fn pull_indicator_style(indicator: &PullIndicator) -> String {
    format!(
        "height: {}px; opacity: {}; transition: {};",
        indicator.height_px,
        indicator.progress,
        transition_value(indicator.transition, "height"),
    )
}

/// Prompt text for a pull label.
#[must_use]
pub fn pull_label_text(label: PullLabel) -> &'static str {
    match label {
        PullLabel::Pull => "Pull to refresh",
        PullLabel::Release => "Release to refresh",
        PullLabel::Refreshing => "Refreshing...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_never_animates() {
        assert_eq!(transition_value(Transition::Track, "transform"), "none");
        assert_eq!(transition_value(Transition::None, "transform"), "none");
        assert_eq!(
            transition_value(Transition::Settle, "opacity"),
            "opacity 300ms cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }

    #[test]
    fn drawer_styles() {
        let transform = DrawerTransform {
            is_open: true,
            translate_x_px: -70.0,
            backdrop_opacity: 0.75,
            transition: Transition::Track,
        };
        assert_eq!(
            drawer_panel_style(&transform),
            "transform: translateX(-70px); transition: none;"
        );
        assert_eq!(
            drawer_backdrop_style(&transform),
            "opacity: 0.75; pointer-events: auto; transition: none;"
        );

        let closed = DrawerTransform {
            is_open: false,
            translate_x_px: 0.0,
            backdrop_opacity: 0.0,
            transition: Transition::Settle,
        };
        assert!(drawer_backdrop_style(&closed).contains("pointer-events: none"));
        assert!(drawer_panel_style(&closed).contains("transform 300ms"));
    }

    #[test]
    fn indicator_style_and_label() {
        let indicator = PullIndicator {
            height_px: 40.0,
            progress: 0.5,
            label: PullLabel::Pull,
            transition: Transition::Track,
        };
        assert_eq!(
            pull_indicator_style(&indicator),
            "height: 40px; opacity: 0.5; transition: none;"
        );
        assert_eq!(pull_label_text(PullLabel::Release), "Release to refresh");
    }
}
