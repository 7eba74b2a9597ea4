// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tactile_pointer::Transition;

use crate::{DrawerConfig, DrawerState};

/// Visual parameters for painting the drawer and its backdrop.
///
/// This is a pure function of [`DrawerState`], so renderers never need to
/// inspect the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerTransform {
    /// Whether the drawer's open styling applies.
    pub is_open: bool,
    /// Horizontal translation relative to the drawer's resting position.
    pub translate_x_px: f64,
    /// Backdrop opacity in `[0, 1]`.
    pub backdrop_opacity: f64,
    /// How to animate to these values.
    pub transition: Transition,
}

impl DrawerTransform {
    /// Maps drawer state to paint parameters.
    #[must_use]
    pub fn from_state(state: &DrawerState, config: &DrawerConfig, transition: Transition) -> Self {
        let backdrop_opacity = if state.is_open {
            (1.0 + state.drag_offset_px / config.drawer_width_px).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            is_open: state.is_open,
            translate_x_px: state.drag_offset_px,
            backdrop_opacity,
            transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_at(offset: f64) -> DrawerState {
        DrawerState {
            is_open: true,
            drag_offset_px: offset,
        }
    }

    #[test]
    fn opacity_follows_drag_progress() {
        let config = DrawerConfig::default().with_drawer_width(200.0);
        let t = DrawerTransform::from_state(&open_at(0.0), &config, Transition::None);
        assert_eq!(t.backdrop_opacity, 1.0);

        let t = DrawerTransform::from_state(&open_at(-50.0), &config, Transition::Track);
        assert_eq!(t.backdrop_opacity, 0.75);
        assert_eq!(t.translate_x_px, -50.0);

        let t = DrawerTransform::from_state(&open_at(-200.0), &config, Transition::Track);
        assert_eq!(t.backdrop_opacity, 0.0);
    }

    #[test]
    fn opacity_is_clamped() {
        let config = DrawerConfig::default().with_drawer_width(200.0);
        let t = DrawerTransform::from_state(&open_at(-400.0), &config, Transition::Track);
        assert_eq!(t.backdrop_opacity, 0.0);
        let t = DrawerTransform::from_state(&open_at(25.0), &config, Transition::Track);
        assert_eq!(t.backdrop_opacity, 1.0);
    }

    #[test]
    fn closed_drawer_hides_backdrop() {
        let state = DrawerState::default();
        let t = DrawerTransform::from_state(&state, &DrawerConfig::default(), Transition::Settle);
        assert!(!t.is_open);
        assert_eq!(t.backdrop_opacity, 0.0);
        assert_eq!(t.transition, Transition::Settle);
    }
}
