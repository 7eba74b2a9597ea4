// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a renderer should move from the previous visual state to the current one.
///
/// Controllers report [`Transition::Track`] while a finger drives the visuals
/// directly and [`Transition::Settle`] after they reset to a terminal state.
/// A settle stays pending until the renderer reports that its animation has
/// finished (for example from a `transitionend` handler), at which point the
/// controller returns to [`Transition::None`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Transition {
    /// Nothing is moving.
    #[default]
    None,
    /// Follow the finger 1:1 with no easing.
    Track,
    /// Animate to the current terminal state.
    Settle,
}

impl Transition {
    /// Returns `true` if the renderer should animate towards the current state.
    #[must_use]
    pub fn is_animated(self) -> bool {
        matches!(self, Self::Settle)
    }
}
