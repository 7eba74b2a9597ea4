// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_haptics --heading-base-level=0

//! Tactile Haptics: the feedback capability consumed by gesture controllers.
//!
//! Controllers never touch vibration hardware directly. They hold a
//! [`HapticEmitter`] and call [`HapticEmitter::trigger`] at gesture milestones.
//! Triggering is fire-and-forget: implementations must return promptly and
//! swallow any platform failure.
//!
//! Provided emitters:
//!
//! - [`NoopHaptics`]: does nothing; for platforms without vibration support.
//! - [`RecordingHaptics`]: remembers every trigger; for tests.
//! - Any `FnMut(HapticIntensity)` closure.
//!
//! ```rust
//! use tactile_haptics::{HapticEmitter, HapticIntensity, RecordingHaptics};
//!
//! let mut haptics = RecordingHaptics::new();
//! haptics.trigger(HapticIntensity::Medium);
//! assert_eq!(haptics.events(), &[HapticIntensity::Medium]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use tracing::trace;

/// Strength of a haptic pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticIntensity {
    /// A short tick.
    Light,
    /// A confirmation pulse.
    Medium,
    /// A strong pulse.
    Heavy,
}

impl HapticIntensity {
    /// Suggested vibration length in milliseconds for platforms that only
    /// support duration-based vibration.
    #[must_use]
    pub const fn duration_ms(self) -> u32 {
        match self {
            Self::Light => 10,
            Self::Medium => 20,
            Self::Heavy => 30,
        }
    }
}

/// A fire-and-forget haptic feedback sink.
pub trait HapticEmitter {
    /// Emits one pulse of the given intensity.
    fn trigger(&mut self, intensity: HapticIntensity);
}

impl<F: FnMut(HapticIntensity)> HapticEmitter for F {
    fn trigger(&mut self, intensity: HapticIntensity) {
        self(intensity);
    }
}

/// An emitter that ignores every trigger.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHaptics;

impl HapticEmitter for NoopHaptics {
    fn trigger(&mut self, intensity: HapticIntensity) {
        trace!(?intensity, "haptics disabled");
    }
}

/// An emitter that records every trigger in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingHaptics {
    events: Vec<HapticIntensity>,
}

impl RecordingHaptics {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every intensity triggered so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[HapticIntensity] {
        &self.events
    }

    /// Number of triggers with the given intensity.
    #[must_use]
    pub fn count(&self, intensity: HapticIntensity) -> usize {
        self.events.iter().filter(|&&e| e == intensity).count()
    }

    /// Forgets all recorded triggers.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl HapticEmitter for RecordingHaptics {
    fn trigger(&mut self, intensity: HapticIntensity) {
        self.events.push(intensity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_keeps_order_and_counts() {
        let mut h = RecordingHaptics::new();
        h.trigger(HapticIntensity::Light);
        h.trigger(HapticIntensity::Medium);
        h.trigger(HapticIntensity::Light);
        assert_eq!(
            h.events(),
            &[
                HapticIntensity::Light,
                HapticIntensity::Medium,
                HapticIntensity::Light
            ]
        );
        assert_eq!(h.count(HapticIntensity::Light), 2);
        assert_eq!(h.count(HapticIntensity::Heavy), 0);

        h.clear();
        assert!(h.events().is_empty());
    }

    #[test]
    fn closures_are_emitters() {
        let mut seen = Vec::new();
        {
            let mut emit = |i: HapticIntensity| seen.push(i.duration_ms());
            emit.trigger(HapticIntensity::Heavy);
            emit.trigger(HapticIntensity::Light);
        }
        assert_eq!(seen, [30, 10]);
    }
}
