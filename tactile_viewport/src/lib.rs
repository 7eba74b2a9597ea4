// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_viewport --heading-base-level=0

//! Tactile Viewport: responsive mode switching by viewport width.
//!
//! [`ResponsiveModeSwitcher`] classifies the viewport as mobile, tablet, or
//! desktop and reports transitions on resize. Touch gestures are mounted only
//! on mobile and tablet widths.
//!
//! ```rust
//! use tactile_viewport::{ResponsiveModeSwitcher, ViewportClass};
//!
//! let mut modes = ResponsiveModeSwitcher::new(390.0);
//! assert!(modes.is_mobile());
//! assert!(modes.gestures_enabled());
//!
//! // Rotating to landscape on a tablet keeps gestures mounted.
//! let change = modes.resize(900.0).unwrap();
//! assert_eq!(change.to, ViewportClass::Tablet);
//! assert!(!change.unmounts_gestures());
//!
//! // Same class: no change reported.
//! assert_eq!(modes.resize(1000.0), None);
//!
//! let change = modes.resize(1280.0).unwrap();
//! assert!(change.unmounts_gestures());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use thiserror::Error;
use tracing::debug;

/// Width class of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Narrower than the tablet breakpoint.
    Mobile,
    /// At least the tablet breakpoint, narrower than the desktop one.
    Tablet,
    /// At least the desktop breakpoint.
    Desktop,
}

impl ViewportClass {
    /// Returns `true` for classes that mount touch gestures.
    #[must_use]
    pub fn supports_gestures(self) -> bool {
        matches!(self, Self::Mobile | Self::Tablet)
    }
}

/// A rejected breakpoint pair.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum BreakpointError {
    /// A breakpoint was not a positive, finite width.
    #[error("breakpoint widths must be positive and finite (got {0})")]
    InvalidWidth(f64),
    /// The tablet breakpoint was not below the desktop breakpoint.
    #[error("tablet breakpoint {tablet} must be below desktop breakpoint {desktop}")]
    Inverted {
        /// Tablet breakpoint.
        tablet: f64,
        /// Desktop breakpoint.
        desktop: f64,
    },
}

/// Minimum widths, in CSS pixels, of the tablet and desktop classes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    tablet_min_width: f64,
    desktop_min_width: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet_min_width: 768.0,
            desktop_min_width: 1024.0,
        }
    }
}

impl Breakpoints {
    /// Creates breakpoints, checking that `tablet < desktop`.
    pub fn new(tablet_min_width: f64, desktop_min_width: f64) -> Result<Self, BreakpointError> {
        for width in [tablet_min_width, desktop_min_width] {
            if !(width.is_finite() && width > 0.0) {
                return Err(BreakpointError::InvalidWidth(width));
            }
        }
        if tablet_min_width >= desktop_min_width {
            return Err(BreakpointError::Inverted {
                tablet: tablet_min_width,
                desktop: desktop_min_width,
            });
        }
        Ok(Self {
            tablet_min_width,
            desktop_min_width,
        })
    }

    /// Minimum tablet width.
    #[must_use]
    pub fn tablet_min_width(&self) -> f64 {
        self.tablet_min_width
    }

    /// Minimum desktop width.
    #[must_use]
    pub fn desktop_min_width(&self) -> f64 {
        self.desktop_min_width
    }

    /// Classifies a viewport width.
    #[must_use]
    pub fn classify(&self, width: f64) -> ViewportClass {
        if width >= self.desktop_min_width {
            ViewportClass::Desktop
        } else if width >= self.tablet_min_width {
            ViewportClass::Tablet
        } else {
            ViewportClass::Mobile
        }
    }
}

/// A change of viewport class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeChange {
    /// Class before the resize.
    pub from: ViewportClass,
    /// Class after the resize.
    pub to: ViewportClass,
}

impl ModeChange {
    /// Returns `true` if gestures must be cancelled and unmounted.
    #[must_use]
    pub fn unmounts_gestures(&self) -> bool {
        self.from.supports_gestures() && !self.to.supports_gestures()
    }

    /// Returns `true` if gestures become available.
    #[must_use]
    pub fn mounts_gestures(&self) -> bool {
        !self.from.supports_gestures() && self.to.supports_gestures()
    }
}

/// Tracks the viewport class across resizes.
#[derive(Clone, Copy, Debug)]
pub struct ResponsiveModeSwitcher {
    breakpoints: Breakpoints,
    width: f64,
    class: ViewportClass,
}

impl ResponsiveModeSwitcher {
    /// Creates a switcher with the default breakpoints.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self::with_breakpoints(Breakpoints::default(), width)
    }

    /// Creates a switcher with custom breakpoints.
    #[must_use]
    pub fn with_breakpoints(breakpoints: Breakpoints, width: f64) -> Self {
        Self {
            breakpoints,
            width,
            class: breakpoints.classify(width),
        }
    }

    /// Current viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Current viewport class.
    #[must_use]
    pub fn class(&self) -> ViewportClass {
        self.class
    }

    /// Returns `true` on mobile widths.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.class == ViewportClass::Mobile
    }

    /// Returns `true` on tablet widths.
    #[must_use]
    pub fn is_tablet(&self) -> bool {
        self.class == ViewportClass::Tablet
    }

    /// Returns `true` while touch gestures should be mounted.
    #[must_use]
    pub fn gestures_enabled(&self) -> bool {
        self.class.supports_gestures()
    }

    /// Records a new viewport width and returns the class change, if any.
    pub fn resize(&mut self, width: f64) -> Option<ModeChange> {
        self.width = width;
        let class = self.breakpoints.classify(width);
        if class == self.class {
            return None;
        }
        let change = ModeChange {
            from: self.class,
            to: class,
        };
        debug!(width, from = ?change.from, to = ?change.to, "viewport class changed");
        self.class = class;
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_breakpoints_classify_edges() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(0.0), ViewportClass::Mobile);
        assert_eq!(bp.classify(767.9), ViewportClass::Mobile);
        assert_eq!(bp.classify(768.0), ViewportClass::Tablet);
        assert_eq!(bp.classify(1023.0), ViewportClass::Tablet);
        assert_eq!(bp.classify(1024.0), ViewportClass::Desktop);
    }

    #[test]
    fn resize_reports_only_class_changes() {
        let mut modes = ResponsiveModeSwitcher::new(1440.0);
        assert!(!modes.gestures_enabled());
        assert_eq!(modes.resize(1200.0), None);
        assert_eq!(modes.width(), 1200.0);

        let change = modes.resize(500.0).unwrap();
        assert_eq!(
            change,
            ModeChange {
                from: ViewportClass::Desktop,
                to: ViewportClass::Mobile
            }
        );
        assert!(change.mounts_gestures());
        assert!(!change.unmounts_gestures());
        assert!(modes.is_mobile() && !modes.is_tablet());
    }

    #[test]
    fn mobile_tablet_switch_keeps_gestures() {
        let mut modes = ResponsiveModeSwitcher::new(400.0);
        let change = modes.resize(800.0).unwrap();
        assert!(!change.mounts_gestures());
        assert!(!change.unmounts_gestures());
        assert!(modes.is_tablet());
    }

    #[test]
    fn breakpoint_validation() {
        assert_eq!(
            Breakpoints::new(1024.0, 768.0),
            Err(BreakpointError::Inverted {
                tablet: 1024.0,
                desktop: 768.0
            })
        );
        assert!(Breakpoints::new(-1.0, 768.0).is_err());
        assert!(Breakpoints::new(600.0, f64::INFINITY).is_err());

        let bp = Breakpoints::new(600.0, 900.0).unwrap();
        let modes = ResponsiveModeSwitcher::with_breakpoints(bp, 700.0);
        assert!(modes.is_tablet());
    }
}
