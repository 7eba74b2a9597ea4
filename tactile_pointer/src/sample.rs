// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// One raw pointer reading for a bound surface.
///
/// Coordinates are surface-local pixels; the timestamp is monotonic
/// milliseconds from whatever clock the host uses for its input events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    /// Horizontal position in surface-local pixels.
    pub x: f64,
    /// Vertical position in surface-local pixels.
    pub y: f64,
    /// Monotonic timestamp in milliseconds.
    pub timestamp_ms: u64,
}

impl TouchSample {
    /// Creates a sample at `(x, y)` taken at `timestamp_ms`.
    #[must_use]
    pub const fn new(x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self { x, y, timestamp_ms }
    }

    /// Returns the sample position as a point.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the offset from `earlier` to this sample.
    #[must_use]
    pub fn offset_from(&self, earlier: &Self) -> Vec2 {
        self.point() - earlier.point()
    }

    /// Milliseconds elapsed since `earlier`, saturating at zero for
    /// out-of-order timestamps.
    #[must_use]
    pub fn elapsed_since(&self, earlier: &Self) -> u64 {
        self.timestamp_ms.saturating_sub(earlier.timestamp_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_relative_to_earlier_sample() {
        let a = TouchSample::new(10.0, 20.0, 100);
        let b = TouchSample::new(4.0, 35.0, 116);
        assert_eq!(b.offset_from(&a), Vec2::new(-6.0, 15.0));
        assert_eq!(b.elapsed_since(&a), 16);
    }

    #[test]
    fn elapsed_saturates_for_out_of_order_timestamps() {
        let a = TouchSample::new(0.0, 0.0, 200);
        let b = TouchSample::new(0.0, 0.0, 150);
        assert_eq!(b.elapsed_since(&a), 0);
    }
}
