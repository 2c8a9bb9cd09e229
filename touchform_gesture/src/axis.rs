// Copyright 2026 the Touchform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Dominant travel axis of a two-finger motion segment.
///
/// A motion segment runs from the moment two fingers start moving until the
/// gesture stream ends. Its axis is decided once, at the first observed
/// movement, and stays fixed for the rest of the segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TravelAxis {
    /// No movement has been observed in the current segment yet.
    #[default]
    Undetermined,
    /// The segment travels mostly along the X axis.
    Horizontal,
    /// The segment travels mostly along the Y axis.
    Vertical,
}

/// Capability contract offered by a gesture recognizer for two-finger moves.
///
/// The transform layer queries the travel axis once per two-finger move and
/// releases the lock exactly when the gesture stream ends, so the next
/// segment starts undetermined.
pub trait MotionClassifier {
    /// Returns the dominant travel axis of the current motion segment.
    fn travel_axis(&self) -> TravelAxis;

    /// Clears the sticky axis lock for the next motion segment.
    fn release_motion_lock(&mut self);
}

/// A pre-classified axis is its own classifier.
///
/// Useful when the axis is known up front, as in tests, or when a platform
/// recognizer already exposes a per-event axis.
impl MotionClassifier for TravelAxis {
    fn travel_axis(&self) -> TravelAxis {
        *self
    }

    fn release_motion_lock(&mut self) {
        *self = TravelAxis::Undetermined;
    }
}

/// Sticky axis-lock state machine.
///
/// `MotionLock` decides the travel axis from the first nonzero movement it
/// observes and holds that decision until [`MotionLock::release`] is called.
/// Hosts that receive per-event deltas can feed them through
/// [`MotionLock::observe`] and use the lock as their [`MotionClassifier`].
///
/// ```rust
/// use kurbo::Vec2;
/// use touchform_gesture::{MotionLock, TravelAxis};
///
/// let mut lock = MotionLock::default();
/// assert_eq!(lock.observe(Vec2::new(12.0, -3.0)), TravelAxis::Horizontal);
/// // Sticky: a vertical move later in the segment does not re-classify.
/// assert_eq!(lock.observe(Vec2::new(0.0, 50.0)), TravelAxis::Horizontal);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionLock {
    axis: TravelAxis,
}

impl MotionLock {
    /// Creates an unlocked state machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a movement delta, locking the axis on the first nonzero one.
    ///
    /// Equal nonzero components lock to [`TravelAxis::Horizontal`]; a zero
    /// delta leaves the lock undetermined. Returns the axis in effect after
    /// the observation.
    pub fn observe(&mut self, delta: Vec2) -> TravelAxis {
        if self.axis == TravelAxis::Undetermined && delta != Vec2::ZERO {
            self.axis = if delta.y.abs() > delta.x.abs() {
                TravelAxis::Vertical
            } else {
                TravelAxis::Horizontal
            };
        }
        self.axis
    }

    /// Returns the current axis without observing any movement.
    #[must_use]
    pub fn axis(&self) -> TravelAxis {
        self.axis
    }

    /// Releases the lock; the next observation re-classifies.
    pub fn release(&mut self) {
        self.axis = TravelAxis::Undetermined;
    }
}

impl MotionClassifier for MotionLock {
    fn travel_axis(&self) -> TravelAxis {
        self.axis
    }

    fn release_motion_lock(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_lock_is_undetermined() {
        let lock = MotionLock::new();
        assert_eq!(lock.axis(), TravelAxis::Undetermined);
        assert_eq!(lock.travel_axis(), TravelAxis::Undetermined);
    }

    #[test]
    fn zero_delta_does_not_lock() {
        let mut lock = MotionLock::new();
        assert_eq!(lock.observe(Vec2::ZERO), TravelAxis::Undetermined);
        assert_eq!(lock.axis(), TravelAxis::Undetermined);
    }

    #[test]
    fn first_vertical_delta_locks_vertical() {
        let mut lock = MotionLock::new();
        assert_eq!(lock.observe(Vec2::new(1.0, -4.0)), TravelAxis::Vertical);
    }

    #[test]
    fn first_horizontal_delta_locks_horizontal() {
        let mut lock = MotionLock::new();
        assert_eq!(lock.observe(Vec2::new(-7.0, 2.0)), TravelAxis::Horizontal);
    }

    #[test]
    fn equal_components_lock_horizontal() {
        let mut lock = MotionLock::new();
        assert_eq!(lock.observe(Vec2::new(3.0, 3.0)), TravelAxis::Horizontal);
    }

    #[test]
    fn lock_is_sticky_within_a_segment() {
        let mut lock = MotionLock::new();
        lock.observe(Vec2::new(0.0, 10.0));
        assert_eq!(lock.observe(Vec2::new(100.0, 0.0)), TravelAxis::Vertical);
        assert_eq!(lock.axis(), TravelAxis::Vertical);
    }

    #[test]
    fn release_restarts_classification() {
        let mut lock = MotionLock::new();
        lock.observe(Vec2::new(0.0, 10.0));
        lock.release();
        assert_eq!(lock.axis(), TravelAxis::Undetermined);
        assert_eq!(lock.observe(Vec2::new(10.0, 0.0)), TravelAxis::Horizontal);
    }

    #[test]
    fn fixed_axis_acts_as_classifier() {
        let mut axis = TravelAxis::Vertical;
        assert_eq!(axis.travel_axis(), TravelAxis::Vertical);
        axis.release_motion_lock();
        assert_eq!(axis, TravelAxis::Undetermined);
    }

    #[test]
    fn classifier_release_matches_inherent_release() {
        let mut lock = MotionLock::new();
        lock.observe(Vec2::new(5.0, 0.0));
        lock.release_motion_lock();
        assert_eq!(lock.axis(), TravelAxis::Undetermined);
    }
}
