// Copyright 2026 the Touchform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// A classified multi-touch gesture event.
///
/// These are the events a gesture recognizer emits after consuming raw
/// pointer input. Deltas follow scroll conventions: a positive component
/// means the fingers traveled toward the coordinate origin since the last
/// event.
///
/// The enum is dispatched synchronously; event order is the order in which
/// the underlying touch events occurred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Sustained finger movement with the given pointer count.
    Move {
        /// Number of fingers on the surface.
        pointers: u32,
        /// Movement since the previous event, in view coordinates.
        delta: Vec2,
    },
    /// Two-finger pinch with an incremental scale factor and rotation.
    PinchRotate {
        /// Multiplicative scale change since the previous event.
        scale: f64,
        /// Rotation change since the previous event, in radians.
        angle: f64,
    },
    /// Double-tap, with the viewport size supplied by the caller.
    ///
    /// The viewport travels in the event because the transform layer holds
    /// no display-metrics dependency of its own.
    DoubleTap {
        /// Current viewport dimensions in view coordinates.
        viewport: Size,
    },
    /// All fingers lifted; the gesture stream is over.
    StreamEnd,
}

impl GestureEvent {
    /// Single-finger movement by `(dx, dy)`.
    #[must_use]
    pub fn pan(dx: f64, dy: f64) -> Self {
        Self::Move {
            pointers: 1,
            delta: Vec2::new(dx, dy),
        }
    }

    /// Two-finger movement by `(dx, dy)`.
    #[must_use]
    pub fn two_finger_pan(dx: f64, dy: f64) -> Self {
        Self::Move {
            pointers: 2,
            delta: Vec2::new(dx, dy),
        }
    }
}
