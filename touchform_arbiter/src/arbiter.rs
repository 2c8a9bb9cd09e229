// Copyright 2026 the Touchform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size};
use touchform_gesture::{GestureEvent, MotionClassifier, TravelAxis};

use crate::state::TransformState;

/// Whether the arbiter acted on an event.
///
/// [`Outcome::Ignored`] is returned only for a [`GestureEvent::Move`] with
/// an unsupported pointer count, so the caller can hand the event to
/// another consumer. Nothing ever panics or errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The event updated (or deliberately preserved) the transform state.
    Handled,
    /// The event is not the arbiter's to handle.
    Ignored,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Handled`].
    #[must_use]
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

/// Turns classified gesture events into a clamped transform and opacity.
///
/// The arbiter owns a [`TransformState`] and is its only writer. One
/// gesture event enters through [`TransformArbiter::handle`]; the composed
/// transform leaves through [`TransformArbiter::compose`]. Two-finger moves
/// are arbitrated between fading and width deformation using the travel
/// axis the classifier reports, with the losing interpretation held at its
/// last committed baseline for the rest of the motion segment.
#[derive(Clone, Copy, Debug)]
pub struct TransformArbiter {
    state: TransformState,
    base_size: Size,
}

impl TransformArbiter {
    /// Unscaled shape size used by [`TransformArbiter::default`].
    pub const DEFAULT_SHAPE_SIZE: Size = Size::new(300.0, 300.0);

    /// Creates an arbiter for a shape of the given unscaled size.
    ///
    /// The size only feeds the rotation pivot in
    /// [`TransformArbiter::compose`]; it is not a clamp on anything.
    #[must_use]
    pub fn new(base_size: Size) -> Self {
        Self {
            state: TransformState::new(),
            base_size,
        }
    }

    /// Applies one gesture event to the transform state.
    ///
    /// - `Move` with one pointer pans the focus; with two pointers the
    ///   classifier's travel axis picks fade (vertical) or width
    ///   deformation (otherwise); any other pointer count is
    ///   [`Outcome::Ignored`] and leaves the state untouched.
    /// - `PinchRotate` scales both axes and accumulates rotation.
    /// - `DoubleTap` recenters on the supplied viewport and removes
    ///   deformation.
    /// - `StreamEnd` commits the rollback baselines and releases the
    ///   classifier's axis lock, so the next segment starts undetermined.
    pub fn handle<C>(&mut self, event: GestureEvent, classifier: &mut C) -> Outcome
    where
        C: MotionClassifier + ?Sized,
    {
        match event {
            GestureEvent::Move { pointers: 1, delta } => self.state.pan_by(delta),
            GestureEvent::Move { pointers: 2, delta } => match classifier.travel_axis() {
                TravelAxis::Vertical => self.state.fade_by(delta.y),
                // An undetermined segment reads as horizontal, matching a
                // recognizer whose vertical lock has not engaged yet.
                TravelAxis::Horizontal | TravelAxis::Undetermined => {
                    self.state.deform_by(delta.x);
                }
            },
            GestureEvent::Move { .. } => return Outcome::Ignored,
            GestureEvent::PinchRotate { scale, angle } => self.state.pinch_by(scale, angle),
            GestureEvent::DoubleTap { viewport } => self.state.recenter(viewport),
            GestureEvent::StreamEnd => {
                self.state.commit();
                classifier.release_motion_lock();
            }
        }
        Outcome::Handled
    }

    /// Composes the current transform and opacity for rendering.
    ///
    /// Pure read; call it after every handled event to reposition the
    /// shape. See [`TransformState::compose`] for the composition order.
    #[must_use]
    pub fn compose(&self) -> (Affine, u8) {
        (self.state.compose(self.base_size), self.state.alpha)
    }

    /// Returns the transform state for inspection.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Returns the unscaled shape size the rotation pivot derives from.
    #[must_use]
    pub fn base_size(&self) -> Size {
        self.base_size
    }

    /// Snapshot of the current arbiter state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ArbiterDebugInfo {
        ArbiterDebugInfo {
            base_size: self.base_size,
            scale_x: self.state.scale_x,
            scale_y: self.state.scale_y,
            rotation_deg: self.state.rotation_deg,
            focus: self.state.focus,
            alpha: self.state.alpha,
            last_scale_x: self.state.last_scale_x,
            last_alpha: self.state.last_alpha,
            scale_min: TransformState::SCALE_MIN,
            scale_max: TransformState::SCALE_MAX,
        }
    }
}

impl Default for TransformArbiter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SHAPE_SIZE)
    }
}

/// Debug snapshot of a [`TransformArbiter`] state.
#[derive(Clone, Copy, Debug)]
pub struct ArbiterDebugInfo {
    /// Unscaled shape size the rotation pivot derives from.
    pub base_size: Size,
    /// Current horizontal scale factor.
    pub scale_x: f64,
    /// Current vertical scale factor.
    pub scale_y: f64,
    /// Cumulative rotation in degrees.
    pub rotation_deg: f64,
    /// Current translation target.
    pub focus: Point,
    /// Current opacity.
    pub alpha: u8,
    /// Committed horizontal-scale baseline.
    pub last_scale_x: f64,
    /// Committed opacity baseline.
    pub last_alpha: u8,
    /// Smallest reachable scale factor.
    pub scale_min: f64,
    /// Largest reachable scale factor.
    pub scale_max: f64,
}
