// Copyright 2026 the Touchform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Visual transform state of the manipulated shape.
///
/// The state is a plain record: non-uniform scale, cumulative rotation, a
/// focus point the shape center is pinned to, and an opacity. The
/// `last_scale_x` / `last_alpha` fields are the rollback baselines captured
/// when the previous gesture stream ended; they are what keeps width
/// deformation and opacity mutually exclusive within one two-finger motion
/// segment.
///
/// All transitions are synchronous in-place mutations through `&mut self`;
/// the rendering side only ever reads, via [`TransformState::compose`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Cumulative rotation in degrees. Not normalized; it wraps naturally
    /// through the trigonometric composition in [`TransformState::compose`].
    pub rotation_deg: f64,
    /// Translation target: the scaled-and-rotated shape center lands here.
    pub focus: Point,
    /// Opacity, `0` transparent to `255` opaque.
    pub alpha: u8,
    /// Horizontal scale committed at the end of the previous gesture stream.
    pub last_scale_x: f64,
    /// Opacity committed at the end of the previous gesture stream.
    pub last_alpha: u8,
}

impl TransformState {
    /// Smallest scale factor a pinch can reach.
    pub const SCALE_MIN: f64 = 0.1;
    /// Largest scale factor any update can reach.
    pub const SCALE_MAX: f64 = 5.0;
    /// Width deformation is bounded to this ratio of the vertical scale.
    pub const DEFORM_RATIO: f64 = 3.0;
    /// Horizontal travel in view units per 1.0 of width deformation.
    pub const DEFORM_DIVISOR: f64 = 100.0;

    /// Creates the identity state: unit scale, no rotation, focus at the
    /// origin, fully opaque, baselines equal to the current values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            rotation_deg: 0.0,
            focus: Point::ZERO,
            alpha: 255,
            last_scale_x: 1.0,
            last_alpha: 255,
        }
    }

    /// Translates the focus opposite to the finger travel delta.
    ///
    /// Translation is unbounded; the shape may be panned off-screen.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.focus -= delta;
    }

    /// Applies a vertically dominant two-finger move: fade.
    ///
    /// Any width deformation drift accumulated earlier in this motion
    /// segment is rolled back to the committed baseline, then the opacity
    /// follows the vertical travel. Moving the fingers up fades the shape
    /// out.
    pub fn fade_by(&mut self, dy: f64) {
        self.scale_x = self.last_scale_x;
        self.alpha = clamp_alpha(f64::from(self.alpha) - dy);
    }

    /// Applies a horizontally dominant two-finger move: width deformation.
    ///
    /// Any opacity drift accumulated earlier in this motion segment is
    /// rolled back to the committed baseline, then the horizontal scale
    /// follows the horizontal travel, bounded relative to the vertical
    /// scale so the shape cannot be squeezed or stretched past recognition.
    pub fn deform_by(&mut self, dx: f64) {
        self.alpha = self.last_alpha;
        self.scale_x -= dx / Self::DEFORM_DIVISOR;
        self.scale_x = (self.scale_y / Self::DEFORM_RATIO)
            .max(self.scale_x.min((Self::DEFORM_RATIO * self.scale_y).min(Self::SCALE_MAX)));
    }

    /// Applies an incremental pinch/rotate.
    ///
    /// Both scale factors are multiplied by `factor` and clamped to
    /// [`TransformState::SCALE_MIN`]..=[`TransformState::SCALE_MAX`]
    /// independently. `angle` is in radians; the accumulated rotation is
    /// kept in degrees and never normalized.
    pub fn pinch_by(&mut self, factor: f64, angle: f64) {
        self.scale_x = (self.scale_x * factor).clamp(Self::SCALE_MIN, Self::SCALE_MAX);
        self.scale_y = (self.scale_y * factor).clamp(Self::SCALE_MIN, Self::SCALE_MAX);
        self.rotation_deg += angle.to_degrees();
    }

    /// Recenters the focus on the viewport and removes width deformation.
    ///
    /// The current uniform size is preserved: the horizontal scale snaps to
    /// the vertical one, not back to 1.0.
    pub fn recenter(&mut self, viewport: Size) {
        self.focus = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        self.scale_x = self.scale_y;
    }

    /// Commits the current values as the rollback baseline.
    ///
    /// Called exactly when the gesture stream ends, never mid-gesture.
    pub fn commit(&mut self) {
        self.last_scale_x = self.scale_x;
        self.last_alpha = self.alpha;
    }

    /// Composes the affine transform for a shape of the given unscaled size.
    ///
    /// Reading right to left: scale, rotate about the scaled shape center,
    /// then translate so that center lands on the focus point. Two calls on
    /// unchanged state map every point identically.
    #[must_use]
    pub fn compose(&self, base: Size) -> Affine {
        let center = Point::new(
            self.scale_x * base.width / 2.0,
            self.scale_y * base.height / 2.0,
        );
        Affine::translate(self.focus - center)
            * Affine::rotate_about(self.rotation_deg.to_radians(), center)
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_alpha(value: f64) -> u8 {
    // Clamped into u8 range before the narrowing cast.
    value.clamp(0.0, 255.0) as u8
}
