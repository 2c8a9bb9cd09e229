// Copyright 2026 the Touchform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=touchform_arbiter --heading-base-level=0

//! Touchform Arbiter: turns classified multi-touch gestures into a clamped
//! 2D transform and opacity.
//!
//! This crate provides a small, headless model of a shape being manipulated
//! by touch: panned with one finger, pinched/rotated with two, squeezed
//! wider or narrower by horizontal two-finger travel, and faded by vertical
//! two-finger travel. It focuses on:
//! - Owning the transform state (non-uniform scale, rotation, focus,
//!   opacity) and its commit/rollback baselines.
//! - Arbitrating between the two competing two-finger interpretations:
//!   vertical travel fades, horizontal travel deforms, and only one of the
//!   two can move per motion segment.
//! - Clamping every scale update so the shape stays visible and
//!   recognizable.
//! - Composing the `kurbo::Affine` + opacity a renderer applies per touch
//!   update.
//!
//! It does **not** recognize gestures from raw pointer events and does not
//! render anything. Callers are expected to:
//! - Run a platform gesture recognizer that emits
//!   [`touchform_gesture::GestureEvent`] values and answers the
//!   [`touchform_gesture::MotionClassifier`] queries.
//! - Feed each event through [`TransformArbiter::handle`] on the event
//!   thread, in arrival order.
//! - Apply the result of [`TransformArbiter::compose`] to their view.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use touchform_arbiter::TransformArbiter;
//! use touchform_gesture::{GestureEvent, TravelAxis};
//!
//! let mut arbiter = TransformArbiter::new(Size::new(300.0, 300.0));
//!
//! // One finger drags the shape around.
//! let mut axis = TravelAxis::Undetermined;
//! arbiter.handle(GestureEvent::pan(-120.0, -80.0), &mut axis);
//!
//! // Two fingers moving horizontally squeeze its width.
//! let mut axis = TravelAxis::Horizontal;
//! arbiter.handle(GestureEvent::two_finger_pan(50.0, 3.0), &mut axis);
//! assert_eq!(arbiter.state().scale_x, 0.5);
//!
//! // Fingers lift: the squeezed width becomes the new baseline.
//! arbiter.handle(GestureEvent::StreamEnd, &mut axis);
//! assert_eq!(arbiter.state().last_scale_x, 0.5);
//!
//! let (transform, alpha) = arbiter.compose();
//! assert_eq!(alpha, 255);
//! let _ = transform; // apply to the rendered shape
//! ```
//!
//! ## Mode exclusivity
//!
//! During one continuous two-finger motion segment the classifier's travel
//! axis picks a single interpretation. The inactive value is not merely
//! left alone; it is actively held at the baseline committed when the
//! previous gesture stream ended, so drift from before the axis locked is
//! rolled back:
//!
//! ```rust
//! use kurbo::Size;
//! use touchform_arbiter::TransformArbiter;
//! use touchform_gesture::{GestureEvent, TravelAxis};
//!
//! let mut arbiter = TransformArbiter::new(Size::new(300.0, 300.0));
//! let mut axis = TravelAxis::Vertical;
//! arbiter.handle(GestureEvent::two_finger_pan(9.0, 100.0), &mut axis);
//!
//! // Fading moved alpha, width stayed at its baseline.
//! assert_eq!(arbiter.state().alpha, 155);
//! assert_eq!(arbiter.state().scale_x, arbiter.state().last_scale_x);
//! ```
//!
//! ## Design notes
//!
//! - All operations are synchronous state transitions on the caller's
//!   thread; nothing suspends, blocks, or reorders events.
//! - The only rejected input is a move with an unsupported pointer count,
//!   reported as [`Outcome::Ignored`] rather than an error.
//! - Pathological numeric inputs are absorbed by clamping, never rejected.
//!
//! This crate is `no_std`.

#![no_std]

mod arbiter;
mod state;

pub use arbiter::{ArbiterDebugInfo, Outcome, TransformArbiter};
pub use state::TransformState;
