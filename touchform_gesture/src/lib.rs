// Copyright 2026 the Touchform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=touchform_gesture --heading-base-level=0

//! Touchform Gesture: classified multi-touch gesture events and the
//! motion-axis classifier contract.
//!
//! This crate defines the boundary between a platform gesture recognizer and
//! the transform logic built on top of it. It contains no recognition logic
//! for raw pointer events; it starts where recognition ends:
//!
//! - [`GestureEvent`]: the classified events a recognizer emits: sustained
//!   finger movement, pinch/rotate, double-tap, and the end of a gesture
//!   stream when all fingers lift.
//! - [`MotionClassifier`]: the capability a recognizer must offer so that
//!   two-finger movement can be interpreted: a query for the dominant
//!   travel axis of the current motion segment, and a command to release
//!   that axis lock between segments.
//! - [`MotionLock`]: a minimal sticky axis-lock state machine for hosts
//!   that implement the classifier side themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use touchform_gesture::{MotionClassifier, MotionLock, TravelAxis};
//!
//! let mut lock = MotionLock::default();
//! assert_eq!(lock.axis(), TravelAxis::Undetermined);
//!
//! // The first observed movement decides the axis for the whole segment.
//! lock.observe(Vec2::new(2.0, 9.0));
//! assert_eq!(lock.travel_axis(), TravelAxis::Vertical);
//!
//! // Later movement does not change it, however horizontal it is.
//! lock.observe(Vec2::new(40.0, 0.0));
//! assert_eq!(lock.travel_axis(), TravelAxis::Vertical);
//!
//! // Releasing the lock starts the next segment undetermined.
//! lock.release_motion_lock();
//! assert_eq!(lock.axis(), TravelAxis::Undetermined);
//! ```
//!
//! ## Design notes
//!
//! - Events are a plain tagged enum dispatched synchronously; there is no
//!   listener object to subclass and no callback registration.
//! - The travel axis is passed around as an explicit [`TravelAxis`] value
//!   rather than a boolean query, so the undetermined state is visible to
//!   callers instead of defaulting silently.
//! - [`TravelAxis`] itself implements [`MotionClassifier`], which makes a
//!   pre-classified axis usable directly in tests and examples.
//!
//! This crate is `no_std`.

#![no_std]

mod axis;
mod event;

pub use axis::{MotionClassifier, MotionLock, TravelAxis};
pub use event::GestureEvent;
