// SPDX-License-Identifier: MIT OR Apache-2.0
//! Easing curves for the Stagehand action runtime.
//!
//! This crate provides the timing side of the runtime:
//! - The classic Penner easing families (`Linear` through `Elastic`),
//!   each with `ease_in`, `ease_out` and `ease_in_out` variants
//! - The [`Easing`] catalogue enum for naming curves in data
//! - The [`TimingCurve`] type actions hold, including custom closures
//!
//! ## Architecture
//!
//! Curves are pure single-precision functions over the raw
//! `f(t, b, c, d)` signature: elapsed time, start value, total change,
//! duration. Callers clamp `t` into `[0, d]` before evaluating; the
//! action runtime does this in its playback core.

pub mod curves;
pub mod timing;

pub use curves::{Back, Bounce, Circ, Cubic, Elastic, Expo, Linear, Quad, Quart, Quint, Sine};
pub use timing::{Easing, ParseEasingError, TimingCurve};
