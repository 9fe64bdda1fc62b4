// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timing-curve selection types.
//!
//! [`Easing`] names every built-in curve so curve choices can live in
//! serialized data; [`TimingCurve`] is what actions actually hold and
//! additionally admits a caller-supplied closure.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::curves::{Back, Bounce, Circ, Cubic, Elastic, Expo, Linear, Quad, Quart, Quint, Sine};

/// Error returned when parsing an easing curve name fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized easing curve name: `{0}`")]
pub struct ParseEasingError(String);

/// Every built-in easing curve, by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Easing {
    /// Constant velocity
    #[default]
    Linear,
    /// Quadratic, accelerating
    QuadIn,
    /// Quadratic, decelerating
    QuadOut,
    /// Quadratic, accelerating then decelerating
    QuadInOut,
    /// Cubic, accelerating
    CubicIn,
    /// Cubic, decelerating
    CubicOut,
    /// Cubic, accelerating then decelerating
    CubicInOut,
    /// Quartic, accelerating
    QuartIn,
    /// Quartic, decelerating
    QuartOut,
    /// Quartic, accelerating then decelerating
    QuartInOut,
    /// Quintic, accelerating
    QuintIn,
    /// Quintic, decelerating
    QuintOut,
    /// Quintic, accelerating then decelerating
    QuintInOut,
    /// Sinusoidal, accelerating
    SineIn,
    /// Sinusoidal, decelerating
    SineOut,
    /// Sinusoidal, accelerating then decelerating
    SineInOut,
    /// Circular, accelerating
    CircIn,
    /// Circular, decelerating
    CircOut,
    /// Circular, accelerating then decelerating
    CircInOut,
    /// Exponential, accelerating
    ExpoIn,
    /// Exponential, decelerating
    ExpoOut,
    /// Exponential, accelerating then decelerating
    ExpoInOut,
    /// Undershoot, then accelerate
    BackIn,
    /// Overshoot, then settle
    BackOut,
    /// Undershoot and overshoot
    BackInOut,
    /// Bounces away from the start
    BounceIn,
    /// Bounces into the end
    BounceOut,
    /// Bounces at both ends
    BounceInOut,
    /// Elastic wind-up at the start
    ElasticIn,
    /// Elastic oscillation at the end
    ElasticOut,
    /// Elastic at both ends
    ElasticInOut,
}

/// Name/variant pairs backing `Display` and `FromStr`
const EASING_NAMES: [(&str, Easing); 31] = [
    ("linear", Easing::Linear),
    ("quad_in", Easing::QuadIn),
    ("quad_out", Easing::QuadOut),
    ("quad_in_out", Easing::QuadInOut),
    ("cubic_in", Easing::CubicIn),
    ("cubic_out", Easing::CubicOut),
    ("cubic_in_out", Easing::CubicInOut),
    ("quart_in", Easing::QuartIn),
    ("quart_out", Easing::QuartOut),
    ("quart_in_out", Easing::QuartInOut),
    ("quint_in", Easing::QuintIn),
    ("quint_out", Easing::QuintOut),
    ("quint_in_out", Easing::QuintInOut),
    ("sine_in", Easing::SineIn),
    ("sine_out", Easing::SineOut),
    ("sine_in_out", Easing::SineInOut),
    ("circ_in", Easing::CircIn),
    ("circ_out", Easing::CircOut),
    ("circ_in_out", Easing::CircInOut),
    ("expo_in", Easing::ExpoIn),
    ("expo_out", Easing::ExpoOut),
    ("expo_in_out", Easing::ExpoInOut),
    ("back_in", Easing::BackIn),
    ("back_out", Easing::BackOut),
    ("back_in_out", Easing::BackInOut),
    ("bounce_in", Easing::BounceIn),
    ("bounce_out", Easing::BounceOut),
    ("bounce_in_out", Easing::BounceInOut),
    ("elastic_in", Easing::ElasticIn),
    ("elastic_out", Easing::ElasticOut),
    ("elastic_in_out", Easing::ElasticInOut),
];

impl Easing {
    /// All built-in curves, in catalogue order
    pub const ALL: [Easing; 31] = {
        let mut all = [Easing::Linear; 31];
        let mut i = 0;
        while i < 31 {
            all[i] = EASING_NAMES[i].1;
            i += 1;
        }
        all
    };

    /// Evaluate this curve with the raw Penner signature
    ///
    /// `t` must be clamped to `[0, d]` and `d` must be non-zero
    pub fn apply(self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        match self {
            Easing::Linear => Linear::ease_in(t, b, c, d),
            Easing::QuadIn => Quad::ease_in(t, b, c, d),
            Easing::QuadOut => Quad::ease_out(t, b, c, d),
            Easing::QuadInOut => Quad::ease_in_out(t, b, c, d),
            Easing::CubicIn => Cubic::ease_in(t, b, c, d),
            Easing::CubicOut => Cubic::ease_out(t, b, c, d),
            Easing::CubicInOut => Cubic::ease_in_out(t, b, c, d),
            Easing::QuartIn => Quart::ease_in(t, b, c, d),
            Easing::QuartOut => Quart::ease_out(t, b, c, d),
            Easing::QuartInOut => Quart::ease_in_out(t, b, c, d),
            Easing::QuintIn => Quint::ease_in(t, b, c, d),
            Easing::QuintOut => Quint::ease_out(t, b, c, d),
            Easing::QuintInOut => Quint::ease_in_out(t, b, c, d),
            Easing::SineIn => Sine::ease_in(t, b, c, d),
            Easing::SineOut => Sine::ease_out(t, b, c, d),
            Easing::SineInOut => Sine::ease_in_out(t, b, c, d),
            Easing::CircIn => Circ::ease_in(t, b, c, d),
            Easing::CircOut => Circ::ease_out(t, b, c, d),
            Easing::CircInOut => Circ::ease_in_out(t, b, c, d),
            Easing::ExpoIn => Expo::ease_in(t, b, c, d),
            Easing::ExpoOut => Expo::ease_out(t, b, c, d),
            Easing::ExpoInOut => Expo::ease_in_out(t, b, c, d),
            Easing::BackIn => Back::ease_in(t, b, c, d),
            Easing::BackOut => Back::ease_out(t, b, c, d),
            Easing::BackInOut => Back::ease_in_out(t, b, c, d),
            Easing::BounceIn => Bounce::ease_in(t, b, c, d),
            Easing::BounceOut => Bounce::ease_out(t, b, c, d),
            Easing::BounceInOut => Bounce::ease_in_out(t, b, c, d),
            Easing::ElasticIn => Elastic::ease_in(t, b, c, d),
            Easing::ElasticOut => Elastic::ease_out(t, b, c, d),
            Easing::ElasticInOut => Elastic::ease_in_out(t, b, c, d),
        }
    }

    /// Stable snake_case name of this curve
    pub fn name(self) -> &'static str {
        // Every variant appears in EASING_NAMES; the fallback is unreachable
        EASING_NAMES
            .iter()
            .find(|(_, e)| *e == self)
            .map(|(name, _)| *name)
            .unwrap_or("linear")
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EASING_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, e)| *e)
            .ok_or_else(|| ParseEasingError(s.to_string()))
    }
}

/// The timing curve assigned to an action
///
/// Either one of the built-in [`Easing`] presets or a caller-supplied
/// function with the same `f(t, b, c, d)` contract
#[derive(Clone)]
pub enum TimingCurve {
    /// A built-in curve
    Preset(Easing),
    /// A caller-supplied curve function
    Custom(Arc<dyn Fn(f32, f32, f32, f32) -> f32 + Send + Sync>),
}

impl TimingCurve {
    /// Wrap a closure as a timing curve
    ///
    /// The closure receives `(t, b, c, d)` with `t` pre-clamped to
    /// `[0, d]` and must return the eased value
    pub fn custom(f: impl Fn(f32, f32, f32, f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Evaluate the curve at `t`
    pub fn evaluate(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        match self {
            Self::Preset(easing) => easing.apply(t, b, c, d),
            Self::Custom(f) => f(t, b, c, d),
        }
    }
}

impl Default for TimingCurve {
    fn default() -> Self {
        Self::Preset(Easing::Linear)
    }
}

impl From<Easing> for TimingCurve {
    fn from(easing: Easing) -> Self {
        Self::Preset(easing)
    }
}

impl fmt::Debug for TimingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(easing) => f.debug_tuple("Preset").field(easing).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
