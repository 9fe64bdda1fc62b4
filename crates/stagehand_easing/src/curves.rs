// SPDX-License-Identifier: MIT OR Apache-2.0
//! Robert Penner's easing functions.
//!
//! Every function shares the classic four-argument signature:
//! `f(t, b, c, d)` where `t` is the elapsed time, `b` the starting value,
//! `c` the total change and `d` the duration. `t` and `d` are in the same
//! unit (the caller decides which); `t` must already be clamped to
//! `[0, d]` and `d` must be non-zero.
//!
//! All curves satisfy `f(0, b, c, d) == b` and `f(d, b, c, d) == b + c`.

use std::f32::consts::{FRAC_PI_2, PI};

/// Constant-velocity interpolation
pub struct Linear;

impl Linear {
    /// Linear tween; identical to `ease_out` and `ease_in_out`
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        c * t / d + b
    }

    /// Linear tween; identical to `ease_in` and `ease_in_out`
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        c * t / d + b
    }

    /// Linear tween; identical to `ease_in` and `ease_out`
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        c * t / d + b
    }
}

/// Quadratic easing (t^2)
pub struct Quad;

impl Quad {
    /// Accelerate from rest
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d;
        c * t * t + b
    }

    /// Decelerate to rest
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d;
        -c * t * (t - 2.0) + b
    }

    /// Accelerate to the midpoint, then decelerate
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / (d / 2.0);
        if t < 1.0 {
            c / 2.0 * t * t + b
        } else {
            let t = t - 1.0;
            -c / 2.0 * (t * (t - 2.0) - 1.0) + b
        }
    }
}

/// Cubic easing (t^3)
pub struct Cubic;

impl Cubic {
    /// Accelerate from rest
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d;
        c * t * t * t + b
    }

    /// Decelerate to rest
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d - 1.0;
        c * (t * t * t + 1.0) + b
    }

    /// Accelerate to the midpoint, then decelerate
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / (d / 2.0);
        if t < 1.0 {
            c / 2.0 * t * t * t + b
        } else {
            let t = t - 2.0;
            c / 2.0 * (t * t * t + 2.0) + b
        }
    }
}

/// Quartic easing (t^4)
pub struct Quart;

impl Quart {
    /// Accelerate from rest
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d;
        c * t * t * t * t + b
    }

    /// Decelerate to rest
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d - 1.0;
        -c * (t * t * t * t - 1.0) + b
    }

    /// Accelerate to the midpoint, then decelerate
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / (d / 2.0);
        if t < 1.0 {
            c / 2.0 * t * t * t * t + b
        } else {
            let t = t - 2.0;
            -c / 2.0 * (t * t * t * t - 2.0) + b
        }
    }
}

/// Quintic easing (t^5)
pub struct Quint;

impl Quint {
    /// Accelerate from rest
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d;
        c * t * t * t * t * t + b
    }

    /// Decelerate to rest
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d - 1.0;
        c * (t * t * t * t * t + 1.0) + b
    }

    /// Accelerate to the midpoint, then decelerate
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / (d / 2.0);
        if t < 1.0 {
            c / 2.0 * t * t * t * t * t + b
        } else {
            let t = t - 2.0;
            c / 2.0 * (t * t * t * t * t + 2.0) + b
        }
    }
}

/// Sinusoidal easing (quarter-cosine wave)
pub struct Sine;

impl Sine {
    /// Accelerate from rest
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        -c * (t / d * FRAC_PI_2).cos() + c + b
    }

    /// Decelerate to rest
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        c * (t / d * FRAC_PI_2).sin() + b
    }

    /// Accelerate to the midpoint, then decelerate
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
    }
}

/// Circular easing (quarter-circle arc)
pub struct Circ;

impl Circ {
    /// Accelerate from rest
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d;
        -c * ((1.0 - t * t).sqrt() - 1.0) + b
    }

    /// Decelerate to rest
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d - 1.0;
        c * (1.0 - t * t).sqrt() + b
    }

    /// Accelerate to the midpoint, then decelerate
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / (d / 2.0);
        if t < 1.0 {
            -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b
        } else {
            let t = t - 2.0;
            c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
        }
    }
}

/// Exponential easing (powers of two)
pub struct Expo;

impl Expo {
    /// Accelerate from rest
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == 0.0 {
            b
        } else {
            c * 2.0_f32.powf(10.0 * (t / d - 1.0)) + b
        }
    }

    /// Decelerate to rest
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == d {
            b + c
        } else {
            c * (-(2.0_f32.powf(-10.0 * t / d)) + 1.0) + b
        }
    }

    /// Accelerate to the midpoint, then decelerate
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == 0.0 {
            return b;
        }
        if t == d {
            return b + c;
        }
        let t = t / (d / 2.0);
        if t < 1.0 {
            c / 2.0 * 2.0_f32.powf(10.0 * (t - 1.0)) + b
        } else {
            let t = t - 1.0;
            c / 2.0 * (-(2.0_f32.powf(-10.0 * t)) + 2.0) + b
        }
    }
}

/// Back easing: pulls past the start (or end) before settling
pub struct Back;

impl Back {
    /// Accelerate from rest, undershooting the start first
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let s = 1.70158;
        let t = t / d;
        c * t * t * ((s + 1.0) * t - s) + b
    }

    /// Decelerate to rest, overshooting the end first
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let s = 1.70158;
        let t = t / d - 1.0;
        c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
    }

    /// Undershoot, accelerate through the midpoint, overshoot, settle
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let s = 1.70158 * 1.525;
        let t = t / (d / 2.0);
        if t < 1.0 {
            c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b
        } else {
            let t = t - 2.0;
            c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
        }
    }
}

/// Bounce easing: a decaying series of parabolic bounces
pub struct Bounce;

impl Bounce {
    /// Bounce away from the start
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        c - Self::ease_out(d - t, 0.0, c, d) + b
    }

    /// Bounce into the end
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        let t = t / d;
        if t < 1.0 / 2.75 {
            c * (7.5625 * t * t) + b
        } else if t < 2.0 / 2.75 {
            let t = t - 1.5 / 2.75;
            c * (7.5625 * t * t + 0.75) + b
        } else if t < 2.5 / 2.75 {
            let t = t - 2.25 / 2.75;
            c * (7.5625 * t * t + 0.9375) + b
        } else {
            let t = t - 2.625 / 2.75;
            c * (7.5625 * t * t + 0.984375) + b
        }
    }

    /// Bounce away from the start, then into the end
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t < d / 2.0 {
            Self::ease_in(t * 2.0, 0.0, c, d) * 0.5 + b
        } else {
            Self::ease_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
        }
    }
}

/// Elastic easing: an exponentially decaying sine oscillation
pub struct Elastic;

impl Elastic {
    /// Wind up behind the start, then snap forward
    pub fn ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == 0.0 {
            return b;
        }
        let t = t / d;
        if t == 1.0 {
            return b + c;
        }
        let p = d * 0.3;
        let a = c;
        let s = p / 4.0;
        let t = t - 1.0;
        -(a * 2.0_f32.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
    }

    /// Overshoot the end, then oscillate into place
    pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == 0.0 {
            return b;
        }
        let t = t / d;
        if t == 1.0 {
            return b + c;
        }
        let p = d * 0.3;
        let a = c;
        let s = p / 4.0;
        a * 2.0_f32.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
    }

    /// Wind up, snap through the midpoint, oscillate into place
    pub fn ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
        if t == 0.0 {
            return b;
        }
        let t = t / (d / 2.0);
        if t == 2.0 {
            return b + c;
        }
        let p = d * (0.3 * 1.5);
        let a = c;
        let s = p / 4.0;
        if t < 1.0 {
            let t = t - 1.0;
            -0.5 * (a * 2.0_f32.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
        } else {
            let t = t - 1.0;
            a * 2.0_f32.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() * 0.5 + c + b
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type EaseFn = fn(f32, f32, f32, f32) -> f32;

    fn all_curves() -> Vec<(&'static str, EaseFn)> {
        vec![
            ("linear_in", Linear::ease_in),
            ("linear_out", Linear::ease_out),
            ("linear_in_out", Linear::ease_in_out),
            ("quad_in", Quad::ease_in),
            ("quad_out", Quad::ease_out),
            ("quad_in_out", Quad::ease_in_out),
            ("cubic_in", Cubic::ease_in),
            ("cubic_out", Cubic::ease_out),
            ("cubic_in_out", Cubic::ease_in_out),
            ("quart_in", Quart::ease_in),
            ("quart_out", Quart::ease_out),
            ("quart_in_out", Quart::ease_in_out),
            ("quint_in", Quint::ease_in),
            ("quint_out", Quint::ease_out),
            ("quint_in_out", Quint::ease_in_out),
            ("sine_in", Sine::ease_in),
            ("sine_out", Sine::ease_out),
            ("sine_in_out", Sine::ease_in_out),
            ("circ_in", Circ::ease_in),
            ("circ_out", Circ::ease_out),
            ("circ_in_out", Circ::ease_in_out),
            ("expo_in", Expo::ease_in),
            ("expo_out", Expo::ease_out),
            ("expo_in_out", Expo::ease_in_out),
            ("back_in", Back::ease_in),
            ("back_out", Back::ease_out),
            ("back_in_out", Back::ease_in_out),
            ("bounce_in", Bounce::ease_in),
            ("bounce_out", Bounce::ease_out),
            ("bounce_in_out", Bounce::ease_in_out),
            ("elastic_in", Elastic::ease_in),
            ("elastic_out", Elastic::ease_out),
            ("elastic_in_out", Elastic::ease_in_out),
        ]
    }

    #[test]
    fn test_boundary_conditions() {
        // Every curve must start at b and end at b + c, within 1e-3
        let triples = [(0.0, 100.0, 1.0), (50.0, -50.0, 0.25), (-20.0, 255.0, 3.0)];
        for (name, curve) in all_curves() {
            for (b, c, d) in triples {
                let start = curve(0.0, b, c, d);
                let end = curve(d, b, c, d);
                assert!(
                    (start - b).abs() < 1e-3,
                    "{name}: f(0, {b}, {c}, {d}) = {start}, expected {b}"
                );
                assert!(
                    (end - (b + c)).abs() < 1e-3,
                    "{name}: f({d}, {b}, {c}, {d}) = {end}, expected {}",
                    b + c
                );
            }
        }
    }

    #[test]
    fn test_in_out_midpoint() {
        // Every in_out curve passes through (d/2, b + c/2)
        for (name, curve) in all_curves() {
            if !name.ends_with("in_out") {
                continue;
            }
            let mid = curve(0.5, 10.0, 80.0, 1.0);
            assert!(
                (mid - 50.0).abs() < 1e-3,
                "{name}: f(d/2) = {mid}, expected 50"
            );
        }
    }

    #[test]
    fn test_penner_reference_values() {
        let cases: [(&str, EaseFn, f32, f32); 8] = [
            ("quad_in", Quad::ease_in, 0.5, 0.25),
            ("quad_out", Quad::ease_out, 0.5, 0.75),
            ("cubic_in", Cubic::ease_in, 0.5, 0.125),
            ("sine_in", Sine::ease_in, 0.5, 0.292_893_22),
            ("circ_in", Circ::ease_in, 0.5, 0.133_974_6),
            ("expo_in", Expo::ease_in, 0.5, 0.03125),
            ("bounce_out", Bounce::ease_out, 0.5, 0.765_625),
            ("elastic_out", Elastic::ease_out, 0.5, 1.015_625),
        ];
        for (name, curve, t, expected) in cases {
            let got = curve(t, 0.0, 1.0, 1.0);
            assert!(
                (got - expected).abs() < 1e-4,
                "{name}(0.5) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_back_in_undershoots() {
        let v = Back::ease_in(0.5, 0.0, 1.0, 1.0);
        assert!(v < 0.0, "back ease_in should dip below the start, got {v}");
    }

    #[test]
    fn test_expo_exact_endpoints() {
        // The t == 0 and t == d guards make the endpoints exact, not just
        // within tolerance
        assert_eq!(Expo::ease_in(0.0, 5.0, 10.0, 2.0), 5.0);
        assert_eq!(Expo::ease_out(2.0, 5.0, 10.0, 2.0), 15.0);
        assert_eq!(Expo::ease_in_out(0.0, 5.0, 10.0, 2.0), 5.0);
        assert_eq!(Expo::ease_in_out(2.0, 5.0, 10.0, 2.0), 15.0);
    }
}
