// SPDX-License-Identifier: MIT OR Apache-2.0
//! Delta-fed stopwatch.
//!
//! Every action owns one [`Stopwatch`]. The driver supplies wall-clock
//! deltas each tick; the stopwatch accumulates them as an integer
//! [`Duration`], so repeated small deltas never compound floating-point
//! error. Conversion to `f32` seconds happens only when a curve is
//! evaluated.

use std::time::Duration;

/// Accumulates driver-supplied time deltas with pause support
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    elapsed: Duration,
    started: bool,
    paused: bool,
}

impl Stopwatch {
    /// Create a stopped stopwatch
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting from zero
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started = true;
        self.paused = false;
    }

    /// Halt counting and reset the elapsed time to zero
    pub fn stop(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started = false;
        self.paused = false;
    }

    /// Freeze the elapsed time. No-op unless started
    pub fn pause(&mut self) {
        if self.started {
            self.paused = true;
        }
    }

    /// Resume counting after a pause. No-op unless started
    pub fn unpause(&mut self) {
        if self.started {
            self.paused = false;
        }
    }

    /// Accumulate one tick's delta. Ignored while stopped or paused
    pub fn advance(&mut self, delta: Duration) {
        if self.started && !self.paused {
            self.elapsed += delta;
        }
    }

    /// Elapsed time since the last start; zero while stopped
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Check if the stopwatch has been started and not stopped
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Check if the stopwatch is frozen by a pause
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
