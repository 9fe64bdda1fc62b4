// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shared playback state for actions.
//!
//! Every action embeds a [`Playback`]: the name, duration, speed, timing
//! curve, lifecycle status and stopwatch that the frame methods operate
//! on. Leaf actions feed every tick through
//! [`advance`](Playback::advance) and map the resulting frame time to a
//! value with [`evaluate`](Playback::evaluate).

use std::time::Duration;

use stagehand_easing::TimingCurve;

use crate::action::ActionStatus;
use crate::timer::Stopwatch;

/// Result of advancing a playback by one tick
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    /// Time in the curve's domain, clamped to `[0, duration]`
    pub frame_time: f32,
    /// True once cumulative time has reached `duration / speed`
    pub at_end: bool,
}

/// The per-action core: pacing, curve and lifecycle bookkeeping
#[derive(Debug, Clone)]
pub struct Playback {
    name: Option<String>,
    duration: Duration,
    speed: f32,
    curve: TimingCurve,
    status: ActionStatus,
    stopwatch: Stopwatch,
}

impl Playback {
    /// Create a playback over a fixed duration
    ///
    /// The duration never changes afterwards; re-running restarts the
    /// stopwatch, it does not resize the duration
    pub fn new(duration: Duration) -> Self {
        Self {
            name: None,
            duration,
            speed: 1.0,
            curve: TimingCurve::default(),
            status: ActionStatus::NotStarted,
            stopwatch: Stopwatch::new(),
        }
    }

    /// Optional action name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the action name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// The fixed duration in the curve's domain
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current speed multiplier
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the speed multiplier; must be positive
    ///
    /// A non-positive value is a caller bug: debug builds assert, release
    /// builds clamp to a minimal positive value
    pub fn set_speed(&mut self, speed: f32) {
        debug_assert!(speed > 0.0, "action speed must be positive, got {speed}");
        self.speed = speed.max(f32::EPSILON);
    }

    /// Current timing curve
    pub fn curve(&self) -> &TimingCurve {
        &self.curve
    }

    /// Set the timing curve
    pub fn set_curve(&mut self, curve: TimingCurve) {
        self.curve = curve;
    }

    /// Current lifecycle status
    pub fn status(&self) -> ActionStatus {
        self.status
    }

    /// Check if playback has reached its end
    pub fn is_completed(&self) -> bool {
        self.status == ActionStatus::Completed
    }

    /// Start the stopwatch on the first drive of a run
    ///
    /// Returns true when this call performed the start; that is the
    /// moment a leaf captures its initial state from the live target
    pub fn begin(&mut self) -> bool {
        if self.status == ActionStatus::NotStarted {
            self.stopwatch.start();
            self.status = ActionStatus::Playing;
            true
        } else {
            false
        }
    }

    /// Accumulate one tick and report clamped progress
    ///
    /// Cumulative wall time is clamped to `duration / speed`; the
    /// returned frame time is scaled back into `[0, duration]` so curves
    /// always see their own domain. While paused the stopwatch ignores
    /// the delta and progress is simply re-reported
    pub fn advance(&mut self, delta: Duration) -> Progress {
        self.stopwatch.advance(delta);

        let duration = self.duration.as_secs_f32();
        if duration == 0.0 {
            return Progress {
                frame_time: 0.0,
                at_end: true,
            };
        }

        let limit = duration / self.speed;
        let elapsed = self.stopwatch.elapsed_secs();
        Progress {
            frame_time: elapsed.min(limit) * self.speed,
            at_end: elapsed >= limit,
        }
    }

    /// Evaluate the timing curve at `frame_time` for a change of `c`
    /// starting from `b`
    pub fn evaluate(&self, frame_time: f32, b: f32, c: f32) -> f32 {
        let duration = self.duration.as_secs_f32();
        if duration == 0.0 {
            return b + c;
        }
        self.curve.evaluate(frame_time, b, c, duration)
    }

    /// One-time end-of-run bookkeeping: stop the clock, mark completed
    pub fn complete(&mut self) {
        self.stopwatch.stop();
        self.status = ActionStatus::Completed;
    }

    /// Freeze the clock; only meaningful while playing
    pub fn pause(&mut self) {
        if self.status == ActionStatus::Playing {
            self.stopwatch.pause();
            self.status = ActionStatus::Paused;
        }
    }

    /// Unfreeze a paused clock
    pub fn resume(&mut self) {
        if self.status == ActionStatus::Paused {
            self.stopwatch.unpause();
            self.status = ActionStatus::Playing;
        }
    }

    /// Reset to [`ActionStatus::NotStarted`] so the action can run again
    pub fn rewind(&mut self) {
        self.stopwatch.stop();
        self.status = ActionStatus::NotStarted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_starts_once() {
        let mut playback = Playback::new(Duration::from_secs(1));
        assert_eq!(playback.status(), ActionStatus::NotStarted);
        assert!(playback.begin());
        assert_eq!(playback.status(), ActionStatus::Playing);
        assert!(!playback.begin());
    }

    #[test]
    fn test_advance_clamps_at_duration() {
        let mut playback = Playback::new(Duration::from_secs(1));
        playback.begin();

        let p = playback.advance(Duration::from_millis(400));
        assert!((p.frame_time - 0.4).abs() < 1e-6);
        assert!(!p.at_end);

        let p = playback.advance(Duration::from_millis(900));
        assert_eq!(p.frame_time, 1.0);
        assert!(p.at_end);
    }

    #[test]
    fn test_speed_rescales_wall_time() {
        // Double speed finishes the 1 s duration after 0.5 s of wall time,
        // with frame time mapped back into the curve's full domain
        let mut playback = Playback::new(Duration::from_secs(1));
        playback.set_speed(2.0);
        playback.begin();

        let p = playback.advance(Duration::from_millis(250));
        assert!((p.frame_time - 0.5).abs() < 1e-6);
        assert!(!p.at_end);

        let p = playback.advance(Duration::from_millis(250));
        assert!(p.at_end);
        assert!((p.frame_time - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_ends_immediately() {
        let mut playback = Playback::new(Duration::ZERO);
        playback.begin();
        let p = playback.advance(Duration::ZERO);
        assert!(p.at_end);
        assert_eq!(playback.evaluate(p.frame_time, 3.0, 7.0), 10.0);
    }

    #[test]
    fn test_pause_freezes_progress() {
        let mut playback = Playback::new(Duration::from_secs(1));
        playback.begin();
        playback.advance(Duration::from_millis(300));
        playback.pause();
        assert_eq!(playback.status(), ActionStatus::Paused);

        let p = playback.advance(Duration::from_millis(500));
        assert!((p.frame_time - 0.3).abs() < 1e-6);
        assert!(!p.at_end);

        playback.resume();
        let p = playback.advance(Duration::from_millis(700));
        assert!(p.at_end);
    }

    #[test]
    fn test_rewind_resets_lifecycle() {
        let mut playback = Playback::new(Duration::from_millis(100));
        playback.begin();
        playback.advance(Duration::from_millis(100));
        playback.complete();
        assert!(playback.is_completed());

        playback.rewind();
        assert_eq!(playback.status(), ActionStatus::NotStarted);
        assert!(playback.begin());
        let p = playback.advance(Duration::from_millis(50));
        assert!(!p.at_end);
    }

    #[test]
    fn test_evaluate_uses_assigned_curve() {
        let mut playback = Playback::new(Duration::from_secs(1));
        playback.set_curve(stagehand_easing::Easing::QuadIn.into());
        assert!((playback.evaluate(0.5, 0.0, 100.0) - 25.0).abs() < 1e-4);
    }
}
