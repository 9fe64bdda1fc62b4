// SPDX-License-Identifier: MIT OR Apache-2.0
//! Idle action.

use std::time::Duration;

use stagehand_easing::TimingCurve;

use crate::action::{Action, ActionStatus, BoxedAction, FrameState};
use crate::playback::Playback;

/// Does nothing for a fixed duration
///
/// Useful as a spacer inside sequences and repeats: it consumes time on
/// the shared clock without touching any target
#[derive(Debug, Clone)]
pub struct WaitForDurationAction {
    playback: Playback,
}

impl WaitForDurationAction {
    /// Idle for `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            playback: Playback::new(duration),
        }
    }

    /// Set the action name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.playback.set_name(name);
        self
    }

    /// Set the speed multiplier
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.playback.set_speed(speed);
        self
    }

    /// Set the timing curve. A wait applies no values, so the curve is
    /// held but never observable
    pub fn with_timing_curve(mut self, curve: impl Into<TimingCurve>) -> Self {
        self.playback.set_curve(curve.into());
        self
    }

    fn drive(&mut self, delta: Duration) -> FrameState {
        if self.playback.is_completed() {
            return FrameState::Completed;
        }
        self.playback.begin();
        let progress = self.playback.advance(delta);
        if progress.at_end {
            self.playback.complete();
            FrameState::Completed
        } else {
            FrameState::Playing
        }
    }
}

impl Action for WaitForDurationAction {
    fn next_frame(&mut self, delta: Duration) -> FrameState {
        self.drive(delta)
    }

    // Waiting reverses as itself
    fn prev_frame(&mut self, delta: Duration) -> FrameState {
        self.drive(delta)
    }

    fn pause(&mut self, _delta: Duration) {
        self.playback.pause();
    }

    fn resume(&mut self, _delta: Duration) {
        self.playback.resume();
    }

    fn rewind(&mut self, _delta: Duration) {
        self.playback.rewind();
    }

    fn release(&mut self) {}

    fn status(&self) -> ActionStatus {
        self.playback.status()
    }

    fn name(&self) -> Option<&str> {
        self.playback.name()
    }

    fn speed(&self) -> f32 {
        self.playback.speed()
    }

    fn set_speed(&mut self, speed: f32) {
        self.playback.set_speed(speed);
    }

    fn timing_curve(&self) -> TimingCurve {
        self.playback.curve().clone()
    }

    fn set_timing_curve(&mut self, curve: TimingCurve) {
        self.playback.set_curve(curve);
    }

    fn clone_action(&self) -> BoxedAction {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_on_the_tick_reaching_duration() {
        let mut wait = WaitForDurationAction::new(Duration::from_secs(1));
        assert_eq!(wait.status(), ActionStatus::NotStarted);

        for _ in 0..3 {
            assert_eq!(wait.next_frame(Duration::from_millis(250)), FrameState::Playing);
        }
        assert_eq!(wait.status(), ActionStatus::Playing);
        assert_eq!(wait.next_frame(Duration::from_millis(250)), FrameState::Completed);
        assert_eq!(wait.status(), ActionStatus::Completed);
    }

    #[test]
    fn test_completed_is_idempotent() {
        let mut wait = WaitForDurationAction::new(Duration::from_millis(100));
        wait.next_frame(Duration::from_millis(100));
        assert_eq!(wait.status(), ActionStatus::Completed);
        assert_eq!(wait.next_frame(Duration::from_millis(100)), FrameState::Completed);
        assert_eq!(wait.next_frame(Duration::from_secs(5)), FrameState::Completed);
    }

    #[test]
    fn test_pause_freezes_the_clock() {
        let mut wait = WaitForDurationAction::new(Duration::from_millis(200));
        wait.next_frame(Duration::from_millis(100));
        wait.pause(Duration::ZERO);
        assert_eq!(wait.status(), ActionStatus::Paused);

        // Time fed while paused must not count
        assert_eq!(wait.next_frame(Duration::from_secs(10)), FrameState::Playing);

        wait.resume(Duration::ZERO);
        assert_eq!(wait.next_frame(Duration::from_millis(100)), FrameState::Completed);
    }

    #[test]
    fn test_speed_divides_wall_time() {
        let mut wait = WaitForDurationAction::new(Duration::from_secs(1)).with_speed(2.0);
        assert_eq!(wait.next_frame(Duration::from_millis(250)), FrameState::Playing);
        assert_eq!(wait.next_frame(Duration::from_millis(250)), FrameState::Completed);
    }

    #[test]
    fn test_rewind_allows_replay() {
        let mut wait = WaitForDurationAction::new(Duration::from_millis(100));
        wait.next_frame(Duration::from_millis(100));
        assert_eq!(wait.status(), ActionStatus::Completed);

        wait.rewind(Duration::ZERO);
        assert_eq!(wait.status(), ActionStatus::NotStarted);
        assert_eq!(wait.next_frame(Duration::from_millis(50)), FrameState::Playing);
        assert_eq!(wait.next_frame(Duration::from_millis(50)), FrameState::Completed);
    }

    #[test]
    fn test_prev_frame_is_identity() {
        let mut wait = WaitForDurationAction::new(Duration::from_millis(100));
        assert_eq!(wait.prev_frame(Duration::from_millis(50)), FrameState::Playing);
        assert_eq!(wait.prev_frame(Duration::from_millis(50)), FrameState::Completed);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut wait = WaitForDurationAction::new(Duration::ZERO);
        assert_eq!(wait.next_frame(Duration::ZERO), FrameState::Completed);
    }
}
