// SPDX-License-Identifier: MIT OR Apache-2.0
//! Callback action.

use std::rc::Rc;
use std::time::Duration;

use stagehand_easing::TimingCurve;

use crate::action::{Action, ActionStatus, BoxedAction, FrameState};
use crate::playback::Playback;

/// Fires a zero-argument closure exactly once, optionally after a delay
///
/// With no delay the closure runs on the first frame and the action
/// completes immediately, which makes it the building block for
/// "do this at that point" steps inside sequences
#[derive(Clone)]
pub struct CallbackAction {
    playback: Playback,
    callback: Option<Rc<dyn Fn()>>,
    fired: bool,
}

impl CallbackAction {
    /// Fire `callback` on the first frame
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self::after_delay(Duration::ZERO, callback)
    }

    /// Fire `callback` once `delay` has elapsed
    pub fn after_delay(delay: Duration, callback: impl Fn() + 'static) -> Self {
        Self {
            playback: Playback::new(delay),
            callback: Some(Rc::new(callback)),
            fired: false,
        }
    }

    /// Set the action name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.playback.set_name(name);
        self
    }

    /// Set the speed multiplier (rescales the delay)
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.playback.set_speed(speed);
        self
    }

    /// Set the timing curve. The callback fires at the end of the delay
    /// regardless, so the curve is held but never observable
    pub fn with_timing_curve(mut self, curve: impl Into<TimingCurve>) -> Self {
        self.playback.set_curve(curve.into());
        self
    }

    /// Check if the closure has run during the current run
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    fn drive(&mut self, delta: Duration) -> FrameState {
        if self.playback.is_completed() {
            return FrameState::Completed;
        }
        self.playback.begin();
        let progress = self.playback.advance(delta);
        if progress.at_end {
            if !self.fired {
                self.fired = true;
                if let Some(callback) = &self.callback {
                    callback();
                }
            }
            self.playback.complete();
            FrameState::Completed
        } else {
            FrameState::Playing
        }
    }
}

impl Action for CallbackAction {
    fn next_frame(&mut self, delta: Duration) -> FrameState {
        self.drive(delta)
    }

    // Firing a callback reverses as itself
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
        self.fired = false;
    }

    /// Drops the closure (and anything it captures). A released action
    /// still completes on schedule, it just no longer fires
    fn release(&mut self) {
        self.callback = None;
    }

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
