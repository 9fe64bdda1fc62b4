// SPDX-License-Identifier: MIT OR Apache-2.0
//! Alpha fade action.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use stagehand_easing::TimingCurve;

use crate::action::{Action, ActionStatus, BoxedAction, FrameState};
use crate::playback::Playback;
use crate::target::{AlphaTarget, Target};

/// How the signed alpha change is resolved at initial capture
#[derive(Debug, Clone, Copy)]
enum FadeKind {
    /// A fixed signed change
    By(i16),
    /// Whatever reaches 255 from the captured alpha
    ToOpaque,
    /// Whatever reaches 0 from the captured alpha
    ToTransparent,
}

/// Captured state of the current run
#[derive(Debug, Clone, Copy)]
struct FadeRun {
    initial: u8,
    change: i16,
}

/// Fades an [`AlphaTarget`] by a relative alpha delta over a duration
///
/// The initial alpha is captured on the first frame; eased values are
/// rounded half away from zero and clamped into `0..=255` on every
/// application, so deltas that push past a bound saturate there. The
/// final frame applies exactly the clamped end value
#[derive(Debug, Clone)]
pub struct FadeAlphaByAction {
    playback: Playback,
    target: Target<dyn AlphaTarget>,
    kind: FadeKind,
    run: Option<FadeRun>,
}

impl FadeAlphaByAction {
    /// Change `target`'s alpha by `delta` over `duration`
    pub fn new<T>(target: &Rc<RefCell<T>>, delta: i16, duration: Duration) -> Self
    where
        T: AlphaTarget + 'static,
    {
        Self::with_kind(target, FadeKind::By(delta), duration)
    }

    /// Fade `target` to fully opaque over `duration`, starting from
    /// whatever alpha it has when the action first runs
    pub fn fade_in<T>(target: &Rc<RefCell<T>>, duration: Duration) -> Self
    where
        T: AlphaTarget + 'static,
    {
        Self::with_kind(target, FadeKind::ToOpaque, duration)
    }

    /// Fade `target` to fully transparent over `duration`
    pub fn fade_out<T>(target: &Rc<RefCell<T>>, duration: Duration) -> Self
    where
        T: AlphaTarget + 'static,
    {
        Self::with_kind(target, FadeKind::ToTransparent, duration)
    }

    fn with_kind<T>(target: &Rc<RefCell<T>>, kind: FadeKind, duration: Duration) -> Self
    where
        T: AlphaTarget + 'static,
    {
        Self {
            playback: Playback::new(duration),
            target: Target::new(Rc::clone(target) as Rc<RefCell<dyn AlphaTarget>>),
            kind,
            run: None,
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

    /// Set the timing curve
    pub fn with_timing_curve(mut self, curve: impl Into<TimingCurve>) -> Self {
        self.playback.set_curve(curve.into());
        self
    }

    fn capture(&mut self) {
        self.run = self.target.upgrade().map(|t| {
            let initial = t.borrow().alpha();
            let change = match self.kind {
                FadeKind::By(delta) => delta,
                FadeKind::ToOpaque => 255 - i16::from(initial),
                FadeKind::ToTransparent => -i16::from(initial),
            };
            FadeRun { initial, change }
        });
    }

    fn drive(&mut self, delta_time: Duration, reversed: bool) -> FrameState {
        if self.playback.is_completed() {
            return FrameState::Completed;
        }
        if self.playback.begin() {
            self.capture();
        }

        let progress = self.playback.advance(delta_time);
        if let (Some(target), Some(run)) = (self.target.upgrade(), self.run) {
            // `change` spans all of i16, so negate saturating and sum in
            // i32 before clamping
            let change = if reversed { run.change.saturating_neg() } else { run.change };
            let alpha = if progress.at_end {
                (i32::from(run.initial) + i32::from(change)).clamp(0, 255) as u8
            } else {
                let eased = self.playback.evaluate(
                    progress.frame_time,
                    f32::from(run.initial),
                    f32::from(change),
                );
                eased.round().clamp(0.0, 255.0) as u8
            };
            target.borrow_mut().set_alpha(alpha);
        }

        if progress.at_end {
            self.playback.complete();
            FrameState::Completed
        } else {
            FrameState::Playing
        }
    }
}

impl Action for FadeAlphaByAction {
    fn next_frame(&mut self, delta: Duration) -> FrameState {
        self.drive(delta, false)
    }

    fn prev_frame(&mut self, delta: Duration) -> FrameState {
        self.drive(delta, true)
    }

    fn pause(&mut self, _delta: Duration) {
        self.playback.pause();
    }

    fn resume(&mut self, _delta: Duration) {
        self.playback.resume();
    }

    fn rewind(&mut self, _delta: Duration) {
        if let (Some(target), Some(run)) = (self.target.upgrade(), self.run) {
            target.borrow_mut().set_alpha(run.initial);
        }
        self.run = None;
        self.playback.rewind();
    }

    fn release(&mut self) {
        self.target.release();
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
