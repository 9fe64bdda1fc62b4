// SPDX-License-Identifier: MIT OR Apache-2.0
//! Looping proxy actions.

use std::time::Duration;

use stagehand_easing::TimingCurve;

use crate::action::{Action, ActionStatus, BoxedAction, FrameState};

/// Runs one child to completion a fixed number of times
///
/// When the child completes and repeats remain, the proxy rewinds it and
/// keeps playing; this is the only composite that drives a child's
/// lifecycle outside the frame calls. A limit of `0` means repeat
/// forever
#[derive(Clone)]
pub struct RepeatForAction {
    name: Option<String>,
    child: BoxedAction,
    limit: u32,
    completed_repeats: u32,
    status: ActionStatus,
}

impl RepeatForAction {
    /// Repeat `child` until it has completed `limit` times; `0` means
    /// forever
    pub fn new(child: BoxedAction, limit: u32) -> Self {
        Self {
            name: None,
            child,
            limit,
            completed_repeats: 0,
            status: ActionStatus::NotStarted,
        }
    }

    /// Set the action name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The repeat limit; `0` means forever
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// How many child runs have completed so far
    pub fn completed_repeats(&self) -> u32 {
        self.completed_repeats
    }

    fn drive(&mut self, delta: Duration, reversed: bool) -> FrameState {
        if self.status == ActionStatus::Completed {
            return FrameState::Completed;
        }
        if self.status == ActionStatus::NotStarted {
            self.status = ActionStatus::Playing;
        }

        let state = if reversed {
            self.child.prev_frame(delta)
        } else {
            self.child.next_frame(delta)
        };
        if state.is_completed() {
            self.completed_repeats += 1;
            if self.limit != 0 && self.completed_repeats >= self.limit {
                self.status = ActionStatus::Completed;
                return FrameState::Completed;
            }
            self.child.rewind(delta);
        }
        FrameState::Playing
    }
}

impl Action for RepeatForAction {
    fn next_frame(&mut self, delta: Duration) -> FrameState {
        self.drive(delta, false)
    }

    fn prev_frame(&mut self, delta: Duration) -> FrameState {
        self.drive(delta, true)
    }

    fn pause(&mut self, delta: Duration) {
        if self.status == ActionStatus::Playing {
            self.status = ActionStatus::Paused;
        }
        self.child.pause(delta);
    }

    fn resume(&mut self, delta: Duration) {
        if self.status == ActionStatus::Paused {
            self.status = ActionStatus::Playing;
        }
        self.child.resume(delta);
    }

    fn rewind(&mut self, delta: Duration) {
        self.status = ActionStatus::NotStarted;
        self.completed_repeats = 0;
        self.child.rewind(delta);
    }

    fn release(&mut self) {
        self.child.release();
    }

    fn status(&self) -> ActionStatus {
        self.status
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn speed(&self) -> f32 {
        self.child.speed()
    }

    fn set_speed(&mut self, speed: f32) {
        self.child.set_speed(speed);
    }

    fn timing_curve(&self) -> TimingCurve {
        self.child.timing_curve()
    }

    fn set_timing_curve(&mut self, curve: TimingCurve) {
        self.child.set_timing_curve(curve);
    }

    fn clone_action(&self) -> BoxedAction {
        Box::new(self.clone())
    }
}

/// Runs one child to completion over and over, never completing
///
/// Sugar for a [`RepeatForAction`] with a limit of `0`
#[derive(Clone)]
pub struct RepeatForeverAction {
    inner: RepeatForAction,
}

impl RepeatForeverAction {
    /// Repeat `child` without end
    pub fn new(child: BoxedAction) -> Self {
        Self {
            inner: RepeatForAction::new(child, 0),
        }
    }

    /// Set the action name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.inner = self.inner.with_name(name);
        self
    }

    /// How many child runs have completed so far
    pub fn completed_repeats(&self) -> u32 {
        self.inner.completed_repeats()
    }
}

impl Action for RepeatForeverAction {
    fn next_frame(&mut self, delta: Duration) -> FrameState {
        self.inner.next_frame(delta)
    }

    fn prev_frame(&mut self, delta: Duration) -> FrameState {
        self.inner.prev_frame(delta)
    }

    fn pause(&mut self, delta: Duration) {
        self.inner.pause(delta);
    }

    fn resume(&mut self, delta: Duration) {
        self.inner.resume(delta);
    }

    fn rewind(&mut self, delta: Duration) {
        self.inner.rewind(delta);
    }

    fn release(&mut self) {
        self.inner.release();
    }

    fn status(&self) -> ActionStatus {
        self.inner.status()
    }

    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    fn speed(&self) -> f32 {
        self.inner.speed()
    }

    fn set_speed(&mut self, speed: f32) {
        self.inner.set_speed(speed);
    }

    fn timing_curve(&self) -> TimingCurve {
        self.inner.timing_curve()
    }

    fn set_timing_curve(&mut self, curve: TimingCurve) {
        self.inner.set_timing_curve(curve);
    }

    fn clone_action(&self) -> BoxedAction {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::CallbackAction;
    use crate::motion::MoveToAction;
    use crate::target::{Point2, Sprite};
    use crate::wait::WaitForDurationAction;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_callback(count: &Rc<Cell<u32>>) -> BoxedAction {
        let counter = Rc::clone(count);
        Box::new(CallbackAction::new(move || counter.set(counter.get() + 1)))
    }

    #[test]
    fn test_child_runs_exactly_limit_times() {
        let count = Rc::new(Cell::new(0));
        let mut repeat = RepeatForAction::new(counting_callback(&count), 3);

        // A zero-duration child completes once per tick
        assert_eq!(repeat.next_frame(Duration::ZERO), FrameState::Playing);
        assert_eq!(repeat.next_frame(Duration::ZERO), FrameState::Playing);
        assert_eq!(repeat.next_frame(Duration::ZERO), FrameState::Completed);
        assert_eq!(count.get(), 3);

        // Completed is terminal; no further runs
        assert_eq!(repeat.next_frame(Duration::ZERO), FrameState::Completed);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_limit_zero_never_completes() {
        let count = Rc::new(Cell::new(0));
        let mut forever = RepeatForeverAction::new(counting_callback(&count));

        for _ in 0..1000 {
            assert_eq!(forever.next_frame(Duration::ZERO), FrameState::Playing);
        }
        assert_eq!(count.get(), 1000);
        assert_eq!(forever.status(), ActionStatus::Playing);
    }

    #[test]
    fn test_repeated_move_restarts_from_initial() {
        let sprite = Sprite::new().into_shared();
        let child = MoveToAction::new(&sprite, Point2::new(10, 0), Duration::from_millis(100));
        let mut repeat = RepeatForAction::new(Box::new(child), 2);

        // First run lands at 10, rewind snaps back to 0, second run lands
        // at 10 again rather than 20
        assert_eq!(repeat.next_frame(Duration::from_millis(100)), FrameState::Playing);
        assert_eq!(sprite.borrow().position, Point2::ZERO);
        assert_eq!(repeat.next_frame(Duration::from_millis(100)), FrameState::Completed);
        assert_eq!(sprite.borrow().position, Point2::new(10, 0));
        assert_eq!(repeat.completed_repeats(), 2);
    }

    #[test]
    fn test_timed_child_repeats_across_ticks() {
        let mut repeat = RepeatForAction::new(
            Box::new(WaitForDurationAction::new(Duration::from_millis(200))),
            2,
        );

        assert_eq!(repeat.next_frame(Duration::from_millis(100)), FrameState::Playing);
        assert_eq!(repeat.next_frame(Duration::from_millis(100)), FrameState::Playing);
        assert_eq!(repeat.completed_repeats(), 1);
        assert_eq!(repeat.next_frame(Duration::from_millis(100)), FrameState::Playing);
        assert_eq!(repeat.next_frame(Duration::from_millis(100)), FrameState::Completed);
        assert_eq!(repeat.completed_repeats(), 2);
    }

    #[test]
    fn test_rewind_resets_the_repeat_count() {
        let count = Rc::new(Cell::new(0));
        let mut repeat = RepeatForAction::new(counting_callback(&count), 2);

        repeat.next_frame(Duration::ZERO);
        repeat.next_frame(Duration::ZERO);
        assert_eq!(repeat.status(), ActionStatus::Completed);

        repeat.rewind(Duration::ZERO);
        assert_eq!(repeat.completed_repeats(), 0);
        assert_eq!(repeat.next_frame(Duration::ZERO), FrameState::Playing);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_pause_reaches_the_child() {
        let mut repeat = RepeatForAction::new(
            Box::new(WaitForDurationAction::new(Duration::from_millis(100))),
            1,
        );
        repeat.next_frame(Duration::from_millis(50));
        repeat.pause(Duration::ZERO);
        assert_eq!(repeat.status(), ActionStatus::Paused);

        assert_eq!(repeat.next_frame(Duration::from_secs(5)), FrameState::Playing);
        repeat.resume(Duration::ZERO);
        assert_eq!(repeat.next_frame(Duration::from_millis(50)), FrameState::Completed);
    }
}
