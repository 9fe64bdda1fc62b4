// SPDX-License-Identifier: MIT OR Apache-2.0
//! Movement action.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use stagehand_easing::TimingCurve;

use crate::action::{Action, ActionStatus, BoxedAction, FrameState};
use crate::playback::Playback;
use crate::target::{Point2, PositionTarget, Target};

/// Displaces a [`PositionTarget`] by a fixed amount over a duration
///
/// The quantity is a displacement relative to wherever the target is
/// when the action first runs, not an absolute destination: the initial
/// position is captured on the first frame and the eased value runs
/// from there. Eased coordinates are rounded half away from zero into
/// whole pixels; the final frame applies exactly `initial + delta`
#[derive(Debug, Clone)]
pub struct MoveToAction {
    playback: Playback,
    target: Target<dyn PositionTarget>,
    delta: Point2,
    initial: Option<Point2>,
}

impl MoveToAction {
    /// Move `target` by `delta` pixels over `duration`
    pub fn new<T>(target: &Rc<RefCell<T>>, delta: Point2, duration: Duration) -> Self
    where
        T: PositionTarget + 'static,
    {
        Self {
            playback: Playback::new(duration),
            target: Target::new(Rc::clone(target) as Rc<RefCell<dyn PositionTarget>>),
            delta,
            initial: None,
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

    /// The total displacement in pixels
    pub fn displacement(&self) -> Point2 {
        self.delta
    }

    fn drive(&mut self, displacement: Point2, delta_time: Duration) -> FrameState {
        if self.playback.is_completed() {
            return FrameState::Completed;
        }
        if self.playback.begin() {
            self.initial = self.target.upgrade().map(|t| t.borrow().position());
        }

        let progress = self.playback.advance(delta_time);
        if let (Some(target), Some(initial)) = (self.target.upgrade(), self.initial) {
            let position = if progress.at_end {
                // Displacements span all of i32; the sum must not wrap
                initial.saturating_add(displacement)
            } else {
                let x = self
                    .playback
                    .evaluate(progress.frame_time, initial.x as f32, displacement.x as f32);
                let y = self
                    .playback
                    .evaluate(progress.frame_time, initial.y as f32, displacement.y as f32);
                Point2::new(x.round() as i32, y.round() as i32)
            };
            target.borrow_mut().set_position(position);
        }

        if progress.at_end {
            self.playback.complete();
            FrameState::Completed
        } else {
            FrameState::Playing
        }
    }
}

impl Action for MoveToAction {
    fn next_frame(&mut self, delta: Duration) -> FrameState {
        self.drive(self.delta, delta)
    }

    fn prev_frame(&mut self, delta: Duration) -> FrameState {
        self.drive(self.delta.saturating_neg(), delta)
    }

    fn pause(&mut self, _delta: Duration) {
        self.playback.pause();
    }

    fn resume(&mut self, _delta: Duration) {
        self.playback.resume();
    }

    fn rewind(&mut self, _delta: Duration) {
        if let (Some(target), Some(initial)) = (self.target.upgrade(), self.initial) {
            target.borrow_mut().set_position(initial);
        }
        self.initial = None;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Sprite;
    use stagehand_easing::Easing;

    fn quarter_ticks(action: &mut MoveToAction, count: usize) -> FrameState {
        let mut state = FrameState::Playing;
        for _ in 0..count {
            state = action.next_frame(Duration::from_millis(250));
        }
        state
    }

    #[test]
    fn test_linear_move_across_four_ticks() {
        let sprite = Sprite::new().with_position(Point2::new(10, 20)).into_shared();
        let mut action =
            MoveToAction::new(&sprite, Point2::new(100, 0), Duration::from_secs(1));

        assert_eq!(quarter_ticks(&mut action, 1), FrameState::Playing);
        assert_eq!(sprite.borrow().position, Point2::new(35, 20));

        assert_eq!(quarter_ticks(&mut action, 2), FrameState::Playing);
        assert_eq!(sprite.borrow().position, Point2::new(85, 20));

        assert_eq!(quarter_ticks(&mut action, 1), FrameState::Completed);
        assert_eq!(sprite.borrow().position, Point2::new(110, 20));
        assert_eq!(action.status(), ActionStatus::Completed);
    }

    #[test]
    fn test_eased_move_matches_curve_at_three_quarters() {
        let sprite = Sprite::new().into_shared();
        let mut action = MoveToAction::new(&sprite, Point2::new(100, 0), Duration::from_secs(1))
            .with_timing_curve(Easing::QuadIn);

        quarter_ticks(&mut action, 3);
        let expected = Easing::QuadIn.apply(0.75, 0.0, 100.0, 1.0).round() as i32;
        assert_eq!(sprite.borrow().position.x, expected);
    }

    #[test]
    fn test_overshooting_tick_clamps_to_end_value() {
        let sprite = Sprite::new().into_shared();
        let mut action =
            MoveToAction::new(&sprite, Point2::new(40, -30), Duration::from_millis(500));

        // One oversized tick: the final value must be exact, not extrapolated
        assert_eq!(action.next_frame(Duration::from_secs(3)), FrameState::Completed);
        assert_eq!(sprite.borrow().position, Point2::new(40, -30));
    }

    #[test]
    fn test_initial_position_is_captured_on_first_frame() {
        let sprite = Sprite::new().into_shared();
        let mut action =
            MoveToAction::new(&sprite, Point2::new(10, 0), Duration::from_millis(100));

        // The target moves between construction and the first drive; the
        // displacement must run from the later position
        sprite.borrow_mut().position = Point2::new(50, 50);
        action.next_frame(Duration::from_millis(100));
        assert_eq!(sprite.borrow().position, Point2::new(60, 50));
    }

    #[test]
    fn test_rewind_restores_initial_and_replays() {
        let sprite = Sprite::new().with_position(Point2::new(5, 5)).into_shared();
        let mut action =
            MoveToAction::new(&sprite, Point2::new(20, 0), Duration::from_millis(200));

        action.next_frame(Duration::from_millis(200));
        assert_eq!(sprite.borrow().position, Point2::new(25, 5));

        action.rewind(Duration::ZERO);
        assert_eq!(sprite.borrow().position, Point2::new(5, 5));
        assert_eq!(action.status(), ActionStatus::NotStarted);

        action.next_frame(Duration::from_millis(100));
        assert_eq!(sprite.borrow().position, Point2::new(15, 5));
    }

    #[test]
    fn test_prev_frame_negates_the_displacement() {
        let sprite = Sprite::new().with_position(Point2::new(100, 0)).into_shared();
        let mut action =
            MoveToAction::new(&sprite, Point2::new(30, 10), Duration::from_millis(100));

        action.prev_frame(Duration::from_millis(100));
        assert_eq!(sprite.borrow().position, Point2::new(70, -10));
    }

    #[test]
    fn test_extreme_displacement_saturates_the_end_value() {
        let sprite = Sprite::new().with_position(Point2::new(10, 0)).into_shared();
        let mut action =
            MoveToAction::new(&sprite, Point2::new(i32::MAX, 0), Duration::from_millis(100));

        // The end value is initial plus the whole displacement; at the
        // integer rim it must saturate rather than wrap
        assert_eq!(action.next_frame(Duration::from_millis(100)), FrameState::Completed);
        assert_eq!(sprite.borrow().position, Point2::new(i32::MAX, 0));
    }

    #[test]
    fn test_reversing_the_extreme_displacement_saturates() {
        let sprite = Sprite::new().into_shared();
        let mut action =
            MoveToAction::new(&sprite, Point2::new(i32::MIN, 0), Duration::from_millis(100));

        // i32::MIN has no i32 negation; reversed playback must still run
        assert_eq!(action.prev_frame(Duration::from_millis(100)), FrameState::Completed);
        assert_eq!(sprite.borrow().position, Point2::new(i32::MAX, 0));
    }

    #[test]
    fn test_dangling_target_is_skipped_silently() {
        let sprite = Sprite::new().into_shared();
        let mut action =
            MoveToAction::new(&sprite, Point2::new(10, 10), Duration::from_millis(200));

        action.next_frame(Duration::from_millis(100));
        drop(sprite);

        // The target is gone; frames keep flowing and completion still lands
        assert_eq!(action.next_frame(Duration::from_millis(100)), FrameState::Completed);
    }

    #[test]
    fn test_release_stops_applying_but_keeps_ticking() {
        let sprite = Sprite::new().into_shared();
        let mut action =
            MoveToAction::new(&sprite, Point2::new(10, 0), Duration::from_millis(200));

        action.next_frame(Duration::from_millis(100));
        let before = sprite.borrow().position;
        action.release();
        assert_eq!(action.next_frame(Duration::from_millis(100)), FrameState::Completed);
        assert_eq!(sprite.borrow().position, before);
    }
}
