// SPDX-License-Identifier: MIT OR Apache-2.0
//! Parallel and serial composite actions.
//!
//! Composites own their children as boxed trait objects and are actions
//! themselves, so arbitrary trees compose. Speed and curve setters
//! broadcast to every child; the composite itself has no timing of its
//! own, only lifecycle bookkeeping.

use std::time::Duration;

use stagehand_easing::TimingCurve;

use crate::action::{Action, ActionStatus, BoxedAction, FrameState};

/// One child of a group and whether it already finished
#[derive(Clone)]
struct GroupSlot {
    action: BoxedAction,
    done: bool,
}

/// Runs every child simultaneously; completes when the slowest does
///
/// Each tick, every still-incomplete child receives the same delta in
/// insertion order. A finished child is never driven again. The group
/// is not meaningfully reversible as a whole: `prev_frame` hands the
/// reversed drive to each child, but what that means for parallel
/// children of different durations is unspecified
#[derive(Clone)]
pub struct GroupAction {
    name: Option<String>,
    children: Vec<GroupSlot>,
    completed: usize,
    status: ActionStatus,
    speed: f32,
    curve: TimingCurve,
}

impl GroupAction {
    /// Group `children` for parallel playback
    pub fn new(children: Vec<BoxedAction>) -> Self {
        Self {
            name: None,
            children: children
                .into_iter()
                .map(|action| GroupSlot { action, done: false })
                .collect(),
            completed: 0,
            status: ActionStatus::NotStarted,
            speed: 1.0,
            curve: TimingCurve::default(),
        }
    }

    /// Set the action name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Total number of children
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Number of children that have completed
    pub fn num_completed(&self) -> usize {
        self.completed
    }

    fn drive(&mut self, delta: Duration, reversed: bool) -> FrameState {
        if self.status == ActionStatus::Completed {
            return FrameState::Completed;
        }
        if self.status == ActionStatus::NotStarted {
            self.status = ActionStatus::Playing;
        }

        for slot in &mut self.children {
            if slot.done {
                continue;
            }
            let state = if reversed {
                slot.action.prev_frame(delta)
            } else {
                slot.action.next_frame(delta)
            };
            if state.is_completed() {
                slot.done = true;
                self.completed += 1;
            }
        }

        if self.completed == self.children.len() {
            self.status = ActionStatus::Completed;
            FrameState::Completed
        } else {
            FrameState::Playing
        }
    }
}

impl Action for GroupAction {
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
        for slot in &mut self.children {
            slot.action.pause(delta);
        }
    }

    fn resume(&mut self, delta: Duration) {
        if self.status == ActionStatus::Paused {
            self.status = ActionStatus::Playing;
        }
        for slot in &mut self.children {
            slot.action.resume(delta);
        }
    }

    fn rewind(&mut self, delta: Duration) {
        self.status = ActionStatus::NotStarted;
        self.completed = 0;
        for slot in &mut self.children {
            slot.done = false;
            slot.action.rewind(delta);
        }
    }

    fn release(&mut self) {
        for slot in &mut self.children {
            slot.action.release();
        }
    }

    fn status(&self) -> ActionStatus {
        self.status
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        for slot in &mut self.children {
            slot.action.set_speed(speed);
        }
    }

    fn timing_curve(&self) -> TimingCurve {
        self.curve.clone()
    }

    fn set_timing_curve(&mut self, curve: TimingCurve) {
        self.curve = curve.clone();
        for slot in &mut self.children {
            slot.action.set_timing_curve(curve.clone());
        }
    }

    fn clone_action(&self) -> BoxedAction {
        Box::new(self.clone())
    }
}

/// Runs children one after another, in order
///
/// Exactly one child is live at a time. When it completes the cursor
/// moves on; the remainder of that tick's delta is *not* forwarded, so
/// the next child starts on the following tick with a fresh first-frame
/// capture. The sequence completes on the tick its last child does
#[derive(Clone)]
pub struct SequenceAction {
    name: Option<String>,
    children: Vec<BoxedAction>,
    current: usize,
    status: ActionStatus,
    speed: f32,
    curve: TimingCurve,
}

impl SequenceAction {
    /// Chain `children` for serial playback
    pub fn new(children: Vec<BoxedAction>) -> Self {
        Self {
            name: None,
            children,
            current: 0,
            status: ActionStatus::NotStarted,
            speed: 1.0,
            curve: TimingCurve::default(),
        }
    }

    /// Set the action name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Total number of children
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Index of the child currently being driven
    pub fn current_child(&self) -> usize {
        self.current
    }

    fn drive(&mut self, delta: Duration, reversed: bool) -> FrameState {
        if self.status == ActionStatus::Completed {
            return FrameState::Completed;
        }
        if self.status == ActionStatus::NotStarted {
            self.status = ActionStatus::Playing;
        }

        let Some(child) = self.children.get_mut(self.current) else {
            // Empty sequence: nothing to wait for
            self.status = ActionStatus::Completed;
            return FrameState::Completed;
        };

        let state = if reversed {
            child.prev_frame(delta)
        } else {
            child.next_frame(delta)
        };
        if state.is_completed() {
            self.current += 1;
            if self.current == self.children.len() {
                self.status = ActionStatus::Completed;
                return FrameState::Completed;
            }
        }
        FrameState::Playing
    }
}

impl Action for SequenceAction {
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
        for child in &mut self.children {
            child.pause(delta);
        }
    }

    fn resume(&mut self, delta: Duration) {
        if self.status == ActionStatus::Paused {
            self.status = ActionStatus::Playing;
        }
        for child in &mut self.children {
            child.resume(delta);
        }
    }

    fn rewind(&mut self, delta: Duration) {
        self.status = ActionStatus::NotStarted;
        self.current = 0;
        for child in &mut self.children {
            child.rewind(delta);
        }
    }

    fn release(&mut self) {
        for child in &mut self.children {
            child.release();
        }
    }

    fn status(&self) -> ActionStatus {
        self.status
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        for child in &mut self.children {
            child.set_speed(speed);
        }
    }

    fn timing_curve(&self) -> TimingCurve {
        self.curve.clone()
    }

    fn set_timing_curve(&mut self, curve: TimingCurve) {
        self.curve = curve.clone();
        for child in &mut self.children {
            child.set_timing_curve(curve.clone());
        }
    }

    fn clone_action(&self) -> BoxedAction {
        Box::new(self.clone())
    }
}
