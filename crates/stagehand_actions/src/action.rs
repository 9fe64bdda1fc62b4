// SPDX-License-Identifier: MIT OR Apache-2.0
//! The action interface.
//!
//! An action is a unit of timed work driven forward (or backward) by an
//! external loop, one frame at a time. Concrete actions implement
//! [`Action`]; drivers hold them as [`BoxedAction`] trait objects.

use std::time::Duration;

use stagehand_easing::TimingCurve;

/// Lifecycle status of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStatus {
    /// Constructed but never driven
    #[default]
    NotStarted,
    /// Being driven by a frame loop
    Playing,
    /// Frozen mid-run; elapsed time is kept
    Paused,
    /// Reached its end; terminal until rewound
    Completed,
}

impl ActionStatus {
    /// Check if the action has been started and not yet completed
    pub fn is_active(&self) -> bool {
        matches!(self, ActionStatus::Playing | ActionStatus::Paused)
    }

    /// Check if the action is being driven
    pub fn is_playing(&self) -> bool {
        matches!(self, ActionStatus::Playing)
    }

    /// Check if the action is frozen mid-run
    pub fn is_paused(&self) -> bool {
        matches!(self, ActionStatus::Paused)
    }

    /// Check if the action has reached its end
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionStatus::Completed)
    }
}

/// Per-frame result of driving an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// The action still has work left
    Playing,
    /// The action finished on this frame (or already had)
    Completed,
}

impl FrameState {
    /// Check if the action still has work left
    pub fn is_playing(&self) -> bool {
        matches!(self, FrameState::Playing)
    }

    /// Check if the action has finished
    pub fn is_completed(&self) -> bool {
        matches!(self, FrameState::Completed)
    }
}

/// A boxed action trait object, the form drivers and composites hold
pub type BoxedAction = Box<dyn Action>;

/// A composable unit of timed work
///
/// Drivers call [`next_frame`](Action::next_frame) once per tick with the
/// wall-clock delta since the previous tick. The first call lazily starts
/// the action's clock and captures its initial state from the live
/// target; the call that reaches the action's duration applies the exact
/// end value and reports [`FrameState::Completed`]. Driving a completed
/// action again is a no-op that keeps reporting `Completed`
pub trait Action {
    /// Advance the action by `delta` and apply the eased value forward
    fn next_frame(&mut self, delta: Duration) -> FrameState;

    /// Advance the action by `delta` and apply the inverse transform
    ///
    /// Reversible actions negate their displacement or traverse their
    /// frames in reverse order; actions with nothing to reverse treat
    /// this as [`next_frame`](Action::next_frame)
    fn prev_frame(&mut self, delta: Duration) -> FrameState;

    /// Freeze the clock without losing elapsed time
    ///
    /// Only meaningful while playing; otherwise a no-op. The delta
    /// argument mirrors the frame calls for driver-loop symmetry and is
    /// unused by the built-in actions
    fn pause(&mut self, delta: Duration);

    /// Unfreeze a paused clock
    fn resume(&mut self, delta: Duration);

    /// Reset to [`ActionStatus::NotStarted`] and restore the target to
    /// its captured initial state, so the action can be driven again
    fn rewind(&mut self, delta: Duration);

    /// Drop the target handle so the target can be freed first.
    /// Idempotent; the action keeps ticking without applying anything
    fn release(&mut self);

    /// Current lifecycle status
    fn status(&self) -> ActionStatus;

    /// Optional name used for lookup and diagnostics
    fn name(&self) -> Option<&str>;

    /// Current speed multiplier
    fn speed(&self) -> f32;

    /// Set the speed multiplier; must be positive
    ///
    /// Takes effect on the next frame. Elapsed wall-clock time is kept,
    /// so changing speed mid-run jumps the progress ratio accordingly.
    /// Composites broadcast this to every child
    fn set_speed(&mut self, speed: f32);

    /// Current timing curve
    fn timing_curve(&self) -> TimingCurve;

    /// Set the timing curve. Composites broadcast this to every child
    fn set_timing_curve(&mut self, curve: TimingCurve);

    /// Deep-copy this action, children included
    fn clone_action(&self) -> BoxedAction;
}

impl Clone for BoxedAction {
    fn clone(&self) -> Self {
        self.clone_action()
    }
}
