// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sprite-sheet animation actions.
//!
//! Both actions here distinguish two timing notions. The assigned
//! timing curve produces a smooth eased progress through the frame
//! count, kept as a diagnostic. The frame actually *shown* advances on
//! fixed wall-clock interval boundaries: step timing, never eased, so a
//! sheet plays at its authored frame rate regardless of curve.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use stagehand_easing::TimingCurve;
use thiserror::Error;

use crate::action::{Action, ActionStatus, BoxedAction, FrameState};
use crate::playback::Playback;
use crate::target::{FrameTarget, Target, TextureId, TextureTarget};

/// Sprite animation construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The target reports a sheet with no frames
    #[error("Sprite sheet has no frames to animate")]
    EmptyFrameSet,

    /// The supplied texture list is empty
    #[error("Texture list has no textures to animate")]
    EmptyTextureSet,
}

/// Result type for sprite animation construction
pub type Result<T> = std::result::Result<T, ActionError>;

/// Steps a [`FrameTarget`] through its sheet, one frame per interval
///
/// The duration is `frame_interval * frame_count`, fixed when the
/// action is constructed. The shown frame is
/// `min(floor(frame_time / interval), frame_count - 1)`; the final
/// frame applies exactly the last index (first index when reversed)
#[derive(Debug, Clone)]
pub struct SpriteBatchAction {
    playback: Playback,
    target: Target<dyn FrameTarget>,
    frame_count: usize,
    frame_interval: Duration,
    initial_frame: Option<usize>,
    eased_frames: f32,
}

impl SpriteBatchAction {
    /// Animate `target` through all of its frames at `frame_interval`
    /// per frame
    ///
    /// The frame count is read from the target here, so the duration is
    /// fixed even if the sheet is swapped later
    pub fn new<T>(target: &Rc<RefCell<T>>, frame_interval: Duration) -> Result<Self>
    where
        T: FrameTarget + 'static,
    {
        let frame_count = target.borrow().frame_count();
        if frame_count == 0 {
            return Err(ActionError::EmptyFrameSet);
        }
        Ok(Self {
            playback: Playback::new(frame_interval * frame_count as u32),
            target: Target::new(Rc::clone(target) as Rc<RefCell<dyn FrameTarget>>),
            frame_count,
            frame_interval,
            initial_frame: None,
            eased_frames: 0.0,
        })
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

    /// Set the timing curve. Affects only the eased diagnostic; the
    /// shown frame is stepped on wall-clock intervals
    pub fn with_timing_curve(mut self, curve: impl Into<TimingCurve>) -> Self {
        self.playback.set_curve(curve.into());
        self
    }

    /// Number of frames being animated
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Wall-clock time each frame is shown for
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Smooth eased progress through the sheet, in frames
    pub fn eased_frames(&self) -> f32 {
        self.eased_frames
    }

    fn stepped_index(&self, frame_time: f32) -> usize {
        let interval = self.frame_interval.as_secs_f32();
        if interval == 0.0 {
            return self.frame_count - 1;
        }
        ((frame_time / interval) as usize).min(self.frame_count - 1)
    }

    fn drive(&mut self, delta_time: Duration, reversed: bool) -> FrameState {
        if self.playback.is_completed() {
            return FrameState::Completed;
        }
        if self.playback.begin() {
            self.initial_frame = self.target.upgrade().map(|t| t.borrow().frame_index());
        }

        let progress = self.playback.advance(delta_time);
        self.eased_frames =
            self.playback
                .evaluate(progress.frame_time, 0.0, self.frame_count as f32);

        if let Some(target) = self.target.upgrade() {
            let stepped = if progress.at_end {
                self.frame_count - 1
            } else {
                self.stepped_index(progress.frame_time)
            };
            let index = if reversed {
                self.frame_count - 1 - stepped
            } else {
                stepped
            };
            target.borrow_mut().set_frame_index(index);
        }

        if progress.at_end {
            self.playback.complete();
            FrameState::Completed
        } else {
            FrameState::Playing
        }
    }
}

impl Action for SpriteBatchAction {
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
        if let (Some(target), Some(initial)) = (self.target.upgrade(), self.initial_frame) {
            target.borrow_mut().set_frame_index(initial);
        }
        self.initial_frame = None;
        self.eased_frames = 0.0;
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

/// Steps a [`TextureTarget`] through a texture list, one texture per
/// interval
///
/// Same stepping rules as [`SpriteBatchAction`], with the list supplied
/// by the caller instead of read from the target. Reversed playback
/// walks the list back to front
#[derive(Debug, Clone)]
pub struct SpriteTexturesAction {
    playback: Playback,
    target: Target<dyn TextureTarget>,
    textures: Vec<TextureId>,
    frame_interval: Duration,
    initial_texture: Option<TextureId>,
    eased_frames: f32,
}

impl SpriteTexturesAction {
    /// Bind each texture of `textures` to `target` in turn, holding each
    /// for `frame_interval`
    pub fn new<T>(
        target: &Rc<RefCell<T>>,
        textures: Vec<TextureId>,
        frame_interval: Duration,
    ) -> Result<Self>
    where
        T: TextureTarget + 'static,
    {
        if textures.is_empty() {
            return Err(ActionError::EmptyTextureSet);
        }
        Ok(Self {
            playback: Playback::new(frame_interval * textures.len() as u32),
            target: Target::new(Rc::clone(target) as Rc<RefCell<dyn TextureTarget>>),
            textures,
            frame_interval,
            initial_texture: None,
            eased_frames: 0.0,
        })
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

    /// Set the timing curve. Affects only the eased diagnostic
    pub fn with_timing_curve(mut self, curve: impl Into<TimingCurve>) -> Self {
        self.playback.set_curve(curve.into());
        self
    }

    /// Number of textures in the list
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Smooth eased progress through the list, in frames
    pub fn eased_frames(&self) -> f32 {
        self.eased_frames
    }

    fn stepped_index(&self, frame_time: f32) -> usize {
        let interval = self.frame_interval.as_secs_f32();
        if interval == 0.0 {
            return self.textures.len() - 1;
        }
        ((frame_time / interval) as usize).min(self.textures.len() - 1)
    }

    fn drive(&mut self, delta_time: Duration, reversed: bool) -> FrameState {
        if self.playback.is_completed() {
            return FrameState::Completed;
        }
        if self.playback.begin() {
            self.initial_texture = self.target.upgrade().map(|t| t.borrow().texture());
        }

        let progress = self.playback.advance(delta_time);
        self.eased_frames =
            self.playback
                .evaluate(progress.frame_time, 0.0, self.textures.len() as f32);

        if let Some(target) = self.target.upgrade() {
            let stepped = if progress.at_end {
                self.textures.len() - 1
            } else {
                self.stepped_index(progress.frame_time)
            };
            let index = if reversed {
                self.textures.len() - 1 - stepped
            } else {
                stepped
            };
            target.borrow_mut().set_texture(self.textures[index]);
        }

        if progress.at_end {
            self.playback.complete();
            FrameState::Completed
        } else {
            FrameState::Playing
        }
    }
}

impl Action for SpriteTexturesAction {
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
        if let (Some(target), Some(initial)) = (self.target.upgrade(), self.initial_texture) {
            target.borrow_mut().set_texture(initial);
        }
        self.initial_texture = None;
        self.eased_frames = 0.0;
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

    #[test]
    fn test_frames_step_on_interval_boundaries() {
        let sprite = Sprite::new().with_frame_count(4).into_shared();
        let mut action = SpriteBatchAction::new(&sprite, Duration::from_millis(100)).unwrap();

        // Inside the first interval the first frame stays up
        action.next_frame(Duration::from_millis(50));
        assert_eq!(sprite.borrow().frame_index, 0);

        // Crossing 0.1 s shows frame 1
        action.next_frame(Duration::from_millis(100));
        assert_eq!(sprite.borrow().frame_index, 1);
    }

    #[test]
    fn test_overrun_clamps_to_last_frame_and_completes() {
        // 4 frames at 0.1 s is a 0.4 s action; 0.45 s of cumulative time
        // crosses the end, so the clamp lands on the last valid index
        let sprite = Sprite::new().with_frame_count(4).into_shared();
        let mut action = SpriteBatchAction::new(&sprite, Duration::from_millis(100)).unwrap();

        let mut state = FrameState::Playing;
        for _ in 0..3 {
            state = action.next_frame(Duration::from_millis(150));
        }
        assert_eq!(state, FrameState::Completed);
        assert_eq!(sprite.borrow().frame_index, 3);
    }

    #[test]
    fn test_stepping_is_not_eased() {
        // A strongly accelerating curve must not slow the shown frames
        // down; only the diagnostic follows the curve
        let sprite = Sprite::new().with_frame_count(10).into_shared();
        let mut action = SpriteBatchAction::new(&sprite, Duration::from_millis(100))
            .unwrap()
            .with_timing_curve(stagehand_easing::Easing::QuintIn);

        action.next_frame(Duration::from_millis(500));
        assert_eq!(sprite.borrow().frame_index, 5);
        assert!(action.eased_frames() < 1.0);
    }

    #[test]
    fn test_reversed_playback_walks_backwards() {
        let sprite = Sprite::new().with_frame_count(4).into_shared();
        let mut action = SpriteBatchAction::new(&sprite, Duration::from_millis(100)).unwrap();

        action.prev_frame(Duration::from_millis(50));
        assert_eq!(sprite.borrow().frame_index, 3);

        action.prev_frame(Duration::from_millis(100));
        assert_eq!(sprite.borrow().frame_index, 2);

        let mut state = FrameState::Playing;
        while state.is_playing() {
            state = action.prev_frame(Duration::from_millis(100));
        }
        assert_eq!(sprite.borrow().frame_index, 0);
    }

    #[test]
    fn test_empty_sheet_is_rejected() {
        let sprite = Sprite::new().with_frame_count(0).into_shared();
        let err = SpriteBatchAction::new(&sprite, Duration::from_millis(100)).unwrap_err();
        assert_eq!(err, ActionError::EmptyFrameSet);
    }

    #[test]
    fn test_rewind_restores_initial_frame() {
        let sprite = Sprite::new().with_frame_count(4).into_shared();
        sprite.borrow_mut().frame_index = 2;
        let mut action = SpriteBatchAction::new(&sprite, Duration::from_millis(100)).unwrap();

        action.next_frame(Duration::from_millis(400));
        assert_eq!(sprite.borrow().frame_index, 3);

        action.rewind(Duration::ZERO);
        assert_eq!(sprite.borrow().frame_index, 2);
        assert_eq!(action.eased_frames(), 0.0);
    }

    #[test]
    fn test_textures_cycle_in_list_order() {
        let sprite = Sprite::new().into_shared();
        let list = vec![TextureId(10), TextureId(11), TextureId(12)];
        let mut action =
            SpriteTexturesAction::new(&sprite, list, Duration::from_millis(100)).unwrap();

        action.next_frame(Duration::from_millis(50));
        assert_eq!(sprite.borrow().texture, TextureId(10));

        action.next_frame(Duration::from_millis(100));
        assert_eq!(sprite.borrow().texture, TextureId(11));

        let state = action.next_frame(Duration::from_millis(200));
        assert_eq!(state, FrameState::Completed);
        assert_eq!(sprite.borrow().texture, TextureId(12));
    }

    #[test]
    fn test_reversed_textures_end_on_the_first_entry() {
        let sprite = Sprite::new().into_shared();
        let list = vec![TextureId(1), TextureId(2), TextureId(3)];
        let mut action =
            SpriteTexturesAction::new(&sprite, list, Duration::from_millis(100)).unwrap();

        action.prev_frame(Duration::from_millis(50));
        assert_eq!(sprite.borrow().texture, TextureId(3));

        let mut state = FrameState::Playing;
        while state.is_playing() {
            state = action.prev_frame(Duration::from_millis(100));
        }
        assert_eq!(sprite.borrow().texture, TextureId(1));
    }

    #[test]
    fn test_empty_texture_list_is_rejected() {
        let sprite = Sprite::new().into_shared();
        let err =
            SpriteTexturesAction::new(&sprite, Vec::new(), Duration::from_millis(100)).unwrap_err();
        assert_eq!(err, ActionError::EmptyTextureSet);
    }

    #[test]
    fn test_speed_scales_wall_time_not_frame_order() {
        let sprite = Sprite::new().with_frame_count(4).into_shared();
        let mut action = SpriteBatchAction::new(&sprite, Duration::from_millis(100))
            .unwrap()
            .with_speed(2.0);

        // At double speed the 0.4 s sheet finishes in 0.2 s of wall time
        action.next_frame(Duration::from_millis(100));
        assert_eq!(sprite.borrow().frame_index, 2);
        let state = action.next_frame(Duration::from_millis(100));
        assert_eq!(state, FrameState::Completed);
        assert_eq!(sprite.borrow().frame_index, 3);
    }
}
