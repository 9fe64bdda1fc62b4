// SPDX-License-Identifier: MIT OR Apache-2.0
//! Action runtime for Stagehand.
//!
//! This crate provides time-based choreography for game objects:
//! - Movement, fading and sprite-cycling actions
//! - Waiting and callback actions
//! - Parallel, serial and repeating composition
//! - A player that drives queued actions from the game loop
//!
//! ## Architecture
//!
//! The runtime is built on:
//! - A polymorphic [`Action`] trait with a four-state lifecycle
//! - Weak references from actions to the objects they animate
//! - Timing curves from [`stagehand_easing`]
//! - Frame-delta time accumulation

pub mod action;
pub mod callback;
pub mod composite;
pub mod fade;
pub mod motion;
pub mod playback;
pub mod player;
pub mod repeat;
pub mod sprite;
pub mod target;
pub mod timer;
pub mod wait;

pub use action::{Action, ActionStatus, BoxedAction, FrameState};
pub use callback::CallbackAction;
pub use composite::{GroupAction, SequenceAction};
pub use fade::FadeAlphaByAction;
pub use motion::MoveToAction;
pub use playback::{Playback, Progress};
pub use player::{ActionId, ActionPlayer, PlayerState};
pub use repeat::{RepeatForAction, RepeatForeverAction};
pub use sprite::{ActionError, SpriteBatchAction, SpriteTexturesAction};
pub use target::{
    AlphaTarget, FrameTarget, Point2, PositionTarget, Sprite, Target, TextureId, TextureTarget,
};
pub use timer::Stopwatch;
pub use wait::WaitForDurationAction;
