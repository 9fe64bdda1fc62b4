// SPDX-License-Identifier: MIT OR Apache-2.0
//! The action player.
//!
//! This module handles:
//! - Enqueuing root actions and assigning their ids
//! - Advancing every queued action once per external tick
//! - Reaping completed actions and firing completion callbacks
//! - Pausing, resuming, stopping and cancelling

use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::{BoxedAction, FrameState};

/// Unique identifier for a queued action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub Uuid);

impl ActionId {
    /// Create a new random action ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Player state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// Advancing queued actions every update
    #[default]
    Playing,
    /// Queue intact, clocks frozen
    Paused,
    /// Queue rewound, updates ignored until resumed
    Stopped,
}

impl PlayerState {
    /// Check if updates advance the queue
    pub fn is_playing(&self) -> bool {
        matches!(self, PlayerState::Playing)
    }

    /// Check if the player is paused
    pub fn is_paused(&self) -> bool {
        matches!(self, PlayerState::Paused)
    }

    /// Check if the player is stopped
    pub fn is_stopped(&self) -> bool {
        matches!(self, PlayerState::Stopped)
    }
}

/// A queued root action and its completion callback
struct QueuedAction {
    action: BoxedAction,
    on_completion: Option<Box<dyn FnOnce()>>,
}

/// Owns running root actions and drives them once per external tick
///
/// Actions are advanced in insertion order, each receiving the same
/// delta. An action that reports [`FrameState::Completed`] fires its
/// completion callback (if any) and is removed from the queue; the
/// queue order of the remaining actions is preserved
pub struct ActionPlayer {
    state: PlayerState,
    actions: IndexMap<ActionId, QueuedAction>,
}

impl ActionPlayer {
    /// Create an idle player, ready to run actions
    pub fn new() -> Self {
        Self {
            state: PlayerState::Playing,
            actions: IndexMap::new(),
        }
    }

    /// Enqueue a root action. Returns the id it is queued under
    pub fn run_action(&mut self, action: BoxedAction) -> ActionId {
        self.enqueue(action, None)
    }

    /// Enqueue a root action with a callback fired once when it
    /// completes. Cancelled actions never fire their callback
    pub fn run_action_then(
        &mut self,
        action: BoxedAction,
        on_completion: impl FnOnce() + 'static,
    ) -> ActionId {
        self.enqueue(action, Some(Box::new(on_completion)))
    }

    fn enqueue(&mut self, action: BoxedAction, on_completion: Option<Box<dyn FnOnce()>>) -> ActionId {
        let id = ActionId::new();
        tracing::debug!(
            "Enqueued action '{}' as {}",
            action.name().unwrap_or("<unnamed>"),
            id.0
        );
        self.actions.insert(id, QueuedAction { action, on_completion });
        id
    }

    /// Advance every queued action by `delta` and reap completed ones
    ///
    /// Returns the number of actions still queued. Does nothing unless
    /// the player is playing
    pub fn update(&mut self, delta: Duration) -> usize {
        if !self.state.is_playing() {
            return self.actions.len();
        }

        let mut finished = Vec::new();
        for (id, queued) in &mut self.actions {
            if queued.action.next_frame(delta) == FrameState::Completed {
                finished.push(*id);
            }
        }
        tracing::trace!(
            "Advanced {} action(s), {} completed",
            self.actions.len(),
            finished.len()
        );

        for id in finished {
            if let Some(mut queued) = self.actions.shift_remove(&id) {
                tracing::debug!(
                    "Action '{}' ({}) completed",
                    queued.action.name().unwrap_or("<unnamed>"),
                    id.0
                );
                if let Some(callback) = queued.on_completion.take() {
                    callback();
                }
            }
        }

        self.actions.len()
    }

    /// Pause the player and freeze every queued action's clock
    pub fn pause(&mut self) {
        if self.state.is_playing() {
            self.state = PlayerState::Paused;
            for queued in self.actions.values_mut() {
                queued.action.pause(Duration::ZERO);
            }
            tracing::info!("Paused action player");
        }
    }

    /// Resume a paused player, or restart a stopped one
    pub fn resume(&mut self) {
        match self.state {
            PlayerState::Paused => {
                self.state = PlayerState::Playing;
                for queued in self.actions.values_mut() {
                    queued.action.resume(Duration::ZERO);
                }
                tracing::info!("Resumed action player");
            }
            PlayerState::Stopped => {
                self.state = PlayerState::Playing;
                tracing::info!("Restarted action player");
            }
            PlayerState::Playing => {}
        }
    }

    /// Stop the player: rewind every queued action and ignore updates
    /// until [`resume`](ActionPlayer::resume)
    pub fn stop(&mut self) {
        if self.state.is_stopped() {
            return;
        }
        self.state = PlayerState::Stopped;
        for queued in self.actions.values_mut() {
            queued.action.rewind(Duration::ZERO);
        }
        tracing::info!("Stopped action player");
    }

    /// Remove an action from the queue without firing its callback.
    /// Returns the action so the caller can reuse it
    pub fn cancel_action(&mut self, id: ActionId) -> Option<BoxedAction> {
        let queued = self.actions.shift_remove(&id)?;
        tracing::debug!("Cancelled action {}", id.0);
        Some(queued.action)
    }

    /// Remove every action queued under `name`. Returns how many were
    /// removed
    pub fn cancel_named(&mut self, name: &str) -> usize {
        let ids: Vec<ActionId> = self
            .actions
            .iter()
            .filter(|(_, queued)| queued.action.name() == Some(name))
            .map(|(id, _)| *id)
            .collect();
        for id in &ids {
            self.actions.shift_remove(id);
        }
        if !ids.is_empty() {
            tracing::debug!("Cancelled {} action(s) named '{}'", ids.len(), name);
        }
        ids.len()
    }

    /// Drop every queued action without firing callbacks
    pub fn cancel_all(&mut self) {
        let count = self.actions.len();
        self.actions.clear();
        if count > 0 {
            tracing::debug!("Cancelled all {count} queued actions");
        }
    }

    /// Number of actions currently queued
    pub fn num_actions(&self) -> usize {
        self.actions.len()
    }

    /// Check if the queue is empty
    pub fn is_idle(&self) -> bool {
        self.actions.is_empty()
    }

    /// Check if `id` is still queued
    pub fn is_running(&self, id: ActionId) -> bool {
        self.actions.contains_key(&id)
    }

    /// Check if any queued action carries `name`
    pub fn action_running(&self, name: &str) -> bool {
        self.actions
            .values()
            .any(|queued| queued.action.name() == Some(name))
    }

    /// Current player state
    pub fn state(&self) -> PlayerState {
        self.state
    }
}

impl Default for ActionPlayer {
    fn default() -> Self {
        Self::new()
    }
}
