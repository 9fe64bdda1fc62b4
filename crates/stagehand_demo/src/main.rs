// SPDX-License-Identifier: MIT OR Apache-2.0
//! Stagehand demo - a scripted show driven from a plain loop
//!
//! A small headless choreography exercising the action runtime:
//! - A hero sprite fades in while sliding on stage
//! - Its walk cycle repeats a fixed number of times
//! - A torch sprite flickers through a texture list in parallel
//! - The player is paused and resumed mid-show
//!
//! ## Architecture
//!
//! There is no window or renderer here. The demo stands in for a game
//! loop: it builds sprites, queues actions on an [`ActionPlayer`] and
//! ticks the player at a fixed step until the queue drains, logging
//! what the actions do to the sprites along the way.

use std::time::Duration;

use stagehand_actions::{
    ActionPlayer, CallbackAction, FadeAlphaByAction, GroupAction, MoveToAction, Point2,
    RepeatForAction, SequenceAction, Sprite, SpriteBatchAction, SpriteTexturesAction, TextureId,
};
use stagehand_easing::Easing;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Fixed tick used to drive the player, roughly one 60 Hz frame
const STEP: Duration = Duration::from_millis(16);

/// Upper bound on demo ticks in case a queued action never completes
const MAX_TICKS: u32 = 2_000;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("stagehand_demo=debug".parse().unwrap())
        .add_directive("stagehand_actions=debug".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Stagehand demo v{}", env!("CARGO_PKG_VERSION"));

    let hero = Sprite::new()
        .with_position(Point2::new(-120, 300))
        .with_alpha(0)
        .with_frame_count(8)
        .into_shared();
    let torch = Sprite::new()
        .with_position(Point2::new(420, 280))
        .with_texture(TextureId(100))
        .into_shared();

    // Entrance: slide on stage while fading in, both over the same span
    let entrance = GroupAction::new(vec![
        Box::new(
            MoveToAction::new(&hero, Point2::new(360, 0), Duration::from_millis(600))
                .with_timing_curve(Easing::QuadOut),
        ),
        Box::new(FadeAlphaByAction::fade_in(&hero, Duration::from_millis(600))),
    ])
    .with_name("entrance");

    let walk_cycle = match SpriteBatchAction::new(&hero, Duration::from_millis(90)) {
        Ok(action) => action.with_name("walk-cycle"),
        Err(e) => {
            tracing::error!("Failed to build walk cycle: {e}");
            std::process::exit(1);
        }
    };

    let hero_for_log = hero.clone();
    let show = SequenceAction::new(vec![
        Box::new(entrance),
        Box::new(CallbackAction::new(move || {
            let hero = hero_for_log.borrow();
            tracing::info!(
                "Hero on stage at ({}, {}), alpha {}",
                hero.position.x,
                hero.position.y,
                hero.alpha
            );
        })),
        Box::new(RepeatForAction::new(Box::new(walk_cycle), 3)),
        Box::new(FadeAlphaByAction::fade_out(&hero, Duration::from_millis(400))),
    ])
    .with_name("hero-show");

    let flicker = match SpriteTexturesAction::new(
        &torch,
        vec![TextureId(100), TextureId(101), TextureId(102)],
        Duration::from_millis(120),
    ) {
        Ok(action) => action.with_name("torch-flicker"),
        Err(e) => {
            tracing::error!("Failed to build torch flicker: {e}");
            std::process::exit(1);
        }
    };

    let mut player = ActionPlayer::new();
    player.run_action_then(Box::new(show), || tracing::info!("Hero show finished"));
    player.run_action(Box::new(RepeatForAction::new(Box::new(flicker), 4)));

    let mut ticks = 0u32;
    let mut advanced = 0u32;
    while !player.is_idle() && ticks < MAX_TICKS {
        if player.state().is_playing() {
            advanced += 1;
        }
        player.update(STEP);
        ticks += 1;

        // Hold the show for a few ticks partway through the entrance
        if ticks == 20 {
            player.pause();
            tracing::info!(
                "Hero frozen at ({}, {})",
                hero.borrow().position.x,
                hero.borrow().position.y
            );
        }
        if ticks == 26 {
            player.resume();
        }
    }

    if player.is_idle() {
        tracing::info!(
            "Demo finished after {} ticks ({} ms simulated)",
            ticks,
            advanced as u64 * STEP.as_millis() as u64
        );
    } else {
        tracing::error!("Demo hit the tick cap with {} action(s) queued", player.num_actions());
        std::process::exit(1);
    }
}
