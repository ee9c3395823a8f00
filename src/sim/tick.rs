//! Fixed-step simulation tick
//!
//! One call advances one frame. Order inside a tick is load-bearing:
//! movement, ground resolution, jump, boundary clamp, coins, question
//! blocks, then (only if nothing triggered) the level completion check.

use glam::Vec2;
use rand::Rng;

use super::collision::Aabb;
use super::state::{ActiveQuestion, Coin, GameEvent, GameStatus, Player, QuestionBlock, RngState, RunState};
use crate::content::ContentStore;
use crate::error::{ContentError, Result};
use crate::tuning::{PhysicsTuning, Tuning};

/// Inputs held during a single tick, sampled from the input latch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Held jump re-fires every tick the player is grounded
    pub jump: bool,
}

/// Advance the run by one tick. Does nothing unless the status is `Playing`.
pub fn tick(state: &mut RunState, input: &TickInput, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.status != GameStatus::Playing {
        return events;
    }

    state.time_ticks += 1;

    step_player(&mut state.player, input, &tuning.physics);

    let player_box = state.player.bounds(tuning.physics.player_size);

    // --- COINS ---
    let before = state.collected_count();
    let coin_size = tuning.layout.coin_size;
    for (i, coin) in state.coins.iter_mut().enumerate() {
        if !coin.is_collected() && player_box.overlaps(&Aabb::square(coin.pos, coin_size)) {
            coin.collect();
            events.push(GameEvent::CoinCollected { coin: i });
        }
    }
    let gained = (state.collected_count() - before) as u64;
    if gained > 0 {
        state.score += gained * tuning.rules.coin_reward;
        log::debug!("Collected {} coin(s), score {}", gained, state.score);
    }

    // --- QUESTION BLOCKS ---
    // Every overlapping block is marked, but only the last one becomes the
    // active question. Layouts keep blocks far apart so this does not occur
    // in practice.
    let block_size = tuning.layout.block_size;
    let mut triggered: Option<usize> = None;
    let mut trigger_count = 0;
    for (i, block) in state.blocks.iter_mut().enumerate() {
        if !block.is_triggered() && player_box.overlaps(&Aabb::square(block.pos, block_size)) {
            block.trigger();
            triggered = Some(i);
            trigger_count += 1;
        }
    }

    if let Some(block_idx) = triggered {
        if trigger_count > 1 {
            log::warn!(
                "{} question blocks triggered in one tick, only block {} is asked",
                trigger_count,
                block_idx
            );
        }
        let question = state.blocks[block_idx].question_index;
        state.active_question = Some(ActiveQuestion {
            level: state.level_index,
            question,
            block: block_idx,
        });
        state.status = GameStatus::Question;
        events.push(GameEvent::QuestionTriggered {
            block: block_idx,
            question,
        });
        log::debug!("Block {} triggered question {}", block_idx, question);
        return events;
    }

    // --- LEVEL COMPLETION ---
    if state.questions_answered >= tuning.rules.questions_per_level {
        if state.correct_answers >= tuning.rules.pass_threshold {
            state.status = GameStatus::LevelComplete;
            events.push(GameEvent::LevelComplete);
            log::info!(
                "Level {} complete ({}/{})",
                state.level_index + 1,
                state.correct_answers,
                state.questions_answered
            );
        } else {
            state.status = GameStatus::GameOver;
            events.push(GameEvent::GameOver);
            log::info!(
                "Level {} failed ({}/{}, need {})",
                state.level_index + 1,
                state.correct_answers,
                state.questions_answered,
                tuning.rules.pass_threshold
            );
        }
    }

    events
}

/// Integrate player movement and resolve the ground and left wall
pub fn step_player(player: &mut Player, input: &TickInput, physics: &PhysicsTuning) {
    // Horizontal: direct velocity control, exponential decay when released
    if input.left {
        player.vel.x = -physics.move_speed;
    } else if input.right {
        player.vel.x = physics.move_speed;
    } else {
        player.vel.x *= physics.friction;
    }

    // Gravity applies even when grounded; the ground clamp cancels it
    player.vel.y += physics.gravity;
    player.pos += player.vel;

    // --- GROUND ---
    if player.pos.y + physics.player_size > physics.ground_line {
        player.pos.y = physics.ground_line - physics.player_size;
        player.vel.y = 0.0;
        player.on_ground = true;
    } else {
        player.on_ground = false;
    }

    // --- JUMP ---
    if input.jump && player.on_ground {
        player.vel.y = physics.jump_impulse;
        player.on_ground = false;
    }

    // Left edge only, the level scrolls right indefinitely
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
    }
}

/// Build a fresh attempt of `level_index` and start playing it.
///
/// Entities, level counters and the player are replaced wholesale; score and
/// lives carry over. On error the state is left untouched.
pub fn generate_level(
    state: &mut RunState,
    content: &ContentStore,
    tuning: &Tuning,
    level_index: usize,
) -> Result<()> {
    let level = content.level(level_index)?;
    let required = tuning.rules.questions_per_level;
    if level.questions.len() < required as usize {
        return Err(ContentError::TooFewQuestions {
            level: level_index,
            found: level.questions.len(),
            required,
        });
    }
    let layout = &tuning.layout;

    let blocks = (0..level.questions.len())
        .map(|i| {
            // Blocks hold indices, so check each one resolves before committing
            content.question(level_index, i)?;
            let x = layout.block_start_x + i as f32 * layout.block_spacing;
            Ok(QuestionBlock::new(Vec2::new(x, layout.block_y), i))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut rng = RngState::for_attempt(state.seed, level_index, state.attempts).to_rng();
    let coins = (0..layout.coin_count)
        .map(|i| {
            let x = layout.coin_start_x
                + i as f32 * layout.coin_spacing
                + rng.random::<f32>() * layout.coin_jitter_x;
            let y = layout.coin_min_y + rng.random::<f32>() * layout.coin_jitter_y;
            Coin::new(Vec2::new(x, y))
        })
        .collect();

    state.attempts += 1;
    state.level_index = level_index;
    state.player = Player::spawn(Vec2::new(layout.spawn_x, layout.spawn_y));
    state.coins = coins;
    state.blocks = blocks;
    state.correct_answers = 0;
    state.questions_answered = 0;
    state.active_question = None;
    state.hint_used = false;
    state.time_ticks = 0;
    state.status = GameStatus::Playing;

    log::info!(
        "Level {} started: {} question blocks, {} coins",
        level_index + 1,
        state.blocks.len(),
        state.coins.len()
    );
    Ok(())
}
