//! Game balance and layout configuration
//!
//! Every number the simulation uses lives here so content authors can
//! rebalance without touching code. Missing JSON fields fall back to the
//! reference values in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Per-tick player physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_impulse: f32,
    pub move_speed: f32,
    /// Horizontal velocity multiplier when no direction is held
    pub friction: f32,
    /// Y of the ground surface
    pub ground_line: f32,
    pub player_size: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            move_speed: MOVE_SPEED,
            friction: FRICTION,
            ground_line: GROUND_LINE,
            player_size: PLAYER_SIZE,
        }
    }
}

/// Where entities are placed when a level is generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    pub spawn_x: f32,
    pub spawn_y: f32,

    pub coin_count: usize,
    pub coin_size: f32,
    /// Coin `i` lands at `coin_start_x + i * coin_spacing + U[0, coin_jitter_x)`
    pub coin_start_x: f32,
    pub coin_spacing: f32,
    pub coin_jitter_x: f32,
    /// Coin height lands at `coin_min_y + U[0, coin_jitter_y)`
    pub coin_min_y: f32,
    pub coin_jitter_y: f32,

    pub block_size: f32,
    /// Block `i` lands at `block_start_x + i * block_spacing`
    pub block_start_x: f32,
    pub block_spacing: f32,
    pub block_y: f32,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            coin_count: 15,
            coin_size: COIN_SIZE,
            coin_start_x: 200.0,
            coin_spacing: 300.0,
            coin_jitter_x: 100.0,
            coin_min_y: 150.0,
            coin_jitter_y: 150.0,
            block_size: QUESTION_BLOCK_SIZE,
            block_start_x: 400.0,
            block_spacing: 600.0,
            block_y: 200.0,
        }
    }
}

/// Score economy and level progression rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesTuning {
    pub coin_reward: u64,
    pub hint_cost: u64,
    pub shield_cost: u64,
    pub starting_lives: u8,
    /// Answers needed before a level resolves
    pub questions_per_level: u32,
    /// Correct answers needed to pass
    pub pass_threshold: u32,
}

impl Default for RulesTuning {
    fn default() -> Self {
        Self {
            coin_reward: COIN_REWARD,
            hint_cost: HINT_COST,
            shield_cost: SHIELD_COST,
            starting_lives: STARTING_LIVES,
            questions_per_level: QUESTIONS_PER_LEVEL,
            pass_threshold: PASS_THRESHOLD,
        }
    }
}

/// Complete balance configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsTuning,
    pub layout: LayoutTuning,
    pub rules: RulesTuning,
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let p = &self.physics;
        let l = &self.layout;
        let r = &self.rules;

        if !(0.0..=1.0).contains(&p.friction) {
            return Err(TuningError::Invalid(format!(
                "friction must be within [0, 1], got {}",
                p.friction
            )));
        }
        for (name, value) in [
            ("gravity", p.gravity),
            ("jump_impulse", p.jump_impulse),
            ("move_speed", p.move_speed),
            ("ground_line", p.ground_line),
        ] {
            if !value.is_finite() {
                return Err(TuningError::Invalid(format!("{name} must be finite, got {value}")));
            }
        }
        for (name, size) in [
            ("player_size", p.player_size),
            ("coin_size", l.coin_size),
            ("block_size", l.block_size),
        ] {
            if size <= 0.0 || !size.is_finite() {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {size}"
                )));
            }
        }
        if l.coin_jitter_x < 0.0 || l.coin_jitter_y < 0.0 {
            return Err(TuningError::Invalid("coin jitter must not be negative".into()));
        }
        if r.questions_per_level == 0 {
            return Err(TuningError::Invalid("questions_per_level must be at least 1".into()));
        }
        if r.pass_threshold > r.questions_per_level {
            return Err(TuningError::Invalid(format!(
                "pass_threshold {} exceeds questions_per_level {}",
                r.pass_threshold, r.questions_per_level
            )));
        }
        Ok(())
    }

    /// Y the player rests at when grounded
    #[inline]
    pub fn ground_rest_y(&self) -> f32 {
        self.physics.ground_line - self.physics.player_size
    }
}
