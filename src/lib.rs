//! Kembara - a quiz-gated side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level/question state, economy)
//! - `content`: Read-only level and question store
//! - `input`: Key latch sampled once per tick
//! - `engine`: Owned game context driven by the presentation layer
//! - `runner`: Host frame driver
//! - `tuning`: Data-driven game balance

pub mod content;
pub mod engine;
pub mod error;
pub mod input;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use content::{ContentStore, Level, Question};
pub use engine::Engine;
pub use error::{ConfigError, ContentError, TuningError};
pub use input::{InputLatch, KeyId};
pub use runner::FrameRunner;
pub use tuning::Tuning;

/// Reference game constants (the defaults behind [`Tuning`])
pub mod consts {
    /// Logical tick rate the host frame driver targets
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const CANVAS_HEIGHT: f32 = 400.0;
    pub const GROUND_THICKNESS: f32 = 20.0;
    /// Y coordinate of the top of the ground strip
    pub const GROUND_LINE: f32 = CANVAS_HEIGHT - GROUND_THICKNESS;

    /// Player physics (units per tick)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_IMPULSE: f32 = -14.0;
    pub const MOVE_SPEED: f32 = 5.0;
    /// Horizontal velocity multiplier per tick when no direction is held
    pub const FRICTION: f32 = 0.8;

    /// Entity box sizes (square)
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const COIN_SIZE: f32 = 20.0;
    pub const QUESTION_BLOCK_SIZE: f32 = 40.0;

    pub const SPAWN_X: f32 = 50.0;
    pub const SPAWN_Y: f32 = 300.0;

    /// Economy
    pub const COIN_REWARD: u64 = 10;
    pub const HINT_COST: u64 = 50;
    pub const SHIELD_COST: u64 = 100;
    pub const STARTING_LIVES: u8 = 3;

    /// Progression
    pub const QUESTIONS_PER_LEVEL: u32 = 10;
    pub const PASS_THRESHOLD: u32 = 8;
}
