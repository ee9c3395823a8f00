//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical step per tick
//! - Seeded RNG only
//! - Stable iteration order (entity index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod economy;
pub mod progress;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use economy::{purchase_hint, purchase_shield};
pub use progress::submit_answer;
pub use state::{ActiveQuestion, Coin, GameEvent, GameStatus, Player, QuestionBlock, RngState, RunState};
pub use tick::{TickInput, generate_level, step_player, tick};
