//! Game state and core simulation types
//!
//! Everything a level attempt needs lives in [`RunState`]. Entities are
//! stored in plain vectors and referred to by index, which stays stable for
//! the whole attempt since nothing is ever removed mid-level.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// State machine discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for a start action
    Menu,
    /// Physics running
    Playing,
    /// Paused on a question until it is answered
    Question,
    /// Passed the level attempt
    LevelComplete,
    /// Failed the level attempt
    GameOver,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    pub shielded: bool,
}

impl Player {
    pub fn spawn(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            on_ground: false,
            shielded: false,
        }
    }

    #[inline]
    pub fn bounds(&self, size: f32) -> Aabb {
        Aabb::square(self.pos, size)
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    collected: bool,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            collected: false,
        }
    }

    #[inline]
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// One-way; there is no way back to uncollected
    pub fn collect(&mut self) {
        self.collected = true;
    }
}

/// A block that poses a question when touched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBlock {
    pub pos: Vec2,
    /// Index into the current level's questions
    pub question_index: usize,
    triggered: bool,
}

impl QuestionBlock {
    pub fn new(pos: Vec2, question_index: usize) -> Self {
        Self {
            pos,
            question_index,
            triggered: false,
        }
    }

    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// One-way; a block only ever asks once per attempt
    pub fn trigger(&mut self) {
        self.triggered = true;
    }
}

/// Reference to the question currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveQuestion {
    pub level: usize,
    pub question: usize,
    /// Block that raised it
    pub block: usize,
}

/// Events emitted by a tick for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { coin: usize },
    QuestionTriggered { block: usize, question: usize },
    LevelComplete,
    GameOver,
}

/// RNG seed material for level generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    /// Distinct stream per level attempt, reproducible from the session seed
    pub fn for_attempt(seed: u64, level: usize, attempt: u64) -> Self {
        Self {
            seed: seed.wrapping_add((level as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)),
            stream: attempt,
        }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete run state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Session seed for coin placement
    pub seed: u64,
    /// Level inits this session, feeds the coin RNG stream
    pub attempts: u64,
    pub level_index: usize,
    /// Spendable currency
    pub score: u64,
    /// Displayed only; nothing in the simulation consumes lives yet
    pub lives: u8,
    pub correct_answers: u32,
    pub questions_answered: u32,
    pub active_question: Option<ActiveQuestion>,
    pub hint_used: bool,
    pub status: GameStatus,
    /// Ticks simulated in the current attempt
    pub time_ticks: u64,
    pub player: Player,
    pub coins: Vec<Coin>,
    pub blocks: Vec<QuestionBlock>,
}

impl RunState {
    /// Fresh session sitting on the menu
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            attempts: 0,
            level_index: 0,
            score: 0,
            lives: tuning.rules.starting_lives,
            correct_answers: 0,
            questions_answered: 0,
            active_question: None,
            hint_used: false,
            status: GameStatus::Menu,
            time_ticks: 0,
            player: Player::spawn(Vec2::new(tuning.layout.spawn_x, tuning.layout.spawn_y)),
            coins: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Drop everything back to the menu, keeping the seed
    pub fn reset_session(&mut self, tuning: &Tuning) {
        let seed = self.seed;
        let attempts = self.attempts;
        *self = Self::new(seed, tuning);
        // Keep advancing the stream so a new session re-rolls coins
        self.attempts = attempts;
    }

    pub fn collected_count(&self) -> usize {
        self.coins.iter().filter(|c| c.is_collected()).count()
    }

    pub fn triggered_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_triggered()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_on_menu() {
        let tuning = Tuning::default();
        let state = RunState::new(7, &tuning);
        assert_eq!(state.status, GameStatus::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.player.pos, Vec2::new(50.0, 300.0));
        assert!(state.active_question.is_none());
    }

    #[test]
    fn test_one_way_flags() {
        let mut coin = Coin::new(Vec2::ZERO);
        coin.collect();
        coin.collect();
        assert!(coin.is_collected());

        let mut block = QuestionBlock::new(Vec2::ZERO, 3);
        assert!(!block.is_triggered());
        block.trigger();
        assert!(block.is_triggered());
        assert_eq!(block.question_index, 3);
    }

    #[test]
    fn test_reset_session_keeps_rng_progress() {
        let tuning = Tuning::default();
        let mut state = RunState::new(7, &tuning);
        state.score = 300;
        state.attempts = 4;
        state.status = GameStatus::LevelComplete;
        state.reset_session(&tuning);
        assert_eq!(state.score, 0);
        assert_eq!(state.attempts, 4);
        assert_eq!(state.status, GameStatus::Menu);
    }

    #[test]
    fn test_rng_streams_differ_per_attempt() {
        use rand::Rng;
        let a: u32 = RngState::for_attempt(1, 0, 0).to_rng().random();
        let b: u32 = RngState::for_attempt(1, 0, 1).to_rng().random();
        let a2: u32 = RngState::for_attempt(1, 0, 0).to_rng().random();
        assert_eq!(a, a2);
        assert_ne!(a, b);
    }
}
