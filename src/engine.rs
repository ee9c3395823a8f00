//! Owned game context
//!
//! The presentation layer holds one [`Engine`] and calls into it: start or
//! retry levels, tick once per frame, relay answers and purchases. All calls
//! are synchronous, so an action can never land halfway through a tick.

use crate::content::{ContentStore, Question};
use crate::error::{ConfigError, ContentError, Result};
use crate::input::InputLatch;
use crate::sim::{self, GameEvent, GameStatus, RunState};
use crate::tuning::Tuning;

pub struct Engine {
    state: RunState,
    content: ContentStore,
    tuning: Tuning,
    input: InputLatch,
    /// Events from the most recent tick
    events: Vec<GameEvent>,
}

impl Engine {
    /// Create an engine sitting on the menu.
    ///
    /// Fails if the tuning is invalid or any level is too short to ever
    /// reach the tuning's `questions_per_level`.
    pub fn new(content: ContentStore, tuning: Tuning, seed: u64) -> std::result::Result<Self, ConfigError> {
        tuning.validate()?;
        content.check_threshold(tuning.rules.questions_per_level)?;
        Ok(Self {
            state: RunState::new(seed, &tuning),
            content,
            tuning,
            input: InputLatch::new(),
            events: Vec::new(),
        })
    }

    /// Engine over the built-in content and default tuning
    pub fn with_reference_content(seed: u64) -> std::result::Result<Self, ConfigError> {
        let tuning = Tuning::default();
        let content = ContentStore::reference(tuning.rules.questions_per_level)?;
        Self::new(content, tuning, seed)
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn input_latch(&self) -> &InputLatch {
        &self.input
    }

    /// Host key events write here between ticks
    pub fn input_latch_mut(&mut self) -> &mut InputLatch {
        &mut self.input
    }

    /// Copy of the full run state, for rollback or inspection
    pub fn snapshot(&self) -> RunState {
        self.state.clone()
    }

    /// Roll back to a previously taken snapshot
    pub fn restore(&mut self, state: RunState) {
        self.state = state;
        self.events.clear();
    }

    pub fn last_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Start a fresh attempt of `level_index`. Out-of-range indices are
    /// rejected and leave the current state as it was.
    pub fn init_level(&mut self, level_index: usize) -> Result<()> {
        self.events.clear();
        sim::generate_level(&mut self.state, &self.content, &self.tuning, level_index).inspect_err(
            |e| {
                if let ContentError::LevelOutOfRange { .. } = e {
                    log::warn!("init_level({}) rejected: {}", level_index, e);
                }
            },
        )
    }

    /// Advance one frame from the input latch
    pub fn tick(&mut self) -> &RunState {
        let input = self.input.sample();
        self.events = sim::tick(&mut self.state, &input, &self.tuning);
        &self.state
    }

    /// Answer the active question; ignored unless one is active
    pub fn submit_answer(&mut self, option: usize) -> bool {
        sim::submit_answer(&mut self.state, &self.content, &self.tuning, option)
    }

    pub fn purchase_hint(&mut self) -> bool {
        sim::purchase_hint(&mut self.state, &self.tuning.rules)
    }

    pub fn purchase_shield(&mut self) -> bool {
        sim::purchase_shield(&mut self.state, &self.tuning.rules)
    }

    /// Resolve the active question against the content store
    pub fn active_question(&self) -> Option<&Question> {
        let active = self.state.active_question?;
        self.content.question(active.level, active.question).ok()
    }

    /// The active question's hint, once paid for
    pub fn visible_hint(&self) -> Option<&str> {
        if !self.state.hint_used {
            return None;
        }
        self.active_question().map(|q| q.hint.as_str())
    }

    pub fn has_next_level(&self) -> bool {
        self.state.level_index + 1 < self.content.level_count()
    }

    /// Menu -> first level
    pub fn start(&mut self) -> Result<bool> {
        if self.state.status != GameStatus::Menu {
            log::debug!("start ignored in {:?}", self.state.status);
            return Ok(false);
        }
        self.init_level(0)?;
        Ok(true)
    }

    /// Level complete -> next level
    pub fn advance(&mut self) -> Result<bool> {
        if self.state.status != GameStatus::LevelComplete || !self.has_next_level() {
            log::debug!("advance ignored in {:?}", self.state.status);
            return Ok(false);
        }
        self.init_level(self.state.level_index + 1)?;
        Ok(true)
    }

    /// Game over -> same level again, score kept
    pub fn retry(&mut self) -> Result<bool> {
        if self.state.status != GameStatus::GameOver {
            log::debug!("retry ignored in {:?}", self.state.status);
            return Ok(false);
        }
        self.init_level(self.state.level_index)?;
        Ok(true)
    }

    /// Final level complete -> menu, ending the session
    pub fn return_to_menu(&mut self) -> bool {
        if self.state.status != GameStatus::LevelComplete || self.has_next_level() {
            log::debug!("return_to_menu ignored in {:?}", self.state.status);
            return false;
        }
        log::info!("All levels complete, final score {}", self.state.score);
        self.state.reset_session(&self.tuning);
        self.events.clear();
        true
    }
}
