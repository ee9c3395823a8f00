//! Question answering
//!
//! The one transition out of `Question`. Level start, retry and advance go
//! through [`super::generate_level`].

use super::state::{GameStatus, RunState};
use crate::content::ContentStore;
use crate::tuning::Tuning;

/// Answer the active question with `option`.
///
/// Returns false (and changes nothing) unless a question is active.
pub fn submit_answer(state: &mut RunState, content: &ContentStore, tuning: &Tuning, option: usize) -> bool {
    let Some(active) = state.active_question else {
        log::debug!("Answer {} ignored, no active question", option);
        return false;
    };
    if state.status != GameStatus::Question {
        log::debug!("Answer {} ignored in {:?}", option, state.status);
        return false;
    }

    let correct = match content.question(active.level, active.question) {
        Ok(q) => q.is_correct(option),
        Err(e) => {
            log::warn!("Active question did not resolve: {}", e);
            false
        }
    };

    if state.questions_answered < tuning.rules.questions_per_level {
        state.questions_answered += 1;
        if correct {
            state.correct_answers += 1;
        }
    }

    log::debug!(
        "Question {} answered {} ({}/{})",
        active.question,
        if correct { "correctly" } else { "wrong" },
        state.correct_answers,
        state.questions_answered
    );

    state.active_question = None;
    state.hint_used = false;
    state.status = GameStatus::Playing;
    true
}
