//! Score-as-currency purchases
//!
//! Purchases that cannot be afforded or are already owned are refused
//! without error; the return value says whether anything was bought.

use super::state::RunState;
use crate::tuning::RulesTuning;

/// Reveal the active question's hint
pub fn purchase_hint(state: &mut RunState, rules: &RulesTuning) -> bool {
    if state.active_question.is_none() || state.hint_used || state.score < rules.hint_cost {
        return false;
    }
    state.score -= rules.hint_cost;
    state.hint_used = true;
    log::debug!("Hint bought, score {}", state.score);
    true
}

/// Shield the player until the next level init
pub fn purchase_shield(state: &mut RunState, rules: &RulesTuning) -> bool {
    if state.player.shielded || state.score < rules.shield_cost {
        return false;
    }
    state.score -= rules.shield_cost;
    state.player.shielded = true;
    log::debug!("Shield bought, score {}", state.score);
    true
}
