//! Kembara headless demo
//!
//! Plays every level with a simple autopilot and logs what happens. Useful
//! for eyeballing balance changes without a renderer.
//!
//! Usage: `kembara [seed]` (set `RUST_LOG=debug` for per-tick events)

use kembara::consts::SIM_DT;
use kembara::input::keys;
use kembara::sim::GameStatus;
use kembara::{ConfigError, Engine, FrameRunner};

/// Give up if the autopilot gets stuck
const MAX_FRAMES: u64 = 200_000;
/// Start holding jump this far before a block
const JUMP_LEAD: f32 = 100.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2024);

    log::info!("Kembara (headless) starting with seed {}", seed);
    if let Err(e) = run(seed) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(seed: u64) -> Result<(), ConfigError> {
    let mut engine = Engine::with_reference_content(seed)?;
    let mut runner = FrameRunner::default();
    engine.start()?;

    let mut frames = 0u64;
    loop {
        match engine.status() {
            GameStatus::Playing => {
                steer(&mut engine);
                runner.advance(&mut engine, SIM_DT);
                frames += 1;
                if frames > MAX_FRAMES {
                    log::warn!("Autopilot gave up after {} frames", frames);
                    break;
                }
            }
            GameStatus::Question => answer(&mut engine),
            GameStatus::LevelComplete => {
                if engine.has_next_level() {
                    engine.advance()?;
                } else {
                    match serde_json::to_string_pretty(engine.state()) {
                        Ok(json) => println!("{json}"),
                        Err(e) => log::warn!("Could not serialize final state: {}", e),
                    }
                    engine.return_to_menu();
                    break;
                }
            }
            GameStatus::GameOver => {
                engine.retry()?;
            }
            GameStatus::Menu => break,
        }
    }

    log::info!("Demo finished after {} frames", frames);
    Ok(())
}

/// Walk right and hop into the next untriggered block
fn steer(engine: &mut Engine) {
    let x = engine.state().player.pos.x;
    let near_block = engine
        .state()
        .blocks
        .iter()
        .find(|b| !b.is_triggered() && b.pos.x + engine.tuning().layout.block_size > x)
        .is_some_and(|b| x >= b.pos.x - JUMP_LEAD);

    let latch = engine.input_latch_mut();
    latch.key_down(keys::RIGHT);
    latch.set(keys::JUMP, near_block);

    // Spend spare coins on a shield once there is plenty left for hints
    if engine.state().score >= 200 {
        engine.purchase_shield();
    }
}

fn answer(engine: &mut Engine) {
    let Some(question) = engine.active_question().cloned() else {
        return;
    };
    log::info!("Q: {}", question.text);

    if engine.purchase_hint() {
        if let Some(hint) = engine.visible_hint() {
            log::info!("   hint: {}", hint);
        }
    }

    let choice = question.correct_answer;
    let label = question.options.get(choice).map(String::as_str).unwrap_or("?");
    log::info!("   answering: {}", label);
    engine.submit_answer(choice);
    log::info!(
        "   {}/{} correct, score {}",
        engine.state().correct_answers,
        engine.state().questions_answered,
        engine.state().score
    );
}
