//! Host frame driver
//!
//! Decouples display refresh from the logical tick: the host reports how much
//! wall time passed and the runner runs however many fixed ticks that covers.
//! The loop only runs while the engine is `Playing`; leaving that status
//! stops it and drops any banked time, so resuming never fast-forwards.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::engine::Engine;
use crate::sim::GameStatus;

#[derive(Debug, Clone)]
pub struct FrameRunner {
    accumulator: f32,
    tick_dt: f32,
    max_substeps: u32,
}

impl Default for FrameRunner {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameRunner {
    pub fn new(tick_dt: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            tick_dt,
            max_substeps,
        }
    }

    /// Run the ticks owed for `elapsed` seconds of host time. Returns how
    /// many ticks ran.
    pub fn advance(&mut self, engine: &mut Engine, elapsed: f32) -> u32 {
        if engine.status() != GameStatus::Playing {
            self.accumulator = 0.0;
            return 0;
        }

        // Long stalls (tab hidden, debugger) are not worth catching up on
        self.accumulator += elapsed.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < self.max_substeps {
            engine.tick();
            self.accumulator -= self.tick_dt;
            substeps += 1;

            if engine.status() != GameStatus::Playing {
                self.accumulator = 0.0;
                break;
            }
        }
        substeps
    }

    /// Fraction of a tick banked for the next frame
    pub fn pending(&self) -> f32 {
        self.accumulator / self.tick_dt
    }
}
