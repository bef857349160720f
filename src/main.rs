//! Bug Blaster entry point
//!
//! Runs a headless demo match with a scripted pilot: useful for smoke
//! testing the simulation and for profiling, since the core never needs a
//! window to run. A platform front end supplies its own `InputSource` and
//! `Renderer` instead.

use bug_blaster::consts::SIM_DT;
use bug_blaster::game::run_match;
use bug_blaster::input::{InputSnapshot, InputSource};
use bug_blaster::render::NullRenderer;
use bug_blaster::tuning::Tuning;

/// Scripted pilot: strafes side to side while holding fire, for a fixed
/// number of ticks.
struct DemoPilot {
    tick: u32,
    max_ticks: u32,
}

impl InputSource for DemoPilot {
    fn poll(&mut self) -> InputSnapshot {
        if self.tick >= self.max_ticks {
            return InputSnapshot {
                quit: true,
                ..InputSnapshot::default()
            };
        }
        // Swap strafe direction every half second
        let leftward = (self.tick / 60) % 2 == 0;
        self.tick += 1;
        InputSnapshot {
            left: leftward,
            right: !leftward,
            fire: true,
            ..InputSnapshot::default()
        }
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

    let tuning = Tuning::load("tuning.json");
    log::info!("Bug Blaster headless demo starting (seed {seed})");

    let mut pilot = DemoPilot {
        tick: 0,
        max_ticks: 30 * 120, // 30 simulated seconds
    };
    let mut renderer = NullRenderer;

    let (outcome, score) = run_match(tuning, seed, SIM_DT, &mut pilot, &mut renderer);
    println!("demo finished: {outcome:?}, score {score}");
}
