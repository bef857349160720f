//! Match and round orchestration
//!
//! A match holds one `RoundState` across rounds: the obstacle field and the
//! score persist, while each round respawns the ship and the formation. A
//! round ends when something reaches the ship; the match ends when lives run
//! out or the input source asks to quit.

use crate::hud::draw_hud;
use crate::input::InputSource;
use crate::render::Renderer;
use crate::sim::{RoundEvent, RoundState, step};
use crate::tuning::Tuning;

/// Why `run_match` returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// All lives spent
    Defeated,
    /// The input source requested quit
    Quit,
}

/// Run a full match and return the outcome with the final score
pub fn run_match<I, R>(
    tuning: Tuning,
    seed: u64,
    dt: f32,
    input: &mut I,
    renderer: &mut R,
) -> (MatchOutcome, u32)
where
    I: InputSource,
    R: Renderer,
{
    let mut state = RoundState::new(seed, tuning);
    let mut lives = state.tuning.lives;
    log::info!("match start: seed={seed} lives={lives}");

    while lives > 0 {
        state.reset_round(lives);
        loop {
            let snapshot = input.poll();
            if snapshot.quit {
                log::info!("quit requested; final score {}", state.score);
                return (MatchOutcome::Quit, state.score);
            }

            let event = step(&mut state, &snapshot, dt);
            draw_frame(&state, lives, renderer);

            if event == RoundEvent::RoundOver {
                break;
            }
        }
        lives -= 1;
    }

    log::info!("match over: final score {}", state.score);
    (MatchOutcome::Defeated, state.score)
}

/// Issue this frame's draw commands: ship and shots, overlay, obstacles,
/// wanderer, formation.
pub fn draw_frame<R: Renderer>(state: &RoundState, lives: i32, renderer: &mut R) {
    state.ship.draw(renderer);
    draw_hud(&state.playfield, state.score, lives, renderer);
    for obstacle in &state.obstacles {
        obstacle.draw(renderer);
    }
    state.wanderer.draw(renderer);
    for segment in &state.formation {
        segment.draw(renderer);
    }
}
