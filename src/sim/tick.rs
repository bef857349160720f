//! Per-tick simulation step
//!
//! One call to `step` advances the whole scene by `dt`: input is latched
//! into the ship, every entity moves, then the collision-and-scoring
//! resolver runs its passes in a fixed order. The order is load-bearing -
//! it decides who dies first when several overlaps land on the same tick.

use glam::Vec2;
use rand::Rng;

use super::segment::{Role, Segment};
use super::state::{RoundState, place_obstacle};
use crate::grid_align;

/// What the orchestrator should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    Running,
    /// The ship was run down; the round loop breaks and a life is spent
    RoundOver,
}

/// Advance the simulation by one tick
pub fn step(state: &mut RoundState, input: &crate::input::InputSnapshot, dt: f32) -> RoundEvent {
    state.ship.apply_input(input);
    state.ship.update(dt);

    let ship_x = state.ship.position().x;
    state.wanderer.update(dt, ship_x, &mut state.rng);

    // Displacement ripples down the chain: each segment hands its previous
    // move to the one behind it, all within this single pass
    let mut displacement = Vec2::ZERO;
    for segment in &mut state.formation {
        displacement = segment.update(dt, displacement);
    }

    for obstacle in &mut state.obstacles {
        obstacle.tick(dt);
    }

    // Periodic revival roll while the wanderer is out of play
    if state.tick_count % 100 == 0
        && !state.wanderer.is_alive()
        && state.rng.random::<f32>() < state.tuning.wanderer_spawn_chance
    {
        state.wanderer.start_movement(&mut state.rng);
    }

    let event = resolve_collisions(state);

    state.tick_count = if state.tick_count >= 1000 {
        0
    } else {
        state.tick_count + 1
    };
    event
}

/// The resolver: cross-checks every live pairing in a fixed order and
/// applies damage, scoring, and structural changes.
fn resolve_collisions(state: &mut RoundState) -> RoundEvent {
    let every_other = state.tick_count % 2 == 0;

    // Pass 1: the obstacle field. Ship blocking runs every tick; the
    // cheaper-to-skip sub-passes run every other tick to bound cost.
    let mut m = 0;
    while m < state.obstacles.len() {
        if state.obstacles[m].position().y >= state.playfield.ship_zone_y() {
            let ship_box = state.ship.bounds();
            if state.obstacles[m].check_damage(&ship_box, 0).is_some() {
                // Obstacles block movement; they never hurt the ship
                state.ship.undo_move();
            }
        }

        if every_other {
            let obstacle_box = state.obstacles[m].bounds();
            let obstacle_x = state.obstacles[m].position().x;

            // Projectiles, behind an x-proximity prefilter
            for shot in state.ship.shots_mut() {
                if !shot.is_live() || (shot.position().x - obstacle_x).abs() > 30.0 {
                    continue;
                }
                if let Some(damage) = shot.check_damage(&obstacle_box) {
                    let shot_box = shot.bounds();
                    state.obstacles[m].check_damage(&shot_box, damage);
                    if state.obstacles[m].health() <= 0 {
                        state.score += state.obstacles[m].points();
                    }
                    break;
                }
            }

            // Wanderer resting on the obstacle: it bounces itself and chips
            // the obstacle through the rate-limited contact path
            if let Some(contact) = state.wanderer.check_damage(&obstacle_box, 0, &mut state.rng) {
                state.obstacles[m].apply_contact_damage(contact);
            }

            // Formation segments bounce off obstacles, damage-free
            for segment in &mut state.formation {
                segment.check_damage(&obstacle_box, 0);
            }
        }

        if state.obstacles[m].health() <= 0 {
            log::debug!("obstacle destroyed at {:?}", state.obstacles[m].position());
            state.obstacles.remove(m);
        } else {
            m += 1;
        }
    }

    // Pass 2: projectiles against the wanderer, then the formation
    for shot in state.ship.shots_mut() {
        if state.wanderer.is_alive()
            && (shot.position().x - state.wanderer.position().x).abs() <= 90.0
        {
            if let Some(damage) = shot.check_damage(&state.wanderer.bounds()) {
                state.wanderer.take_damage(damage);
                state.score += state.wanderer.points();
                log::info!("wanderer down, +{} points", state.wanderer.points());
                continue;
            }
        }

        let mut j = 0;
        while j < state.formation.len() {
            if (shot.position().x - state.formation[j].position().x).abs() <= 40.0
                && shot.check_damage(&state.formation[j].bounds()).is_some()
            {
                state.score += state.formation[j].points();
                split_formation(&mut state.formation, j);
                let site = state.formation[j].position();
                place_obstacle(&mut state.obstacles, grid_align(site.x), grid_align(site.y));
                state.formation.remove(j);
                break;
            }
            j += 1;
        }
    }

    // Pass 3: the wanderer ramming the ship clears the round outright
    if state.wanderer.is_alive() && state.ship.check_damage(&state.wanderer.bounds()).is_some() {
        state.wanderer.take_damage(1);
        log::info!("wanderer reached the ship; round over");
        return RoundEvent::RoundOver;
    }

    // Pass 4: any formation segment reaching the ship ends the round
    let mut collision = false;
    for segment in &state.formation {
        if (state.ship.position().x - segment.position().x).abs() <= 40.0
            && state.ship.check_damage(&segment.bounds()).is_some()
        {
            collision = true;
        }
    }
    if collision {
        log::info!("formation reached the ship; round over");
        return RoundEvent::RoundOver;
    }

    RoundEvent::Running
}

/// Re-role the neighbors of the segment at `index` before it is removed.
/// Killing a Body splits the chain in two: the successor leads the front
/// half onward while the predecessor caps the back half.
fn split_formation(formation: &mut [Segment], index: usize) {
    let len = formation.len();
    match formation[index].role() {
        Role::Lead => {
            if index + 1 < len && formation[index + 1].role() != Role::Lead {
                formation[index + 1].set_role(Role::Lead);
            }
        }
        Role::Tail => {
            if index > 0 && formation[index - 1].role() != Role::Lead {
                formation[index - 1].set_role(Role::Tail);
            }
        }
        Role::Body => {
            if index + 1 < len && formation[index + 1].role() != Role::Lead {
                formation[index + 1].set_role(Role::Lead);
            }
            if index > 0 && formation[index - 1].role() != Role::Lead {
                formation[index - 1].set_role(Role::Tail);
            }
        }
    }
}
