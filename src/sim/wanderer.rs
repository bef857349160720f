//! The wandering ambush enemy
//!
//! Free-roams the lower band of the playfield on a unit-vector heading.
//! Every direction change is stochastic: walls, ceiling, floor, obstacle
//! bounces, and the idle timer all route through the same randomized
//! redirection rather than a mirror reflection. Health 0 means "not in
//! play"; `start_movement` revives it at a screen edge.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::bbox::{Aabb, Playfield};
use crate::consts::*;
use crate::render::{DrawCommand, Renderer};

#[derive(Debug, Clone)]
pub struct Wanderer {
    position: Vec2,
    prev_position: Vec2,
    /// Unit direction; each component is one of -1, -0.707, 0, 0.707, 1
    direction: Vec2,
    /// Horizontal sign pointing at the ship, refreshed every update
    desired_x: f32,
    speed: f32,
    idle_ms: f32,
    health: i32,
    points: u32,
    playfield: Playfield,
}

impl Wanderer {
    /// Starts dead, parked off-screen until `start_movement` revives it
    pub fn new(playfield: Playfield) -> Self {
        Self {
            position: Vec2::new(-100.0, 0.0),
            prev_position: Vec2::new(-100.0, 0.0),
            direction: Vec2::ZERO,
            desired_x: 1.0,
            speed: 0.0,
            idle_ms: 0.0,
            health: 0,
            points: 0,
            playfield,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, Vec2::new(WANDERER_WIDTH, WANDERER_HEIGHT))
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, position: Vec2) {
        self.position = position;
        self.prev_position = position;
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
    }

    /// Revive at the left or right edge (50/50) with a random speed tier.
    /// The initial heading points at the side it did not spawn on.
    pub fn start_movement(&mut self, rng: &mut Pcg32) {
        self.health = 1;
        let tier: i32 = rng.random_range(4..=7);
        self.points = 300 + 200 * (tier - 4) as u32;
        self.speed = tier as f32 * 60.0;

        let pf = self.playfield;
        let band = pf.height - pf.max_height() - 90.0;
        let y = pf.max_height() + 45.0 + rng.random::<f32>() * band;

        let spawn_right = rng.random::<f32>() >= 0.5;
        let toward = if spawn_right { -1.0 } else { 1.0 };
        let vert = three_way(rng);
        self.set_unit_direction(toward, vert);

        let x = if spawn_right { pf.width + 10.0 } else { -80.0 };
        self.position = Vec2::new(x, y);
        self.prev_position = self.position;
        self.idle_ms = 0.0;

        log::debug!(
            "wanderer revived: pos=({x:.0},{y:.0}) speed={} points={}",
            self.speed,
            self.points
        );
    }

    /// Per-tick movement and boundary handling. No-op while dead.
    /// Returns whether the wanderer is in play.
    pub fn update(&mut self, dt: f32, ship_x: f32, rng: &mut Pcg32) -> bool {
        if self.health <= 0 {
            return false;
        }

        self.position += self.direction * self.speed * dt;
        self.desired_x = if self.position.x > ship_x { -1.0 } else { 1.0 };

        let pf = self.playfield;
        if self.position.x < pf.left_wall() && self.direction.x < 0.5 {
            self.change_direction_bound(-1.0, 0.0, rng);
            self.idle_ms = 0.0;
        } else if self.position.x > pf.right_wall(WANDERER_WIDTH) && self.direction.x != -1.0 {
            self.change_direction_bound(1.0, 0.0, rng);
            self.idle_ms = 0.0;
        }
        if self.position.y < pf.max_height() && self.direction.y != 1.0 {
            self.change_direction_bound(0.0, -1.0, rng);
            self.idle_ms = 0.0;
        } else if self.position.y > pf.floor_y() && self.direction.y != -1.0 {
            self.change_direction_bound(0.0, 1.0, rng);
            self.idle_ms = 0.0;
        } else if self.idle_ms > WANDERER_IDLE_MS {
            // Nothing hit for a while: shoot off somewhere new
            self.change_direction(0.0, 0.0, rng);
            self.idle_ms = 0.0;
        }

        self.idle_ms += dt * 1000.0;
        self.prev_position = self.position;
        self.health != 0
    }

    /// Collision entry point. Zero damage means "bounce off whatever edge
    /// was struck"; nonzero damage is applied to health. Either way the
    /// contact-damage value is reported so the caller can hurt the other
    /// object.
    pub fn check_damage(&mut self, other: &Aabb, damage: i32, rng: &mut Pcg32) -> Option<i32> {
        let overlap = self.bounds().intersection(other)?;
        if damage == 0 {
            let (rel_x, rel_y) = if overlap.min.x > self.position.x {
                (1.0, 0.0)
            } else if overlap.min.x < self.position.x {
                (-1.0, 0.0)
            } else if overlap.min.y > self.position.y {
                (0.0, 1.0)
            } else {
                (0.0, -1.0)
            };
            self.change_direction(rel_x, rel_y, rng);
        } else {
            self.health -= damage;
        }
        Some(WANDERER_CONTACT_DAMAGE)
    }

    /// Bounce off an outer bound. The axis the bound sits on is forced to
    /// the opposite sign; the free axis is rolled, with the horizontal
    /// biased toward the ship half the time.
    fn change_direction_bound(&mut self, bound_x: f32, bound_y: f32, rng: &mut Pcg32) {
        let (x, y) = if bound_x != 0.0 {
            (-bound_x, three_way(rng))
        } else {
            let x = if rng.random::<f32>() < 0.5 {
                self.desired_x.signum()
            } else {
                three_way(rng)
            };
            (x, -bound_y)
        };
        self.set_unit_direction(x, y);
    }

    /// Redirect away from a struck object (or anywhere, when both avoid
    /// components are zero), trying not to retrace the previous heading.
    fn change_direction(&mut self, avoid_x: f32, avoid_y: f32, rng: &mut Pcg32) {
        let prev_x = sign_or_zero(self.direction.x);
        let prev_y = sign_or_zero(self.direction.y);
        self.change_direction_absolute(avoid_x, avoid_y, prev_x, prev_y, rng);
    }

    fn change_direction_absolute(
        &mut self,
        avoid_x: f32,
        avoid_y: f32,
        prev_x: f32,
        prev_y: f32,
        rng: &mut Pcg32,
    ) {
        // Struck something: step back out of it first
        self.position = self.prev_position;

        let mut x;
        let mut y;
        let mut attempts = 0;
        loop {
            if avoid_x != 0.0 {
                x = -avoid_x;
                y = three_way(rng);
            } else if avoid_y != 0.0 {
                y = -avoid_y;
                x = if rng.random::<f32>() <= 0.5 {
                    self.desired_x.signum()
                } else {
                    three_way(rng)
                };
            } else {
                x = if rng.random::<f32>() < 0.5 {
                    self.desired_x.signum()
                } else {
                    three_way(rng)
                };
                y = three_way(rng);
            }

            let retrace = (prev_x == x && prev_y == y) || (prev_x == -x && prev_y == -y);
            if !retrace || attempts >= 3 {
                // Give up quietly after 3 retries; distinctness is best-effort
                break;
            }
            attempts += 1;
        }

        self.set_unit_direction(x, y);
    }

    /// Scale to a unit vector: both components nonzero means a 45-degree
    /// diagonal, so each shrinks to 0.707.
    fn set_unit_direction(&mut self, x: f32, y: f32) {
        let sx = if y != 0.0 { x * DIAGONAL } else { x };
        let sy = if x != 0.0 { y * DIAGONAL } else { y };
        self.direction = Vec2::new(sx, sy);
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        if self.health <= 0 {
            return;
        }
        renderer.submit(DrawCommand::Wanderer { pos: self.position });
    }
}

/// Random -1, 0, or 1 with equal-ish thirds
fn three_way(rng: &mut Pcg32) -> f32 {
    let r: f32 = rng.random();
    if r < 0.33 {
        -1.0
    } else if r < 0.66 {
        0.0
    } else {
        1.0
    }
}

fn sign_or_zero(v: f32) -> f32 {
    if v == 0.0 { 0.0 } else { v.signum() }
}
