//! Destructible obstacles
//!
//! Obstacles sit on a 35-unit grid and soak damage in two ways: direct hits
//! (projectiles) apply instantly, lingering contact (wanderer or formation
//! resting on one) is rate-limited so an overlap held across many frames
//! cannot delete the obstacle in a single burst.

use glam::Vec2;

use super::bbox::Aabb;
use crate::consts::*;
use crate::render::{DrawCommand, Renderer};

#[derive(Debug, Clone)]
pub struct Obstacle {
    position: Vec2,
    health: i32,
    /// Accumulated milliseconds since the last contact-damage application
    cooldown_ms: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            health: OBSTACLE_HEALTH,
            cooldown_ms: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn points(&self) -> u32 {
        OBSTACLE_POINTS
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, Vec2::new(OBSTACLE_SIZE, OBSTACLE_SIZE))
    }

    /// Direct hit test: intersecting boxes apply `damage` immediately,
    /// bypassing the contact cooldown. Returns `Some(())` on contact so the
    /// caller can react (block the ship, score a kill).
    pub fn check_damage(&mut self, other: &Aabb, damage: i32) -> Option<()> {
        if other.intersects(&self.bounds()) {
            self.health -= damage;
            return Some(());
        }
        None
    }

    /// Lingering-overlap damage: only lands once the cooldown has
    /// accumulated, then rearms it.
    pub fn apply_contact_damage(&mut self, damage: i32) {
        if self.cooldown_ms >= CONTACT_COOLDOWN_MS {
            self.health -= damage;
            self.cooldown_ms = 0.0;
        }
    }

    /// Advance the contact cooldown; runs every simulated frame whether or
    /// not anything is touching.
    pub fn tick(&mut self, dt: f32) {
        if self.cooldown_ms < CONTACT_TIMER_CAP_MS {
            self.cooldown_ms += dt * 1000.0;
        }
    }

    /// Visual stage index, 0 (pristine) through 3 (nearly destroyed)
    pub fn stage(&self) -> u8 {
        if self.health <= 3 {
            3
        } else if self.health <= 6 {
            2
        } else if self.health <= 9 {
            1
        } else {
            0
        }
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        renderer.submit(DrawCommand::Obstacle {
            pos: self.position,
            stage: self.stage(),
        });
    }
}


#[cfg(test)]
mod contact_props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Continuous contact never lands more than once per accumulated
        /// 200ms, however the elapsed time is sliced into frames.
        #[test]
        fn contact_damage_bounded_by_elapsed_time(
            frame_ms in 1.0f32..50.0,
            frames in 1usize..2000,
        ) {
            let mut obstacle = Obstacle::new(0.0, 0.0);
            let start = obstacle.health();
            for _ in 0..frames {
                obstacle.tick(frame_ms / 1000.0);
                obstacle.apply_contact_damage(1);
            }
            // Tiny epsilon absorbs f32 accumulation drift across many frames
            let total_ms = frame_ms * frames as f32 + 0.01;
            let max_hits = (total_ms / CONTACT_COOLDOWN_MS).floor() as i32;
            prop_assert!(start - obstacle.health() <= max_hits);
        }
    }
}
