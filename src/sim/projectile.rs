//! Player projectiles
//!
//! Shots live in a fixed pool owned by the ship and are recycled in ring
//! order rather than allocated per trigger pull. A slot with zero health is
//! inert: skipped by movement, drawing, and every collision pass.

use glam::Vec2;

use super::bbox::Aabb;
use crate::consts::*;
use crate::render::{DrawCommand, Renderer};

#[derive(Debug, Clone)]
pub struct Projectile {
    position: Vec2,
    health: i32,
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new()
    }
}

impl Projectile {
    /// An inert slot parked off-screen
    pub fn new() -> Self {
        Self {
            position: Vec2::new(-10.0, -10.0),
            health: 0,
        }
    }

    /// Re-arm this slot at the muzzle position
    pub fn start(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.health = 1;
    }

    pub fn is_live(&self) -> bool {
        self.health > 0
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, Vec2::new(SHOT_WIDTH, SHOT_HEIGHT))
    }

    /// Move upward; dies when it leaves the top of the screen.
    /// Returns whether the shot is still live.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.health <= 0 {
            return false;
        }
        self.position.y -= SHOT_SPEED * dt;
        if self.position.y < 0.0 {
            self.health = 0;
        }
        true
    }

    /// One-shot hit test: a live shot that intersects `other` kills itself
    /// and reports its damage; inert shots never hit.
    pub fn check_damage(&mut self, other: &Aabb) -> Option<i32> {
        if self.health > 0 && other.intersects(&self.bounds()) {
            self.health -= 1;
            return Some(SHOT_DAMAGE);
        }
        None
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        if self.health <= 0 {
            return;
        }
        renderer.submit(DrawCommand::Shot { pos: self.position });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_slot_skips_update_and_hits() {
        let mut shot = Projectile::new();
        let before = shot.position();
        assert!(!shot.update(1.0 / 120.0));
        assert_eq!(shot.position(), before);

        let target = Aabb::new(Vec2::new(-20.0, -20.0), Vec2::new(100.0, 100.0));
        assert_eq!(shot.check_damage(&target), None);
    }

    #[test]
    fn test_shot_moves_up_and_dies_at_top() {
        let mut shot = Projectile::new();
        shot.start(100.0, 10.0);
        assert!(shot.update(1.0 / 120.0));
        assert!(shot.position().y < 10.0);

        // Next step carries it past y=0
        shot.update(1.0 / 120.0);
        assert!(!shot.is_live());
    }

    #[test]
    fn test_one_shot_kill_then_inert() {
        let mut shot = Projectile::new();
        shot.start(100.0, 500.0);
        let target = Aabb::new(Vec2::new(95.0, 495.0), Vec2::new(30.0, 30.0));
        assert_eq!(shot.check_damage(&target), Some(SHOT_DAMAGE));
        assert!(!shot.is_live());
        // Same overlap, but the shot already spent itself
        assert_eq!(shot.check_damage(&target), None);
    }

    #[test]
    fn test_live_shot_misses_distant_box() {
        let mut shot = Projectile::new();
        shot.start(100.0, 500.0);
        let target = Aabb::new(Vec2::new(500.0, 500.0), Vec2::new(30.0, 30.0));
        assert_eq!(shot.check_damage(&target), None);
        assert!(shot.is_live());
    }
}
