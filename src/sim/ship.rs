//! The player ship
//!
//! Keyboard intents combine additively per axis; position is clamped to the
//! lower band of the playfield. The ship owns the projectile pool and emits
//! shots in ring order while the fire intent is held, throttled by a fixed
//! cooldown.

use glam::Vec2;

use super::bbox::{Aabb, Playfield};
use super::projectile::Projectile;
use crate::consts::*;
use crate::input::InputSnapshot;
use crate::render::{DrawCommand, Renderer};

#[derive(Debug, Clone)]
pub struct Ship {
    position: Vec2,
    prev_position: Vec2,
    /// -1/0 and 0/1 per axis, combined additively each update
    left: f32,
    right: f32,
    up: f32,
    down: f32,
    firing: bool,
    shots: [Projectile; SHOT_CAPACITY],
    /// Ring cursor: next pool slot to reuse
    current_shot: usize,
    cooldown: f32,
    health: i32,
    playfield: Playfield,
}

impl Ship {
    pub fn new(playfield: Playfield) -> Self {
        let position = Vec2::new(playfield.width / 2.0, playfield.height - FLOOR_MARGIN);
        Self {
            position,
            prev_position: position,
            left: 0.0,
            right: 0.0,
            up: 0.0,
            down: 0.0,
            firing: false,
            shots: std::array::from_fn(|_| Projectile::new()),
            current_shot: 0,
            cooldown: 0.0,
            health: 0,
            playfield,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, Vec2::new(SHIP_WIDTH, SHIP_HEIGHT))
    }

    pub fn shots(&self) -> &[Projectile] {
        &self.shots
    }

    pub fn shots_mut(&mut self) -> &mut [Projectile] {
        &mut self.shots
    }

    /// Latch this tick's input snapshot into movement/fire intents
    pub fn apply_input(&mut self, input: &InputSnapshot) {
        self.left = if input.left { -1.0 } else { 0.0 };
        self.right = if input.right { 1.0 } else { 0.0 };
        self.up = if input.up { -1.0 } else { 0.0 };
        self.down = if input.down { 1.0 } else { 0.0 };
        self.firing = input.fire;
    }

    /// Fire (if due), advance every pool slot, then translate and clamp
    pub fn update(&mut self, dt: f32) {
        if self.firing && self.cooldown <= 0.0 {
            let muzzle_x = self.position.x + SHIP_WIDTH / 2.0 - 2.0;
            self.shots[self.current_shot].start(muzzle_x, self.position.y);
            self.current_shot = (self.current_shot + 1) % SHOT_CAPACITY;
            self.cooldown = SHOOT_DELAY;
        }
        if self.cooldown > 0.0 {
            self.cooldown -= dt;
        }
        for shot in &mut self.shots {
            shot.update(dt);
        }

        self.prev_position = self.position;
        self.position.x += (self.left + self.right) * SHIP_SPEED * dt;
        self.position.y += (self.up + self.down) * SHIP_SPEED * dt;

        let pf = self.playfield;
        self.position.x = self
            .position
            .x
            .clamp(pf.left_wall(), pf.right_wall(SHIP_WIDTH));
        self.position.y = self.position.y.clamp(pf.max_height(), pf.floor_y());
    }

    /// Contact with anything harmful: lose one life, report contact damage
    pub fn check_damage(&mut self, other: &Aabb) -> Option<i32> {
        if other.intersects(&self.bounds()) {
            self.health -= 1;
            return Some(SHIP_CONTACT_DAMAGE);
        }
        None
    }

    /// Cancel this tick's movement; used when the ship walks into an obstacle
    pub fn undo_move(&mut self) {
        self.position = self.prev_position;
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        renderer.submit(DrawCommand::Ship { pos: self.position });
        for shot in &self.shots {
            shot.draw(renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 120.0;

    fn ship() -> Ship {
        let mut s = Ship::new(Playfield::default());
        s.set_health(3);
        s
    }

    fn snapshot(left: bool, right: bool, up: bool, down: bool, fire: bool) -> InputSnapshot {
        InputSnapshot {
            left,
            right,
            up,
            down,
            fire,
            quit: false,
        }
    }

    #[test]
    fn test_opposed_intents_cancel() {
        let mut s = ship();
        let start = s.position();
        s.apply_input(&snapshot(true, true, false, false, false));
        s.update(DT);
        assert_eq!(s.position(), start);
    }

    #[test]
    fn test_movement_clamped_to_band() {
        let pf = Playfield::default();
        let mut s = ship();
        s.apply_input(&snapshot(true, false, true, false, false));
        for _ in 0..2000 {
            s.update(DT);
        }
        assert_eq!(s.position().x, pf.left_wall());
        assert_eq!(s.position().y, pf.max_height());

        s.apply_input(&snapshot(false, true, false, true, false));
        for _ in 0..2000 {
            s.update(DT);
        }
        assert_eq!(s.position().x, pf.right_wall(SHIP_WIDTH));
        assert_eq!(s.position().y, pf.floor_y());
    }

    #[test]
    fn test_fire_rate_limited_by_cooldown() {
        let mut s = ship();
        s.apply_input(&snapshot(false, false, false, false, true));
        // Half a second of held fire at ~0.1s per shot; nothing expires
        // that quickly, so every emitted shot is still live
        for _ in 0..60 {
            s.update(DT);
        }
        let live = s.shots().iter().filter(|p| p.is_live()).count();
        assert!(live >= 4 && live <= 6, "live shots: {live}");
    }

    #[test]
    fn test_pool_reuses_slots_in_ring_order() {
        let mut s = ship();
        s.apply_input(&snapshot(false, false, false, false, true));
        s.update(DT);
        assert!(s.shots()[0].is_live());
        assert_eq!(s.current_shot, 1);
    }

    #[test]
    fn test_undo_move_restores_previous_position() {
        let mut s = ship();
        let start = s.position();
        s.apply_input(&snapshot(true, false, false, false, false));
        s.update(DT);
        assert_ne!(s.position(), start);
        s.undo_move();
        assert_eq!(s.position(), start);
    }

    #[test]
    fn test_contact_costs_one_life() {
        let mut s = ship();
        let overlap = Aabb::new(s.position(), Vec2::splat(40.0));
        assert_eq!(s.check_damage(&overlap), Some(SHIP_CONTACT_DAMAGE));
        assert_eq!(s.health(), 2);
        let far = Aabb::new(Vec2::ZERO, Vec2::ONE);
        assert_eq!(s.check_damage(&far), None);
        assert_eq!(s.health(), 2);
    }
}
