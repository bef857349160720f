//! Axis-aligned bounding boxes and playfield bounds
//!
//! Every entity collides through an `Aabb` derived from its current position
//! and fixed size. Overlap uses strict inequalities: boxes that merely share
//! an edge do not intersect.

use glam::Vec2;

use crate::consts::*;

/// Axis-aligned rectangle: top-left origin plus width/height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict-overlap test; touching edges do not count
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max().x
            && other.min.x < self.max().x
            && self.min.y < other.max().y
            && other.min.y < self.max().y
    }

    /// Overlap rectangle, if any. Used to work out which edge was struck.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        if !self.intersects(other) {
            return None;
        }
        let min = self.min.max(other.min);
        let max = self.max().min(other.max());
        Some(Aabb::new(min, max - min))
    }
}

/// Screen-space bounds shared by all entities
///
/// Each entity keeps a copy at construction, so bound checks never reach
/// outside the sim.
#[derive(Debug, Clone, Copy)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ceiling for the ship and the wanderer: the top 30% band is off limits
    #[inline]
    pub fn max_height(&self) -> f32 {
        self.height - 0.3 * self.height
    }

    /// Floor line for the ship and the wanderer
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height - FLOOR_MARGIN
    }

    /// Below this line the formation turns upward at walls
    #[inline]
    pub fn formation_floor(&self) -> f32 {
        self.height - FORMATION_FLOOR_MARGIN
    }

    /// Left wall x for any entity
    #[inline]
    pub fn left_wall(&self) -> f32 {
        WALL_MARGIN
    }

    /// Right wall x for an entity of the given width
    #[inline]
    pub fn right_wall(&self, entity_width: f32) -> f32 {
        self.width - (WALL_MARGIN + entity_width)
    }

    /// Obstacles at or below this line are close enough to block the ship
    #[inline]
    pub fn ship_zone_y(&self) -> f32 {
        self.height - SHIP_ZONE_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let right = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let below = Aabb::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_degenerate_box_never_intersects() {
        let empty = Aabb::new(Vec2::new(5.0, 5.0), Vec2::ZERO);
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!empty.intersects(&a));
        assert!(!a.intersects(&empty));
    }

    #[test]
    fn test_intersection_rect() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(6.0, 4.0), Vec2::new(10.0, 10.0));
        let inter = a.intersection(&b).unwrap();
        assert_eq!(inter.min, Vec2::new(6.0, 4.0));
        assert_eq!(inter.size, Vec2::new(4.0, 6.0));
        assert!(a.intersection(&Aabb::new(Vec2::new(50.0, 50.0), Vec2::ONE)).is_none());
    }

    #[test]
    fn test_playfield_bounds() {
        let pf = Playfield::default();
        assert_eq!(pf.max_height(), 756.0);
        assert_eq!(pf.floor_y(), 1030.0);
        assert_eq!(pf.formation_floor(), 1000.0);
        assert_eq!(pf.right_wall(20.0), 1885.0);
        assert_eq!(pf.ship_zone_y(), 720.0);
    }
}
