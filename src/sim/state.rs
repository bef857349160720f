//! Round state and spawning
//!
//! The round scene exclusively owns one ship, one wanderer, the ordered
//! formation chain, and the obstacle field. Cross-entity effects happen only
//! inside the resolver (`tick.rs`), through each entity's damage/response
//! operations. Randomness comes from one seeded generator, so a round is
//! reproducible from `(seed, input script)`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bbox::Playfield;
use super::obstacle::Obstacle;
use super::segment::{Role, Segment};
use super::ship::Ship;
use super::wanderer::Wanderer;
use crate::grid_align;
use crate::tuning::Tuning;

#[derive(Debug)]
pub struct RoundState {
    pub playfield: Playfield,
    pub ship: Ship,
    pub wanderer: Wanderer,
    /// Ordered chain; splits leave both halves in this one sequence,
    /// bounded by their new terminal roles
    pub formation: Vec<Segment>,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Wraps at 1000; drives the every-other-tick passes and the wanderer
    /// revival roll
    pub tick_count: u32,
    pub rng: Pcg32,
    pub seed: u64,
    pub tuning: Tuning,
}

impl RoundState {
    /// Fresh match state: seeded RNG, scattered obstacle field, no round
    /// entities yet (`reset_round` spawns those).
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let playfield = Playfield::new(tuning.playfield_width, tuning.playfield_height);
        let mut state = Self {
            playfield,
            ship: Ship::new(playfield),
            wanderer: Wanderer::new(playfield),
            formation: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            tick_count: 0,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            tuning,
        };
        state.spawn_obstacle_field();
        state
    }

    /// Start (or restart) a round: fresh ship with the given lives, fresh
    /// formation, wanderer out of play. Score and obstacles persist across
    /// rounds within a match.
    pub fn reset_round(&mut self, lives: i32) {
        self.ship = Ship::new(self.playfield);
        self.ship.set_health(lives);
        self.wanderer = Wanderer::new(self.playfield);
        self.spawn_formation();
        self.tick_count = 0;
        log::info!(
            "round start: lives={lives} segments={} obstacles={}",
            self.formation.len(),
            self.obstacles.len()
        );
    }

    /// Scatter the initial obstacle field, retrying overlapping placements
    /// until the configured count is on the grid.
    fn spawn_obstacle_field(&mut self) {
        let pf = self.playfield;
        let mut placed = 0;
        while placed < self.tuning.obstacle_count {
            let rel_x: f32 = self.rng.random();
            let rel_y: f32 = self.rng.random();
            let x = grid_align(rel_x * (pf.width - 130.0) + 65.0);
            let y = grid_align(rel_y * (pf.height - 265.0) + 130.0);
            if place_obstacle(&mut self.obstacles, x, y) {
                placed += 1;
            }
        }
    }

    /// Spawn the formation row: one side decision for the whole chain,
    /// index 0 Lead, last Tail, 35 units between neighbors.
    fn spawn_formation(&mut self) {
        let count = self.tuning.segment_count.max(1);
        let moving_right = self.rng.random::<f32>() >= 0.5;
        self.formation.clear();
        for i in 0..count {
            let role = if i == 0 {
                Role::Lead
            } else if i == count - 1 {
                Role::Tail
            } else {
                Role::Body
            };
            self.formation
                .push(Segment::new(self.playfield, role, i, moving_right));
        }
    }

    /// Grid-aligned obstacle spawn at a death site; rejected when the cell
    /// is already occupied.
    pub fn spawn_obstacle_at(&mut self, x: f32, y: f32) -> bool {
        place_obstacle(&mut self.obstacles, grid_align(x), grid_align(y))
    }
}

/// Push an obstacle unless it would overlap one already placed
pub(crate) fn place_obstacle(obstacles: &mut Vec<Obstacle>, x: f32, y: f32) -> bool {
    let candidate = Obstacle::new(x, y);
    if obstacles
        .iter()
        .any(|o| o.bounds().intersects(&candidate.bounds()))
    {
        return false;
    }
    obstacles.push(candidate);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn state() -> RoundState {
        RoundState::new(42, Tuning::default())
    }

    #[test]
    fn test_obstacle_field_on_grid_without_overlap() {
        let s = state();
        assert_eq!(s.obstacles.len(), s.tuning.obstacle_count);
        for o in &s.obstacles {
            let pos = o.position();
            assert_eq!(pos.x % GRID_STEP, 0.0);
            assert_eq!(pos.y % GRID_STEP, 0.0);
        }
        for (i, a) in s.obstacles.iter().enumerate() {
            for b in &s.obstacles[i + 1..] {
                assert!(!a.bounds().intersects(&b.bounds()));
            }
        }
    }

    #[test]
    fn test_formation_spawn_roles_and_spacing() {
        let mut s = state();
        s.reset_round(3);
        assert_eq!(s.formation.len(), 15);
        assert_eq!(s.formation[0].role(), Role::Lead);
        assert_eq!(s.formation[14].role(), Role::Tail);
        for (i, seg) in s.formation.iter().enumerate() {
            assert_eq!(seg.role() == Role::Body, i != 0 && i != 14);
            let gap = (seg.position().x - s.formation[0].position().x).abs();
            assert_eq!(gap, i as f32 * SEGMENT_ROW_STEP);
            assert_eq!(seg.position().y, SEGMENT_SPAWN_Y);
        }
    }

    #[test]
    fn test_occupied_cell_rejects_spawn() {
        let mut s = state();
        s.obstacles.clear();
        assert!(s.spawn_obstacle_at(707.0, 512.0));
        // Same cell after grid alignment
        assert!(!s.spawn_obstacle_at(700.0, 490.0));
        assert_eq!(s.obstacles.len(), 1);
    }

    #[test]
    fn test_round_reset_keeps_score_and_obstacles() {
        let mut s = state();
        s.reset_round(3);
        s.score = 500;
        let obstacle_count = s.obstacles.len();
        s.reset_round(2);
        assert_eq!(s.score, 500);
        assert_eq!(s.obstacles.len(), obstacle_count);
        assert_eq!(s.ship.health(), 2);
        assert!(!s.wanderer.is_alive());
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = state();
        let b = state();
        let pos_a: Vec<_> = a.obstacles.iter().map(|o| o.position()).collect();
        let pos_b: Vec<_> = b.obstacles.iter().map(|o| o.position()).collect();
        assert_eq!(pos_a, pos_b);
    }
}
