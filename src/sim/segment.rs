//! Formation segments
//!
//! The enemy column is an ordered row of segments. Only a Lead computes
//! motion; every follower replays the displacement its predecessor made one
//! tick earlier, so movement ripples down the chain link by link with no lag
//! buildup. Destroying an interior segment splits the column: the successor
//! is promoted to Lead, the predecessor to Tail, and the two halves march
//! independently from then on.

use glam::Vec2;

use super::bbox::{Aabb, Playfield};
use crate::consts::*;
use crate::render::{DrawCommand, Renderer};

/// Chain role; exactly one Lead and one Tail per contiguous sub-chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Lead,
    Body,
    Tail,
}

/// Lead locomotion mode: horizontal cruise, or a vertical row change
/// toward a locked target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Patrolling,
    Transitioning { target_y: f32 },
}

/// Outcome of a collision check against a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResponse {
    NoHit,
    Bounce,
    Destroy,
}

/// Which way the Lead's head is facing, for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Segment {
    position: Vec2,
    prev_position: Vec2,
    /// Displacement this segment applied on its previous update; handed to
    /// the next segment in the chain
    prev_move: Vec2,
    role: Role,
    motion: Motion,
    /// Horizontal cruise sign, -1 or 1
    horiz: f32,
    /// Vertical sign used while transitioning and remembered while patrolling
    vert: f32,
    /// Latched after a turn until the next transition completes, so one
    /// obstacle cannot trigger repeated reversals
    bounce: bool,
    points: u32,
    playfield: Playfield,
}

impl Segment {
    /// Spawn the `index`-th segment of a freshly formed row. The whole row
    /// shares one direction decision (made by whoever spawns the Lead):
    /// `moving_right` segments line up off the left edge and vice versa.
    pub fn new(playfield: Playfield, role: Role, index: usize, moving_right: bool) -> Self {
        let offset = index as f32 * SEGMENT_ROW_STEP;
        let x = if moving_right {
            -SEGMENT_SIZE - offset
        } else {
            playfield.width + offset
        };
        let position = Vec2::new(x, SEGMENT_SPAWN_Y);
        Self {
            position,
            prev_position: position,
            prev_move: Vec2::ZERO,
            role,
            motion: Motion::Patrolling,
            horiz: if moving_right { 1.0 } else { -1.0 },
            vert: 1.0,
            bounce: false,
            points: points_for(role),
            playfield,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Role changes do not reset position or motion state
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.points = points_for(role);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, Vec2::splat(SEGMENT_SIZE))
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, position: Vec2) {
        self.position = position;
        self.prev_position = position;
    }

    /// Chain update entry point: Leads compute their own motion, everyone
    /// else replays the preceding segment's displacement. Returns the
    /// displacement this segment made on its own previous update.
    pub fn update(&mut self, dt: f32, preceding: Vec2) -> Vec2 {
        match self.role {
            Role::Lead => self.advance(dt),
            _ => self.follow(preceding),
        }
    }

    /// Lead movement: cruise horizontally, or run a locked vertical row
    /// change; bounce off the side walls into the next row.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.prev_position = self.position;

        match self.motion {
            Motion::Transitioning { target_y } => {
                self.position.y += self.vert * SEGMENT_SPEED * dt;
                let arrived = if self.vert < 0.0 {
                    self.position.y <= target_y
                } else {
                    self.position.y >= target_y
                };
                if arrived {
                    self.bounce = false;
                    self.position.y = target_y;
                    self.motion = Motion::Patrolling;
                }
            }
            Motion::Patrolling => {
                self.position.x += self.horiz * SEGMENT_SPEED * dt;
            }
        }

        if self.position.x < self.playfield.left_wall() && self.horiz < 0.0 {
            self.turn_at_wall(1.0);
        } else if self.position.x > self.playfield.right_wall(SEGMENT_SIZE) && self.horiz > 0.0 {
            self.turn_at_wall(-1.0);
        }

        let out = self.prev_move;
        self.prev_move = self.position - self.prev_position;
        out
    }

    /// Follower movement: apply the preceding segment's displacement
    /// unconditionally. Only the Lead is bounds-checked; followers inherit
    /// safety by trailing one.
    pub fn follow(&mut self, preceding: Vec2) -> Vec2 {
        self.position += preceding;
        let out = self.prev_move;
        self.prev_move = self.position - self.prev_position;
        self.prev_position = self.position;
        out
    }

    fn turn_at_wall(&mut self, new_horiz: f32) {
        self.bounce = true;
        self.horiz = new_horiz;
        // Resolve the vertical direction before locking the target row:
        // turn upward in the bottom band, back downward once the climb
        // breaches the formation ceiling.
        if self.position.y >= self.playfield.formation_floor() {
            self.vert = -1.0;
        } else if self.position.y <= self.playfield.max_height() && self.vert < 0.0 {
            self.vert = 1.0;
        }
        self.motion = Motion::Transitioning {
            target_y: self.position.y + self.vert * SEGMENT_ROW_STEP,
        };
    }

    /// Collision check. Nonzero damage destroys the segment (the caller
    /// removes it from the chain). Zero damage is an obstacle bounce: a
    /// one-time reversal, suppressed while the latch from the previous
    /// maneuver is still set.
    pub fn check_damage(&mut self, other: &Aabb, damage: i32) -> HitResponse {
        if !other.intersects(&self.bounds()) {
            return HitResponse::NoHit;
        }
        if damage != 0 {
            return HitResponse::Destroy;
        }
        if !self.bounce {
            self.bounce = true;
            match self.motion {
                Motion::Transitioning { target_y } => {
                    // Abort the row change and fall back to the row it left
                    self.position.y = if self.vert < 0.0 {
                        target_y + SEGMENT_ROW_STEP
                    } else {
                        target_y - SEGMENT_ROW_STEP
                    };
                    self.motion = Motion::Patrolling;
                }
                Motion::Patrolling => {
                    // Reverse, nudging clear of the obstacle, and drop into
                    // the adjacent row
                    self.position.x -= self.horiz * 2.0;
                    self.horiz = -self.horiz;
                    self.motion = Motion::Transitioning {
                        target_y: self.position.y + self.vert * SEGMENT_ROW_STEP,
                    };
                }
            }
        }
        HitResponse::Bounce
    }

    /// Lead head orientation for the renderer
    pub fn heading(&self) -> Heading {
        match self.motion {
            Motion::Transitioning { .. } => {
                if self.vert < 0.0 {
                    Heading::Up
                } else {
                    Heading::Down
                }
            }
            Motion::Patrolling => {
                if self.horiz > 0.0 {
                    Heading::Right
                } else {
                    Heading::Left
                }
            }
        }
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        match self.role {
            Role::Lead => renderer.submit(DrawCommand::SegmentLead {
                pos: self.position,
                heading: self.heading(),
            }),
            _ => renderer.submit(DrawCommand::SegmentBody { pos: self.position }),
        }
    }
}

fn points_for(role: Role) -> u32 {
    match role {
        Role::Lead => LEAD_POINTS,
        _ => BODY_POINTS,
    }
}


#[cfg(test)]
mod chain_props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Chain rigidity: with no collisions, segment i at tick t sits where
        /// segment i-1 sat at tick t-1, shifted by the spawn offset -
        /// whatever the lead does at walls and row changes.
        #[test]
        fn chain_never_stretches(ticks in 1usize..400, count in 2usize..15) {
            let pf = Playfield::default();
            let mut chain: Vec<Segment> = (0..count)
                .map(|i| {
                    let role = if i == 0 { Role::Lead } else { Role::Body };
                    Segment::new(pf, role, i, true)
                })
                .collect();
            let offsets: Vec<Vec2> = chain
                .windows(2)
                .map(|w| w[1].position() - w[0].position())
                .collect();

            let dt = 1.0 / 120.0;
            let mut prev_frame: Vec<Vec2> = chain.iter().map(|s| s.position()).collect();
            for _ in 0..ticks {
                let mut disp = Vec2::ZERO;
                for seg in chain.iter_mut() {
                    disp = seg.update(dt, disp);
                }
                // Tolerance covers f32 rounding accumulated along the chain
                for i in 1..count {
                    let expected = prev_frame[i - 1] + offsets[i - 1];
                    prop_assert!((chain[i].position() - expected).length() < 0.5);
                }
                prev_frame = chain.iter().map(|s| s.position()).collect();
            }
        }
    }
}
