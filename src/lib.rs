//! Bug Blaster - an arcade formation shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, movement, collision resolution)
//! - `input`: Per-tick input snapshot capability
//! - `render`: Draw-command capability consumed by an external renderer
//! - `game`: Match/round orchestration
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod hud;
pub mod input;
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep for headless runs (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Default playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1920.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;
    /// Side-wall inset shared by the ship, the wanderer, and the formation
    pub const WALL_MARGIN: f32 = 15.0;
    /// Cell size of the obstacle grid (also the formation row step)
    pub const GRID_STEP: f32 = 35.0;

    /// Formation segment defaults
    pub const SEGMENT_SIZE: f32 = 35.0;
    pub const SEGMENT_SPEED: f32 = 640.0;
    pub const SEGMENT_SPAWN_Y: f32 = 105.0;
    pub const SEGMENT_ROW_STEP: f32 = 35.0;
    pub const LEAD_POINTS: u32 = 100;
    pub const BODY_POINTS: u32 = 10;
    /// Below this line the formation turns upward instead of descending further
    pub const FORMATION_FLOOR_MARGIN: f32 = 80.0;

    /// Wanderer defaults
    pub const WANDERER_WIDTH: f32 = 60.0;
    pub const WANDERER_HEIGHT: f32 = 40.0;
    pub const WANDERER_CONTACT_DAMAGE: i32 = 3;
    /// Milliseconds of uneventful movement before a spontaneous redirection
    pub const WANDERER_IDLE_MS: f32 = 1000.0;
    /// Unit-vector component magnitude on a 45-degree diagonal
    pub const DIAGONAL: f32 = 0.707;

    /// Projectile defaults
    pub const SHOT_CAPACITY: usize = 30;
    pub const SHOT_SPEED: f32 = 1200.0;
    pub const SHOT_WIDTH: f32 = 6.0;
    pub const SHOT_HEIGHT: f32 = 16.0;
    pub const SHOT_DAMAGE: i32 = 1;

    /// Player ship defaults
    pub const SHIP_WIDTH: f32 = 20.0;
    pub const SHIP_HEIGHT: f32 = 30.0;
    pub const SHIP_SPEED: f32 = 600.0;
    pub const SHIP_CONTACT_DAMAGE: i32 = 7;
    /// Seconds between shots while the fire intent is held
    pub const SHOOT_DELAY: f32 = 0.1;
    /// Inset from the bottom edge the ship (and wanderer) cannot cross
    pub const FLOOR_MARGIN: f32 = 50.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 30.0;
    pub const OBSTACLE_HEALTH: i32 = 12;
    pub const OBSTACLE_POINTS: u32 = 4;
    /// Minimum accumulated milliseconds between contact-damage applications
    pub const CONTACT_COOLDOWN_MS: f32 = 200.0;
    /// Cap on the contact cooldown accumulator
    pub const CONTACT_TIMER_CAP_MS: f32 = 1000.0;
    /// Obstacle-vs-ship checks only run below `height - SHIP_ZONE_MARGIN`
    pub const SHIP_ZONE_MARGIN: f32 = 360.0;
}

/// Snap a coordinate down onto the obstacle grid
#[inline]
pub fn grid_align(v: f32) -> f32 {
    (v / consts::GRID_STEP).floor() * consts::GRID_STEP
}
