//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only through the `dt` passed to `step`
//! - Seeded RNG only
//! - Stable iteration order (formation order, obstacle insertion order)
//! - No rendering or platform dependencies

pub mod bbox;
pub mod obstacle;
pub mod projectile;
pub mod segment;
pub mod ship;
pub mod state;
pub mod tick;
pub mod wanderer;

pub use bbox::{Aabb, Playfield};
pub use obstacle::Obstacle;
pub use projectile::Projectile;
pub use segment::{Heading, HitResponse, Motion, Role, Segment};
pub use ship::Ship;
pub use state::RoundState;
pub use tick::{RoundEvent, step};
pub use wanderer::Wanderer;
