//! Render capability
//!
//! The simulation describes a frame as a stream of opaque draw commands
//! keyed by entity kind and pose; a platform renderer turns them into
//! sprites (or solid-color placeholders when an asset failed to load - the
//! sim neither knows nor cares). Submitting a command has no return value
//! and cannot fail the simulation.

use glam::Vec2;

use crate::sim::Heading;

/// One drawable item for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Ship { pos: Vec2 },
    Shot { pos: Vec2 },
    /// `stage` picks one of the four damage sprites
    Obstacle { pos: Vec2, stage: u8 },
    Wanderer { pos: Vec2 },
    SegmentBody { pos: Vec2 },
    /// The head sprite rotates to face its travel direction
    SegmentLead { pos: Vec2, heading: Heading },
    Score { value: u32, pos: Vec2 },
    /// One marker per remaining life
    LifeMarker { pos: Vec2 },
}

pub trait Renderer {
    fn submit(&mut self, cmd: DrawCommand);
}

/// Discards everything; used for headless runs
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn submit(&mut self, _cmd: DrawCommand) {}
}

/// Buffers every command submitted; tests inspect the frame afterward
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn submit(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}
