//! Score and lives overlay
//!
//! Purely informational: the current score and one life marker per remaining
//! life, pushed to the renderer every tick. Nothing here feeds back into the
//! simulation.

use glam::Vec2;

use crate::render::{DrawCommand, Renderer};
use crate::sim::Playfield;

pub fn draw_hud<R: Renderer>(playfield: &Playfield, score: u32, lives: i32, renderer: &mut R) {
    renderer.submit(DrawCommand::Score {
        value: score,
        pos: Vec2::new(playfield.width / 2.0, 50.0),
    });
    for i in 0..lives.max(0) {
        renderer.submit(DrawCommand::LifeMarker {
            pos: Vec2::new(playfield.width / 1.5 + 50.0 * i as f32, 50.0),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingRenderer;

    #[test]
    fn test_one_marker_per_life() {
        let mut renderer = RecordingRenderer::default();
        draw_hud(&Playfield::default(), 1200, 3, &mut renderer);
        let markers = renderer
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::LifeMarker { .. }))
            .count();
        assert_eq!(markers, 3);
        assert!(matches!(
            renderer.commands[0],
            DrawCommand::Score { value: 1200, .. }
        ));
    }
}
