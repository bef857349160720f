//! Data-driven game balance
//!
//! Round-level knobs live here rather than in code, loaded from a JSON file
//! when one is present. Any load or parse failure falls back to the built-in
//! defaults; balance data can never fail the game.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Lives per match
    pub lives: i32,
    /// Segments in a fresh formation row
    pub segment_count: usize,
    /// Obstacles scattered at match start
    pub obstacle_count: usize,
    /// Chance of the wanderer reviving on each 100-tick roll
    pub wanderer_spawn_chance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: SCREEN_WIDTH,
            playfield_height: SCREEN_HEIGHT,
            lives: 3,
            segment_count: 15,
            obstacle_count: 60,
            wanderer_spawn_chance: 0.2,
        }
    }
}

impl Tuning {
    /// Load from a JSON file, falling back to defaults on any error
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {path}: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {path}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_balance_values() {
        let t = Tuning::default();
        assert_eq!(t.lives, 3);
        assert_eq!(t.segment_count, 15);
        assert_eq!(t.obstacle_count, 60);
        assert_eq!(t.playfield_width, 1920.0);
        assert_eq!(t.playfield_height, 1080.0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let t = Tuning::load("/definitely/not/here.json");
        assert_eq!(t.segment_count, Tuning::default().segment_count);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"segment_count": 9}"#).unwrap();
        assert_eq!(t.segment_count, 9);
        assert_eq!(t.lives, 3);
    }
}
