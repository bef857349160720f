//! Input capability
//!
//! The simulation never touches a keyboard. Once per tick the orchestrator
//! polls an `InputSource` for a snapshot of boolean intents and feeds it to
//! the ship; polling never blocks the tick.

/// One tick's worth of player intent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub quit: bool,
}

/// Produces a snapshot per tick; implemented by the platform layer
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

/// Replays a fixed list of snapshots, then reports quit. Used by tests and
/// the headless demo.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<InputSnapshot>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputSnapshot>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// A script that holds one snapshot for `ticks` frames
    pub fn hold(snapshot: InputSnapshot, ticks: usize) -> Self {
        Self::new(vec![snapshot; ticks])
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputSnapshot {
        match self.frames.get(self.cursor) {
            Some(snapshot) => {
                self.cursor += 1;
                *snapshot
            }
            None => InputSnapshot {
                quit: true,
                ..InputSnapshot::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_then_quits() {
        let fire = InputSnapshot {
            fire: true,
            ..InputSnapshot::default()
        };
        let mut source = ScriptedInput::hold(fire, 2);
        assert_eq!(source.poll(), fire);
        assert_eq!(source.poll(), fire);
        assert!(source.poll().quit);
        assert!(source.poll().quit);
    }
}
