//! Held-key tracking and the start/mode commands.

use log::debug;

/// The four arrow directions the player reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One-shot signals from the start screen or keyboard layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    SelectEasy,
    SelectHard,
}

/// Directions currently held down, in press order, without repeats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    held: Vec<Direction>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press edge. Auto-repeat presses of a held key are ignored.
    pub fn press(&mut self, dir: Direction) {
        if !self.held.contains(&dir) {
            debug!("key down: {:?}", dir);
            self.held.push(dir);
        }
    }

    /// Record a release edge. Releasing a key that is not held is a no-op.
    pub fn release(&mut self, dir: Direction) {
        if let Some(i) = self.held.iter().position(|&d| d == dir) {
            self.held.remove(i);
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held.contains(&dir)
    }

    pub fn held(&self) -> &[Direction] {
        &self.held
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl FromIterator<Direction> for InputState {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut input = InputState::new();
        for dir in iter {
            input.press(dir);
        }
        input
    }
}

