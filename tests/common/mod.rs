#![allow(dead_code)]

use std::convert::Infallible;

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shadows_adventure::compute::{apply_command, init_session};
use shadows_adventure::entities::{GameSession, Mode, Rect, Vec2};
use shadows_adventure::input::Command;
use shadows_adventure::render::{ImageId, Surface, TextStyle};
use shadows_adventure::spawn::SpawnScheduler;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Every random float lands in the middle of its range.
pub fn midpoint_rng() -> StepRng {
    StepRng::new(0x8000_0000, 0)
}

/// A running session with a fixed 500 ms enemy jitter.
pub fn running_session(mode: Mode) -> GameSession {
    let mut rng = seeded_rng();
    let mut s = init_session(mode, &mut rng);
    s.scheduler = SpawnScheduler::with_jitter(500.0);
    assert!(apply_command(&mut s, Command::Start, &mut rng));
    s
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Image(ImageId, Rect, Rect),
    Text(String, Vec2, TextStyle),
}

/// Surface that remembers every draw call.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(t, _, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<ImageId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Image(id, _, _) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn draw_image(&mut self, image: ImageId, src: Rect, dst: Rect) -> Result<(), Infallible> {
        self.calls.push(Call::Image(image, src, dst));
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: TextStyle) -> Result<(), Infallible> {
        self.calls.push(Call::Text(text.to_string(), at, style));
        Ok(())
    }
}
