//! Turns host timestamps into simulation steps.
//!
//! The host calls `run_frame` once per display refresh with a monotonically
//! increasing timestamp in milliseconds. The driver derives Δt, steps and
//! draws the session, and stops for good after drawing the frame in which
//! the run ended.

use log::info;
use rand::Rng;

use crate::compute::{tick, FrameEvents};
use crate::consts::MAX_FRAME_DELTA_MS;
use crate::entities::GameSession;
use crate::input::InputState;
use crate::render::{render, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not started yet; nothing was simulated or drawn.
    Waiting,
    /// Frame simulated and drawn; the host should schedule another.
    Continue,
    /// The loop has stopped. No further frames will be simulated.
    Halted,
}

#[derive(Clone, Debug, Default)]
pub struct FrameDriver {
    last_timestamp: Option<f64>,
    halted: bool,
    last_events: FrameEvents,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous timestamp. The first frame, a clock
    /// that went backwards, or a non-finite timestamp all yield 0; long
    /// stalls are capped at `MAX_FRAME_DELTA_MS`.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_timestamp.replace(timestamp_ms) {
            Some(prev) => timestamp_ms - prev,
            None => 0.0,
        };
        if dt > 0.0 {
            (dt as f32).min(MAX_FRAME_DELTA_MS)
        } else {
            0.0
        }
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Events of the most recent simulated frame.
    pub fn last_events(&self) -> &FrameEvents {
        &self.last_events
    }

    /// Run one display refresh.
    pub fn run_frame<S: Surface>(
        &mut self,
        session: &mut GameSession,
        input: &InputState,
        timestamp_ms: f64,
        rng: &mut impl Rng,
        surface: &mut S,
    ) -> Result<FrameOutcome, S::Error> {
        if self.halted {
            return Ok(FrameOutcome::Halted);
        }
        let dt = self.advance(timestamp_ms);
        if !session.is_started() {
            return Ok(FrameOutcome::Waiting);
        }

        if session.is_running() {
            self.last_events = tick(session, input, dt, rng);
        }
        render(session, surface)?;

        if session.is_over() {
            self.halted = true;
            info!("frame loop halted after {} frames", session.frame);
            return Ok(FrameOutcome::Halted);
        }
        Ok(FrameOutcome::Continue)
    }
}
