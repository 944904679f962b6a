//! Spawn timing and random placement.
//!
//! Both timers run on accumulated simulation time (the Δt handed to each
//! frame), so a seeded RNG plus a fixed timestamp sequence replays exactly.

use rand::Rng;

use crate::consts::*;
use crate::entities::{Collectible, FlyingHazard, Vec2};

/// Interval timers for enemies and the flying hazard.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnScheduler {
    /// Milliseconds since the last enemy appeared.
    pub enemy_timer: f32,
    pub enemy_interval: f32,
    /// Extra delay added to every enemy interval. Rolled once per session,
    /// never re-rolled between spawns.
    pub enemy_jitter: f32,
    /// Milliseconds since the hazard was last (re)generated.
    pub hazard_elapsed: f32,
    pub hazard_interval: f32,
    /// False until the first hazard has been generated.
    pub hazard_armed: bool,
}

impl SpawnScheduler {
    /// Fresh timers with a jitter drawn from `[0, ENEMY_JITTER_MAX_MS)`.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::with_jitter(rng.gen_range(0.0..ENEMY_JITTER_MAX_MS))
    }

    pub fn with_jitter(enemy_jitter: f32) -> Self {
        Self {
            enemy_timer: 0.0,
            enemy_interval: ENEMY_BASE_INTERVAL_MS,
            enemy_jitter,
            hazard_elapsed: 0.0,
            hazard_interval: HAZARD_INTERVAL_MS,
            hazard_armed: false,
        }
    }

    /// Accumulated time an enemy spawn has to exceed.
    pub fn enemy_threshold(&self) -> f32 {
        self.enemy_interval + self.enemy_jitter
    }

    /// Returns true when a new enemy should appear this frame. The frame
    /// that fires resets the timer and does not accumulate its own Δt.
    pub fn enemy_due(&mut self, dt: f32) -> bool {
        if self.enemy_timer > self.enemy_threshold() {
            self.enemy_timer = 0.0;
            true
        } else {
            self.enemy_timer += dt;
            false
        }
    }

    /// Returns true when the hazard should be (re)generated this frame. The
    /// very first call always fires; afterwards every `hazard_interval`.
    pub fn hazard_due(&mut self, dt: f32) -> bool {
        if !self.hazard_armed {
            self.hazard_armed = true;
            self.hazard_elapsed = 0.0;
            return true;
        }
        self.hazard_elapsed += dt;
        if self.hazard_elapsed > self.hazard_interval {
            self.hazard_elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

// ── Random placement ──────────────────────────────────────────────────────────

/// Vertical position for the hazard, anywhere but the bottom strip.
pub fn hazard_y(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..WORLD_HEIGHT - HAZARD_Y_MARGIN)
}

pub fn coin_y(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..WORLD_HEIGHT - COIN_Y_MARGIN)
}

/// A hazard entering from the right edge at a random height.
pub fn random_hazard(rng: &mut impl Rng) -> FlyingHazard {
    FlyingHazard::at(Vec2::new(WORLD_WIDTH, hazard_y(rng)))
}

/// A coin anywhere on screen. Used both for the first coin and after each
/// pickup.
pub fn random_collectible(rng: &mut impl Rng) -> Collectible {
    let x = rng.gen_range(0.0..WORLD_WIDTH);
    Collectible::at(Vec2::new(x, coin_y(rng)))
}
