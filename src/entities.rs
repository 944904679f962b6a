//! All game entity types: pure data, no logic.
//!
//! Behaviour lives in `compute` (updates) and `render` (draws); this module
//! only describes what a frame's worth of state looks like.

pub use glam::Vec2;

use crate::consts::*;
use crate::spawn::SpawnScheduler;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

// ── Modes & phases ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Easy,
    /// Adds the flying hazard and the collectible coin.
    Hard,
}

/// `NotStarted → Running → Over`, never backwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Over,
}

// ── Sprite animation ──────────────────────────────────────────────────────────

/// Sprite-sheet playback state. `frame_index` stays within `0..=max_frame`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteAnimation {
    /// Column in the sprite sheet.
    pub frame_index: u32,
    /// Row in the sprite sheet (pose).
    pub frame_row: u32,
    pub frame_timer: f32,
    pub frame_interval: f32,
    pub max_frame: u32,
}

impl SpriteAnimation {
    pub fn new(frame_row: u32, max_frame: u32) -> Self {
        Self {
            frame_index: 0,
            frame_row,
            frame_timer: 0.0,
            frame_interval: SPRITE_FRAME_INTERVAL_MS,
            max_frame,
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed chosen by the last control decision.
    pub speed: f32,
    /// Vertical velocity; negative is upward.
    pub vy: f32,
    pub weight: f32,
    pub anim: SpriteAnimation,
}

impl Player {
    /// A player standing on the ground at the left edge.
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(0.0, WORLD_HEIGHT - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: 0.0,
            vy: 0.0,
            weight: PLAYER_WEIGHT,
            anim: SpriteAnimation::new(PLAYER_RUN_ROW, PLAYER_RUN_MAX_FRAME),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect { pos: self.pos, size: self.size }
    }

    /// Lowest y the sprite may occupy.
    pub fn ground_y(&self) -> f32 {
        WORLD_HEIGHT - self.size.y
    }

    pub fn on_ground(&self) -> bool {
        self.pos.y >= self.ground_y()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub anim: SpriteAnimation,
    /// Set once the enemy has fully left the screen; purged at end of frame.
    pub marked_for_deletion: bool,
}

impl Enemy {
    /// A fresh enemy at the right edge, standing on the ground.
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT - ENEMY_HEIGHT),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed: ENEMY_SPEED,
            anim: SpriteAnimation::new(0, ENEMY_MAX_FRAME),
            marked_for_deletion: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect { pos: self.pos, size: self.size }
    }
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new()
    }
}

// ── Flying hazard & collectible ───────────────────────────────────────────────

/// The dragon that sweeps across in hard mode. Lethal on contact.
#[derive(Clone, Debug, PartialEq)]
pub struct FlyingHazard {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub glyph: &'static str,
}

impl FlyingHazard {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(HAZARD_SIZE),
            speed: HAZARD_SPEED,
            glyph: HAZARD_GLYPH,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect { pos: self.pos, size: self.size }
    }
}

/// The coin bag worth `COIN_POINTS` in hard mode.
#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub glyph: &'static str,
}

impl Collectible {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(COIN_SIZE),
            speed: COIN_SPEED,
            glyph: COIN_GLYPH,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect { pos: self.pos, size: self.size }
    }
}

// ── Background ────────────────────────────────────────────────────────────────

/// Two-tile scrolling strip.
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Background {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::new(BACKGROUND_WIDTH, BACKGROUND_HEIGHT),
            speed: BACKGROUND_SPEED,
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one play-through owns. Entities live here for their whole
/// lifetime and are only touched by the frame step.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub player: Player,
    pub background: Background,
    pub enemies: Vec<Enemy>,
    /// At most one hazard; created by the spawn timer.
    pub hazard: Option<FlyingHazard>,
    /// At most one coin; created the first time hard mode is selected.
    pub collectible: Option<Collectible>,
    pub scheduler: SpawnScheduler,
    pub score: u32,
    pub mode: Mode,
    pub phase: GamePhase,
    /// Simulated frames since the session started running.
    pub frame: u64,
}

impl GameSession {
    pub fn is_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn is_hard(&self) -> bool {
        self.mode == Mode::Hard
    }
}
