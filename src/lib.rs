//! Shadow's Adventure - a side-scrolling dodge-and-collect game.
//!
//! Core modules:
//! - `entities`: pure game data (player, enemies, hazard, coin, session)
//! - `compute`: per-frame update logic and command handling
//! - `spawn`: interval timers deciding when things appear
//! - `collision`: center-distance contact tests
//! - `render`: the drawing surface contract and every `draw`
//! - `frame`: timestamp to delta-time conversion and loop halting
//! - `input`: held-key tracking and start/mode commands

pub mod collision;
pub mod compute;
pub mod entities;
pub mod frame;
pub mod input;
pub mod render;
pub mod spawn;

/// World and physics constants. Movement is in pixels per frame, timers in
/// milliseconds.
pub mod consts {
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 720.0;

    pub const PLAYER_WIDTH: f32 = 200.0;
    pub const PLAYER_HEIGHT: f32 = 200.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_IMPULSE: f32 = 32.0;
    /// Added to vertical velocity every airborne frame.
    pub const PLAYER_WEIGHT: f32 = 1.0;
    pub const PLAYER_RUN_ROW: u32 = 0;
    pub const PLAYER_RUN_MAX_FRAME: u32 = 8;
    pub const PLAYER_JUMP_ROW: u32 = 1;
    pub const PLAYER_JUMP_MAX_FRAME: u32 = 5;

    pub const ENEMY_WIDTH: f32 = 160.0;
    pub const ENEMY_HEIGHT: f32 = 119.0;
    pub const ENEMY_SPEED: f32 = 8.0;
    pub const ENEMY_MAX_FRAME: u32 = 5;
    pub const ENEMY_BASE_INTERVAL_MS: f32 = 1000.0;
    /// Upper bound (exclusive) of the per-session spawn jitter.
    pub const ENEMY_JITTER_MAX_MS: f32 = 2000.0;
    pub const ENEMY_ESCAPE_POINTS: u32 = 1;

    /// Both sprite sheets animate at 20 fps.
    pub const SPRITE_FRAME_INTERVAL_MS: f32 = 1000.0 / 20.0;

    pub const BACKGROUND_WIDTH: f32 = 2400.0;
    pub const BACKGROUND_HEIGHT: f32 = 720.0;
    pub const BACKGROUND_SPEED: f32 = 7.0;

    pub const HAZARD_SIZE: f32 = 60.0;
    pub const HAZARD_SPEED: f32 = 9.0;
    pub const HAZARD_CONTACT_RADIUS: f32 = 60.0;
    pub const HAZARD_INTERVAL_MS: f32 = 10_000.0;
    /// Spawn band height is `WORLD_HEIGHT - HAZARD_Y_MARGIN`.
    pub const HAZARD_Y_MARGIN: f32 = 100.0;
    pub const HAZARD_GLYPH: &str = "🐲";
    pub const HAZARD_FONT_PX: f32 = 60.0;

    pub const COIN_SIZE: f32 = 50.0;
    pub const COIN_SPEED: f32 = 3.0;
    pub const COIN_PICKUP_RADIUS: f32 = 100.0;
    pub const COIN_POINTS: u32 = 2;
    pub const COIN_Y_MARGIN: f32 = 50.0;
    pub const COIN_GLYPH: &str = "💰";
    pub const COIN_FONT_PX: f32 = 30.0;

    pub const STATUS_FONT_PX: f32 = 40.0;
    /// Offset between the black shadow and the white foreground text.
    pub const STATUS_SHADOW_OFFSET: f32 = 2.0;
    pub const GAME_OVER_TEXT: &str = "Game Over, Ctrl + r To Try Again! ";

    /// Larger gaps between frames (tab switch, stalled terminal) are clamped.
    pub const MAX_FRAME_DELTA_MS: f32 = 1000.0;
}
