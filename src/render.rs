//! Drawing contract.
//!
//! The core never touches a real screen. It describes each frame through a
//! `Surface` that knows two primitives: blit part of a named image, and draw
//! a line of text. Every function here only reads the session.

use crate::consts::*;
use crate::entities::{
    Background, Collectible, Enemy, FlyingHazard, GameSession, Player, Rect, Vec2,
};

/// Images the core refers to by name. Loading them is the host's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageId {
    Player,
    Enemy,
    Background,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    Black,
    White,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_px: f32,
    pub fill: Fill,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(font_px: f32, fill: Fill) -> Self {
        Self {
            font_px,
            fill,
            align: TextAlign::Left,
        }
    }

    pub fn centered(self) -> Self {
        Self {
            align: TextAlign::Center,
            ..self
        }
    }
}

/// Something a frame can be drawn onto.
pub trait Surface {
    type Error;

    /// Copy the `src` region of `image` into `dst`, scaling if sizes differ.
    fn draw_image(&mut self, image: ImageId, src: Rect, dst: Rect) -> Result<(), Self::Error>;

    /// Draw `text` anchored at `at` (left edge or center, per `style.align`).
    fn fill_text(&mut self, text: &str, at: Vec2, style: TextStyle) -> Result<(), Self::Error>;
}

// ── Entities ──────────────────────────────────────────────────────────────────

impl Player {
    /// Blit the current animation cell.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let src = Rect::new(
            self.anim.frame_index as f32 * self.size.x,
            self.anim.frame_row as f32 * self.size.y,
            self.size.x,
            self.size.y,
        );
        surface.draw_image(ImageId::Player, src, self.bounds())
    }
}

impl Enemy {
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let src = Rect::new(
            self.anim.frame_index as f32 * self.size.x,
            0.0,
            self.size.x,
            self.size.y,
        );
        surface.draw_image(ImageId::Enemy, src, self.bounds())
    }
}

impl Background {
    /// Two copies side by side so the seam never shows while scrolling.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let src = Rect::new(0.0, 0.0, self.size.x, self.size.y);
        let first = Rect {
            pos: self.pos,
            size: self.size,
        };
        let second = Rect {
            pos: Vec2::new(self.pos.x + self.size.x - self.speed, self.pos.y),
            size: self.size,
        };
        surface.draw_image(ImageId::Background, src, first)?;
        surface.draw_image(ImageId::Background, src, second)
    }
}

impl FlyingHazard {
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_text(self.glyph, self.pos, TextStyle::new(HAZARD_FONT_PX, Fill::White))
    }
}

impl Collectible {
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_text(self.glyph, self.pos, TextStyle::new(COIN_FONT_PX, Fill::White))
    }
}

// ── Status overlay ────────────────────────────────────────────────────────────

/// Text with a black drop shadow: black first, white slightly offset.
fn shadowed_text<S: Surface>(
    surface: &mut S,
    text: &str,
    at: Vec2,
    style: TextStyle,
) -> Result<(), S::Error> {
    surface.fill_text(text, at, TextStyle { fill: Fill::Black, ..style })?;
    surface.fill_text(
        text,
        at + Vec2::splat(STATUS_SHADOW_OFFSET),
        TextStyle { fill: Fill::White, ..style },
    )
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Score in the top-left corner, plus the game-over line once the run ended.
pub fn draw_status<S: Surface>(session: &GameSession, surface: &mut S) -> Result<(), S::Error> {
    let style = TextStyle::new(STATUS_FONT_PX, Fill::White);
    shadowed_text(surface, &score_text(session.score), Vec2::new(20.0, 50.0), style)?;
    if session.is_over() {
        shadowed_text(
            surface,
            GAME_OVER_TEXT,
            Vec2::new(WORLD_WIDTH / 2.0, 200.0),
            style.centered(),
        )?;
    }
    Ok(())
}

// ── Whole frame ───────────────────────────────────────────────────────────────

/// Draw one complete frame: background, player, hard-mode extras, enemies,
/// status text.
pub fn render<S: Surface>(session: &GameSession, surface: &mut S) -> Result<(), S::Error> {
    session.background.draw(surface)?;
    session.player.draw(surface)?;
    if session.is_hard() {
        if let Some(coin) = &session.collectible {
            coin.draw(surface)?;
        }
        if let Some(hazard) = &session.hazard {
            hazard.draw(surface)?;
        }
    }
    for enemy in &session.enemies {
        enemy.draw(surface)?;
    }
    draw_status(session, surface)
}
