//! Rendering layer: all terminal I/O lives here.
//!
//! `TerminalSurface` implements the core's `Surface` on top of crossterm.
//! World coordinates (800 × 720) are scaled onto whatever terminal size we
//! have; images become glyph blocks and text is printed at the scaled spot.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use shadows_adventure::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use shadows_adventure::entities::{Rect, Vec2};
use shadows_adventure::render::{Fill, ImageId, Surface, TextAlign, TextStyle};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Red;
const C_GROUND: Color = Color::DarkGreen;
const C_SKY: Color = Color::DarkGrey;
const C_TEXT: Color = Color::White;
const C_TEXT_SHADOW: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

/// Feet of the running pose, one per sprite-sheet column.
const RUN_FEET: [&str; 4] = ["/\\", "||", "\\/", "||"];
/// Enemy crawl cycle.
const ENEMY_LEGS: [char; 3] = ['w', 'W', 'm'];

pub struct TerminalSurface<'a, W: Write> {
    out: &'a mut W,
    cols: u16,
    rows: u16,
}

impl<'a, W: Write> TerminalSurface<'a, W> {
    pub fn new(out: &'a mut W, cols: u16, rows: u16) -> Self {
        Self { out, cols, rows }
    }

    /// Clear the screen before a frame.
    pub fn begin(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Park the cursor in a harmless spot and flush.
    pub fn finish(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }

    /// Bottom-line hint, drawn over the final frame.
    pub fn hint(&mut self, text: &str) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(1, self.rows.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn col(&self, x: f32) -> i32 {
        (x * self.cols as f32 / WORLD_WIDTH).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y * self.rows as f32 / WORLD_HEIGHT).floor() as i32
    }

    fn put(&mut self, col: i32, row: i32, text: &str, color: Color) -> std::io::Result<()> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    /// Cell span covered by `dst`, at least one cell each way.
    fn cells(&self, dst: &Rect) -> (i32, i32, i32, i32) {
        let left = self.col(dst.pos.x);
        let top = self.row(dst.pos.y);
        let right = self.col(dst.pos.x + dst.size.x).max(left + 1);
        let bottom = self.row(dst.pos.y + dst.size.y).max(top + 1);
        (left, top, right, bottom)
    }

    fn draw_player(&mut self, src: Rect, dst: Rect) -> std::io::Result<()> {
        let frame = (src.pos.x / src.size.x) as usize;
        let jumping = src.pos.y > 0.0;
        let (left, top, right, bottom) = self.cells(&dst);
        for row in top..bottom {
            let line: String = if row == bottom - 1 && !jumping {
                RUN_FEET[frame % RUN_FEET.len()].repeat(((right - left) as usize).div_ceil(2))
            } else if row == top {
                "▄".repeat((right - left) as usize)
            } else {
                "█".repeat((right - left) as usize)
            };
            let visible: String = line.chars().take((right - left) as usize).collect();
            self.put_clipped(left, row, &visible, C_PLAYER)?;
        }
        Ok(())
    }

    fn draw_enemy(&mut self, src: Rect, dst: Rect) -> std::io::Result<()> {
        let frame = (src.pos.x / src.size.x) as usize;
        let (left, top, right, bottom) = self.cells(&dst);
        let width = (right - left) as usize;
        for row in top..bottom {
            let line: String = if row == bottom - 1 {
                std::iter::repeat(ENEMY_LEGS[frame % ENEMY_LEGS.len()]).take(width).collect()
            } else {
                "▒".repeat(width)
            };
            self.put_clipped(left, row, &line, C_ENEMY)?;
        }
        Ok(())
    }

    /// Ground stripes and sparse stars, offset by the tile position so the
    /// scroll is visible.
    fn draw_background(&mut self, dst: Rect) -> std::io::Result<()> {
        let ground_row = self.rows as i32 - 1;
        for col in 0..self.cols as i32 {
            let world_x = col as f32 * WORLD_WIDTH / self.cols as f32;
            let u = world_x - dst.pos.x;
            if u < 0.0 || u >= dst.size.x {
                continue;
            }
            let stripe = (u / 40.0) as i32;
            let ground = if stripe % 2 == 0 { "▀" } else { "▔" };
            self.put(col, ground_row, ground, C_GROUND)?;
            if stripe % 7 == 3 {
                let star_row = (stripe * 5) % (self.rows as i32 / 2).max(1);
                self.put(col, star_row, "·", C_SKY)?;
            }
        }
        Ok(())
    }

    /// Print `text` starting at `col`, dropping the part outside the screen.
    fn put_clipped(&mut self, col: i32, row: i32, text: &str, color: Color) -> std::io::Result<()> {
        let skip = (-col).max(0) as usize;
        let start = col.max(0);
        let room = (self.cols as i32 - start).max(0) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }
        self.put(start, row, &visible, color)
    }
}

impl<W: Write> Surface for TerminalSurface<'_, W> {
    type Error = std::io::Error;

    fn draw_image(&mut self, image: ImageId, src: Rect, dst: Rect) -> std::io::Result<()> {
        match image {
            ImageId::Background => self.draw_background(dst),
            ImageId::Player => self.draw_player(src, dst),
            ImageId::Enemy => self.draw_enemy(src, dst),
        }
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: TextStyle) -> std::io::Result<()> {
        let color = match style.fill {
            Fill::Black => C_TEXT_SHADOW,
            Fill::White => C_TEXT,
        };
        let mut col = self.col(at.x);
        if style.align == TextAlign::Center {
            col -= text.chars().count() as i32 / 2;
        }
        self.put_clipped(col, self.row(at.y), text, color)
    }
}
