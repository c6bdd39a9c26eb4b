//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::PieceColor;

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the playfield sits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Top-left corner of the border.
    x: u16,
    y: u16,
    /// Border size including the frame.
    w: u16,
    h: u16,
}

/// Terminal renderer for a game session.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square in most fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Render the game into an existing framebuffer, resizing it to the
    /// viewport. Reusing one framebuffer across frames avoids reallocating.
    pub fn render_into(&self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board = game.board();
        let w = board.width() as u16 * self.cell_w + 2;
        let h = board.height() as u16 * self.cell_h + 2;
        let layout = Layout {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, layout);

        for row in 0..board.height() {
            for col in 0..board.width() {
                let (ch, style) = match game.cell_color(row, col) {
                    Some(color) => {
                        let style = CellStyle::new(piece_rgb(color), PLAYFIELD_BG);
                        let style = if game.is_active_at(row, col) {
                            style.bold()
                        } else {
                            style
                        };
                        ('█', style)
                    }
                    None => ('·', CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim()),
                };
                self.fill_board_cell(fb, layout, row as u16, col as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, game, viewport, layout);

        if game.game_over() {
            self.draw_overlay(fb, layout, &["GAME OVER", "r: restart", "q: quit"]);
        } else if game.paused() {
            self.draw_overlay(fb, layout, &["PAUSED", "p: resume"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, l: Layout) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let (right, bottom) = (l.x + l.w - 1, l.y + l.h - 1);

        fb.put_char(l.x, l.y, '┌', style);
        fb.put_char(right, l.y, '┐', style);
        fb.put_char(l.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in l.x + 1..right {
            fb.put_char(x, l.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in l.y + 1..bottom {
            fb.put_char(l.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        l: Layout,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let x = l.x + 1 + col * self.cell_w;
        let y = l.y + 1 + row * self.cell_h;
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &GameState, viewport: Viewport, l: Layout) {
        let x = l.x.saturating_add(l.w).saturating_add(2);
        if x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let stats = [
            ("SCORE", game.score()),
            ("LEVEL", game.level()),
            ("LINES", game.lines()),
            ("SPEED", game.tick_interval().as_millis() as u32),
        ];
        let mut y = l.y;
        for (name, n) in stats {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, n, value);
            y += 3;
        }

        for line in [
            "←→ move",
            "↓  down",
            "↑  rotate",
            "␣  drop",
            "p  pause",
            "r  restart",
            "q  quit",
        ] {
            fb.put_str(x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, l: Layout, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let top = (l.y + l.h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = l.x + l.w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

/// Display color of a piece family.
pub fn piece_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(80, 220, 220),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Purple => Rgb::new(200, 120, 220),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Red => Rgb::new(220, 80, 80),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Orange => Rgb::new(255, 165, 0),
    }
}
