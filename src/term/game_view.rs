//! GameView: projects a [`Session`] into a framebuffer.
//!
//! Pure (no terminal I/O), so every drawing decision is unit-testable.
//! Board cells are drawn two characters wide to compensate for terminal
//! glyph aspect ratio.

use crate::core::catalog::{color, Shape};
use crate::core::Session;
use crate::term::fb::{FrameBuffer, Rect, Rgb, Style};
use crate::types::{PieceId, GRID_HEIGHT, GRID_WIDTH};

/// Terminal dimensions available for drawing.
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

/// Width of one board cell in terminal columns.
const CELL_W: u16 = 2;
/// Retry button dimensions (label plus padding).
const RETRY_W: u16 = 11;
const RETRY_H: u16 = 3;

pub struct GameView;

impl Default for GameView {
    fn default() -> Self {
        Self
    }
}

impl GameView {
    /// Top-left corner of the board frame for a viewport (centered).
    fn frame_origin(viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = Self::frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Board frame size including the one-character border.
    fn frame_size() -> (u16, u16) {
        (
            (GRID_WIDTH as u16) * CELL_W + 2,
            (GRID_HEIGHT as u16) + 2,
        )
    }

    /// The clickable Retry region, in framebuffer coordinates.
    ///
    /// Centered horizontally on the playfield, a little below its middle,
    /// mirroring the original button placement under the game-over text.
    /// The input driver hit-tests pointer clicks against this rectangle.
    pub fn retry_rect(&self, viewport: Viewport) -> Rect {
        let (start_x, start_y) = Self::frame_origin(viewport);
        let (frame_w, frame_h) = Self::frame_size();
        Rect::new(
            start_x + frame_w.saturating_sub(RETRY_W) / 2,
            start_y + frame_h / 2 + 2,
            RETRY_W,
            RETRY_H,
        )
    }

    /// Render observable session state into a fresh framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let (start_x, start_y) = Self::frame_origin(viewport);
        let (frame_w, frame_h) = Self::frame_size();

        let field_bg = Style::colored(Rgb::new(80, 80, 90), Rgb::new(25, 25, 32));
        fb.fill(
            Rect::new(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2),
            ' ',
            field_bg,
        );
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        // Settled cells.
        for y in 0..GRID_HEIGHT as i8 {
            for x in 0..GRID_WIDTH as i8 {
                if let Some(Some(id)) = session.grid().get(x, y) {
                    self.draw_cell(&mut fb, start_x, start_y, x as u16, y as u16, id);
                }
            }
        }

        // Falling piece (cells above the board are simply not drawn).
        let active = session.active();
        for (i, j) in active.shape.offsets() {
            let x = active.x + j;
            let y = active.y + i;
            if x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8 {
                self.draw_cell(&mut fb, start_x, start_y, x as u16, y as u16, active.id);
            }
        }

        self.draw_panel(&mut fb, session, viewport, start_x, start_y, frame_w);

        if session.game_over() {
            self.draw_game_over(&mut fb, session, viewport, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::colored(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, id: PieceId) {
        let style = Style {
            fg: piece_rgb(id),
            bg: Rgb::new(25, 25, 32),
            bold: true,
            dim: false,
        };
        let px = start_x + 1 + x * CELL_W;
        let py = start_y + 1 + y;
        fb.fill(Rect::new(px, py, CELL_W, 1), '█', style);
    }

    /// Draw a shape matrix at an arbitrary framebuffer position (next and
    /// hold previews in the side panel).
    fn draw_shape_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, id: PieceId, shape: &Shape) {
        let style = Style {
            fg: piece_rgb(id),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        for (i, j) in shape.offsets() {
            let px = x + (j as u16) * CELL_W;
            let py = y + i as u16;
            fb.fill(Rect::new(px, py, CELL_W, 1), '█', style);
        }
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x + 10 >= viewport.width {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = Style::colored(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.text(panel_x, y, "SCORE", label);
        y += 1;
        fb.text(panel_x, y, &session.score().to_string(), value);
        y += 2;

        fb.text(panel_x, y, "NEXT", label);
        y += 1;
        let (next_id, next_shape) = session.next_piece();
        self.draw_shape_preview(fb, panel_x, y, next_id, next_shape);
        y += 3;

        fb.text(panel_x, y, "HOLD", label);
        y += 1;
        match session.held_piece() {
            Some((id, shape)) => self.draw_shape_preview(fb, panel_x, y, id, shape),
            None => fb.text(panel_x, y, "-", value),
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let banner = Style {
            fg: Rgb::new(225, 0, 0),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let plain = Style::colored(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));

        let mid_y = start_y + frame_h / 2;
        let centered_x = |text: &str| start_x + frame_w.saturating_sub(text.chars().count() as u16) / 2;

        let title = "GAME OVER";
        fb.text(centered_x(title), mid_y.saturating_sub(2), title, banner);

        let score_line = format!("SCORE: {}", session.score());
        fb.text(centered_x(&score_line), mid_y, &score_line, plain);

        // Retry button: filled box with a centered label.
        let rect = self.retry_rect(viewport);
        let button = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(170, 30, 30),
            bold: true,
            dim: false,
        };
        fb.fill(rect, ' ', button);
        let label = "RETRY";
        let lx = rect.x + rect.w.saturating_sub(label.len() as u16) / 2;
        fb.text(lx, rect.y + rect.h / 2, label, button);
    }
}

/// Palette lookup for a catalog entry.
fn piece_rgb(id: PieceId) -> Rgb {
    let (r, g, b) = color(id);
    Rgb::new(r, g, b)
}
