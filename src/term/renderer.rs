//! Flushes framebuffers to a real terminal over crossterm.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    /// Switch the terminal into game mode.
    ///
    /// Mouse capture is enabled so the game-over Retry button can react
    /// to pointer clicks.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.queue(EnableMouseCapture)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Must run even on error paths, so `main`
    /// wraps the frame loop and calls this unconditionally.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint every cell. Used on resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, emitting only the cells that changed since the
    /// previous one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style: Option<Style> = None;
        for y in 0..fb.height() {
            let mut x = 0;
            while x < fb.width() {
                let run = match &self.last {
                    Some(prev) if !full => dirty_run(prev, fb, x, y),
                    _ => Some((x, fb.width() - x)),
                };
                let Some((start, len)) = run else { break };

                self.stdout.queue(cursor::MoveTo(start, y))?;
                for dx in 0..len {
                    let glyph = fb.get(start + dx, y).unwrap_or_default();
                    if style != Some(glyph.style) {
                        self.apply_style(glyph.style)?;
                        style = Some(glyph.style);
                    }
                    self.stdout.queue(Print(glyph.ch))?;
                }
                x = start + len;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.last = Some(fb.clone());
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// First maximal run of differing cells on row `y` at or after `from`.
fn dirty_run(prev: &FrameBuffer, next: &FrameBuffer, from: u16, y: u16) -> Option<(u16, u16)> {
    let w = next.width();
    let differs = |x: u16| prev.get(x, y).unwrap_or_default() != next.get(x, y).unwrap_or_default();

    let start = (from..w).find(|&x| differs(x))?;
    let mut end = start + 1;
    while end < w && differs(end) {
        end += 1;
    }
    Some((start, end - start))
}
