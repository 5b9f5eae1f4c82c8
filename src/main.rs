//! Terminal game runner.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use blockfall::core::Session;
use blockfall::input::{map_key, should_quit, RepeatGate};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{Command, FRAME_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1);
    let mut session = Session::new(seed);

    let view = GameView::default();
    let mut gate = RepeatGate::new();

    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&session, viewport);
        term.draw(&fb)?;

        // Input with timeout until the next frame boundary.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(cmd) = map_key(key) {
                            apply(&mut session, &mut gate, cmd);
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    // The Retry button is only live on the game-over screen.
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                        && session.game_over()
                        && view.retry_rect(viewport).contains(mouse.column, mouse.row)
                    {
                        apply(&mut session, &mut gate, Command::Reset);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame_duration {
            last_frame = Instant::now();
            session.tick();
        }
    }
}

/// Route a command into the session, rate-limiting directional moves
/// through the shared gate.
fn apply(session: &mut Session, gate: &mut RepeatGate, cmd: Command) {
    if cmd.is_directional() && !gate.try_pass(Instant::now()) {
        return;
    }
    if cmd == Command::Reset {
        gate.clear();
    }
    session.handle_command(cmd);
}
