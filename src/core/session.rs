//! Game session: ties grid, active piece, piece source, and score together.
//!
//! The session is an explicit owned object (no module-level state) with
//! two macro-states: playing and game over. Gravity is tick-counted: the
//! driver calls `tick()` once per frame and the piece falls one row every
//! `GRAVITY_INTERVAL_TICKS` frames, independent of input or render cost.

use crate::core::catalog::{spawn_shape, Shape};
use crate::core::grid::Grid;
use crate::core::piece::ActivePiece;
use crate::core::rng::PieceSource;
use crate::types::{Command, PieceId, GRAVITY_INTERVAL_TICKS};

/// Complete state of one game.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    active: ActivePiece,
    next: (PieceId, Shape),
    held: Option<(PieceId, Shape)>,
    can_hold: bool,
    score: u32,
    game_over: bool,
    gravity_counter: u32,
    source: PieceSource,
}

impl Session {
    /// Start a fresh game. The first active piece and the lookahead are
    /// drawn eagerly so spawning never waits on generation.
    pub fn new(seed: u32) -> Self {
        let mut source = PieceSource::new(seed);
        let first = source.draw();
        let next_id = source.draw();
        Self {
            grid: Grid::new(),
            active: ActivePiece::spawn(first),
            next: (next_id, spawn_shape(next_id)),
            held: None,
            can_hold: true,
            score: 0,
            game_over: false,
            gravity_counter: 0,
            source,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next_piece(&self) -> (PieceId, &Shape) {
        (self.next.0, &self.next.1)
    }

    pub fn held_piece(&self) -> Option<(PieceId, &Shape)> {
        self.held.as_ref().map(|(id, shape)| (*id, shape))
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Advance one frame. Returns true when gravity moved or locked the
    /// active piece this frame.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        self.gravity_counter += 1;
        if self.gravity_counter < GRAVITY_INTERVAL_TICKS {
            return false;
        }
        self.gravity_counter = 0;

        if self.active.try_shift(&self.grid, 0, 1) {
            return true;
        }

        self.lock_active();
        true
    }

    /// Dispatch one discrete user intent. While game over, everything
    /// except `Reset` is ignored.
    pub fn handle_command(&mut self, cmd: Command) -> bool {
        if self.game_over && cmd != Command::Reset {
            return false;
        }

        match cmd {
            Command::MoveLeft => self.active.try_shift(&self.grid, -1, 0),
            Command::MoveRight => self.active.try_shift(&self.grid, 1, 0),
            Command::SoftDrop => self.active.try_shift(&self.grid, 0, 1),
            Command::Rotate => self.active.try_rotate(&self.grid),
            Command::HardDrop => self.active.drop_to_floor(&self.grid) > 0,
            Command::Hold => self.hold(),
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Start over with an empty grid. The piece sequence continues from
    /// the current RNG state rather than replaying.
    pub fn reset(&mut self) {
        *self = Session::new(self.source.state());
    }

    /// Merge the active piece, clear rows, score them, and promote the
    /// lookahead. A colliding fresh spawn ends the game.
    fn lock_active(&mut self) {
        self.grid
            .merge(&self.active.shape, self.active.x, self.active.y, self.active.id);

        let cleared = self.grid.clear_completed_rows().len() as u32;
        // Quadratic reward: multi-line clears beat sequential singles.
        self.score += cleared * cleared;

        self.spawn_from_queue();
        self.can_hold = true;

        if self.active.is_blocked(&self.grid) {
            self.game_over = true;
        }
    }

    /// Promote the lookahead to active and draw a replacement lookahead.
    fn spawn_from_queue(&mut self) {
        let (id, shape) = self.next;
        self.active = ActivePiece::at_spawn(id, shape);
        let next_id = self.source.draw();
        self.next = (next_id, spawn_shape(next_id));
    }

    /// Stash or swap the active piece. At most one piece can be held and
    /// the slot is locked until the next lock event.
    fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }

        let stashed = (self.active.id, self.active.shape);
        match self.held.take() {
            Some((id, shape)) => {
                self.active = ActivePiece::at_spawn(id, shape);
            }
            None => {
                self.spawn_from_queue();
            }
        }
        self.held = Some(stashed);
        self.can_hold = false;
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
