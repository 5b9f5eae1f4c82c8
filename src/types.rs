//! Shared types and startup constants.
//!
//! Everything here is pure data with no external dependencies. Timing
//! constants follow two deliberately different disciplines: gravity is
//! counted in frame ticks, horizontal repeat is measured on the wall clock.

/// Playfield dimensions in cells.
pub const GRID_WIDTH: u8 = 10;
pub const GRID_HEIGHT: u8 = 20;

// Malformed dimensions are a startup precondition violation; a zero-sized
// grid fails here, before any session exists.
const _: () = assert!(GRID_WIDTH > 0 && GRID_HEIGHT > 0);

/// Frame clock rate and derived frame duration.
pub const FPS: u32 = 60;
pub const FRAME_MS: u32 = 1000 / FPS;

/// Gravity advances once every this many ticks (half a second at 60 FPS).
pub const GRAVITY_INTERVAL_TICKS: u32 = FPS / 2;

/// Minimum wall-clock interval between repeated directional commands.
pub const MOVE_REPEAT_MS: u64 = 100;

/// Number of tetromino types in the catalog.
pub const PIECE_KINDS: usize = 7;

/// Catalog index of a tetromino type, `0..PIECE_KINDS`.
///
/// The same index selects the render color, so a cell only ever needs to
/// store this one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub u8);

impl PieceId {
    /// All catalog indices in order (I, T, L, J, O, S, Z).
    pub fn all() -> impl Iterator<Item = PieceId> {
        (0..PIECE_KINDS as u8).map(PieceId)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One grid position: empty, or the catalog index of the occupying type.
pub type Cell = Option<PieceId>;

/// Discrete user intents fed to the session by the input driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Hold,
    Reset,
}

impl Command {
    /// Directional commands are rate-limited by the input driver's
    /// debounce gate; everything else passes through immediately.
    pub fn is_directional(self) -> bool {
        matches!(
            self,
            Command::MoveLeft | Command::MoveRight | Command::SoftDrop
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_id_covers_catalog() {
        let ids: Vec<PieceId> = PieceId::all().collect();
        assert_eq!(ids.len(), PIECE_KINDS);
        assert_eq!(ids[0], PieceId(0));
        assert_eq!(ids[6], PieceId(6));
    }

    #[test]
    fn test_directional_commands() {
        assert!(Command::MoveLeft.is_directional());
        assert!(Command::MoveRight.is_directional());
        assert!(Command::SoftDrop.is_directional());
        assert!(!Command::Rotate.is_directional());
        assert!(!Command::HardDrop.is_directional());
        assert!(!Command::Hold.is_directional());
        assert!(!Command::Reset.is_directional());
    }

    #[test]
    fn test_gravity_cadence_derived_from_fps() {
        assert_eq!(GRAVITY_INTERVAL_TICKS, 30);
        assert_eq!(FRAME_MS, 16);
    }
}
