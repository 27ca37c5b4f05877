//! Shared types module - vocabulary used by every layer
//!
//! Pure data with no dependencies, usable from the core simulation, the
//! terminal renderer, and any headless harness.
//!
//! # Grid conventions
//!
//! The grid is addressed as `(row, col)` with row 0 at the top. Shapes are
//! anchored at an integer `(row, col)` and occupy cells at small `(dx, dy)`
//! offsets from that anchor. Rows above the top of the grid are legal for a
//! falling shape; only the left, right, and bottom edges are hard bounds.
//!
//! # Cell representation
//!
//! A grounded cell stores the id of the player that grounded it. Empty is
//! modeled as `None` rather than a numeric sentinel so that no player id is
//! ever ambiguous with "empty".

/// Identity of a participating player.
pub type PlayerId = u32;

/// A grid cell: the player whose block is grounded there, or empty.
pub type Cell = Option<PlayerId>;

/// Default grid width in columns.
pub const GRID_COLS: u8 = 10;

/// Default grid height in rows.
pub const GRID_ROWS: u8 = 20;

/// Interval between simulation steps in milliseconds.
pub const STEP_INTERVAL_MS: u64 = 500;

/// The seven falling-shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All kinds, in a fixed order. Uniform random selection indexes into
    /// this table.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Lowercase single-letter name, for logs and debug views.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// Rotation state of a falling shape.
///
/// Exactly four states; the cycle is R0 -> R90 -> R180 -> R270 -> R0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Rotate a quarter turn clockwise.
    pub fn cw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn ccw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R270,
            Rotation::R270 => Rotation::R180,
            Rotation::R180 => Rotation::R90,
            Rotation::R90 => Rotation::R0,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::R0
    }
}
