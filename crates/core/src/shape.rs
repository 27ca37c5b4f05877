//! Shape geometry - offset tables and the falling-shape struct
//!
//! Each shape kind occupies four cells at fixed `(dx, dy)` offsets from its
//! anchor, one table per rotation state. All offsets fit a 4x4 box with
//! `dy >= 0`, so a shape spawned at row 0 never reaches above the grid.

use multris_types::{PlayerId, Rotation, ShapeKind};

/// Offset of one occupied cell relative to the shape anchor.
pub type CellOffset = (i8, i8);

/// The four occupied cells of a shape at some rotation.
pub type ShapeCells = [CellOffset; 4];

/// Occupied cells for a kind at a rotation. Pure table lookup.
pub fn shape_cells(kind: ShapeKind, rotation: Rotation) -> ShapeCells {
    match kind {
        ShapeKind::I => i_cells(rotation),
        ShapeKind::O => o_cells(rotation),
        ShapeKind::T => t_cells(rotation),
        ShapeKind::S => s_cells(rotation),
        ShapeKind::Z => z_cells(rotation),
        ShapeKind::J => j_cells(rotation),
        ShapeKind::L => l_cells(rotation),
    }
}

fn i_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::R0 => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::R90 => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::R180 => [(0, 2), (1, 2), (2, 2), (3, 2)],
        Rotation::R270 => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

// The O shape is rotation-invariant.
fn o_cells(_rotation: Rotation) -> ShapeCells {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn t_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::R0 => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::R90 => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::R180 => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::R270 => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn s_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::R0 => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::R90 => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::R180 => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::R270 => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::R0 => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::R90 => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::R180 => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::R270 => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::R0 => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::R90 => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::R180 => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::R270 => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn l_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::R0 => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::R90 => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::R180 => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::R270 => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// A falling shape owned by one player.
///
/// `row` and `col` locate the anchor on the grid; the occupied cells are the
/// anchor plus the kind's offsets for the current rotation. The struct is
/// mutated in place while falling (row increments) and replaced wholesale on
/// respawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub player: PlayerId,
    pub col: i8,
    pub row: i8,
    pub rotation: Rotation,
}

impl Shape {
    pub fn new(kind: ShapeKind, player: PlayerId, col: i8, row: i8, rotation: Rotation) -> Self {
        Self {
            kind,
            player,
            col,
            row,
            rotation,
        }
    }

    /// A fresh shape at the spawn anchor: top row, given column, default
    /// rotation.
    pub fn spawn(kind: ShapeKind, player: PlayerId, col: i8) -> Self {
        Self::new(kind, player, col, 0, Rotation::R0)
    }

    /// Occupied cell offsets at the current rotation.
    pub fn cells(&self) -> ShapeCells {
        shape_cells(self.kind, self.rotation)
    }

    /// Occupied cell offsets at an arbitrary rotation, leaving the shape
    /// untouched. Used for hypothetical placement tests.
    pub fn cells_at(&self, rotation: Rotation) -> ShapeCells {
        shape_cells(self.kind, rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_has_four_cells_in_box() {
        for kind in ShapeKind::ALL {
            for rotation in [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270] {
                let cells = shape_cells(kind, rotation);
                assert_eq!(cells.len(), 4);
                for &(dx, dy) in &cells {
                    assert!((0..4).contains(&dx), "{kind:?} {rotation:?} dx {dx}");
                    assert!((0..4).contains(&dy), "{kind:?} {rotation:?} dy {dy}");
                }
            }
        }
    }

    #[test]
    fn test_cells_are_distinct() {
        for kind in ShapeKind::ALL {
            for rotation in [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270] {
                let cells = shape_cells(kind, rotation);
                for i in 0..cells.len() {
                    for j in i + 1..cells.len() {
                        assert_ne!(cells[i], cells[j], "{kind:?} {rotation:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_o_is_rotation_invariant() {
        let base = shape_cells(ShapeKind::O, Rotation::R0);
        for rotation in [Rotation::R90, Rotation::R180, Rotation::R270] {
            assert_eq!(shape_cells(ShapeKind::O, rotation), base);
        }
    }

    #[test]
    fn test_cells_is_pure() {
        let shape = Shape::spawn(ShapeKind::T, 1, 5);
        let before = shape;
        let a = shape.cells();
        let b = shape.cells();
        assert_eq!(a, b);
        assert_eq!(shape, before);
    }

    #[test]
    fn test_cells_at_does_not_rotate_the_shape() {
        let shape = Shape::spawn(ShapeKind::J, 0, 4);
        let _ = shape.cells_at(Rotation::R180);
        assert_eq!(shape.rotation, Rotation::R0);
    }

    #[test]
    fn test_spawn_anchor() {
        let shape = Shape::spawn(ShapeKind::L, 7, 5);
        assert_eq!(shape.player, 7);
        assert_eq!(shape.col, 5);
        assert_eq!(shape.row, 0);
        assert_eq!(shape.rotation, Rotation::R0);
    }
}
