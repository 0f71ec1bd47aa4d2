use std::collections::BTreeSet;

use crate::grid::{Cardinal, GridCoordinate};

/// A wall/floor split of a shape.
#[derive(Debug, Default)]
pub struct RoleSplit {
    pub walls: BTreeSet<GridCoordinate>,
    pub floor: BTreeSet<GridCoordinate>,
}

/// Returns `true` if `cell` touches the outside of `shape` or a carved cell
/// through one of its four sides. A side past the edge of the plane is
/// outside.
pub fn touches_outside(
    cell: GridCoordinate,
    shape: &BTreeSet<GridCoordinate>,
    deleted: &BTreeSet<GridCoordinate>,
) -> bool {
    Cardinal::ALL.into_iter().any(|dir| {
        cell.step(dir)
            .is_none_or(|n| !shape.contains(&n) || deleted.contains(&n))
    })
}

/// Plain role pass: a cell is Wall if it touches the outside, else Floor.
pub fn assign_roles(
    shape: &BTreeSet<GridCoordinate>,
    deleted: &BTreeSet<GridCoordinate>,
) -> RoleSplit {
    let mut split = RoleSplit::default();
    for &cell in shape {
        if touches_outside(cell, shape, deleted) {
            split.walls.insert(cell);
        } else {
            split.floor.insert(cell);
        }
    }
    split
}

/// Role pass after closure.
///
/// Cells in `protected` are forced to Floor. Everything else is Wall if the
/// closure made it one or if it touches the outside.
pub fn assign_roles_protected(
    shape: &BTreeSet<GridCoordinate>,
    deleted: &BTreeSet<GridCoordinate>,
    closure_walls: &BTreeSet<GridCoordinate>,
    protected: &BTreeSet<GridCoordinate>,
) -> RoleSplit {
    let mut split = RoleSplit::default();
    for &cell in shape {
        if protected.contains(&cell) {
            split.floor.insert(cell);
        } else if closure_walls.contains(&cell) || touches_outside(cell, shape, deleted) {
            split.walls.insert(cell);
        } else {
            split.floor.insert(cell);
        }
    }
    split
}
