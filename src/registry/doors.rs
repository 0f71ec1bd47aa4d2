use std::collections::BTreeSet;

use crate::grid::GridCoordinate;

/// Door occupancy as seen by the wall registry.
///
/// Walls and doors never share a cell.
pub trait DoorLayer {
    fn has_door_at(&self, cell: GridCoordinate) -> bool;

    /// Places a door at `cell`. Returns `false` if one was already there.
    fn place_door_at(&mut self, cell: GridCoordinate) -> bool;

    /// Removes the door at `cell`. Returns `true` if one was there.
    fn remove_door_at(&mut self, cell: GridCoordinate) -> bool;
}

/// A plain set of door cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoorSet {
    doors: BTreeSet<GridCoordinate>,
}

impl DoorSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.doors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.doors.iter().copied()
    }
}

impl DoorLayer for DoorSet {
    fn has_door_at(&self, cell: GridCoordinate) -> bool {
        self.doors.contains(&cell)
    }

    fn place_door_at(&mut self, cell: GridCoordinate) -> bool {
        self.doors.insert(cell)
    }

    fn remove_door_at(&mut self, cell: GridCoordinate) -> bool {
        self.doors.remove(&cell)
    }
}
