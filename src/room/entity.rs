use std::collections::BTreeSet;

use crate::grid::{GridCoordinate, GridRect};
use crate::topology::QuarterTurn;

slotmap::new_key_type! {
    /// Unique identifier for a finalized room in a [`RoomStore`](super::RoomStore).
    pub struct RoomId;
}

/// A finalized room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEntity {
    /// Lower-left cell of the drawn rectangle.
    pub origin: GridCoordinate,
    /// Width and height of the drawn rectangle, in cells.
    pub size: (u32, u32),
    pub rotation: QuarterTurn,
    pub final_perimeter: BTreeSet<GridCoordinate>,
    pub final_floor: BTreeSet<GridCoordinate>,
}

impl RoomEntity {
    /// The rectangle the room was drawn as, before any carving.
    #[must_use]
    pub fn drawn_rect(&self) -> GridRect {
        GridRect::from_origin_size(self.origin, self.size.0, self.size.1)
    }

    /// Returns `true` if `cell` is part of the room, wall or floor.
    #[must_use]
    pub fn contains(&self, cell: GridCoordinate) -> bool {
        self.final_perimeter.contains(&cell) || self.final_floor.contains(&cell)
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.final_perimeter.len() + self.final_floor.len()
    }
}
