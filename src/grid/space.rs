use std::collections::BTreeMap;

use super::{GridCoordinate, GridRect, WorldPoint, WorldVector};
use crate::error::{GridError, Result};
use crate::room::RoomId;

/// Who holds a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    /// Floor of a finalized room.
    RoomFloor(RoomId),
    /// Perimeter of a finalized room. Walls may be shared, so this records
    /// the first claimant only.
    RoomWall(RoomId),
}

/// Grid-side services consumed by room authoring.
///
/// Converts between grid cells and world positions and keeps per-cell
/// occupancy.
pub trait GridService {
    /// World position of the center of `cell`.
    fn grid_to_world(&self, cell: GridCoordinate) -> WorldPoint;

    /// Cell containing the world position `point`.
    fn world_to_grid(&self, point: &WorldPoint) -> GridCoordinate;

    fn occupant(&self, cell: GridCoordinate) -> Option<Occupant>;

    /// Sets the occupant of `cell`, returning the previous one.
    fn set_occupant(&mut self, cell: GridCoordinate, occupant: Occupant) -> Option<Occupant>;

    /// Frees `cell`, returning the previous occupant.
    fn clear_occupant(&mut self, cell: GridCoordinate) -> Option<Occupant>;

    /// Marks the border ring of `rect` with `occupant`, keeping cells that are
    /// already held.
    fn occupy_perimeter(&mut self, rect: &GridRect, occupant: Occupant) {
        for cell in rect.border_cells() {
            if self.occupant(cell).is_none() {
                self.set_occupant(cell, occupant);
            }
        }
    }

    /// Returns `true` if no cell of `rect` is occupied.
    fn is_area_free(&self, rect: &GridRect) -> bool {
        rect.cells().all(|cell| self.occupant(cell).is_none())
    }

    /// Free cells of `rect`, x-major.
    fn free_cells(&self, rect: &GridRect) -> Vec<GridCoordinate> {
        rect.cells()
            .filter(|&cell| self.occupant(cell).is_none())
            .collect()
    }
}

/// A uniform square grid anchored at a world origin.
#[derive(Debug, Clone)]
pub struct GridSpace {
    cell_size: f64,
    origin: WorldPoint,
    occupancy: BTreeMap<GridCoordinate, Occupant>,
}

impl GridSpace {
    /// Creates a grid whose cell `(0, 0)` has its bottom-left corner at `origin`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidCellSize` if `cell_size` is not a positive,
    /// finite number.
    pub fn new(cell_size: f64, origin: WorldPoint) -> Result<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(cell_size).into());
        }
        Ok(Self {
            cell_size,
            origin,
            occupancy: BTreeMap::new(),
        })
    }

    /// Returns the cell edge length in world units.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupancy.len()
    }
}

impl GridService for GridSpace {
    fn grid_to_world(&self, cell: GridCoordinate) -> WorldPoint {
        let local = WorldVector::new(f64::from(cell.x) + 0.5, f64::from(cell.y) + 0.5);
        self.origin + local * self.cell_size
    }

    #[allow(clippy::cast_possible_truncation)]
    fn world_to_grid(&self, point: &WorldPoint) -> GridCoordinate {
        let local = (point - self.origin) / self.cell_size;
        GridCoordinate::new(local.x.floor() as i32, local.y.floor() as i32)
    }

    fn occupant(&self, cell: GridCoordinate) -> Option<Occupant> {
        self.occupancy.get(&cell).copied()
    }

    fn set_occupant(&mut self, cell: GridCoordinate, occupant: Occupant) -> Option<Occupant> {
        self.occupancy.insert(cell, occupant)
    }

    fn clear_occupant(&mut self, cell: GridCoordinate) -> Option<Occupant> {
        self.occupancy.remove(&cell)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use slotmap::SlotMap;

    use super::*;

    fn room_id() -> RoomId {
        let mut ids: SlotMap<RoomId, ()> = SlotMap::with_key();
        ids.insert(())
    }

    #[test]
    fn rejects_bad_cell_size() {
        assert!(GridSpace::new(0.0, WorldPoint::origin()).is_err());
        assert!(GridSpace::new(-1.0, WorldPoint::origin()).is_err());
        assert!(GridSpace::new(f64::NAN, WorldPoint::origin()).is_err());
    }

    #[test]
    fn cell_center_round_trips() {
        let grid = GridSpace::new(2.0, WorldPoint::new(10.0, -4.0)).unwrap();
        let cell = GridCoordinate::new(3, -2);
        let world = grid.grid_to_world(cell);
        assert_relative_eq!(world.x, 17.0);
        assert_relative_eq!(world.y, -7.0);
        assert_eq!(grid.world_to_grid(&world), cell);
    }

    #[test]
    fn negative_positions_floor_toward_minus_infinity() {
        let grid = GridSpace::new(1.0, WorldPoint::origin()).unwrap();
        assert_eq!(
            grid.world_to_grid(&WorldPoint::new(-0.25, 0.75)),
            GridCoordinate::new(-1, 0)
        );
    }

    #[test]
    fn occupancy_and_free_area() {
        let mut grid = GridSpace::new(1.0, WorldPoint::origin()).unwrap();
        let id = room_id();
        let rect = GridRect::from_origin_size(GridCoordinate::new(0, 0), 3, 3);
        assert!(grid.is_area_free(&rect));

        grid.occupy_perimeter(&rect, Occupant::RoomWall(id));
        assert_eq!(grid.occupied_count(), 8);
        assert!(!grid.is_area_free(&rect));
        assert_eq!(grid.free_cells(&rect), vec![GridCoordinate::new(1, 1)]);

        assert_eq!(
            grid.clear_occupant(GridCoordinate::new(0, 0)),
            Some(Occupant::RoomWall(id))
        );
        assert_eq!(grid.occupant(GridCoordinate::new(0, 0)), None);
    }
}
