use std::collections::BTreeSet;

use crate::grid::{Cardinal, GridCoordinate, Quadrant};
use crate::operations::reclassify::inner_corner_quadrant;
use crate::topology::{WallKind, WallOrientation};

/// Neighborhood of the draft seen by the freeform classifier.
pub struct FreeformContext<'a> {
    pub walls: &'a BTreeSet<GridCoordinate>,
    pub floor: &'a BTreeSet<GridCoordinate>,
    pub inner_corners: &'a BTreeSet<GridCoordinate>,
}

impl FreeformContext<'_> {
    // Neighbors past the edge of the plane are neither wall nor floor.
    fn is_wall(&self, c: Option<GridCoordinate>) -> bool {
        c.is_some_and(|c| self.walls.contains(&c))
    }

    fn is_floor(&self, c: Option<GridCoordinate>) -> bool {
        c.is_some_and(|c| self.floor.contains(&c))
    }

    /// Classifies a wall cell from its neighbor pattern.
    #[must_use]
    pub fn classify(&self, cell: GridCoordinate) -> (WallOrientation, WallKind) {
        if self.inner_corners.contains(&cell) {
            return (self.inner_corner_facing(cell), WallKind::InnerCorner);
        }

        let floor_sides: Vec<Cardinal> = Cardinal::ALL
            .into_iter()
            .filter(|&dir| self.is_floor(cell.step(dir)))
            .collect();

        if floor_sides.is_empty() {
            if let Some(q) = self.outer_corner_quadrant(cell) {
                return (
                    WallOrientation::facing_away_from_quadrant(q),
                    WallKind::OuterCorner,
                );
            }
        }

        if let [side] = floor_sides.as_slice() {
            return (WallOrientation::facing_away_from(*side), WallKind::Straight);
        }

        // Junctions, stubs and other irregular cells.
        if let Some(&side) = floor_sides.first() {
            return (WallOrientation::facing_away_from(side), WallKind::Straight);
        }
        if let Some(q) = Quadrant::ALL
            .into_iter()
            .find(|&q| self.is_floor(cell.diagonal(q)))
        {
            return (
                WallOrientation::facing_away_from_quadrant(q),
                WallKind::OuterCorner,
            );
        }
        (WallOrientation::North, WallKind::Straight)
    }

    /// Quadrant whose two sides are walls and whose diagonal is floor.
    fn outer_corner_quadrant(&self, cell: GridCoordinate) -> Option<Quadrant> {
        Quadrant::ALL.into_iter().find(|&q| {
            let (v, h) = q.sides();
            self.is_wall(cell.step(v))
                && self.is_wall(cell.step(h))
                && self.is_floor(cell.diagonal(q))
        })
    }

    /// Inner corners face the quadrant spanned by their two walls.
    fn inner_corner_facing(&self, cell: GridCoordinate) -> WallOrientation {
        let quadrant = inner_corner_quadrant(cell, self.walls, self.floor)
            .or_else(|| {
                Quadrant::ALL.into_iter().find(|&q| {
                    let (v, h) = q.sides();
                    self.is_wall(cell.step(v)) && self.is_wall(cell.step(h))
                })
            })
            .unwrap_or(Quadrant::NorthEast);
        WallOrientation::facing_away_from_quadrant(quadrant.opposite())
    }
}
