use std::collections::BTreeSet;

use super::wall::CellRole;
use crate::grid::{GridCoordinate, GridRect};

/// The in-progress cell sets of a room being authored.
///
/// `perimeter`, `floor` and `deleted` are pairwise disjoint. `inner_corners`
/// is derived by [`Reclassify`](crate::operations::Reclassify) and is always a
/// subset of `perimeter`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomShapeDraft {
    perimeter: BTreeSet<GridCoordinate>,
    floor: BTreeSet<GridCoordinate>,
    deleted: BTreeSet<GridCoordinate>,
    inner_corners: BTreeSet<GridCoordinate>,
}

impl RoomShapeDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft holding a single wall cell.
    #[must_use]
    pub fn single_cell(at: GridCoordinate) -> Self {
        Self::from_rect(&GridRect::cell(at))
    }

    /// Border cells become perimeter and interior cells become floor.
    ///
    /// This is a pure index test; no neighbor analysis is needed while the
    /// shape is a known rectangle.
    #[must_use]
    pub fn from_rect(rect: &GridRect) -> Self {
        let mut draft = Self::new();
        draft.reset_to_rect(rect);
        draft
    }

    /// Builds a draft from raw sets.
    ///
    /// Overlaps are resolved so the sets stay disjoint: `deleted` wins over
    /// both others, and `perimeter` wins over `floor`.
    #[must_use]
    pub fn from_sets(
        perimeter: BTreeSet<GridCoordinate>,
        floor: BTreeSet<GridCoordinate>,
        deleted: BTreeSet<GridCoordinate>,
    ) -> Self {
        let perimeter: BTreeSet<_> = perimeter.difference(&deleted).copied().collect();
        let floor = floor
            .iter()
            .filter(|c| !perimeter.contains(c) && !deleted.contains(c))
            .copied()
            .collect();
        Self {
            perimeter,
            floor,
            deleted,
            inner_corners: BTreeSet::new(),
        }
    }

    /// Replaces the whole draft by the partition of `rect`.
    pub fn reset_to_rect(&mut self, rect: &GridRect) {
        self.perimeter = rect.border_cells().collect();
        self.floor = rect.interior_cells().collect();
        self.deleted.clear();
        self.inner_corners.clear();
    }

    #[must_use]
    pub fn perimeter(&self) -> &BTreeSet<GridCoordinate> {
        &self.perimeter
    }

    #[must_use]
    pub fn floor(&self) -> &BTreeSet<GridCoordinate> {
        &self.floor
    }

    #[must_use]
    pub fn deleted(&self) -> &BTreeSet<GridCoordinate> {
        &self.deleted
    }

    #[must_use]
    pub fn inner_corners(&self) -> &BTreeSet<GridCoordinate> {
        &self.inner_corners
    }

    /// Returns `true` if `c` is part of the shape (perimeter or floor).
    #[must_use]
    pub fn contains(&self, c: GridCoordinate) -> bool {
        self.perimeter.contains(&c) || self.floor.contains(&c)
    }

    /// Role of `c`, or `None` if it is outside the shape.
    #[must_use]
    pub fn role(&self, c: GridCoordinate) -> Option<CellRole> {
        if self.perimeter.contains(&c) {
            Some(CellRole::Wall)
        } else if self.floor.contains(&c) {
            Some(CellRole::Floor)
        } else {
            None
        }
    }

    /// Number of cells in the shape.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.perimeter.len() + self.floor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.perimeter.is_empty() && self.floor.is_empty()
    }

    /// All shape cells, x-major.
    pub fn cells(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.perimeter.union(&self.floor).copied()
    }

    /// Smallest rectangle enclosing the shape.
    #[must_use]
    pub fn bounds(&self) -> Option<GridRect> {
        let mut cells = self.cells();
        let first = cells.next()?;
        let (min, max) = cells.fold((first, first), |(lo, hi), c| {
            (
                GridCoordinate::new(lo.x.min(c.x), lo.y.min(c.y)),
                GridCoordinate::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        });
        Some(GridRect::from_corners(min, max))
    }

    /// Moves every shape cell inside `selection` into `deleted`.
    ///
    /// Cells of the selection outside the shape are ignored. Returns the
    /// number of cells removed.
    pub fn carve(&mut self, selection: &GridRect) -> usize {
        let hit: Vec<GridCoordinate> = self
            .cells()
            .filter(|&c| selection.contains(c))
            .collect();
        for c in &hit {
            self.perimeter.remove(c);
            self.floor.remove(c);
            self.inner_corners.remove(c);
            self.deleted.insert(*c);
        }
        hit.len()
    }

    /// Writes a classified partition back into the draft.
    pub(crate) fn set_partition(
        &mut self,
        perimeter: BTreeSet<GridCoordinate>,
        floor: BTreeSet<GridCoordinate>,
        inner_corners: BTreeSet<GridCoordinate>,
    ) {
        debug_assert!(perimeter.is_disjoint(&floor));
        debug_assert!(inner_corners.is_subset(&perimeter));
        self.perimeter = perimeter;
        self.floor = floor;
        self.inner_corners = inner_corners;
    }

    /// Consumes the draft, returning `(perimeter, floor)`.
    #[must_use]
    pub fn into_parts(self) -> (BTreeSet<GridCoordinate>, BTreeSet<GridCoordinate>) {
        (self.perimeter, self.floor)
    }
}
