use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::grid::GridCoordinate;
use crate::topology::{WallKind, WallRecord};

/// Visual side of the room kernel.
///
/// The kernel never reads visuals back except for the set of materialized
/// wall cells, which it diffs against the registry.
pub trait SceneRenderer {
    /// Cells that currently have a wall object.
    fn materialized_walls(&self) -> BTreeSet<GridCoordinate>;

    fn create_wall(&mut self, record: &WallRecord);

    fn destroy_wall(&mut self, cell: GridCoordinate);

    fn create_floor_tile(&mut self, cell: GridCoordinate);

    fn destroy_floor_tile(&mut self, cell: GridCoordinate);
}

/// Incremental visual update computed by
/// [`WallRegistry::sync`](super::WallRegistry::sync).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPatch {
    /// Registry walls with no visual yet.
    pub to_create: Vec<WallRecord>,
    /// Visuals with no registry wall behind them.
    pub to_destroy: Vec<GridCoordinate>,
}

impl SyncPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_destroy.is_empty()
    }

    /// Applies the patch, destroying before creating.
    pub fn apply<R: SceneRenderer + ?Sized>(&self, renderer: &mut R) {
        for &cell in &self.to_destroy {
            trace!(?cell, "destroying wall visual");
            renderer.destroy_wall(cell);
        }
        for record in &self.to_create {
            trace!(cell = ?record.coordinate, kind = ?record.kind, "creating wall visual");
            renderer.create_wall(record);
        }
    }
}

/// Prefab used for a wall segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallPrefab {
    StraightWall,
    OuterCornerWall,
    InnerCornerWall,
}

impl WallPrefab {
    /// Prefab lookup by wall kind.
    #[must_use]
    pub const fn for_kind(kind: WallKind) -> Self {
        match kind {
            WallKind::Straight => Self::StraightWall,
            WallKind::OuterCorner => Self::OuterCornerWall,
            WallKind::InnerCorner => Self::InnerCornerWall,
        }
    }
}

/// A placed wall visual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedWall {
    pub prefab: WallPrefab,
    pub record: WallRecord,
}

/// In-memory scene, for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    walls: BTreeMap<GridCoordinate, PlacedWall>,
    floor_tiles: BTreeSet<GridCoordinate>,
    created: usize,
    destroyed: usize,
}

impl MemoryScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn wall(&self, cell: GridCoordinate) -> Option<&PlacedWall> {
        self.walls.get(&cell)
    }

    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    #[must_use]
    pub fn floor_tiles(&self) -> &BTreeSet<GridCoordinate> {
        &self.floor_tiles
    }

    /// Total wall objects created so far.
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Total wall objects destroyed so far.
    #[must_use]
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }
}

impl SceneRenderer for MemoryScene {
    fn materialized_walls(&self) -> BTreeSet<GridCoordinate> {
        self.walls.keys().copied().collect()
    }

    fn create_wall(&mut self, record: &WallRecord) {
        self.created += 1;
        self.walls.insert(
            record.coordinate,
            PlacedWall {
                prefab: WallPrefab::for_kind(record.kind),
                record: *record,
            },
        );
    }

    fn destroy_wall(&mut self, cell: GridCoordinate) {
        if self.walls.remove(&cell).is_some() {
            self.destroyed += 1;
        }
    }

    fn create_floor_tile(&mut self, cell: GridCoordinate) {
        self.floor_tiles.insert(cell);
    }

    fn destroy_floor_tile(&mut self, cell: GridCoordinate) {
        self.floor_tiles.remove(&cell);
    }
}
