//! Shared, reference-counted wall bookkeeping.
//!
//! Adjacent rooms share boundary walls. Each room that claims a coordinate
//! bumps its count, and the wall only disappears when the last room lets go.

mod doors;
mod scene;

pub use doors::{DoorLayer, DoorSet};
pub use scene::{MemoryScene, PlacedWall, SceneRenderer, SyncPatch, WallPrefab};

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::grid::GridCoordinate;
use crate::topology::WallRecord;

/// A tracked wall and the number of rooms claiming it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallRegistryEntry {
    /// Record of the first room that claimed the coordinate.
    pub record: WallRecord,
    /// Always at least 1 while the entry exists.
    pub reference_count: u32,
}

/// Registry of placed walls, keyed by grid coordinate.
#[derive(Debug, Clone, Default)]
pub struct WallRegistry {
    entries: BTreeMap<GridCoordinate, WallRegistryEntry>,
    door_exclusions: BTreeSet<GridCoordinate>,
}

impl WallRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the record's coordinate for one more room.
    ///
    /// Returns `false` without touching anything when a door occupies the
    /// coordinate or it is excluded for door placement.
    pub fn add<D: DoorLayer + ?Sized>(&mut self, record: WallRecord, doors: &D) -> bool {
        let cell = record.coordinate;
        if doors.has_door_at(cell) || self.door_exclusions.contains(&cell) {
            trace!(?cell, "wall add skipped, door cell");
            return false;
        }
        self.entries
            .entry(cell)
            .and_modify(|entry| entry.reference_count = entry.reference_count.saturating_add(1))
            .or_insert(WallRegistryEntry {
                record,
                reference_count: 1,
            });
        true
    }

    /// Releases one claim on `cell`.
    ///
    /// Returns the remaining count, or `None` if the coordinate was not
    /// tracked. When the count reaches zero the entry is dropped and any door
    /// sitting on the cell is removed with it.
    pub fn remove<D: DoorLayer + ?Sized>(
        &mut self,
        cell: GridCoordinate,
        doors: &mut D,
    ) -> Option<u32> {
        let entry = self.entries.get_mut(&cell)?;
        entry.reference_count = entry.reference_count.saturating_sub(1);
        let remaining = entry.reference_count;
        if remaining == 0 {
            self.entries.remove(&cell);
            if doors.remove_door_at(cell) {
                debug!(?cell, "door removed with its last wall");
            }
        }
        Some(remaining)
    }

    /// Turns the wall at `cell` into a door.
    ///
    /// The wall entry is dropped whatever its count, since walls and doors
    /// never share a cell. Later `remove` calls from the rooms that claimed it
    /// are no-ops. Returns the dropped entry.
    pub fn replace_with_door<D: DoorLayer + ?Sized>(
        &mut self,
        cell: GridCoordinate,
        doors: &mut D,
    ) -> Option<WallRegistryEntry> {
        let dropped = self.entries.remove(&cell);
        doors.place_door_at(cell);
        debug!(
            ?cell,
            claims = dropped.map_or(0, |e| e.reference_count),
            "wall replaced by door"
        );
        dropped
    }

    /// Diffs the registry against the set of materialized wall cells.
    #[must_use]
    pub fn sync(&self, materialized: &BTreeSet<GridCoordinate>) -> SyncPatch {
        let to_create = self
            .entries
            .iter()
            .filter(|(cell, _)| !materialized.contains(cell))
            .map(|(_, entry)| entry.record)
            .collect();
        let to_destroy = materialized
            .iter()
            .filter(|cell| !self.entries.contains_key(cell))
            .copied()
            .collect();
        SyncPatch {
            to_create,
            to_destroy,
        }
    }

    /// Brings a renderer in line with the registry.
    pub fn sync_scene<R: SceneRenderer + ?Sized>(&self, renderer: &mut R) -> SyncPatch {
        let patch = self.sync(&renderer.materialized_walls());
        if !patch.is_empty() {
            debug!(
                create = patch.to_create.len(),
                destroy = patch.to_destroy.len(),
                "syncing wall visuals"
            );
        }
        patch.apply(renderer);
        patch
    }

    /// Keeps walls off `cell` while a door is being placed there.
    pub fn exclude_for_door(&mut self, cell: GridCoordinate) {
        self.door_exclusions.insert(cell);
    }

    pub fn clear_door_exclusion(&mut self, cell: GridCoordinate) {
        self.door_exclusions.remove(&cell);
    }

    pub fn clear_door_exclusions(&mut self) {
        self.door_exclusions.clear();
    }

    #[must_use]
    pub fn is_door_excluded(&self, cell: GridCoordinate) -> bool {
        self.door_exclusions.contains(&cell)
    }

    /// Number of rooms claiming `cell`, 0 when untracked.
    #[must_use]
    pub fn reference_count(&self, cell: GridCoordinate) -> u32 {
        self.entries.get(&cell).map_or(0, |e| e.reference_count)
    }

    #[must_use]
    pub fn entry(&self, cell: GridCoordinate) -> Option<&WallRegistryEntry> {
        self.entries.get(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn coordinates(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.entries.keys().copied()
    }
}
