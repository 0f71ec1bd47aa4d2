//! Finalized rooms and their removal.

mod entity;

pub use entity::{RoomEntity, RoomId};

use slotmap::SlotMap;
use tracing::info;

use crate::error::{Result, RoomStoreError};
use crate::grid::{GridCoordinate, GridService, Occupant};
use crate::registry::{DoorLayer, SceneRenderer, WallRegistry};

/// Arena that owns all finalized rooms.
#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: SlotMap<RoomId, RoomEntity>,
}

impl RoomStore {
    /// Creates a new, empty room store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a finalized room, marks its cells on the grid and lays its
    /// floor tiles.
    ///
    /// Wall cells already held by another room keep their first claimant.
    pub fn insert<G, R>(&mut self, room: RoomEntity, grid: &mut G, scene: &mut R) -> RoomId
    where
        G: GridService + ?Sized,
        R: SceneRenderer + ?Sized,
    {
        let floor: Vec<GridCoordinate> = room.final_floor.iter().copied().collect();
        let perimeter: Vec<GridCoordinate> = room.final_perimeter.iter().copied().collect();
        let id = self.rooms.insert(room);

        for &cell in &floor {
            grid.set_occupant(cell, Occupant::RoomFloor(id));
            scene.create_floor_tile(cell);
        }
        for &cell in &perimeter {
            if grid.occupant(cell).is_none() {
                grid.set_occupant(cell, Occupant::RoomWall(id));
            }
        }
        info!(
            ?id,
            walls = perimeter.len(),
            floor = floor.len(),
            "room stored"
        );
        id
    }

    /// Returns the room, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `RoomStoreError::RoomNotFound` if `id` is not in the store.
    pub fn get(&self, id: RoomId) -> Result<&RoomEntity> {
        self.rooms
            .get(id)
            .ok_or_else(|| RoomStoreError::RoomNotFound.into())
    }

    /// Deletes a room.
    ///
    /// Releases one registry claim on every perimeter cell, destroys the
    /// room's floor tiles, frees its grid cells and syncs the wall visuals.
    /// Shared walls survive while another room still claims them.
    ///
    /// # Errors
    ///
    /// Returns `RoomStoreError::RoomNotFound` if `id` is not in the store.
    pub fn remove<D, R, G>(
        &mut self,
        id: RoomId,
        registry: &mut WallRegistry,
        doors: &mut D,
        scene: &mut R,
        grid: &mut G,
    ) -> Result<RoomEntity>
    where
        D: DoorLayer + ?Sized,
        R: SceneRenderer + ?Sized,
        G: GridService + ?Sized,
    {
        let room = self.rooms.remove(id).ok_or(RoomStoreError::RoomNotFound)?;

        for &cell in &room.final_perimeter {
            registry.remove(cell, doors);
            if grid.occupant(cell) != Some(Occupant::RoomWall(id)) {
                continue;
            }
            // A door may have dropped the registry entry while another room
            // still lists the cell in its perimeter.
            match self.wall_claimant(cell) {
                Some(other) => {
                    grid.set_occupant(cell, Occupant::RoomWall(other));
                }
                None => {
                    grid.clear_occupant(cell);
                }
            }
        }
        for &cell in &room.final_floor {
            scene.destroy_floor_tile(cell);
            if grid.occupant(cell) == Some(Occupant::RoomFloor(id)) {
                grid.clear_occupant(cell);
            }
        }
        let patch = registry.sync_scene(scene);

        info!(
            ?id,
            walls_destroyed = patch.to_destroy.len(),
            floor = room.final_floor.len(),
            "room removed"
        );
        Ok(room)
    }

    /// Room whose perimeter or floor contains `cell`, floor first.
    #[must_use]
    pub fn room_at(&self, cell: GridCoordinate) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|(_, room)| room.final_floor.contains(&cell))
            .or_else(|| {
                self.rooms
                    .iter()
                    .find(|(_, room)| room.final_perimeter.contains(&cell))
            })
            .map(|(id, _)| id)
    }

    fn wall_claimant(&self, cell: GridCoordinate) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|(_, room)| room.final_perimeter.contains(&cell))
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &RoomEntity)> {
        self.rooms.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RoomGridError;
    use crate::grid::{GridRect, GridSpace, WorldPoint};
    use crate::operations::{ClassificationMode, ClassifyWalls};
    use crate::registry::{DoorSet, MemoryScene};
    use crate::topology::{QuarterTurn, RoomShapeDraft};

    struct World {
        store: RoomStore,
        registry: WallRegistry,
        doors: DoorSet,
        scene: MemoryScene,
        grid: GridSpace,
    }

    impl World {
        fn new() -> Self {
            Self {
                store: RoomStore::new(),
                registry: WallRegistry::new(),
                doors: DoorSet::new(),
                scene: MemoryScene::new(),
                grid: GridSpace::new(1.0, WorldPoint::origin()).unwrap(),
            }
        }

        fn place_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> RoomId {
            let rect = GridRect::from_origin_size(GridCoordinate::new(x, y), w, h);
            let draft = RoomShapeDraft::from_rect(&rect);
            let records = ClassifyWalls::new(ClassificationMode::Rectangular(rect), QuarterTurn::Deg0)
                .execute(&draft);
            for record in records {
                self.registry.add(record, &self.doors);
            }
            let (final_perimeter, final_floor) = draft.into_parts();
            let room = RoomEntity {
                origin: rect.min(),
                size: (w, h),
                rotation: QuarterTurn::Deg0,
                final_perimeter,
                final_floor,
            };
            let id = self.store.insert(room, &mut self.grid, &mut self.scene);
            self.registry.sync_scene(&mut self.scene);
            id
        }

        fn remove(&mut self, id: RoomId) -> Result<RoomEntity> {
            self.store.remove(
                id,
                &mut self.registry,
                &mut self.doors,
                &mut self.scene,
                &mut self.grid,
            )
        }
    }

    #[test]
    fn insert_marks_grid_and_floor() {
        let mut world = World::new();
        let id = world.place_rect(0, 0, 4, 4);

        assert_eq!(world.grid.occupied_count(), 16);
        assert_eq!(
            world.grid.occupant(GridCoordinate::new(1, 1)),
            Some(Occupant::RoomFloor(id))
        );
        assert_eq!(world.scene.floor_tiles().len(), 4);
        assert_eq!(world.scene.wall_count(), 12);
        assert_eq!(world.store.room_at(GridCoordinate::new(0, 0)), Some(id));
    }

    #[test]
    fn remove_cleans_everything() {
        let mut world = World::new();
        let id = world.place_rect(0, 0, 4, 4);
        let room = world.remove(id).unwrap();

        assert_eq!(room.cell_count(), 16);
        assert!(world.store.is_empty());
        assert!(world.registry.is_empty());
        assert_eq!(world.scene.wall_count(), 0);
        assert!(world.scene.floor_tiles().is_empty());
        assert_eq!(world.grid.occupied_count(), 0);
    }

    #[test]
    fn shared_wall_moves_to_surviving_room() {
        let mut world = World::new();
        let a = world.place_rect(0, 0, 4, 4);
        let b = world.place_rect(3, 0, 4, 4);
        let shared = GridCoordinate::new(3, 1);
        assert_eq!(world.registry.reference_count(shared), 2);
        assert_eq!(world.grid.occupant(shared), Some(Occupant::RoomWall(a)));

        world.remove(a).unwrap();
        assert_eq!(world.registry.reference_count(shared), 1);
        assert_eq!(world.grid.occupant(shared), Some(Occupant::RoomWall(b)));
        assert!(world.scene.wall(shared).is_some());
        assert!(world.scene.wall(GridCoordinate::new(0, 1)).is_none());
    }

    #[test]
    fn shared_door_cell_stays_with_surviving_room() {
        let mut world = World::new();
        let a = world.place_rect(0, 0, 4, 4);
        let b = world.place_rect(3, 0, 4, 4);
        let door = GridCoordinate::new(3, 1);
        world.registry.replace_with_door(door, &mut world.doors);
        assert_eq!(world.registry.reference_count(door), 0);

        world.remove(a).unwrap();
        assert_eq!(world.grid.occupant(door), Some(Occupant::RoomWall(b)));
        assert!(world.doors.has_door_at(door));
        assert!(world.scene.wall(door).is_none());
        assert!(!world.grid.is_area_free(&GridRect::cell(door)));
    }

    #[test]
    fn unknown_room() {
        let mut world = World::new();
        let id = world.place_rect(0, 0, 3, 3);
        world.remove(id).unwrap();
        assert!(matches!(
            world.remove(id),
            Err(RoomGridError::RoomStore(RoomStoreError::RoomNotFound))
        ));
        assert!(world.store.get(id).is_err());
    }
}
