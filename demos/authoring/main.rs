//! Headless room authoring walkthrough.
//!
//! Usage:
//! ```text
//! cargo run --example authoring
//! RUST_LOG=roomgrid=trace cargo run --example authoring
//! ```
//!
//! Draws two rooms sharing an edge, carves a notch into the second, prints
//! the wall layout, then deletes the first room.

use std::collections::BTreeMap;

use roomgrid::grid::{GridCoordinate, GridRect, GridSpace, WorldPoint};
use roomgrid::registry::{DoorSet, MemoryScene, WallRegistry};
use roomgrid::room::RoomStore;
use roomgrid::session::{RoomShapeSession, SessionConfig};
use roomgrid::topology::{QuarterTurn, WallKind};
use roomgrid::RoomGridError;

fn main() -> Result<(), RoomGridError> {
    // Default: WARN for everything, DEBUG for roomgrid.
    // Override with RUST_LOG env var (e.g. RUST_LOG=roomgrid=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("authoring=info".parse().unwrap_or_default())
        .add_directive("roomgrid=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut grid = GridSpace::new(0.5, WorldPoint::origin())?;
    let mut session = RoomShapeSession::new(SessionConfig::default());
    let mut registry = WallRegistry::new();
    let mut doors = DoorSet::new();
    let mut scene = MemoryScene::new();
    let mut rooms = RoomStore::new();

    // West room, plain rectangle.
    session.begin(GridCoordinate::new(0, 0))?;
    session.drag_to(GridCoordinate::new(5, 4))?;
    session.end_drag()?;
    session.confirm()?;
    let west = session.finalize(&mut registry, &doors)?;
    let west = rooms.insert(west, &mut grid, &mut scene);
    registry.sync_scene(&mut scene);

    // East room shares the x = 5 edge and gets a notch in its south-east corner.
    session.begin(GridCoordinate::new(5, 0))?;
    session.drag_to(GridCoordinate::new(12, 6))?;
    session.set_rotation(QuarterTurn::Deg90)?;
    session.end_drag()?;
    session.carve(&GridRect::from_corners(
        GridCoordinate::new(10, 0),
        GridCoordinate::new(12, 2),
    ))?;
    session.confirm()?;
    let east = session.finalize(&mut registry, &doors)?;
    rooms.insert(east, &mut grid, &mut scene);
    registry.sync_scene(&mut scene);

    print_layout(&registry);
    println!(
        "walls: {}, shared: {}",
        registry.len(),
        registry
            .coordinates()
            .filter(|&c| registry.reference_count(c) > 1)
            .count()
    );

    rooms.remove(west, &mut registry, &mut doors, &mut scene, &mut grid)?;
    println!(
        "after deleting the west room: {} walls, {} visuals, {} floor tiles",
        registry.len(),
        scene.wall_count(),
        scene.floor_tiles().len()
    );
    print_layout(&registry);

    Ok(())
}

/// ASCII map: `#` straight, `+` outer corner, `*` inner corner, `2` shared.
fn print_layout(registry: &WallRegistry) {
    let cells: BTreeMap<GridCoordinate, char> = registry
        .coordinates()
        .filter_map(|c| registry.entry(c).map(|e| (c, e)))
        .map(|(c, entry)| {
            let glyph = match (entry.reference_count, entry.record.kind) {
                (2.., _) => '2',
                (_, WallKind::Straight) => '#',
                (_, WallKind::OuterCorner) => '+',
                (_, WallKind::InnerCorner) => '*',
            };
            (c, glyph)
        })
        .collect();

    let Some((min_x, max_x)) = cells
        .keys()
        .map(|c| c.x)
        .min()
        .zip(cells.keys().map(|c| c.x).max())
    else {
        println!("(empty)");
        return;
    };
    let min_y = cells.keys().map(|c| c.y).min().unwrap_or(0);
    let max_y = cells.keys().map(|c| c.y).max().unwrap_or(0);

    for y in (min_y..=max_y).rev() {
        let row: String = (min_x..=max_x)
            .map(|x| {
                cells
                    .get(&GridCoordinate::new(x, y))
                    .copied()
                    .unwrap_or('.')
            })
            .collect();
        println!("{row}");
    }
}
