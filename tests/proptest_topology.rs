//! Property-based tests for draft classification and the wall registry.
//!
//! Run with: cargo test --test proptest_topology

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use roomgrid::grid::{GridCoordinate, GridRect};
use roomgrid::operations::{Reclassify, ReclassifyReport};
use roomgrid::registry::{DoorSet, WallRegistry};
use roomgrid::topology::{QuarterTurn, RoomShapeDraft, WallKind, WallOrientation, WallRecord};

// =============================================================================
// Strategies
// =============================================================================

/// A rectangle anchored at the origin.
fn arb_room() -> impl Strategy<Value = GridRect> {
    (1u32..=12, 1u32..=12)
        .prop_map(|(w, h)| GridRect::from_origin_size(GridCoordinate::new(0, 0), w, h))
}

/// A carve selection that may poke outside the room.
fn arb_selection() -> impl Strategy<Value = GridRect> {
    (-1i32..13, -1i32..13, -1i32..13, -1i32..13).prop_map(|(x0, y0, x1, y1)| {
        GridRect::from_corners(GridCoordinate::new(x0, y0), GridCoordinate::new(x1, y1))
    })
}

/// A room with a few carves applied the way a session applies them.
fn arb_carved_draft() -> impl Strategy<Value = (RoomShapeDraft, Option<ReclassifyReport>)> {
    (arb_room(), prop::collection::vec(arb_selection(), 1..=3)).prop_map(|(room, selections)| {
        let mut draft = RoomShapeDraft::from_rect(&room);
        let mut report = None;
        for selection in &selections {
            if draft.carve(selection) > 0 {
                report = Some(Reclassify::default().execute(&mut draft));
            }
        }
        (draft, report)
    })
}

/// A room of at least 7×7 with a hole two floor cells away from every side.
fn arb_room_with_hole() -> impl Strategy<Value = (GridRect, GridRect)> {
    (7i32..=14, 7i32..=14).prop_flat_map(|(w, h)| {
        (3..=w - 4, 3..=h - 4).prop_flat_map(move |(x0, y0)| {
            (x0..=w - 4, y0..=h - 4).prop_map(move |(x1, y1)| {
                let room = GridRect::from_corners(
                    GridCoordinate::new(0, 0),
                    GridCoordinate::new(w - 1, h - 1),
                );
                let hole =
                    GridRect::from_corners(GridCoordinate::new(x0, y0), GridCoordinate::new(x1, y1));
                (room, hole)
            })
        })
    })
}

/// `n` adds and `n` removes in a random order.
fn arb_interleaving() -> impl Strategy<Value = Vec<bool>> {
    (1usize..=6).prop_flat_map(|rooms| {
        let mut ops = vec![true; rooms];
        ops.extend(vec![false; rooms]);
        Just(ops).prop_shuffle()
    })
}

// =============================================================================
// Helpers
// =============================================================================

fn record_at(cell: GridCoordinate) -> WallRecord {
    WallRecord::new(cell, WallOrientation::North, WallKind::Straight, QuarterTurn::Deg0)
}

/// Wall pairs touching only diagonally with at least one bridge inside the
/// shape.
fn open_gaps(draft: &RoomShapeDraft) -> Vec<(GridCoordinate, GridCoordinate)> {
    let walls = draft.perimeter();
    let inside = |c: &GridCoordinate| draft.contains(*c) && !draft.deleted().contains(c);
    let mut gaps = Vec::new();
    for &a in walls {
        for (dx, dy) in [(1, 1), (1, -1)] {
            let Some(b) = a.offset(dx, dy).filter(|b| walls.contains(b)) else {
                continue;
            };
            let bridges = [GridCoordinate::new(a.x, b.y), GridCoordinate::new(b.x, a.y)];
            if bridges.iter().any(|c| walls.contains(c)) {
                continue;
            }
            if bridges.iter().any(inside) {
                gaps.push((a, b));
            }
        }
    }
    gaps
}

// =============================================================================
// Classification properties
// =============================================================================

proptest! {
    #[test]
    fn reclassify_is_idempotent((draft, _) in arb_carved_draft()) {
        let mut once = draft.clone();
        Reclassify::default().execute(&mut once);
        let mut twice = once.clone();
        Reclassify::default().execute(&mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn partition_holds((draft, report) in arb_carved_draft()) {
        prop_assert!(draft.perimeter().is_disjoint(draft.floor()));
        prop_assert!(draft.perimeter().is_disjoint(draft.deleted()));
        prop_assert!(draft.floor().is_disjoint(draft.deleted()));
        prop_assert!(draft.inner_corners().is_subset(draft.perimeter()));
        if let Some(report) = report {
            prop_assert!(report.protected_floor.is_subset(draft.floor()));
            prop_assert_eq!(report.inner_corners, draft.inner_corners().len());
        }
    }

    #[test]
    fn converged_closure_leaves_no_gaps((draft, report) in arb_carved_draft()) {
        if let Some(report) = report {
            prop_assume!(report.converged);
            let gaps = open_gaps(&draft);
            prop_assert!(gaps.is_empty(), "open gaps: {:?}", gaps);
        }
    }

    #[test]
    fn carving_never_grows_the_shape(room in arb_room(), selection in arb_selection()) {
        let mut draft = RoomShapeDraft::from_rect(&room);
        let before: BTreeSet<GridCoordinate> = draft.cells().collect();
        let removed = draft.carve(&selection);
        Reclassify::default().execute(&mut draft);
        let after: BTreeSet<GridCoordinate> = draft.cells().collect();
        prop_assert!(after.is_subset(&before));
        prop_assert_eq!(before.len() - after.len(), removed);
    }

    #[test]
    fn enclosed_hole_has_four_inner_corners((room, hole) in arb_room_with_hole()) {
        let mut draft = RoomShapeDraft::from_rect(&room);
        let removed = draft.carve(&hole);
        prop_assert_eq!(removed, hole.area());

        let report = Reclassify::default().execute(&mut draft);
        prop_assert!(report.converged);
        prop_assert_eq!(report.inner_corners, 4);

        let expected = BTreeSet::from([
            hole.min().offset(-1, -1).unwrap(),
            hole.max().offset(1, 1).unwrap(),
            GridCoordinate::new(hole.min().x - 1, hole.max().y + 1),
            GridCoordinate::new(hole.max().x + 1, hole.min().y - 1),
        ]);
        prop_assert_eq!(draft.inner_corners(), &expected);
    }
}

// =============================================================================
// Registry properties
// =============================================================================

proptest! {
    #[test]
    fn refcount_matches_model(ops in arb_interleaving()) {
        let cell = GridCoordinate::new(4, 0);
        let mut registry = WallRegistry::new();
        let mut doors = DoorSet::new();
        let mut model: u32 = 0;
        for add in ops {
            if add {
                prop_assert!(registry.add(record_at(cell), &doors));
                model += 1;
            } else {
                let remaining = registry.remove(cell, &mut doors);
                if model == 0 {
                    prop_assert_eq!(remaining, None);
                } else {
                    model -= 1;
                    prop_assert_eq!(remaining, Some(model));
                }
            }
            prop_assert_eq!(registry.reference_count(cell), model);
            prop_assert_eq!(registry.entry(cell).is_some(), model > 0);
        }
    }

    #[test]
    fn adds_then_removes_leave_nothing(rooms in 1u32..=8) {
        let cell = GridCoordinate::new(-2, 5);
        let mut registry = WallRegistry::new();
        let mut doors = DoorSet::new();
        for _ in 0..rooms {
            registry.add(record_at(cell), &doors);
        }
        prop_assert_eq!(registry.reference_count(cell), rooms);
        for expected in (0..rooms).rev() {
            prop_assert_eq!(registry.remove(cell, &mut doors), Some(expected));
        }
        prop_assert!(registry.is_empty());
        prop_assert_eq!(registry.remove(cell, &mut doors), None);
    }
}
