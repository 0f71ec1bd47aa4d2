use std::cmp::Reverse;
use std::collections::BTreeSet;

use tracing::trace;

use crate::grid::{Cardinal, GridCoordinate};

/// Diagonal offsets checked from each wall; the other two are covered by
/// visiting the partner cell.
const FORWARD_DIAGONALS: [(i32, i32); 2] = [(1, 1), (1, -1)];

/// Result of the orthogonal closure loop.
#[derive(Debug, Default)]
pub struct ClosureOutcome {
    /// Cells turned into Wall, in insertion order.
    pub added: Vec<GridCoordinate>,
    /// Number of full sweeps run.
    pub passes: usize,
    /// `false` if the pass cap stopped the loop with gaps still open.
    pub converged: bool,
}

/// Context shared by every sweep of the closure loop.
struct ClosureShape<'a> {
    shape: &'a BTreeSet<GridCoordinate>,
    deleted: &'a BTreeSet<GridCoordinate>,
}

impl ClosureShape<'_> {
    fn is_inside(&self, c: GridCoordinate) -> bool {
        self.shape.contains(&c) && !self.deleted.contains(&c)
    }

    /// The bridge cell to add between diagonal walls `a` and `b`, if any.
    ///
    /// Returns `None` when the two are already joined through a wall, or when
    /// neither bridge lies inside the shape (a convex outer corner). Carved
    /// and outside cells are never picked; among inside candidates the one
    /// with more wall neighbors wins, then the lower coordinate.
    fn bridge_for(
        &self,
        a: GridCoordinate,
        b: GridCoordinate,
        walls: &BTreeSet<GridCoordinate>,
    ) -> Option<GridCoordinate> {
        let bridges = [GridCoordinate::new(a.x, b.y), GridCoordinate::new(b.x, a.y)];
        if bridges.iter().any(|c| walls.contains(c)) {
            return None;
        }
        bridges
            .into_iter()
            .filter(|&c| self.is_inside(c))
            .min_by_key(|&c| (Reverse(wall_neighbor_count(c, walls)), c))
    }

    fn sweep(
        &self,
        walls: &mut BTreeSet<GridCoordinate>,
        added: &mut Vec<GridCoordinate>,
    ) -> usize {
        let snapshot: Vec<GridCoordinate> = walls.iter().copied().collect();
        let mut count = 0;
        for a in snapshot {
            for (dx, dy) in FORWARD_DIAGONALS {
                let Some(b) = a.offset(dx, dy).filter(|b| walls.contains(b)) else {
                    continue;
                };
                if let Some(bridge) = self.bridge_for(a, b, walls) {
                    trace!(?a, ?b, ?bridge, "closing diagonal wall gap");
                    walls.insert(bridge);
                    added.push(bridge);
                    count += 1;
                }
            }
        }
        count
    }

    fn has_open_gap(&self, walls: &BTreeSet<GridCoordinate>) -> bool {
        walls.iter().any(|&a| {
            FORWARD_DIAGONALS.iter().any(|&(dx, dy)| {
                a.offset(dx, dy)
                    .is_some_and(|b| walls.contains(&b) && self.bridge_for(a, b, walls).is_some())
            })
        })
    }
}

/// Number of orthogonal neighbors of `c` that are walls.
pub fn wall_neighbor_count(c: GridCoordinate, walls: &BTreeSet<GridCoordinate>) -> usize {
    Cardinal::ALL
        .iter()
        .filter(|&&dir| c.step(dir).is_some_and(|n| walls.contains(&n)))
        .count()
}

/// Adds bridge walls until no two walls touch only diagonally.
///
/// Runs at most `max_passes` sweeps. Hitting the cap is not an error: the
/// current wall set is kept and `converged` is reported as `false`.
pub fn close_diagonal_gaps(
    walls: &mut BTreeSet<GridCoordinate>,
    shape: &BTreeSet<GridCoordinate>,
    deleted: &BTreeSet<GridCoordinate>,
    max_passes: usize,
) -> ClosureOutcome {
    let ctx = ClosureShape { shape, deleted };
    let mut outcome = ClosureOutcome::default();

    while outcome.passes < max_passes {
        outcome.passes += 1;
        if ctx.sweep(walls, &mut outcome.added) == 0 {
            outcome.converged = true;
            return outcome;
        }
    }

    outcome.converged = !ctx.has_open_gap(walls);
    outcome
}
