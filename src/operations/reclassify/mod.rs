mod closure;
mod inner_corner;
mod roles;

pub use closure::wall_neighbor_count;
pub use inner_corner::inner_corner_quadrant;

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::grid::GridCoordinate;
use crate::topology::RoomShapeDraft;

/// Default cap on closure sweeps.
pub const DEFAULT_MAX_CLOSURE_PASSES: usize = 64;

/// Parameters for [`Reclassify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReclassifyConfig {
    max_closure_passes: usize,
}

impl ReclassifyConfig {
    /// Creates a config with the given closure sweep cap.
    ///
    /// A cap of zero disables the closure step.
    #[must_use]
    pub fn new(max_closure_passes: usize) -> Self {
        Self { max_closure_passes }
    }

    #[must_use]
    pub fn max_closure_passes(&self) -> usize {
        self.max_closure_passes
    }
}

impl Default for ReclassifyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CLOSURE_PASSES)
    }
}

/// What a [`Reclassify`] run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReclassifyReport {
    /// Floor from the first role pass, minus cells the closure turned into
    /// walls. Always a subset of the draft's floor afterwards.
    pub protected_floor: BTreeSet<GridCoordinate>,
    /// Bridge walls added by the closure, in insertion order.
    pub closure_added: Vec<GridCoordinate>,
    /// Closure sweeps run.
    pub closure_passes: usize,
    /// `false` if the sweep cap was hit with diagonal gaps still open.
    pub converged: bool,
    /// Number of inner corners found.
    pub inner_corners: usize,
}

/// Turns a draft's raw cell sets into a consistent wall/floor partition.
///
/// The run is deterministic and depends only on the shape
/// (`perimeter ∪ floor`) and the carved cells, so running it twice gives the
/// same result as running it once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reclassify {
    config: ReclassifyConfig,
}

impl Reclassify {
    /// Creates a new `Reclassify` operation.
    #[must_use]
    pub fn new(config: ReclassifyConfig) -> Self {
        Self { config }
    }

    /// Executes the classification, rewriting the draft's perimeter, floor
    /// and inner-corner sets.
    pub fn execute(&self, draft: &mut RoomShapeDraft) -> ReclassifyReport {
        let deleted = draft.deleted().clone();
        let shape: BTreeSet<GridCoordinate> =
            draft.cells().filter(|c| !deleted.contains(c)).collect();

        // Step 1: role pass.
        let first = roles::assign_roles(&shape, &deleted);

        // Step 2: snapshot the floor before closure.
        let mut protected = first.floor;

        // Step 3: close diagonal-only wall contacts.
        let mut walls = first.walls;
        let closure = closure::close_diagonal_gaps(
            &mut walls,
            &shape,
            &deleted,
            self.config.max_closure_passes,
        );
        if !closure.converged {
            warn!(
                passes = closure.passes,
                added = closure.added.len(),
                "wall closure hit its pass cap, keeping current perimeter"
            );
        }
        for c in &closure.added {
            protected.remove(c);
        }

        // Step 4: role pass again, protected floor stays floor.
        let second = roles::assign_roles_protected(&shape, &deleted, &walls, &protected);
        let mut walls = second.walls;
        let mut floor = second.floor;

        // Step 5: inner corners at concave vertices.
        let inner = inner_corner::detect_inner_corners(&walls, &floor, &deleted, &protected);
        for c in &inner {
            floor.remove(c);
            walls.insert(*c);
        }

        debug!(
            walls = walls.len(),
            floor = floor.len(),
            bridges = closure.added.len(),
            inner_corners = inner.len(),
            "reclassified draft"
        );

        let report = ReclassifyReport {
            protected_floor: protected,
            closure_added: closure.added,
            closure_passes: closure.passes,
            converged: closure.converged,
            inner_corners: inner.len(),
        };
        draft.set_partition(walls, floor, inner);
        report
    }
}
