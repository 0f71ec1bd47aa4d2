use std::collections::BTreeSet;

use crate::grid::{Cardinal, GridCoordinate, Quadrant};

/// Returns the quadrant spanned by the two walls of an inner-corner pattern.
///
/// The pattern is: exactly two orthogonal neighbors are walls, they are
/// perpendicular, and the diagonal cell of the opposite quadrant is floor.
/// Wall-North + Wall-East therefore needs floor at South-West and yields
/// `NorthEast`.
pub fn inner_corner_quadrant(
    cell: GridCoordinate,
    walls: &BTreeSet<GridCoordinate>,
    floor: &BTreeSet<GridCoordinate>,
) -> Option<Quadrant> {
    let mut wall_dirs = Cardinal::ALL
        .into_iter()
        .filter(|&dir| cell.step(dir).is_some_and(|n| walls.contains(&n)));
    let (Some(first), Some(second), None) = (wall_dirs.next(), wall_dirs.next(), wall_dirs.next())
    else {
        return None;
    };
    let quadrant = Quadrant::between(first, second)?;
    cell.diagonal(quadrant.opposite())
        .is_some_and(|d| floor.contains(&d))
        .then_some(quadrant)
}

/// Finds cells next to carved cells that sit at a concave vertex.
///
/// Only cells of the shape orthogonally or diagonally adjacent to `deleted`
/// are tested, and `protected` floor is never promoted.
pub fn detect_inner_corners(
    walls: &BTreeSet<GridCoordinate>,
    floor: &BTreeSet<GridCoordinate>,
    deleted: &BTreeSet<GridCoordinate>,
    protected: &BTreeSet<GridCoordinate>,
) -> BTreeSet<GridCoordinate> {
    let candidates: BTreeSet<GridCoordinate> = deleted
        .iter()
        .flat_map(|d| d.orthogonal_neighbors().chain(d.diagonal_neighbors()))
        .filter(|c| (walls.contains(c) || floor.contains(c)) && !protected.contains(c))
        .collect();

    candidates
        .into_iter()
        .filter(|&c| inner_corner_quadrant(c, walls, floor).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn north_east_walls_need_south_west_floor() {
        let walls = BTreeSet::from([c(0, 1), c(1, 0)]);
        let floor = BTreeSet::from([c(-1, -1)]);
        assert_eq!(
            inner_corner_quadrant(c(0, 0), &walls, &floor),
            Some(Quadrant::NorthEast)
        );
        assert_eq!(inner_corner_quadrant(c(0, 0), &walls, &BTreeSet::new()), None);
    }

    #[test]
    fn opposite_walls_do_not_qualify() {
        let walls = BTreeSet::from([c(0, 1), c(0, -1)]);
        let floor = BTreeSet::from([c(-1, -1), c(1, 1), c(1, -1), c(-1, 1)]);
        assert_eq!(inner_corner_quadrant(c(0, 0), &walls, &floor), None);
    }

    #[test]
    fn three_walls_do_not_qualify() {
        let walls = BTreeSet::from([c(0, 1), c(1, 0), c(-1, 0)]);
        let floor = BTreeSet::from([c(-1, -1), c(1, -1)]);
        assert_eq!(inner_corner_quadrant(c(0, 0), &walls, &floor), None);
    }

    #[test]
    fn only_cells_near_deleted_are_promoted() {
        // (0, 0) matches the pattern but nothing around it was carved.
        let walls = BTreeSet::from([c(0, 1), c(1, 0), c(0, 0)]);
        let floor = BTreeSet::from([c(-1, -1)]);
        let none = detect_inner_corners(&walls, &floor, &BTreeSet::new(), &BTreeSet::new());
        assert!(none.is_empty());

        let deleted = BTreeSet::from([c(1, 1)]);
        let found = detect_inner_corners(&walls, &floor, &deleted, &BTreeSet::new());
        assert_eq!(found, BTreeSet::from([c(0, 0)]));

        let protected = BTreeSet::from([c(0, 0)]);
        let kept = detect_inner_corners(&walls, &floor, &deleted, &protected);
        assert!(kept.is_empty());
    }
}
