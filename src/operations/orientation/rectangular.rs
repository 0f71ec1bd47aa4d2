use crate::grid::{GridCoordinate, GridRect};
use crate::topology::{QuarterTurn, WallKind, WallOrientation};

/// Classifies a border cell of an axis-aligned rectangle by the sides it
/// lies on.
///
/// Corners are checked before edges, so a one-cell-wide rectangle still gets
/// corner pieces at its ends. Returns `None` for interior or outside cells.
#[must_use]
pub fn classify_rect_cell(
    rect: &GridRect,
    cell: GridCoordinate,
    rotation: QuarterTurn,
) -> Option<(WallOrientation, WallKind)> {
    if !rect.is_border(cell) {
        return None;
    }
    let (min, max) = (rect.min(), rect.max());
    let (west, east, south, north) = (
        cell.x == min.x,
        cell.x == max.x,
        cell.y == min.y,
        cell.y == max.y,
    );

    let (orientation, kind) = match (west, east, south, north) {
        (true, _, true, _) => (WallOrientation::SouthWest, WallKind::OuterCorner),
        (_, true, true, _) => (WallOrientation::SouthEast, WallKind::OuterCorner),
        (true, _, _, true) => (WallOrientation::NorthWest, WallKind::OuterCorner),
        (_, true, _, true) => (WallOrientation::NorthEast, WallKind::OuterCorner),
        (_, _, true, _) => (WallOrientation::South, WallKind::Straight),
        (_, _, _, true) => (WallOrientation::North, WallKind::Straight),
        (true, _, _, _) => (WallOrientation::West, WallKind::Straight),
        _ => (WallOrientation::East, WallKind::Straight),
    };
    Some((orientation.rotated(rotation), kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn corners_and_edges() {
        let rect = GridRect::from_origin_size(c(10, 20), 4, 3);
        let at = |x, y| classify_rect_cell(&rect, c(x, y), QuarterTurn::Deg0);
        assert_eq!(at(10, 20), Some((WallOrientation::SouthWest, WallKind::OuterCorner)));
        assert_eq!(at(13, 20), Some((WallOrientation::SouthEast, WallKind::OuterCorner)));
        assert_eq!(at(10, 22), Some((WallOrientation::NorthWest, WallKind::OuterCorner)));
        assert_eq!(at(13, 22), Some((WallOrientation::NorthEast, WallKind::OuterCorner)));
        assert_eq!(at(11, 20), Some((WallOrientation::South, WallKind::Straight)));
        assert_eq!(at(12, 22), Some((WallOrientation::North, WallKind::Straight)));
        assert_eq!(at(10, 21), Some((WallOrientation::West, WallKind::Straight)));
        assert_eq!(at(13, 21), Some((WallOrientation::East, WallKind::Straight)));
        assert_eq!(at(11, 21), None);
    }

    #[test]
    fn rotation_remaps_facing() {
        let rect = GridRect::from_origin_size(c(0, 0), 3, 3);
        assert_eq!(
            classify_rect_cell(&rect, c(1, 0), QuarterTurn::Deg90),
            Some((WallOrientation::West, WallKind::Straight))
        );
        assert_eq!(
            classify_rect_cell(&rect, c(0, 0), QuarterTurn::Deg180),
            Some((WallOrientation::NorthEast, WallKind::OuterCorner))
        );
    }

    #[test]
    fn single_cell_is_a_corner() {
        let rect = GridRect::cell(c(0, 0));
        assert_eq!(
            classify_rect_cell(&rect, c(0, 0), QuarterTurn::Deg0),
            Some((WallOrientation::SouthWest, WallKind::OuterCorner))
        );
    }
}
