//! Property-based tests for the grid helpers

use aoc2023::grid::{Axis, Coordinate, Direction, Grid, Line};
use proptest::prelude::*;

fn rows() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1usize..8, 1usize..8).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(0u8..4, width), height)
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-3isize..12, -3isize..12).prop_map(|(x, y)| Coordinate::new(x, y))
}

fn line() -> impl Strategy<Value = Line> {
    (coordinate(), direction(), 1usize..8)
        .prop_map(|(start, direction, length)| Line::from_direction(start, direction, length))
}

proptest! {
    /// Reading every cell back in row-major order reproduces the rows, anything outside is `None`.
    #[test]
    fn prop_value_round_trip(rows in rows(), probe in coordinate()) {
        let grid = Grid::new(rows.clone());
        let read: Vec<Vec<u8>> = (0..grid.height() as isize)
            .map(|y| {
                (0..grid.width() as isize)
                    .filter_map(|x| grid.value(Coordinate::new(x, y)).copied())
                    .collect()
            })
            .collect();
        prop_assert_eq!(&read, &rows);

        let inside = (0..grid.width() as isize).contains(&probe.x)
            && (0..grid.height() as isize).contains(&probe.y);
        prop_assert_eq!(grid.is_valid(probe), inside);
        prop_assert_eq!(grid.value(probe).is_some(), inside);
    }

    #[test]
    fn prop_neighbors_in_bounds(rows in rows(), origin in coordinate()) {
        let grid = Grid::new(rows);
        let all = grid.neighbors(origin, true);
        prop_assert!(all.len() <= 8);
        for neighbor in &all {
            prop_assert!(grid.is_valid(neighbor.coordinate));
            prop_assert!(origin.is_adjacent_to(neighbor.coordinate, true));
            prop_assert_eq!(neighbor.coordinate, origin + neighbor.direction.offset());
            prop_assert_eq!(Some(neighbor.value), grid.value(neighbor.coordinate));
        }

        let cardinal = grid.neighbors(origin, false);
        let expected: Vec<_> = all.into_iter().filter(|n| n.direction.is_cardinal()).collect();
        prop_assert_eq!(cardinal, expected);
    }

    #[test]
    fn prop_line_from_direction(start in coordinate(), direction in direction(), length in 1usize..20) {
        let line = Line::from_direction(start, direction, length);
        let coordinates = line.coordinates();
        prop_assert_eq!(coordinates.len(), length);
        prop_assert_eq!(line.len(), length);
        prop_assert_eq!(coordinates.first(), Some(&start));
        prop_assert_eq!(coordinates.last(), Some(&line.end()));
        for pair in coordinates.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], direction.offset());
        }
    }

    #[test]
    fn prop_intersects_symmetric(a in line(), b in line()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        prop_assert!(a.intersects(&a));
    }

    #[test]
    fn prop_ray_search_needs_matching_start(rows in rows(), start in coordinate(), direction in direction(), target in 0u8..4) {
        let grid = Grid::new(rows);
        let matches = grid.value(start) == Some(&target);
        let result = grid.ray_search(start, direction, |v| *v == target);
        prop_assert_eq!(result.is_some(), matches);
        if let Some(end) = result {
            let run = Line::new(start, end);
            prop_assert!(grid.values_on(&run).iter().all(|v| **v == target));
            prop_assert!(grid.value(end + direction.offset()) != Some(&target));
        }
    }

    #[test]
    fn prop_linear_search_is_maximal(rows in rows(), start in coordinate(), target in 0u8..4, vertical in any::<bool>()) {
        let grid = Grid::new(rows);
        let axis = if vertical { Axis::Vertical } else { Axis::Horizontal };
        let result = grid.linear_search(start, axis, |v| *v == target);
        prop_assert_eq!(result.is_some(), grid.value(start) == Some(&target));
        if let Some(line) = result {
            let [backward, forward] = axis.directions();
            prop_assert!(line.coordinates().contains(&start));
            prop_assert!(grid.values_on(&line).iter().all(|v| **v == target));
            prop_assert_eq!(grid.values_on(&line).len(), line.len());
            prop_assert!(grid.value(line.start() + backward.offset()) != Some(&target));
            prop_assert!(grid.value(line.end() + forward.offset()) != Some(&target));
        }
    }
}
