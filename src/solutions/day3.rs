use anyhow::{anyhow, ensure, Result};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::{
    grid::{Axis, Coordinate, Direction, Grid, Line},
    parse_usize_from_bytes,
};

fn is_digit(b: &u8) -> bool {
    b.is_ascii_digit()
}

fn is_symbol(b: &u8) -> bool {
    !b.is_ascii_digit() && *b != b'.'
}

fn number_on(grid: &Grid<u8>, line: &Line) -> Result<usize> {
    let digits: Vec<u8> = grid.values_on(line).into_iter().copied().collect();
    parse_usize_from_bytes(&digits).ok_or_else(|| anyhow!("number at {line} is too large"))
}

fn checked_sum(a: usize, b: usize) -> Result<usize> {
    a.checked_add(b).ok_or_else(|| anyhow!("sum overflows"))
}

/// Product of the two part numbers touching `gear`, 0 unless exactly two do.
fn gear_ratio(grid: &Grid<u8>, gear: Coordinate) -> Result<usize> {
    // The same number is usually reached through several neighbors.
    let parts: FxHashSet<Line> = grid
        .neighbors(gear, true)
        .into_iter()
        .filter(|neighbor| is_digit(neighbor.value))
        .filter_map(|neighbor| grid.linear_search(neighbor.coordinate, Axis::Horizontal, is_digit))
        .collect();
    if parts.len() != 2 {
        return Ok(0);
    }
    parts.iter().try_fold(1usize, |ratio, line| {
        ratio
            .checked_mul(number_on(grid, line)?)
            .ok_or_else(|| anyhow!("gear ratio at {gear} overflows"))
    })
}

pub fn day3(input: &str) -> Result<(usize, usize)> {
    let mut rows = input.lines().filter(|line| !line.is_empty());
    let width = rows.next().map_or(0, str::len);
    ensure!(width > 0, "empty schematic");
    ensure!(
        rows.all(|row| row.len() == width),
        "schematic rows differ in width"
    );
    let grid = Grid::from_ascii(input);

    // A number starts at every digit whose western neighbor is no digit.
    let numbers: Vec<Line> = grid
        .find_all_matching(is_digit)
        .into_iter()
        .filter(|&c| !grid.value(c.moved(Direction::W, 1)).is_some_and(is_digit))
        .filter_map(|c| grid.linear_search(c, Axis::Horizontal, is_digit))
        .collect();
    let gears = grid.find_all(&b'*');
    log::debug!("{} numbers, {} gear candidates", numbers.len(), gears.len());

    let part1 = numbers
        .iter()
        .filter(|line| {
            line.coordinates().into_iter().any(|c| {
                grid.neighbors(c, true)
                    .iter()
                    .any(|neighbor| is_symbol(neighbor.value))
            })
        })
        .try_fold(0, |sum, line| checked_sum(sum, number_on(&grid, line)?))?;

    let part2 = gears
        .par_iter()
        .map(|&gear| gear_ratio(&grid, gear))
        .try_reduce(|| 0, checked_sum)?;

    Ok((part1, part2))
}
