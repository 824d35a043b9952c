use std::ops::Range;

use anyhow::{anyhow, ensure, Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct MapEntry {
    source: Range<u64>,
    destination: u64,
}

impl MapEntry {
    fn translate(&self, value: u64) -> u64 {
        value - self.source.start + self.destination
    }
}

/// One `x-to-y map:` block, entries sorted by source start.
#[derive(Debug)]
struct Map {
    entries: Vec<MapEntry>,
}

impl Map {
    fn parse(block: &str) -> Result<Self> {
        let mut lines = block.lines();
        let header = lines.next().unwrap_or_default();
        ensure!(header.ends_with("map:"), "expected map header, got {header:?}");

        let mut entries = lines
            .map(|line| -> Result<MapEntry> {
                let numbers = parse_numbers(line)?;
                let &[destination, source, len] = numbers.as_slice() else {
                    return Err(anyhow!("expected three numbers in {line:?}"));
                };
                ensure!(len > 0, "empty range in {line:?}");
                let end = source
                    .checked_add(len)
                    .ok_or_else(|| anyhow!("range overflows in {line:?}"))?;
                ensure!(
                    destination.checked_add(len).is_some(),
                    "range overflows in {line:?}"
                );
                Ok(MapEntry {
                    source: source..end,
                    destination,
                })
            })
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("in {header:?}"))?;
        entries.sort_unstable_by_key(|entry| entry.source.start);
        Ok(Self { entries })
    }

    fn map(&self, value: u64) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.source.contains(&value))
            .map_or(value, |entry| entry.translate(value))
    }

    /// Maps a whole interval, splitting it wherever it crosses an entry boundary.
    fn map_range(&self, mut range: Range<u64>, out: &mut Vec<Range<u64>>) {
        for entry in &self.entries {
            if range.is_empty() {
                return;
            }
            if entry.source.end <= range.start {
                continue;
            }
            if entry.source.start >= range.end {
                break;
            }
            if range.start < entry.source.start {
                // Unmapped gap before this entry passes through.
                out.push(range.start..entry.source.start);
                range.start = entry.source.start;
            }
            let end = range.end.min(entry.source.end);
            out.push(entry.translate(range.start)..entry.translate(end - 1) + 1);
            range.start = end;
        }
        if !range.is_empty() {
            out.push(range);
        }
    }
}

fn parse_numbers(s: &str) -> Result<Vec<u64>> {
    Ok(s.split_ascii_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()?)
}

pub fn day5(input: &str) -> Result<(u64, u64)> {
    let input = input.replace("\r\n", "\n");
    let mut blocks = input.split("\n\n");
    let seeds = blocks
        .next()
        .and_then(|line| line.trim().strip_prefix("seeds:"))
        .ok_or_else(|| anyhow!("missing seeds"))?;
    let seeds = parse_numbers(seeds).context("in seeds")?;
    let maps = blocks
        .filter(|block| !block.trim().is_empty())
        .map(|block| Map::parse(block.trim()))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("{} seeds through {} maps", seeds.len(), maps.len());

    let part1 = seeds
        .iter()
        .map(|&seed| maps.iter().fold(seed, |value, map| map.map(value)))
        .min()
        .ok_or_else(|| anyhow!("no seeds"))?;

    ensure!(seeds.len() % 2 == 0, "seed ranges need a start and a length");
    let mut ranges: Vec<Range<u64>> = seeds
        .chunks_exact(2)
        .map(|pair| pair[0]..pair[0] + pair[1])
        .collect();
    let mut next = Vec::new();
    for map in &maps {
        for range in ranges.drain(..) {
            map.map_range(range, &mut next);
        }
        std::mem::swap(&mut ranges, &mut next);
    }
    let part2 = ranges
        .iter()
        .filter(|range| !range.is_empty())
        .map(|range| range.start)
        .min()
        .ok_or_else(|| anyhow!("no seed ranges"))?;

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        seeds: 79 14 55 13

        seed-to-soil map:
        50 98 2
        52 50 48

        soil-to-fertilizer map:
        0 15 37
        37 52 2
        39 0 15

        fertilizer-to-water map:
        49 53 8
        0 11 42
        42 0 7
        57 7 4

        water-to-light map:
        88 18 7
        18 25 70

        light-to-temperature map:
        45 77 23
        81 45 19
        68 64 13

        temperature-to-humidity map:
        0 69 1
        1 0 69

        humidity-to-location map:
        60 56 37
        56 93 4
    "};

    #[test]
    fn test_day5() -> Result<()> {
        assert_eq!(day5(EXAMPLE)?, (35, 46));
        Ok(())
    }

    #[test]
    fn test_map_range_splits() -> Result<()> {
        let map = Map::parse("a-to-b map:\n100 10 5\n200 20 5")?;
        assert_eq!(map.map(12), 102);
        assert_eq!(map.map(17), 17);

        let mut out = Vec::new();
        map.map_range(5..23, &mut out);
        assert_eq!(out, vec![5..10, 100..105, 15..20, 200..203]);
        Ok(())
    }

    #[test]
    fn test_malformed_maps() {
        assert!(day5("seeds: 1 10\n\na-to-b map:\n100 5 0\n").is_err());
        assert!(Map::parse("a-to-b map:\n0 18446744073709551615 2").is_err());
        assert!(Map::parse("a-to-b map:\n18446744073709551615 0 2").is_err());
        assert!(Map::parse("a-to-b map:\n1 2").is_err());
    }
}
