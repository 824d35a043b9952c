use anyhow::{anyhow, ensure, Result};
use regex::Regex;

/// Number of hold times beating `record` in a race lasting `time`.
///
/// The distance `t * (time - t)` is symmetric around `time / 2`, so finding the first winning
/// hold time on the rising half is enough.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let distance = |hold: u64| hold * (time - hold);
    let half = time / 2;
    if distance(half) <= record {
        return 0;
    }
    // distance(hi) always beats the record
    let (mut lo, mut hi) = (0, half);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if distance(mid) > record {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    time - 2 * hi + 1
}

pub fn day6(input: &str) -> Result<(u64, u64)> {
    let number_re = Regex::new("[0-9]+")?;
    let mut rows = input.lines().filter(|line| !line.trim().is_empty());
    let (Some(times), Some(records)) = (rows.next(), rows.next()) else {
        return Err(anyhow!("expected a time and a distance row"));
    };
    ensure!(times.starts_with("Time:"), "missing \"Time:\" row");
    ensure!(records.starts_with("Distance:"), "missing \"Distance:\" row");

    let parse_row = |row: &str| -> Result<Vec<u64>> {
        Ok(number_re
            .find_iter(row)
            .map(|m| m.as_str().parse())
            .collect::<Result<_, _>>()?)
    };
    let (times_parsed, records_parsed) = (parse_row(times)?, parse_row(records)?);
    ensure!(
        times_parsed.len() == records_parsed.len(),
        "{} times but {} distances",
        times_parsed.len(),
        records_parsed.len()
    );

    let part1 = times_parsed
        .iter()
        .zip(&records_parsed)
        .map(|(&time, &record)| ways_to_win(time, record))
        .product();

    // Part 2 reads each row as a single number with the spaces removed.
    let kerned = |row: &str| -> Result<u64> {
        let digits: String = row.chars().filter(char::is_ascii_digit).collect();
        Ok(digits.parse()?)
    };
    let part2 = ways_to_win(kerned(times)?, kerned(records)?);

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day6() -> Result<()> {
        let example = indoc! {"
            Time:      7  15   30
            Distance:  9  40  200
        "};
        assert_eq!(day6(example)?, (288, 71503));
        Ok(())
    }

    #[test]
    fn test_ways_to_win() {
        assert_eq!(ways_to_win(7, 9), 4);
        assert_eq!(ways_to_win(30, 200), 9);
        assert_eq!(ways_to_win(4, 4), 0);
        assert_eq!(ways_to_win(0, 0), 0);
    }
}
