use anyhow::{ensure, Context, Result};

/// Predicts the values right after and right before `seq` from its repeated differences.
fn extrapolate(seq: &[i64]) -> (i64, i64) {
    let (Some(&first), Some(&last)) = (seq.first(), seq.last()) else {
        return (0, 0);
    };
    if seq.iter().all(|&v| v == first) {
        return (first, first);
    }
    let diffs: Vec<i64> = seq.windows(2).map(|w| w[1] - w[0]).collect();
    let (next, prev) = extrapolate(&diffs);
    (last + next, first - prev)
}

pub fn day9(input: &str) -> Result<(i64, i64)> {
    let mut part1 = 0;
    let mut part2 = 0;
    for (i, line) in input.lines().enumerate() {
        let seq = line
            .split_ascii_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<i64>, _>>()
            .with_context(|| format!("line {}", i + 1))?;
        ensure!(!seq.is_empty(), "line {} is empty", i + 1);

        let (next, prev) = extrapolate(&seq);
        part1 += next;
        part2 += prev;
    }

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day9() -> Result<()> {
        let example = indoc! {"
            0 3 6 9 12 15
            1 3 6 10 15 21
            10 13 16 21 30 45
        "};
        assert_eq!(day9(example)?, (114, 2));
        Ok(())
    }

    #[test]
    fn test_extrapolate() {
        assert_eq!(extrapolate(&[5]), (5, 5));
        assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), (68, 5));
        assert_eq!(extrapolate(&[-1, -3, -5]), (-7, 1));
    }
}
