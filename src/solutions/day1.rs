use aho_corasick::AhoCorasick;
use anyhow::Result;

const PATTERNS: [&str; 18] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "one", "two", "three", "four", "five", "six",
    "seven", "eight", "nine",
];

pub fn day1(input: &str) -> Result<(usize, usize)> {
    // NOTE: regex doesn't work since it doesn't support overlapping matches ("twone")
    let ac = AhoCorasick::new(PATTERNS)?;

    let mut sum_part1 = 0;
    let mut sum_part2 = 0;
    let mut found = Vec::new();

    for line in input.lines() {
        found.clear();
        found.extend(ac.find_overlapping_iter(line).map(|mat| {
            let pattern = mat.pattern().as_usize();
            // (start, digit, written as a numeral)
            (mat.start(), pattern % 9 + 1, pattern < 9)
        }));
        found.sort_unstable_by_key(|&(start, _, _)| start);

        sum_part1 += calibration_value(
            found
                .iter()
                .filter(|&&(_, _, numeral)| numeral)
                .map(|&(_, digit, _)| digit),
        );
        sum_part2 += calibration_value(found.iter().map(|&(_, digit, _)| digit));
    }

    Ok((sum_part1, sum_part2))
}

/// First and last digit as a two-digit number, 0 for lines without digits.
fn calibration_value(mut digits: impl Iterator<Item = usize>) -> usize {
    match digits.next() {
        Some(first) => first * 10 + digits.last().unwrap_or(first),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day1() -> Result<()> {
        let example_part1 = indoc! {"
            1abc2
            pqr3stu8vwx
            a1b2c3d4e5f
            treb7uchet
        "};
        assert_eq!(day1(example_part1)?, (142, 142));

        let example_part2 = indoc! {"
            two1nine
            eightwothree
            abcone2threexyz
            xtwone3four
            4nineeightseven2
            zoneight234
            7pqrstsixteen
        "};
        assert_eq!(day1(example_part2)?.1, 281);
        assert_eq!(day1("twone\n")?, (0, 21));
        assert_eq!(day1("")?, (0, 0));
        Ok(())
    }
}
