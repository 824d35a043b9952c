mod day1;
mod day2;
mod day3;
mod day4;
mod day5;
mod day6;
mod day7;
mod day8;
mod day9;

use anyhow::Result;

pub use day1::day1;
pub use day2::day2;
pub use day3::day3;
pub use day4::day4;
pub use day5::day5;
pub use day6::day6;
pub use day7::day7;
pub use day8::day8;
pub use day9::day9;

/// A day's solver with both answers rendered as text.
pub type Solution = fn(&str) -> Result<(String, String)>;

macro_rules! all_solutions {
    ($($day:ident),* $(,)?) => {
        /// Every implemented day, `ALL_SOLUTIONS[n - 1]` solving day `n`.
        pub const ALL_SOLUTIONS: &[Solution] = &[$(
            |input: &str| {
                let (part1, part2) = $day(input)?;
                Ok((part1.to_string(), part2.to_string()))
            },
        )*];
    };
}

all_solutions!(day1, day2, day3, day4, day5, day6, day7, day8, day9);
