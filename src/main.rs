use std::{
    fmt::Display,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{bail, Result};
use clap::Parser;

use aoc2023::{load_input, ALL_SOLUTIONS, DEFAULT_INPUT_DIR};

#[derive(Debug, Parser)]
#[command(about = "Runs the Advent of Code 2023 solutions")]
struct Args {
    /// Only run this day, all implemented days if omitted
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    day: Option<u8>,

    /// Directory containing the puzzle inputs as `<day>.txt`
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let days: Vec<usize> = match args.day {
        Some(day) if usize::from(day) > ALL_SOLUTIONS.len() => {
            bail!("day {} is not implemented yet", day)
        }
        Some(day) => vec![usize::from(day)],
        None => (1..=ALL_SOLUTIONS.len()).collect(),
    };

    let mut total = Duration::default();
    for n in days {
        let input = match load_input(&args.input_dir, n) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("skipping day {}: {:#}", n, e);
                continue;
            }
        };
        total += execute_day(n, ALL_SOLUTIONS[n - 1], &input)?;
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn execute_day<S: Display, T: Display>(
    n: usize,
    f: fn(&str) -> Result<(S, T)>,
    input: &str,
) -> Result<Duration> {
    println!("Day {}:", n);

    let start = Instant::now();
    let (part1, part2) = f(input)?;
    let elapsed = start.elapsed();

    println!("  Part 1: {}", part1);
    println!("  Part 2: {}", part2);
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}
