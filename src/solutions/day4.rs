use anyhow::{anyhow, Context, Result};
use rustc_hash::FxHashSet;

/// Number of the player's numbers that are also winning numbers.
fn match_count(line: &str) -> Result<usize> {
    let colon = memchr::memchr(b':', line.as_bytes()).ok_or_else(|| anyhow!("missing ':'"))?;
    let (winning, have) = line[colon + 1..]
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|'"))?;

    let winning = winning
        .split_ascii_whitespace()
        .map(str::parse)
        .collect::<Result<FxHashSet<u32>, _>>()?;
    let mut count = 0;
    for number in have.split_ascii_whitespace() {
        if winning.contains(&number.parse::<u32>()?) {
            count += 1;
        }
    }
    Ok(count)
}

/// Total number of cards once every card has handed out its copies.
fn total_cards(matches: &[usize]) -> usize {
    let mut copies = vec![1; matches.len()];
    for (card, &won) in matches.iter().enumerate() {
        let end = (card + 1 + won).min(matches.len());
        for next in card + 1..end {
            copies[next] += copies[card];
        }
    }
    copies.iter().sum()
}

pub fn day4(input: &str) -> Result<(usize, usize)> {
    let matches = input
        .lines()
        .enumerate()
        .map(|(i, line)| match_count(line).with_context(|| format!("card on line {}", i + 1)))
        .collect::<Result<Vec<_>>>()?;

    let part1 = matches
        .iter()
        .filter(|&&m| m > 0)
        .map(|&m| 1usize << (m - 1))
        .sum();
    let part2 = total_cards(&matches);

    Ok((part1, part2))
}
