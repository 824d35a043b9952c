use anyhow::{anyhow, bail, Context, Result};
use regex::Regex;

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    red: usize,
    green: usize,
    blue: usize,
}

impl Cubes {
    fn fits_in(self, bag: Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(self) -> usize {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
struct Game {
    id: usize,
    draws: Vec<Cubes>,
}

impl Game {
    /// Fewest cubes of each colour that make every draw possible.
    fn minimum_bag(&self) -> Cubes {
        self.draws.iter().fold(Cubes::default(), |acc, &draw| acc.max(draw))
    }
}

fn parse_game(cube_re: &Regex, line: &str) -> Result<Game> {
    let colon = memchr::memchr(b':', line.as_bytes()).ok_or_else(|| anyhow!("missing ':'"))?;
    let id = line[..colon]
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("missing \"Game\" prefix"))?
        .parse()?;

    let draws = line[colon + 1..]
        .split(';')
        .map(|draw| -> Result<Cubes> {
            let mut cubes = Cubes::default();
            for item in draw.split(',') {
                let caps = cube_re
                    .captures(item.trim())
                    .ok_or_else(|| anyhow!("malformed cube count {:?}", item.trim()))?;
                let count = caps[1].parse()?;
                match &caps[2] {
                    "red" => cubes.red = count,
                    "green" => cubes.green = count,
                    "blue" => cubes.blue = count,
                    colour => bail!("unexpected colour {colour}"),
                }
            }
            Ok(cubes)
        })
        .collect::<Result<_>>()?;

    Ok(Game { id, draws })
}

pub fn day2(input: &str) -> Result<(usize, usize)> {
    let cube_re = Regex::new(r"^([0-9]+) ([a-z]+)$")?;

    let games = input
        .lines()
        .enumerate()
        .map(|(i, line)| parse_game(&cube_re, line).with_context(|| format!("line {}", i + 1)))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("parsed {} games", games.len());

    let part1 = games
        .iter()
        .filter(|game| game.draws.iter().all(|draw| draw.fits_in(BAG)))
        .map(|game| game.id)
        .sum();
    let part2 = games.iter().map(|game| game.minimum_bag().power()).sum();

    Ok((part1, part2))
}
