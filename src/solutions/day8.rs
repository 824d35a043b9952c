use anyhow::{anyhow, bail, ensure, Context, Result};
use indexmap::IndexMap;
use regex::Regex;

#[derive(Debug)]
struct Network<'a> {
    /// `true` for `L`
    turns: Vec<bool>,
    /// Nodes in input order
    nodes: IndexMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        let node_re = Regex::new(r"^([0-9A-Z]{3}) = \(([0-9A-Z]{3}), ([0-9A-Z]{3})\)$")?;
        let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

        let turns = lines
            .next()
            .ok_or_else(|| anyhow!("missing instructions"))?
            .bytes()
            .map(|b| match b {
                b'L' => Ok(true),
                b'R' => Ok(false),
                _ => Err(anyhow!("unexpected instruction {:?}", b as char)),
            })
            .collect::<Result<Vec<_>>>()?;
        ensure!(!turns.is_empty(), "empty instructions");

        let mut nodes = IndexMap::new();
        for line in lines {
            let (_, [id, left, right]) = node_re
                .captures(line)
                .with_context(|| format!("malformed node {line:?}"))?
                .extract();
            nodes.insert(id, (left, right));
        }
        Ok(Self { turns, nodes })
    }

    /// Number of steps from `start` until a node satisfying `is_end` is reached.
    fn steps(&self, start: &str, is_end: impl Fn(&str) -> bool) -> Result<usize> {
        // Past this many steps some (node, instruction) state has repeated.
        let limit = self.turns.len() * self.nodes.len();
        let mut node = start;
        for (step, &left) in self.turns.iter().cycle().enumerate() {
            if is_end(node) && step > 0 {
                return Ok(step);
            }
            if step > limit {
                bail!("no exit reachable from {start}");
            }
            let &(l, r) = self
                .nodes
                .get(node)
                .ok_or_else(|| anyhow!("unknown node {node}"))?;
            node = if left { l } else { r };
        }
        unreachable!("cycle() over non-empty turns never ends")
    }

    /// Steps until every ghost stands on a `..Z` node simultaneously.
    fn ghost_steps(&self) -> Result<usize> {
        let starts: Vec<&str> = self
            .nodes
            .keys()
            .copied()
            .filter(|id| id.ends_with('A'))
            .collect();
        ensure!(!starts.is_empty(), "no starting nodes");

        let mut total = 1;
        for start in starts {
            let cycle = self.steps(start, |id| id.ends_with('Z'))?;
            log::trace!("{start} reaches an exit after {cycle} steps");
            total = num::integer::lcm(total, cycle);
        }
        Ok(total)
    }
}

pub fn day8(input: &str) -> Result<(usize, usize)> {
    let network = Network::parse(input)?;
    log::debug!(
        "{} turns over {} nodes",
        network.turns.len(),
        network.nodes.len()
    );

    let part1 = network.steps("AAA", |id| id == "ZZZ")?;
    let part2 = network.ghost_steps()?;

    Ok((part1, part2))
}
