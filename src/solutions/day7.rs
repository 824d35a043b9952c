use anyhow::{anyhow, ensure, Context, Result};

const CARD_ORDER: &[u8; 13] = b"23456789TJQKA";
const JOKER: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Jokers (strength [`JOKER`]) join whichever card is already most frequent.
    fn of(strengths: &[u8; 5]) -> Self {
        let mut counts = [0u8; 15];
        let mut jokers = 0;
        for &strength in strengths {
            if strength == JOKER {
                jokers += 1;
            } else {
                counts[strength as usize] += 1;
            }
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts[0] += jokers;

        match (counts[0], counts[1]) {
            (5, _) => HandType::FiveOfAKind,
            (4, _) => HandType::FourOfAKind,
            (3, 2) => HandType::FullHouse,
            (3, _) => HandType::ThreeOfAKind,
            (2, 2) => HandType::TwoPair,
            (2, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

/// Ordered by type first, then card by card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Hand {
    kind: HandType,
    strengths: [u8; 5],
}

impl Hand {
    fn parse(cards: &str, jokers: bool) -> Result<Self> {
        let cards: &[u8; 5] = cards
            .as_bytes()
            .try_into()
            .map_err(|_| anyhow!("a hand has five cards, got {cards:?}"))?;
        let mut strengths = [0; 5];
        for (strength, &card) in strengths.iter_mut().zip(cards) {
            *strength = match card {
                b'J' if jokers => JOKER,
                _ => {
                    let pos = CARD_ORDER
                        .iter()
                        .position(|&c| c == card)
                        .ok_or_else(|| anyhow!("unknown card {:?}", card as char))?;
                    pos as u8 + 2
                }
            };
        }
        Ok(Self {
            kind: HandType::of(&strengths),
            strengths,
        })
    }
}

fn total_winnings(wagers: &[(&str, usize)], jokers: bool) -> Result<usize> {
    let mut hands = wagers
        .iter()
        .map(|&(cards, bid)| -> Result<(Hand, usize)> {
            Ok((Hand::parse(cards, jokers)?, bid))
        })
        .collect::<Result<Vec<_>>>()?;
    hands.sort_unstable();
    Ok(hands
        .iter()
        .enumerate()
        .map(|(rank, &(_, bid))| (rank + 1) * bid)
        .sum())
}

fn parse_wager(line: &str) -> Result<(&str, usize)> {
    let (cards, bid) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected \"<hand> <bid>\""))?;
    Ok((cards, bid.trim().parse()?))
}

pub fn day7(input: &str) -> Result<(usize, usize)> {
    let wagers = input
        .lines()
        .enumerate()
        .map(|(i, line)| parse_wager(line).with_context(|| format!("line {}", i + 1)))
        .collect::<Result<Vec<_>>>()?;
    ensure!(!wagers.is_empty(), "no hands");

    Ok((total_winnings(&wagers, false)?, total_winnings(&wagers, true)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day7() -> Result<()> {
        let example = indoc! {"
            32T3K 765
            T55J5 684
            KK677 28
            KTJJT 220
            QQQJA 483
        "};
        assert_eq!(day7(example)?, (6440, 5905));
        Ok(())
    }

    #[test]
    fn test_hand_types() -> Result<()> {
        assert_eq!(Hand::parse("JJJJJ", true)?.kind, HandType::FiveOfAKind);
        assert_eq!(Hand::parse("JJJJJ", false)?.kind, HandType::FiveOfAKind);
        assert_eq!(Hand::parse("KTJJT", false)?.kind, HandType::TwoPair);
        assert_eq!(Hand::parse("KTJJT", true)?.kind, HandType::FourOfAKind);
        assert_eq!(Hand::parse("23332", false)?.kind, HandType::FullHouse);
        assert!(Hand::parse("JJJJ2", true)? > Hand::parse("JJJJJ", true)?);
        assert!(Hand::parse("2345", false).is_err());
        assert!(Hand::parse("2345X", false).is_err());
        Ok(())
    }

    #[test]
    fn test_malformed_wager() {
        let err = day7("32T3K 765\nT55J5 x\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2");
        let err = day7("32T3K 765\nT55J5\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2");
    }
}
