//! Day 7: Camel Cards

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["2023", "sorting"])]
pub struct Solver;

const CARDS: &[u8] = b"23456789TJQKA";
const JOKER: u8 = 9;

/// Hand categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Classify five cards. With `jokers`, every joker joins the largest
    /// group of the other cards.
    fn classify(cards: &[u8; 5], jokers: bool) -> Self {
        let wild = if jokers {
            cards.iter().filter(|&&c| c == JOKER).count()
        } else {
            0
        };
        let mut groups: Vec<usize> = cards
            .iter()
            .filter(|&&c| !jokers || c != JOKER)
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();
        match groups.first_mut() {
            Some(largest) => *largest += wild,
            None => groups.push(wild),
        }

        match groups[..] {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

/// Cards are stored as their rank in [`CARDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

impl Hand {
    /// Sort key: category first, then card by card. Jokers rank lowest when
    /// they are wild.
    fn strength(&self, jokers: bool) -> (HandType, [u8; 5]) {
        let ranks = self.cards.map(|c| match c {
            JOKER if jokers => 0,
            c => c + 1,
        });
        (HandType::classify(&self.cards, jokers), ranks)
    }
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected `<cards> <bid>`"))?;
    if cards.len() != 5 {
        bail!("hand {cards:?} does not have five cards");
    }
    let mut ranks = [0u8; 5];
    for (slot, card) in ranks.iter_mut().zip(cards.bytes()) {
        *slot = CARDS
            .iter()
            .position(|&c| c == card)
            .ok_or_else(|| anyhow!("unknown card {:?}", card as char))? as u8;
    }
    let bid = bid.parse().with_context(|| format!("invalid bid {bid:?}"))?;
    Ok(Hand { cards: ranks, bid })
}

fn total_winnings(hands: &[Hand], jokers: bool) -> u64 {
    hands
        .iter()
        .sorted_by_cached_key(|hand| hand.strength(jokers))
        .zip(1..)
        .map(|(hand, rank)| hand.bid * rank)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                parse_hand(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, true).to_string())
    }
}
