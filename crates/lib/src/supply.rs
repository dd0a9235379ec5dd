//! Rearrange stacks of supply crates and read off the top of each stack.
//!
//! Input is a drawing of the starting stacks followed by a blank line and a
//! list of `move <n> from <a> to <b>` instructions. Two crane models exist:
//! one moves crates one at a time (the group ends up reversed), the other
//! lifts the whole group at once.


use arrayvec::{ArrayString, ArrayVec};
use thiserror::Error;

/// Upper bounds for the drawing, sized to the puzzle inputs.
const MAX_STACKS: usize = 16;
const MAX_HEIGHT: usize = 64;

/// One stack of crates, bottom first.
pub type Stack = ArrayVec<u8, MAX_HEIGHT>;
/// Every stack in the drawing, left to right.
pub type Stacks = ArrayVec<Stack, MAX_STACKS>;

/// Errors raised while parsing or executing a rearrangement.
#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("missing stack drawing")]
    MissingDrawing,
    #[error("more than {MAX_STACKS} stacks in the drawing")]
    TooManyStacks,
    #[error("stack {stack} holds more than {MAX_HEIGHT} crates")]
    StackOverflow { stack: usize },
    #[error("{line}: bad move: `{text}`")]
    BadMove { line: usize, text: String },
    #[error("move references stack {stack} which does not exist")]
    NoSuchStack { stack: usize },
    #[error("not enough crates on stack {stack}")]
    NotEnoughCrates { stack: usize },
}

/// One rearrangement instruction, stacks numbered from 1 as in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

impl Move {
    fn parse(line: usize, text: &str) -> Result<Self, SupplyError> {
        let bad = || SupplyError::BadMove {
            line,
            text: text.to_string(),
        };

        let mut it = text.split_whitespace();

        let mut field = |keyword: &str| -> Result<usize, SupplyError> {
            if it.next() != Some(keyword) {
                return Err(bad());
            }

            it.next().ok_or_else(bad)?.parse().map_err(|_| bad())
        };

        let count = field("move")?;
        let from = field("from")?;
        let to = field("to")?;

        if it.next().is_some() || from == 0 || to == 0 {
            return Err(bad());
        }

        Ok(Self { count, from, to })
    }
}

/// The starting stacks plus the move list.
#[derive(Debug)]
pub struct Procedure {
    pub stacks: Stacks,
    pub moves: Vec<Move>,
}

/// Parse the drawing and the move list from a sequence of lines.
///
/// Crates sit in 4-column cells, so column `4 * i + 1` holds the crate
/// letter of stack `i`. The stack-number row and the blank separator carry
/// no crate letters and drop out on their own.
pub fn parse<'a, I>(lines: I) -> Result<Procedure, SupplyError>
where
    I: Iterator<Item = &'a str>,
{
    let mut lines = lines;
    let mut n = 0;
    let mut stacks = Stacks::new();
    let mut saw_drawing = false;

    for line in lines.by_ref() {
        n += 1;

        if line.is_empty() {
            break;
        }

        saw_drawing = true;

        for (i, cell) in line.as_bytes().chunks(4).enumerate() {
            let Some(&b) = cell.get(1).filter(|b| b.is_ascii_uppercase()) else {
                continue;
            };

            while stacks.len() <= i {
                stacks
                    .try_push(Stack::new())
                    .map_err(|_| SupplyError::TooManyStacks)?;
            }

            stacks[i]
                .try_push(b)
                .map_err(|_| SupplyError::StackOverflow { stack: i + 1 })?;
        }
    }

    if !saw_drawing {
        return Err(SupplyError::MissingDrawing);
    }

    // The drawing reads top-down, stacks want bottom first.
    for stack in &mut stacks {
        stack.reverse();
    }

    let mut moves = Vec::new();

    for line in lines {
        n += 1;

        if line.is_empty() {
            continue;
        }

        moves.push(Move::parse(n, line)?);
    }

    log::debug!("parsed {} stack(s), {} move(s)", stacks.len(), moves.len());

    Ok(Procedure { stacks, moves })
}

/// Run the moves lifting one crate at a time, then read the top crates.
pub fn rearrange_single(
    stacks: Stacks,
    moves: &[Move],
) -> Result<ArrayString<MAX_STACKS>, SupplyError> {
    rearrange(stacks, moves, true)
}

/// Run the moves lifting each group in one go, then read the top crates.
pub fn rearrange_bulk(
    stacks: Stacks,
    moves: &[Move],
) -> Result<ArrayString<MAX_STACKS>, SupplyError> {
    rearrange(stacks, moves, false)
}

fn rearrange(
    mut stacks: Stacks,
    moves: &[Move],
    one_at_a_time: bool,
) -> Result<ArrayString<MAX_STACKS>, SupplyError> {
    for m in moves {
        apply(&mut stacks, m, one_at_a_time)?;
    }

    Ok(tops(&stacks))
}

fn apply(stacks: &mut Stacks, m: &Move, one_at_a_time: bool) -> Result<(), SupplyError> {
    for stack in [m.from, m.to] {
        if stack == 0 || stack > stacks.len() {
            return Err(SupplyError::NoSuchStack { stack });
        }
    }

    let from = &mut stacks[m.from - 1];

    let at = from
        .len()
        .checked_sub(m.count)
        .ok_or(SupplyError::NotEnoughCrates { stack: m.from })?;

    let mut lifted: Stack = from.drain(at..).collect();

    if one_at_a_time {
        lifted.reverse();
    }

    for b in lifted {
        stacks[m.to - 1]
            .try_push(b)
            .map_err(|_| SupplyError::StackOverflow { stack: m.to })?;
    }

    Ok(())
}

fn tops(stacks: &Stacks) -> ArrayString<MAX_STACKS> {
    let mut out = ArrayString::new();

    for stack in stacks {
        if let Some(&b) = stack.last() {
            out.push(b as char);
        }
    }

    out
}
