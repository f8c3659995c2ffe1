use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::data::{Orientation, Pos, Tile, MAX_SIZE};
use crate::level::Level;
use crate::map::Board;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    TooLarge,
    NonRectangular(usize),
    NoGoal,
    MultipleGoals,
    NoStart,
    InvalidStart,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Empty board"),
            ParserErr::TooLarge => write!(f, "Board larger than {} rows/columns", MAX_SIZE),
            ParserErr::NonRectangular(r) => write!(f, "Row {} has a different length", r),
            ParserErr::NoGoal => write!(f, "No goal tile"),
            ParserErr::MultipleGoals => write!(f, "More than one goal tile"),
            ParserErr::NoStart => write!(f, "No start marker"),
            ParserErr::InvalidStart => write!(
                f,
                "Start markers must be a single cell or two adjacent cells"
            ),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the board text format: `G` goal, `O` safe, `S` start footprint,
/// anything else void. Start cells end up as `Tile::Vacated` - matching the
/// load-time rewrite to `0`, so the start footprint is never safe again.
pub fn parse(board: &str) -> Result<Level, ParserErr> {
    // trim so we can specify boards using raw strings more easily
    let board = board.trim_matches('\n');
    if board.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut grid = Vec::new();
    let mut goal = None;
    let mut starts = Vec::new();

    for (y, line) in board.lines().enumerate() {
        if y >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        let mut row = Vec::new();
        for (x, cur_char) in line.chars().enumerate() {
            if x >= MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let pos = Pos::new(x as i32, y as i32);

            let tile = match cur_char {
                'G' => {
                    if goal.is_some() {
                        return Err(ParserErr::MultipleGoals);
                    }
                    goal = Some(pos);
                    Tile::Goal
                }
                'O' => Tile::Safe,
                'S' => {
                    starts.push(pos);
                    Tile::Vacated
                }
                _ => Tile::Void,
            };
            row.push(tile);
        }
        if row.len() != grid.first().map_or(row.len(), Vec::len) {
            return Err(ParserErr::NonRectangular(y));
        }
        grid.push(row);
    }

    let goal = goal.ok_or(ParserErr::NoGoal)?;
    let state = initial_state(&starts)?;

    Ok(Level::new(Board::new(Vec2d::new(&grid), goal), state))
}

/// Derives the block's orientation from the start marker layout: two
/// horizontal cells lie along x, two vertical cells lie along y, a single
/// cell stands.
fn initial_state(starts: &[Pos]) -> Result<State, ParserErr> {
    // `starts` is in row-major order, so the first marker is top-left-most
    match *starts {
        [] => Err(ParserErr::NoStart),
        [p] => Ok(State::new(p.x, p.y, Orientation::Standing)),
        [a, b] if b.x == a.x + 1 && b.y == a.y => {
            Ok(State::new(a.x, a.y, Orientation::LyingX))
        }
        [a, b] if b.x == a.x && b.y == a.y + 1 => {
            Ok(State::new(a.x, a.y, Orientation::LyingY))
        }
        _ => Err(ParserErr::InvalidStart),
    }
}
