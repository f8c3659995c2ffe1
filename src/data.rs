use std::fmt;
use std::fmt::{Display, Formatter};

/// Boards larger than this are rejected by the parser.
pub const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }
}

/// Tile classification after loading. Tiles never change during a solve.
///
/// `Vacated` is a cell the block initially stood on - the loader rewrites
/// start cells to `0` and they are *not* safe afterwards. Rolling back onto
/// the start footprint is therefore never legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Void,
    Safe,
    Goal,
    Vacated,
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Tile::Void => '-',
            Tile::Safe => 'O',
            Tile::Goal => 'G',
            Tile::Vacated => '0',
        };
        write!(f, "{}", c)
    }
}

/// `pos` is always the top-left-most occupied cell, so `LyingX` also covers
/// `(x+1, y)` and `LyingY` also covers `(x, y+1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Standing,
    LyingX,
    LyingY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Action::Up => 'U',
            Action::Down => 'D',
            Action::Left => 'L',
            Action::Right => 'R',
        };
        write!(f, "{}", c)
    }
}
