use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::data::{Orientation, Pos, Tile};
use crate::state::State;
use crate::vec2d::Vec2d;

pub struct MapFormatter<'a> {
    board: &'a Board,
    state: &'a State,
}

impl<'a> MapFormatter<'a> {
    pub fn new(board: &'a Board, state: &'a State) -> Self {
        Self { board, state }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.board.write_with_state(self.state, f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Immutable grid of tile classifications plus the unique goal cell.
#[derive(Clone)]
pub struct Board {
    pub grid: Vec2d<Tile>,
    pub goal: Pos,
}

impl Board {
    pub fn new(grid: Vec2d<Tile>, goal: Pos) -> Self {
        Board { grid, goal }
    }

    /// True iff `(x, y)` is in range and the block may occupy it.
    /// Out-of-range coordinates are not an error, just unsafe.
    pub fn is_safe(&self, x: i32, y: i32) -> bool {
        let pos = Pos::new(x, y);
        if !self.grid.contains(pos) {
            return false;
        }
        match self.grid[pos] {
            Tile::Safe | Tile::Goal => true,
            Tile::Void | Tile::Vacated => false,
        }
    }

    /// Bounds-checked accessor - out-of-range access is a bug in the caller
    /// and panics. Pre-check with `is_safe` or explicit range checks.
    pub fn tile_at(&self, pos: Pos) -> Tile {
        self.grid[pos]
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, state)
    }

    fn write_with_state(&self, state: &State, f: &mut Formatter<'_>) -> fmt::Result {
        let mut occupied = self.grid.create_scratchpad(false);

        // the winning state is drawn without the block, it fell into the goal
        let solved = state.orientation == Orientation::Standing && state.pos == self.goal;
        if !solved {
            let (head, tail) = state.cells();
            occupied[head] = true;
            if let Some(tail) = tail {
                occupied[tail] = true;
            }
        }

        for y in 0..self.grid.rows() {
            for x in 0..self.grid.cols() {
                let pos = Pos::new(x, y);
                if occupied[pos] {
                    write!(f, "S")?;
                } else {
                    write!(f, "{}", self.tile_at(pos))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
