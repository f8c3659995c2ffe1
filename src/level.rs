use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::map::{Board, MapFormatter};
use crate::state::State;

/// A parsed board plus the block's initial state.
#[derive(Clone)]
pub struct Level {
    pub board: Board,
    pub state: State,
}

impl Level {
    pub fn new(board: Board, state: State) -> Self {
        Level { board, state }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(&self.board, &self.state))
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
