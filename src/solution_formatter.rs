use std::fmt::{self, Debug, Display, Formatter};

use crate::map::Board;
use crate::moves::Moves;
use crate::solver::successors;
use crate::state::State;

/// Replays an action path through the move generator and prints every
/// intermediate board, one blank line between states.
pub struct SolutionFormatter<'a> {
    board: &'a Board,
    initial_state: &'a State,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(board: &'a Board, initial_state: &'a State, moves: &'a Moves) -> Self {
        Self {
            board,
            initial_state,
            moves,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board.format_with_state(self.initial_state))?;
        let mut state = *self.initial_state;
        for &action in self.moves {
            // moves from a different level would not replay
            state = successors(self.board, &state)
                .into_iter()
                .find(|&(a, _)| a == action)
                .map(|(_, s)| s)
                .ok_or(fmt::Error)?;
            writeln!(f, "{}", self.board.format_with_state(&state))?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
