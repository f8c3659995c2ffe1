use crate::data::{Orientation, Pos};

/// Position and orientation of the block. Immutable value object - the pair
/// `(pos, orientation)` is the deduplication key, independent of how the
/// state was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    pub pos: Pos,
    pub orientation: Orientation,
}

impl State {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> State {
        State {
            pos: Pos::new(x, y),
            orientation,
        }
    }

    /// The occupied footprint: the top-left-most cell plus the second cell
    /// when lying down.
    pub fn cells(&self) -> (Pos, Option<Pos>) {
        match self.orientation {
            Orientation::Standing => (self.pos, None),
            Orientation::LyingX => (self.pos, Some(Pos::new(self.pos.x + 1, self.pos.y))),
            Orientation::LyingY => (self.pos, Some(Pos::new(self.pos.x, self.pos.y + 1))),
        }
    }
}
