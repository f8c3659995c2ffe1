use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major grid indexed by `Pos`.
///
/// Indexing out of range is a programming error and panics - callers must
/// pre-check coordinates (`Board::is_safe` or explicit range checks).
#[derive(Clone, PartialEq, Eq)]
pub struct Vec2d<T> {
    data: Vec<T>,
    rows: i32,
    cols: i32,
}

impl<T> Vec2d<T> {
    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.cols && pos.y >= 0 && pos.y < self.rows
    }

    pub fn create_scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Copy> Vec2d<T> {
    /// All rows must already have equal length (the parser enforces it).
    pub fn new(grid: &[Vec<T>]) -> Self {
        assert!(!grid.is_empty() && !grid[0].is_empty());

        let cols = grid[0].len();
        let mut data = Vec::with_capacity(grid.len() * cols);
        for row in grid {
            assert_eq!(row.len(), cols);
            data.extend_from_slice(row);
        }
        Vec2d {
            data,
            rows: grid.len() as i32,
            cols: cols as i32,
        }
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols as usize) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        assert!(self.contains(index), "pos out of range: {:?}", index);
        &self.data[(index.y * self.cols + index.x) as usize]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        assert!(self.contains(index), "pos out of range: {:?}", index);
        &mut self.data[(index.y * self.cols + index.x) as usize]
    }
}
