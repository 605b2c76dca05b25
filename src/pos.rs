use std::{cmp::Ordering, ops::Add};

/// A (row, column) coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}
impl Cell {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Folds this coordinate onto a `height` x `width` torus
    #[inline]
    pub fn wrap(self, height: usize, width: usize) -> Self {
        Self {
            row: self.row % height,
            col: self.col % width,
        }
    }
}
impl From<(usize, usize)> for Cell {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
impl PartialOrd for Cell {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Cell {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: compare rows first, then columns
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.col, &other.col))
    }
}
impl Add for Cell {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 5), Cell::new(0, 1)];
        cells.sort();

        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 5), Cell::new(1, 0)]);
    }

    #[test]
    fn wrap_folds_both_axes() {
        assert_eq!(Cell::new(5, 9).wrap(5, 4), Cell::new(0, 1));
        assert_eq!(Cell::new(2, 3).wrap(5, 4), Cell::new(2, 3));
    }
}
