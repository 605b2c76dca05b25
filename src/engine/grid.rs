use std::fmt;

use crate::{Cell, Error, Result};

/// Fixed width/height of a run
///
/// Both are positive and their product fits a single buffer by construction,
/// so every [`Grid`] built from a [`Dimensions`] has at least one cell and
/// `area` never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::NonPositiveDimensions { width, height });
        }
        let too_large = || Error::DimensionsTooLarge { width, height };
        let w = usize::try_from(width).map_err(|_| too_large())?;
        let h = usize::try_from(height).map_err(|_| too_large())?;
        // a grid buffer can hold at most isize::MAX bytes
        match w.checked_mul(h) {
            Some(area) if area <= isize::MAX as usize => Ok(Self {
                width: w,
                height: h,
            }),
            _ => Err(too_large()),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// A `height` x `width` array of binary cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates an all-dead grid
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![0; dims.area()],
        }
    }

    /// Creates a grid with exactly the given cells live
    ///
    /// Coordinates outside the grid are wrapped onto it.
    pub fn from_live<I>(dims: Dimensions, live: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut grid = Self::new(dims);
        for cell in live {
            grid.set(cell.wrap(dims.height, dims.width), true);
        }
        grid
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.dims.height && col < self.dims.width);
        row * self.dims.width + col
    }

    /// Returns `1` for a live cell, `0` for a dead one
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.get(cell.row, cell.col) != 0
    }

    #[inline]
    pub fn set(&mut self, cell: Cell, alive: bool) {
        let idx = self.index(cell.row, cell.col);
        self.cells[idx] = u8::from(alive);
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.dims.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.dims.width)
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.dims.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(move |(idx, _)| Cell::new(idx / width, idx % width))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &c in row {
                f.write_str(if c != 0 { "#" } else { " " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
