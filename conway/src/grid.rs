// grid.rs - Grid dimensions and cell indexing for Conway's Game of Life

use crate::error::LifeError;

/// Fixed grid dimensions. Cells are stored row-major, `x + width * y`.
///
/// Anything outside `[0, width) x [0, height)` is permanently dead; there is
/// no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// Rejects empty grids and grids whose buffers could not be allocated
    /// (a `Vec` holds at most `isize::MAX` bytes).
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let allocatable = width
            .checked_mul(height)
            .is_some_and(|area| area <= isize::MAX as usize);
        if width == 0 || height == 0 || !allocatable {
            return Err(LifeError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Flat index of an in-range cell.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.contains(x, y));
        x + self.width * y
    }

    /// Flat index, or `None` when `(x, y)` is off the grid.
    #[inline]
    pub fn checked_index(&self, x: usize, y: usize) -> Option<usize> {
        self.contains(x, y).then(|| self.index(x, y))
    }

    /// Coordinates of a flat index.
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Flat indices of the in-grid neighbours of `(x, y)`, excluding the cell
    /// itself. Corners yield 3, edges 5, interior cells 8.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = usize> + use<> {
        let width = self.width;
        let x_min = x.saturating_sub(1);
        let x_max = (x + 1).min(self.width - 1);
        let y_min = y.saturating_sub(1);
        let y_max = (y + 1).min(self.height - 1);

        (y_min..=y_max).flat_map(move |ny| {
            (x_min..=x_max)
                .filter(move |&nx| nx != x || ny != y)
                .map(move |nx| nx + width * ny)
        })
    }

    /// Out-of-range error for `(x, y)` on this grid.
    pub(crate) fn out_of_range(&self, x: usize, y: usize) -> LifeError {
        LifeError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}
