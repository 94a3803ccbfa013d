//! Fixed rectangular lattice addressing.
//!
//! Cells live in a flat arena indexed `j * width + i`. Neighbor links are
//! derived from the dimensions, so they can never go stale or dangle: a
//! cell has a `right` neighbor unless it sits on the last column and a
//! `bottom` neighbor unless it sits on the last row.

use crate::error::DrapeError;

/// Column/row address of a cell. `i` is the column, `j` the row (row 0 is
/// the top).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub i: usize,
    pub j: usize,
}

impl GridCoord {
    pub fn new(i: usize, j: usize) -> Self {
        GridCoord { i, j }
    }
}

/// Dimensions of a `width x height` lattice and its neighbor relation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    width: usize,
    height: usize,
}

impl Topology {
    /// Rejects zero-sized grids.
    pub fn new(width: usize, height: usize) -> Result<Self, DrapeError> {
        if width == 0 || height == 0 {
            return Err(DrapeError::InvalidDimensions { width, height });
        }
        Ok(Topology { width, height })
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn cell_count(&self) -> usize { self.width * self.height }

    pub fn contains(&self, c: GridCoord) -> bool {
        c.i < self.width && c.j < self.height
    }

    /// Flat index of `c`, or `None` outside the grid.
    pub fn index(&self, c: GridCoord) -> Option<usize> {
        self.contains(c).then(|| c.j * self.width + c.i)
    }

    /// Like [`index`](Self::index) but reports the offending coordinate.
    pub fn checked_index(&self, c: GridCoord) -> Result<usize, DrapeError> {
        self.index(c).ok_or(DrapeError::PointOutOfBounds {
            i: c.i,
            j: c.j,
            width: self.width,
            height: self.height,
        })
    }

    pub fn coord(&self, index: usize) -> GridCoord {
        GridCoord { i: index % self.width, j: index / self.width }
    }

    pub fn right(&self, c: GridCoord) -> Option<GridCoord> {
        (self.contains(c) && c.i + 1 < self.width).then(|| GridCoord::new(c.i + 1, c.j))
    }

    pub fn bottom(&self, c: GridCoord) -> Option<GridCoord> {
        (self.contains(c) && c.j + 1 < self.height).then(|| GridCoord::new(c.i, c.j + 1))
    }

    pub fn left(&self, c: GridCoord) -> Option<GridCoord> {
        (self.contains(c) && c.i > 0).then(|| GridCoord::new(c.i - 1, c.j))
    }

    pub fn top(&self, c: GridCoord) -> Option<GridCoord> {
        (self.contains(c) && c.j > 0).then(|| GridCoord::new(c.i, c.j - 1))
    }

    /// Number of horizontal links.
    pub fn horizontal_links(&self) -> usize {
        (self.width - 1) * self.height
    }

    /// Number of vertical links.
    pub fn vertical_links(&self) -> usize {
        (self.height - 1) * self.width
    }

    /// One segment per neighbor link: `(w-1)*h + (h-1)*w`.
    pub fn segment_count(&self) -> usize {
        self.horizontal_links() + self.vertical_links()
    }

    /// Every neighbor link once, as `(owner, neighbor)` flat indices. The
    /// owner is always the left/top member of the pair.
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.cell_count()).flat_map(move |idx| {
            let c = self.coord(idx);
            let right = self.right(c).map(|_| (idx, idx + 1));
            let bottom = self.bottom(c).map(|_| (idx, idx + self.width));
            right.into_iter().chain(bottom)
        })
    }
}
