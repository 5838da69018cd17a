use bit_set::BitSet;
use rand::Rng;

use crate::cells::GridCoordinate;
use crate::units::{ColumnsCount, NodesCount, RowsCount};

/// The coarse grid of nodes that drives the carving walk, tracking which have been visited.
#[derive(Debug, Clone)]
pub struct LogicalGrid {
    visited: BitSet,
    columns: ColumnsCount,
    rows: RowsCount,
}

impl LogicalGrid {
    pub fn new(columns: ColumnsCount, rows: RowsCount) -> LogicalGrid {
        LogicalGrid {
            visited: BitSet::with_capacity(columns.0 * rows.0),
            columns,
            rows,
        }
    }

    /// Forget every visit.
    pub fn initialize(&mut self) {
        self.visited.clear();
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.columns.0 * self.rows.0)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        self.cell_index(coord).is_some()
    }

    /// Has the walk been here? Cells off the grid never have.
    #[inline]
    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.cell_index(coord).map_or(false, |index| self.visited.contains(index))
    }

    /// Is this an existing cell the walk has not reached yet?
    #[inline]
    pub fn is_unvisited(&self, coord: GridCoordinate) -> bool {
        self.cell_index(coord).map_or(false, |index| !self.visited.contains(index))
    }

    /// Mark a cell visited. Returns true only if the cell exists and was not visited before.
    pub fn visit(&mut self, coord: GridCoordinate) -> bool {
        match self.cell_index(coord) {
            Some(index) => self.visited.insert(index),
            None => false,
        }
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn iter_visited<'a>(&'a self) -> impl Iterator<Item = GridCoordinate> + 'a {
        let columns = self.columns.0;
        self.visited
            .iter()
            .map(move |index| GridCoordinate::new((index % columns) as isize, (index / columns) as isize))
    }

    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> GridCoordinate {
        let x = rng.gen_range(0..self.columns.0);
        let y = rng.gen_range(0..self.rows.0);
        GridCoordinate::new(x as isize, y as isize)
    }

    fn cell_index(&self, coord: GridCoordinate) -> Option<usize> {
        if coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.columns.0 &&
           (coord.y as usize) < self.rows.0 {
            Some(coord.y as usize * self.columns.0 + coord.x as usize)
        } else {
            None
        }
    }
}
