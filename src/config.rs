use error_chain::bail;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::units::{CellRadius, ColumnsCount, Height, NodesCount, RowsCount, Width};

pub const DEFAULT_WIDTH: Width = Width(60);
pub const DEFAULT_HEIGHT: Height = Height(25);
pub const DEFAULT_CELL_RADIUS: CellRadius = CellRadius(2);

/// Number of opening iterations that re-project every visited cell onto the tile grid.
/// Only changes the look of early growth and the running cost, never the invariants.
pub const DEFAULT_HEAL_ITERATIONS: usize = 666;

/// A blocked step still links to its neighbour with a chance of 1 in this many.
pub const DEFAULT_LOOP_CHANCE_DENOMINATOR: u32 = 7;

/// Cells this close to any edge of the tile grid are never carved.
pub const BORDER_MARGIN: usize = 2;

// The smallest side that leaves a carvable tile strictly inside the border margin.
const MIN_SIDE: usize = 2 * BORDER_MARGIN + 2;

/// Validated maze dimensions.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeConfig {
    width: Width,
    height: Height,
    cell_radius: CellRadius,
}

impl MazeConfig {
    pub fn new(width: Width, height: Height, cell_radius: CellRadius) -> Result<MazeConfig> {

        let (Width(w), Height(h), CellRadius(r)) = (width, height, cell_radius);

        if w == 0 || h == 0 || r == 0 {
            bail!(ErrorKind::InvalidConfiguration(format!("width ({}), height ({}) and cell radius ({}) must all be positive",
                                                          w, h, r)));
        }
        if w < MIN_SIDE || h < MIN_SIDE {
            bail!(ErrorKind::InvalidConfiguration(format!("a {}x{} grid leaves no carvable interior inside the {} cell border, \
                                                           each side needs at least {} cells",
                                                          w, h, BORDER_MARGIN, MIN_SIDE)));
        }

        // Tile coordinates are signed and every tile is stored, so both must fit.
        if w > isize::MAX as usize || h > isize::MAX as usize || w.checked_mul(h).is_none() {
            bail!(ErrorKind::InvalidConfiguration(format!("a {}x{} grid is too large to store", w, h)));
        }

        let config = MazeConfig {
            width,
            height,
            cell_radius,
        };
        let (ColumnsCount(columns), RowsCount(rows)) = (config.logical_columns(), config.logical_rows());
        if columns == 0 || rows == 0 {
            bail!(ErrorKind::InvalidConfiguration(format!("cell radius {} on a {}x{} grid gives a {}x{} logical grid",
                                                          r, w, h, columns, rows)));
        }

        Ok(config)
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn cell_radius(&self) -> CellRadius {
        self.cell_radius
    }

    /// Logical cells per row: W / R - 1
    #[inline]
    pub fn logical_columns(&self) -> ColumnsCount {
        ColumnsCount((self.width.0 / self.cell_radius.0).saturating_sub(1))
    }

    /// Logical cells per column: H / R - 1
    #[inline]
    pub fn logical_rows(&self) -> RowsCount {
        RowsCount((self.height.0 / self.cell_radius.0).saturating_sub(1))
    }

    #[inline]
    pub fn logical_size(&self) -> NodesCount {
        NodesCount(self.logical_columns().0 * self.logical_rows().0)
    }

    #[inline]
    pub fn tiles_size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0)
    }

    /// The logical cell the walk starts from unless told otherwise.
    pub fn centre_cell(&self) -> GridCoordinate {
        GridCoordinate::new((self.logical_columns().0 / 2) as isize,
                            (self.logical_rows().0 / 2) as isize)
    }

    pub fn is_logical_cell(&self, coord: GridCoordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.logical_columns().0 &&
        (coord.y as usize) < self.logical_rows().0
    }
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_radius: DEFAULT_CELL_RADIUS,
        }
    }
}

/// Tunables for the carving walk.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CarveOptions {
    pub heal_iterations: usize,
    pub loop_chance_denominator: u32,
    pub start_cell: Option<GridCoordinate>,
}

impl Default for CarveOptions {
    fn default() -> CarveOptions {
        CarveOptions {
            heal_iterations: DEFAULT_HEAL_ITERATIONS,
            loop_chance_denominator: DEFAULT_LOOP_CHANCE_DENOMINATOR,
            start_cell: None,
        }
    }
}

impl CarveOptions {
    /// Check the options make sense for a maze of the given dimensions.
    pub fn validate(&self, config: &MazeConfig) -> Result<()> {
        if self.loop_chance_denominator == 0 {
            bail!(ErrorKind::InvalidConfiguration(String::from("loop chance denominator must be positive")));
        }
        if let Some(start) = self.start_cell {
            if !config.is_logical_cell(start) {
                bail!(ErrorKind::InvalidConfiguration(format!("start cell {} is outside the {}x{} logical grid",
                                                              start,
                                                              config.logical_columns().0,
                                                              config.logical_rows().0)));
            }
        }
        Ok(())
    }

    /// The start cell to use on a grid with the given dimensions.
    pub fn start_for(&self, config: &MazeConfig) -> GridCoordinate {
        self.start_cell.unwrap_or_else(|| config.centre_cell())
    }
}

pub struct CarveOptionsBuilder {
    options: CarveOptions,
}

impl CarveOptionsBuilder {
    pub fn new() -> CarveOptionsBuilder {
        CarveOptionsBuilder { options: CarveOptions::default() }
    }

    pub fn heal_iterations(mut self, iterations: usize) -> Self {
        self.options.heal_iterations = iterations;
        self
    }

    pub fn loop_chance_denominator(mut self, denominator: u32) -> Self {
        self.options.loop_chance_denominator = denominator;
        self
    }

    pub fn start_cell(mut self, start: Option<GridCoordinate>) -> Self {
        self.options.start_cell = start;
        self
    }

    pub fn build(self) -> CarveOptions {
        self.options
    }
}

impl Default for CarveOptionsBuilder {
    fn default() -> CarveOptionsBuilder {
        CarveOptionsBuilder::new()
    }
}
