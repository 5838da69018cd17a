use crate::cells::GridCoordinate;
use crate::config::MazeConfig;
use crate::grid::{Tile, TileGrid};
use crate::logical_grid::LogicalGrid;

/// Owns the tile grid that is rendered and the logical grid the carver walks over.
///
/// Logical cell (i, j) owns the tile node (i * R, j * R) where R is the cell radius.
#[derive(Debug, Clone)]
pub struct Maze {
    config: MazeConfig,
    tiles: TileGrid,
    cells: LogicalGrid,
}

impl Maze {
    pub fn new(config: MazeConfig) -> Maze {
        Maze {
            config,
            tiles: TileGrid::new(config.width(), config.height()),
            cells: LogicalGrid::new(config.logical_columns(), config.logical_rows()),
        }
    }

    /// All tiles walls, all logical cells unvisited.
    pub fn initialize(&mut self) {
        self.tiles.initialize();
        self.cells.initialize();
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    #[inline]
    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    #[inline]
    pub fn cells(&self) -> &LogicalGrid {
        &self.cells
    }

    #[inline]
    pub fn tile(&self, coord: GridCoordinate) -> Option<Tile> {
        self.tiles.tile(coord)
    }

    #[inline]
    pub fn is_carvable(&self, coord: GridCoordinate) -> bool {
        self.tiles.is_carvable(coord)
    }

    #[inline]
    pub fn link_straight(&mut self, from: GridCoordinate, to: GridCoordinate) {
        self.tiles.link_straight(from, to)
    }

    /// The tile node owned by a logical cell. Defined for off grid cells too.
    #[inline]
    pub fn node_of(&self, cell: GridCoordinate) -> GridCoordinate {
        cell.scaled(self.config.cell_radius().0)
    }

    /// Mark a logical cell visited and open its node.
    /// Returns true if the cell had not been visited before.
    pub fn visit(&mut self, cell: GridCoordinate) -> bool {
        let newly_visited = self.cells.visit(cell);
        let node = self.node_of(cell);
        self.tiles.carve(node);
        newly_visited
    }

    /// Open the node of every visited logical cell, repairing any node a link skipped.
    pub fn project_visited_cells(&mut self) {
        let radius = self.config.cell_radius().0;
        let tiles = &mut self.tiles;
        for cell in self.cells.iter_visited() {
            tiles.carve(cell.scaled(radius));
        }
    }
}
