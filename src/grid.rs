use std::fmt;
use std::slice;

use crate::cells::GridCoordinate;
use crate::config::BORDER_MARGIN;
use crate::units::{Height, NodesCount, Width};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Tile {
    Wall,
    Passage,
}

/// The full resolution map of walls and passages that is finally rendered.
///
/// Row major, (0, 0) is the north west corner.
#[derive(Clone)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    width: Width,
    height: Height,
}

impl fmt::Debug for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TileGrid :: width: {:?}, height: {:?}, passages: {:?}",
               self.width, self.height, self.passages_count())
    }
}

impl TileGrid {
    /// A grid of solid rock.
    pub fn new(width: Width, height: Height) -> TileGrid {
        TileGrid {
            tiles: vec![Tile::Wall; width.0 * height.0],
            width,
            height,
        }
    }

    /// Turn every tile back into a wall.
    pub fn initialize(&mut self) {
        for tile in self.tiles.iter_mut() {
            *tile = Tile::Wall;
        }
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
    pub fn size(&self) -> NodesCount {
        NodesCount(self.tiles.len())
    }

    pub fn passages_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == Tile::Passage).count()
    }

    /// The tile at a coordinate, None if the coordinate is off the grid.
    #[inline]
    pub fn tile(&self, coord: GridCoordinate) -> Option<Tile> {
        self.tile_index(coord).map(|index| self.tiles[index])
    }

    /// Is the coordinate strictly inside the protected border, so that it may become a passage?
    #[inline]
    pub fn is_carvable(&self, coord: GridCoordinate) -> bool {
        let margin = BORDER_MARGIN as isize;
        coord.x > margin && coord.y > margin && coord.x < self.width.0 as isize - margin &&
        coord.y < self.height.0 as isize - margin
    }

    /// Open a passage at the coordinate if it is carvable.
    /// Returns true if the coordinate is carvable, whether or not it was already open.
    pub fn carve(&mut self, coord: GridCoordinate) -> bool {
        if self.is_carvable(coord) {
            if let Some(index) = self.tile_index(coord) {
                self.tiles[index] = Tile::Passage;
                return true;
            }
        }
        false
    }

    /// Carve an orthogonal path from `from` to `to`.
    ///
    /// The x axis is walked to completion before the y axis, so endpoints that differ on both
    /// axes are joined by an L shaped passage. The start tile itself is not carved and any step
    /// outside the carvable area is skipped.
    pub fn link_straight(&mut self, from: GridCoordinate, to: GridCoordinate) {
        let mut current = from;

        let x_step = if from.x > to.x { -1 } else { 1 };
        while current.x != to.x {
            current.x += x_step;
            self.carve(current);
        }

        let y_step = if from.y > to.y { -1 } else { 1 };
        while current.y != to.y {
            current.y += y_step;
            self.carve(current);
        }
    }

    /// Rows of tiles, north to south.
    pub fn iter_row(&self) -> slice::Chunks<Tile> {
        self.tiles.chunks(self.width.0)
    }

    fn tile_index(&self, coord: GridCoordinate) -> Option<usize> {
        if coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.width.0 &&
           (coord.y as usize) < self.height.0 {
            Some(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::iproduct;

    fn small_grid(w: usize, h: usize) -> TileGrid {
        TileGrid::new(Width(w), Height(h))
    }

    fn gc(x: isize, y: isize) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn new_grid_is_all_walls() {
        let g = small_grid(10, 7);
        assert_eq!(g.size(), NodesCount(70));
        assert_eq!(g.passages_count(), 0);
        assert_eq!(g.iter_row().count(), 7);
        assert!(g.iter_row().all(|row| row.len() == 10));
    }

    #[test]
    fn tile_lookup_off_grid() {
        let g = small_grid(4, 4);
        assert_eq!(g.tile(gc(0, 0)), Some(Tile::Wall));
        assert_eq!(g.tile(gc(3, 3)), Some(Tile::Wall));
        assert_eq!(g.tile(gc(4, 0)), None);
        assert_eq!(g.tile(gc(0, 4)), None);
        assert_eq!(g.tile(gc(-1, 2)), None);
    }

    #[test]
    fn carvable_bounds_are_strict() {
        let (w, h) = (60, 25);
        let g = small_grid(w, h);
        for (x, y) in iproduct!(-2..(w as isize + 2), -2..(h as isize + 2)) {
            let expected = x > 2 && y > 2 && x < w as isize - 2 && y < h as isize - 2;
            assert_eq!(g.is_carvable(gc(x, y)), expected, "at ({}, {})", x, y);
        }
        assert!(!g.is_carvable(gc(2, 10)));
        assert!(g.is_carvable(gc(3, 3)));
        assert!(g.is_carvable(gc(57, 22)));
        assert!(!g.is_carvable(gc(58, 22)));
        assert!(!g.is_carvable(gc(57, 23)));
    }

    #[test]
    fn carving_outside_the_interior_is_ignored() {
        let mut g = small_grid(10, 10);
        assert!(!g.carve(gc(1, 5)));
        assert!(!g.carve(gc(5, 8)));
        assert!(!g.carve(gc(-3, 5)));
        assert_eq!(g.passages_count(), 0);

        assert!(g.carve(gc(5, 5)));
        assert_eq!(g.tile(gc(5, 5)), Some(Tile::Passage));
        assert!(g.carve(gc(5, 5)));
        assert_eq!(g.passages_count(), 1);
    }

    #[test]
    fn link_along_a_row() {
        let mut g = small_grid(20, 10);
        g.link_straight(gc(4, 5), gc(10, 5));
        for x in 5..11 {
            assert_eq!(g.tile(gc(x, 5)), Some(Tile::Passage));
        }
        // the start tile is not carved by the link
        assert_eq!(g.tile(gc(4, 5)), Some(Tile::Wall));
        assert_eq!(g.passages_count(), 6);
    }

    #[test]
    fn link_along_a_column_backwards() {
        let mut g = small_grid(10, 20);
        g.link_straight(gc(5, 12), gc(5, 6));
        for y in 6..12 {
            assert_eq!(g.tile(gc(5, y)), Some(Tile::Passage));
        }
        assert_eq!(g.passages_count(), 6);
    }

    #[test]
    fn link_is_clipped_to_the_interior() {
        let mut g = small_grid(10, 10);
        g.link_straight(gc(5, 5), gc(-2, 5));
        for x in 3..5 {
            assert_eq!(g.tile(gc(x, 5)), Some(Tile::Passage));
        }
        for x in 0..3 {
            assert_eq!(g.tile(gc(x, 5)), Some(Tile::Wall));
        }
        assert_eq!(g.passages_count(), 2);
    }

    #[test]
    fn diagonal_endpoints_link_with_an_l_shape() {
        let mut g = small_grid(20, 20);
        g.link_straight(gc(4, 4), gc(8, 10));
        // x first along the start row...
        for x in 5..9 {
            assert_eq!(g.tile(gc(x, 4)), Some(Tile::Passage));
        }
        // ...then y down the end column
        for y in 5..11 {
            assert_eq!(g.tile(gc(8, y)), Some(Tile::Passage));
        }
        assert_eq!(g.tile(gc(4, 10)), Some(Tile::Wall));
        assert_eq!(g.passages_count(), 10);
    }

    #[test]
    fn linking_twice_changes_nothing() {
        let mut g = small_grid(20, 20);
        g.link_straight(gc(6, 6), gc(6, 12));
        let once: Vec<Tile> = g.iter_row().flat_map(|row| row.iter().cloned()).collect();
        g.link_straight(gc(6, 6), gc(6, 12));
        let twice: Vec<Tile> = g.iter_row().flat_map(|row| row.iter().cloned()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn initialize_restores_walls() {
        let mut g = small_grid(20, 20);
        g.link_straight(gc(6, 6), gc(12, 6));
        assert!(g.passages_count() > 0);
        g.initialize();
        assert_eq!(g.passages_count(), 0);
    }
}
