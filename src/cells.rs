use rand::Rng;
use std::fmt;

/// A position on either the fine tile grid or the logical cell grid.
///
/// Signed so that a walk may step off the edge of a grid: such positions are representable
/// but never carvable and never stored.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: isize,
    pub y: isize,
}

impl GridCoordinate {
    pub fn new(x: isize, y: isize) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    /// Creates a new coordinate offset 1 step away in the given direction.
    #[inline]
    pub fn offset(self, dir: CompassPrimary) -> GridCoordinate {
        let (dx, dy) = dir.offset();
        GridCoordinate::new(self.x + dx, self.y + dy)
    }

    /// Scale both axes, e.g. to map a logical cell onto the fine grid node it owns.
    #[inline]
    pub fn scaled(self, factor: usize) -> GridCoordinate {
        let factor = factor as isize;
        GridCoordinate::new(self.x * factor, self.y * factor)
    }
}

impl From<(isize, isize)> for GridCoordinate {
    fn from(x_y_pair: (isize, isize)) -> GridCoordinate {
        GridCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

const DIRS_COUNT: usize = 4;

// The walk draws an index into this table, so the order is part of the seeded output.
const DIRS: [CompassPrimary; DIRS_COUNT] = [CompassPrimary::North,
                                            CompassPrimary::East,
                                            CompassPrimary::South,
                                            CompassPrimary::West];

impl CompassPrimary {
    pub fn all() -> &'static [CompassPrimary] {
        &DIRS
    }

    /// Unit (dx, dy) step; y grows southwards.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            CompassPrimary::North => (0, -1),
            CompassPrimary::East => (1, 0),
            CompassPrimary::South => (0, 1),
            CompassPrimary::West => (-1, 0),
        }
    }

    pub fn rand_direction<R: Rng>(rng: &mut R) -> CompassPrimary {
        DIRS[rng.gen_range(0..DIRS_COUNT)]
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn direction_offsets_are_unit_steps() {
        let origin = GridCoordinate::new(5, 5);
        let gc = |x, y| GridCoordinate::new(x, y);
        assert_eq!(origin.offset(CompassPrimary::North), gc(5, 4));
        assert_eq!(origin.offset(CompassPrimary::East), gc(6, 5));
        assert_eq!(origin.offset(CompassPrimary::South), gc(5, 6));
        assert_eq!(origin.offset(CompassPrimary::West), gc(4, 5));
    }

    #[test]
    fn offsets_can_leave_the_grid() {
        let corner = GridCoordinate::new(0, 0);
        assert_eq!(corner.offset(CompassPrimary::North), GridCoordinate::new(0, -1));
        assert_eq!(corner.offset(CompassPrimary::West), GridCoordinate::new(-1, 0));
    }

    #[test]
    fn scaling_maps_logical_cells_to_nodes() {
        assert_eq!(GridCoordinate::new(3, 4).scaled(2), GridCoordinate::new(6, 8));
        assert_eq!(GridCoordinate::new(-1, 0).scaled(3), GridCoordinate::new(-3, 0));
    }

    #[test]
    fn random_directions_cover_the_compass() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        let mut seen = [false; DIRS_COUNT];
        for _ in 0..1000 {
            let dir = CompassPrimary::rand_direction(&mut rng);
            let index = CompassPrimary::all().iter().position(|&d| d == dir).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
