use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::config::{CarveOptions, MazeConfig};
use crate::errors::*;
use crate::maze::Maze;

/// What happened during one run of the carving walk.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct CarveStats {
    /// Passes through the walk loop, always one less than the number of logical cells.
    pub iterations: usize,
    /// The walk's own count, bumped once per pass whether or not the cell was new.
    pub visited_count: usize,
    /// Logical cells actually marked visited at the end.
    pub distinct_visited: usize,
    /// Blocked steps that jumped back to a random visited cell.
    pub teleports: usize,
    /// Steps taken only because the loop chance came up.
    pub loops_taken: usize,
}

/// Apply the cave growing walk to the maze.
///
/// Starting from one visited cell the walk picks a random direction each pass. It steps into
/// the neighbouring cell, carving a passage between the two nodes, if that cell is new and the
/// tile one step out from the current node is carvable, or regardless of either whenever the
/// loop chance comes up. Loops are what make the result cave like rather than a perfect maze.
/// A blocked step instead jumps to a random cell that has already been visited.
///
/// Each pass counts as one visit, so the walk always makes exactly one pass fewer than there are
/// logical cells, and some cells may be left unvisited.
pub fn carve<R: Rng>(maze: &mut Maze, rng: &mut R, options: &CarveOptions) -> Result<CarveStats> {

    options.validate(maze.config())?;

    maze.initialize();

    let total_cells = maze.cells().size().0;
    let mut position = options.start_for(maze.config());
    maze.visit(position);

    let mut stats = CarveStats {
        visited_count: 1,
        ..CarveStats::default()
    };

    while stats.visited_count < total_cells {
        stats.iterations += 1;
        if stats.iterations < options.heal_iterations {
            maze.project_visited_cells();
        }

        let direction = CompassPrimary::rand_direction(rng);
        let node = maze.node_of(position);
        let candidate = position.offset(direction);

        let is_open = is_open_step(maze, position, direction);
        let is_loop = rng.gen_range(0..options.loop_chance_denominator) ==
                      options.loop_chance_denominator - 1;

        if is_open || is_loop {
            let candidate_node = maze.node_of(candidate);
            maze.link_straight(node, candidate_node);
            position = candidate;
            if !is_open {
                stats.loops_taken += 1;
            }
        } else {
            position = random_visited_cell(maze, rng);
            stats.teleports += 1;
            trace!("walk blocked at pass {}, jumped to {}", stats.iterations, position);
        }

        maze.visit(position);
        stats.visited_count += 1;
    }

    maze.project_visited_cells();

    stats.distinct_visited = maze.cells().visited_count();
    debug!("carved {}x{} maze: {:?}",
           maze.config().width().0,
           maze.config().height().0,
           stats);

    Ok(stats)
}

/// Build and carve a maze with a generator seeded from `seed`.
/// The same seed and configuration always give the same maze.
pub fn generate_seeded(config: MazeConfig, seed: u64, options: &CarveOptions) -> Result<(Maze, CarveStats)> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let mut maze = Maze::new(config);
    let stats = carve(&mut maze, &mut rng, options)?;
    Ok((maze, stats))
}

// A step is open when the tile one unit out from the current node is carvable and the
// neighbouring cell exists and is unvisited. The tile checked is next to the current node, not
// the neighbour's node, so with a radius above 3 a step can be open towards a border node.
fn is_open_step(maze: &Maze, position: GridCoordinate, direction: CompassPrimary) -> bool {
    let (dx, dy) = direction.offset();
    let node = maze.node_of(position);
    let probe = GridCoordinate::new(node.x + dx, node.y + dy);
    maze.is_carvable(probe) && maze.cells().is_unvisited(position.offset(direction))
}

// Keep drawing until the draw lands on a cell the walk has already reached.
// The start cell is visited before the first pass so this always finishes.
fn random_visited_cell<R: Rng>(maze: &Maze, rng: &mut R) -> GridCoordinate {
    loop {
        let cell = maze.cells().random_cell(rng);
        if maze.cells().is_visited(cell) {
            return cell;
        }
    }
}
