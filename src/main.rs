use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use cave_mazes::{
    cells::GridCoordinate,
    config::{CarveOptionsBuilder, MazeConfig},
    generators,
    renderers::{self, TextRenderOptions},
    units::{CellRadius, Height, Width},
    utils,
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Cave Mazes

Usage:
    cave_mazes_driver -h | --help
    cave_mazes_driver [--width=<w>] [--height=<h>] [--cell-radius=<r>] [--seed=<n>] [--start-x=<x> --start-y=<y>] [--heal-iterations=<n>] [--text-out=<path>]

Options:
    -h --help                Show this screen.
    --width=<w>              Width of the maze in characters [default: 60].
    --height=<h>             Height of the maze in lines [default: 25].
    --cell-radius=<r>        Spacing between the nodes the carving walk moves between [default: 2].
    --seed=<n>               Seed for the random generator. Taken from the clock if not given.
    --start-x=<x>            x coordinate of the node the walk starts from. Defaults to the centre node.
    --start-y=<y>            y coordinate of the node the walk starts from. Defaults to the centre node.
    --heal-iterations=<n>    Number of opening walk passes that re-open every visited node [default: 666].
    --text-out=<path>        Output file path for the maze. Written to stdout if not given.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_width: usize,
    flag_height: usize,
    flag_cell_radius: usize,
    flag_seed: Option<u64>,
    flag_start_x: Option<isize>,
    flag_start_y: Option<isize>,
    flag_heal_iterations: usize,
    flag_text_out: String,
}

// Errors from the library are linked in, so `?` works on both.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::cave_mazes::errors::Error, ::cave_mazes::errors::ErrorKind);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let config = MazeConfig::new(Width(args.flag_width),
                                 Height(args.flag_height),
                                 CellRadius(args.flag_cell_radius))?;

    let start_cell = match (args.flag_start_x, args.flag_start_y) {
        (Some(x), Some(y)) => Some(GridCoordinate::new(x, y)),
        _ => None,
    };
    let carve_options = CarveOptionsBuilder::new()
        .heal_iterations(args.flag_heal_iterations)
        .start_cell(start_cell)
        .build();

    let seed = args.flag_seed.unwrap_or_else(utils::time_seed);
    info!("carving a {}x{} maze with cell radius {} from seed {}",
          args.flag_width, args.flag_height, args.flag_cell_radius, seed);

    let (maze, stats) = generators::generate_seeded(config, seed, &carve_options)?;
    info!("{} of {} logical cells visited in {} passes ({} jumps, {} loops)",
          stats.distinct_visited,
          config.logical_size().0,
          stats.iterations,
          stats.teleports,
          stats.loops_taken);

    let render_options = TextRenderOptions::default();
    if args.flag_text_out.is_empty() {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        renderers::render_text(&maze, &mut handle, &render_options)?;
    } else {
        write_text_to_file(&renderers::render_to_string(&maze, &render_options), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
