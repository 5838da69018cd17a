use std::fmt;
use std::io::Write;

use crate::errors::*;
use crate::grid::{Tile, TileGrid};
use crate::maze::Maze;

pub const WALL_GLYPH: char = '#';
pub const PASSAGE_GLYPH: char = '.';
/// Written once after the last row, with no newline.
pub const TRAILER: &str = "VOILA!";

#[derive(Debug, Clone)]
pub struct TextRenderOptions {
    wall: char,
    passage: char,
    trailer: String,
}

impl TextRenderOptions {
    #[inline]
    pub fn glyph(&self, tile: Tile) -> char {
        match tile {
            Tile::Wall => self.wall,
            Tile::Passage => self.passage,
        }
    }

    pub fn trailer(&self) -> &str {
        &self.trailer
    }
}

impl Default for TextRenderOptions {
    fn default() -> TextRenderOptions {
        TextRenderOptions {
            wall: WALL_GLYPH,
            passage: PASSAGE_GLYPH,
            trailer: String::from(TRAILER),
        }
    }
}

pub struct TextRenderOptionsBuilder {
    options: TextRenderOptions,
}

impl TextRenderOptionsBuilder {
    pub fn new() -> TextRenderOptionsBuilder {
        TextRenderOptionsBuilder { options: TextRenderOptions::default() }
    }

    pub fn wall(mut self, glyph: char) -> Self {
        self.options.wall = glyph;
        self
    }

    pub fn passage(mut self, glyph: char) -> Self {
        self.options.passage = glyph;
        self
    }

    pub fn trailer(mut self, trailer: &str) -> Self {
        self.options.trailer = String::from(trailer);
        self
    }

    pub fn build(self) -> TextRenderOptions {
        self.options
    }
}

impl Default for TextRenderOptionsBuilder {
    fn default() -> TextRenderOptionsBuilder {
        TextRenderOptionsBuilder::new()
    }
}

/// Write the maze one row of glyphs per line, north to south, then the trailer.
pub fn render_text<W: Write>(maze: &Maze, out: &mut W, options: &TextRenderOptions) -> Result<()> {

    let mut line = String::with_capacity(maze.config().width().0 * 4 + 1);
    for row in maze.tiles().iter_row() {
        line.clear();
        line.extend(row.iter().map(|&tile| options.glyph(tile)));
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.write_all(options.trailer().as_bytes())?;
    out.flush()?;

    Ok(())
}

pub fn render_to_string(maze: &Maze, options: &TextRenderOptions) -> String {
    let mut output = String::with_capacity(maze.tiles().size().0 + maze.tiles().height().0 +
                                           options.trailer().len());
    for row in maze.tiles().iter_row() {
        output.extend(row.iter().map(|&tile| options.glyph(tile)));
        output.push('\n');
    }
    output.push_str(options.trailer());
    output
}

// Rows only, in the default glyphs.
impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let options = TextRenderOptions::default();
        for row in self.iter_row() {
            let line: String = row.iter().map(|&tile| options.glyph(tile)).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
