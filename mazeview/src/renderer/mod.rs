pub mod screen;

use std::fmt::Write as _;

use colored::Colorize;
use mazework::{
    array::Array2D,
    board::{CellState, Grid},
    dims::Dims,
};
use smallvec::SmallVec;

/// What a single tile of the picture shows.
///
/// Cell `(x, y)` sits at tile `(2x + 1, 2y + 1)`; the tile between two
/// adjacent cells is an opening once they are connected, a wall otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paint {
    #[default]
    Wall,
    Empty,
    Unvisited,
    Processing,
    Terminal,
    Path,
}

impl Paint {
    pub fn of_cell(state: CellState) -> Self {
        match state {
            CellState::Unvisited => Paint::Unvisited,
            CellState::Processing => Paint::Processing,
            CellState::Visited => Paint::Empty,
            CellState::Terminal => Paint::Terminal,
            CellState::OnSolutionPath => Paint::Path,
        }
    }

    /// Paint of the opening between two connected cells.
    pub fn of_opening(a: CellState, b: CellState) -> Self {
        if a.is_on_path() && b.is_on_path() {
            Paint::Path
        } else if a == CellState::Processing || b == CellState::Processing {
            Paint::Processing
        } else {
            Paint::Empty
        }
    }

    /// Two columns per tile, so cells come out roughly square.
    pub fn glyph(self) -> &'static str {
        match self {
            Paint::Wall | Paint::Terminal | Paint::Path => "██",
            Paint::Empty => "  ",
            Paint::Unvisited => "░░",
            Paint::Processing => "▒▒",
        }
    }

    pub fn color(self) -> Option<colored::Color> {
        match self {
            Paint::Wall | Paint::Empty => None,
            Paint::Unvisited => Some(colored::Color::BrightBlack),
            Paint::Processing => Some(colored::Color::Cyan),
            Paint::Terminal => Some(colored::Color::Green),
            Paint::Path => Some(colored::Color::Yellow),
        }
    }
}

pub type Dirty = SmallVec<[Dims; 5]>;

/// Tile picture of a maze, built up from cell updates.
#[derive(Debug, Clone)]
pub struct Canvas {
    states: Array2D<CellState>,
    tiles: Array2D<Paint>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let mut canvas = Self {
            states: Array2D::new(CellState::Unvisited, width, height),
            tiles: Array2D::new(Paint::Wall, 2 * width + 1, 2 * height + 1),
        };
        for cell in Dims::iter_fill(Dims::ZERO, canvas.states.size()) {
            canvas.tiles[Self::tile_of(cell)] = Paint::Unvisited;
        }
        canvas
    }

    pub fn from_grid(grid: &Grid) -> Self {
        let mut canvas = Self::new(grid.width(), grid.height());
        for cell in grid.cells() {
            canvas.states[cell] = grid.state(cell);
        }
        for cell in grid.cells() {
            canvas.paint(cell, grid.state(cell), grid.passages(cell));
        }
        canvas
    }

    pub fn size(&self) -> Dims {
        self.tiles.size()
    }

    pub fn tile(&self, pos: Dims) -> Paint {
        self.tiles[pos]
    }

    pub fn tile_of(cell: Dims) -> Dims {
        cell * 2 + Dims::ONE
    }

    pub fn tile_between(a: Dims, b: Dims) -> Dims {
        a + b + Dims::ONE
    }

    /// Updates one cell and the openings to its passages, returns the tiles
    /// that changed look.
    pub fn paint(&mut self, cell: Dims, state: CellState, passages: &[Dims]) -> Dirty {
        let mut dirty = Dirty::new();
        self.states[cell] = state;

        let mut set = |tiles: &mut Array2D<Paint>, pos: Dims, paint: Paint| {
            if tiles[pos] != paint {
                tiles[pos] = paint;
                dirty.push(pos);
            }
        };

        set(&mut self.tiles, Self::tile_of(cell), Paint::of_cell(state));
        for &other in passages {
            let paint = Paint::of_opening(state, self.states[other]);
            set(&mut self.tiles, Self::tile_between(cell, other), paint);
        }

        dirty
    }

    /// Whole picture as text, colored unless `colored` output is disabled.
    pub fn render(&self) -> String {
        let Dims(width, _) = self.size();
        let mut out = String::with_capacity(self.tiles.len() * 2 + width as usize);

        for pos in self.tiles.iter_pos() {
            let paint = self.tiles[pos];
            let glyph = paint.glyph();
            let _ = match paint.color() {
                Some(color) => write!(out, "{}", glyph.color(color)),
                None => write!(out, "{glyph}"),
            };
            if pos.0 == width - 1 {
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mazework::{algorithms::GenAlgorithm, solvers::SolveAlgorithm, visit::NoopSink, Maze};

    use super::*;

    #[test]
    fn fresh_canvas_is_walls_and_unvisited() {
        let canvas = Canvas::new(3, 2);
        assert_eq!(canvas.size(), Dims(7, 5));
        assert_eq!(canvas.tile(Dims(1, 1)), Paint::Unvisited);
        assert_eq!(canvas.tile(Dims(5, 3)), Paint::Unvisited);
        assert_eq!(canvas.tile(Dims(2, 1)), Paint::Wall);
        assert_eq!(canvas.tile(Dims(0, 0)), Paint::Wall);
    }

    #[test]
    fn paint_opens_passages() {
        let mut canvas = Canvas::new(2, 1);
        let dirty = canvas.paint(Dims(0, 0), CellState::Visited, &[Dims(1, 0)]);

        assert_eq!(dirty.as_slice(), &[Dims(1, 1), Dims(2, 1)]);
        assert_eq!(canvas.tile(Dims(2, 1)), Paint::Empty);

        let dirty = canvas.paint(Dims(0, 0), CellState::Visited, &[Dims(1, 0)]);
        assert!(dirty.is_empty());
    }

    #[test]
    fn solved_maze_shows_the_path() {
        let mut maze = Maze::with_seed(6, 6, 4).unwrap();
        maze.generate(GenAlgorithm::Eller, Duration::ZERO, &mut NoopSink);
        let path = maze
            .solve(SolveAlgorithm::BreadthFirstSearch, Duration::ZERO, &mut NoopSink)
            .cloned()
            .unwrap();

        let canvas = Canvas::from_grid(maze.grid());
        for pair in path.windows(2) {
            assert_eq!(
                canvas.tile(Canvas::tile_between(pair[0], pair[1])),
                Paint::Path
            );
        }
        assert_eq!(canvas.tile(Dims(1, 1)), Paint::Terminal);

        let openings = Dims::iter_fill(Dims::ZERO, canvas.size())
            .filter(|&pos| (pos.0 + pos.1) % 2 == 1)
            .filter(|&pos| canvas.tile(pos) != Paint::Wall)
            .count();
        assert_eq!(openings, 35);
    }

    #[test]
    fn render_has_a_line_per_tile_row() {
        colored::control::set_override(false);
        let mut grid = Grid::new(2, 2).unwrap();
        grid.connect(Dims(0, 0), Dims(1, 0));

        let text = Canvas::from_grid(&grid).render();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "██".repeat(5));
        assert_eq!(lines[1], "██░░  ░░██");
    }
}
