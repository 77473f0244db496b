use rand::seq::SliceRandom as _;

use super::{random_cell, MazeGenerator, Random};
use crate::{board::CellState, dims::Dims, visit::Painter};

/// Hunt-and-kill: random walks into unvisited cells, and a row-major hunt for
/// the next place to continue once a walk gets stuck.
#[derive(Debug)]
pub struct HuntAndKill;

impl HuntAndKill {
    /// Walks to random unvisited neighbors until there are none.
    fn kill(painter: &mut Painter<'_, '_>, rng: &mut Random, mut cell: Dims) {
        while let Some(&next) = painter.grid().unvisited_neighbors(cell).choose(rng) {
            painter.connect(cell, next);
            painter.visit(next, CellState::Processing);
            painter.visit(next, CellState::Visited);
            cell = next;
        }
    }

    /// Finds the first unvisited cell, scanning from `min_row`, that touches
    /// the maze and attaches it to a random visited neighbor.
    fn hunt(painter: &mut Painter<'_, '_>, rng: &mut Random, min_row: i32) -> Option<Dims> {
        let Dims(width, height) = painter.grid().size();

        for cell in Dims::iter_fill(Dims(0, min_row), Dims(width, height)) {
            let prev_state = painter.grid().state(cell);
            painter.visit(cell, CellState::Processing);

            if prev_state == CellState::Unvisited {
                let visited_neighbors = painter.grid().visited_neighbors(cell);
                if let Some(&selected) = visited_neighbors.choose(rng) {
                    painter.connect(cell, selected);
                    painter.visit(cell, CellState::Visited);
                    log::trace!("Hunt found {} next to {}", cell, selected);
                    return Some(cell);
                }
            }

            painter.visit(cell, prev_state);
        }

        None
    }
}

impl MazeGenerator for HuntAndKill {
    fn generate(&self, painter: &mut Painter<'_, '_>, rng: &mut Random) {
        let height = painter.grid().size().1;

        let mut cell = random_cell(painter.grid(), rng);
        painter.visit(cell, CellState::Visited);

        let mut min_row = 0;
        loop {
            Self::kill(painter, rng, cell);

            while min_row < height && painter.grid().is_row_settled(min_row) {
                min_row += 1;
            }

            match Self::hunt(painter, rng, min_row) {
                Some(found) => cell = found,
                None => break,
            }
        }
    }
}
