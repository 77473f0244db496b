use rand::Rng as _;

use super::{random_cell, MazeGenerator, Random};
use crate::{board::CellState, dims::Dims, visit::Painter};

/// Randomized Prim's algorithm over a list of frontier edges.
#[derive(Debug)]
pub struct RndPrims;

impl RndPrims {
    fn push_frontier(painter: &Painter<'_, '_>, frontier: &mut Vec<(Dims, Dims)>, cell: Dims) {
        frontier.extend(
            painter
                .grid()
                .unvisited_neighbors(cell)
                .into_iter()
                .map(|next| (cell, next)),
        );
    }
}

impl MazeGenerator for RndPrims {
    fn generate(&self, painter: &mut Painter<'_, '_>, rng: &mut Random) {
        let start = random_cell(painter.grid(), rng);
        painter.visit(start, CellState::Processing);
        painter.visit(start, CellState::Visited);

        let mut frontier = Vec::new();
        Self::push_frontier(painter, &mut frontier, start);

        while !frontier.is_empty() {
            let (from, to) = frontier.swap_remove(rng.gen_range(0..frontier.len()));

            // the same cell can sit on several frontier edges
            if painter.grid().state(to) == CellState::Visited {
                continue;
            }

            painter.connect(from, to);
            painter.visit(to, CellState::Processing);
            painter.visit_quiet(to, CellState::Visited);
            Self::push_frontier(painter, &mut frontier, to);
        }
    }
}
