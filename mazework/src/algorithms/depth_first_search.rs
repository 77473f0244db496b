use rand::seq::SliceRandom as _;

use super::{random_cell, MazeGenerator, Random};
use crate::{board::CellState, visit::Painter};

/// Randomized depth-first search, also known as the recursive backtracker,
/// with an explicit stack.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl MazeGenerator for DepthFirstSearch {
    fn generate(&self, painter: &mut Painter<'_, '_>, rng: &mut Random) {
        let mut stack = Vec::with_capacity(painter.grid().cell_count());
        stack.push(random_cell(painter.grid(), rng));

        while let Some(&top) = stack.last() {
            if painter.grid().state(top) != CellState::Processing {
                painter.visit(top, CellState::Processing);
            }

            let unvisited_neighbors = painter.grid().unvisited_neighbors(top);
            if let Some(&next) = unvisited_neighbors.choose(rng) {
                painter.connect(top, next);
                stack.push(next);
            } else {
                stack.pop();
                painter.visit(top, CellState::Visited);
            }
        }
    }
}
