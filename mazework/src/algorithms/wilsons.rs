use rand::seq::SliceRandom as _;

use super::{random_cell, random_cell_where, MazeGenerator, Random};
use crate::{board::CellState, visit::Painter};

/// Wilson's algorithm: loop-erased random walks from unvisited cells until
/// they hit the maze.
#[derive(Debug)]
pub struct Wilsons;

impl MazeGenerator for Wilsons {
    fn generate(&self, painter: &mut Painter<'_, '_>, rng: &mut Random) {
        let seed = random_cell(painter.grid(), rng);
        painter.visit(seed, CellState::Visited);

        let mut walk = Vec::new();
        while let Some(start) = random_cell_where(painter.grid(), rng, |cell| {
            painter.grid().state(cell) == CellState::Unvisited
        }) {
            walk.clear();
            walk.push(start);
            painter.visit(start, CellState::Processing);

            while let Some(&top) = walk.last() {
                if painter.grid().state(top) == CellState::Visited {
                    break;
                }

                // at least two cells exist, so every cell has a neighbor
                let Some(&next) = painter.grid().neighbors(top).choose(rng) else {
                    break;
                };

                if painter.grid().state(next) != CellState::Visited {
                    painter.visit(next, CellState::Processing);
                }

                // erase the loop, keeping the first occurrence of `next`
                if let Some(pos) = walk.iter().position(|&cell| cell == next) {
                    for erased in walk.split_off(pos + 1) {
                        painter.visit_quiet(erased, CellState::Unvisited);
                    }
                } else {
                    walk.push(next);
                }
            }

            log::trace!("Wilson walk from {} joins the maze with {} cells", start, walk.len());

            while let Some(tail) = walk.pop() {
                let Some(&next) = walk.last() else {
                    break;
                };
                painter.connect(tail, next);
                painter.visit(next, CellState::Visited);
            }
        }
    }
}
