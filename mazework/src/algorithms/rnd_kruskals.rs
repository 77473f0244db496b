use rand::Rng as _;

use super::{MazeGenerator, Random};
use crate::{board::CellState, disjoint::DisjointSet, visit::Painter};

/// Randomized Kruskal's algorithm: knock down random walls between cells that
/// are not connected yet.
#[derive(Debug)]
pub struct RndKruskals;

impl MazeGenerator for RndKruskals {
    fn generate(&self, painter: &mut Painter<'_, '_>, rng: &mut Random) {
        let grid = painter.grid();
        let mut walls = grid.wall_list();
        let mut sets = DisjointSet::new(grid.cell_count());

        while !sets.is_merged() && !walls.is_empty() {
            let (from, to) = walls.swap_remove(rng.gen_range(0..walls.len()));
            let (from_i, to_i) = (painter.grid().index(from), painter.grid().index(to));

            if sets.union(from_i, to_i) {
                painter.connect(from, to);
                painter.visit(from, CellState::Processing);
                painter.visit_quiet(from, CellState::Visited);
                painter.visit(to, CellState::Visited);
            }
        }

        // a single cell has no walls to knock down
        if painter.grid().cell_count() == 1 {
            let only = painter.grid().start();
            painter.visit(only, CellState::Visited);
        }
    }
}
