use std::{cmp::Reverse, collections::BinaryHeap};

use hashbrown::HashSet;

use super::{expand, new_parents, MazeSolver, Parents};
use crate::{algorithms::Random, array::Array2D, dims::Dims, visit::Painter};

/// Cost triple of a discovered cell.
///
/// `g` is the straight Manhattan distance from the start terminal, not the
/// length of the walked path, so this is a best-first search on `g + h`
/// rather than textbook A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Costs {
    pub g: u32,
    pub h: u32,
    pub f: u32,
}

impl Costs {
    pub fn of(cell: Dims, start: Dims, end: Dims) -> Self {
        let g = cell.manhattan(start);
        let h = cell.manhattan(end);
        Self { g, h, f: g + h }
    }
}

/// Priority queue search ordered by `(f, h, cell)`.
#[derive(Debug)]
pub struct AStar;

impl MazeSolver for AStar {
    fn search(&self, painter: &mut Painter<'_, '_>, _: &mut Random) -> Option<Parents> {
        let grid = painter.grid();
        let (start, end) = (grid.start(), grid.end());
        let mut parents = new_parents(grid);
        let mut costs = Array2D::new(None, grid.width(), grid.height());
        let mut closed = HashSet::with_capacity(grid.cell_count());
        let mut open = BinaryHeap::new();

        let start_costs = Costs::of(start, start, end);
        costs[start] = Some(start_costs);
        open.push(Reverse((start_costs.f, start_costs.h, start)));

        while let Some(Reverse((_, _, cell))) = open.pop() {
            if !closed.insert(cell) {
                continue;
            }

            expand(painter, cell);
            if cell == end {
                return Some(parents);
            }

            for &next in painter.grid().passages(cell) {
                if closed.contains(&next) || costs[next].is_some() {
                    continue;
                }

                let next_costs = Costs::of(next, start, end);
                costs[next] = Some(next_costs);
                parents[next] = Some(cell);
                open.push(Reverse((next_costs.f, next_costs.h, next)));
            }
        }

        None
    }
}
