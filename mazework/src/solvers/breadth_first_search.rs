use std::collections::VecDeque;

use super::{expand, new_parents, MazeSolver, Parents};
use crate::{algorithms::Random, visit::Painter};

/// Level-order search. The parent of a cell is fixed when the cell is first
/// queued, so the path found has the fewest passages possible.
#[derive(Debug)]
pub struct BreadthFirstSearch;

impl MazeSolver for BreadthFirstSearch {
    fn search(&self, painter: &mut Painter<'_, '_>, _: &mut Random) -> Option<Parents> {
        let (start, end) = (painter.grid().start(), painter.grid().end());
        let mut parents = new_parents(painter.grid());
        let mut queue = VecDeque::from([start]);

        while let Some(cell) = queue.pop_front() {
            expand(painter, cell);
            if cell == end {
                return Some(parents);
            }

            for &next in painter.grid().passages(cell) {
                if parents[next].is_none() {
                    parents[next] = Some(cell);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}
