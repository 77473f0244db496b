use hashbrown::HashSet;
use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use super::{expand, new_parents, MazeSolver, Parents};
use crate::{algorithms::Random, dims::Dims, visit::Painter};

/// Stack based search that dives down a random open passage and backtracks
/// from dead ends.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl MazeSolver for DepthFirstSearch {
    fn search(&self, painter: &mut Painter<'_, '_>, rng: &mut Random) -> Option<Parents> {
        let (start, end) = (painter.grid().start(), painter.grid().end());
        let mut parents = new_parents(painter.grid());
        let mut closed = HashSet::with_capacity(painter.grid().cell_count());
        let mut stack = vec![start];

        while let Some(&cell) = stack.last() {
            expand(painter, cell);
            if cell == end {
                return Some(parents);
            }
            closed.insert(cell);

            // a neighbor with a parent is either closed or already on the stack
            let open = painter
                .grid()
                .passages(cell)
                .iter()
                .copied()
                .filter(|next| !closed.contains(next) && parents[*next].is_none())
                .collect::<SmallVec<[Dims; 4]>>();

            if let Some(&next) = open.choose(rng) {
                parents[next] = Some(cell);
                stack.push(next);
            } else {
                stack.pop();
            }
        }

        None
    }
}
