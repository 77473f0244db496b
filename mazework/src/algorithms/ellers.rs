use hashbrown::HashMap;
use rand::{seq::SliceRandom as _, Rng as _};
use smallvec::SmallVec;

use super::{MazeGenerator, Random};
use crate::{board::CellState, dims::Dims, disjoint::DisjointSet, visit::Painter};

/// Eller's algorithm, one row at a time from the top.
///
/// Only the current row and the row below it are ever touched in the
/// disjoint set, so sets carried into the next row are the only state that
/// survives between rows.
#[derive(Debug)]
pub struct Ellers;

impl Ellers {
    /// Joins horizontal neighbors of different sets; at random, unless it is
    /// the last row, where every pair of different sets must be joined.
    fn join_row(
        painter: &mut Painter<'_, '_>,
        rng: &mut Random,
        sets: &mut DisjointSet,
        row: i32,
        is_last: bool,
    ) {
        let width = painter.grid().size().0;

        for x in 0..width {
            let cell = Dims(x, row);
            painter.visit(cell, CellState::Visited);

            if x + 1 == width {
                continue;
            }

            let right = Dims(x + 1, row);
            let (a, b) = (painter.grid().index(cell), painter.grid().index(right));
            if (is_last || rng.gen_bool(0.5)) && !sets.same_set(a, b) {
                sets.union(a, b);
                painter.connect(cell, right);
            }
        }
    }

    /// Every set of the row goes down through at least one random member,
    /// other members go down on a coin flip.
    fn carry_down(
        painter: &mut Painter<'_, '_>,
        rng: &mut Random,
        sets: &mut DisjointSet,
        row: i32,
    ) {
        let width = painter.grid().size().0;

        // groups in order of first appearance, hash map order must not leak into the rng
        let mut groups: Vec<SmallVec<[i32; 4]>> = Vec::new();
        let mut group_of = HashMap::new();
        for x in 0..width {
            let root = sets.find(painter.grid().index(Dims(x, row)));
            let slot = *group_of.entry(root).or_insert_with(|| {
                groups.push(SmallVec::new());
                groups.len() - 1
            });
            groups[slot].push(x);
        }

        for members in groups {
            let Some(&forced) = members.choose(rng) else {
                continue;
            };

            for x in members {
                if x == forced || rng.gen_bool(0.5) {
                    let (above, below) = (Dims(x, row), Dims(x, row + 1));
                    sets.union(painter.grid().index(above), painter.grid().index(below));
                    painter.connect(above, below);
                }
            }
        }

        for x in 0..width {
            painter.visit(Dims(x, row + 1), CellState::Processing);
        }
    }
}

impl MazeGenerator for Ellers {
    fn generate(&self, painter: &mut Painter<'_, '_>, rng: &mut Random) {
        let height = painter.grid().size().1;
        let mut sets = DisjointSet::new(painter.grid().cell_count());

        for row in 0..height {
            let is_last = row == height - 1;
            Self::join_row(painter, rng, &mut sets, row, is_last);
            if !is_last {
                Self::carry_down(painter, rng, &mut sets, row);
            }
        }
    }
}
