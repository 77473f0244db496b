use smallvec::SmallVec;

use crate::{array::Array2D, dims::Dims, error::MazeError};

use super::cell::{CellState, CellWall};

/// Up to four cells, the most any cell can be adjacent to.
pub type Neighbors = SmallVec<[Dims; 4]>;

/// Rectangular grid with per-cell state and the passage graph.
#[derive(Debug, Clone)]
pub struct Grid {
    states: Array2D<CellState>,
    passages: Array2D<Neighbors>,
    passage_count: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::Configuration { width, height });
        }

        Ok(Grid {
            states: Array2D::new(CellState::Unvisited, width, height),
            passages: Array2D::new(Neighbors::new(), width, height),
            passage_count: 0,
        })
    }

    /// Replaces the grid with a fresh one of the given size.
    ///
    /// On error the current grid is left as it was.
    pub fn reset(&mut self, width: usize, height: usize) -> Result<(), MazeError> {
        *self = Grid::new(width, height)?;
        Ok(())
    }

    /// Wipes states and passages, keeping the size.
    pub fn clear(&mut self) {
        self.states.fill(CellState::Unvisited);
        self.passages.iter_mut().for_each(|list| list.clear());
        self.passage_count = 0;
    }

    pub fn width(&self) -> usize {
        self.states.width()
    }

    pub fn height(&self) -> usize {
        self.states.height()
    }

    pub fn size(&self) -> Dims {
        self.states.size()
    }

    pub fn cell_count(&self) -> usize {
        self.states.len()
    }

    pub fn start(&self) -> Dims {
        Dims::ZERO
    }

    pub fn end(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_terminal(&self, cell: Dims) -> bool {
        cell == self.start() || cell == self.end()
    }

    pub fn is_in_bounds(&self, cell: Dims) -> bool {
        self.states.dim_to_idx(cell).is_some()
    }

    /// Canonical index of the cell, `y * width + x`.
    pub fn index(&self, cell: Dims) -> usize {
        cell.linear_index(self.size())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Dims> {
        Dims::iter_fill(Dims::ZERO, self.size())
    }

    pub fn state(&self, cell: Dims) -> CellState {
        self.states[cell]
    }

    pub fn set_state(&mut self, cell: Dims, state: CellState) {
        self.states[cell] = state;
    }

    /// Grid-adjacent cells, ignoring passages: left, right, up, down.
    pub fn neighbors(&self, cell: Dims) -> Neighbors {
        CellWall::get_in_order()
            .into_iter()
            .map(|wall| cell + wall.to_coord())
            .filter(|&pos| self.is_in_bounds(pos))
            .collect()
    }

    pub fn neighbors_in_state(&self, cell: Dims, state: CellState) -> Neighbors {
        self.neighbors(cell)
            .into_iter()
            .filter(|&pos| self.state(pos) == state)
            .collect()
    }

    pub fn unvisited_neighbors(&self, cell: Dims) -> Neighbors {
        self.neighbors_in_state(cell, CellState::Unvisited)
    }

    /// Neighbors in exactly [`CellState::Visited`]; terminals do not count.
    pub fn visited_neighbors(&self, cell: Dims) -> Neighbors {
        self.neighbors_in_state(cell, CellState::Visited)
    }

    /// Cells reachable from `cell` through one passage, in insertion order.
    pub fn passages(&self, cell: Dims) -> &[Dims] {
        &self.passages[cell]
    }

    pub fn are_connected(&self, a: Dims, b: Dims) -> bool {
        self.passages
            .get(a)
            .map(|list| list.contains(&b))
            .unwrap_or(false)
    }

    /// Number of undirected passages.
    pub fn passage_count(&self) -> usize {
        self.passage_count
    }

    /// Opens a passage between two grid-adjacent cells.
    ///
    /// Requests for cells that are not adjacent, out of bounds or already
    /// connected are ignored.
    pub fn connect(&mut self, a: Dims, b: Dims) {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) || CellWall::between(a, b).is_none() {
            log::warn!("Refusing to connect non-adjacent cells {} and {}", a, b);
            return;
        }

        if self.are_connected(a, b) {
            return;
        }

        self.passages[a].push(b);
        self.passages[b].push(a);
        self.passage_count += 1;
    }

    /// Every pair of grid-adjacent cells, each pair listed once as
    /// `(cell, right)` then `(cell, below)`, row-major.
    pub fn wall_list(&self) -> Vec<(Dims, Dims)> {
        let (w, h) = (self.width(), self.height());
        let mut walls = Vec::with_capacity(h * (w - 1) + w * (h - 1));

        for cell in self.cells() {
            for wall in [CellWall::Right, CellWall::Bottom] {
                let other = cell + wall.to_coord();
                if self.is_in_bounds(other) {
                    walls.push((cell, other));
                }
            }
        }

        walls
    }

    /// No cell is left unvisited or in flight.
    pub fn is_generated(&self) -> bool {
        self.states.all(|state| state.is_settled())
    }

    pub fn is_row_settled(&self, row: i32) -> bool {
        (0..self.size().0).all(|x| self.state(Dims(x, row)) == CellState::Visited)
    }

    /// State every cell should have as the solve baseline.
    ///
    /// With `keep_solution`, cells already on the solution path stay there.
    pub fn baseline_state(&self, cell: Dims, keep_solution: bool) -> CellState {
        if self.is_terminal(cell) {
            CellState::Terminal
        } else if keep_solution && self.state(cell) == CellState::OnSolutionPath {
            CellState::OnSolutionPath
        } else {
            CellState::Visited
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert_eq!(
            Grid::new(0, 4).unwrap_err(),
            MazeError::Configuration {
                width: 0,
                height: 4
            }
        );
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn failed_reset_keeps_previous_grid() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.connect(Dims(0, 0), Dims(1, 0));

        assert!(grid.reset(0, 0).is_err());
        assert_eq!(grid.size(), Dims(3, 3));
        assert!(grid.are_connected(Dims(0, 0), Dims(1, 0)));

        grid.reset(4, 2).unwrap();
        assert_eq!(grid.size(), Dims(4, 2));
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn neighbors_in_fixed_order() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            grid.neighbors(Dims(1, 1)).as_slice(),
            &[Dims(0, 1), Dims(2, 1), Dims(1, 0), Dims(1, 2)]
        );
        assert_eq!(
            grid.neighbors(Dims(0, 0)).as_slice(),
            &[Dims(1, 0), Dims(0, 1)]
        );
        assert!(Grid::new(1, 1).unwrap().neighbors(Dims(0, 0)).is_empty());
    }

    #[test]
    fn connect_is_symmetric_and_rejects_far_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.connect(Dims(1, 1), Dims(1, 2));
        grid.connect(Dims(1, 2), Dims(1, 1));
        grid.connect(Dims(0, 0), Dims(2, 0));
        grid.connect(Dims(0, 0), Dims(1, 1));
        grid.connect(Dims(2, 2), Dims(3, 2));

        assert_eq!(grid.passage_count(), 1);
        assert_eq!(grid.passages(Dims(1, 1)), &[Dims(1, 2)]);
        assert_eq!(grid.passages(Dims(1, 2)), &[Dims(1, 1)]);
        assert!(grid.passages(Dims(0, 0)).is_empty());
    }

    #[test]
    fn terminal_is_not_visited() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_state(Dims(0, 0), CellState::Terminal);
        grid.set_state(Dims(1, 1), CellState::Visited);

        assert_eq!(grid.visited_neighbors(Dims(1, 0)).as_slice(), &[Dims(1, 1)]);
        assert!(grid.unvisited_neighbors(Dims(1, 0)).is_empty());
    }

    #[test]
    fn wall_list_covers_every_adjacent_pair() {
        let grid = Grid::new(3, 2).unwrap();
        let walls = grid.wall_list();
        assert_eq!(walls.len(), 2 * 2 + 3);
        assert_eq!(walls[0], (Dims(0, 0), Dims(1, 0)));
        assert_eq!(walls[1], (Dims(0, 0), Dims(0, 1)));
        assert!(Grid::new(1, 1).unwrap().wall_list().is_empty());
    }

    #[test]
    fn clear_wipes_states_and_passages() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.connect(Dims(0, 0), Dims(0, 1));
        grid.set_state(Dims(0, 0), CellState::Visited);
        grid.clear();

        assert_eq!(grid.passage_count(), 0);
        assert!(grid.cells().all(|c| grid.passages(c).is_empty()));
        assert!(grid.cells().all(|c| grid.state(c) == CellState::Unvisited));
        assert!(!grid.is_generated());
    }
}
