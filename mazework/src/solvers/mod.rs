mod a_star;
mod breadth_first_search;
mod depth_first_search;

use std::{fmt, ops, str::FromStr, time::Duration};

use hashbrown::HashSet;

pub use a_star::{AStar, Costs};
pub use breadth_first_search::BreadthFirstSearch;
pub use depth_first_search::DepthFirstSearch;

use crate::{
    algorithms::Random,
    array::Array2D,
    board::{CellState, Grid},
    dims::Dims,
    error::{AlgorithmKind, MazeError},
    visit::Painter,
};

/// Longest pause suggested for a single solution-path cell.
pub const PATH_DELAY_CAP: Duration = Duration::from_millis(50);

/// Predecessor of every discovered cell. The start is its own parent.
pub type Parents = Array2D<Option<Dims>>;

/// Searches the passage graph from the start terminal to the end terminal.
pub trait MazeSolver: fmt::Debug + Sync + Send {
    /// Returns the parent map once the end is reached, `None` if it can't be.
    fn search(&self, painter: &mut Painter<'_, '_>, rng: &mut Random) -> Option<Parents>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolveAlgorithm {
    DepthFirstSearch,
    #[default]
    BreadthFirstSearch,
    AStar,
}

impl SolveAlgorithm {
    pub const ALL: [SolveAlgorithm; 3] = [
        SolveAlgorithm::DepthFirstSearch,
        SolveAlgorithm::BreadthFirstSearch,
        SolveAlgorithm::AStar,
    ];

    pub fn solver(self) -> &'static dyn MazeSolver {
        match self {
            SolveAlgorithm::DepthFirstSearch => &DepthFirstSearch,
            SolveAlgorithm::BreadthFirstSearch => &BreadthFirstSearch,
            SolveAlgorithm::AStar => &AStar,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SolveAlgorithm::DepthFirstSearch => "DFS",
            SolveAlgorithm::BreadthFirstSearch => "BFS",
            SolveAlgorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for SolveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolveAlgorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Ok(match key.as_str() {
            "dfs" | "depthfirstsearch" => SolveAlgorithm::DepthFirstSearch,
            "bfs" | "breadthfirstsearch" => SolveAlgorithm::BreadthFirstSearch,
            "a*" | "astar" => SolveAlgorithm::AStar,
            _ => {
                return Err(MazeError::InvalidAlgorithm {
                    kind: AlgorithmKind::Solving,
                    name: s.to_string(),
                })
            }
        })
    }
}

/// Cells from the start terminal to the end terminal, both included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path(Vec<Dims>);

impl Path {
    pub fn new(cells: Vec<Dims>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Dims] {
        &self.0
    }

    pub fn start(&self) -> Option<Dims> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<Dims> {
        self.0.last().copied()
    }

    /// Number of passages walked, one less than the number of cells.
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Runs from the grid's start to its end through passages only, without
    /// visiting a cell twice.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());

        self.start() == Some(grid.start())
            && self.end() == Some(grid.end())
            && self.0.iter().all(|&cell| seen.insert(cell))
            && self.0.windows(2).all(|w| grid.are_connected(w[0], w[1]))
    }
}

impl ops::Deref for Path {
    type Target = [Dims];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Marks `cell` as being expanded, terminals keep their look.
fn expand(painter: &mut Painter<'_, '_>, cell: Dims) {
    let grid = painter.grid();
    if !grid.is_terminal(cell) && grid.state(cell) != CellState::Processing {
        painter.visit(cell, CellState::Processing);
    }
}

fn new_parents(grid: &Grid) -> Parents {
    let mut parents = Array2D::new(None, grid.width(), grid.height());
    parents[grid.start()] = Some(grid.start());
    parents
}

/// Follows parent links back from the end terminal and marks the path.
pub fn reconstruct(parents: &Parents, painter: &mut Painter<'_, '_>) -> Option<Path> {
    let delay = painter.delay().min(PATH_DELAY_CAP);
    let total = painter.grid().cell_count();

    let mut cells = Vec::new();
    let mut cell = painter.grid().end();
    loop {
        if cells.len() == total {
            return None;
        }

        cells.push(cell);
        if !painter.grid().is_terminal(cell) {
            painter.visit_for(cell, CellState::OnSolutionPath, delay);
        }

        let parent = (*parents.get(cell)?)?;
        if parent == cell {
            break;
        }
        cell = parent;
    }

    cells.reverse();
    Some(Path(cells))
}

/// Normalizes the grid, searches and marks the solution. Cells off the path
/// end up [`Visited`](CellState::Visited) again.
pub fn solve(
    algorithm: SolveAlgorithm,
    painter: &mut Painter<'_, '_>,
    rng: &mut Random,
) -> Option<Path> {
    painter.normalize(false);

    let path = algorithm
        .solver()
        .search(painter, rng)
        .and_then(|parents| reconstruct(&parents, painter));

    painter.normalize(true);
    path
}
