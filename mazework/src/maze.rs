use std::time::Duration;

use rand::SeedableRng as _;

use crate::{
    algorithms::{GenAlgorithm, Random},
    board::Grid,
    error::MazeError,
    solvers::{self, Path, SolveAlgorithm},
    visit::{Painter, VisitSink},
};

/// One grid, the random source that builds it and the last solution found.
///
/// Every generator and solver borrows the grid mutably for the whole run, so
/// a `Maze` can't be resized or regenerated while a run is in progress.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    rng: Random,
    seed: u64,
    solution: Option<Path>,
}

impl Maze {
    /// Creates an empty maze with a seed drawn from the thread rng.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        Self::with_seed(width, height, rand::random())
    }

    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, MazeError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            rng: Random::seed_from_u64(seed),
            seed,
            solution: None,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restarts the random source, the next run behaves like on a fresh maze
    /// created with `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Random::seed_from_u64(seed);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct access for hand-built passage graphs.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.solution = None;
        &mut self.grid
    }

    /// Replaces the grid with an empty one of the new size. On error nothing
    /// changes.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), MazeError> {
        self.grid.reset(width, height)?;
        self.solution = None;
        Ok(())
    }

    /// Builds a perfect maze over a wiped grid and marks the terminals.
    pub fn generate(&mut self, algorithm: GenAlgorithm, delay: Duration, sink: &mut dyn VisitSink) {
        log::debug!(
            "Generating {}x{} maze with {} (seed {})",
            self.grid.width(),
            self.grid.height(),
            algorithm,
            self.seed
        );

        self.grid.clear();
        self.solution = None;

        let mut painter = Painter::new(&mut self.grid, sink, delay);
        algorithm.generator().generate(&mut painter, &mut self.rng);
        painter.mark_terminals();

        log::debug!(
            "{} finished with {} passages",
            algorithm,
            self.grid.passage_count()
        );
    }

    /// Like [`Maze::generate`], but takes the algorithm by name.
    ///
    /// The grid is wiped even when the name is not recognized.
    pub fn generate_named(
        &mut self,
        name: &str,
        delay: Duration,
        sink: &mut dyn VisitSink,
    ) -> Result<(), MazeError> {
        self.grid.clear();
        self.solution = None;

        let algorithm = name.parse::<GenAlgorithm>()?;
        self.generate(algorithm, delay, sink);
        Ok(())
    }

    /// Finds the path from the start to the end terminal and marks it.
    ///
    /// Returns `None` only for hand-built grids where the end is unreachable.
    pub fn solve(
        &mut self,
        algorithm: SolveAlgorithm,
        delay: Duration,
        sink: &mut dyn VisitSink,
    ) -> Option<&Path> {
        let mut painter = Painter::new(&mut self.grid, sink, delay);
        self.solution = solvers::solve(algorithm, &mut painter, &mut self.rng);

        match &self.solution {
            Some(path) => log::debug!("{} found a path of {} cells", algorithm, path.len()),
            None => log::debug!("{} could not reach the end", algorithm),
        }

        self.solution.as_ref()
    }

    pub fn solve_named(
        &mut self,
        name: &str,
        delay: Duration,
        sink: &mut dyn VisitSink,
    ) -> Result<Option<&Path>, MazeError> {
        let algorithm = name.parse::<SolveAlgorithm>()?;
        Ok(self.solve(algorithm, delay, sink))
    }

    pub fn solution(&self) -> Option<&Path> {
        self.solution.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::CellState,
        dims::Dims,
        error::AlgorithmKind,
        visit::{NoopSink, VisitLog},
    };

    fn generated(width: usize, height: usize, seed: u64) -> Maze {
        let mut maze = Maze::with_seed(width, height, seed).unwrap();
        maze.generate(GenAlgorithm::HuntAndKill, Duration::ZERO, &mut NoopSink);
        maze
    }

    #[test]
    fn generate_marks_terminals() {
        let maze = generated(5, 4, 11);
        let grid = maze.grid();

        assert_eq!(grid.passage_count(), 19);
        for cell in grid.cells() {
            let expected = if grid.is_terminal(cell) {
                CellState::Terminal
            } else {
                CellState::Visited
            };
            assert_eq!(grid.state(cell), expected);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        for algorithm in GenAlgorithm::ALL {
            let mut a = Maze::with_seed(8, 6, 42).unwrap();
            let mut b = Maze::with_seed(8, 6, 42).unwrap();
            a.generate(algorithm, Duration::ZERO, &mut NoopSink);
            b.generate(algorithm, Duration::ZERO, &mut NoopSink);

            for cell in a.grid().cells() {
                assert_eq!(a.grid().passages(cell), b.grid().passages(cell), "{algorithm}");
            }
        }
    }

    #[test]
    fn reseed_restarts_the_sequence() {
        let mut maze = generated(6, 6, 5);
        let first: Vec<_> = maze.grid().cells().map(|c| maze.grid().passages(c).to_vec()).collect();

        maze.generate(GenAlgorithm::HuntAndKill, Duration::ZERO, &mut NoopSink);
        maze.reseed(5);
        maze.generate(GenAlgorithm::HuntAndKill, Duration::ZERO, &mut NoopSink);
        let again: Vec<_> = maze.grid().cells().map(|c| maze.grid().passages(c).to_vec()).collect();

        assert_eq!(first, again);
        assert_eq!(maze.seed(), 5);
    }

    #[test]
    fn solution_is_kept_until_next_generate() {
        let mut maze = generated(4, 4, 1);
        let path = maze
            .solve(SolveAlgorithm::BreadthFirstSearch, Duration::ZERO, &mut NoopSink)
            .cloned()
            .unwrap();
        assert_eq!(maze.solution(), Some(&path));

        maze.generate(GenAlgorithm::Prim, Duration::ZERO, &mut NoopSink);
        assert_eq!(maze.solution(), None);
    }

    #[test]
    fn resize_failure_keeps_grid() {
        let mut maze = generated(3, 3, 2);
        let before = maze.grid().passage_count();

        assert_eq!(
            maze.resize(0, 4),
            Err(MazeError::Configuration {
                width: 0,
                height: 4
            })
        );
        assert_eq!(maze.grid().size(), Dims(3, 3));
        assert_eq!(maze.grid().passage_count(), before);

        maze.resize(2, 7).unwrap();
        assert_eq!(maze.grid().size(), Dims(2, 7));
        assert_eq!(maze.grid().passage_count(), 0);
    }

    #[test]
    fn unknown_generator_leaves_empty_grid() {
        let mut maze = generated(4, 3, 9);
        let err = maze
            .generate_named("Sidewinder", Duration::ZERO, &mut NoopSink)
            .unwrap_err();

        assert_eq!(
            err,
            MazeError::InvalidAlgorithm {
                kind: AlgorithmKind::Generation,
                name: "Sidewinder".to_string()
            }
        );
        assert_eq!(maze.grid().passage_count(), 0);
        assert!(maze
            .grid()
            .cells()
            .all(|c| maze.grid().state(c) == CellState::Unvisited));
    }

    #[test]
    fn named_front_doors() {
        let mut maze = Maze::with_seed(5, 5, 3).unwrap();
        maze.generate_named("hunt and kill", Duration::ZERO, &mut NoopSink)
            .unwrap();
        assert!(maze.grid().is_generated());

        let path = maze
            .solve_named("A*", Duration::ZERO, &mut NoopSink)
            .unwrap()
            .cloned()
            .unwrap();
        assert!(path.is_valid_on(maze.grid()));
        assert_eq!(maze.solution(), Some(&path));

        assert!(maze
            .solve_named("flood", Duration::ZERO, &mut NoopSink)
            .is_err());
    }

    #[test]
    fn delay_hint_reaches_sink() {
        let mut maze = Maze::with_seed(3, 2, 0).unwrap();
        let mut log = VisitLog::new();
        maze.generate(GenAlgorithm::DepthFirstSearch, Duration::from_millis(2), &mut log);

        assert!(log.total_delay > Duration::ZERO);
        assert_eq!(log.events.last().map(|e| e.1), Some(CellState::Terminal));
    }
}
