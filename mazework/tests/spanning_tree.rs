use std::{collections::VecDeque, time::Duration};

use mazework::{
    algorithms::GenAlgorithm,
    board::{CellState, Grid},
    dims::Dims,
    error::AlgorithmKind,
    solvers::{Path, SolveAlgorithm},
    visit::NoopSink,
    Maze, MazeError,
};

fn generated(algorithm: GenAlgorithm, width: usize, height: usize, seed: u64) -> Maze {
    let mut maze = Maze::with_seed(width, height, seed).unwrap();
    maze.generate(algorithm, Duration::ZERO, &mut NoopSink);
    maze
}

fn solved(maze: &mut Maze, algorithm: SolveAlgorithm) -> Path {
    maze.solve(algorithm, Duration::ZERO, &mut NoopSink)
        .cloned()
        .unwrap_or_else(|| panic!("{algorithm} found no path"))
}

/// Passage graph distances from `from`, `None` for unreachable cells.
fn distances(grid: &Grid, from: Dims) -> Vec<Option<usize>> {
    let mut dist = vec![None; grid.cell_count()];
    dist[grid.index(from)] = Some(0);

    let mut queue = VecDeque::from([from]);
    while let Some(cell) = queue.pop_front() {
        let d = dist[grid.index(cell)].unwrap();
        for &next in grid.passages(cell) {
            let slot = &mut dist[grid.index(next)];
            if slot.is_none() {
                *slot = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

fn edges(grid: &Grid) -> Vec<(Dims, Dims)> {
    let mut edges: Vec<_> = grid
        .cells()
        .flat_map(move |a| grid.passages(a).iter().map(move |&b| (a.min(b), a.max(b))))
        .collect();
    edges.sort();
    edges.dedup();
    edges
}

#[test]
fn spanning_tree_on_every_small_size() {
    for algorithm in GenAlgorithm::ALL {
        for width in 2..=10 {
            for height in 2..=10 {
                let maze = generated(algorithm, width, height, (width * 31 + height) as u64);
                let grid = maze.grid();
                let total = width * height;

                assert_eq!(edges(grid).len(), total - 1, "{algorithm} {width}x{height}");
                assert_eq!(grid.passage_count(), total - 1);
                assert!(
                    distances(grid, grid.start()).iter().all(Option::is_some),
                    "{algorithm} {width}x{height} is not connected"
                );
            }
        }
    }
}

#[test]
fn same_seed_same_passages() {
    for algorithm in GenAlgorithm::ALL {
        let a = generated(algorithm, 9, 7, 1234);
        let b = generated(algorithm, 9, 7, 1234);
        assert_eq!(edges(a.grid()), edges(b.grid()), "{algorithm}");
    }
}

#[test]
fn regenerating_drops_old_passages() {
    for algorithm in GenAlgorithm::ALL {
        let mut maze = Maze::with_seed(8, 8, 7).unwrap();
        let grid = maze.grid_mut();
        for (a, b) in grid.wall_list() {
            grid.connect(a, b);
        }
        assert_eq!(maze.grid().passage_count(), 112);

        maze.generate(algorithm, Duration::ZERO, &mut NoopSink);
        assert_eq!(edges(maze.grid()).len(), 63, "{algorithm}");
        assert!(distances(maze.grid(), Dims(0, 0)).iter().all(Option::is_some));
    }
}

#[test]
fn bfs_finds_a_shortest_path() {
    for algorithm in GenAlgorithm::ALL {
        for seed in 0..4 {
            let mut maze = generated(algorithm, 10, 8, seed);
            let expected = distances(maze.grid(), maze.grid().start())[maze.grid().index(maze.grid().end())];

            let path = solved(&mut maze, SolveAlgorithm::BreadthFirstSearch);
            assert!(path.is_valid_on(maze.grid()));
            assert_eq!(Some(path.edge_count()), expected, "{algorithm} seed {seed}");
        }
    }
}

#[test]
fn every_solver_finds_a_valid_path() {
    for algorithm in GenAlgorithm::ALL {
        for solver in SolveAlgorithm::ALL {
            let mut maze = generated(algorithm, 7, 9, 99);
            let path = solved(&mut maze, solver);
            assert!(path.is_valid_on(maze.grid()), "{algorithm} / {solver}");

            // perfect mazes have one simple path only
            let bfs = solved(&mut maze, SolveAlgorithm::BreadthFirstSearch);
            assert_eq!(path, bfs, "{algorithm} / {solver}");
        }
    }
}

#[test]
fn two_cells() {
    for algorithm in GenAlgorithm::ALL {
        let mut maze = generated(algorithm, 2, 1, 0);
        assert_eq!(edges(maze.grid()), vec![(Dims(0, 0), Dims(1, 0))]);

        let path = solved(&mut maze, SolveAlgorithm::BreadthFirstSearch);
        assert_eq!(path.cells(), &[Dims(0, 0), Dims(1, 0)]);
    }
}

#[test]
fn one_cell() {
    for algorithm in GenAlgorithm::ALL {
        let mut maze = generated(algorithm, 1, 1, 0);
        assert_eq!(maze.grid().passage_count(), 0);
        assert_eq!(maze.grid().state(Dims(0, 0)), CellState::Terminal);

        for solver in SolveAlgorithm::ALL {
            let path = solved(&mut maze, solver);
            assert_eq!(path.cells(), &[Dims(0, 0)]);
            assert_eq!(path.edge_count(), 0);
        }
    }
}

#[test]
fn snake_with_dead_branch() {
    // (0,0) (1,0) (2,0)
    //               |
    // (0,1) (1,1) (2,1)     (0,1) hangs off (1,1) as a dead end
    //   x     |
    // (0,2)-(1,2)-(2,2)
    let mut maze = Maze::with_seed(3, 3, 0).unwrap();
    let grid = maze.grid_mut();
    for (a, b) in [
        (Dims(0, 0), Dims(1, 0)),
        (Dims(1, 0), Dims(2, 0)),
        (Dims(2, 0), Dims(2, 1)),
        (Dims(2, 1), Dims(1, 1)),
        (Dims(1, 1), Dims(0, 1)),
        (Dims(1, 1), Dims(1, 2)),
        (Dims(1, 2), Dims(0, 2)),
        (Dims(1, 2), Dims(2, 2)),
    ] {
        grid.connect(a, b);
    }

    let expected = [
        Dims(0, 0),
        Dims(1, 0),
        Dims(2, 0),
        Dims(2, 1),
        Dims(1, 1),
        Dims(1, 2),
        Dims(2, 2),
    ];
    for solver in SolveAlgorithm::ALL {
        let path = solved(&mut maze, solver);
        assert_eq!(path.cells(), &expected, "{solver}");
        assert_eq!(path.edge_count(), 6);
    }

    assert_eq!(maze.grid().state(Dims(0, 1)), CellState::Visited);
    assert_eq!(maze.grid().state(Dims(1, 1)), CellState::OnSolutionPath);
}

#[test]
fn states_after_generate_and_solve() {
    for algorithm in GenAlgorithm::ALL {
        let mut maze = generated(algorithm, 6, 5, 17);
        for cell in maze.grid().cells() {
            let expected = if maze.grid().is_terminal(cell) {
                CellState::Terminal
            } else {
                CellState::Visited
            };
            assert_eq!(maze.grid().state(cell), expected, "{algorithm} after generate");
        }

        let path = solved(&mut maze, SolveAlgorithm::AStar);
        for cell in maze.grid().cells() {
            let expected = if maze.grid().is_terminal(cell) {
                CellState::Terminal
            } else if path.contains(&cell) {
                CellState::OnSolutionPath
            } else {
                CellState::Visited
            };
            assert_eq!(maze.grid().state(cell), expected, "{algorithm} after solve");
        }
    }
}

#[test]
fn errors_leave_a_clean_grid() {
    assert_eq!(
        Maze::with_seed(4, 0, 0).unwrap_err(),
        MazeError::Configuration {
            width: 4,
            height: 0
        }
    );

    let mut maze = generated(GenAlgorithm::Wilson, 5, 5, 3);
    assert!(maze.resize(0, 0).is_err());
    assert_eq!(maze.grid().passage_count(), 24);

    let err = maze
        .generate_named("Growing Tree", Duration::ZERO, &mut NoopSink)
        .unwrap_err();
    assert!(matches!(
        err,
        MazeError::InvalidAlgorithm {
            kind: AlgorithmKind::Generation,
            ..
        }
    ));
    assert_eq!(maze.grid().passage_count(), 0);
    assert!(maze
        .grid()
        .cells()
        .all(|c| maze.grid().state(c) == CellState::Unvisited));
}
