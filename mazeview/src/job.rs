use std::{
    fmt,
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam::channel::{unbounded, Receiver, Sender};
use mazework::{
    algorithms::GenAlgorithm,
    board::{CellState, Neighbors},
    dims::Dims,
    progress::{Progress, ProgressHandle},
    solvers::SolveAlgorithm,
    visit::{Tracked, Visit, VisitSink},
    Maze,
};

use crate::error::AppError;

/// What the worker should do with the maze it is given.
#[derive(Debug, Clone, Copy)]
pub struct Task {
    pub generator: GenAlgorithm,
    pub solver: Option<SolveAlgorithm>,
    pub delay: Duration,
    /// Whether the worker sleeps for the delay hints.
    pub paced: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Generating(GenAlgorithm),
    Solving(SolveAlgorithm),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Generating(algorithm) => write!(f, "Generating with {algorithm}"),
            Phase::Solving(algorithm) => write!(f, "Solving with {algorithm}"),
        }
    }
}

/// Owned copy of a [`Visit`], so it can cross the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEvent {
    pub cell: Dims,
    pub state: CellState,
    pub passages: Neighbors,
}

impl From<Visit<'_>> for CellEvent {
    fn from(visit: Visit<'_>) -> Self {
        Self {
            cell: visit.cell,
            state: visit.state,
            passages: Neighbors::from_slice(visit.passages),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    Phase(Phase),
    Cell(CellEvent),
}

struct ChannelSink {
    sender: Sender<JobEvent>,
    paced: bool,
}

impl VisitSink for ChannelSink {
    fn on_cell_state_changed(&mut self, visit: Visit<'_>) {
        // nobody is watching anymore, finish at full speed
        let sent = self.sender.send(JobEvent::Cell(visit.into())).is_ok();
        if sent && self.paced && !visit.delay.is_zero() {
            thread::sleep(visit.delay);
        }
    }
}

pub struct RunningJob<R> {
    pub handle: JoinHandle<R>,
    pub progress: ProgressHandle,
}

impl<R> RunningJob<R> {
    pub fn progress(&self) -> Progress {
        self.progress.progress()
    }

    pub fn join(self) -> Result<R, AppError> {
        self.handle.join().map_err(|_| AppError::WorkerPanicked)
    }
}

/// Moves the maze onto a worker thread that generates and optionally solves
/// it. Events arrive on the returned receiver, which closes once the worker
/// is done; the maze comes back through [`RunningJob::join`].
pub fn spawn(mut maze: Maze, task: Task) -> (RunningJob<Maze>, Receiver<JobEvent>) {
    let (sender, receiver) = unbounded();
    let progress = ProgressHandle::new();
    let progress_clone = progress.clone();

    let handle = thread::spawn(move || {
        let cells = maze.grid().cell_count();
        let sink = ChannelSink {
            sender: sender.clone(),
            paced: task.paced,
        };

        // a dropped receiver only means nobody is watching, the maze is still built
        let _ = sender.send(JobEvent::Phase(Phase::Generating(task.generator)));
        let mut tracked = Tracked::new(sink, progress_clone, cells);
        maze.generate(task.generator, task.delay, &mut tracked);
        let mut sink = tracked.into_inner();

        if let Some(solver) = task.solver {
            let _ = sender.send(JobEvent::Phase(Phase::Solving(solver)));
            maze.solve(solver, task.delay, &mut sink);
        }

        maze
    });

    (RunningJob { handle, progress }, receiver)
}
