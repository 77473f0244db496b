//! Reporting of cell state changes to the outside world.
//!
//! Both generators and solvers change cell states only through a [`Painter`],
//! which writes the state into the [`Grid`] and then calls the caller's
//! [`VisitSink`] inline. The sink is the only place a run can pause: sleeping
//! there for [`Visit::delay`] paces an animation, returning at once runs the
//! algorithm at full speed.
//!
//! Grid resets are not reported, callers redraw after one.

use std::time::Duration;

use hashbrown::HashSet;

use crate::{
    board::{CellState, Grid},
    dims::Dims,
    progress::ProgressHandle,
};

/// One state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a> {
    pub cell: Dims,
    pub state: CellState,
    /// Cells the visited cell has passages to at the moment of the visit.
    pub passages: &'a [Dims],
    /// Suggested pause after this event. Advisory only.
    pub delay: Duration,
}

pub trait VisitSink {
    fn on_cell_state_changed(&mut self, visit: Visit<'_>);
}

impl<F> VisitSink for F
where
    F: FnMut(Visit<'_>),
{
    fn on_cell_state_changed(&mut self, visit: Visit<'_>) {
        self(visit)
    }
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl VisitSink for NoopSink {
    fn on_cell_state_changed(&mut self, _: Visit<'_>) {}
}

/// Records `(cell, state)` of every event, in order.
#[derive(Debug, Clone, Default)]
pub struct VisitLog {
    pub events: Vec<(Dims, CellState)>,
    pub total_delay: Duration,
}

impl VisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states_of(&self, cell: Dims) -> impl Iterator<Item = CellState> + '_ {
        self.events
            .iter()
            .filter(move |(c, _)| *c == cell)
            .map(|(_, state)| *state)
    }
}

impl VisitSink for VisitLog {
    fn on_cell_state_changed(&mut self, visit: Visit<'_>) {
        self.events.push((visit.cell, visit.state));
        self.total_delay += visit.delay;
    }
}

/// Counts cells that reached a settled state into a [`ProgressHandle`], then
/// forwards the event.
#[derive(Debug)]
pub struct Tracked<S> {
    inner: S,
    progress: ProgressHandle,
    settled: HashSet<Dims>,
}

impl<S: VisitSink> Tracked<S> {
    /// Tracks one phase of `from` cells.
    pub fn new(inner: S, progress: ProgressHandle, from: usize) -> Self {
        progress.restart(from);
        Self {
            inner,
            progress,
            settled: HashSet::with_capacity(from),
        }
    }

    pub fn into_inner(self) -> S {
        self.progress.lock().finish();
        self.inner
    }
}

impl<S: VisitSink> VisitSink for Tracked<S> {
    fn on_cell_state_changed(&mut self, visit: Visit<'_>) {
        if visit.state.is_settled() && self.settled.insert(visit.cell) {
            let mut progress = self.progress.lock();
            progress.done = self.settled.len().min(progress.from);
        }
        self.inner.on_cell_state_changed(visit);
    }
}

/// Write access to cell states that reports every change.
pub struct Painter<'g, 's> {
    grid: &'g mut Grid,
    sink: &'s mut dyn VisitSink,
    delay: Duration,
}

impl<'g, 's> Painter<'g, 's> {
    pub fn new(grid: &'g mut Grid, sink: &'s mut dyn VisitSink, delay: Duration) -> Self {
        Self { grid, sink, delay }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn connect(&mut self, a: Dims, b: Dims) {
        self.grid.connect(a, b);
    }

    /// Sets the state and reports it with the full delay.
    pub fn visit(&mut self, cell: Dims, state: CellState) {
        self.visit_for(cell, state, self.delay);
    }

    /// Sets the state and reports it without a pause, for transitions that
    /// belong to the same step as the previous one.
    pub fn visit_quiet(&mut self, cell: Dims, state: CellState) {
        self.visit_for(cell, state, Duration::ZERO);
    }

    pub fn visit_for(&mut self, cell: Dims, state: CellState, delay: Duration) {
        self.grid.set_state(cell, state);
        self.sink.on_cell_state_changed(Visit {
            cell,
            state,
            passages: self.grid.passages(cell),
            delay,
        });
    }

    pub fn mark_terminals(&mut self) {
        let (start, end) = (self.grid.start(), self.grid.end());
        self.visit_quiet(start, CellState::Terminal);
        if end != start {
            self.visit_quiet(end, CellState::Terminal);
        }
    }

    /// Brings every cell to its solve baseline, see [`Grid::baseline_state`].
    /// Only cells that actually change are reported.
    pub fn normalize(&mut self, keep_solution: bool) {
        for cell in self.grid.cells() {
            let state = self.grid.baseline_state(cell, keep_solution);
            if self.grid.state(cell) != state {
                self.visit_quiet(cell, state);
            }
        }
    }
}
