use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared progress counter, readable from another thread while a worker runs.
#[derive(Clone, Debug, Default)]
pub struct ProgressHandle {
    progress: Arc<Mutex<Progress>>,
}

impl ProgressHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, Progress> {
        // the counter stays meaningful even if a holder panicked
        self.progress.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn progress(&self) -> Progress {
        *self.lock()
    }

    /// Starts a new phase of `from` units of work.
    pub fn restart(&self, from: usize) {
        *self.lock() = Progress::new(0, from);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub from: usize,
    pub is_done: bool,
}

impl Progress {
    pub fn new(done: usize, from: usize) -> Self {
        Self {
            done,
            from,
            is_done: false,
        }
    }

    pub fn percent(&self) -> f32 {
        if self.from == 0 {
            return if self.is_done { 1.0 } else { 0.0 };
        }
        self.done as f32 / self.from as f32
    }

    pub fn finish(&mut self) {
        self.done = self.from;
        self.is_done = true;
    }
}
