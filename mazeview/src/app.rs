use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use colored::Colorize;
use crossbeam::channel::Receiver;
use mazework::{algorithms::GenAlgorithm, solvers::SolveAlgorithm, Maze};

use crate::{
    constants::FINAL_FRAME_HOLD,
    error::AppError,
    job::{self, JobEvent, Phase, RunningJob, Task},
    renderer::{
        screen::{self, Screen},
        Canvas,
    },
    settings::Settings,
};

/// Everything one run needs, resolved from the settings.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub width: usize,
    pub height: usize,
    pub delay: Duration,
    pub generator: GenAlgorithm,
    pub solver: Option<SolveAlgorithm>,
    pub animate: bool,
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn from_settings(settings: &Settings, seed: Option<u64>) -> Result<Self, AppError> {
        settings.validate()?;

        Ok(Self {
            width: settings.get_width(),
            height: settings.get_height(),
            delay: Duration::from_millis(settings.get_delay_ms()),
            generator: settings.get_generator()?,
            solver: settings
                .get_solve()
                .then(|| settings.get_solver())
                .transpose()?,
            animate: settings.get_animate(),
            seed,
        })
    }
}

fn show_events(
    screen: &mut Screen<impl Write>,
    job: &RunningJob<Maze>,
    events: &Receiver<JobEvent>,
) -> io::Result<()> {
    let mut phase = None;

    for event in events.iter() {
        match event {
            JobEvent::Phase(next) => {
                phase = Some(next);
                screen.status(&next.to_string())?;
            }
            JobEvent::Cell(cell) => {
                screen.apply(&cell)?;
                if let Some(current @ Phase::Generating(_)) = phase {
                    let percent = job.progress().percent() * 100.0;
                    screen.status(&format!("{current} {percent:>3.0}%"))?;
                }
            }
        }
    }

    thread::sleep(FINAL_FRAME_HOLD);
    Ok(())
}

/// Generates and solves one maze, animating it when asked and possible, and
/// prints the result.
pub fn run(config: RunConfig) -> Result<Maze, AppError> {
    let RunConfig { width, height, .. } = config;
    let maze = match config.seed {
        Some(seed) => Maze::with_seed(width, height, seed)?,
        None => Maze::new(width, height)?,
    };
    log::info!("Maze {}x{} with seed {}", width, height, maze.seed());

    let animate = config.animate && screen::fits_terminal(width, height);
    if config.animate && !animate {
        log::warn!("{width}x{height} maze doesn't fit the terminal, not animating");
    }

    let task = Task {
        generator: config.generator,
        solver: config.solver,
        delay: config.delay,
        paced: animate,
    };
    let (job, events) = job::spawn(maze, task);

    if animate {
        let mut screen = Screen::start(io::stdout(), width, height)?;
        let shown = show_events(&mut screen, &job, &events);
        screen.finish()?;
        shown?;
    } else {
        events.iter().for_each(drop);
    }

    let maze = job.join()?;
    print_result(&maze, &config)?;
    Ok(maze)
}

fn print_result(maze: &Maze, config: &RunConfig) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", Canvas::from_grid(maze.grid()).render())?;

    let mut summary = format!(
        "{} maze {}x{}, seed {}",
        config.generator,
        config.width,
        config.height,
        maze.seed()
    );
    match (config.solver, maze.solution()) {
        (Some(solver), Some(path)) => {
            summary += &format!(", {solver} path of {} steps", path.edge_count())
        }
        (Some(solver), None) => summary += &format!(", {solver} found no path"),
        (None, _) => {}
    }

    writeln!(out, "{}", summary.as_str().bold())
}
