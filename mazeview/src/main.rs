use log::Log as _;
use mazeview::{
    app::{self, RunConfig},
    error::AppError,
    logging,
    settings::{LogLevel, Settings},
};
use mazework::{algorithms::GenAlgorithm, solvers::SolveAlgorithm};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazeview")]
struct Args {
    #[clap(short = 'W', long, help = "Maze width in cells (2-60)")]
    width: Option<usize>,
    #[clap(short = 'H', long, help = "Maze height in cells (2-60)")]
    height: Option<usize>,
    #[clap(short, long, help = "Pause between animation steps in ms (0-500)")]
    delay: Option<u64>,
    #[clap(short, long, help = "DFS, Kruskal, Prim, Wilson, Eller or \"Hunt and Kill\"")]
    generator: Option<GenAlgorithm>,
    #[clap(short = 'S', long, help = "DFS, BFS or A*")]
    solver: Option<SolveAlgorithm>,
    #[clap(long, help = "Seed for the maze, random if not given")]
    seed: Option<u64>,
    #[clap(long, action, help = "Print the finished maze only")]
    no_animate: bool,
    #[clap(long, action, help = "Don't solve the maze")]
    no_solve: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "Log more, repeat for even more")]
    verbose: u8,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(short, long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        settings.width = self.width.or(settings.width);
        settings.height = self.height.or(settings.height);
        settings.delay_ms = self.delay.or(settings.delay_ms);
        if let Some(generator) = self.generator {
            settings.generator = Some(generator.name().to_string());
        }
        if let Some(solver) = self.solver {
            settings.solver = Some(solver.name().to_string());
        }
        if self.no_animate {
            settings.animate = Some(false);
        }
        if self.no_solve {
            settings.solve = Some(false);
        }
        settings.log_level = match self.verbose {
            0 => settings.log_level,
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        };
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.reset_config {
        Settings::reset_config(&Settings::default_path()?)?;
        return Ok(());
    }

    if args.show_config_path {
        let settings_path = Settings::default_path()?;
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(Settings::default_path()?)?);
        return Ok(());
    }

    better_panic::install();

    let mut settings = Settings::load(Settings::default_path()?)?;
    args.apply(&mut settings);
    logging::init(settings.get_log_level().to_filter())?;

    let result = RunConfig::from_settings(&settings, args.seed).and_then(app::run);
    logging::get_logger().flush();

    result.map(|_| ())
}
