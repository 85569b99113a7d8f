mod logging;
mod pmcore;
mod settings;

use std::{fs, path::PathBuf};

use clap::Parser;
use log::info;
use pmaze_core::{
    random::random_source,
    render::{render, render_path},
    Maze,
};

use pmcore::AppError;
use settings::{LogLevel, Settings};

#[derive(Parser, Debug)]
#[clap(version, about, name = "pmaze")]
struct Args {
    #[clap(short = 'W', long, help = "Maze width in cells")]
    width: Option<i32>,
    #[clap(short = 'H', long, help = "Maze height in cells")]
    height: Option<i32>,
    #[clap(short, long, help = "Seed for the random generator")]
    seed: Option<u64>,
    #[clap(long, action, help = "Print the path from entrance to exit")]
    solve: bool,
    #[clap(short, long, help = "Write the maze to a file instead of stdout")]
    output: Option<PathBuf>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More verbose logging, repeatable")]
    verbose: u8,
    #[clap(short, long, action, help = "Only log errors")]
    quiet: bool,
    #[clap(long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show resolved config and quit")]
    debug_config: bool,
}

impl Args {
    /// Command line values take precedence over the settings file.
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(width) = self.width {
            settings = settings.set_width(width);
        }
        if let Some(height) = self.height {
            settings = settings.set_height(height);
        }
        if let Some(seed) = self.seed {
            settings = settings.set_seed(seed);
        }
        if self.solve {
            settings = settings.set_show_solution(true);
        }
        if let Some(output) = &self.output {
            settings = settings.set_output(output.clone());
        }

        if self.quiet {
            settings = settings.set_log_level(LogLevel::Error);
        } else if self.verbose > 0 {
            let level = settings.get_log_level().raised(self.verbose);
            settings = settings.set_log_level(level);
        }

        settings
    }
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let (mut rng, seed) = random_source(settings.get_seed());
    if settings.get_seed().is_none() {
        eprintln!("Seed: {}", seed);
    }

    let mut maze = Maze::new(settings.get_width(), settings.get_height())?;
    maze.generate(&mut rng)?;

    let mut out = render(&maze);
    if settings.get_show_solution() {
        out.push_str(&render_path(&maze.solve()));
    }

    match settings.get_output() {
        Some(path) => {
            fs::write(path, out)?;
            info!("maze written to {}", path.display());
        }
        None => print!("{}", out),
    }

    Ok(())
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Settings::default_path()?,
    };

    if args.show_config_path {
        if let Some(s) = config_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", config_path);
        }
        return Ok(());
    }

    if args.reset_config {
        Settings::reset_config(&config_path)?;
        return Ok(());
    }

    let settings = args.apply(Settings::load(&config_path)?).populate();

    if args.debug_config {
        print!("{}", settings.to_ron()?);
        return Ok(());
    }

    better_panic::install();
    logging::init(settings.get_log_level().to_level_filter())?;

    run(&settings)
}
