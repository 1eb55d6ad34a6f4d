#![warn(clippy::all)]

use anyhow::Context;
use conway_gif::cli::{self, Command};
use log::info;
use std::{fs::File, io::BufWriter};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match cli::parse_args(std::env::args().skip(1))
        .context("Run with --help for usage information")?
    {
        Command::Run(config) => config,
        Command::Help => {
            println!("{}", cli::HELP_TEXT);
            return Ok(());
        }
        Command::HelpModel => {
            println!("{}", cli::MODEL_HELP_TEXT);
            return Ok(());
        }
        Command::Version => {
            println!("conway-gif {}", cli::VERSION);
            return Ok(());
        }
    };

    let timer = std::time::Instant::now();
    let animation = config.animate().context("Failed to build the animation")?;
    info!(
        "Simulated {} generations in {:?}",
        animation.len(),
        timer.elapsed()
    );

    let file = File::create(&config.filename)
        .with_context(|| format!("Failed to create {}", config.filename))?;
    animation
        .write_gif(BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", config.filename))?;
    info!("Saved {}", config.filename);
    Ok(())
}
