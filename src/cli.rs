//! Command-line argument parsing.
//!
//! Flags are accepted with one or two leading dashes, their value either
//! attached with `=` or given as the next argument.

use crate::{Config, Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
Renders Conway's Game of Life as an animated GIF

USAGE:
    conway-gif [OPTIONS]

OPTIONS:
    --filename=FILE      Name of the GIF file (default: conway.gif)
    --width=N            Width of the grid (default: 100)
    --height=N           Height of the grid (default: 100)
    --xratio=N           x aspect ratio (default: 1)
    --yratio=N           y aspect ratio (default: 1)
    --delay0=N           Delay of the first frame in 100th of a second (default: 100)
    --delay=N            Delay between frames in 100th of a second (default: 1)
    --population=N       Initial population (default: 100)
    --generations=N      Number of generations (default: 100)
    --model=SPEC         Color model, see --help-model (default: \"bichrome #FFFFFF\")
    --seed=N             Seed of the initial population (default: random)
    --average=N          Blend every frame with the N-1 previous ones
    --help-model         Show additional information on color models
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    RUST_LOG             Log filter (default: info)";

pub const MODEL_HELP_TEXT: &str = "\
In all cases colors are given in the format #RRGGBB in hexadecimal format:

  --model \"bichrome COLOR[:COLOR]\"
      If only one color is given, dead cells are shown in black, and living
      cells with the specified color. If two colors are given, then they are
      used for dead and living cells respectively

  --model \"gradient COLOR:COLOR[:COLOR]\"
      The first color is used for dead cells. Living cells share one color per
      generation, running from black (or the second color if three are given)
      in the first generation to the last color in the final one

  --model \"radial COLOR:COLOR[:COLOR][;X,Y]\"
      Same colors as gradient, but living cells are colored by their distance
      to the cell (X, Y), 0,0 by default: close cells take the first color of
      the sweep, cells at the farthest corner take the last one";

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
    HelpModel,
    Version,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::InvalidArgument {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// Parses the arguments that follow the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = Config::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-help" | "-h" => return Ok(Command::Help),
            "--help-model" | "-help-model" => return Ok(Command::HelpModel),
            "--version" | "-version" | "-V" => return Ok(Command::Version),
            _ => {}
        }

        let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            return Err(Error::UnknownArgument(arg.clone()));
        };
        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name.to_string(), value.to_string()),
            None => {
                let value = args.next().ok_or_else(|| Error::InvalidArgument {
                    flag: flag.to_string(),
                    value: String::new(),
                })?;
                (flag.to_string(), value)
            }
        };

        match name.as_str() {
            "filename" => config.filename = value,
            "width" => config.width = parse_value(&name, &value)?,
            "height" => config.height = parse_value(&name, &value)?,
            "xratio" => config.xratio = parse_value(&name, &value)?,
            "yratio" => config.yratio = parse_value(&name, &value)?,
            "delay0" => config.delay0 = parse_value(&name, &value)?,
            "delay" => config.delay = parse_value(&name, &value)?,
            "population" => config.population = parse_value(&name, &value)?,
            "generations" => config.generations = parse_value(&name, &value)?,
            "model" => config.model = value,
            "seed" => config.seed = Some(parse_value(&name, &value)?),
            "average" => config.average = Some(parse_value(&name, &value)?),
            _ => return Err(Error::UnknownArgument(arg)),
        }
    }

    Ok(Command::Run(config))
}
