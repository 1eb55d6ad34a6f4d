#![warn(clippy::all)]

mod animation;
mod averager;
pub mod cli;
mod color;
mod config;
mod error;
mod generation;
mod model;
mod simulation;
mod utils;

pub use animation::{Animation, Frame, IndexedImage};
pub use averager::FrameAverager;
pub use color::{Palette, Rgb};
pub use config::Config;
pub use error::{Error, Result};
pub use generation::{AspectRatio, Generation};
pub use model::{ColorModel, Coloring, Ordinal, Painter, Scheme};
pub use simulation::Simulation;
pub use utils::{farthest_corner, parse_hex_color, random_population, Point};
