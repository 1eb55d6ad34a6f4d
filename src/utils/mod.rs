mod geometry;
mod parse_color;
mod random;

pub use geometry::{farthest_corner, Point};
pub use parse_color::parse_hex_color;
pub use random::random_population;
