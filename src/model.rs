use crate::{farthest_corner, Error, Palette, Point, Result, Rgb};

/// User's choice of colors for an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorModel {
    /// Every living cell gets `live`.
    Bichrome { dead: Rgb, live: Rgb },
    /// Living cells share one color per generation, fading from `start` in the
    /// first generation to `end` in the last one.
    Gradient { dead: Rgb, start: Rgb, end: Rgb },
    /// Living cells are colored by their distance to `center`, `start` next to
    /// it and `end` at the farthest corner of the grid.
    Radial {
        dead: Rgb,
        start: Rgb,
        end: Rgb,
        center: Point,
    },
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::Bichrome {
            dead: Rgb::BLACK,
            live: Rgb::WHITE,
        }
    }
}

impl ColorModel {
    pub const NAMES: [&'static str; 3] = ["bichrome", "gradient", "radial"];

    /// Builds a model from its name and the colors listed by the user.
    ///
    /// - bichrome: `[live]` (dead cells are black) or `[dead, live]`;
    /// - gradient and radial: `[dead, end]` (the sweep starts at black) or
    ///   `[dead, start, end]`.
    ///
    /// `center` is only used by the radial model and defaults to `(0, 0)`.
    pub fn from_parts(name: &str, colors: &[Rgb], center: Option<Point>) -> Result<Self> {
        let kind = match name {
            "bichrome" => Kind::Bichrome,
            "gradient" => Kind::Gradient,
            "radial" => Kind::Radial,
            _ => return Err(Error::ModelSyntax(name.to_string())),
        };
        let model = kind.name();
        let required = kind.required_colors();
        if colors.len() < required {
            return Err(Error::MissingColors {
                model,
                required,
                given: colors.len(),
            });
        }
        if colors.len() > required + 1 {
            return Err(Error::ModelSyntax(format!(
                "{} takes at most {} colors, {} given",
                model,
                required + 1,
                colors.len()
            )));
        }
        if center.is_some() && kind != Kind::Radial {
            return Err(Error::ModelSyntax(format!("{} takes no center", model)));
        }

        let (dead, start, end) = match *colors {
            [] => (Rgb::BLACK, Rgb::WHITE, Rgb::WHITE),
            [live] => (Rgb::BLACK, live, live),
            [dead, live] if kind == Kind::Bichrome => (dead, live, live),
            [dead, end] => (dead, Rgb::BLACK, end),
            [dead, start, end, ..] => (dead, start, end),
        };
        Ok(match kind {
            Kind::Bichrome => Self::Bichrome { dead, live: end },
            Kind::Gradient => Self::Gradient { dead, start, end },
            Kind::Radial => Self::Radial {
                dead,
                start,
                end,
                center: center.unwrap_or_default(),
            },
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bichrome { .. } => Kind::Bichrome.name(),
            Self::Gradient { .. } => Kind::Gradient.name(),
            Self::Radial { .. } => Kind::Radial.name(),
        }
    }

    pub fn palette(&self) -> Palette {
        match *self {
            Self::Bichrome { dead, live } => Palette::bichrome(dead, live),
            Self::Gradient { dead, start, end } | Self::Radial { dead, start, end, .. } => {
                Palette::gradient(dead, start, end)
            }
        }
    }

    pub fn coloring(&self) -> Coloring {
        match *self {
            Self::Bichrome { .. } => Coloring::Bichrome,
            Self::Gradient { .. } => Coloring::Gradient,
            Self::Radial { center, .. } => Coloring::Radial { center },
        }
    }

    /// Palette and coloring strategy shared by every generation of a run.
    pub fn scheme(&self) -> Scheme {
        Scheme {
            palette: self.palette(),
            coloring: self.coloring(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Bichrome,
    Gradient,
    Radial,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Bichrome => "bichrome",
            Kind::Gradient => "gradient",
            Kind::Radial => "radial",
        }
    }

    /// Fewest colors the model accepts; one more is allowed.
    fn required_colors(self) -> usize {
        match self {
            Kind::Bichrome => 1,
            Kind::Gradient | Kind::Radial => 2,
        }
    }
}

/// 1-based position of a generation among `total` ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ordinal {
    index: usize,
    total: usize,
}

impl Ordinal {
    pub fn new(index: usize, total: usize) -> Result<Self> {
        if total == 0 {
            return Err(Error::ZeroGenerations);
        }
        if index == 0 || index > total {
            return Err(Error::InvalidOrdinal {
                ordinal: index,
                total,
            });
        }
        Ok(Self { index, total })
    }

    /// First of `total` generations.
    pub fn first(total: usize) -> Result<Self> {
        Self::new(1, total)
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn total(self) -> usize {
        self.total
    }

    /// The following ordinal; the last one saturates.
    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1).min(self.total),
            total: self.total,
        }
    }
}

/// Strategy that picks the palette index of living cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coloring {
    Bichrome,
    Gradient,
    Radial { center: Point },
}

impl Coloring {
    pub fn name(self) -> &'static str {
        match self {
            Coloring::Bichrome => "bichrome",
            Coloring::Gradient => "gradient",
            Coloring::Radial { .. } => "radial",
        }
    }

    /// Resolves the strategy for one generation of a `[0, max_x] x [0, max_y]`
    /// grid. Everything that does not depend on the cell is computed here.
    pub fn painter(self, ordinal: Ordinal, max_x: usize, max_y: usize) -> Painter {
        match self {
            Coloring::Bichrome => Painter::Uniform(1),
            Coloring::Gradient => {
                let index = ordinal.index() * u8::MAX as usize / ordinal.total();
                Painter::Uniform(index.clamp(1, u8::MAX as usize) as u8)
            }
            Coloring::Radial { center } => Painter::Radial {
                center,
                reach: center.distance(farthest_corner(center, max_x, max_y)),
            },
        }
    }
}

/// [`Coloring`] resolved for a single generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Painter {
    /// All living cells share this index.
    Uniform(u8),
    /// Index grows linearly with the distance to `center`, reaching 255 at
    /// distance `reach`.
    Radial { center: Point, reach: f64 },
}

impl Painter {
    /// Palette index of a living cell at `p`; never 0.
    pub fn index_at(&self, p: Point) -> u8 {
        match *self {
            Painter::Uniform(index) => index,
            Painter::Radial { center, reach } => {
                if reach == 0. {
                    return 1;
                }
                let index = (center.distance(p) / reach * u8::MAX as f64).floor();
                index.clamp(1., u8::MAX as f64) as u8
            }
        }
    }
}

/// Palette and coloring strategy of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Scheme {
    pub palette: Palette,
    pub coloring: Coloring,
}
