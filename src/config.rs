use crate::{
    random_population, AspectRatio, ColorModel, Error, FrameAverager, Generation, Ordinal,
    Result, Simulation,
};
use std::sync::Arc;

/// Everything needed to render one animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Name of the GIF file.
    pub filename: String,
    /// Largest `x` coordinate of the grid.
    pub width: usize,
    /// Largest `y` coordinate of the grid.
    pub height: usize,
    pub xratio: u32,
    pub yratio: u32,
    /// Delay of the first frame, in hundredths of a second.
    pub delay0: u16,
    /// Delay between frames, in hundredths of a second.
    pub delay: u16,
    /// Number of cells alive in the first generation.
    pub population: usize,
    pub generations: usize,
    /// Color model, see [`ColorModel`]'s `FromStr`.
    pub model: String,
    pub seed: Option<u64>,
    /// Averaging window, no averaging if `None`.
    pub average: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filename: Self::FILENAME.to_string(),
            width: Self::WIDTH,
            height: Self::HEIGHT,
            xratio: Self::RATIO,
            yratio: Self::RATIO,
            delay0: Self::DELAY0,
            delay: Self::DELAY,
            population: Self::POPULATION,
            generations: Self::GENERATIONS,
            model: Self::MODEL.to_string(),
            seed: None,
            average: None,
        }
    }
}

impl Config {
    pub const FILENAME: &'static str = "conway.gif";
    pub const WIDTH: usize = 100;
    pub const HEIGHT: usize = 100;
    pub const RATIO: u32 = 1;
    pub const DELAY0: u16 = 100;
    pub const DELAY: u16 = 1;
    pub const POPULATION: usize = 100;
    pub const GENERATIONS: usize = 100;
    pub const MODEL: &'static str = "bichrome #FFFFFF";

    /// Number of cells of the grid.
    pub fn cells(&self) -> usize {
        (self.width + 1) * (self.height + 1)
    }

    pub fn color_model(&self) -> Result<ColorModel> {
        self.model.parse()
    }

    pub fn ratio(&self) -> Result<AspectRatio> {
        AspectRatio::new(self.xratio, self.yratio)
    }

    pub fn averager(&self) -> Result<Option<FrameAverager>> {
        self.average.map(FrameAverager::new).transpose()
    }

    /// Checks every setting that could stop a run.
    pub fn validate(&self) -> Result<()> {
        if self.generations == 0 {
            return Err(Error::ZeroGenerations);
        }
        self.color_model()?;
        self.ratio()?;
        self.averager()?;
        Ok(())
    }

    /// First generation holding a random population, seeded with `seed`.
    pub fn initial_generation(&self) -> Result<Generation> {
        let scheme = Arc::new(self.color_model()?.scheme());
        let ordinal = Ordinal::first(self.generations)?;
        let mut initial = Generation::new(self.width, self.height, scheme, self.ratio()?, ordinal);
        initial.set_contents(&random_population(
            self.cells(),
            self.population,
            self.seed,
        ))?;
        Ok(initial)
    }

    /// Runs the whole simulation and returns its frames, averaged if asked to.
    pub fn animate(&self) -> Result<crate::Animation> {
        self.validate()?;
        let mut simulation = Simulation::new(
            self.width,
            self.height,
            self.generations,
            self.initial_generation()?,
        )?;
        simulation.run();
        let animation = simulation.to_animation(self.delay0, self.delay)?;
        match self.averager()? {
            Some(averager) => averager.apply(&animation),
            None => Ok(animation),
        }
    }
}
