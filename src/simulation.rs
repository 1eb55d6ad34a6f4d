use crate::{Animation, Error, Frame, Generation, Ordinal, Result};
use log::{debug, info};

/// A fixed number of generations grown from an initial one.
pub struct Simulation {
    width: usize,
    height: usize,
    count: usize,
    generations: Vec<Generation>,
}

impl Simulation {
    /// Takes ownership of the first generation of `count`.
    ///
    /// The remaining generations are only computed by [`Simulation::run`].
    pub fn new(width: usize, height: usize, count: usize, initial: Generation) -> Result<Self> {
        if count == 0 {
            return Err(Error::ZeroGenerations);
        }
        if (initial.width(), initial.height()) != (width, height) {
            return Err(Error::DimensionMismatch {
                expected: (width + 1) * (height + 1),
                given: initial.cell_count(),
            });
        }
        let ordinal = initial.ordinal();
        if ordinal != Ordinal::first(count)? {
            return Err(Error::OrdinalMismatch {
                ordinal: ordinal.index(),
                total: ordinal.total(),
                count,
            });
        }
        let mut generations = Vec::with_capacity(count);
        generations.push(initial);
        Ok(Self {
            width,
            height,
            count,
            generations,
        })
    }

    /// Number of generations once run.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Generations computed so far.
    pub fn generations(&self) -> &[Generation] {
        &self.generations
    }

    pub fn is_complete(&self) -> bool {
        self.generations.len() == self.count
    }

    /// Computes every missing generation from its predecessor.
    pub fn run(&mut self) {
        info!(
            "Running {} generations on a {}x{} grid ({} model)",
            self.count,
            self.width + 1,
            self.height + 1,
            self.generations[0].scheme().coloring.name(),
        );
        while let Some(last) = self.generations.last() {
            if self.generations.len() == self.count {
                break;
            }
            let next = last.step();
            debug!(
                "Generation {}/{}: {} alive",
                next.ordinal().index(),
                self.count,
                next.population()
            );
            self.generations.push(next);
        }
    }

    /// Pictures of every generation, the first shown for `initial_delay` and
    /// the others for `delay` hundredths of a second.
    pub fn to_animation(&self, initial_delay: u16, delay: u16) -> Result<Animation> {
        if !self.is_complete() {
            return Err(Error::Incomplete {
                computed: self.generations.len(),
                expected: self.count,
            });
        }
        let frames = self
            .generations
            .iter()
            .enumerate()
            .map(|(i, g)| Frame {
                image: g.to_image(),
                delay: if i == 0 { initial_delay } else { delay },
            })
            .collect();
        let palette = self.generations[0].scheme().palette.clone();
        Ok(Animation::new(palette.into(), frames))
    }
}
