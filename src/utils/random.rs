use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Row-major liveness of `cells` cells where exactly `population` of them,
/// picked at random, are alive.
///
/// `seed` - random seed (if `None`, then random seed is generated)
///
/// A population larger than the grid is pruned to fill it.
pub fn random_population(cells: usize, population: usize, seed: Option<u64>) -> Vec<bool> {
    let mut rng = if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    };
    if population > cells {
        log::warn!("Pruning the initial population to {} individuals", cells);
    }
    let mut states = (0..cells).map(|i| i < population).collect::<Vec<_>>();
    states.shuffle(&mut rng);
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 42;

    #[test]
    fn test_population_count() {
        for (cells, population) in [(100, 0), (100, 37), (100, 100), (10, 50), (0, 3)] {
            let states = random_population(cells, population, Some(SEED));
            assert_eq!(states.len(), cells);
            assert_eq!(
                states.iter().filter(|&&s| s).count(),
                population.min(cells)
            );
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(
            random_population(400, 120, Some(SEED)),
            random_population(400, 120, Some(SEED))
        );
        assert_ne!(
            random_population(400, 120, Some(SEED)),
            random_population(400, 120, Some(SEED + 1))
        );
    }

    #[test]
    fn test_spreads_over_whole_grid() {
        let states = random_population(1000, 500, Some(SEED));
        assert!(states[..500].iter().any(|&s| !s));
        assert!(states[500..].iter().any(|&s| s));
    }
}
