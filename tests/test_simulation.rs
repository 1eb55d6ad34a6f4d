#[cfg(test)]
mod tests {
    use conway_gif::{
        random_population, AspectRatio, ColorModel, Config, Error, Generation, Ordinal, Point,
        Rgb, Simulation,
    };
    use std::sync::Arc;

    const SEED: u64 = 42;

    fn blank(width: usize, height: usize, model: ColorModel, total: usize) -> Generation {
        Generation::new(
            width,
            height,
            Arc::new(model.scheme()),
            AspectRatio::UNIT,
            Ordinal::first(total).unwrap(),
        )
    }

    fn randomly_filled(width: usize, height: usize, seed: u64) -> Generation {
        let mut life = blank(width, height, ColorModel::default(), 1);
        let cells = life.cell_count();
        life.set_contents(&random_population(cells, cells * 3 / 10, Some(seed)))
            .unwrap();
        life
    }

    /// Next liveness computed cell by cell without the engine.
    fn reference_step(cells: &[bool], width: usize, height: usize) -> Vec<bool> {
        let (w, h) = (width as i64 + 1, height as i64 + 1);
        let alive = |x: i64, y: i64| x >= 0 && y >= 0 && x < w && y < h && cells[(x + y * w) as usize];
        let mut result = vec![false; cells.len()];
        for y in 0..h {
            for x in 0..w {
                let mut neibs = 0;
                for (dx, dy) in [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)] {
                    neibs += alive(x + dx, y + dy) as usize;
                }
                result[(x + y * w) as usize] = neibs == 3 || (neibs == 2 && alive(x, y));
            }
        }
        result
    }

    fn assert_liveness_equal(actual: &[bool], expected: &[bool], width: usize) {
        if actual == expected {
            return;
        }
        let mut picture = String::new();
        for (a, e) in actual.chunks(width + 1).zip(expected.chunks(width + 1)) {
            picture.push('|');
            picture.extend(a.iter().map(|&c| if c { '#' } else { ' ' }));
            picture.push('|');
            picture.extend(e.iter().map(|&c| if c { '#' } else { ' ' }));
            picture.push_str("|\n");
        }
        panic!("Fields do not match:\n{}", picture);
    }

    #[test_log::test]
    fn test_step_matches_reference() {
        for (width, height) in [(0, 0), (1, 7), (15, 15), (40, 23)] {
            let mut life = randomly_filled(width, height, SEED);
            for _ in 0..10 {
                let next = life.step();
                assert_liveness_equal(
                    &next.liveness(),
                    &reference_step(&life.liveness(), width, height),
                    width,
                );
                life = next;
            }
        }
    }

    #[test]
    fn test_block_is_fixed_point() {
        let mut contents = vec![false; 36];
        for i in [14, 15, 20, 21] {
            contents[i] = true;
        }
        let mut life = blank(5, 5, ColorModel::default(), 10);
        life.set_contents(&contents).unwrap();
        let mut simulation = Simulation::new(5, 5, 10, life).unwrap();
        simulation.run();
        for g in simulation.generations() {
            assert_eq!(g.liveness(), contents);
        }
    }

    #[test]
    fn test_blinker_period_two() {
        let mut contents = vec![false; 49];
        contents[23..26].fill(true);
        let mut life = blank(6, 6, ColorModel::default(), 7);
        life.set_contents(&contents).unwrap();
        let mut simulation = Simulation::new(6, 6, 7, life).unwrap();
        simulation.run();
        for (i, g) in simulation.generations().iter().enumerate() {
            assert_eq!(g.liveness() == contents, i % 2 == 0, "generation {}", i);
        }
    }

    #[test]
    fn test_set_contents_lengths() {
        let mut life = blank(3, 4, ColorModel::default(), 1);
        assert!(life.set_contents(&[false; 20]).is_ok());
        for len in [0, 12, 19, 21, 30] {
            let err = life.set_contents(&vec![true; len]).unwrap_err();
            assert!(matches!(
                err,
                Error::DimensionMismatch { expected: 20, given } if given == len
            ));
            assert!(err.is_configuration());
        }
    }

    #[test]
    fn test_gradient_colors_per_generation() {
        let total = 40;
        let model: ColorModel = "gradient #000000:#FF0000:#00FF00".parse().unwrap();
        let mut life = blank(20, 20, model, total);
        let cells = life.cell_count();
        life.set_contents(&random_population(cells, 150, Some(SEED)))
            .unwrap();
        let mut simulation = Simulation::new(20, 20, total, life).unwrap();
        simulation.run();
        for (i, g) in simulation.generations().iter().enumerate() {
            let expected = ((i + 1) * 255 / total).max(1) as u8;
            for &c in g.cells() {
                assert!(c == 0 || c == expected, "generation {}: {} != {}", i, c, expected);
            }
        }
    }

    #[test]
    fn test_radial_colors_by_distance() {
        let center = Point::new(10, 10);
        let model = ColorModel::Radial {
            dead: Rgb::BLACK,
            start: Rgb::WHITE,
            end: Rgb::new(0xff, 0, 0),
            center,
        };
        let mut life = blank(20, 20, model, 3);
        life.set_contents(&[true; 441]).unwrap();

        // equidistant cells share a color
        for (a, b) in [((13, 14), (14, 13)), ((6, 10), (10, 14)), ((0, 0), (20, 20))] {
            assert_eq!(life.color_index_at(a.0, a.1), life.color_index_at(b.0, b.1));
        }
        // and colors grow along a ray
        let ray = (10..=20)
            .map(|x| life.color_index_at(x, x))
            .collect::<Vec<_>>();
        assert!(ray.windows(2).all(|w| w[0] <= w[1]), "{:?}", ray);
        assert_eq!(ray[0], 1);
        assert_eq!(ray[10], 255);
    }

    #[test]
    fn test_palette_black_to_white() {
        let model: ColorModel = "gradient #123456:#000000:#FFFFFF".parse().unwrap();
        let palette = model.palette();
        assert_eq!(palette.color(0), Rgb::new(0x12, 0x34, 0x56));
        assert!(palette.color(1).channels().iter().all(|&c| c <= 1));
        assert_eq!(palette.color(255), Rgb::WHITE);
        for w in palette.colors()[1..].windows(2) {
            assert!(w[0].r <= w[1].r && w[0].g <= w[1].g && w[0].b <= w[1].b);
        }
    }

    #[test]
    fn test_single_empty_generation_is_blank() {
        let config = Config {
            width: 6,
            height: 3,
            xratio: 3,
            yratio: 5,
            population: 0,
            generations: 1,
            ..Config::default()
        };
        let animation = config.animate().unwrap();
        assert_eq!(animation.len(), 1);
        let image = &animation.frames()[0].image;
        assert_eq!((image.width(), image.height()), (21, 20));
        assert!(image.pixels().iter().all(|&p| p == 0));
    }

    #[test_log::test]
    fn test_gif_output() {
        let config = Config {
            width: 15,
            height: 15,
            population: 80,
            generations: 8,
            model: "radial #000000:#FFFF00:#0000FF;8,8".to_string(),
            seed: Some(SEED),
            average: Some(3),
            ..Config::default()
        };
        let mut buf = Vec::new();
        config.animate().unwrap().write_gif(&mut buf).unwrap();
        assert!(buf.starts_with(b"GIF89a"));
    }
}
