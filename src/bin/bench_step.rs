use conway_gif::{Config, FrameAverager, Simulation};

fn main() {
    let config = Config {
        width: 511,
        height: 511,
        population: 512 * 512 / 3,
        generations: 200,
        model: "radial #000000:#00FFFF:#FF00FF;256,256".to_string(),
        seed: Some(42),
        ..Config::default()
    };

    let timer = std::time::Instant::now();
    let initial = config.initial_generation().unwrap();
    let mut simulation =
        Simulation::new(config.width, config.height, config.generations, initial).unwrap();
    println!("Time on building field: {:?}", timer.elapsed());

    let timer = std::time::Instant::now();
    simulation.run();
    println!("Time on {} generations: {:?}", config.generations, timer.elapsed());
    let last = &simulation.generations()[config.generations - 1];
    println!("Population of the last generation: {}", last.population());

    let timer = std::time::Instant::now();
    let animation = simulation.to_animation(config.delay0, config.delay).unwrap();
    let averaged = FrameAverager::new(4).unwrap().apply(&animation).unwrap();
    println!(
        "Time on rendering and averaging {} frames: {:?}",
        averaged.len(),
        timer.elapsed()
    );
}
