use rand::RngCore;
use rand::SeedableRng;
use sparse_life::sparselife::{Coordinate, World};
use std::time::Instant;

const LIVE_DENSITY: f64 = 0.35;

fn seed_world(side: i64, spread: i64, density: f64) -> World {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED_1234_ABCD_EF01);
    let threshold = (u64::MAX as f64 * density) as u64;
    let mut cells = Vec::new();

    // Four soups at the corners of a `spread`-wide square; the work per step
    // must not depend on how far apart they are.
    for &(ox, oy) in &[(0, 0), (spread, 0), (0, spread), (spread, spread)] {
        for y in 0..side {
            for x in 0..side {
                if rng.next_u64() <= threshold {
                    cells.push(Coordinate::new(ox + x, oy + y));
                }
            }
        }
    }
    cells.into_iter().collect()
}

fn bench(side: i64, spread: i64, iterations: u64) -> (f64, usize, usize) {
    let mut world = seed_world(side, spread, LIVE_DENSITY);
    let start_population = world.population();

    let start = Instant::now();
    let mut visited = 0usize;
    for _ in 0..iterations {
        visited += world.evolve().candidates_visited;
    }
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    std::hint::black_box(world.population());

    (total_ms, start_population, visited / iterations.max(1) as usize)
}

fn main() {
    let scales: &[(i64, i64, u64)] = &[
        (32, 64, 200),
        (64, 128, 100),
        (128, 256, 50),
        (128, 1 << 40, 50), // same soups, far apart
        (256, 512, 20),
    ];

    println!(
        "{:<10} {:>16} {:>10} {:>12} {:>12} {:>10}",
        "Soup", "Spread", "Cells", "Visits/step", "Total(ms)", "Avg(ms)"
    );
    println!("{}", "-".repeat(76));

    for &(side, spread, iters) in scales {
        let (total_ms, cells, visits) = bench(side, spread, iters);
        let avg_ms = total_ms / iters as f64;
        println!(
            "{:<10} {:>16} {:>10} {:>12} {:>12.1} {:>10.4}",
            format!("4x{}^2", side),
            spread,
            cells,
            visits,
            total_ms,
            avg_ms
        );
    }
}
