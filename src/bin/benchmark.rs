//! Timing comparison of serial vs parallel generation stepping

use std::time::Instant;

use cellular_automaton::{ConwayRule, Grid};

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let rule = ConwayRule;
    let mut grid = Grid::new(size, size);
    grid.randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step(&rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let rule = ConwayRule;
    let mut grid = Grid::new(size, size);
    grid.randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step_parallel(&rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Generation Step Benchmark ===\n");

    let sizes = [100, 250, 500, 1000];
    let iterations = 20;

    println!(
        "{:>12} {:>12} {:>12} {:>10}",
        "Size", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<50}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
