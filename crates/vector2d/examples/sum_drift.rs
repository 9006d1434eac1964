//! Round-off drift of naive vs compensated summation.
//!
//! Usage:
//!   cargo run -p vector2d --example sum_drift
//!
//! Adds `n` copies of (1e-10, 1e-10) for growing `n` and prints the absolute
//! error of each method against the exact total `n * 1e-10`.

use std::time::Instant;

use vector2d::{naive_sum, Vector2D};

fn main() {
    let step = Vector2D::new(1e-10, 1e-10);
    for n in [10usize, 1_000, 100_000, 1_000_000] {
        let vs = vec![step; n];
        let exact = n as f64 * 1e-10;

        let start = Instant::now();
        let comp = Vector2D::sum(&vs).expect("non-empty input");
        let comp_ms = start.elapsed().as_secs_f64() * 1e3;

        let start = Instant::now();
        let naive = naive_sum(&vs);
        let naive_ms = start.elapsed().as_secs_f64() * 1e3;

        println!(
            "n={n} naive_err={:.3e} compensated_err={:.3e} naive_ms={naive_ms:.3} compensated_ms={comp_ms:.3}",
            (naive.x - exact).abs(),
            (comp.x - exact).abs(),
        );
    }
}
