//! Moving average over a synthetic sample stream.
//!
//! Run with: `cargo run --example sliding_window`

use stretch_ring::StretchRing;

const WINDOW: usize = 8;

fn main() {
    // A window pre-filled with zeros, sized once, never resized again:
    // every update is a prepend plus an eviction.
    let mut window: StretchRing<f64> = StretchRing::filled(WINDOW);
    let mut sum = 0.0;

    for n in 0..32u32 {
        // Synthetic signal: a ramp with a little wobble.
        let sample = f64::from(n) + (f64::from(n) * 0.7).sin();

        let evicted = window.push_front_and_pop_back(sample).unwrap_or(0.0);
        sum += sample - evicted;

        println!(
            "sample {sample:7.3}  window {window}  avg {:7.3}",
            sum / WINDOW as f64
        );
    }
}
