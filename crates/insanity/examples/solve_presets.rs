//! Solve every built-in puzzle and print the resulting tower.
//!
//! Run: `cargo run -p insanity --example solve_presets`

use std::time::Instant;

use insanity::api::{catalog, solve, Preset, Tower};

fn main() {
    for preset in Preset::ALL {
        let puzzle = preset.puzzle();
        let start = Instant::now();
        let result = solve(&puzzle);
        let elapsed_us = start.elapsed().as_secs_f64() * 1e6;
        match result {
            Ok(sol) => {
                let mut tower = Tower::new(puzzle);
                tower.apply(&sol.orientation);
                println!("{} ({elapsed_us:.1} µs)", preset.name());
                let shown = tower.sides();
                for (i, m) in sol.orientation.rotations.iter().enumerate() {
                    let idx = catalog().index_of(m);
                    let sides: String = shown.iter().map(|side| side[i].as_char()).collect();
                    println!("  cube {}: rotation {idx:?}, front/left/back/right {sides}", i + 1);
                }
                println!("  solved: {}", tower.is_solved());
            }
            Err(e) => println!("{}: {e}", preset.name()),
        }
    }
}
