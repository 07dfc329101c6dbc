//! Fixed-round Monte Carlo run of the three-door puzzle.
//!
//! Takes no arguments and reads no environment: the round count is the
//! build-time [`ROUNDS`] constant. Prints the progress bar while running,
//! then the first-choice and switch percentages.

use std::io;
use std::process;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use monty::constants::ROUNDS;
use monty::engine;
use monty::game::UniformChoice;
use monty::progress::ConsoleMeter;

fn main() {
    let rng = match SmallRng::try_from_os_rng() {
        Ok(rng) => rng,
        Err(e) => {
            eprintln!("Failed to seed random source: {}", e);
            process::exit(1);
        }
    };
    let mut choices = UniformChoice::new(rng);

    let mut meter = ConsoleMeter::new(io::stdout());
    if let Err(e) = meter.banner(ROUNDS) {
        eprintln!("Failed to write progress meter: {}", e);
        process::exit(1);
    }

    let stats = match engine::run(ROUNDS, &mut choices, &mut meter) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = meter.finish() {
        eprintln!("Failed to write progress meter: {}", e);
        process::exit(1);
    }

    println!(
        "His first choice was correct {}% of the time ",
        stats.first_choice_pct()
    );
    println!(
        "The switch was correct {}% of the time ",
        stats.switch_pct()
    );
    println!();

    let throughput = stats.rounds as f64 / stats.elapsed.as_secs_f64();
    let se = stats.std_error();
    let z = (stats.first_choice_rate() - 1.0 / 3.0) / se;

    println!(
        "  Elapsed:     {:.1} ms",
        stats.elapsed.as_secs_f64() * 1000.0
    );
    println!("  Throughput:  {:.0} trials/sec", throughput);
    println!(
        "  Std error:   {:.5}  (z = {:+.2}, |z| < 3.0 expected)",
        se, z
    );
    if z.abs() > 3.5 {
        eprintln!(
            "WARNING: Observed rate deviates from 1/3 by {:.1} standard errors — possible bias!",
            z.abs()
        );
    }
}
