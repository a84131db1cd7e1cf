//! "The Corrupted Gene" solver
//!
//! Runs the binary's decode pipeline with the permutation fault swapped
//! back and prints the flag.

use enit_solvers::gene;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let flag = gene::decode_flag();
    println!("Flag: {}", flag);
}
