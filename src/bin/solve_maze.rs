//! "The Shattered Maze" solver
//!
//! Decodes the six real shards from the binary's SHARD_TABLE, prints the
//! reconstructed QR to the terminal, and writes a scannable PNG.

use enit_solvers::maze::{render, save_png, QrGrid, RenderError, QUIET_ZONE, REAL_SHARDS, SCALE};
use log::info;

const OUTPUT: &str = "solved_qr.png";

fn main() -> Result<(), RenderError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    info!("decoding {} shards", REAL_SHARDS.len());
    let grid = QrGrid::assemble(&REAL_SHARDS);

    println!("[*] QR reconstructed:");
    print!("{}", grid.to_text());

    let img = render(&grid, SCALE, QUIET_ZONE);
    save_png(&img, OUTPUT)?;
    println!("[+] Saved: {} — scan for the flag!", OUTPUT);
    Ok(())
}
