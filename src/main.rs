//! Memory latency sweep binary.
//!
//! No flags: runs the default sweep (1 KiB to 256 MiB, 100M-hop floor) and
//! streams the results table to stdout.
//!
//! ```bash
//! cargo run --release
//!
//! # With per-size measurement logs
//! RUST_LOG=memlat=debug cargo run --release --features tracing
//! ```

#![allow(clippy::expect_used)]

use std::io::{self, Write};

use memlat::SweepConfig;
use memlat::{report, sweep};

fn main() {
    memlat::init_tracing();

    let config = SweepConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    report::write_header(&mut out).expect("stdout write failed");

    // Each size takes a while at the 100M-hop floor; flush row by row so
    // progress is visible.
    sweep::run(&config, |m| {
        report::write_row(&mut out, m).expect("stdout write failed");
        out.flush().expect("stdout flush failed");
    });
}
