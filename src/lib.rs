//! # `memlat`
//!
//! A microbenchmark that measures the latency of random memory access as the
//! working set grows, exposing CPU cache hierarchy boundaries (L1/L2/L3)
//! through empirical timing.
//!
//! For each buffer size in a power-of-two sweep, the benchmark:
//! 1. Allocates a buffer of index-sized slots and fills it with a random
//!    permutation of `[0, N)`.
//! 2. Chases pointers through the permutation (`next = buffer[next]`) for a
//!    fixed hop count, timed with a hardware cycle counter.
//! 3. Reports average counter ticks per hop.
//!
//! The chained, data-dependent access pattern defeats out-of-order execution
//! and prefetching, so each hop's latency reflects a true memory/cache round
//! trip rather than pipelined throughput.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! Example output on an i9-9900K (32+32KB L1, 256KB L2, 16MB Smart Cache):
//!
//! ```text
//! size_in_bytes     ticks_per_item          result
//! ------------------------------------------------
//! 1024                     3.938              50
//! 32768                    3.964            3803   <- 32KB L1
//! 262144                  14.634           21127   <- 256KB L2
//! 16777216               119.130          670803   <- 16MB L3
//! 268435456              234.535         1792626
//! ```
//!
//! ## Library API
//!
//! The sweep is also usable programmatically:
//!
//! ```rust
//! use memlat::{SweepConfig, sweep};
//!
//! let config = SweepConfig {
//!     min_bytes: 1 << 10,
//!     max_bytes: 1 << 12,
//!     hop_floor: 10_000,
//! };
//! sweep::run(&config, |m| {
//!     assert!(m.ticks_per_hop.is_finite());
//! });
//! ```

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// The cycle-counter read is deliberately #[inline(always)]; placement is
// verified by the divan benches.
#![allow(clippy::inline_always)]

pub mod chain;
pub mod cycles;
pub mod report;
pub mod sweep;

mod tracing_helpers;

// Re-export main types for convenience
pub use chain::HopChain;
pub use sweep::{Measurement, SweepConfig};

/// Install a console tracing subscriber filtered by `RUST_LOG`.
///
/// Safe to call multiple times; only the first call takes effect.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .compact()
        .try_init();
}

/// No-op without the `tracing` feature.
#[cfg(not(feature = "tracing"))]
pub const fn init_tracing() {}
