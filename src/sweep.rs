//! Benchmark driver: the working-set size sweep.
//!
//! For each size in a geometric sequence, allocate a [`HopChain`], shuffle
//! it, time a fixed number of hops with the cycle counter, and report ticks
//! per hop. Each iteration owns its buffer exclusively and drops it before
//! the next size begins; the whole sweep is single-threaded and synchronous.

use crate::chain::HopChain;
use crate::cycles::read_cycles;
use crate::tracing_helpers::{debug_log, trace_log};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Minimum hops per measurement: 100 million, or the element count if
/// larger, so every buffer is traversed at least once.
pub const HOP_FLOOR: usize = 100_000_000;

/// Smallest working set in the default sweep: 1 KiB.
pub const MIN_BYTES: usize = 1 << 10;

/// Largest working set in the default sweep: 256 MiB.
pub const MAX_BYTES: usize = 1 << 28;

/// Sweep parameters.
///
/// `min_bytes` and `max_bytes` bound the power-of-two size sequence;
/// `max_bytes` should be `min_bytes << k` or the sweep stops at the last
/// doubling that fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// First working-set size in bytes.
    pub min_bytes: usize,
    /// Last working-set size in bytes (inclusive).
    pub max_bytes: usize,
    /// Minimum hop count per measurement.
    pub hop_floor: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_bytes: MIN_BYTES,
            max_bytes: MAX_BYTES,
            hop_floor: HOP_FLOOR,
        }
    }
}

impl SweepConfig {
    /// The geometric size sequence: `min_bytes`, doubling up to and
    /// including `max_bytes`.
    ///
    /// Degenerate bounds (`min_bytes == 0` or `min_bytes > max_bytes`)
    /// yield an empty sweep: zero never doubles past the bound, so it must
    /// not seed the successor chain.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        let max = self.max_bytes;
        let first = (self.min_bytes > 0 && self.min_bytes <= max).then_some(self.min_bytes);
        std::iter::successors(first, move |&size| {
            size.checked_mul(2).filter(|&next| next <= max)
        })
    }
}

/// One timed walk at one working-set size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Working-set size in bytes.
    pub size_bytes: usize,
    /// Number of index-sized slots in the buffer.
    pub elems: usize,
    /// Hops performed.
    pub hops: usize,
    /// Average cycle-counter ticks per hop.
    pub ticks_per_hop: f64,
    /// Final walk index. Reported so the walk cannot be optimized away.
    pub result: usize,
}

/// Hops for a buffer of `elems` slots: `max(hop_floor, elems)`.
#[must_use]
pub const fn hop_count(elems: usize, hop_floor: usize) -> usize {
    if elems > hop_floor { elems } else { hop_floor }
}

/// Measure one working-set size: allocate, shuffle, walk, divide.
///
/// At least one hop is always performed, so `ticks_per_hop` stays finite
/// even for an empty buffer with a zero hop floor.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn measure(size_bytes: usize, hop_floor: usize, rng: &mut impl Rng) -> Measurement {
    let elems = size_bytes / size_of::<usize>();
    let chain = HopChain::shuffled(elems, rng);
    trace_log!(size_bytes, elems, "chain built");

    let hops = hop_count(elems, hop_floor).max(1);

    let start = read_cycles();
    let result = chain.walk(hops);
    let ticks = read_cycles().wrapping_sub(start);

    let ticks_per_hop = ticks as f64 / hops as f64;
    debug_log!(size_bytes, elems, hops, ticks_per_hop, "measured");

    Measurement {
        size_bytes,
        elems,
        hops,
        ticks_per_hop,
        result,
    }
}

/// Run the sweep, calling `sink` after each size so results stream out as
/// they complete. The shuffle RNG is seeded from the system clock, one seed
/// per run.
pub fn run(config: &SweepConfig, mut sink: impl FnMut(&Measurement)) {
    let mut rng = SmallRng::seed_from_u64(clock_seed());
    for size_bytes in config.sizes() {
        let m = measure(size_bytes, config.hop_floor, &mut rng);
        sink(&m);
    }
}

/// Seed from the wall clock, matching the original time-seeded behavior.
#[allow(clippy::cast_possible_truncation)]
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0x9e37_79b9_7f4a_7c15, |d| d.as_nanos() as u64)
}
