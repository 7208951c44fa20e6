//! Fast benchmarks for `HopChain` using Divan.
//!
//! Run with: `cargo bench --bench chain`
//!
//! These complement the binary: the binary measures absolute latency with a
//! cycle counter, while these track the relative cost of construction and
//! short walks across working-set sizes.

use divan::{Bencher, black_box};
use memlat::HopChain;

fn main() {
    divan::main();
}

const SEED: u64 = 0xDEAD_BEEF;

fn rng() -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(SEED)
}

// =============================================================================
// Construction
// =============================================================================

#[divan::bench_group]
mod construction {
    use super::{Bencher, HopChain, black_box, rng};

    #[divan::bench(args = [128, 1 << 12, 1 << 16])]
    fn identity(n: usize) -> HopChain {
        HopChain::identity(black_box(n))
    }

    #[divan::bench(args = [128, 1 << 12, 1 << 16])]
    fn shuffled(bencher: Bencher, n: usize) {
        bencher
            .with_inputs(rng)
            .bench_local_values(|mut rng| HopChain::shuffled(black_box(n), &mut rng));
    }

    #[divan::bench(args = [128, 1 << 12, 1 << 16])]
    fn single_cycle(bencher: Bencher, n: usize) {
        bencher
            .with_inputs(rng)
            .bench_local_values(|mut rng| HopChain::single_cycle(black_box(n), &mut rng));
    }
}

// =============================================================================
// Walks
// =============================================================================

#[divan::bench_group]
mod walk {
    use super::{Bencher, HopChain, black_box, rng};

    const HOPS: usize = 100_000;

    // Working-set sizes in bytes, straddling typical L1/L2/L3 boundaries.
    #[divan::bench(args = [1 << 10, 1 << 15, 1 << 18, 1 << 21, 1 << 24])]
    fn shuffled_100k_hops(bencher: Bencher, bytes: usize) {
        let elems = bytes / size_of::<usize>();
        let chain = HopChain::shuffled(elems, &mut rng());
        bencher.bench_local(|| black_box(&chain).walk(black_box(HOPS)));
    }

    #[divan::bench(args = [1 << 10, 1 << 15, 1 << 18])]
    fn single_cycle_100k_hops(bencher: Bencher, bytes: usize) {
        let elems = bytes / size_of::<usize>();
        let chain = HopChain::single_cycle(elems, &mut rng());
        bencher.bench_local(|| black_box(&chain).walk(black_box(HOPS)));
    }

    #[divan::bench]
    fn identity_100k_hops(bencher: Bencher) {
        let chain = HopChain::identity(1 << 12);
        bencher.bench_local(|| black_box(&chain).walk(black_box(HOPS)));
    }
}
