//! Hardware cycle-counter access.
//!
//! The measurement loop brackets each walk with two counter reads and divides
//! the delta by the hop count, so all that matters here is a cheap, monotonic,
//! high-resolution counter.
//!
//! # Architecture Support
//!
//! - **`x86_64`**: `_rdtsc` (timestamp counter, core-clock granularity)
//! - **`aarch64`**: `cntvct_el0` (the unprivileged fixed-frequency counter;
//!   coarser than the core clock but monotonic and cheap to read)
//! - **Other**: monotonic nanosecond fallback so the crate still builds.
//!   Values are nanoseconds, not cycles.

/// Read the hardware cycle counter.
///
/// Deltas between two reads on the same core are meaningful; the absolute
/// value is not.
#[inline(always)]
#[must_use]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        // SAFETY: _rdtsc has no preconditions; it reads the timestamp
        // counter without touching memory.
        unsafe { std::arch::x86_64::_rdtsc() }
    }

    #[cfg(target_arch = "aarch64")]
    {
        let ticks: u64;
        // SAFETY: cntvct_el0 is readable at EL0 and the read has no side
        // effects.
        unsafe {
            std::arch::asm!(
                "mrs {t}, cntvct_el0",
                t = out(reg) ticks,
                options(nomem, nostack, preserves_flags)
            );
        }
        ticks
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        fallback_nanos()
    }
}

/// Nanoseconds since the first call, for architectures without a supported
/// counter instruction.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn fallback_nanos() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();

    #[allow(clippy::cast_possible_truncation)]
    {
        EPOCH.get_or_init(Instant::now).elapsed().as_nanos() as u64
    }
}
