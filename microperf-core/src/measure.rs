//! Wall-Clock and Cycle Timing
//!
//! Every sample pairs a monotonic `std::time::Instant` reading with a raw
//! hardware counter: RDTSCP on x86_64, CNTVCT_EL0 on AArch64, and 0 on
//! anything else. Only the nanosecond reading feeds the reported minimum.

use crate::bencher::Sample;

/// Read the CPU cycle/tick counter.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycles() -> u64 {
    // SAFETY: RDTSCP is available on every x86_64 CPU this runs on and has
    // no memory side effects.
    unsafe {
        let mut _aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut _aux)
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycles() -> u64 {
    let cnt: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0 on all AArch64 implementations.
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt, options(nostack, nomem));
    }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn read_cycles() -> u64 {
    0
}

/// Whether `Sample::cpu_cycles` carries real counter values on this target.
pub const HAS_CYCLE_COUNTER: bool = cfg!(target_arch = "x86_64") || cfg!(target_arch = "aarch64");

/// A point in time with both clocks captured.
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    instant: std::time::Instant,
    tsc: u64,
}

impl Instant {
    /// Capture both clocks
    #[inline(always)]
    pub fn now() -> Self {
        let tsc = read_cycles();
        Self {
            instant: std::time::Instant::now(),
            tsc,
        }
    }

    /// Wall-clock time since this instant
    #[inline(always)]
    pub fn elapsed(&self) -> std::time::Duration {
        self.instant.elapsed()
    }

    /// Raw counter value captured with this instant
    #[inline(always)]
    pub fn cycles(&self) -> u64 {
        self.tsc
    }
}

/// Brackets exactly one kernel invocation.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start timing
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and turn the bracket into a sample
    #[inline(always)]
    pub fn stop(&self) -> Sample {
        let duration_nanos = self.start.elapsed().as_nanos() as u64;
        let cpu_cycles = read_cycles().saturating_sub(self.start.cycles());
        Sample {
            duration_nanos,
            cpu_cycles,
        }
    }
}

/// Pin the calling thread to one CPU core.
///
/// Fails with `InvalidInput` for core indices outside `cpu_set_t`.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), std::io::Error> {
    use std::mem::MaybeUninit;

    if cpu >= libc::CPU_SETSIZE as usize {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("cpu index {} exceeds CPU_SETSIZE", cpu),
        ));
    }

    // SAFETY: the cpu_set_t is zero-initialised before use and only passed
    // to the libc helpers that expect it.
    unsafe {
        let mut set = MaybeUninit::<libc::cpu_set_t>::zeroed();
        let set_ref = set.assume_init_mut();

        libc::CPU_ZERO(set_ref);
        libc::CPU_SET(cpu, set_ref);

        let result = libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set_ref);

        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }
}

/// CPU pinning is not supported on this platform; always succeeds.
#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), std::io::Error> {
    Ok(())
}
