//! Random index generation.
//!
//! Primary source is a small buffered `/dev/urandom` pool; when that is
//! missing or fails mid-run, a SplitMix64-style mixer over hardware entropy
//! takes over. Pool and mixer state are zeroized on shutdown.

mod hw;

use std::fs::File;
use std::io::{self, Read};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex};

use zeroize::Zeroize;

const POOL_LEN: usize = 4096;

struct Pool {
    file: File,
    buf: [u8; POOL_LEN],
    pos: usize,
}

impl Pool {
    fn open() -> io::Result<Self> {
        Ok(Pool {
            file: File::open("/dev/urandom")?,
            buf: [0u8; POOL_LEN],
            pos: POOL_LEN, // force a fill on first read
        })
    }

    fn next_u64(&mut self) -> io::Result<u64> {
        if self.pos + 8 > POOL_LEN {
            self.buf.zeroize();
            self.file.read_exact(&mut self.buf)?;
            self.pos = 0;
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buf[self.pos..self.pos + 8]);
        self.pos += 8;
        Ok(u64::from_ne_bytes(bytes))
    }
}

static POOL: LazyLock<Mutex<Option<Pool>>> = LazyLock::new(|| Mutex::new(Pool::open().ok()));

// Fallback mixer state, seeded lazily from the cycle counter.
static STATE: AtomicU64 = AtomicU64::new(0);

/// Name of the active entropy source (for the TUI header).
pub fn entropy_source() -> &'static str {
    let pooled = POOL.lock().map(|g| g.is_some()).unwrap_or(false);
    if pooled { "/dev/urandom" } else { hw::source_name() }
}

/// Next raw 64-bit value from the active source.
pub fn next_u64() -> u64 {
    if let Ok(mut guard) = POOL.lock()
        && let Some(pool) = guard.as_mut()
    {
        match pool.next_u64() {
            Ok(v) => return v,
            Err(_) => *guard = None, // urandom broke, fall back for good
        }
    }
    fallback_u64()
}

fn fallback_u64() -> u64 {
    let state = STATE.load(Ordering::Relaxed);
    let mixed = state
        .rotate_left(17)
        .wrapping_add(0x9e3779b97f4a7c15)
        ^ hw::entropy();
    STATE.store(mixed, Ordering::Relaxed);

    // SplitMix64 output finalizer
    let mut z = mixed;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Uniform index in `[0, bound)`. Rejection-samples to avoid modulo bias.
pub fn below(bound: usize) -> usize {
    debug_assert!(bound > 0);
    let bound = bound as u64;
    let zone = u64::MAX - u64::MAX % bound;
    loop {
        let v = next_u64();
        if v < zone {
            return (v % bound) as usize;
        }
    }
}

/// Scrub pool buffer and mixer state. Called from exit handlers, so it must
/// not block: a contended pool lock is skipped rather than waited on.
pub fn zeroize_state() {
    STATE.store(0, Ordering::SeqCst);
    if let Ok(mut guard) = POOL.try_lock() {
        if let Some(pool) = guard.as_mut() {
            pool.buf.zeroize();
        }
        *guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_stays_in_bounds() {
        for bound in [1, 2, 3, 10, 24, 62, 86] {
            for _ in 0..1_000 {
                assert!(below(bound) < bound);
            }
        }
    }

    #[test]
    fn below_one_is_zero() {
        for _ in 0..100 {
            assert_eq!(below(1), 0);
        }
    }

    #[test]
    fn next_u64_is_not_constant() {
        let first = next_u64();
        let varied = (0..64).any(|_| next_u64() != first);
        assert!(varied);
    }

    #[test]
    fn fallback_mixer_is_not_constant() {
        let first = fallback_u64();
        let varied = (0..64).any(|_| fallback_u64() != first);
        assert!(varied);
    }
}
