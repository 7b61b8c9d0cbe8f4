//! Machine-word Fibonacci baselines.
//!
//! Same recurrences as the bignum engines, over `u64`. Only valid up to
//! [`MAX_FIB_U64`]; larger indices return `None`.

use crate::constants::MAX_FIB_U64;

/// Parity-indexed linear iteration over `u64`.
#[must_use]
pub fn fib_sequence(n: u64) -> Option<u64> {
    if n > MAX_FIB_U64 {
        return None;
    }
    let mut state = [0u64, 1];
    for i in 2..=n {
        let slot = usize::from(i & 1 == 1);
        state[slot] += state[1 - slot];
    }
    Some(state[usize::from(n & 1 == 1)])
}

/// Fast doubling over `u64`.
///
/// The last odd step computes F(n+1), which overflows at n = 93; that value
/// is never read, so wrapping arithmetic is used throughout.
#[must_use]
pub fn fib_fast_doubling(n: u64) -> Option<u64> {
    if n > MAX_FIB_U64 {
        return None;
    }
    if n < 2 {
        return Some(n);
    }
    let mut a = 0u64; // F(k)
    let mut b = 1u64; // F(k+1)
    let num_bits = u64::BITS - n.leading_zeros();
    for i in (0..num_bits).rev() {
        let c = a.wrapping_mul(b.wrapping_mul(2).wrapping_sub(a));
        let d = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));
        if (n >> i) & 1 == 1 {
            a = d;
            b = c.wrapping_add(d);
        } else {
            a = c;
            b = d;
        }
    }
    Some(a)
}
