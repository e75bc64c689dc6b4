//! Parameter Derivation: computes the Bloom bit count `m` and the
//! hashes-per-key `k` for a target capacity `n` and false-positive rate `p`.
//!
//! These two numbers are fixed for the lifetime of a [`crate::Filter`] --
//! they describe the Bloom representation the filter will eventually
//! upgrade into, regardless of how few keys it ever actually holds.

use std::f64::consts::LN_2;

/// Hash tables never start smaller than this many slots, so capacities
/// below it are clamped up front.
pub(crate) const MIN_CAPACITY: usize = 16;

/// Clamps `n`, derives `(m, k)` from the optimal-bloom-filter formulas, then
/// rescales `k` to compensate for rounding `m` up to a power of two.
///
/// Returns `(effective_n, m, k)`, where `effective_n` is `n` after the
/// `n < 16` lower clamp.
///
/// # Panics
///
/// Panics if `p` is not finite or not in `(0, 1)` -- this is a caller
/// precondition the core does not attempt to recover from, matching
/// `BloomFilter::new`'s own assertions on `false_positive_rate`.
pub(crate) fn derive(n: usize, p: f64) -> (usize, u64, u32) {
    assert!(
        p.is_finite() && p > 0.0 && p < 1.0,
        "false-positive rate must be finite and in (0, 1), got {}",
        p
    );

    let n_eff = n.max(MIN_CAPACITY);
    let n_f = n_eff as f64;

    // m_raw = n * ln(p) / ln(1 / 2^ln2); denominator is negative, so is
    // ln(p), so m_raw comes out positive.
    let denom = (1.0 / 2f64.powf(LN_2)).ln();
    let m_raw = n_f * p.ln() / denom;

    let k_raw = ((m_raw / n_f) * LN_2).round();

    let m = next_pow2(m_raw).max(2);

    // Rescale k for the increase in m from rounding up to a power of two,
    // so the achieved false-positive rate stays close to the target.
    let k = ((m_raw / m as f64) * k_raw).round().max(1.0) as u32;

    (n_eff, m, k)
}

fn next_pow2(x: f64) -> u64 {
    let exp = x.max(1.0).log2().ceil() as u32;
    1u64 << exp
}
