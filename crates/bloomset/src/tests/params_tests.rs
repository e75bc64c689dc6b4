use crate::params::{derive, MIN_CAPACITY};

#[test]
fn clamps_small_capacity_up_to_minimum() {
    let (n_eff, _, _) = derive(0, 0.01);
    assert_eq!(n_eff, MIN_CAPACITY);

    let (n_eff, _, _) = derive(4, 0.01);
    assert_eq!(n_eff, MIN_CAPACITY);
}

#[test]
fn leaves_capacity_above_minimum_untouched() {
    let (n_eff, _, _) = derive(1000, 0.01);
    assert_eq!(n_eff, 1000);
}

#[test]
fn m_is_always_a_power_of_two_and_at_least_two() {
    for n in [0usize, 16, 17, 100, 10_000, 1_000_000] {
        for p in [0.5, 0.1, 0.01, 0.001] {
            let (_, m, _) = derive(n, p);
            assert!(m >= 2, "m={} too small for n={} p={}", m, n, p);
            assert_eq!(
                m & (m - 1),
                0,
                "m={} not a power of two for n={} p={}",
                m,
                n,
                p
            );
        }
    }
}

#[test]
fn k_is_always_at_least_one() {
    for n in [0usize, 16, 1000] {
        for p in [0.5, 0.3, 0.01] {
            let (_, _, k) = derive(n, p);
            assert!(k >= 1, "k={} for n={} p={}", k, n, p);
        }
    }
}

#[test]
fn lower_false_positive_rate_yields_more_bits_and_hashes() {
    let (_, m_loose, k_loose) = derive(10_000, 0.1);
    let (_, m_tight, k_tight) = derive(10_000, 0.0001);
    assert!(m_tight > m_loose);
    assert!(k_tight >= k_loose);
}

#[test]
fn million_capacity_one_percent_matches_documented_ceiling() {
    // S6: m is the power-of-two ceiling of n * ln(p) / ln(1/2^ln2).
    let n = 1_000_000f64;
    let p = 0.01f64;
    let denom = (1.0 / 2f64.powf(std::f64::consts::LN_2)).ln();
    let m_raw = n * p.ln() / denom;
    let expected_m = 1u64 << (m_raw.log2().ceil() as u32);

    let (_, m, _) = derive(1_000_000, 0.01);
    assert_eq!(m, expected_m);
}

#[test]
#[should_panic(expected = "false-positive rate must be finite")]
fn panics_on_zero_rate() {
    derive(100, 0.0);
}

#[test]
#[should_panic(expected = "false-positive rate must be finite")]
fn panics_on_rate_above_one() {
    derive(100, 1.0);
}

#[test]
#[should_panic(expected = "false-positive rate must be finite")]
fn panics_on_non_finite_rate() {
    derive(100, f64::NAN);
}
