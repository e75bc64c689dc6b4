//! # bloomset
//!
//! A dual-mode approximate set-membership filter.
//!
//! It begins life as an exact open-addressed hash set with Robin Hood
//! probing. When the hash set would otherwise outgrow the memory footprint
//! of the Bloom filter it was sized for, it is irreversibly *upgraded* into
//! a classical Bloom filter. Small populations pay only for the keys
//! actually inserted; large populations pay the fixed Bloom cost they were
//! always going to pay anyway.
//!
//! ## Module responsibilities
//!
//! | Module       | Purpose                                                |
//! |--------------|---------------------------------------------------------|
//! | [`params`]   | Derives `(m, k)` from capacity `n` and rate `p`         |
//! | [`mix`]      | 64-bit avalanche mixer; drives the Bloom probe sequence |
//! | [`bloom`]    | Bit array set/test at the `k` probe positions per key   |
//! | [`robinhood`]| Open-addressed hash table with distance-based eviction  |
//! | [`growth`]   | Grow-vs-upgrade decision and key migration (impl block) |
//! | `lib.rs`     | `Filter` facade: `add`/`test`/`clear`/`memsize`/`upgraded` |
//!
//! ## Example
//!
//! ```
//! use bloomset::Filter;
//!
//! let mut f = Filter::new(1000, 0.01);
//! f.add(12345).unwrap();
//! assert!(f.test(12345));
//! assert!(!f.test(99999));
//! ```
//!
//! ## Non-goals
//!
//! No deletion, no serialization, no iteration over stored keys, no exact
//! membership once upgraded, no internal thread safety. Keys are opaque
//! 64-bit integers; hashing an application object down to one is the
//! caller's job, not this crate's -- see `crates/cli` for an example.

mod bloom;
mod error;
mod growth;
mod mix;
mod params;
mod robinhood;

pub use error::FilterError;

/// The active storage representation. Exactly one of `Hash`/`Bloom` is live
/// once the filter has ever been grown; before that it is `Pristine`.
///
/// Modeling this as a tagged variant -- rather than a pair of `Option`
/// fields -- makes the "exactly one of buckets/bits is allocated" invariant
/// a property of the type rather than something every method has to
/// re-check.
enum Storage {
    /// No storage allocated yet; no key has ever been added.
    Pristine,
    /// Exact hash-set mode.
    Hash {
        buckets: Vec<u64>,
        nbuckets: usize,
        count: usize,
    },
    /// Upgraded, terminal Bloom mode.
    Bloom { bits: Vec<u8> },
}

/// A dual-mode approximate set-membership filter.
///
/// See the [crate documentation](crate) for the overall design.
pub struct Filter {
    n: usize,
    p: f64,
    m: u64,
    k: u32,
    storage: Storage,
}

impl Filter {
    /// Creates a filter sized for capacity `n` at target false-positive
    /// rate `p`. Derives `(m, k)` immediately; allocates no storage until
    /// the first [`add`](Filter::add).
    ///
    /// `n` below 16 is clamped up to 16. `p` must be finite and in `(0, 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not finite or not in `(0, 1)`.
    pub fn new(n: usize, p: f64) -> Self {
        let (n_eff, m, k) = params::derive(n, p);
        Self {
            n: n_eff,
            p,
            m,
            k,
            storage: Storage::Pristine,
        }
    }

    /// Adds `key` to the filter.
    ///
    /// In Bloom mode this always succeeds. In hash mode, if the load factor
    /// would reach one half, the filter grows (possibly upgrading to Bloom
    /// mode) before inserting; if that allocation fails, `key` is not
    /// inserted and the filter is left exactly as it was.
    ///
    /// Does not report whether `key` was already present.
    pub fn add(&mut self, key: u64) -> Result<(), FilterError> {
        let mixed = mix::mix(key);

        if let Storage::Bloom { bits } = &mut self.storage {
            bloom::set(bits, self.m, self.k, mixed);
            return Ok(());
        }

        let needs_grow = match &self.storage {
            Storage::Pristine => true,
            Storage::Hash { nbuckets, count, .. } => count + 1 >= nbuckets / 2,
            Storage::Bloom { .. } => unreachable!("handled above"),
        };
        if needs_grow {
            self.grow()?;
        }

        match &mut self.storage {
            Storage::Bloom { bits } => bloom::set(bits, self.m, self.k, mixed),
            Storage::Hash { buckets, count, .. } => {
                if robinhood::insert(buckets, mixed) {
                    *count += 1;
                }
            }
            Storage::Pristine => unreachable!("grow always leaves Hash or Bloom"),
        }
        Ok(())
    }

    /// Tests whether `key` might be in the filter.
    ///
    /// In hash mode this is exact. In Bloom mode, `false` is definitive and
    /// `true` is probabilistic. Never fails.
    #[must_use]
    pub fn test(&self, key: u64) -> bool {
        let mixed = mix::mix(key);
        match &self.storage {
            Storage::Pristine => false,
            Storage::Hash { buckets, .. } => robinhood::contains(buckets, mixed),
            Storage::Bloom { bits } => bloom::test(bits, self.m, self.k, mixed),
        }
    }

    /// Returns the filter to an empty state within its current mode.
    ///
    /// Does not un-upgrade a Bloom-mode filter -- upgrade is one-way.
    pub fn clear(&mut self) {
        match &mut self.storage {
            Storage::Pristine => {}
            Storage::Hash { buckets, count, .. } => {
                buckets.iter_mut().for_each(|slot| *slot = 0);
                *count = 0;
            }
            Storage::Bloom { bits } => bits.iter_mut().for_each(|byte| *byte = 0),
        }
    }

    /// Current storage footprint in bytes: the Bloom byte count once
    /// upgraded, else `nbuckets * 8`. Zero before the first `add`.
    #[must_use]
    pub fn memsize(&self) -> usize {
        match &self.storage {
            Storage::Pristine => 0,
            Storage::Hash { nbuckets, .. } => nbuckets * 8,
            Storage::Bloom { bits } => bits.len(),
        }
    }

    /// `true` iff the filter has upgraded to Bloom mode. Terminal once true.
    #[must_use]
    pub fn upgraded(&self) -> bool {
        matches!(self.storage, Storage::Bloom { .. })
    }

    /// Number of live entries in hash mode; `0` in Bloom mode or before the
    /// first `add` (exact membership is not tracked once upgraded).
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Hash { count, .. } => *count,
            _ => 0,
        }
    }

    /// `true` iff no key has been observably added -- either pristine, or
    /// in hash mode with zero live entries. Always `false` once upgraded,
    /// since a Bloom filter cannot attest to emptiness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.storage {
            Storage::Pristine => true,
            Storage::Hash { count, .. } => *count == 0,
            Storage::Bloom { .. } => false,
        }
    }

    /// The capacity this filter was sized for (after the `n < 16` clamp).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.n
    }

    /// The target false-positive rate this filter was configured with.
    #[must_use]
    pub fn false_positive_rate(&self) -> f64 {
        self.p
    }

    /// Total number of Bloom bits this filter will upgrade into.
    #[must_use]
    pub fn bloom_bits(&self) -> u64 {
        self.m
    }

    /// Number of Bloom hash probes per key.
    #[must_use]
    pub fn bloom_hashes(&self) -> u32 {
        self.k
    }

    /// Current hash-table size in slots; `0` before the first grow and
    /// after upgrade.
    #[must_use]
    pub fn nbuckets(&self) -> usize {
        match &self.storage {
            Storage::Hash { nbuckets, .. } => *nbuckets,
            _ => 0,
        }
    }
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("n", &self.n)
            .field("p", &self.p)
            .field("m", &self.m)
            .field("k", &self.k)
            .field("upgraded", &self.upgraded())
            .field("len", &self.len())
            .field("memsize", &self.memsize())
            .finish()
    }
}

#[cfg(test)]
mod tests;
