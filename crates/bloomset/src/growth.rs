//! Growth / Upgrade Controller: decides whether a grow event doubles the
//! hash table or performs the one-way upgrade into Bloom mode, and migrates
//! already-stored keys into whichever representation results.
//!
//! Split out from the facade in `lib.rs` as its own `impl Filter` block,
//! the way a self-contained piece of lifecycle logic earns its own file.

use crate::{bloom, robinhood, FilterError, Storage};

const FIRST_NBUCKETS: usize = 16;

impl crate::Filter {
    /// Grows by one step: doubles the hash table (or allocates the first
    /// one, from pristine), unless the next table's byte size would meet or
    /// exceed the Bloom representation's, in which case it upgrades
    /// instead. On allocation failure `self` is left untouched.
    pub(crate) fn grow(&mut self) -> Result<(), FilterError> {
        let nbuckets = match &self.storage {
            Storage::Hash { nbuckets, .. } => *nbuckets,
            _ => 0,
        };
        let nbuckets_new = if nbuckets == 0 {
            FIRST_NBUCKETS
        } else {
            nbuckets * 2
        };

        if (nbuckets_new as u64) * 8 >= self.m / 8 {
            self.upgrade()
        } else {
            self.expand(nbuckets_new)
        }
    }

    /// One-way transition to Bloom mode. Every key currently stored in the
    /// hash table is re-inserted via the Bloom probe, unmixed -- it was
    /// already mixed and truncated on its way into the hash table, and
    /// remixing it here would silently drop it from the upgraded filter.
    fn upgrade(&mut self) -> Result<(), FilterError> {
        let byte_len = bloom::byte_len(self.m);
        let mut bits: Vec<u8> = Vec::new();
        bits.try_reserve_exact(byte_len)
            .map_err(|_| FilterError::OutOfMemory)?;
        bits.resize(byte_len, 0);

        if let Storage::Hash { buckets, .. } = &self.storage {
            for key in robinhood::occupied_keys(buckets) {
                bloom::set(&mut bits, self.m, self.k, key);
            }
        }

        self.storage = Storage::Bloom { bits };
        Ok(())
    }

    /// Allocates a larger hash table and reinserts every occupied slot from
    /// the old one via ordinary Robin Hood insertion -- distances are
    /// recomputed from scratch against the new `nbuckets`, not copied.
    fn expand(&mut self, nbuckets_new: usize) -> Result<(), FilterError> {
        let mut buckets: Vec<u64> = Vec::new();
        buckets
            .try_reserve_exact(nbuckets_new)
            .map_err(|_| FilterError::OutOfMemory)?;
        buckets.resize(nbuckets_new, 0);

        let mut count = 0usize;
        if let Storage::Hash { buckets: old, .. } = &self.storage {
            for key in robinhood::occupied_keys(old) {
                if robinhood::insert(&mut buckets, key) {
                    count += 1;
                }
            }
        }

        self.storage = Storage::Hash {
            buckets,
            nbuckets: nbuckets_new,
            count,
        };
        Ok(())
    }
}
