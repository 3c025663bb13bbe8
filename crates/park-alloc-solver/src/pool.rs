// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The working set of listings for one location.
//!
//! Listings are held price-ascending (stable on ties, so equal prices keep
//! catalog order) behind an availability mask. Branch-local consumption is
//! journaled: a search branch records a mark, takes listings, and rolls the
//! mask back to the mark on backtrack. Cross-branch consumption uses
//! `commit`, which bypasses the journal and is permanent.

use fixedbitset::FixedBitSet;
use park_alloc_core::space::SpaceLength;
use park_alloc_model::{id::ListingId, listing::Listing};
use std::collections::HashMap;

/// Journal position returned by [`ListingPool::mark`]; pass it back to
/// [`ListingPool::rollback_to`] to undo every `take` since.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolMark(usize);

#[derive(Debug, Clone)]
pub struct ListingPool {
    entries: Vec<Listing>,
    available: FixedBitSet,
    slot_by_id: HashMap<ListingId, usize>,
    journal: Vec<usize>,
}

impl ListingPool {
    /// Builds the pool for one location. The price sort is stable, so
    /// listings with equal prices keep their catalog order.
    pub fn new(mut listings: Vec<Listing>) -> Self {
        listings.sort_by_key(Listing::price);
        let mut available = FixedBitSet::with_capacity(listings.len());
        available.insert_range(..);
        let slot_by_id = listings
            .iter()
            .enumerate()
            .map(|(slot, listing)| (listing.id(), slot))
            .collect();
        Self {
            entries: listings,
            available,
            slot_by_id,
            journal: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn available_count(&self) -> usize {
        self.available.count_ones(..)
    }

    #[inline]
    pub fn listing(&self, slot: usize) -> &Listing {
        &self.entries[slot]
    }

    /// The cheapest available listing that accommodates `group_size`
    /// vehicles of `vehicle_length`, as a slot index.
    ///
    /// Because the pool is price-sorted, the first compatible hit is
    /// price-optimal for this sub-group in isolation. This is a deliberate
    /// greedy choice: a locally cheaper listing may block a better global
    /// arrangement for sibling sub-groups, and the search does not revisit
    /// it.
    #[inline]
    pub fn find_cheapest(&self, vehicle_length: SpaceLength, group_size: usize) -> Option<usize> {
        self.available
            .ones()
            .find(|&slot| self.entries[slot].fits_group(vehicle_length, group_size))
    }

    #[inline]
    pub fn mark(&self) -> PoolMark {
        PoolMark(self.journal.len())
    }

    /// Takes a listing out of the pool for the current branch.
    pub fn take(&mut self, slot: usize) {
        debug_assert!(
            self.available.contains(slot),
            "called `ListingPool::take` on unavailable slot {slot}"
        );
        self.available.remove(slot);
        self.journal.push(slot);
    }

    /// Restores every listing taken since `mark`, newest first.
    pub fn rollback_to(&mut self, mark: PoolMark) {
        debug_assert!(
            mark.0 <= self.journal.len(),
            "called `ListingPool::rollback_to` with a stale mark"
        );
        while self.journal.len() > mark.0 {
            let slot = self.journal.pop().expect("journal length checked above");
            self.available.insert(slot);
        }
    }

    /// Permanently removes a listing from the pool. Not journaled; a later
    /// rollback will not bring it back.
    pub fn commit(&mut self, id: ListingId) {
        debug_assert!(
            self.journal.is_empty(),
            "called `ListingPool::commit` with an open branch journal"
        );
        if let Some(&slot) = self.slot_by_id.get(&id) {
            self.available.remove(slot);
        } else {
            debug_assert!(false, "called `ListingPool::commit` with foreign {id}");
        }
    }
}
