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

use crate::model::index::OfferIndex;
use fixedbitset::FixedBitSet;

/// Offers consumed along the chain under construction. Backed by a bitset
/// over the interned offer universe so cloning it into a memo key is a
/// plain word copy and two sets over the same universe compare cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedOffers {
    bits: FixedBitSet,
}

impl UsedOffers {
    #[inline]
    pub fn with_universe(offers: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(offers),
        }
    }

    #[inline]
    pub fn contains(&self, offer: OfferIndex) -> bool {
        self.bits.contains(offer.get())
    }

    /// Marks an offer used; `false` when it already was.
    #[inline]
    pub fn insert(&mut self, offer: OfferIndex) -> bool {
        !self.bits.put(offer.get())
    }

    #[inline]
    pub fn remove(&mut self, offer: OfferIndex) {
        self.bits.set(offer.get(), false);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    #[inline]
    pub(crate) fn bits(&self) -> &FixedBitSet {
        &self.bits
    }
}
