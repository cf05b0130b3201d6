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

use crate::stats::SearchStats;
use sailchain_model::prelude::{LegId, OfferCode};
use std::collections::BTreeMap;

/// Number of legs chainable starting at some leg, the leg itself included.
/// Never below one; a leg with no viable successor still counts itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
#[must_use]
pub struct ChainDepth(u32);

impl ChainDepth {
    pub const MIN: ChainDepth = ChainDepth(1);

    #[inline]
    pub fn new(depth: u32) -> Self {
        debug_assert!(depth >= 1, "a chain always contains its root");
        Self(depth)
    }

    #[inline]
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ChainDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-leg chain depths of one roster under one set of options. Only
/// allowed legs carry an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthResult {
    depths: BTreeMap<LegId, ChainDepth>,
    stats: SearchStats,
}

impl DepthResult {
    #[inline]
    pub(crate) fn new(depths: BTreeMap<LegId, ChainDepth>, stats: SearchStats) -> Self {
        Self { depths, stats }
    }

    #[inline]
    pub fn depth_of(&self, leg: LegId) -> Option<ChainDepth> {
        self.depths.get(&leg).copied()
    }

    #[inline]
    pub fn depths(&self) -> &BTreeMap<LegId, ChainDepth> {
        &self.depths
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// One materialized longest chain: legs in sailing order plus the offers
/// they consume. Empty when the roster has no allowed leg.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestChainResult {
    legs: Vec<LegId>,
    path: Vec<OfferCode>,
    stats: SearchStats,
}

impl LongestChainResult {
    #[inline]
    pub(crate) fn new(legs: Vec<LegId>, path: Vec<OfferCode>, stats: SearchStats) -> Self {
        debug_assert_eq!(legs.len(), path.len());
        Self { legs, path, stats }
    }

    #[inline]
    pub fn legs(&self) -> &[LegId] {
        &self.legs
    }

    #[inline]
    pub fn path(&self) -> &[OfferCode] {
        &self.path
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
