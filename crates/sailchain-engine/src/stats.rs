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

use std::time::Duration;

/// Counters of one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    roots_evaluated: usize,
    nodes_expanded: u64,
    memo_hits: u64,
    elapsed: Duration,
}

impl SearchStats {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_root(&mut self) {
        self.roots_evaluated += 1;
    }

    #[inline]
    pub(crate) fn record_expansion(&mut self) {
        self.nodes_expanded += 1;
    }

    #[inline]
    pub(crate) fn record_memo_hit(&mut self) {
        self.memo_hits += 1;
    }

    #[inline]
    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    #[inline]
    pub fn roots_evaluated(&self) -> usize {
        self.roots_evaluated
    }

    #[inline]
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    #[inline]
    pub fn memo_hits(&self) -> u64 {
        self.memo_hits
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "roots={} nodes={} memo_hits={} elapsed={:?}",
            self.roots_evaluated, self.nodes_expanded, self.memo_hits, self.elapsed
        )
    }
}
