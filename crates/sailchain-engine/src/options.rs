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

use sailchain_model::prelude::OfferCode;

/// Knobs of a chain computation. The default is the strict reading: same
/// ship, same calendar day, no pre-excluded offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainOptions {
    allow_side_by_side: bool,
    next_day_grace: bool,
    initial_used_offers: Vec<OfferCode>,
}

impl ChainOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Permits a successor on a different ship, provided date and port
    /// still line up.
    #[inline]
    pub fn with_side_by_side(mut self, allow: bool) -> Self {
        self.allow_side_by_side = allow;
        self
    }

    /// Also accepts successors departing the calendar day after an arrival,
    /// covering overnight turnarounds.
    #[inline]
    pub fn with_next_day_grace(mut self, grace: bool) -> Self {
        self.next_day_grace = grace;
        self
    }

    /// Offers excluded from every chain before the search starts, e.g. ones
    /// the traveler already booked. Codes absent from the roster are ignored.
    #[inline]
    pub fn with_initial_used_offers<I>(mut self, offers: I) -> Self
    where
        I: IntoIterator<Item = OfferCode>,
    {
        self.initial_used_offers = offers.into_iter().collect();
        self
    }

    #[inline]
    pub fn allow_side_by_side(&self) -> bool {
        self.allow_side_by_side
    }

    #[inline]
    pub fn next_day_grace(&self) -> bool {
        self.next_day_grace
    }

    #[inline]
    pub fn initial_used_offers(&self) -> &[OfferCode] {
        &self.initial_used_offers
    }
}
