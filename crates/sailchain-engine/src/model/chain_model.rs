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

use crate::model::{
    index::{OfferIndex, PortIndex, ShipIndex},
    symbols::SymbolRegistry,
};
use chrono::NaiveDate;
use sailchain_model::prelude::{LegId, LegTable, OfferCode};

/// Flattened, index-based view of a leg table for the searches: interned
/// symbols plus per-leg vectors addressed by `LegId` position.
#[derive(Debug, Clone)]
pub struct ChainModel<'t> {
    table: &'t LegTable,
    symbols: SymbolRegistry,
    offers: Vec<OfferIndex>,
    ships: Vec<ShipIndex>,
    starts: Vec<Option<(NaiveDate, PortIndex)>>,
    ends: Vec<Option<(NaiveDate, PortIndex)>>,
    allowed: Vec<bool>,
}

impl<'t> ChainModel<'t> {
    pub fn new(table: &'t LegTable) -> Self {
        let n = table.len();
        let mut symbols = SymbolRegistry::new();
        let mut offers = Vec::with_capacity(n);
        let mut ships = Vec::with_capacity(n);
        let mut starts = Vec::with_capacity(n);
        let mut ends = Vec::with_capacity(n);
        let mut allowed = Vec::with_capacity(n);

        for leg in table.iter() {
            offers.push(symbols.intern_offer(leg.offer()));
            ships.push(symbols.intern_ship(leg.ship()));
            starts.push(match (leg.start_date(), leg.start_port()) {
                (Some(date), Some(port)) => Some((date, symbols.intern_port(port))),
                _ => None,
            });
            ends.push(match (leg.end_date(), leg.end_port()) {
                (Some(date), Some(port)) => Some((date, symbols.intern_port(port))),
                _ => None,
            });
            allowed.push(leg.allowed());
        }

        Self {
            table,
            symbols,
            offers,
            ships,
            starts,
            ends,
            allowed,
        }
    }

    #[inline]
    pub fn table(&self) -> &'t LegTable {
        self.table
    }

    #[inline]
    pub fn symbols(&self) -> &SymbolRegistry {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    #[inline]
    pub fn offers_len(&self) -> usize {
        self.symbols.offers_len()
    }

    #[inline]
    pub fn offer(&self, leg: LegId) -> OfferIndex {
        debug_assert!(leg.get() < self.offers.len());
        self.offers[leg.get()]
    }

    #[inline]
    pub fn ship(&self, leg: LegId) -> ShipIndex {
        debug_assert!(leg.get() < self.ships.len());
        self.ships[leg.get()]
    }

    #[inline]
    pub fn start(&self, leg: LegId) -> Option<(NaiveDate, PortIndex)> {
        debug_assert!(leg.get() < self.starts.len());
        self.starts[leg.get()]
    }

    #[inline]
    pub fn end(&self, leg: LegId) -> Option<(NaiveDate, PortIndex)> {
        debug_assert!(leg.get() < self.ends.len());
        self.ends[leg.get()]
    }

    #[inline]
    pub fn is_allowed(&self, leg: LegId) -> bool {
        debug_assert!(leg.get() < self.allowed.len());
        self.allowed[leg.get()]
    }

    #[inline]
    pub fn offer_code(&self, leg: LegId) -> &OfferCode {
        debug_assert!(leg.get() < self.table.len());
        self.table.legs()[leg.get()].offer()
    }

    #[inline]
    pub fn iter_leg_ids(&self) -> impl Iterator<Item = LegId> + '_ {
        (0..self.len()).map(LegId::new)
    }

    #[inline]
    pub fn iter_allowed_leg_ids(&self) -> impl Iterator<Item = LegId> + '_ {
        self.iter_leg_ids().filter(|&l| self.is_allowed(l))
    }
}
