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

use crate::model::index::{OfferIndex, PortIndex, ShipIndex};
use fxhash::FxHashMap;
use sailchain_model::prelude::{LegTable, OfferCode, Port, ShipIdentity};

/// Interns offer/port/ship identities to dense indices. Indices are assigned
/// in first-seen order over the leg table, so they are deterministic for a
/// given input.
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    offer_to_index: FxHashMap<OfferCode, OfferIndex>,
    port_to_index: FxHashMap<Port, PortIndex>,
    ship_to_index: FxHashMap<ShipIdentity, ShipIndex>,
    index_to_offer: Vec<OfferCode>,
    index_to_port: Vec<Port>,
    index_to_ship: Vec<ShipIdentity>,
}

impl SymbolRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn intern_offer(&mut self, code: &OfferCode) -> OfferIndex {
        if let Some(&i) = self.offer_to_index.get(code) {
            return i;
        }
        let i = OfferIndex(self.index_to_offer.len());
        self.offer_to_index.insert(code.clone(), i);
        self.index_to_offer.push(code.clone());
        i
    }

    pub(crate) fn intern_port(&mut self, port: &Port) -> PortIndex {
        if let Some(&i) = self.port_to_index.get(port) {
            return i;
        }
        let i = PortIndex(self.index_to_port.len());
        self.port_to_index.insert(port.clone(), i);
        self.index_to_port.push(port.clone());
        i
    }

    pub(crate) fn intern_ship(&mut self, ship: &ShipIdentity) -> ShipIndex {
        if let Some(&i) = self.ship_to_index.get(ship) {
            return i;
        }
        let i = ShipIndex(self.index_to_ship.len());
        self.ship_to_index.insert(ship.clone(), i);
        self.index_to_ship.push(ship.clone());
        i
    }

    #[inline]
    pub fn offer_index(&self, code: &OfferCode) -> Option<OfferIndex> {
        self.offer_to_index.get(code).copied()
    }

    #[inline]
    pub fn port_index(&self, port: &Port) -> Option<PortIndex> {
        self.port_to_index.get(port).copied()
    }

    #[inline]
    pub fn ship_index(&self, ship: &ShipIdentity) -> Option<ShipIndex> {
        self.ship_to_index.get(ship).copied()
    }

    #[inline]
    pub fn offer_code(&self, i: OfferIndex) -> Option<&OfferCode> {
        self.index_to_offer.get(i.0)
    }

    #[inline]
    pub fn port(&self, i: PortIndex) -> Option<&Port> {
        self.index_to_port.get(i.0)
    }

    #[inline]
    pub fn ship(&self, i: ShipIndex) -> Option<&ShipIdentity> {
        self.index_to_ship.get(i.0)
    }

    #[inline]
    pub fn offers_len(&self) -> usize {
        self.index_to_offer.len()
    }

    #[inline]
    pub fn ports_len(&self) -> usize {
        self.index_to_port.len()
    }

    #[inline]
    pub fn ships_len(&self) -> usize {
        self.index_to_ship.len()
    }
}

impl From<&LegTable> for SymbolRegistry {
    fn from(table: &LegTable) -> Self {
        let mut symbols = Self::new();
        for leg in table.iter() {
            symbols.intern_offer(leg.offer());
            symbols.intern_ship(leg.ship());
            if let Some(p) = leg.start_port() {
                symbols.intern_port(p);
            }
            if let Some(p) = leg.end_port() {
                symbols.intern_port(p);
            }
        }
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sailchain_model::prelude::{LegTableBuilder, OfferRecord, SailingRecord, SailingRow};

    fn row(offer: &str, ship: &str, from: &str, to: &str) -> SailingRow {
        SailingRow::new(
            OfferRecord::new(offer),
            SailingRecord {
                ship_code: Some(ship.into()),
                embark_port: Some(from.into()),
                debark_port: Some(to.into()),
                sail_date: Some("2025-01-04".into()),
                return_date: Some("2025-01-11".into()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_interning_dedupes_and_is_stable() {
        let rows = vec![
            row("A", "QN", "Miami", "Nassau"),
            row("B", "qn", "miami", "Nassau"),
            row("A", "RT", "Nassau", "Miami"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let symbols = SymbolRegistry::from(&table);

        // Ship identity is lower-cased, so QN and qn intern once.
        assert_eq!(symbols.ships_len(), 2);
        assert_eq!(symbols.offers_len(), 2);
        assert_eq!(symbols.ports_len(), 2);

        let a = OfferCode::new("A");
        assert_eq!(symbols.offer_index(&a), Some(OfferIndex(0)));
        assert_eq!(symbols.offer_code(OfferIndex(0)), Some(&a));
    }

    #[test]
    fn test_unknown_symbols_are_none() {
        let rows = vec![row("A", "QN", "Miami", "Nassau")];
        let table = LegTableBuilder::new(&rows).build();
        let symbols = SymbolRegistry::from(&table);
        assert_eq!(symbols.offer_index(&OfferCode::new("ZZ")), None);
        assert_eq!(symbols.port_index(&Port::normalized("Oslo").unwrap()), None);
        assert_eq!(symbols.offer_code(OfferIndex(17)), None);
    }
}
