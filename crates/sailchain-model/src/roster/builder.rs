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

use crate::roster::{
    leg::{Leg, LegId},
    row::SailingRow,
    table::LegTable,
};

/// Builds a `LegTable` from raw rows, 1:1 and in row order. Without a
/// visibility predicate every leg is allowed; hidden rows stay in the table
/// (ids are row positions) but carry `allowed = false`.
pub struct LegTableBuilder<'rows> {
    rows: &'rows [SailingRow],
    visibility: Option<Box<dyn Fn(&SailingRow) -> bool + 'rows>>,
}

impl std::fmt::Debug for LegTableBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegTableBuilder")
            .field("rows", &self.rows.len())
            .field("visibility", &self.visibility.is_some())
            .finish()
    }
}

impl<'rows> LegTableBuilder<'rows> {
    #[inline]
    pub fn new(rows: &'rows [SailingRow]) -> Self {
        Self {
            rows,
            visibility: None,
        }
    }

    #[inline]
    pub fn with_visibility<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&SailingRow) -> bool + 'rows,
    {
        self.visibility = Some(Box::new(predicate));
        self
    }

    pub fn build(self) -> LegTable {
        let mut table = LegTable::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let allowed = self.visibility.as_ref().map(|p| p(row)).unwrap_or(true);
            table.push(Leg::from_row(LegId::new(i), row, allowed));
        }
        table
    }
}
