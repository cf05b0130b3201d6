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

use crate::{
    model::{adjacency::AdjacencyIndex, chain_model::ChainModel},
    options::ChainOptions,
    result::{DepthResult, LongestChainResult},
    search::{depth::DepthSearch, longest::LongestChainSearch},
};
use sailchain_model::prelude::LegTable;

/// Entry point of the crate: runs the chain searches over a leg table.
/// Stateless between calls; the interned model and adjacency index are
/// rebuilt per computation so a table can change freely in between.
#[derive(Debug, Clone, Default)]
pub struct ChainEngine {
    options: ChainOptions,
    longest_node_budget: Option<u64>,
}

impl ChainEngine {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_options(mut self, options: ChainOptions) -> Self {
        self.options = options;
        self
    }

    /// Caps the longest-chain search; depth computation is never capped.
    #[inline]
    pub fn with_longest_node_budget(mut self, budget: u64) -> Self {
        self.longest_node_budget = Some(budget);
        self
    }

    #[inline]
    pub fn options(&self) -> &ChainOptions {
        &self.options
    }

    /// Chain depth of every allowed leg in the table.
    pub fn compute_depths(&self, table: &LegTable) -> DepthResult {
        let model = ChainModel::new(table);
        let index = AdjacencyIndex::build(&model, self.options.allow_side_by_side());
        let result = DepthSearch::new(&model, &index, &self.options).run();
        tracing::debug!(
            "Computed chain depths for {} of {} legs: {}",
            result.len(),
            table.len(),
            result.stats()
        );
        result
    }

    /// One longest chain of the table, legs in sailing order.
    pub fn compute_longest_chain(&self, table: &LegTable) -> LongestChainResult {
        let model = ChainModel::new(table);
        let index = AdjacencyIndex::build(&model, self.options.allow_side_by_side());
        let mut search = LongestChainSearch::new(&model, &index, &self.options);
        if let Some(budget) = self.longest_node_budget {
            search = search.with_node_budget(budget);
        }
        let result = search.run();
        tracing::debug!(
            "Longest chain over {} legs has length {}: {}",
            table.len(),
            result.len(),
            result.stats()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{result::ChainDepth, verify::ChainValidator};
    use sailchain_model::prelude::{
        LegId, LegTableBuilder, OfferRecord, SailingRecord, SailingRow,
    };

    #[inline]
    fn lid(n: usize) -> LegId {
        LegId::new(n)
    }

    fn row(offer: &str, ship: &str, from: &str, to: &str, sail: &str, ret: &str) -> SailingRow {
        SailingRow::new(
            OfferRecord::new(offer),
            SailingRecord {
                ship_code: Some(ship.into()),
                embark_port: Some(from.into()),
                debark_port: Some(to.into()),
                sail_date: Some(sail.into()),
                return_date: Some(ret.into()),
                ..Default::default()
            },
        )
    }

    fn caribbean_rows() -> Vec<SailingRow> {
        vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
            row("OF3", "STAR", "Nassau", "Key West", "2025-01-11", "2025-01-14"),
            row("OF4", "QN", "Cozumel", "Miami", "2025-01-18", "2025-01-25"),
        ]
    }

    #[test]
    fn test_depths_and_longest_agree() {
        let rows = caribbean_rows();
        let table = LegTableBuilder::new(&rows).build();
        let engine = ChainEngine::new();

        let depths = engine.compute_depths(&table);
        let longest = engine.compute_longest_chain(&table);
        // The deepest root and the materialized chain measure the same thing.
        let max_depth = depths.depths().values().map(|d| d.get()).max().unwrap();
        assert_eq!(max_depth as usize, longest.len());
        assert_eq!(longest.legs(), &[lid(0), lid(1), lid(3)]);
    }

    #[test]
    fn test_longest_chain_passes_validation() {
        let rows = caribbean_rows();
        let table = LegTableBuilder::new(&rows).build();
        for options in [
            ChainOptions::new(),
            ChainOptions::new().with_side_by_side(true),
            ChainOptions::new()
                .with_side_by_side(true)
                .with_next_day_grace(true),
        ] {
            let engine = ChainEngine::new().with_options(options.clone());
            let longest = engine.compute_longest_chain(&table);
            assert!(
                ChainValidator::validate_chain(&table, &options, longest.legs()).is_ok(),
                "chain {:?} must validate under {:?}",
                longest.legs(),
                options
            );
        }
    }

    #[test]
    fn test_side_by_side_never_reduces_depth() {
        let rows = caribbean_rows();
        let table = LegTableBuilder::new(&rows).build();
        let strict = ChainEngine::new().compute_depths(&table);
        let relaxed = ChainEngine::new()
            .with_options(ChainOptions::new().with_side_by_side(true))
            .compute_depths(&table);
        for (leg, depth) in strict.depths() {
            assert!(relaxed.depth_of(*leg).unwrap() >= *depth);
        }
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let rows = caribbean_rows();
        let table = LegTableBuilder::new(&rows).build();
        let engine = ChainEngine::new();
        let first = engine.compute_longest_chain(&table);
        let second = engine.compute_longest_chain(&table);
        assert_eq!(first.legs(), second.legs());
        assert_eq!(first.path(), second.path());
    }

    #[test]
    fn test_empty_table() {
        let rows: Vec<SailingRow> = Vec::new();
        let table = LegTableBuilder::new(&rows).build();
        let engine = ChainEngine::new();
        assert!(engine.compute_depths(&table).is_empty());
        assert!(engine.compute_longest_chain(&table).is_empty());
    }

    #[test]
    fn test_budget_keeps_results_well_formed() {
        let rows = caribbean_rows();
        let table = LegTableBuilder::new(&rows).build();
        let engine = ChainEngine::new().with_longest_node_budget(2);
        let longest = engine.compute_longest_chain(&table);
        assert!(!longest.is_empty());
        assert!(
            ChainValidator::validate_chain(&table, engine.options(), longest.legs()).is_ok()
        );
    }

    #[test]
    fn test_depth_floor_is_one() {
        let rows = caribbean_rows();
        let table = LegTableBuilder::new(&rows).build();
        let depths = ChainEngine::new().compute_depths(&table);
        for depth in depths.depths().values() {
            assert!(*depth >= ChainDepth::MIN);
        }
    }
}
