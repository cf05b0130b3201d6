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
    model::{
        adjacency::{AdjacencyIndex, successor_keys},
        chain_model::ChainModel,
    },
    options::ChainOptions,
    result::LongestChainResult,
    search::used::UsedOffers,
    stats::SearchStats,
};
use sailchain_model::prelude::LegId;
use std::time::Instant;

/// Exhaustive search materializing one longest chain. Unlike the depth
/// search this one keeps the concrete path, which makes positions
/// distinguishable even under identical used sets, so nothing is memoized.
/// Every allowed leg is tried as a root from an empty used set; among
/// equally long chains the first one found wins.
#[derive(Debug)]
pub struct LongestChainSearch<'m, 't> {
    model: &'m ChainModel<'t>,
    index: &'m AdjacencyIndex,
    options: &'m ChainOptions,
    node_budget: Option<u64>,
    stats: SearchStats,
}

impl<'m, 't> LongestChainSearch<'m, 't> {
    pub fn new(
        model: &'m ChainModel<'t>,
        index: &'m AdjacencyIndex,
        options: &'m ChainOptions,
    ) -> Self {
        Self {
            model,
            index,
            options,
            node_budget: None,
            stats: SearchStats::new(),
        }
    }

    /// Caps the number of expanded nodes; the search then returns the best
    /// chain found so far instead of running to completion.
    #[inline]
    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }

    #[tracing::instrument(level = "debug", name = "Longest Chain Search", skip(self))]
    pub fn run(mut self) -> LongestChainResult {
        let started = Instant::now();
        let roots: Vec<LegId> = self.model.iter_allowed_leg_ids().collect();

        let mut best: Vec<LegId> = Vec::new();
        let mut path: Vec<LegId> = Vec::new();
        let mut used = UsedOffers::with_universe(self.model.offers_len());
        for root in roots {
            self.stats.record_root();
            debug_assert!(path.is_empty());
            debug_assert!(used.is_empty());
            self.extend(root, &mut path, &mut used, &mut best);
        }

        let codes = best
            .iter()
            .map(|&leg| self.model.offer_code(leg).clone())
            .collect();
        self.stats.set_elapsed(started.elapsed());
        tracing::debug!("Longest: best chain has {} legs, {}", best.len(), self.stats);
        LongestChainResult::new(best, codes, self.stats)
    }

    fn extend(
        &mut self,
        leg: LegId,
        path: &mut Vec<LegId>,
        used: &mut UsedOffers,
        best: &mut Vec<LegId>,
    ) {
        if let Some(budget) = self.node_budget
            && self.stats.nodes_expanded() >= budget
        {
            return;
        }
        self.stats.record_expansion();

        let offer = self.model.offer(leg);
        let inserted = used.insert(offer);
        debug_assert!(inserted, "used offers are filtered before recursion");
        path.push(leg);

        // Strictly longer only, so the first chain of a given length sticks.
        if path.len() > best.len() {
            *best = path.clone();
            tracing::trace!("Longest: new incumbent with {} legs", best.len());
        }

        let (model, index) = (self.model, self.index);
        for probe in successor_keys(model, self.options, leg) {
            for &next in index.candidates(&probe) {
                if used.contains(model.offer(next)) {
                    continue;
                }
                self.extend(next, path, used, best);
            }
        }

        path.pop();
        used.remove(offer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sailchain_model::prelude::{
        LegTable, LegTableBuilder, OfferCode, OfferRecord, SailingRecord, SailingRow,
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

    fn run(table: &LegTable, options: ChainOptions) -> LongestChainResult {
        let model = ChainModel::new(table);
        let index = AdjacencyIndex::build(&model, options.allow_side_by_side());
        LongestChainSearch::new(&model, &index, &options).run()
    }

    fn run_with_budget(
        table: &LegTable,
        options: ChainOptions,
        budget: u64,
    ) -> LongestChainResult {
        let model = ChainModel::new(table);
        let index = AdjacencyIndex::build(&model, options.allow_side_by_side());
        LongestChainSearch::new(&model, &index, &options)
            .with_node_budget(budget)
            .run()
    }

    #[test]
    fn test_materializes_the_longer_branch() {
        // From leg 0 two continuations exist; the three-leg one must win.
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
            row("OF3", "QN", "Nassau", "Key West", "2025-01-11", "2025-01-15"),
            row("OF4", "QN", "Key West", "Miami", "2025-01-15", "2025-01-22"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert_eq!(result.legs(), &[lid(0), lid(2), lid(3)]);
        assert_eq!(
            result.path(),
            &[
                OfferCode::new("OF1"),
                OfferCode::new("OF3"),
                OfferCode::new("OF4")
            ]
        );
    }

    #[test]
    fn test_fully_chained_fleet_materializes_whole() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
            row("OF3", "QN", "Cozumel", "Key West", "2025-01-18", "2025-01-25"),
            row("OF4", "QN", "Key West", "Tampa", "2025-01-25", "2025-02-01"),
            row("OF5", "QN", "Tampa", "Miami", "2025-02-01", "2025-02-08"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert_eq!(result.legs(), &[lid(0), lid(1), lid(2), lid(3), lid(4)]);
        let codes: Vec<&str> = result.path().iter().map(OfferCode::as_str).collect();
        assert_eq!(codes, ["OF1", "OF2", "OF3", "OF4", "OF5"]);
    }

    #[test]
    fn test_first_chain_of_maximal_length_wins() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Miami", "2025-01-11", "2025-01-18"),
            row("OF3", "STAR", "Tampa", "Cozumel", "2025-02-01", "2025-02-08"),
            row("OF4", "STAR", "Cozumel", "Tampa", "2025-02-08", "2025-02-15"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        // Both ships offer a two-leg chain; the earlier root keeps the title.
        assert_eq!(result.legs(), &[lid(0), lid(1)]);
    }

    #[test]
    fn test_side_by_side_unlocks_longer_chains() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "STAR", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
        ];
        let table = LegTableBuilder::new(&rows).build();

        let strict = run(&table, ChainOptions::new());
        assert_eq!(strict.len(), 1);

        let relaxed = run(&table, ChainOptions::new().with_side_by_side(true));
        assert_eq!(relaxed.legs(), &[lid(0), lid(1)]);
    }

    #[test]
    fn test_duplicate_offer_is_spent_once() {
        let rows = vec![
            row("SAME", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("SAME", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_pre_used_offers_do_not_shrink_the_longest_chain() {
        // Exclusions describe a traveler's bookings; the longest chain is a
        // roster-wide property and starts from a clean slate.
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let options =
            ChainOptions::new().with_initial_used_offers([OfferCode::new("OF2")]);
        let result = run(&table, options);
        assert_eq!(result.legs(), &[lid(0), lid(1)]);
    }

    #[test]
    fn test_node_budget_truncates_the_search() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
            row("OF3", "QN", "Cozumel", "Miami", "2025-01-18", "2025-01-25"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run_with_budget(&table, ChainOptions::new(), 1);
        // One expansion: the first root alone.
        assert_eq!(result.legs(), &[lid(0)]);
        assert_eq!(result.stats().nodes_expanded(), 1);
    }

    #[test]
    fn test_disallowed_legs_never_appear() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
        ];
        let table = LegTableBuilder::new(&rows)
            .with_visibility(|r| r.offer.code != "OF1")
            .build();
        let result = run(&table, ChainOptions::new());
        assert_eq!(result.legs(), &[lid(1)]);
    }

    #[test]
    fn test_empty_roster_yields_empty_chain() {
        let rows: Vec<SailingRow> = Vec::new();
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert!(result.is_empty());
        assert!(result.path().is_empty());
    }
}
