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
    result::{ChainDepth, DepthResult},
    search::used::UsedOffers,
    stats::SearchStats,
};
use fixedbitset::FixedBitSet;
use fxhash::FxHashMap;
use sailchain_model::prelude::LegId;
use std::{collections::BTreeMap, time::Instant};

// The used set is part of the key: the best continuation below a leg depends
// on which offers the path above it already consumed, so a depth cached for
// one path must not leak into another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemoKey {
    leg: LegId,
    used: FixedBitSet,
}

/// Depth-first search computing the chain depth of every allowed leg. Each
/// root starts from a fresh used set (pre-seeded with the configured
/// exclusions), so depths of different roots never interfere.
#[derive(Debug)]
pub struct DepthSearch<'m, 't> {
    model: &'m ChainModel<'t>,
    index: &'m AdjacencyIndex,
    options: &'m ChainOptions,
    memo: FxHashMap<MemoKey, ChainDepth>,
    stats: SearchStats,
}

impl<'m, 't> DepthSearch<'m, 't> {
    pub fn new(
        model: &'m ChainModel<'t>,
        index: &'m AdjacencyIndex,
        options: &'m ChainOptions,
    ) -> Self {
        Self {
            model,
            index,
            options,
            memo: FxHashMap::default(),
            stats: SearchStats::new(),
        }
    }

    #[tracing::instrument(level = "debug", name = "Depth Search", skip(self))]
    pub fn run(mut self) -> DepthResult {
        let started = Instant::now();
        let seed = self.seed_exclusions();
        let roots: Vec<LegId> = self.model.iter_allowed_leg_ids().collect();

        let mut depths = BTreeMap::new();
        for root in roots {
            self.stats.record_root();
            let mut used = seed.clone();
            let depth = self.depth_from(root, &mut used);
            depths.insert(root, depth);
        }

        self.stats.set_elapsed(started.elapsed());
        tracing::debug!("Depth: {}", self.stats);
        DepthResult::new(depths, self.stats)
    }

    /// Used set every root starts from. Offer codes that never occur in the
    /// roster are skipped.
    fn seed_exclusions(&self) -> UsedOffers {
        let mut used = UsedOffers::with_universe(self.model.offers_len());
        for code in self.options.initial_used_offers() {
            if let Some(offer) = self.model.symbols().offer_index(code) {
                used.insert(offer);
            }
        }
        used
    }

    fn depth_from(&mut self, leg: LegId, used: &mut UsedOffers) -> ChainDepth {
        let offer = self.model.offer(leg);
        // Already-used happens only for seeded roots; then the offer must
        // stay in the set after this frame unwinds.
        let inserted = used.insert(offer);

        let key = MemoKey {
            leg,
            used: used.bits().clone(),
        };
        if let Some(&depth) = self.memo.get(&key) {
            self.stats.record_memo_hit();
            if inserted {
                used.remove(offer);
            }
            return depth;
        }

        self.stats.record_expansion();
        let (model, index) = (self.model, self.index);
        let mut best = 0;
        for probe in successor_keys(model, self.options, leg) {
            for &next in index.candidates(&probe) {
                if used.contains(model.offer(next)) {
                    continue;
                }
                best = best.max(self.depth_from(next, used).get());
            }
        }

        let depth = ChainDepth::new(1 + best);
        self.memo.insert(key, depth);
        if inserted {
            used.remove(offer);
        }
        depth
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

    #[inline]
    fn depth(n: u32) -> ChainDepth {
        ChainDepth::new(n)
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

    fn run(table: &LegTable, options: ChainOptions) -> DepthResult {
        let model = ChainModel::new(table);
        let index = AdjacencyIndex::build(&model, options.allow_side_by_side());
        DepthSearch::new(&model, &index, &options).run()
    }

    #[test]
    fn test_consecutive_same_ship_legs_chain() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert_eq!(result.depth_of(lid(0)), Some(depth(2)));
        assert_eq!(result.depth_of(lid(1)), Some(depth(1)));
    }

    #[test]
    fn test_next_day_gap_connects_only_with_grace() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-01", "2025-01-04"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-05", "2025-01-12"),
        ];
        let table = LegTableBuilder::new(&rows).build();

        let strict = run(&table, ChainOptions::new());
        assert_eq!(strict.depth_of(lid(0)), Some(depth(1)));
        assert_eq!(strict.depth_of(lid(1)), Some(depth(1)));

        let graced = run(&table, ChainOptions::new().with_next_day_grace(true));
        assert_eq!(graced.depth_of(lid(0)), Some(depth(2)));
        assert_eq!(graced.depth_of(lid(1)), Some(depth(1)));
    }

    #[test]
    fn test_different_ships_need_side_by_side() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "STAR", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
        ];
        let table = LegTableBuilder::new(&rows).build();

        let strict = run(&table, ChainOptions::new());
        assert_eq!(strict.depth_of(lid(0)), Some(depth(1)));
        assert_eq!(strict.depth_of(lid(1)), Some(depth(1)));

        let relaxed = run(&table, ChainOptions::new().with_side_by_side(true));
        assert_eq!(relaxed.depth_of(lid(0)), Some(depth(2)));
        assert_eq!(relaxed.depth_of(lid(1)), Some(depth(1)));
    }

    #[test]
    fn test_port_mismatch_breaks_the_chain() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Cozumel", "Miami", "2025-01-11", "2025-01-18"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new().with_side_by_side(true));
        assert_eq!(result.depth_of(lid(0)), Some(depth(1)));
        assert_eq!(result.depth_of(lid(1)), Some(depth(1)));
    }

    #[test]
    fn test_three_leg_chain_counts_down() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
            row("OF3", "QN", "Cozumel", "Miami", "2025-01-18", "2025-01-25"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert_eq!(result.depth_of(lid(0)), Some(depth(3)));
        assert_eq!(result.depth_of(lid(1)), Some(depth(2)));
        assert_eq!(result.depth_of(lid(2)), Some(depth(1)));
    }

    #[test]
    fn test_duplicate_offer_cannot_chain_with_itself() {
        let rows = vec![
            row("SAME", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("SAME", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert_eq!(result.depth_of(lid(0)), Some(depth(1)));
        assert_eq!(result.depth_of(lid(1)), Some(depth(1)));
    }

    #[test]
    fn test_depth_is_path_sensitive() {
        // Leg 2 reuses the offer of leg 0. Under root 0 the continuation
        // 1 -> 2 is blocked, under root 1 it is not; a cache ignoring the
        // used set would report 1 for root 1.
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
            row("OF1", "QN", "Cozumel", "Miami", "2025-01-18", "2025-01-25"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert_eq!(result.depth_of(lid(0)), Some(depth(2)));
        assert_eq!(result.depth_of(lid(1)), Some(depth(2)));
        assert_eq!(result.depth_of(lid(2)), Some(depth(1)));
    }

    #[test]
    fn test_converging_paths_hit_the_memo() {
        // Two branch orders consume the same offers before reaching leg 5,
        // so the second arrival is answered from the cache.
        let rows = vec![
            row("OFA", "QN", "Miami", "Miami", "2024-12-31", "2025-01-01"),
            row("OFB", "QN", "Miami", "Miami", "2025-01-01", "2025-01-02"),
            row("OFC", "QN", "Miami", "Miami", "2025-01-01", "2025-01-03"),
            row("OFC", "QN", "Miami", "Miami", "2025-01-02", "2025-01-04"),
            row("OFB", "QN", "Miami", "Miami", "2025-01-03", "2025-01-04"),
            row("OFT", "QN", "Miami", "Miami", "2025-01-04", "2025-01-05"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert_eq!(result.depth_of(lid(0)), Some(depth(4)));
        assert!(result.stats().memo_hits() >= 1);
    }

    #[test]
    fn test_seeded_offers_are_excluded() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let options =
            ChainOptions::new().with_initial_used_offers([OfferCode::new("OF2")]);
        let result = run(&table, options);
        // The successor's offer is spent before the search starts.
        assert_eq!(result.depth_of(lid(0)), Some(depth(1)));
        assert_eq!(result.depth_of(lid(1)), Some(depth(1)));
    }

    #[test]
    fn test_unknown_seed_codes_are_ignored() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
        ];
        let table = LegTableBuilder::new(&rows).build();
        let options =
            ChainOptions::new().with_initial_used_offers([OfferCode::new("NOPE")]);
        let result = run(&table, options);
        assert_eq!(result.depth_of(lid(0)), Some(depth(2)));
    }

    #[test]
    fn test_hiding_the_connector_collapses_its_neighbors() {
        let rows = vec![
            row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11"),
            row("OF2", "QN", "Nassau", "Cozumel", "2025-01-11", "2025-01-18"),
            row("OF3", "QN", "Cozumel", "Miami", "2025-01-18", "2025-01-25"),
        ];
        let table = LegTableBuilder::new(&rows)
            .with_visibility(|r| r.offer.code != "OF2")
            .build();
        let result = run(&table, ChainOptions::new());
        // No depth bridges the removed middle leg.
        assert_eq!(result.depth_of(lid(0)), Some(depth(1)));
        assert_eq!(result.depth_of(lid(1)), None);
        assert_eq!(result.depth_of(lid(2)), Some(depth(1)));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_unparseable_root_still_gets_a_depth() {
        let mut broken = row("OF1", "QN", "Miami", "Nassau", "2025-01-04", "2025-01-11");
        broken.sailing.sail_date = Some("tbd".into());
        broken.sailing.return_date = Some("tbd".into());
        let rows = vec![broken];
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert_eq!(result.depth_of(lid(0)), Some(depth(1)));
    }

    #[test]
    fn test_empty_roster() {
        let rows: Vec<SailingRow> = Vec::new();
        let table = LegTableBuilder::new(&rows).build();
        let result = run(&table, ChainOptions::new());
        assert!(result.is_empty());
        assert_eq!(result.stats().roots_evaluated(), 0);
    }
}
