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
        chain_model::ChainModel,
        index::{PortIndex, ShipIndex},
    },
    options::ChainOptions,
};
use chrono::NaiveDate;
use fxhash::FxHashMap;
use sailchain_model::prelude::LegId;
use smallvec::SmallVec;

/// Ship constraint of an adjacency lookup: a concrete ship for same-ship
/// chaining, or any ship when side-by-side connections are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipScope {
    Exact(ShipIndex),
    Any,
}

/// Where and when a successor must start, and on which ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjacencyKey {
    date: NaiveDate,
    port: PortIndex,
    ship: ShipScope,
}

impl AdjacencyKey {
    #[inline]
    pub fn new(date: NaiveDate, port: PortIndex, ship: ShipScope) -> Self {
        Self { date, port, ship }
    }

    #[inline]
    pub fn exact(date: NaiveDate, port: PortIndex, ship: ShipIndex) -> Self {
        Self::new(date, port, ShipScope::Exact(ship))
    }

    #[inline]
    pub fn any_ship(date: NaiveDate, port: PortIndex) -> Self {
        Self::new(date, port, ShipScope::Any)
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn port(&self) -> PortIndex {
        self.port
    }

    #[inline]
    pub fn ship(&self) -> ShipScope {
        self.ship
    }
}

/// Multi-map from adjacency keys to the allowed legs starting there. Only
/// legs with a known start register; wildcard entries exist only when the
/// index was built with side-by-side enabled.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    buckets: FxHashMap<AdjacencyKey, Vec<LegId>>,
}

impl AdjacencyIndex {
    pub fn build(model: &ChainModel<'_>, register_any_ship: bool) -> Self {
        // Register in descending start-date order (ties by ascending id) so
        // bucket contents do not depend on hash-map iteration order.
        let mut order: Vec<LegId> = model
            .iter_allowed_leg_ids()
            .filter(|&l| model.start(l).is_some())
            .collect();
        order.sort_by_key(|&l| {
            let date = model
                .start(l)
                .map(|(d, _)| d)
                .unwrap_or(NaiveDate::MIN);
            (std::cmp::Reverse(date), l.get())
        });

        let mut buckets: FxHashMap<AdjacencyKey, Vec<LegId>> = FxHashMap::default();
        for leg in order {
            if let Some((date, port)) = model.start(leg) {
                buckets
                    .entry(AdjacencyKey::exact(date, port, model.ship(leg)))
                    .or_default()
                    .push(leg);
                if register_any_ship {
                    buckets
                        .entry(AdjacencyKey::any_ship(date, port))
                        .or_default()
                        .push(leg);
                }
            }
        }
        Self { buckets }
    }

    #[inline]
    pub fn candidates(&self, key: &AdjacencyKey) -> &[LegId] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Keys to probe for successors of `leg`. Empty when the leg's end is
/// unknown. With side-by-side enabled the wildcard bucket already contains
/// every same-ship candidate, so only the wildcard key is probed; the
/// next-day grace option adds the day-after variant of each key.
pub fn successor_keys(
    model: &ChainModel<'_>,
    options: &ChainOptions,
    leg: LegId,
) -> SmallVec<[AdjacencyKey; 2]> {
    let mut keys = SmallVec::new();
    let Some((date, port)) = model.end(leg) else {
        return keys;
    };
    let ship = if options.allow_side_by_side() {
        ShipScope::Any
    } else {
        ShipScope::Exact(model.ship(leg))
    };
    keys.push(AdjacencyKey::new(date, port, ship));
    if options.next_day_grace()
        && let Some(next) = date.succ_opt()
    {
        keys.push(AdjacencyKey::new(next, port, ship));
    }
    keys
}
