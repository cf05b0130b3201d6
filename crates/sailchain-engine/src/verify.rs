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
    err::{
        BrokenLinkError, ChainValidationError, DisallowedLegError, DuplicateOfferError,
        UnknownLegError,
    },
    options::ChainOptions,
};
use sailchain_model::prelude::{Leg, LegId, LegTable};
use std::collections::BTreeSet;

/// Re-checks a finished chain directly against the roster, without going
/// through the adjacency machinery that produced it.
#[derive(Debug, Clone)]
pub struct ChainValidator;

impl ChainValidator {
    #[inline]
    pub fn validate_known(table: &LegTable, legs: &[LegId]) -> Result<(), UnknownLegError> {
        for &leg in legs {
            if table.get(leg).is_none() {
                return Err(UnknownLegError::new(leg));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_allowed(table: &LegTable, legs: &[LegId]) -> Result<(), DisallowedLegError> {
        for &leg in legs {
            if let Some(l) = table.get(leg)
                && !l.allowed()
            {
                return Err(DisallowedLegError::new(leg));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_no_duplicate_offers(
        table: &LegTable,
        legs: &[LegId],
    ) -> Result<(), DuplicateOfferError> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for &leg in legs {
            if let Some(l) = table.get(leg)
                && !seen.insert(l.offer().as_str())
            {
                return Err(DuplicateOfferError::new(leg, l.offer().clone()));
            }
        }
        Ok(())
    }

    /// Checks every consecutive pair. A pair that cannot be resolved against
    /// the roster counts as broken.
    #[inline]
    pub fn validate_linkage(
        table: &LegTable,
        options: &ChainOptions,
        legs: &[LegId],
    ) -> Result<(), BrokenLinkError> {
        for pair in legs.windows(2) {
            let (Some(pred), Some(succ)) = (table.get(pair[0]), table.get(pair[1])) else {
                return Err(BrokenLinkError::new(pair[0], pair[1]));
            };
            if !links(pred, succ, options) {
                return Err(BrokenLinkError::new(pair[0], pair[1]));
            }
        }
        Ok(())
    }

    pub fn validate_chain(
        table: &LegTable,
        options: &ChainOptions,
        legs: &[LegId],
    ) -> Result<(), ChainValidationError> {
        Self::validate_known(table, legs)?;
        Self::validate_allowed(table, legs)?;
        Self::validate_no_duplicate_offers(table, legs)?;
        Self::validate_linkage(table, options, legs)?;
        Ok(())
    }
}

fn links(pred: &Leg, succ: &Leg, options: &ChainOptions) -> bool {
    let (Some(end_date), Some(end_port)) = (pred.end_date(), pred.end_port()) else {
        return false;
    };
    let (Some(start_date), Some(start_port)) = (succ.start_date(), succ.start_port()) else {
        return false;
    };
    let date_ok = start_date == end_date
        || (options.next_day_grace() && end_date.succ_opt() == Some(start_date));
    let port_ok = start_port == end_port;
    let ship_ok = options.allow_side_by_side() || pred.ship() == succ.ship();
    date_ok && port_ok && ship_ok
}
