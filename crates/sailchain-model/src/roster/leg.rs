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
    normalize::VoyageBounds,
    roster::{
        identity::{OfferCode, Port, ShipIdentity},
        row::SailingRow,
    },
};
use chrono::NaiveDate;

/// Position of a leg in the input row collection; stable identity for one
/// computation call.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LegId(usize);

impl LegId {
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for LegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LegId({})", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    id: LegId,
    offer: OfferCode,
    ship: ShipIdentity,
    bounds: VoyageBounds,
    allowed: bool,
}

impl Leg {
    pub fn new(
        id: LegId,
        offer: OfferCode,
        ship: ShipIdentity,
        bounds: VoyageBounds,
        allowed: bool,
    ) -> Self {
        Self {
            id,
            offer,
            ship,
            bounds,
            allowed,
        }
    }

    pub fn from_row(id: LegId, row: &SailingRow, allowed: bool) -> Self {
        Self::new(
            id,
            OfferCode::new(&row.offer.code),
            ShipIdentity::from_parts(
                row.sailing.ship_code.as_deref(),
                row.sailing.ship_name.as_deref(),
            ),
            VoyageBounds::from_record(&row.sailing),
            allowed,
        )
    }

    #[inline]
    pub fn id(&self) -> LegId {
        self.id
    }

    #[inline]
    pub fn offer(&self) -> &OfferCode {
        &self.offer
    }

    #[inline]
    pub fn ship(&self) -> &ShipIdentity {
        &self.ship
    }

    #[inline]
    pub fn bounds(&self) -> &VoyageBounds {
        &self.bounds
    }

    #[inline]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.bounds.start_date()
    }

    #[inline]
    pub fn start_port(&self) -> Option<&Port> {
        self.bounds.start_port()
    }

    #[inline]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.bounds.end_date()
    }

    #[inline]
    pub fn end_port(&self) -> Option<&Port> {
        self.bounds.end_port()
    }

    #[inline]
    pub fn allowed(&self) -> bool {
        self.allowed
    }

    /// A leg can lead into a successor only when its end is fully known.
    #[inline]
    pub fn can_lead(&self) -> bool {
        self.bounds.has_known_end()
    }

    /// A leg can be reached as a successor only when its start is fully known.
    #[inline]
    pub fn can_follow(&self) -> bool {
        self.bounds.has_known_start()
    }
}
