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

use crate::roster::{identity::Port, row::SailingRecord};
use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit-run pattern"));

/// Start/end calendar bounds of one sailing, derived from its raw record.
/// Unparseable parts stay `None`; a leg with unknown end is a dead end, a
/// leg with unknown start cannot be an adjacency target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoyageBounds {
    start_date: Option<NaiveDate>,
    start_port: Option<Port>,
    end_date: Option<NaiveDate>,
    end_port: Option<Port>,
}

impl VoyageBounds {
    #[inline]
    pub fn new(
        start_date: Option<NaiveDate>,
        start_port: Option<Port>,
        end_date: Option<NaiveDate>,
        end_port: Option<Port>,
    ) -> Self {
        Self {
            start_date,
            start_port,
            end_date,
            end_port,
        }
    }

    /// Derives bounds from a raw sailing record. The end date comes from the
    /// explicit return date when it parses, else from a derived night count
    /// added to the start date, else it equals the start date. The end port
    /// is the arrival port when known, else the departure port.
    pub fn from_record(record: &SailingRecord) -> Self {
        let start_date = record.sail_date.as_deref().and_then(parse_calendar_date);
        let start_port = record.embark_port.as_deref().and_then(Port::normalized);
        let arrival = record.debark_port.as_deref().and_then(Port::normalized);

        let end_date = match record.return_date.as_deref().and_then(parse_calendar_date) {
            Some(explicit) => Some(explicit),
            None => match derive_nights(record) {
                // Calendar-day addition on a zone-free date, so a chain
                // crossing a DST switch cannot drift by an hour into the
                // wrong day.
                Some(nights) => {
                    start_date.and_then(|d| d.checked_add_days(Days::new(u64::from(nights))))
                }
                None => start_date,
            },
        };
        let end_port = arrival.or_else(|| start_port.clone());

        Self::new(start_date, start_port, end_date, end_port)
    }

    #[inline]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    #[inline]
    pub fn start_port(&self) -> Option<&Port> {
        self.start_port.as_ref()
    }

    #[inline]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    #[inline]
    pub fn end_port(&self) -> Option<&Port> {
        self.end_port.as_ref()
    }

    #[inline]
    pub fn has_known_start(&self) -> bool {
        self.start_date.is_some() && self.start_port.is_some()
    }

    #[inline]
    pub fn has_known_end(&self) -> bool {
        self.end_date.is_some() && self.end_port.is_some()
    }
}

/// Literal calendar date of a raw date string. An ISO `YYYY-MM-DD` prefix is
/// taken as-is so time/offset suffixes never shift the day; `MM/DD/YYYY` is
/// accepted as a fallback.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let t = raw.trim();
    if t.len() >= 10
        && t.as_bytes()[4] == b'-'
        && t.as_bytes()[7] == b'-'
        && let Some(prefix) = t.get(..10)
        && let Ok(d) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
    {
        return Some(d);
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(t, "%m/%d/%Y"))
        .ok()
}

/// Night count from free itinerary text: the leftmost integer run, accepted
/// only when plausible. Heuristic by design; swap this function out for a
/// different parser without touching the graph code.
pub fn parse_nights(text: &str) -> Option<u32> {
    let hit = FIRST_INTEGER.find(text)?;
    let n = hit.as_str().parse::<u32>().ok()?;
    if plausible_nights(i64::from(n)) { Some(n) } else { None }
}

// A cruise of 80+ nights in a single leg is assumed to be garbage data.
#[inline]
fn plausible_nights(n: i64) -> bool {
    n > 0 && n < 80
}

fn derive_nights(record: &SailingRecord) -> Option<u32> {
    for candidate in [record.nights, record.duration_nights] {
        if let Some(n) = candidate
            && plausible_nights(n)
        {
            return Some(n as u32);
        }
    }
    record.itinerary.as_deref().and_then(parse_nights)
}
