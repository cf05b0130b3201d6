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

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRecord {
    pub code: String,
}

impl OfferRecord {
    #[inline]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

// Upstream feeds are heterogeneous; every sailing field is optional and
// unknown fields are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SailingRecord {
    pub ship_code: Option<String>,
    pub ship_name: Option<String>,
    pub embark_port: Option<String>,
    pub debark_port: Option<String>,
    pub sail_date: Option<String>,
    pub return_date: Option<String>,
    pub nights: Option<i64>,
    pub duration_nights: Option<i64>,
    pub itinerary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SailingRow {
    pub offer: OfferRecord,
    pub sailing: SailingRecord,
}

impl SailingRow {
    #[inline]
    pub fn new(offer: OfferRecord, sailing: SailingRecord) -> Self {
        Self { offer, sailing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_deserializes_camel_case() {
        let json = r#"{
            "offer": { "code": "B2B-47" },
            "sailing": {
                "shipCode": "QN",
                "embarkPort": "Miami",
                "sailDate": "2025-01-04",
                "durationNights": 7,
                "itinerary": "7 Night Western Caribbean"
            }
        }"#;
        let row: SailingRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.offer.code, "B2B-47");
        assert_eq!(row.sailing.ship_code.as_deref(), Some("QN"));
        assert_eq!(row.sailing.embark_port.as_deref(), Some("Miami"));
        assert_eq!(row.sailing.duration_nights, Some(7));
        assert_eq!(row.sailing.ship_name, None);
    }

    #[test]
    fn test_row_tolerates_unknown_fields() {
        let json = r#"{
            "offer": { "code": "X", "description": "ignored" },
            "sailing": { "sailDate": "2025-02-01", "cabinCategory": "balcony" }
        }"#;
        let row: SailingRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.offer.code, "X");
        assert_eq!(row.sailing.sail_date.as_deref(), Some("2025-02-01"));
    }

    #[test]
    fn test_sailing_record_default_is_all_unknown() {
        let s = SailingRecord::default();
        assert_eq!(s, SailingRecord { ..Default::default() });
        assert!(s.sail_date.is_none());
        assert!(s.nights.is_none());
    }
}
