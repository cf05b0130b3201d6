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

/// Commercial offer code a leg is booked under. Trimmed, case preserved;
/// the unit of reuse-exclusion within one chain.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OfferCode(String);

impl OfferCode {
    #[inline]
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for OfferCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OfferCode {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Ship identity used for same-ship adjacency: the ship code when present,
/// else the ship name, lower-cased. Both missing yields the empty identity.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipIdentity(String);

impl ShipIdentity {
    #[inline]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    pub fn from_parts(code: Option<&str>, name: Option<&str>) -> Self {
        let picked = code
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| name.map(str::trim).filter(|s| !s.is_empty()))
            .unwrap_or("");
        Self::new(picked)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ShipIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Port name normalized for adjacency matching: trimmed and lower-cased.
/// Empty names are not representable; `normalized` yields `None` for them.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Port(String);

impl Port {
    #[inline]
    pub fn normalized(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_code_trims_and_preserves_case() {
        let c = OfferCode::new("  B2B-47  ");
        assert_eq!(c.as_str(), "B2B-47");
        assert_eq!(OfferCode::new("B2B-47"), c);
        // Case is significant for offers.
        assert_ne!(OfferCode::new("b2b-47"), c);
    }

    #[test]
    fn test_offer_code_display_and_into_inner() {
        let c = OfferCode::from("WAVE-12");
        assert_eq!(format!("{}", c), "WAVE-12");
        assert_eq!(c.into_inner(), "WAVE-12");
    }

    #[test]
    fn test_ship_identity_prefers_code_over_name() {
        let s = ShipIdentity::from_parts(Some("QN"), Some("Queen of the North"));
        assert_eq!(s.as_str(), "qn");
    }

    #[test]
    fn test_ship_identity_falls_back_to_name() {
        let s = ShipIdentity::from_parts(None, Some(" Sea Lark "));
        assert_eq!(s.as_str(), "sea lark");
        // Blank code is treated as absent.
        let s = ShipIdentity::from_parts(Some("   "), Some("Sea Lark"));
        assert_eq!(s.as_str(), "sea lark");
    }

    #[test]
    fn test_ship_identity_unknown_when_both_missing() {
        let s = ShipIdentity::from_parts(None, None);
        assert!(s.is_unknown());
        // Two unknown identities compare equal.
        assert_eq!(s, ShipIdentity::from_parts(Some(""), None));
    }

    #[test]
    fn test_ship_identity_lowercases() {
        assert_eq!(ShipIdentity::new("RT").as_str(), "rt");
    }

    #[test]
    fn test_port_normalizes_case_and_whitespace() {
        let a = Port::normalized("  Miami ").unwrap();
        let b = Port::normalized("MIAMI").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "miami");
    }

    #[test]
    fn test_port_empty_is_none() {
        assert!(Port::normalized("").is_none());
        assert!(Port::normalized("   ").is_none());
    }
}
