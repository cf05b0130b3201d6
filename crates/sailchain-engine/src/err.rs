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

use sailchain_model::prelude::{LegId, OfferCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownLegError {
    leg: LegId,
}

impl UnknownLegError {
    #[inline]
    pub fn new(leg: LegId) -> Self {
        Self { leg }
    }

    #[inline]
    pub fn leg(&self) -> LegId {
        self.leg
    }
}

impl std::fmt::Display for UnknownLegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Leg {} does not exist in the roster", self.leg)
    }
}

impl std::error::Error for UnknownLegError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisallowedLegError {
    leg: LegId,
}

impl DisallowedLegError {
    #[inline]
    pub fn new(leg: LegId) -> Self {
        Self { leg }
    }

    #[inline]
    pub fn leg(&self) -> LegId {
        self.leg
    }
}

impl std::fmt::Display for DisallowedLegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Leg {} is not allowed to participate in chains", self.leg)
    }
}

impl std::error::Error for DisallowedLegError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateOfferError {
    leg: LegId,
    offer: OfferCode,
}

impl DuplicateOfferError {
    #[inline]
    pub fn new(leg: LegId, offer: OfferCode) -> Self {
        Self { leg, offer }
    }

    #[inline]
    pub fn leg(&self) -> LegId {
        self.leg
    }

    #[inline]
    pub fn offer(&self) -> &OfferCode {
        &self.offer
    }
}

impl std::fmt::Display for DuplicateOfferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Leg {} reuses offer {} already consumed by the chain",
            self.leg, self.offer
        )
    }
}

impl std::error::Error for DuplicateOfferError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokenLinkError {
    from: LegId,
    to: LegId,
}

impl BrokenLinkError {
    #[inline]
    pub fn new(from: LegId, to: LegId) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn from_leg(&self) -> LegId {
        self.from
    }

    #[inline]
    pub fn to_leg(&self) -> LegId {
        self.to
    }
}

impl std::fmt::Display for BrokenLinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Leg {} does not connect to leg {} under the given options",
            self.from, self.to
        )
    }
}

impl std::error::Error for BrokenLinkError {}

/// Error type for chain validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainValidationError {
    UnknownLeg(UnknownLegError),
    DisallowedLeg(DisallowedLegError),
    DuplicateOffer(DuplicateOfferError),
    BrokenLink(BrokenLinkError),
}

impl std::fmt::Display for ChainValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainValidationError::UnknownLeg(e) => write!(f, "{}", e),
            ChainValidationError::DisallowedLeg(e) => write!(f, "{}", e),
            ChainValidationError::DuplicateOffer(e) => write!(f, "{}", e),
            ChainValidationError::BrokenLink(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChainValidationError {}

impl From<UnknownLegError> for ChainValidationError {
    fn from(e: UnknownLegError) -> Self {
        ChainValidationError::UnknownLeg(e)
    }
}

impl From<DisallowedLegError> for ChainValidationError {
    fn from(e: DisallowedLegError) -> Self {
        ChainValidationError::DisallowedLeg(e)
    }
}

impl From<DuplicateOfferError> for ChainValidationError {
    fn from(e: DuplicateOfferError) -> Self {
        ChainValidationError::DuplicateOffer(e)
    }
}

impl From<BrokenLinkError> for ChainValidationError {
    fn from(e: BrokenLinkError) -> Self {
        ChainValidationError::BrokenLink(e)
    }
}
