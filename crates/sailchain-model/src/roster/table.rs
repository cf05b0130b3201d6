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

use crate::roster::leg::{Leg, LegId};

/// Immutable, index-ordered collection of legs for one computation call.
/// Invariant: a leg's id always equals its position.
#[repr(transparent)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegTable(Vec<Leg>);

impl LegTable {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self(Vec::with_capacity(cap))
    }

    #[inline]
    pub(crate) fn push(&mut self, leg: Leg) {
        debug_assert_eq!(leg.id().get(), self.0.len());
        self.0.push(leg);
    }

    #[inline]
    pub fn get(&self, id: LegId) -> Option<&Leg> {
        self.0.get(id.get())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn legs(&self) -> &[Leg] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Leg> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_allowed(&self) -> impl Iterator<Item = &Leg> {
        self.0.iter().filter(|l| l.allowed())
    }

    #[inline]
    pub fn allowed_len(&self) -> usize {
        self.iter_allowed().count()
    }
}

impl FromIterator<Leg> for LegTable {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Leg>>(iter: I) -> Self {
        let mut table = Self::new();
        for leg in iter {
            table.push(leg);
        }
        table
    }
}
