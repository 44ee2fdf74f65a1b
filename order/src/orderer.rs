// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::fmt;

use log::trace;

use crate::errors::OrderError;
use crate::internal::merge_sort::stable_sort;
use crate::internal::quick_sort::quick_sort;

/// A single ordering criterion: a three-way comparison returning a
/// negative value, zero or a positive value (normally `-1`, `0`, `1`).
pub type Criterion<T> = Box<dyn Fn(&T, &T) -> i32 + Send + Sync>;

/// Sorts and checks slices against an ordered list of criteria.
///
/// The first criterion is the primary key; every following one is only
/// consulted when all criteria before it report a tie. The list always holds
/// at least one criterion and is fixed once the orderer is used. An orderer
/// never holds on to the slices it works on, so one instance can be reused
/// for any number of calls, and shared between threads working on
/// disjoint slices.
///
/// ```
/// use order::{compare, compare_ref, Orderer};
///
/// struct Rec { name: &'static str, rank: u32 }
///
/// let mut list = vec![
///     Rec { name: "b", rank: 1 },
///     Rec { name: "a", rank: 2 },
///     Rec { name: "a", rank: 1 },
/// ];
/// let orderer = Orderer::new(|l: &Rec, r: &Rec| compare_ref(l.name, r.name))
///     .then(|l, r| compare(l.rank, r.rank));
/// orderer.sort(&mut list);
/// assert!(orderer.is_sorted(&list));
/// assert_eq!(list[0].rank, 1);
/// assert_eq!(list[2].name, "b");
/// ```
pub struct Orderer<T> {
    primary: Criterion<T>,
    tie_breaks: Vec<Criterion<T>>,
}

impl<T> Orderer<T> {
    /// Creates an orderer with a single criterion.
    pub fn new<F>(primary: F) -> Self
    where
        F: Fn(&T, &T) -> i32 + Send + Sync + 'static,
    {
        Self {
            primary: Box::new(primary),
            tie_breaks: Vec::new(),
        }
    }

    /// Appends a criterion that breaks the ties left by all criteria
    /// added before it.
    pub fn then<F>(mut self, tie_break: F) -> Self
    where
        F: Fn(&T, &T) -> i32 + Send + Sync + 'static,
    {
        self.tie_breaks.push(Box::new(tie_break));
        self
    }

    /// Creates an orderer from a list of boxed criteria, in precedence
    /// order. Fails with [`OrderError::NoCriteria`] if the list is empty.
    pub fn try_from_criteria(criteria: Vec<Criterion<T>>) -> Result<Self, OrderError> {
        let mut criteria = criteria.into_iter();
        let primary = criteria.next().ok_or(OrderError::NoCriteria)?;
        Ok(Self {
            primary,
            tie_breaks: criteria.collect(),
        })
    }

    /// The number of criteria, always at least one.
    pub fn criteria_len(&self) -> usize {
        1 + self.tie_breaks.len()
    }

    /// Cascade comparison of `left` and `right`: the result of the first
    /// criterion that does not report a tie, or the result of the last
    /// criterion if all earlier ones tie.
    #[inline]
    pub fn cascade(&self, left: &T, right: &T) -> i32 {
        let mut result = (self.primary)(left, right);
        for tie_break in &self.tie_breaks {
            if result != 0 { break; }
            result = tie_break(left, right);
        }
        result
    }

    /// true if `left` goes strictly before `right`.
    #[inline]
    pub fn less(&self, left: &T, right: &T) -> bool {
        self.cascade(left, right) < 0
    }

    /// Sorts `target` in place. Elements the criteria consider equal may
    /// end up in any order. Does not allocate.
    pub fn sort(&self, target: &mut [T]) {
        trace!("sort: {} elements by {} criteria", target.len(), self.criteria_len());
        quick_sort(target, |l, r| self.less(l, r));
    }

    /// Sorts `target` in place, keeping elements the criteria consider
    /// equal in their original relative order.
    pub fn stable(&self, target: &mut [T]) {
        trace!("stable: {} elements by {} criteria", target.len(), self.criteria_len());
        stable_sort(target, |l, r| self.less(l, r));
    }

    /// Checks whether `target` is already ordered by the criteria, i.e. no
    /// element goes strictly before its predecessor. Empty and single
    /// element slices are sorted.
    pub fn is_sorted(&self, target: &[T]) -> bool {
        trace!("is_sorted: {} elements by {} criteria", target.len(), self.criteria_len());
        target.windows(2).all(|w| !self.less(&w[1], &w[0]))
    }
}

impl<T> fmt::Debug for Orderer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Orderer")
            .field("criteria", &self.criteria_len())
            .finish()
    }
}
