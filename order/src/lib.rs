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

//! In-place ordering of slices by a cascade of comparison criteria.
//!
//! [`compare`] and [`compare_ref`] turn any natively ordered value into a
//! three-way `-1`/`0`/`1` result. An [`Orderer`] chains such comparisons
//! into one ordering, where each criterion breaks the ties of the ones
//! before it, and uses it to sort ([`Orderer::sort`]), stable sort
//! ([`Orderer::stable`]) or check ([`Orderer::is_sorted`]) a slice.
//!
//! ```
//! use order::{by, compare_ref};
//!
//! let mut list = vec!["g", "f", "d", "e", "c", "b", "a"];
//! by!(|l: &&str, r: &&str| compare_ref(*l, *r)).sort(&mut list);
//! assert_eq!(list, ["a", "b", "c", "d", "e", "f", "g"]);
//! ```

mod macros;
mod compare;
mod errors;
mod orderer;
pub mod internal;

pub use compare::{compare, compare_ref};
pub use errors::OrderError;
pub use orderer::{Criterion, Orderer};
