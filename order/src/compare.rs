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

/// Three-way comparison of two values.
///
/// Returns `-1` if `left < right`, `1` if `left > right` and `0` otherwise.
/// Works for any type with a native ordering: integers, floats, strings and
/// newtypes deriving `PartialOrd`. Unordered pairs (e.g. anything against a
/// NaN) fall into the `0` case.
///
/// ```
/// use order::compare;
/// assert_eq!(compare(0, 1), -1);
/// assert_eq!(compare("b", "a"), 1);
/// assert_eq!(compare(f64::NAN, 1.0), 0);
/// ```
#[inline(always)]
pub fn compare<T: PartialOrd>(left: T, right: T) -> i32 {
    if left < right { -1 }
    else if left > right { 1 }
    else { 0 }
}

/// Same as [`compare`] but looks through references, so nothing is copied
/// or moved. Also accepts unsized values such as `str` and slices.
#[inline(always)]
pub fn compare_ref<T: PartialOrd + ?Sized>(left: &T, right: &T) -> i32 {
    if *left < *right { -1 }
    else if *left > *right { 1 }
    else { 0 }
}
