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

/// Builds an [`Orderer`](crate::Orderer) from one or more criteria, the first
/// being the primary key and each following one breaking ties of the ones
/// before it.
///
/// ```
/// use order::{by, compare_ref};
///
/// let mut v = vec![(2, "b"), (1, "b"), (2, "a")];
/// by!(
///     |l: &(i32, &str), r: &(i32, &str)| compare_ref(l.1, r.1),
///     |l: &(i32, &str), r: &(i32, &str)| compare_ref(&l.0, &r.0)
/// ).sort(&mut v);
/// assert_eq!(v, [(2, "a"), (1, "b"), (2, "b")]);
/// ```
///
/// An empty invocation does not match, so an orderer without criteria can
/// not be built this way.
#[macro_export]
macro_rules! by {
    ($primary: expr $(, $tie_break: expr)* $(,)?) => {
        $crate::Orderer::new($primary)$(.then($tie_break))*
    };
}
