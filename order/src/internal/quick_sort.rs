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

use std::mem::size_of;

use log::debug;

use crate::internal::heap_sort::heap_sort;


fn base_case<T>(inp: &[T]) -> bool {
    let n = inp.len();
    let large = size_of::<T>() > 8;
    if large { n < 16 } else { n < 24 }
}

/// Simple serial insertion sort. Stable: an element only moves past
/// elements that are strictly greater than it.
pub(crate) fn insertion_sort<T, F>(inp: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    for i in 1..inp.len() {
        let mut j = i;
        while j > 0 && less(&inp[j], &inp[j-1]) {
            inp.swap(j, j-1);
            j-=1;
        }
    }
}

/// sorts 5 elements taken at even stride and puts them at the front
fn sort5<T, F>(inp: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    let size = 5;
    let m = inp.len() / (size + 1);
    for l in 0..size { inp.swap(l, m * (l+1)); }
    insertion_sort(&mut inp[..size], less);
}

/// Dual-pivot partition. Picks two pivots from the input A
/// and then divides it into three parts:
///   [x < p1), [p1 <= x <= p2], (p2 < x]
///
/// The pivots stay parked at A[0] and A[1] while the rest is
/// partitioned, so they are compared in place instead of copied out.
fn split3<T, F>(inp: &mut [T], less: F) -> (usize, usize, bool)
where
    F: Fn(&T, &T) -> bool + Copy,
{
    let n = inp.len();
    debug_assert!(n >= 6);
    sort5(inp, less);

    // Use A[1] and A[3] as the pivots. Move them to
    // the front so that A[0] and A[1] are the pivots
    inp.swap(0, 1); inp.swap(1, 3);
    let pivots_equal = !less(&inp[0], &inp[1]);

    // set up initial invariants
    let mut li = 2;
    let mut ri = n - 1;
    while less(&inp[li], &inp[0]) { li+=1 };
    while less(&inp[1], &inp[ri]) { ri-=1 };
    let mut mi = li;

    // invariants:
    //  below li is less than p1,
    //  above ri is greater than p2
    //  between li and mi are between p1 and p2 inclusive
    //  between mi and ri are unprocessed
    while mi <= ri {
        if less(&inp[mi], &inp[0]) {
            inp.swap(mi, li);
            li+=1;
        } else if less(&inp[1], &inp[mi]) {
            inp.swap(mi, ri);
            if less(&inp[mi], &inp[0]) {
                inp.swap(li, mi);
                li+=1;
            }
            ri-=1;
            while less(&inp[1], &inp[ri]) { ri-=1; }
        }
        mi+=1;
    }

    // Swap the pivots into position
    li-=2;
    inp.swap(1, li+1); inp.swap(0, li); inp.swap(li+1, ri);
    (li, mi, pivots_equal)
}

fn intro_sort<T, F>(inp: &mut [T], less: F, mut depth: usize)
where
    F: Fn(&T, &T) -> bool + Copy,
{
    let mut n = inp.len();
    while !base_case(&inp[..n]) {
        if depth == 0 {
            debug!("quick sort depth exhausted on {} elements, heap sorting", n);
            heap_sort(&mut inp[..n], less);
            return;
        }
        depth -= 1;

        let (l, m, mid_eq) = split3(&mut inp[..n], less);
        if !mid_eq {
            intro_sort(&mut inp[l+1..m], less, depth);
        };
        intro_sort(&mut inp[m..n], less, depth);
        n = l;
    }

    insertion_sort(&mut inp[..n], less);
}

/// Serial quick sort. Falls back to heap sort once the recursion gets
/// deeper than `2 * log2(n)`, which bounds the worst case to O(n log n).
pub fn quick_sort<T, F>(inp: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool + Copy,
{
    let depth = 2 * log2_up(inp.len());
    intro_sort(inp, less, depth);
}

/// returns the smallest a such that 2^a >= n (0 for n <= 1).
pub(crate) fn log2_up(n: usize) -> usize {
    let mut a = 0;
    let mut b = n.saturating_sub(1);
    while b > 0 {
        b >>= 1;
        a += 1;
    }
    a
}
