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

use crate::internal::quick_sort::insertion_sort;

const MERGE_SORT_BASE: usize = 48;


/// Merges the sorted runs `in1` and `in2` into `out`. Ties are taken from
/// `in1` first, which is what makes the merge sort stable.
pub(crate) fn seq_merge<F>(in1: &[usize], in2: &[usize], out: &mut [usize], less: &F)
where
    F: Fn(usize, usize) -> bool,
{
    let (n1, n2) = (in1.len(), in2.len());
    debug_assert_eq!(n1 + n2, out.len());
    let (mut i, mut j) = (0, 0);

    loop {
        if i == n1 { // if in1 has no more elements
            out[i+j..].copy_from_slice(&in2[j..]);
            break;
        }
        if j == n2 { // if in2 has no more elements
            out[i+j..].copy_from_slice(&in1[i..]);
            break;
        }

        let oi = &mut out[i+j];
        if less(in2[j], in1[i]) {
            *oi = in2[j];
            j += 1;
        } else {
            *oi = in1[i];
            i += 1;
        }
    }
}

/// Sorts `inp` and leaves the result in `inp` if `inplace` is set and in
/// `out` otherwise. The two halves ping-pong between the buffers.
fn merge_sort_<F>(inp: &mut [usize], out: &mut [usize], less: &F, inplace: bool)
where
    F: Fn(usize, usize) -> bool,
{
    let n = inp.len();
    if n < MERGE_SORT_BASE {
        insertion_sort(inp, |a: &usize, b: &usize| less(*a, *b));
        if !inplace { out.copy_from_slice(inp); }
    } else {
        let m = n / 2;
        {
            let (l_inp, r_inp) = inp.split_at_mut(m);
            let (l_out, r_out) = out.split_at_mut(m);
            merge_sort_(l_inp, l_out, less, !inplace);
            merge_sort_(r_inp, r_out, less, !inplace);
        }

        if inplace {
            seq_merge(&out[0..m], &out[m..n], inp, less);
        } else {
            seq_merge(&inp[0..m], &inp[m..n], out, less);
        }
    }
}

/// Stable merge sort over a slice of positions.
pub(crate) fn merge_sort_inplace<F>(inp: &mut [usize], less: F)
where
    F: Fn(usize, usize) -> bool,
{
    let n = inp.len();
    if n < MERGE_SORT_BASE {
        insertion_sort(inp, |a: &usize, b: &usize| less(*a, *b));
    } else {
        let mut out = vec![0; n];
        merge_sort_(inp, &mut out, &less, true);
    }
}

/// Rearranges `target` so that `target[k]` ends up holding the element that
/// was at `perm[k]`. Walks each cycle of the permutation with swaps, and
/// marks visited positions by turning them into fixed points.
pub(crate) fn apply_permutation<T>(target: &mut [T], perm: &mut [usize]) {
    debug_assert_eq!(target.len(), perm.len());
    for start in 0..perm.len() {
        let mut j = start;
        loop {
            let next = perm[j];
            perm[j] = j;
            if next == start || next == j { break; }
            target.swap(j, next);
            j = next;
        }
    }
}

/// Stable sort of `target` by `less`: the positions are merge sorted and
/// the resulting permutation is then applied in place.
pub fn stable_sort<T, F>(target: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    let mut perm: Vec<usize> = (0..target.len()).collect();
    {
        let items = &*target;
        merge_sort_inplace(&mut perm, |i, j| less(&items[i], &items[j]));
    }
    apply_permutation(target, &mut perm);
}
