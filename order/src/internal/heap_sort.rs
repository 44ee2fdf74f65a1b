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

/// Restores the max-heap property below `node` within `inp`.
fn sift_down<T, F>(inp: &mut [T], mut node: usize, less: F)
where
    F: Fn(&T, &T) -> bool,
{
    let n = inp.len();
    loop {
        let mut child = 2 * node + 1;
        if child >= n { break; }
        if child + 1 < n && less(&inp[child], &inp[child + 1]) {
            child += 1;
        }
        if !less(&inp[node], &inp[child]) { break; }
        inp.swap(node, child);
        node = child;
    }
}

/// Serial in-place heap sort.
pub(crate) fn heap_sort<T, F>(inp: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool + Copy,
{
    let n = inp.len();
    for i in (0..n / 2).rev() {
        sift_down(inp, i, less);
    }
    for end in (1..n).rev() {
        inp.swap(0, end);
        sift_down(&mut inp[..end], 0, less);
    }
}
