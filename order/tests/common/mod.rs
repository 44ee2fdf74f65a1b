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

#![allow(dead_code)]

use order::{compare, compare_ref, Orderer};

/// Installs a test logger once; later calls are no-ops.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// calculates a hash of u based on numerical recipes.
#[inline(always)]
pub fn hash64(u: u64) -> u64 {
    let mut v = u.wrapping_mul(3_935_559_000_370_003_845);
    v = v.wrapping_add(2_691_343_689_449_507_681);
    v ^= v >> 21;
    v ^= v << 37;
    v ^= v >> 4;
    v = v.wrapping_mul(4_768_777_513_237_032_717);
    v ^= v << 20;
    v ^= v >> 41;
    v ^= v << 5;
    v
}

/// A deterministic random number generator for building scrambled inputs.
pub struct Random {
    state: u64,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn fork(&self, i: u64) -> Self {
        Self::new(hash64(hash64(i.wrapping_add(self.state))))
    }

    pub fn ith_rand(&self, i: u64) -> u64 {
        hash64(i.wrapping_add(self.state))
    }
}

/// The record used throughout the tests: a string, an int and a float key.
#[derive(Debug, Clone, PartialEq)]
pub struct StInFl {
    pub st: String,
    pub int: i64,
    pub fl: f64,
}

pub fn rec(st: &str, int: i64, fl: f64) -> StInFl {
    StInFl { st: st.to_string(), int, fl }
}

pub fn recs(v: &[(&str, i64, f64)]) -> Vec<StInFl> {
    v.iter().map(|&(s, i, f)| rec(s, i, f)).collect()
}

pub fn by_st(l: &StInFl, r: &StInFl) -> i32 { compare_ref(&l.st, &r.st) }
pub fn by_int(l: &StInFl, r: &StInFl) -> i32 { compare(l.int, r.int) }
pub fn by_fl(l: &StInFl, r: &StInFl) -> i32 { compare(l.fl, r.fl) }

/// Orders by (fl, st, int).
pub fn fl_st_int() -> Orderer<StInFl> {
    Orderer::new(by_fl).then(by_st).then(by_int)
}

/// `n` records with small key ranges, so that every criterion sees ties.
pub fn random_recs(n: usize, seed: u64) -> Vec<StInFl> {
    let r = Random::new(seed);
    (0..n as u64)
        .map(|i| {
            let (a, b, c) = (r.fork(0).ith_rand(i), r.fork(1).ith_rand(i), r.fork(2).ith_rand(i));
            let st = ((b'a' + (a % 5) as u8) as char).to_string();
            rec(&st, (b % 4) as i64, (c % 3) as f64)
        })
        .collect()
}

/// Sorts a copy by every field so two permutations of the same records
/// compare equal.
pub fn canonical(v: &[StInFl]) -> Vec<StInFl> {
    let mut c = v.to_vec();
    c.sort_by(|l, r| {
        l.st.cmp(&r.st)
            .then(l.int.cmp(&r.int))
            .then(l.fl.total_cmp(&r.fl))
    });
    c
}
