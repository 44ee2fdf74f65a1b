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

mod common;

use num_traits::{Bounded, PrimInt};
use order::{compare, compare_ref};


#[test]
fn uint64_equal() {
    let (l, r): (u64, u64) = (1, 1);
    assert_eq!(compare(l, r), 0);
}

#[test]
fn uint64_less() {
    let (l, r): (u64, u64) = (0, 1);
    assert_eq!(compare(l, r), -1);
}

#[test]
fn uint64_greater() {
    let (l, r): (u64, u64) = (1, 0);
    assert_eq!(compare(l, r), 1);
}

#[test]
fn byte_equal() {
    let (l, r): (u8, u8) = (1, 1);
    assert_eq!(compare(l, r), 0);
}

#[derive(Debug, Clone, PartialEq, PartialOrd)]
struct AString(String);

#[test]
fn custom_string_type() {
    let a = |s: &str| AString(s.to_string());
    assert_eq!(compare(a("a"), a("a")), 0);
    assert_eq!(compare(a("a"), a("b")), -1);
    assert_eq!(compare(a("b"), a("a")), 1);
}

#[test]
fn ref_string() {
    let (a, b) = (String::from("a"), String::from("b"));
    assert_eq!(compare_ref(&a, &b), -1);
    assert_eq!(compare_ref(&b, &a), 1);
    assert_eq!(compare_ref(&a, &String::from("a")), 0);
}

#[test]
fn ref_unsized() {
    assert_eq!(compare_ref("abc", "abd"), -1);
    assert_eq!(compare_ref(&[1u8, 2][..], &[1u8][..]), 1);
}

#[test]
fn floats() {
    assert_eq!(compare(0.5f32, 1.5f32), -1);
    assert_eq!(compare(-0.0f64, 0.0f64), 0);
    assert_eq!(compare(f64::INFINITY, f64::MAX), 1);
}

#[test]
fn nan_ties_with_everything() {
    for x in [f64::NAN, 0.0, -1.0, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(compare(f64::NAN, x), 0);
        assert_eq!(compare(x, f64::NAN), 0);
        assert_eq!(compare_ref(&f64::NAN, &x), 0);
    }
}

fn check_antisymmetric<T: PrimInt + Bounded>() {
    let probes = [
        T::min_value(),
        T::min_value() + T::one(),
        T::zero(),
        T::one(),
        T::max_value() - T::one(),
        T::max_value(),
    ];
    for &x in &probes {
        assert_eq!(compare(x, x), 0);
        assert_eq!(compare_ref(&x, &x), 0);
        for &y in &probes {
            assert_eq!(compare(x, y), -compare(y, x));
            assert_eq!(compare(x, y), compare_ref(&x, &y));
        }
    }
}

#[test]
fn antisymmetric_all_widths() {
    check_antisymmetric::<i8>();
    check_antisymmetric::<i16>();
    check_antisymmetric::<i32>();
    check_antisymmetric::<i64>();
    check_antisymmetric::<isize>();
    check_antisymmetric::<u8>();
    check_antisymmetric::<u16>();
    check_antisymmetric::<u32>();
    check_antisymmetric::<u64>();
    check_antisymmetric::<usize>();
}

#[test]
fn antisymmetric_random() {
    let r = common::Random::new(7);
    for i in 0..1000 {
        let (x, y) = (r.ith_rand(2 * i) as i64 % 50, r.ith_rand(2 * i + 1) as i64 % 50);
        assert_eq!(compare(x, y), -compare(y, x));
        assert!([-1, 0, 1].contains(&compare(x, y)));
    }
}
