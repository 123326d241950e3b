// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: compare.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Constant-time tag comparison.

use std::hint::black_box;
use subtle::ConstantTimeEq;

/// Returns `true` when `expected` and `actual` hold the same bytes.
///
/// Lengths are treated as public and compared first. Contents are folded
/// over every position with XOR/OR and no early exit, so the running time
/// depends only on the length.
pub fn constant_time_eq(expected: &[u8], actual: &[u8]) -> bool {
	if expected.len() != actual.len() {
		return false;
	}
	let diff = fold_diff(expected, actual, || {});
	bool::from(diff.ct_eq(&0u8))
}

#[inline(always)]
fn fold_diff<F: FnMut()>(a: &[u8], b: &[u8], mut step: F) -> u8 {
	let mut diff = 0u8;
	for (x, y) in a.iter().zip(b.iter()) {
		diff |= black_box(x ^ y);
		step();
	}
	diff
}
