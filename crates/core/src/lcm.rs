// Copyright 2025 KPK Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Least common multiple by repeated accumulation.
//!
//! Both variants walk the multiples of `a` (`a, 2a, 3a, ...`) until one is
//! divisible by `b`. They exist side by side so their running time can be
//! compared, not because either is a good way to compute an LCM; see [`lcm`]
//! for the closed form.
//!
//! # Integer semantics
//!
//! Accumulation wraps on overflow and the divisibility test uses a wrapping
//! remainder, so neither function can panic. With truncated remainder
//! semantics negative operands terminate too: `lcm_iterative(-4, 6) == -12`.
//!
//! There is no iteration cap. An operand pair whose first common multiple is
//! far away keeps the caller busy for as long as it takes.

/// Maximum number of frames a single [`lcm_recursive`] descent may push before
/// it unwinds and re-enters with the current accumulator.
pub const RECURSION_CHUNK: u32 = 4_096;

/// Iterative variant: accumulate `a` in a loop until the sum is divisible by `b`.
///
/// Returns 0 when either operand is 0.
pub fn lcm_iterative(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let mut result = a;
    while result.wrapping_rem(b) != 0 {
        result = result.wrapping_add(a);
    }
    result
}

/// Recursive variant: test `accumulator`, otherwise recurse with `accumulator + a`.
///
/// Callers start with `accumulator == a`, which yields the same value as
/// [`lcm_iterative`]. Returns 0 when `b` is 0.
pub fn lcm_recursive(a: i64, b: i64, accumulator: i64) -> i64 {
    let mut accumulator = accumulator;
    loop {
        match descend(a, b, accumulator, RECURSION_CHUNK) {
            Step::Done(value) => return value,
            Step::Resume(next) => accumulator = next,
        }
    }
}

enum Step {
    Done(i64),
    Resume(i64),
}

fn descend(a: i64, b: i64, accumulator: i64, depth: u32) -> Step {
    if b == 0 {
        return Step::Done(0);
    }
    if accumulator.wrapping_rem(b) == 0 {
        return Step::Done(accumulator);
    }
    let next = accumulator.wrapping_add(a);
    if depth == 0 {
        return Step::Resume(next);
    }
    descend(a, b, next, depth - 1)
}

/// Greatest common divisor (Euclid), always non-negative.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut x, mut y) = (a.unsigned_abs(), b.unsigned_abs());
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x
}

/// Closed-form LCM, `|a * b| / gcd(a, b)`, or 0 if either operand is 0.
///
/// Returns `None` when the result does not fit in an `i64`.
pub fn lcm(a: i64, b: i64) -> Option<i64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    let g = gcd(a, b);
    let product = (a.unsigned_abs() / g).checked_mul(b.unsigned_abs())?;
    i64::try_from(product).ok()
}
