//! Hand-rolled functional primitives and their native iterator twins.
//!
//! These exist for the micro-benchmark: each primitive (`foldl`, `filter`,
//! `map`, `range`) is written as an explicit loop over an owned sequence,
//! mirroring what a native iterator chain does internally. The two aggregate
//! jobs compute the same sum either way, so the benchmark isolates the cost
//! of materializing intermediate sequences versus fusing the pipeline.

/// Left fold: thread an accumulator through the sequence front to back.
pub fn foldl<T, A>(mut f: impl FnMut(A, T) -> A, init: A, items: Vec<T>) -> A {
    let mut acc = init;
    for x in items {
        acc = f(acc, x);
    }
    acc
}

/// Keep the elements satisfying the predicate, preserving order.
pub fn filter<T>(mut pred: impl FnMut(&T) -> bool, items: Vec<T>) -> Vec<T> {
    let mut out = Vec::new();
    for x in items {
        if pred(&x) {
            out.push(x);
        }
    }
    out
}

/// Transform each element, preserving order.
pub fn map<T, U>(mut f: impl FnMut(T) -> U, items: Vec<T>) -> Vec<U> {
    let mut out = Vec::with_capacity(items.len());
    for x in items {
        out.push(f(x));
    }
    out
}

/// Materialize the half-open range `[from, to)` as an owned sequence.
///
/// Empty when `from >= to`.
pub fn range(from: i64, to: i64) -> Vec<i64> {
    let mut out = Vec::new();
    let mut x = from;
    while x < to {
        out.push(x);
        x += 1;
    }
    out
}

pub fn add(x: i64, y: i64) -> i64 {
    x + y
}

pub fn is_even(x: i64) -> bool {
    x % 2 == 0
}

pub fn is_odd(x: i64) -> bool {
    x % 2 != 0
}

/// Sum of the even successors of `0..n`, via the hand-rolled primitives.
///
/// fold(add) over filter(is_even) over map(+1) over range(0, n). Every stage
/// allocates its full intermediate sequence.
pub fn sum_even_successors(n: i64) -> i64 {
    foldl(add, 0, filter(|&x| is_even(x), map(|x| x + 1, range(0, n))))
}

/// Same aggregate as [`sum_even_successors`], via native iterators.
///
/// Filters the odd elements *before* incrementing, the way the reference
/// comprehension does; the successors of odd numbers are exactly the even
/// successors, so both jobs agree for every `n`.
pub fn sum_even_successors_native(n: i64) -> i64 {
    (0..n).filter(|&x| is_odd(x)).map(|x| x + 1).fold(0, add)
}
