//! Top-down merge sort over owned sequences.
//!
//! The classic divide-and-conquer formulation: split at the midpoint, sort
//! each half independently, combine with [`merge`]. Every call consumes its
//! input and returns a freshly constructed sequence; nothing is mutated in
//! place and the two recursive branches share no state.
//!
//! The sort is stable within a single merge step (ties emit the left element
//! first) but global stability across split boundaries is not guaranteed.

/// Sort a sequence into non-decreasing order.
///
/// Length 0 and 1 are base cases returned unchanged; an empty input must be
/// handled explicitly or the midpoint split would recurse forever on two
/// empty halves.
pub fn merge_sort<T: Ord + Copy>(seq: Vec<T>) -> Vec<T> {
    if seq.len() <= 1 {
        return seq;
    }

    let mid = seq.len() / 2;
    let left = merge_sort(seq[..mid].to_vec());
    let right = merge_sort(seq[mid..].to_vec());

    merge(left, right)
}

/// Combine two individually sorted sequences into one sorted sequence.
///
/// The output has length `left.len() + right.len()` and contains every
/// element of both inputs. Exhaustion is detected by comparing each cursor
/// against its sequence length, never by reading past the end.
pub fn merge<T: Ord + Copy>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        // Ties resolve in favor of the left element.
        if left[i] <= right[j] {
            result.push(left[i]);
            i += 1;
        } else {
            result.push(right[j]);
            j += 1;
        }
    }

    // At most one of these is non-empty once the loop exits.
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);

    result
}
