//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;
use std::time::Instant;

use crate::input;
use crate::primitives::{sum_even_successors, sum_even_successors_native};
use crate::sort::merge_sort;

use super::{CliError, CliResult, ExitCode};

/// Sort the integers in `path`, `runs` times over, printing the first `show`
/// elements of the sorted result each time.
///
/// Every run re-sorts the *original* array; results are never carried between
/// runs. This mirrors the timing-oriented reference driver, with the path and
/// run count as parameters rather than module-scope constants.
pub fn sort_file(path: &Path, runs: usize, show: usize) -> CliResult<ExitCode> {
    let arr = input::read_integers(path)
        .map_err(|e| CliError::failure(format!("{}: {}", path.display(), e)))?;

    println!("Given array is {:?} ...", prefix(&arr, show));

    for run in 0..runs {
        let started = Instant::now();
        let sorted = merge_sort(arr.clone());
        tracing::debug!(run, elapsed_us = started.elapsed().as_micros() as u64, "sorted");
        println!("Sorted array is {:?} ...", prefix(&sorted, show));
    }

    Ok(ExitCode::SUCCESS)
}

/// Run one of the functional-primitives jobs and print its aggregate with
/// wall-clock timing. `criterion` benches in `benches/` do the statistically
/// careful version; this is the quick interactive one.
pub fn bench_job(n: i64, native: bool) -> CliResult<ExitCode> {
    if n < 0 {
        return Err(CliError::failure(format!("--n must be non-negative, got {n}")));
    }

    let label = if native { "native" } else { "hand-rolled" };
    let started = Instant::now();
    let total = if native {
        sum_even_successors_native(n)
    } else {
        sum_even_successors(n)
    };
    let elapsed = started.elapsed();

    println!("{label} job: sum = {total} ({elapsed:.2?})");

    Ok(ExitCode::SUCCESS)
}

fn prefix(seq: &[i64], show: usize) -> &[i64] {
    &seq[..seq.len().min(show)]
}
