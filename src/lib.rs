#![forbid(unsafe_code)]
//! Riffle: a teaching-grade merge sort engine
//!
//! Riffle packages two small, self-contained pieces: a classic top-down merge
//! sort over an owned sequence (`sort`), driven repeatedly over a file-backed
//! integer array by the CLI, and a set of hand-rolled functional primitives
//! with native iterator twins (`primitives`) used for micro-benchmarking.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a logic error in the crate itself, use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;
pub mod input;
pub mod primitives;
pub mod sort;
pub mod version;

pub use input::{InputError, parse_integers, read_integers};
pub use sort::{merge, merge_sort};
