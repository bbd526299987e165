//! Graph coloring algorithms (greedy heuristics and exact solvers) and an experiment runner comparing them

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// coloring instance base trait, colorings and checker
pub mod color;

/// error type of the crate
pub mod error;

/// read DIMACS formats
pub mod dimacs;

/// compact instance (adjacency lists)
pub mod compact_instance;

/// random, grid, complete and tree graphs
pub mod generators;

/// admission policy of the exact solvers
pub mod config;

/// greedy and exact coloring algorithms
pub mod search;

/// runs and times every algorithm on a graph
pub mod experiment;

/// helper and utility methods for executables (parameters, results export)
pub mod util;

/// DOT export of colored graphs
pub mod visualization;
