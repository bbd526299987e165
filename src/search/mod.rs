//! Coloring algorithms for the graph coloring problem.

/// first-fit coloring, Largest First and Smallest Last orderings
pub mod greedy;

/// greedy DSATUR algorithm
pub mod greedy_dsatur;

/// exhaustive enumeration of colorings
pub mod brute_force;

/// backtracking search for an optimal coloring
pub mod backtracking;
