use std::fmt;
use std::time::Instant;

use log::{info, warn};
use serde::{Serialize, Serializer};

use crate::color::{nb_colors, ColoringInstance, Coloring};
use crate::config::AdmissionPolicy;
use crate::search::backtracking::backtracking_coloring;
use crate::search::brute_force::brute_force_coloring;
use crate::search::greedy::{greedy_largest_first, greedy_smallest_last};
use crate::search::greedy_dsatur::greedy_dsatur;

/** coloring algorithms compared by an experiment (in execution order) */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// greedy, vertices by decreasing degree
    GreedyLargestFirst,
    /// greedy, reversed degeneracy ordering
    GreedySmallestLast,
    /// DSATUR
    GreedySaturationLargestFirst,
    /// exhaustive enumeration
    BruteForce,
    /// depth-first search with pruning
    Backtracking,
}

impl Algorithm {
    /// every algorithm, in the order they are run
    pub const ALL:[Algorithm ; 5] = [
        Algorithm::GreedyLargestFirst,
        Algorithm::GreedySmallestLast,
        Algorithm::GreedySaturationLargestFirst,
        Algorithm::BruteForce,
        Algorithm::Backtracking,
    ];

    /// display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::GreedyLargestFirst => "Greedy LF",
            Algorithm::GreedySmallestLast => "Greedy SL",
            Algorithm::GreedySaturationLargestFirst => "Greedy SLF",
            Algorithm::BruteForce => "Brute Force",
            Algorithm::Backtracking => "Backtracking",
        }
    }

    /// true for the exponential solvers (subject to the admission policy)
    pub fn is_exact(&self) -> bool {
        matches!(self, Algorithm::BruteForce | Algorithm::Backtracking)
    }

    /// true iff the policy allows the algorithm on a graph of nb_vertices vertices
    pub fn is_admitted(&self, policy:&AdmissionPolicy, nb_vertices:usize) -> bool {
        match self {
            Algorithm::BruteForce => policy.admits_brute_force(nb_vertices),
            Algorithm::Backtracking => policy.admits_backtracking(nb_vertices),
            _ => true,
        }
    }

    /// runs the algorithm (no admission check)
    pub fn run(&self, inst:&dyn ColoringInstance) -> Coloring {
        match self {
            Algorithm::GreedyLargestFirst => greedy_largest_first(inst),
            Algorithm::GreedySmallestLast => greedy_smallest_last(inst),
            Algorithm::GreedySaturationLargestFirst => greedy_dsatur(inst),
            Algorithm::BruteForce => brute_force_coloring(inst),
            Algorithm::Backtracking => backtracking_coloring(inst),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/** outcome of one algorithm in an experiment */
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExperimentResult {
    /// the algorithm ran
    Completed {
        /// number of distinct colors used
        colors: usize,
        /// running time (seconds)
        time: f64,
        /// coloring found
        #[serde(skip)]
        coloring: Coloring,
    },
    /// the admission policy did not allow the algorithm on this graph
    Skipped,
}

impl ExperimentResult {
    /// number of colors (None if skipped)
    pub fn colors(&self) -> Option<usize> {
        match self {
            ExperimentResult::Completed { colors, .. } => Some(*colors),
            ExperimentResult::Skipped => None,
        }
    }

    /// running time in seconds (None if skipped)
    pub fn time(&self) -> Option<f64> {
        match self {
            ExperimentResult::Completed { time, .. } => Some(*time),
            ExperimentResult::Skipped => None,
        }
    }

    /// coloring found (None if skipped)
    pub fn coloring(&self) -> Option<&Coloring> {
        match self {
            ExperimentResult::Completed { coloring, .. } => Some(coloring),
            ExperimentResult::Skipped => None,
        }
    }

    /// true if skipped
    pub fn is_skipped(&self) -> bool { matches!(self, ExperimentResult::Skipped) }
}

/** one line of the result table */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmRun {
    /// algorithm
    pub algorithm: Algorithm,
    /// its outcome
    pub result: ExperimentResult,
}

/** results of every algorithm on a graph, in execution order */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentReport {
    /// number of vertices of the graph
    pub nb_vertices: usize,
    /// results in execution order
    pub runs: Vec<AlgorithmRun>,
}

impl ExperimentReport {
    /// result of an algorithm
    pub fn get(&self, algorithm:Algorithm) -> Option<&ExperimentResult> {
        self.runs.iter().find(|r| r.algorithm == algorithm).map(|r| &r.result)
    }

    /// result of an algorithm given its display name
    pub fn get_by_name(&self, name:&str) -> Option<&ExperimentResult> {
        self.runs.iter().find(|r| r.algorithm.name() == name).map(|r| &r.result)
    }

    /// iterates over (algorithm, result) in execution order
    pub fn iter(&self) -> impl Iterator<Item=(Algorithm, &ExperimentResult)> + '_ {
        self.runs.iter().map(|r| (r.algorithm, &r.result))
    }

    /// algorithms skipped by the admission policy
    pub fn skipped(&self) -> Vec<Algorithm> {
        self.iter().filter(|(_,r)| r.is_skipped()).map(|(a,_)| a).collect()
    }
}

/// runs an algorithm, measures its time and counts its colors
fn timed_run(algorithm:Algorithm, inst:&dyn ColoringInstance) -> ExperimentResult {
    let t_start = Instant::now();
    let coloring = algorithm.run(inst);
    let time = t_start.elapsed().as_secs_f64();
    let colors = nb_colors(&coloring);
    info!("{} took {:.6} seconds. Nb colors: {}", algorithm, time, colors);
    ExperimentResult::Completed { colors, time, coloring }
}

/** runs every algorithm on the instance.
    1. the three greedy algorithms always run
    2. brute force, then backtracking, run only if the policy admits them,
       otherwise they are reported as skipped
*/
pub fn run_experiment(inst:&dyn ColoringInstance, policy:&AdmissionPolicy) -> ExperimentReport {
    let n = inst.nb_vertices();
    let mut runs = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL.iter().copied() {
        let result = if algorithm.is_admitted(policy, n) {
            timed_run(algorithm, inst)
        } else {
            warn!("{} skipped: {} vertices (policy allows at most {})",
                algorithm, n,
                match algorithm {
                    Algorithm::BruteForce => policy.brute_force_max_vertices,
                    _ => policy.backtracking_max_vertices,
                }
            );
            ExperimentResult::Skipped
        };
        runs.push(AlgorithmRun { algorithm, result });
    }
    ExperimentReport { nb_vertices: n, runs }
}
