use std::fs;

use serde::{Serialize, Deserialize};

use crate::error::{ColoringError, Result};

/** decides which exact solvers are allowed to run, given the number of vertices.
Brute force is admitted on graphs with at most brute_force_max_vertices vertices,
backtracking on graphs with at most backtracking_max_vertices vertices.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionPolicy {
    /// largest graph on which brute force runs
    pub brute_force_max_vertices: usize,
    /// largest graph on which backtracking runs
    pub backtracking_max_vertices: usize,
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self { brute_force_max_vertices: 8, backtracking_max_vertices: 12 }
    }
}

impl AdmissionPolicy {
    /// creates a policy, checking that brute force is not allowed on larger graphs than backtracking
    pub fn new(brute_force_max_vertices:usize, backtracking_max_vertices:usize) -> Result<Self> {
        let res = Self { brute_force_max_vertices, backtracking_max_vertices };
        res.validate()?;
        Ok(res)
    }

    /// larger thresholds (16 / 30)
    pub fn relaxed() -> Self {
        Self { brute_force_max_vertices: 16, backtracking_max_vertices: 30 }
    }

    /// brute force threshold must not exceed the backtracking one
    pub fn validate(&self) -> Result<()> {
        if self.brute_force_max_vertices > self.backtracking_max_vertices {
            return Err(ColoringError::Config(format!(
                "brute_force_max_vertices ({}) > backtracking_max_vertices ({})",
                self.brute_force_max_vertices, self.backtracking_max_vertices
            )));
        }
        Ok(())
    }

    /// reads a policy from a JSON file (missing fields take their default value)
    pub fn from_file(filename:&str) -> Result<Self> {
        let content = fs::read_to_string(filename)?;
        let res:Self = serde_json::from_str(&content)?;
        res.validate()?;
        Ok(res)
    }

    /// true iff brute force may run on a graph with nb_vertices vertices
    pub fn admits_brute_force(&self, nb_vertices:usize) -> bool {
        nb_vertices <= self.brute_force_max_vertices
    }

    /// true iff backtracking may run on a graph with nb_vertices vertices
    pub fn admits_backtracking(&self, nb_vertices:usize) -> bool {
        nb_vertices <= self.backtracking_max_vertices
    }
}
