use log::debug;

use crate::color::{ColoringInstance, Coloring};

/** enumerates every assignment of nb_colors colors to nb_vertices vertices,
in lexicographic order (the last vertex changes first).
Tuples are produced one at a time in a single buffer, the cartesian product is never stored.
*/
#[derive(Debug, Clone)]
pub struct ColorTuples {
    /// number of colors available
    nb_colors: usize,
    /// current assignment
    current: Vec<usize>,
    /// true once the first tuple was returned
    started: bool,
    /// true once every tuple was returned
    exhausted: bool,
}

impl ColorTuples {
    /// creates the enumeration of {0..nb_colors}^nb_vertices
    pub fn new(nb_vertices:usize, nb_colors:usize) -> Self {
        Self {
            nb_colors,
            current: vec![0 ; nb_vertices],
            started: false,
            exhausted: nb_colors == 0 && nb_vertices > 0,
        }
    }

    /// restarts the enumeration from the first tuple
    pub fn reset(&mut self) {
        for c in self.current.iter_mut() { *c = 0; }
        self.started = false;
        self.exhausted = self.nb_colors == 0 && !self.current.is_empty();
    }

    /// returns the next tuple (None when the enumeration is over)
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted { return None; }
        if !self.started {
            self.started = true;
            return Some(&self.current);
        }
        for i in (0..self.current.len()).rev() {
            if self.current[i] + 1 < self.nb_colors {
                self.current[i] += 1;
                for c in self.current[i+1..].iter_mut() { *c = 0; }
                return Some(&self.current);
            }
        }
        self.exhausted = true;
        None
    }
}

/// true iff no edge has both endpoints of the same color
pub fn is_valid_coloring(inst:&dyn ColoringInstance, coloring:&[usize]) -> bool {
    inst.edges().iter().all(|(u,v)| coloring[*u] != coloring[*v])
}

/** brute-force graph coloring.
For k = 1, 2, ... tries every k-color assignment and returns the first valid one.
The result is optimal. Cost: O(k^n) assignments per color budget, only usable on tiny graphs.

# Panics
 - if no coloring with at most n colors exists (never happens on a simple graph)
*/
pub fn brute_force_coloring(inst:&dyn ColoringInstance) -> Coloring {
    let n = inst.nb_vertices();
    if n == 0 { return Vec::new(); }
    for k in 1..=n {
        let mut tuples = ColorTuples::new(n, k);
        let mut nb_assignments:u64 = 0;
        while let Some(colors) = tuples.advance() {
            nb_assignments += 1;
            if is_valid_coloring(inst, colors) {
                debug!("brute force: {}-coloring found after {} assignments", k, nb_assignments);
                return colors.to_vec();
            }
        }
        debug!("brute force: no {}-coloring ({} assignments)", k, nb_assignments);
    }
    panic!("brute force: no coloring found with {} colors on {} vertices", n, n);
}
