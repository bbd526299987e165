use log::debug;

use crate::color::{ColoringInstance, Coloring, VertexId};

/** depth-first search for a coloring with a fixed number of colors.
Vertices are assigned in increasing id order, one depth per vertex.
*/
#[derive(Debug)]
struct BacktrackingSearch<'a> {
    /// instance
    inst: &'a dyn ColoringInstance,
    /// number of colors allowed
    nb_colors: usize,
    /// colors[v]: color assigned to v in the current partial coloring
    colors: Vec<Option<usize>>,
    /// copy of the first complete coloring found
    solution: Option<Coloring>,
    /// number of search nodes opened
    nb_nodes: u64,
}

impl<'a> BacktrackingSearch<'a> {
    fn new(inst:&'a dyn ColoringInstance, nb_colors:usize) -> Self {
        Self {
            inst,
            nb_colors,
            colors: vec![None ; inst.nb_vertices()],
            solution: None,
            nb_nodes: 0,
        }
    }

    /// c is safe for v iff no colored neighbor of v uses c
    fn is_safe(&self, v:VertexId, c:usize) -> bool {
        self.inst.neighbors(v).iter().all(|w| self.colors[*w] != Some(c))
    }

    /** tries to color vertices v.. given the colors of 0..v.
    Every assignment is undone before returning, the solution is copied when the last
    vertex is reached.
    */
    fn extend(&mut self, v:VertexId) -> bool {
        self.nb_nodes += 1;
        if v == self.colors.len() {
            self.solution = Some(self.colors.iter().flatten().copied().collect());
            return true;
        }
        for c in 0..self.nb_colors {
            if self.is_safe(v, c) {
                self.colors[v] = Some(c);
                let found = self.extend(v+1);
                self.colors[v] = None;
                if found { return true; }
            }
        }
        false
    }
}

/** backtracking graph coloring.
For k = 1, 2, ... runs a depth-first search that only assigns colors not used by an
already colored neighbor, and returns the first complete coloring found.
The result is optimal.

# Panics
 - if no coloring with at most n colors exists (never happens on a simple graph)
*/
pub fn backtracking_coloring(inst:&dyn ColoringInstance) -> Coloring {
    let n = inst.nb_vertices();
    if n == 0 { return Vec::new(); }
    for k in 1..=n {
        let mut search = BacktrackingSearch::new(inst, k);
        let found = search.extend(0);
        debug_assert!(search.colors.iter().all(|c| c.is_none()));
        if let (true, Some(solution)) = (found, search.solution) {
            debug!("backtracking: {}-coloring found ({} nodes)", k, search.nb_nodes);
            debug_assert_eq!(solution.len(), n);
            return solution;
        }
        debug!("backtracking: no {}-coloring ({} nodes)", k, search.nb_nodes);
    }
    panic!("backtracking: no coloring found with {} colors on {} vertices", n, n);
}
