use std::fmt::Debug;
use std::ops::Range;

use bit_set::BitSet;
use log::info;

/** Vertex Id */
pub type VertexId = usize;

/** Coloring of a graph: coloring[v] is the color assigned to vertex v. */
pub type Coloring = Vec<usize>;

/** Solution of a graph coloring problem
(represented as a partition).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** Graph seen by the coloring algorithms. Vertices are 0..nb_vertices().
Implementations must be symmetric and without self loops.
*/
pub trait ColoringInstance: Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// iterator over the vertices
    fn vertices(&self) -> Range<VertexId> { 0..self.nb_vertices() }

    /// vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// number of vertices adjacent to u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// maximum degree Δ(G) (0 on the empty graph)
    fn max_degree(&self) -> usize {
        self.vertices().map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// true iff u and v are adjacent
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        self.neighbors(u).iter().any(|w| *w == v)
    }

    /// edge list (each edge once, smallest endpoint first)
    fn edges(&self) -> &[(VertexId, VertexId)];

    /// logs some statistics of the instance
    fn display_statistics(&self) {
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.edges().len());
        let min_degree = self.vertices().map(|v| self.degree(v)).min().unwrap_or(0);
        info!("\t{} \t min degree", min_degree);
        info!("\t{} \t max degree", self.max_degree());
    }
}

/// number of distinct colors used by a coloring
pub fn nb_colors(coloring:&[usize]) -> usize {
    coloring.iter().copied().collect::<BitSet>().len()
}

/// converts a coloring to its partition representation (res[c]: vertices colored with c)
pub fn to_partition(coloring:&[usize]) -> Solution {
    let nb_classes = coloring.iter().max().map_or(0, |c| c+1);
    let mut res = vec![vec![] ; nb_classes];
    for (v,c) in coloring.iter().enumerate() {
        res[*c].push(v);
    }
    res.retain(|class| !class.is_empty());
    res
}

/** result of the checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible coloring, with its number of colors
    Ok(usize),
    /// the coloring does not cover exactly the vertices of the instance
    WrongSize {
        /// number of vertices of the instance
        expected: usize,
        /// number of vertices in the coloring
        got: usize,
    },
    /// two adjacent vertices share a color
    Conflict(VertexId, VertexId),
}

/**
checks a total coloring.
returns the number of colors if feasible, the reason otherwise
*/
pub fn checker(inst:&dyn ColoringInstance, coloring:&[usize]) -> CheckerResult {
    if coloring.len() != inst.nb_vertices() {
        return CheckerResult::WrongSize { expected: inst.nb_vertices(), got: coloring.len() };
    }
    for (u,v) in inst.edges() {
        if coloring[*u] == coloring[*v] {
            return CheckerResult::Conflict(*u, *v);
        }
    }
    CheckerResult::Ok(nb_colors(coloring))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact_instance::CompactInstance;

    fn path3() -> CompactInstance {
        CompactInstance::from_edges(3, &[(0,1), (1,2)]).unwrap()
    }

    #[test]
    fn test_nb_colors() {
        assert_eq!(nb_colors(&[]), 0);
        assert_eq!(nb_colors(&[0,0,0]), 1);
        assert_eq!(nb_colors(&[0,2,0,2]), 2);
    }

    #[test]
    fn test_to_partition() {
        assert_eq!(to_partition(&[0,1,0]), vec![vec![0,2], vec![1]]);
        assert!(to_partition(&[]).is_empty());
    }

    #[test]
    fn test_checker() {
        let inst = path3();
        assert_eq!(checker(&inst, &[0,1,0]), CheckerResult::Ok(2));
        assert_eq!(checker(&inst, &[0,0,1]), CheckerResult::Conflict(0,1));
        assert_eq!(checker(&inst, &[0,1]), CheckerResult::WrongSize { expected: 3, got: 2 });
    }

    #[test]
    fn test_default_methods() {
        let inst = path3();
        assert_eq!(inst.max_degree(), 2);
        assert!(inst.are_adjacent(1, 2));
        assert!(!inst.are_adjacent(0, 2));
        assert_eq!(inst.vertices().count(), 3);
    }
}
