use bit_set::BitSet;

use crate::dimacs::read_from_file;
use crate::color::{ColoringInstance, VertexId};
use crate::error::{ColoringError, Result};

/** models a Graph Coloring instance.  */
#[derive(Debug, Clone)]
pub struct CompactInstance {
    /// nb vertices
    n: usize,
    /// edges of the graph
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}

impl ColoringInstance for CompactInstance {
    fn nb_vertices(&self) -> usize { self.n }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn degree(&self, u:VertexId) -> usize { self.adj_list[u].len() }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        match &self.adj_matrix { // if the matrix representation does not exist, iterate over
            None => { self.adj_list[u].iter().any(|c| &v==c) },
            Some(matrix) => { matrix[u].contains(v) } // otherwise, use it
        }
    }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }
}


impl CompactInstance {

    /// returns the number of edges in the graph
    pub fn nb_edges(&self) -> usize { self.edges.len() }

    /// builds the edge list
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /** constructor using an adjacency list (assumed symmetric, without self loops) */
    pub fn new(adj_list:Vec<Vec<usize>>) -> Self {
        let n = adj_list.len();
        let edges = Self::build_edges(&adj_list);
        Self { n, edges, adj_list, adj_matrix:None }
    }

    /** constructor using an edge list.
    Rejects self loops and endpoints outside 0..n. Duplicated edges are merged.
    */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self> {
        let mut adj_list = vec![Vec::new() ; n];
        for (u,v) in edges {
            if *u >= n || *v >= n || u == v {
                return Err(ColoringError::InvalidEdge { u:*u, v:*v, n });
            }
            adj_list[*u].push(*v);
            adj_list[*v].push(*u);
        }
        for l in adj_list.iter_mut() {
            l.sort_unstable();
            l.dedup();
        }
        Ok(Self::new(adj_list))
    }

    /// creates an instance from a DIMACS file
    pub fn from_file(filename:&str) -> Result<Self> {
        let (n,_,edges) = read_from_file(filename)?;
        let mut res = Self::from_edges(n, &edges)?;
        res.populate_adj_matrix();
        Ok(res)
    }

    /// if called, populate the adj_matrix
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::default(); self.n];
        for (a,resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_instance() {
        let inst = CompactInstance::from_file("insts/grid-instances/grid2x2").unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.neighbors(0), &[1,2]);
        assert!(inst.are_adjacent(3, 1));
        assert!(!inst.are_adjacent(0, 3));
    }

    #[test]
    fn test_from_edges_merges_duplicates() {
        let inst = CompactInstance::from_edges(3, &[(0,1), (1,0), (1,2)]).unwrap();
        assert_eq!(inst.nb_edges(), 2);
        assert_eq!(inst.degree(1), 2);
        assert_eq!(inst.edges(), &[(0,1), (1,2)]);
    }

    #[test]
    fn test_from_edges_rejects_undefined_vertex() {
        match CompactInstance::from_edges(3, &[(0,3)]) {
            Err(ColoringError::InvalidEdge { u, v, n }) => assert_eq!((u,v,n), (0,3,3)),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_edges_rejects_self_loop() {
        assert!(CompactInstance::from_edges(2, &[(1,1)]).is_err());
    }

    #[test]
    fn test_empty_instance() {
        let inst = CompactInstance::from_edges(0, &[]).unwrap();
        assert_eq!(inst.nb_vertices(), 0);
        assert_eq!(inst.max_degree(), 0);
    }
}
