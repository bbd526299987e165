/*
Implements the graph families used by the experiments:
 - random (Erdős–Rényi G(n,p))
 - grid (width x height mesh)
 - complete (clique)
 - tree (balanced 5-ary tree)
*/
use rand::Rng;
use serde::Serialize;

use crate::color::VertexId;
use crate::compact_instance::CompactInstance;
use crate::error::{ColoringError, Result};

/// number of children of each internal node in tree graphs
pub const TREE_BRANCHING:usize = 5;

/** graph family and its parameters */
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GraphType {
    /// each edge exists with probability edge_prob
    Random {
        /// number of vertices
        num_nodes: usize,
        /// edge probability
        edge_prob: f64,
    },
    /// 4-neighbour mesh
    Grid {
        /// number of columns
        width: usize,
        /// number of rows
        height: usize,
    },
    /// clique
    Complete {
        /// number of vertices
        num_nodes: usize,
    },
    /// balanced tree filled breadth first
    Tree {
        /// number of vertices
        num_nodes: usize,
    },
}

impl GraphType {
    /** builds a graph type from its name. Missing parameters take the values
    num_nodes=10, edge_prob=0.3, width=4, height=4.
    */
    pub fn from_name(
        name:&str,
        num_nodes:Option<usize>,
        edge_prob:Option<f64>,
        width:Option<usize>,
        height:Option<usize>,
    ) -> Result<Self> {
        let num_nodes = num_nodes.unwrap_or(10);
        let res = match name {
            "random" => GraphType::Random { num_nodes, edge_prob: edge_prob.unwrap_or(0.3) },
            "grid" => GraphType::Grid { width: width.unwrap_or(4), height: height.unwrap_or(4) },
            "complete" => GraphType::Complete { num_nodes },
            "tree" => GraphType::Tree { num_nodes },
            _ => return Err(ColoringError::UnknownGraphType(name.to_string())),
        };
        res.validate()?;
        Ok(res)
    }

    /// family name, as stored in the results
    pub fn name(&self) -> &'static str {
        match self {
            GraphType::Random { .. } => "random",
            GraphType::Grid { .. } => "grid",
            GraphType::Complete { .. } => "complete",
            GraphType::Tree { .. } => "tree",
        }
    }

    /// number of vertices of the generated graphs
    pub fn size(&self) -> usize {
        match self {
            GraphType::Random { num_nodes, .. } => *num_nodes,
            GraphType::Grid { width, height } => width * height,
            GraphType::Complete { num_nodes } => *num_nodes,
            GraphType::Tree { num_nodes } => *num_nodes,
        }
    }

    /// checks the parameters
    pub fn validate(&self) -> Result<()> {
        match self {
            GraphType::Random { edge_prob, .. } if !(0. ..=1.).contains(edge_prob) => {
                Err(ColoringError::InvalidParameter(
                    format!("edge probability {} not in [0,1]", edge_prob)
                ))
            },
            GraphType::Grid { width, height } if *width == 0 || *height == 0 => {
                Err(ColoringError::InvalidParameter(
                    format!("grid {}x{} has an empty side", width, height)
                ))
            },
            _ => Ok(()),
        }
    }

    /// generates a graph of this family (rng is only used by random graphs)
    pub fn generate<R:Rng>(&self, rng:&mut R) -> Result<CompactInstance> {
        self.validate()?;
        match self {
            GraphType::Random { num_nodes, edge_prob } => random_graph(*num_nodes, *edge_prob, rng),
            GraphType::Grid { width, height } => grid_graph(*width, *height),
            GraphType::Complete { num_nodes } => complete_graph(*num_nodes),
            GraphType::Tree { num_nodes } => tree_graph(*num_nodes),
        }
    }
}

/** Erdős–Rényi graph: every pair of vertices is adjacent with probability edge_prob */
pub fn random_graph<R:Rng>(num_nodes:usize, edge_prob:f64, rng:&mut R) -> Result<CompactInstance> {
    if !(0. ..=1.).contains(&edge_prob) {
        return Err(ColoringError::InvalidParameter(
            format!("edge probability {} not in [0,1]", edge_prob)
        ));
    }
    let mut edges = Vec::new();
    for u in 0..num_nodes {
        for v in u+1..num_nodes {
            if rng.gen_bool(edge_prob) { edges.push((u,v)); }
        }
    }
    CompactInstance::from_edges(num_nodes, &edges)
}

/** width x height mesh. Vertex (x,y) has id x*height + y. */
pub fn grid_graph(width:usize, height:usize) -> Result<CompactInstance> {
    let id = |x:usize, y:usize| -> VertexId { x*height + y };
    let mut edges = Vec::new();
    for x in 0..width {
        for y in 0..height {
            if x+1 < width { edges.push((id(x,y), id(x+1,y))); }
            if y+1 < height { edges.push((id(x,y), id(x,y+1))); }
        }
    }
    CompactInstance::from_edges(width*height, &edges)
}

/** clique on num_nodes vertices */
pub fn complete_graph(num_nodes:usize) -> Result<CompactInstance> {
    let mut edges = Vec::with_capacity(num_nodes * num_nodes.saturating_sub(1) / 2);
    for u in 0..num_nodes {
        for v in u+1..num_nodes { edges.push((u,v)); }
    }
    CompactInstance::from_edges(num_nodes, &edges)
}

/** balanced tree with num_nodes vertices: the parent of vertex i > 0 is (i-1)/TREE_BRANCHING */
pub fn tree_graph(num_nodes:usize) -> Result<CompactInstance> {
    let edges:Vec<(VertexId,VertexId)> = (1..num_nodes)
        .map(|i| ((i-1)/TREE_BRANCHING, i))
        .collect();
    CompactInstance::from_edges(num_nodes, &edges)
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::color::ColoringInstance;

    #[test]
    fn test_from_name() {
        let t = GraphType::from_name("grid", None, None, Some(3), None).unwrap();
        assert_eq!(t, GraphType::Grid { width: 3, height: 4 });
        assert_eq!(t.size(), 12);
        assert_eq!(t.name(), "grid");
        let r = GraphType::from_name("random", Some(7), None, None, None).unwrap();
        assert_eq!(r, GraphType::Random { num_nodes: 7, edge_prob: 0.3 });
    }

    #[test]
    fn test_unknown_type() {
        match GraphType::from_name("hypercube", None, None, None, None) {
            Err(ColoringError::UnknownGraphType(name)) => assert_eq!(name, "hypercube"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(GraphType::from_name("random", Some(5), Some(1.5), None, None).is_err());
        assert!(GraphType::from_name("grid", None, None, Some(0), Some(3)).is_err());
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_graph(5, -0.1, &mut rng).is_err());
    }

    #[test]
    fn test_random_graph_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_graph(6, 0., &mut rng).unwrap().nb_edges(), 0);
        assert_eq!(random_graph(6, 1., &mut rng).unwrap().nb_edges(), 15);
    }

    #[test]
    fn test_random_graph_seeded() {
        let g1 = random_graph(20, 0.4, &mut StdRng::seed_from_u64(7)).unwrap();
        let g2 = random_graph(20, 0.4, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(g1.edges(), g2.edges());
    }

    #[test]
    fn test_grid_graph() {
        let g = grid_graph(3, 2).unwrap();
        assert_eq!(g.nb_vertices(), 6);
        // 3 columns of 1 vertical edge + 2 rows of 2 horizontal edges
        assert_eq!(g.nb_edges(), 7);
        assert!(g.are_adjacent(0, 2)); // (0,0) - (1,0)
        assert!(g.are_adjacent(0, 1)); // (0,0) - (0,1)
        assert_eq!(g.max_degree(), 3);
    }

    #[test]
    fn test_complete_graph() {
        let g = complete_graph(5).unwrap();
        assert_eq!(g.nb_edges(), 10);
        assert_eq!(complete_graph(0).unwrap().nb_vertices(), 0);
    }

    #[test]
    fn test_tree_graph() {
        let g = tree_graph(8).unwrap();
        assert_eq!(g.nb_vertices(), 8);
        assert_eq!(g.nb_edges(), 7);
        assert_eq!(g.degree(0), 5);
        assert_eq!(g.neighbors(1), &[0,6,7]);
        assert_eq!(tree_graph(0).unwrap().nb_vertices(), 0);
        assert_eq!(tree_graph(1).unwrap().nb_edges(), 0);
    }

    #[test]
    fn test_generate() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = GraphType::Tree { num_nodes: 12 }.generate(&mut rng).unwrap();
        assert_eq!(g.nb_vertices(), 12);
        let g = GraphType::Random { num_nodes: 9, edge_prob: 0.5 }.generate(&mut rng).unwrap();
        assert_eq!(g.nb_vertices(), 9);
    }
}
