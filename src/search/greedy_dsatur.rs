use std::cmp::Ordering;

use priority_queue::PriorityQueue;
use bit_set::BitSet;

use crate::color::{ColoringInstance, Coloring, VertexId};
use crate::search::greedy::first_fit;

#[derive(PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    v: VertexId,
}

/// largest saturation first, then largest degree, then smallest vertex id
impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| other.v.cmp(&self.v))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR (saturation largest first) algorithm.
    1. choose an uncolored node that sees the most colors (break ties by the largest degree,
       then by the smallest id)
    2. add the vertex to the first color available
    3. mark all its uncolored neighbors seeing this color
    4. repeat until a proper coloring is found

The vertex ordering is computed while coloring, not in advance.
*/
pub fn greedy_dsatur(inst:&dyn ColoringInstance) -> Coloring {
    let n:usize = inst.nb_vertices();
    let mut remaining_vertices:PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for v in inst.vertices() {
        remaining_vertices.push(v, DSatInfo { dsat:0, degree:inst.degree(v), v });
    }
    let mut colors:Vec<Option<usize>> = vec![None ; n]; // colors[v] -> color assigned to vertex v
    let mut adj_colors:Vec<BitSet> = vec![BitSet::default() ; n]; // adj_colors[v] -> colors v sees
    while let Some((current_vertex,_)) = remaining_vertices.pop() {
        let color = first_fit(&adj_colors[current_vertex]);
        colors[current_vertex] = Some(color);
        // update saturation degree information
        for conflict_vertex in inst.neighbors(current_vertex).iter()
        .filter(|conflict_vertex| colors[**conflict_vertex].is_none()) {
            if !adj_colors[*conflict_vertex].contains(color) {
                adj_colors[*conflict_vertex].insert(color);
                remaining_vertices.change_priority_by(conflict_vertex, |p| { p.dsat += 1; });
            }
        }
    }
    colors.into_iter()
        .map(|c| c.expect("greedy_dsatur: vertex left uncolored"))
        .collect()
}




#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, nb_colors, CheckerResult};
    use crate::compact_instance::CompactInstance;

    #[test]
    fn test_dsatur_star() {
        let edges:Vec<(usize,usize)> = (1..=5).map(|i| (0,i)).collect();
        let inst = CompactInstance::from_edges(6, &edges).unwrap();
        let coloring = greedy_dsatur(&inst);
        assert_eq!(coloring, vec![0,1,1,1,1,1]);
    }

    #[test]
    fn test_dsatur_crown() {
        // bipartite graph on which a bad static order needs 3 colors
        let inst = CompactInstance::from_edges(6, &[(0,4), (0,5), (1,3), (1,5), (2,3), (2,4)]).unwrap();
        assert_eq!(checker(&inst, &greedy_dsatur(&inst)), CheckerResult::Ok(2));
    }

    #[test]
    fn test_dsatur_cycle() {
        // odd cycle: saturation forces the third color only on the last vertex
        let inst = CompactInstance::from_edges(5, &[(0,1), (1,2), (2,3), (3,4), (4,0)]).unwrap();
        let coloring = greedy_dsatur(&inst);
        assert_eq!(coloring, vec![0,1,0,1,2]);
    }

    #[test]
    fn test_dsatur_petersen() {
        let inst = CompactInstance::from_file("insts/other-instances/petersen.col").unwrap();
        let coloring = greedy_dsatur(&inst);
        assert_eq!(checker(&inst, &coloring), CheckerResult::Ok(3));
        assert_eq!(coloring, greedy_dsatur(&inst));
    }

    #[test]
    fn test_dsatur_empty_and_single() {
        let empty = CompactInstance::from_edges(0, &[]).unwrap();
        assert!(greedy_dsatur(&empty).is_empty());
        let single = CompactInstance::from_edges(1, &[]).unwrap();
        assert_eq!(nb_colors(&greedy_dsatur(&single)), 1);
    }
}
