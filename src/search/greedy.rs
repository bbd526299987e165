use std::cmp::Ordering;

use bit_set::BitSet;
use priority_queue::PriorityQueue;

use crate::color::{ColoringInstance, Coloring, VertexId};

/** smallest color not contained in forbidden (first-fit) */
pub fn first_fit(forbidden:&BitSet) -> usize {
    let mut color:usize = 0;
    while forbidden.contains(color) { color += 1; }
    color
}

/** colors the vertices in the given order. Each vertex gets the smallest color
not used by its already colored neighbors.

order must be a permutation of the vertices of the instance.
The result uses at most Δ(G)+1 colors.
*/
pub fn greedy_coloring(inst:&dyn ColoringInstance, order:&[VertexId]) -> Coloring {
    debug_assert_eq!(order.len(), inst.nb_vertices());
    let mut colors:Vec<Option<usize>> = vec![None ; inst.nb_vertices()];
    let mut neighbor_colors = BitSet::default();
    for v in order {
        neighbor_colors.clear();
        for w in inst.neighbors(*v) {
            if let Some(c) = colors[*w] { neighbor_colors.insert(c); }
        }
        colors[*v] = Some(first_fit(&neighbor_colors));
    }
    colors.into_iter()
        .map(|c| c.expect("greedy_coloring: order is not a permutation of the vertices"))
        .collect()
}

/** Largest First ordering: vertices by decreasing degree, ties broken by increasing id */
pub fn largest_first_ordering(inst:&dyn ColoringInstance) -> Vec<VertexId> {
    let mut order:Vec<VertexId> = inst.vertices().collect();
    // stable sort: equal degrees keep the increasing id order
    order.sort_by(|a,b| inst.degree(*b).cmp(&inst.degree(*a)));
    order
}

/** greedy coloring following the Largest First ordering */
pub fn greedy_largest_first(inst:&dyn ColoringInstance) -> Coloring {
    greedy_coloring(inst, &largest_first_ordering(inst))
}


/// remaining degree of a vertex during the smallest last elimination
#[derive(PartialEq, Eq)]
struct EliminationInfo {
    degree: usize,
    v: VertexId,
}

/// the max-priority is the vertex with the smallest remaining degree (then smallest id)
impl Ord for EliminationInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        other.degree.cmp(&self.degree)
            .then_with(|| other.v.cmp(&self.v))
    }
}

impl PartialOrd for EliminationInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** Smallest Last (degeneracy) ordering.
    1. remove the vertex of minimum degree in the remaining graph (ties: smallest id)
    2. decrease the degree of its remaining neighbors
    3. repeat until the graph is empty
    4. the ordering is the elimination sequence reversed
The remaining graph is kept in private working structures, the instance is never modified.
*/
pub fn smallest_last_ordering(inst:&dyn ColoringInstance) -> Vec<VertexId> {
    let n = inst.nb_vertices();
    let mut remaining:PriorityQueue<VertexId, EliminationInfo> = PriorityQueue::new();
    for v in inst.vertices() {
        remaining.push(v, EliminationInfo { degree: inst.degree(v), v });
    }
    let mut removed = BitSet::with_capacity(n);
    let mut elimination = Vec::with_capacity(n);
    while let Some((v,_)) = remaining.pop() {
        removed.insert(v);
        elimination.push(v);
        for w in inst.neighbors(v).iter().filter(|w| !removed.contains(**w)) {
            remaining.change_priority_by(w, |p| { p.degree -= 1; });
        }
    }
    elimination.reverse();
    elimination
}

/** greedy coloring following the Smallest Last ordering */
pub fn greedy_smallest_last(inst:&dyn ColoringInstance) -> Coloring {
    greedy_coloring(inst, &smallest_last_ordering(inst))
}
