use crate::graph::Graph;

use super::state::SearchState;

/// Degree-ordered backtracking search for a Hamiltonian path.
///
/// Explores the same tree as [`backtracking`](super::backtracking) with two
/// changes that affect performance only. Membership tests read the visited
/// mirror instead of scanning the prefix, and the feasible candidates at
/// each node are tried most-constrained-first: ascending remaining degree
/// (unvisited neighbors left), ties by ascending vertex id. No branch is
/// cut; a candidate the exhaustive search would reach is still reached,
/// just possibly later, so the verdict is always identical.
///
/// Step counting matches the exhaustive variant: one per recursive call.
///
/// # Example
/// ```
/// use hampath::search::ordered;
/// use hampath::Graph;
///
/// let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// let (exists, steps) = ordered::search(&g);
/// assert!(exists);
/// assert_eq!(steps, 3);
/// ```
pub fn search(g: &Graph) -> (bool, u64) {
    let mut steps = 0u64;
    let mut state = SearchState::new(g.order());
    for start in 0..g.order() {
        state.reset(start);
        if extend(g, &mut state, &mut steps) {
            return (true, steps);
        }
    }
    (false, steps)
}

fn extend(g: &Graph, state: &mut SearchState, steps: &mut u64) -> bool {
    *steps += 1;
    if state.len() == g.order() {
        return true;
    }

    for v in ranked_candidates(g, state) {
        state.commit(v);
        if extend(g, state, steps) {
            return true;
        }
        state.undo();
    }
    false
}

/// Feasible next vertices, lowest remaining degree first.
fn ranked_candidates(g: &Graph, state: &SearchState) -> Vec<usize> {
    let last = state.last();
    let mut ranked: Vec<(usize, usize)> = Vec::new();
    for v in g.neighbors(last) {
        if state.is_visited(v) {
            continue;
        }
        let remaining = g.neighbors(v).filter(|&u| !state.is_visited(u)).count();
        ranked.push((remaining, v));
    }
    ranked.sort_unstable();
    ranked.into_iter().map(|(_, v)| v).collect()
}
