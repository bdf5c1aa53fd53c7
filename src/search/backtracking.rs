use crate::graph::Graph;

use super::state::SearchState;

/// Exhaustive backtracking search for a Hamiltonian path.
///
/// Tries every starting vertex in ascending order and stops at the first one
/// from which a full path exists. A candidate extends the path when it is
/// adjacent to the last committed vertex and absent from the committed
/// prefix, checked by a linear scan. Success means all `n` vertices are
/// placed; the path does not have to close into a cycle.
///
/// Returns the existence verdict and the number of recursive calls made
/// across all starting vertices, including failed subtrees.
///
/// # Example
/// ```
/// use hampath::search::backtracking;
/// use hampath::Graph;
///
/// // The line 0-1-2 has a Hamiltonian path found on the first descent.
/// let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// let (exists, steps) = backtracking::search(&g);
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

    let last = state.last();
    for v in g.neighbors(last) {
        if state.on_path_scan(v) {
            continue;
        }
        state.commit(v);
        if extend(g, state, steps) {
            return true;
        }
        state.undo();
    }
    false
}
