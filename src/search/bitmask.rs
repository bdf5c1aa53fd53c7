use bitvec::bitvec;
use bitvec::vec::BitVec;

use crate::graph::Graph;

/// Largest vertex count the subset table is built for.
///
/// The table holds `2^n * n` bits (about 11.5 MiB at `n = 22`) and the
/// sweep costs `2^n * n^2` transitions, so past this bound the strategy is
/// skipped rather than attempted.
pub const MAX_DP_VERTICES: usize = 22;

/// Exact subset dynamic programming over `(mask, last)` states.
///
/// Bit `mask * n + last` of the table records whether some path visits
/// exactly the vertices in `mask` and ends at `last`. A Hamiltonian path may
/// start anywhere, so every singleton mask is seeded reachable. Masks are
/// then processed in increasing numeric order, which resolves every subset
/// before any of its supersets: adding a bit always strictly increases the
/// mask value. A path exists iff any endpoint is reachable at the full mask.
///
/// One step is counted per mask processed, not per transition. Callers are
/// responsible for the [`MAX_DP_VERTICES`] bound; `search` assumes the table
/// fits.
///
/// # Example
/// ```
/// use hampath::search::bitmask;
/// use hampath::Graph;
///
/// let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let (exists, steps) = bitmask::search(&g);
/// assert!(exists);
/// assert_eq!(steps, 15); // one step per non-empty mask
/// ```
pub fn search(g: &Graph) -> (bool, u64) {
    let n = g.order();
    debug_assert!(n <= MAX_DP_VERTICES, "subset table would not fit");

    let full: usize = (1 << n) - 1;
    let mut dp: BitVec = bitvec![0; (full + 1) * n];
    for i in 0..n {
        dp.set((1 << i) * n + i, true);
    }

    let mut steps = 0u64;
    for mask in 1..=full {
        steps += 1;
        for i in 0..n {
            if mask & (1 << i) == 0 || !dp[mask * n + i] {
                continue;
            }
            for j in g.neighbors(i) {
                if mask & (1 << j) == 0 {
                    dp.set((mask | (1 << j)) * n + j, true);
                }
            }
        }
    }

    let exists = (0..n).any(|i| dp[full * n + i]);
    (exists, steps)
}
