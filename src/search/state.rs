/// Mutable scratch for one backtracking run: the committed path prefix and
/// its visited-set mirror.
///
/// One `SearchState` is allocated per run and re-armed with [`reset`] for
/// each starting vertex, so the recursion itself never allocates. `commit`
/// and `undo` keep both buffers consistent on every return path; a run that
/// succeeds leaves its winning prefix in place until the next `reset`.
///
/// [`reset`]: SearchState::reset
#[derive(Debug)]
pub struct SearchState {
    path: Vec<usize>,
    visited: Vec<bool>,
}

impl SearchState {
    /// Creates scratch buffers for a graph of `n` vertices.
    pub fn new(n: usize) -> Self {
        SearchState {
            path: Vec::with_capacity(n),
            visited: vec![false; n],
        }
    }

    /// Clears both buffers and commits `start` at position 0.
    pub fn reset(&mut self, start: usize) {
        self.path.clear();
        self.visited.iter_mut().for_each(|b| *b = false);
        self.commit(start);
    }

    /// Commits `v` as the next vertex on the path.
    pub fn commit(&mut self, v: usize) {
        debug_assert!(!self.visited[v], "vertex committed twice");
        self.path.push(v);
        self.visited[v] = true;
    }

    /// Rolls back the most recent commit.
    pub fn undo(&mut self) {
        let v = self.path.pop().expect("undo on an empty path");
        self.visited[v] = false;
    }

    /// Number of committed vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Most recently committed vertex.
    #[inline]
    pub fn last(&self) -> usize {
        *self.path.last().expect("last on an empty path")
    }

    /// Whether `v` is on the committed prefix, by linear scan.
    #[inline]
    pub fn on_path_scan(&self, v: usize) -> bool {
        self.path.contains(&v)
    }

    /// Whether `v` is on the committed prefix, via the visited mirror.
    #[inline]
    pub fn is_visited(&self, v: usize) -> bool {
        self.visited[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_and_undo_stay_consistent() {
        let mut state = SearchState::new(4);
        state.reset(2);
        state.commit(0);
        state.commit(3);
        assert_eq!(state.len(), 3);
        assert_eq!(state.last(), 3);
        assert!(state.is_visited(0));
        assert!(state.on_path_scan(2));

        state.undo();
        assert_eq!(state.last(), 0);
        assert!(!state.is_visited(3));
        assert!(!state.on_path_scan(3));
    }

    #[test]
    fn test_reset_rearms_after_success() {
        let mut state = SearchState::new(3);
        state.reset(0);
        state.commit(1);
        state.commit(2); // full path left in place, as after a successful run

        state.reset(1);
        assert_eq!(state.len(), 1);
        assert_eq!(state.last(), 1);
        assert!(!state.is_visited(0));
        assert!(!state.is_visited(2));
    }
}
