// src/forest.rs
//! Disjoint-set forest with path compression and union by size.

/// Partition of `0..n` into disjoint components.
///
/// Callers only ever hold element indices; the parent and size arrays are private.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

// Indexing is safe here: all indices passed to find/union must be < n (from new()).
#[allow(clippy::indexing_slicing)]
impl DisjointSetForest {
    /// Creates a forest where every element is its own root with size 1.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Number of elements in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root of `x`'s component, repointing every node on the path to it.
    ///
    /// Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the components of `x` and `y`. Returns `false` if they were already one.
    ///
    /// The smaller component goes under the larger one; on a size tie the lower
    /// root index stays root.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);

        if rx == ry {
            return false;
        }

        let (root, child) = match self.size[rx].cmp(&self.size[ry]) {
            std::cmp::Ordering::Less => (ry, rx),
            std::cmp::Ordering::Greater => (rx, ry),
            std::cmp::Ordering::Equal => (rx.min(ry), rx.max(ry)),
        };

        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.components -= 1;
        true
    }

    #[must_use]
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the component containing `x`.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Sizes of every component, largest first.
    #[must_use]
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = (0..self.parent.len())
            .filter(|&i| self.parent[i] == i)
            .map(|i| self.size[i])
            .collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Reachability over accepted edges, computed the slow way.
    fn bfs_connected(n: usize, accepted: &[(usize, usize)], a: usize, b: usize) -> bool {
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in accepted {
            adj[u].push(v);
            adj[v].push(u);
        }
        let mut seen = vec![false; n];
        let mut queue = VecDeque::from([a]);
        seen[a] = true;
        while let Some(cur) = queue.pop_front() {
            if cur == b {
                return true;
            }
            for &next in &adj[cur] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }

    #[test]
    fn test_new_forest_is_all_singletons() {
        let mut f = DisjointSetForest::new(4);
        assert_eq!(f.component_count(), 4);
        assert_eq!(f.len(), 4);
        for i in 0..4 {
            assert_eq!(f.find(i), i);
            assert_eq!(f.component_size(i), 1);
        }
    }

    #[test]
    fn test_union_reports_cycle_edges() {
        let mut f = DisjointSetForest::new(3);
        assert!(f.union(0, 1));
        assert!(f.union(1, 2));
        assert!(!f.union(0, 2), "0 and 2 already share a component");
        assert_eq!(f.component_count(), 1);
        assert_eq!(f.component_size(2), 3);
    }

    #[test]
    fn test_union_by_size_keeps_larger_root() {
        let mut f = DisjointSetForest::new(5);
        f.union(3, 4);
        f.union(3, 2);
        let big = f.find(3);
        f.union(0, 4);
        assert_eq!(f.find(0), big);
    }

    #[test]
    fn test_equal_size_tie_keeps_lower_index() {
        let mut f = DisjointSetForest::new(4);
        f.union(3, 1);
        assert_eq!(f.find(3), 1);
        f.union(2, 0);
        f.union(3, 2);
        assert_eq!(f.find(1), 0);
    }

    #[test]
    fn test_find_compresses_long_chain() {
        let mut f = DisjointSetForest::new(6);
        // 5 -> 4 -> 3 -> 2 -> 1 -> 0
        f.parent = vec![0, 0, 1, 2, 3, 4];
        f.size[0] = 6;
        f.components = 1;

        assert_eq!(f.find(5), 0);
        assert_eq!(f.parent, vec![0; 6]);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut f = DisjointSetForest::new(5);
        f.union(0, 1);
        f.union(2, 3);
        f.union(1, 3);
        let before = f.component_count();
        let first: Vec<_> = (0..5).map(|i| f.find(i)).collect();
        let second: Vec<_> = (0..5).map(|i| f.find(i)).collect();
        assert_eq!(first, second);
        assert_eq!(f.component_count(), before);
    }

    #[test]
    fn test_connectivity_matches_bfs() {
        let n = 10;
        let pairs = [(0, 1), (2, 3), (1, 3), (4, 5), (6, 7), (7, 8), (0, 2), (8, 6), (9, 9)];
        let mut f = DisjointSetForest::new(n);
        let mut accepted = Vec::new();
        let mut expected_components = n;
        for &(u, v) in &pairs {
            if f.union(u, v) {
                accepted.push((u, v));
                expected_components -= 1;
            }
            assert_eq!(f.component_count(), expected_components);
            assert!(f.component_count() >= 1);
        }
        for a in 0..n {
            for b in 0..n {
                assert_eq!(
                    f.connected(a, b),
                    bfs_connected(n, &accepted, a, b),
                    "connectivity of {a} and {b}"
                );
            }
        }
    }

    #[test]
    fn test_component_sizes_sorted_descending() {
        let mut f = DisjointSetForest::new(7);
        f.union(0, 1);
        f.union(1, 2);
        f.union(3, 4);
        assert_eq!(f.component_sizes(), vec![3, 2, 1, 1]);
        assert_eq!(f.component_sizes().iter().sum::<usize>(), 7);
    }

    #[test]
    fn test_empty_forest() {
        let f = DisjointSetForest::new(0);
        assert!(f.is_empty());
        assert_eq!(f.component_count(), 0);
        assert!(f.component_sizes().is_empty());
    }
}
