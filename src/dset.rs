/// Disjoint-set forest over `n` elements indexed `0..n`.
///
/// Stored as a single signed array: a non-negative value at `i` is the parent
/// index of `i`, a negative value marks a root and holds `-(size of its set)`.
/// Callers guarantee indices are in range.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<i32>,
    num_sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets, each its own root of size one.
    pub fn new(n: usize) -> Self {
        Self {
            parent: vec![-1; n],
            num_sets: n,
        }
    }

    /// Representative of the set containing `x`.
    ///
    /// Plain recursive parent-chasing without path compression, so the cost is
    /// O(depth) per call. Grid-sized inputs keep the chains short enough.
    pub fn find(&self, x: usize) -> usize {
        if self.parent[x] < 0 {
            x
        } else {
            self.find(self.parent[x] as usize)
        }
    }

    /// Merges the sets containing `x` and `y`; no-op if they already share a
    /// root. The larger set absorbs the smaller; on a size tie the root of
    /// `x`'s set absorbs the root of `y`'s.
    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return;
        }

        // Root slots hold negative sizes, so the smaller stored value
        // belongs to the larger set.
        if self.parent[root_x] <= self.parent[root_y] {
            self.parent[root_x] += self.parent[root_y];
            self.parent[root_y] = root_x as i32;
        } else {
            self.parent[root_y] += self.parent[root_x];
            self.parent[root_x] = root_y as i32;
        }

        self.num_sets -= 1;
    }

    /// Number of disjoint sets left; starts at `n`, reaches 1 once everything
    /// is connected.
    pub fn count(&self) -> usize {
        self.num_sets
    }
}
