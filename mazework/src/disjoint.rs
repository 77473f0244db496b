/// Union-find over cell indices with union by size.
///
/// A non-negative entry is the index of the parent, a negative entry marks a
/// root and holds the negated size of its tree.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<isize>,
}

impl DisjointSet {
    /// `total` singleton sets.
    pub fn new(total: usize) -> Self {
        Self {
            parent: vec![-1; total],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn find(&self, mut i: usize) -> usize {
        while self.parent[i] >= 0 {
            i = self.parent[i] as usize;
        }
        i
    }

    pub fn is_root(&self, i: usize) -> bool {
        self.parent[i] < 0
    }

    /// Size of the set containing `i`.
    pub fn weight(&self, i: usize) -> usize {
        (-self.parent[self.find(i)]) as usize
    }

    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the sets of `a` and `b`, hanging the smaller tree under the
    /// larger one. Returns `false` if they were already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut root_a, mut root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        // weights are negative, so the larger tree has the smaller entry
        if self.parent[root_a] > self.parent[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }

        self.parent[root_a] += self.parent[root_b];
        self.parent[root_b] = root_a as isize;
        true
    }

    /// Every element is in one set.
    pub fn is_merged(&self) -> bool {
        self.parent.is_empty() || self.weight(0) == self.parent.len()
    }
}
