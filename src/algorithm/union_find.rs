use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint sets over arbitrary hashable items.
///
/// Uses path compression and union by rank for near $O(1)$ amortized operations.
#[derive(Debug, Clone)]
pub struct DisjointSets<T>
where
    T: Hash + Eq,
{
    index: HashMap<T, usize, RandomState>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl<T> DisjointSets<T>
where
    T: Hash + Eq,
{
    /// Every distinct item starts in a singleton set.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut index = HashMap::with_hasher(RandomState::new());
        for x in items {
            let n = index.len();
            index.entry(x).or_insert(n);
        }
        let n = index.len();
        Self {
            index,
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `x`, or `None` for unknown items.
    pub fn find(&mut self, x: &T) -> Option<usize> {
        let i = *self.index.get(x)?;
        Some(self.find_root(i))
    }

    fn find_root(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges sets containing `x` and `y`.
    ///
    /// Returns `true` iff they were different sets before, i.e. a merge really happened.
    /// Unknown items are never merged.
    pub fn union(&mut self, x: &T, y: &T) -> bool {
        let (rx, ry) = match (self.find(x), self.find(y)) {
            (Some(rx), Some(ry)) => (rx, ry),
            _ => return false,
        };
        if rx == ry {
            return false;
        }
        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, x: &T, y: &T) -> bool {
        match (self.find(x), self.find(y)) {
            (Some(rx), Some(ry)) => rx == ry,
            _ => false,
        }
    }
}
