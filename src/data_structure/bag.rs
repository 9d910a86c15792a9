use std::{collections::HashMap, fmt, hash::Hash};

use itertools::Itertools;

/// An unordered collection which may hold equal entries more than once.
pub trait Bag<T> {
    /// Stores `entry`. Returns `false` if the bag has no room left.
    fn add(&mut self, entry: T) -> bool;
    /// Takes out some entry. Which one is up to the implementation.
    fn remove(&mut self) -> Option<T>;
    /// Takes out one occurrence of `entry`, if there is any.
    fn remove_entry(&mut self, entry: &T) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn contains(&self, entry: &T) -> bool;
    fn frequency_of(&self, entry: &T) -> usize;
    fn to_vec(&self) -> Vec<T>;
    fn clear(&mut self);
}

/// A bag stored in a plain vector, optionally refusing to grow past a fixed capacity.
#[derive(Debug, Clone)]
pub struct ArrayBag<T> {
    entries: Vec<T>,
    capacity: Option<usize>,
}

impl<T> Default for ArrayBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayBag<T> {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            capacity: None,
        }
    }

    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        matches!(self.capacity, Some(cap) if self.entries.len() >= cap)
    }

    fn position(&self, entry: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.entries.iter().position(|e| e == entry)
    }
}

impl<T: Clone + PartialEq> Bag<T> for ArrayBag<T> {
    fn add(&mut self, entry: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push(entry);
        true
    }

    fn remove(&mut self) -> Option<T> {
        self.entries.pop()
    }

    fn remove_entry(&mut self, entry: &T) -> bool {
        if let Some(i) = self.position(entry) {
            self.entries.swap_remove(i);
            true
        } else {
            false
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, entry: &T) -> bool {
        self.position(entry).is_some()
    }

    fn frequency_of(&self, entry: &T) -> usize {
        self.entries.iter().filter(|e| *e == entry).count()
    }

    fn to_vec(&self) -> Vec<T> {
        self.entries.clone()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: fmt::Display> fmt::Display for ArrayBag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.entries.iter().join(", "))
    }
}

/// A bag keeping one counter per distinct entry.
#[derive(Debug, Clone)]
pub struct HashBag<T: Hash + Eq> {
    map: HashMap<T, usize>,
    cardinality: usize,
}

impl<T: Hash + Eq> Default for HashBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> HashBag<T> {
    pub fn new() -> Self {
        Self {
            map: Default::default(),
            cardinality: 0,
        }
    }

    /// Number of distinct entries.
    pub fn distinct(&self) -> usize {
        self.map.len()
    }
}

impl<T: Hash + Eq + Clone> Bag<T> for HashBag<T> {
    fn add(&mut self, entry: T) -> bool {
        *self.map.entry(entry).or_insert(0) += 1;
        self.cardinality += 1;
        true
    }

    fn remove(&mut self) -> Option<T> {
        let entry = self.map.keys().next()?.clone();
        self.remove_entry(&entry);
        Some(entry)
    }

    fn remove_entry(&mut self, entry: &T) -> bool {
        match self.map.get_mut(entry) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.map.remove(entry);
                }
                self.cardinality -= 1;
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.cardinality
    }

    fn contains(&self, entry: &T) -> bool {
        self.map.contains_key(entry)
    }

    fn frequency_of(&self, entry: &T) -> usize {
        self.map.get(entry).copied().unwrap_or(0)
    }

    fn to_vec(&self) -> Vec<T> {
        self.map
            .iter()
            .flat_map(|(k, &n)| std::iter::repeat(k).take(n).cloned())
            .collect()
    }

    fn clear(&mut self) {
        self.map.clear();
        self.cardinality = 0;
    }
}
