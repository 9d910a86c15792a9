/// Unbounded last-in-first-out store of history entries.
#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    stack: Vec<T>,
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HistoryStack<T> {
    pub fn new() -> Self {
        Self { stack: vec![] }
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn top(&self) -> Option<&T> {
        self.stack.last()
    }

    pub fn push(&mut self, value: T) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    /// Drops every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Iterates from the oldest entry to the newest.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.stack.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.stack
    }
}
