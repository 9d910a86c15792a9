use crate::{
    data_structure::{
        bag::{ArrayBag, Bag},
        undo::{stack::HistoryStack, Action, Undo},
    },
    BagError,
};

/// A bag whose insertions and removals can be undone and redone.
///
/// Every successful mutation records one [`Action`] on the undo stack and forgets whatever
/// was waiting on the redo stack, so history stays linear. [`Undo::undo`] moves the newest
/// action to the redo stack and applies its inverse to the bag; [`Undo::redo`] moves it back
/// and applies it again.
///
/// The wrapped bag is only reachable immutably. Mutating it by other means (e.g. through
/// [`UndoableBag::with_bag`] on a shared handle) desynchronizes the history, after which
/// `undo`/`redo` may report `false` for steps whose bookkeeping already happened.
#[derive(Debug, Clone)]
pub struct UndoableBag<T, B = ArrayBag<T>> {
    bag: B,
    undo_stack: HistoryStack<Action<T>>,
    redo_stack: HistoryStack<Action<T>>,
}

impl<T: Clone + PartialEq> Default for UndoableBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> UndoableBag<T> {
    pub fn new() -> Self {
        Self::with_bag(ArrayBag::new())
    }

    /// A bag that refuses to hold more than `capacity` entries.
    pub fn bounded(capacity: usize) -> Self {
        Self::with_bag(ArrayBag::bounded(capacity))
    }
}

impl<T, B> UndoableBag<T, B> {
    /// Starts tracking `bag` with empty history. Entries already in `bag` are kept as they are.
    pub fn with_bag(bag: B) -> Self {
        Self {
            bag,
            undo_stack: HistoryStack::new(),
            redo_stack: HistoryStack::new(),
        }
    }

    pub fn bag(&self) -> &B {
        &self.bag
    }

    pub fn into_inner(self) -> B {
        self.bag
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    fn record(&mut self, action: Action<T>) {
        self.redo_stack.clear();
        log::debug!(
            "Recorded {}, undo depth = {}",
            action.kind(),
            self.undo_stack.len() + 1
        );
        self.undo_stack.push(action);
    }
}

impl<T: Clone, B: Bag<T>> UndoableBag<T, B> {
    pub fn add(&mut self, entry: T) -> bool {
        if !self.bag.add(entry.clone()) {
            return false;
        }
        self.record(Action::Insert(entry));
        true
    }

    /// Removes some entry; which of several candidates is picked is up to the wrapped bag.
    pub fn remove(&mut self) -> Option<T> {
        let removed = self.bag.remove()?;
        self.record(Action::Remove(removed.clone()));
        Some(removed)
    }

    pub fn remove_entry(&mut self, entry: &T) -> bool {
        if !self.bag.remove_entry(entry) {
            return false;
        }
        self.record(Action::Remove(entry.clone()));
        true
    }

    /// Always fails: emptying the bag is not a single reversible action.
    pub fn clear(&mut self) -> Result<(), BagError> {
        Err(BagError::Unsupported("clear"))
    }

    pub fn len(&self) -> usize {
        self.bag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bag.is_empty()
    }

    pub fn contains(&self, entry: &T) -> bool {
        self.bag.contains(entry)
    }

    pub fn frequency_of(&self, entry: &T) -> usize {
        self.bag.frequency_of(entry)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.bag.to_vec()
    }
}

impl<T: Clone, B: Bag<T>> Undo for UndoableBag<T, B> {
    fn undo(&mut self) -> bool {
        let action = match self.undo_stack.pop() {
            Some(action) => action,
            None => return false,
        };
        log::trace!("Undoing {}", action.kind());
        let done = match &action {
            Action::Insert(v) => self.bag.remove_entry(v),
            Action::Remove(v) => self.bag.add(v.clone()),
        };
        if !done {
            log::warn!(
                "Failed to revert a recorded {}; the bag no longer matches its history",
                action.kind()
            );
        }
        self.redo_stack.push(action);
        done
    }

    fn redo(&mut self) -> bool {
        let action = match self.redo_stack.pop() {
            Some(action) => action,
            None => return false,
        };
        log::trace!("Redoing {}", action.kind());
        let done = match &action {
            Action::Insert(v) => self.bag.add(v.clone()),
            Action::Remove(v) => self.bag.remove_entry(v),
        };
        if !done {
            log::warn!(
                "Failed to re-apply a recorded {}; the bag no longer matches its history",
                action.kind()
            );
        }
        self.undo_stack.push(action);
        done
    }
}
