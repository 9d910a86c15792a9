use derive_more::Display;

pub mod stack;

/// Something whose recent mutations can be stepped back and forth.
pub trait Undo {
    /// Reverts the most recent recorded mutation.
    /// Returns `false` when there was nothing to undo, or the reverting step itself failed.
    fn undo(&mut self) -> bool;
    /// Re-applies the most recently undone mutation.
    /// Returns `false` when there was nothing to redo, or the re-applied step itself failed.
    fn redo(&mut self) -> bool;
}

/// One reversible mutation of a bag.
#[derive(Debug, Clone, Eq, PartialEq, Display)]
pub enum Action<T> {
    #[display(fmt = "insert {}", _0)]
    Insert(T),
    #[display(fmt = "remove {}", _0)]
    Remove(T),
}

impl<T> Action<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Insert(_) => "insertion",
            Action::Remove(_) => "removal",
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Action::Insert(v) | Action::Remove(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Action::Insert(v) | Action::Remove(v) => v,
        }
    }
}
