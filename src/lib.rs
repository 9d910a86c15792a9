use thiserror::Error;

pub use data_structure::{
    bag::{ArrayBag, Bag, HashBag},
    undo::{Action, Undo},
};
pub use undoable::UndoableBag;

pub mod data_structure;
pub mod script;
mod undoable;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum BagError {
    #[error("`{0}` is not supported by a bag with undo history")]
    Unsupported(&'static str),
}
