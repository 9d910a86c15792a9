pub mod bag;
pub mod undo;
