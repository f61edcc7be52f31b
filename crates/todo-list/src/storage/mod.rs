//! Storage layer for task persistence.

mod file;
mod traits;

pub use file::JsonFileStorage;
pub use traits::Storage;
