//! Repository Implementations

mod tree;

pub use tree::{JsonTreeRepository, STDIN_PATH};
