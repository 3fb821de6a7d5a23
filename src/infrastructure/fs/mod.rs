//! File System Output

mod attribution;

pub use attribution::{write_atomic, AttributionWriter};
