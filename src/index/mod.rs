pub mod build;
pub mod compress;
pub mod reader;
pub mod sort;
pub mod suffix;
pub mod types;
pub mod writer;

pub use reader::{DecodeError, load_index};
pub use types::{Index, IndexConfig, PathId, SuffixEntry};
pub use writer::save_index;
