pub mod engine;

pub use engine::{QueryEngine, prefix_range};
