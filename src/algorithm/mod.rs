pub mod traits;
pub mod find_path;

pub use traits::{PathFindingAlgorithm, SearchStats};
