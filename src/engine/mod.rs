//! Execution substrate
//!
//! The pipeline is generic over [`ExecutionEngine`]; the rayon engine is the
//! production substrate and the sequential engine a single-threaded reference.

mod rayon_engine;
mod sequential;
mod traits;

pub use rayon_engine::RayonEngine;
pub use sequential::SequentialEngine;
pub use traits::{ExecutionEngine, Materialized, AGGREGATE_CHUNK};
