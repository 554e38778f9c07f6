pub mod config;
pub mod engine;
pub mod error;
pub mod learning;
pub mod patterns;
pub mod segment;
pub mod storage;

pub use engine::MorphEngine;
pub use error::{MorphError, Result};
pub use learning::LearningStats;
pub use segment::{Decomposition, MorphemeComponent, MorphemeKind};
pub use storage::{FileStorage, MemoryStorage, Storage};
