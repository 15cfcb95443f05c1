pub mod engine;
pub mod enrich;
pub mod grouping;
pub mod loader;
pub mod partition;
pub mod pipeline;
pub mod plan;
pub mod slots;
pub mod writer;

pub use crate::domain::model::{Schedule, SourceTables};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
