pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{engine::SchedulerEngine, partition::Partitioner, pipeline::SchedulePipeline};
pub use utils::error::{Result, ScheduleError};
