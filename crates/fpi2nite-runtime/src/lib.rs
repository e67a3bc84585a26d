pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{Config, ExtractConfig, resolve_config_path};
pub use error::{Error, Result};
pub use pipeline::{RunRequest, StreamOutcome, StreamSelection, connect, count_streams, run_streams};
