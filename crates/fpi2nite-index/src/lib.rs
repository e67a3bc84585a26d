// Remote VOEvent archive client
// Lists IVORNs by filter and fetches packet XML, nothing is cached

mod client;
mod config;
pub mod error;
mod records;
mod voeventdb;

// Public API
pub use client::VoEventIndex;
pub use config::{DEFAULT_BASE_URL, IndexConfig};
pub use error::{Error, Result};
pub use records::ApiResponse;
pub use voeventdb::VoeventDbClient;
