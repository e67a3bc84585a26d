// Error types
pub mod error;

// Packet parsing
pub mod packet;

// Name resolution state shared by the stream policies
pub mod naming;

// Trait-based architecture (public API)
pub mod traits;

// Stream policies
pub mod asassn;
pub mod fermi;
pub mod swift;

// Stream registry
pub mod registry;

// Fetch-parse-resolve loop
pub mod extractor;

pub use asassn::AsassnPolicy;
pub use extractor::{Extractor, FailurePolicy};
pub use fermi::FermiPolicy;
pub use naming::{AssignedNames, NameResolution, ResolvedName, SUFFIX_ALPHABET, next_suffix};
pub use packet::{Param, VoEventPacket, extract_coords};
pub use registry::{StreamMetadata, all_policies, get_stream_metadata, policy_for};
pub use swift::SwiftPolicy;
pub use traits::StreamPolicy;

// Error types
pub use error::{Error, Result};
