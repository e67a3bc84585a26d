//! Testing infrastructure for fpi2nite integration tests.
//!
//! - `fixtures`: VOEvent packet builders shaped like the real ASAS-SN, Fermi-GBM
//!   and Swift-BAT notices
//! - `index`: `FakeIndex`, an in-memory archive that applies filters the way
//!   voeventdb does and records what it was asked

pub mod fixtures;
pub mod index;

pub use fixtures::{PacketBuilder, asassn_packet, fermi_packet, swift_packet};
pub use index::FakeIndex;
