// NOTE: fpi2nite output contract
//
// - One line per event, `<name>, <isot>, <ra>, <dec>`, streams concatenated in
//   canonical order (ASAS-SN, Fermi-GBM, Swift-BAT)
// - Nothing is written unless every selected stream succeeded; a failing stream
//   is reported by name and the run exits non-zero
// - Logs and notices go to stderr so `-o -` can be piped

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod services;

pub use args::{Cli, OutputFormat};
pub use commands::run;
