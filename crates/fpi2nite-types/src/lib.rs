pub mod error;
pub mod record;
pub mod stream;
mod util;
pub mod window;

pub use error::{Error, Result};
pub use record::*;
pub use stream::*;
pub use util::*;
pub use window::*;
