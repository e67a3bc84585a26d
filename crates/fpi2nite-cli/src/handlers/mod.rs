pub mod count;
pub mod fetch;
