//! CLI command handlers, one per file.

mod codes;
mod convert;
mod inspect;

pub use codes::run_codes;
pub use convert::run_convert;
pub use inspect::run_inspect;
