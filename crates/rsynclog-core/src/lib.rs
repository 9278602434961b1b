pub mod config;
pub mod logging;

pub mod convert;
pub mod error;
pub mod exit_codes;
pub mod extractor;
pub mod record;
pub mod segmenter;

pub use error::RsyncLogError;
