//! Text normalization: byte-encoding detection and cleanup.

pub mod clean;
pub mod encoding;

pub use clean::clean;
pub use encoding::normalize;
