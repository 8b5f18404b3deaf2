pub mod consts;
pub mod errors;
pub mod reader;
pub mod stats;

// Re-exports
pub use errors::*;
pub use reader::*;
pub use stats::*;
