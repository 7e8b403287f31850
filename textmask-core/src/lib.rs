//! core functionality for two reversible text-obfuscation codecs
//!
//! Neither scheme is cryptography; both are reversible encodings keyed by
//! a small embedded parameter or a fixed substitution table.
//!
//! # Modules
//!
//! - `keymix`: multiplicative key-embedding codec
//! - `submap`: substitution-mapping codec
//! - `error`: the shared failure taxonomy

pub mod error;
pub mod keymix;
pub mod submap;

// Re-export commonly used items
pub use error::Error;
