//! Node identifiers for peer-to-peer and storage layers.
//!
//! This crate provides a single value type, [`NodeId`]: an immutable byte
//! string whose length matches a supported digest size (SHA-1, SHA-2 256 or
//! SHA-3 256). Digests are computed elsewhere; this crate only validates,
//! compares and renders them.
//!
//! ```
//! use nodeid::{NodeId, SHA1_BIN_LEN};
//!
//! let id = NodeId::new(&[0u8; SHA1_BIN_LEN]).unwrap();
//! assert_eq!(id.to_string(), "0".repeat(40));
//! assert!(!NodeId::is_valid(b"bar"));
//! ```

pub mod error;
pub mod node_id;
#[cfg(feature = "serde")]
mod serde_hex;

pub use error::{Error, InvalidReason, Result};
pub use node_id::{NodeId, SHA1_BIN_LEN, SHA2_BIN_LEN, SHA3_BIN_LEN, VALID_LENGTHS};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
