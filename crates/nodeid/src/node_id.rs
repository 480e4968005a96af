//! Fixed-length node identifier.
//!
//! A `NodeId` wraps the digest bytes that name a node. The bytes are supplied
//! by the caller (this crate never hashes anything) and must have one of the
//! lengths in [`VALID_LENGTHS`]. Once built, an id never changes: callers only
//! ever see `&[u8]` views or owned copies.

use crate::error::{Error, InvalidReason, Result};
use bytes::Bytes;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Length in bytes of a SHA-1 digest.
pub const SHA1_BIN_LEN: usize = 20;
/// Length in bytes of a SHA-2 256-bit digest.
pub const SHA2_BIN_LEN: usize = 32;
/// Length in bytes of a SHA-3 256-bit digest.
pub const SHA3_BIN_LEN: usize = 32;

/// Byte lengths a node id may have.
///
/// SHA-2 and SHA-3 share a length, so a 32-byte id does not say which
/// family produced it.
pub const VALID_LENGTHS: [usize; 2] = [SHA1_BIN_LEN, SHA2_BIN_LEN];

/// Immutable identifier for a node, backed by a digest-sized byte buffer.
///
/// Equality, hashing and ordering all follow the raw bytes. Ordering is
/// unsigned lexicographic, so a shorter id that is a prefix of a longer one
/// sorts first.
#[derive(PartialEq, Eq, Hash)]
pub struct NodeId {
    bytes: Bytes,
}

impl NodeId {
    /// Build a node id from a copy of `bytes`.
    ///
    /// Fails with [`Error::InvalidNodeId`] if `bytes` is empty or its length
    /// is not in [`VALID_LENGTHS`].
    pub fn new(bytes: &[u8]) -> Result<Self> {
        check(bytes)?;
        Ok(Self {
            bytes: Bytes::copy_from_slice(bytes),
        })
    }

    /// Parse a node id from a hex string (either case).
    pub fn from_hex(s: &str) -> Result<Self> {
        let raw = hex::decode(s)?;
        check(&raw)?;
        Ok(Self {
            bytes: Bytes::from(raw),
        })
    }

    /// True if `candidate` would make a valid node id.
    pub fn is_valid(candidate: &[u8]) -> bool {
        check(candidate).is_ok()
    }

    /// An owned copy of the id bytes.
    pub fn value(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Borrowed, read-only view of the id bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the id. Always one of [`VALID_LENGTHS`].
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

fn check(bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        return Err(Error::InvalidNodeId(InvalidReason::Empty));
    }
    if !VALID_LENGTHS.contains(&bytes.len()) {
        return Err(Error::InvalidNodeId(InvalidReason::Length(bytes.len())));
    }
    Ok(())
}

// A clone gets its own allocation rather than sharing the `Bytes` refcount.
impl Clone for NodeId {
    fn clone(&self) -> Self {
        Self {
            bytes: Bytes::copy_from_slice(&self.bytes),
        }
    }
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.bytes))
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self)
    }
}

impl FromStr for NodeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for NodeId {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<Vec<u8>> for NodeId {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        check(&value)?;
        Ok(Self {
            bytes: Bytes::from(value),
        })
    }
}

impl From<NodeId> for Vec<u8> {
    fn from(id: NodeId) -> Self {
        id.bytes.to_vec()
    }
}

impl From<NodeId> for Bytes {
    fn from(id: NodeId) -> Self {
        id.bytes
    }
}
