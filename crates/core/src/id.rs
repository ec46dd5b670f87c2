//! Index identities.
//!
//! Every Index constructed in a process gets a 64-bit identity that is
//! unique for the lifetime of that process. Identity 0 is reserved for
//! the default-initialized Index. Serialized identities are opaque bits
//! used only for equality after deserialization; there is no cross-process
//! uniqueness guarantee.

use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Opaque identity of an [`Index`].
///
/// Minted once per construction and immutable afterwards. Two Index
/// values share an identity only if one was copied from the other.
///
/// [`Index`]: crate::Index
///
/// # Examples
///
/// ```
/// use tensix_core::IndexId;
///
/// let a = IndexId::generate();
/// let b = IndexId::generate();
/// assert_ne!(a, b);
/// assert!(!a.is_default());
/// assert!(IndexId::DEFAULT.is_default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IndexId(u64);

/// Process-wide generator state. Seeded randomly so identities written by
/// different process runs are unlikely to collide by accident, then
/// advanced as a counter so identities never collide within one run.
static GENERATOR: Lazy<AtomicU64> = Lazy::new(|| AtomicU64::new(rand::random::<u64>() | 1));

impl IndexId {
    /// The reserved identity of a default-initialized Index.
    pub const DEFAULT: IndexId = IndexId(0);

    /// Mint a fresh identity, unique within this process run and never 0.
    pub fn generate() -> Self {
        loop {
            let id = GENERATOR.fetch_add(1, Ordering::Relaxed);
            // fetch_add wraps; skip the reserved value.
            if id != 0 {
                return IndexId(id);
            }
        }
    }

    /// Rebuild an identity from its raw bits (deserialization path).
    pub const fn from_raw(raw: u64) -> Self {
        IndexId(raw)
    }

    /// The raw 64-bit value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// True iff this is the reserved default identity.
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }
}
