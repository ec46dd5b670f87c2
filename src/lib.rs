//! # Tensix
//!
//! Labeled-leg index types for tensor algebra.
//!
//! Tensix provides the identity layer a tensor library hangs its
//! contraction, comparison, and persistence logic on: each tensor leg is
//! tagged with an [`Index`] carrying a bare name, a prime level, a
//! dimension, a kind, and a process-unique identity, so structurally
//! identical tensors behave identically regardless of storage order.
//!
//! ## Quick Start
//!
//! ```
//! use tensix::prelude::*;
//!
//! // A two-dimensional site leg and its primed (bra) copy.
//! let s = Index::new("S", 2, IndexKind::Site)?;
//! let s_bra = s.at(1);
//!
//! assert_ne!(s, s_bra);              // primes distinguish...
//! assert!(s.no_prime_equals(&s_bra)); // ...but identity is shared
//! assert_eq!(s_bra.name(), "S'");
//!
//! // Wildcard patterns match a name at a level or above.
//! assert!(name_match(&s_bra, "S*")?);
//! assert!(!name_match(&s, "S*'1")?);
//! # Ok::<(), tensix::Error>(())
//! ```
//!
//! ## Persistence
//!
//! Indices serialize through [`write_index`]/[`read_index`] as part of a
//! larger object stream; files from the old 32-bit identity generator
//! are read with [`ReadOptions::legacy32`].
//!
//! [`write_index`]: tensix_codec::write_index
//! [`read_index`]: tensix_codec::read_index
//! [`ReadOptions::legacy32`]: tensix_codec::ReadOptions::legacy32

#![warn(missing_docs)]

mod error;

pub mod prelude;

pub use error::{Error, Result};

// Core types
pub use tensix_core::{
    add_index_kind, get_index_kind, get_index_kind_or, name_match, sim, ArgValue, Args, Index,
    IndexId, IndexKind, IndexVal,
};
pub use tensix_core::{args, config, prime};

// Persistence
pub use tensix_codec::{read_index, write_index, IdWidth, ReadOptions};
