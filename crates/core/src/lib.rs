//! Core types for the tensix index subsystem.
//!
//! This crate defines the fundamental types for labeling tensor legs:
//! - [`Index`]: a named, dimensioned leg with a process-unique identity
//! - [`IndexVal`]: an Index paired with a coordinate along its leg
//! - [`IndexKind`]: the kind tag, with `All`/`Null` query sentinels
//! - [`IndexId`]: the opaque identity minted once per construction
//! - the prime-level name grammar in [`prime`]
//! - the named-option dictionary in [`args`]

#![warn(missing_docs)]

pub mod args;
pub mod config;
pub mod error;
pub mod prime;

mod id;
mod index;
mod kind;

pub use args::{add_index_kind, get_index_kind, get_index_kind_or, ArgValue, Args};
pub use error::{IndexError, Result};
pub use id::IndexId;
pub use index::{name_match, sim, Index, IndexVal};
pub use kind::IndexKind;
