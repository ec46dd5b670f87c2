//! Convenient imports for tensix.
//!
//! ```
//! use tensix::prelude::*;
//!
//! let leg = Index::new("bond", 8, IndexKind::Link)?;
//! assert!(leg.is_valid());
//! # Ok::<(), tensix::Error>(())
//! ```

// Error handling
pub use crate::{Error, Result};

// Core types
pub use crate::{name_match, sim, Index, IndexId, IndexKind, IndexVal};

// Option dictionaries
pub use crate::{add_index_kind, get_index_kind, get_index_kind_or, ArgValue, Args};

// Persistence
pub use crate::{read_index, write_index, IdWidth, ReadOptions};
