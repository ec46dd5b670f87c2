//! Unified error type for tensix.
//!
//! Wraps the core index errors and the codec errors behind one enum so
//! callers embedding tensix in a larger tensor library handle a single
//! type.

use thiserror::Error;

use tensix_codec::CodecError;
use tensix_core::IndexError;

/// All tensix errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Grammar, invariant, or option-lookup failure from the core types.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Persistence failure (I/O, corrupt record, unknown kind tag).
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for tensix operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for malformed name-grammar input.
    pub fn is_grammar(&self) -> bool {
        matches!(
            self,
            Error::Index(
                IndexError::BadPrimeFragment { .. }
                    | IndexError::MisplacedWildcard { .. }
                    | IndexError::WildcardInName { .. }
                    | IndexError::PrimesBeforeWildcard { .. }
            )
        )
    }

    /// True when an option-dictionary key was missing.
    pub fn is_missing_arg(&self) -> bool {
        matches!(self, Error::Index(IndexError::MissingArg { .. }))
    }
}
