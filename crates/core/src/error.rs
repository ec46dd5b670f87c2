//! Error types for the index subsystem.
//!
//! Three families of failure, all surfaced synchronously:
//! - grammar errors from the prime-level/wildcard name syntax,
//! - invariant violations (negative prime levels, sentinel kinds,
//!   default-initialized indices where a valid one is required),
//! - lookup errors from the named-option dictionary.
//!
//! None of these are retryable: they indicate programmer error or a
//! corrupt input, and a failed operation leaves its target unchanged.

use thiserror::Error;

/// All errors produced by index construction, mutation, and matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A prime-level fragment was malformed (e.g. `''2`, or text that
    /// does not start with `'`).
    #[error("invalid prime-level fragment `{fragment}`")]
    BadPrimeFragment {
        /// The offending fragment text.
        fragment: String,
    },

    /// A `*` appeared somewhere other than the end of a name or before
    /// a trailing prime-level fragment.
    #[error("misplaced wildcard in `{name}`")]
    MisplacedWildcard {
        /// The raw name that was being parsed.
        name: String,
    },

    /// A wildcard was supplied where only a concrete name is allowed
    /// (the Index constructor).
    #[error("wildcard `*` not allowed when constructing an Index: `{name}`")]
    WildcardInName {
        /// The raw name that was being parsed.
        name: String,
    },

    /// A rename pattern carried explicit primes before the wildcard,
    /// e.g. `a'2*`.
    #[error("primes may not precede `*` in `{name}`")]
    PrimesBeforeWildcard {
        /// The raw rename pattern.
        name: String,
    },

    /// Index names are single-byte strings; non-ASCII input is rejected.
    #[error("index name `{name}` is not ASCII")]
    NonAsciiName {
        /// The rejected name.
        name: String,
    },

    /// A kind name did not match any known [`IndexKind`].
    ///
    /// [`IndexKind`]: crate::IndexKind
    #[error("unknown index kind `{name}`")]
    UnknownKind {
        /// The unrecognized kind name.
        name: String,
    },

    /// An operation would have driven the prime level below zero.
    #[error("prime level would become negative ({level})")]
    NegativePrimeLevel {
        /// The level the operation would have produced.
        level: i64,
    },

    /// An operation would have pushed the prime level past the
    /// representable range.
    #[error("prime level {level} exceeds the representable range")]
    PrimeLevelOverflow {
        /// The level the operation would have produced.
        level: u64,
    },

    /// The `All` or `Null` sentinel kinds are query parameters only and
    /// may not be stored in an Index.
    #[error("cannot construct an Index with sentinel kind {kind}")]
    SentinelKind {
        /// The rejected sentinel kind name.
        kind: &'static str,
    },

    /// A default-initialized (identity 0) Index was used where a valid
    /// Index is required.
    #[error("operation requires a valid (non-default) Index")]
    DefaultIndex,

    /// Index dimensions are at least 1.
    #[error("index dimension must be >= 1")]
    ZeroDim,

    /// An option-dictionary key was absent and no default was supplied.
    #[error("option `{key}` not found")]
    MissingArg {
        /// The missing key.
        key: String,
    },

    /// An option-dictionary value had a different type than requested.
    #[error("option `{key}` has type {actual}, expected {expected}")]
    WrongArgType {
        /// The key that was looked up.
        key: String,
        /// The type the caller asked for.
        expected: &'static str,
        /// The type actually stored.
        actual: &'static str,
    },
}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;
