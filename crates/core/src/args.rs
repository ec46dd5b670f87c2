//! Named-option dictionaries.
//!
//! Library entry points take an [`Args`] dictionary for optional named
//! parameters. The index subsystem contributes the index-kind interop:
//! storing an [`IndexKind`] under a key and reading it back, with or
//! without a default.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};
use crate::kind::IndexKind;

/// A value stored in an [`Args`] dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArgValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer option.
    Int(i64),
    /// Text option (index kinds are stored as their names).
    Str(String),
}

impl ArgValue {
    /// The stored type's name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgValue::Bool(_) => "Bool",
            ArgValue::Int(_) => "Int",
            ArgValue::Str(_) => "Str",
        }
    }
}

/// A string-keyed dictionary of named options.
///
/// # Examples
///
/// ```
/// use tensix_core::{Args, IndexKind};
/// use tensix_core::args::{add_index_kind, get_index_kind, get_index_kind_or};
///
/// let mut args = Args::new();
/// add_index_kind(&mut args, "kind", IndexKind::Link);
///
/// assert_eq!(get_index_kind(&args, "kind")?, IndexKind::Link);
/// assert_eq!(get_index_kind_or(&args, "other", IndexKind::All)?, IndexKind::All);
/// assert!(get_index_kind(&args, "other").is_err());
/// # Ok::<(), tensix_core::IndexError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Args {
    vals: HashMap<String, ArgValue>,
}

impl Args {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an option, replacing any previous value under `key`.
    pub fn add(&mut self, key: impl Into<String>, val: ArgValue) {
        self.vals.insert(key.into(), val);
    }

    /// Whether `key` is present.
    pub fn defined(&self, key: &str) -> bool {
        self.vals.contains_key(key)
    }

    /// Read a boolean option. Absent key or other type is an error.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        match self.get(key)? {
            ArgValue::Bool(b) => Ok(*b),
            other => Err(wrong_type(key, "Bool", other)),
        }
    }

    /// Read an integer option. Absent key or other type is an error.
    pub fn get_int(&self, key: &str) -> Result<i64> {
        match self.get(key)? {
            ArgValue::Int(i) => Ok(*i),
            other => Err(wrong_type(key, "Int", other)),
        }
    }

    /// Read a text option. Absent key or other type is an error.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        match self.get(key)? {
            ArgValue::Str(s) => Ok(s),
            other => Err(wrong_type(key, "Str", other)),
        }
    }

    fn get(&self, key: &str) -> Result<&ArgValue> {
        self.vals.get(key).ok_or_else(|| IndexError::MissingArg {
            key: key.to_string(),
        })
    }
}

fn wrong_type(key: &str, expected: &'static str, actual: &ArgValue) -> IndexError {
    IndexError::WrongArgType {
        key: key.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

/// Store an index kind under `key` (by its name).
pub fn add_index_kind(args: &mut Args, key: impl Into<String>, kind: IndexKind) {
    args.add(key, ArgValue::Str(kind.name().to_string()));
}

/// Read an index kind stored under `key`. Absent key is an error;
/// sentinel kinds are legal here (they are query/default values).
pub fn get_index_kind(args: &Args, key: &str) -> Result<IndexKind> {
    IndexKind::from_str(args.get_str(key)?)
}

/// Read an index kind stored under `key`, falling back to `default` only
/// when the key is absent. A present but wrong-typed value or an unknown
/// kind name is still an error.
pub fn get_index_kind_or(args: &Args, key: &str, default: IndexKind) -> Result<IndexKind> {
    if !args.defined(key) {
        return Ok(default);
    }
    get_index_kind(args, key)
}
