//! Index kinds.
//!
//! Every Index carries a kind tag used to scope priming and matching
//! operations to one family of legs (physical site legs, bond/link legs,
//! auxiliary legs). Two sentinel values exist for query positions only:
//! `All` matches any kind, `Null` marks the default-initialized Index.
//! Neither sentinel may be stored in a constructed Index.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IndexError;

/// Kind tag of a tensor leg.
///
/// `Site`, `Link`, and `Aux` are storable kinds. `All` and `Null` are
/// sentinels: valid as match parameters and option defaults, rejected by
/// the [`Index`] constructor.
///
/// [`Index`]: crate::Index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexKind {
    /// A physical (site) leg.
    Site,
    /// A bond/link leg connecting two tensors.
    Link,
    /// An auxiliary leg (environment, boundary, scratch).
    Aux,
    /// Sentinel: matches every kind. Query positions only.
    All,
    /// Sentinel: the kind of a default-initialized Index. Query
    /// positions only.
    Null,
}

impl IndexKind {
    /// All storable (non-sentinel) kinds.
    pub const STORABLE: [IndexKind; 3] = [IndexKind::Site, IndexKind::Link, IndexKind::Aux];

    /// The kind name as it appears in option dictionaries and errors.
    pub const fn name(self) -> &'static str {
        match self {
            IndexKind::Site => "Site",
            IndexKind::Link => "Link",
            IndexKind::Aux => "Aux",
            IndexKind::All => "All",
            IndexKind::Null => "Null",
        }
    }

    /// True for the `All`/`Null` query sentinels.
    pub const fn is_sentinel(self) -> bool {
        matches!(self, IndexKind::All | IndexKind::Null)
    }

    /// Stable wire tag for persistence. Sentinels have no tag: they can
    /// never reach a serialized Index.
    pub const fn tag(self) -> Option<u32> {
        match self {
            IndexKind::Site => Some(1),
            IndexKind::Link => Some(2),
            IndexKind::Aux => Some(3),
            IndexKind::All | IndexKind::Null => None,
        }
    }

    /// Inverse of [`tag`](Self::tag). Unknown tags yield `None`.
    pub const fn from_tag(tag: u32) -> Option<IndexKind> {
        match tag {
            1 => Some(IndexKind::Site),
            2 => Some(IndexKind::Link),
            3 => Some(IndexKind::Aux),
            _ => None,
        }
    }

    /// True iff `self` matches `query`: equal kinds always match, and the
    /// `All` sentinel in query position matches every kind.
    pub const fn matches(self, query: IndexKind) -> bool {
        matches!(query, IndexKind::All) || (self as u32) == (query as u32)
    }
}

impl Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndexKind {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Site" => Ok(IndexKind::Site),
            "Link" => Ok(IndexKind::Link),
            "Aux" => Ok(IndexKind::Aux),
            "All" => Ok(IndexKind::All),
            "Null" => Ok(IndexKind::Null),
            other => Err(IndexError::UnknownKind {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for kind in [
            IndexKind::Site,
            IndexKind::Link,
            IndexKind::Aux,
            IndexKind::All,
            IndexKind::Null,
        ] {
            assert_eq!(kind.name().parse::<IndexKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_name() {
        let err = "Bond".parse::<IndexKind>().unwrap_err();
        assert_eq!(
            err,
            IndexError::UnknownKind {
                name: "Bond".to_string()
            }
        );
    }

    #[test]
    fn test_tag_roundtrip_for_storable_kinds() {
        for kind in IndexKind::STORABLE {
            let tag = kind.tag().unwrap();
            assert_eq!(IndexKind::from_tag(tag), Some(kind));
        }
    }

    #[test]
    fn test_sentinels_have_no_tag() {
        assert_eq!(IndexKind::All.tag(), None);
        assert_eq!(IndexKind::Null.tag(), None);
    }

    #[test]
    fn test_all_matches_everything() {
        for kind in IndexKind::STORABLE {
            assert!(kind.matches(IndexKind::All));
            assert!(kind.matches(kind));
        }
        assert!(!IndexKind::Site.matches(IndexKind::Link));
    }
}
