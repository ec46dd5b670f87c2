//! The `Index` type: a named, dimensioned tensor leg.
//!
//! An Index labels one axis of a tensor. Contraction and comparison work
//! over the Index values attached to a tensor rather than over storage
//! order, so each Index carries a process-unique identity, a bare name,
//! a prime level (a versioning tag distinguishing otherwise-equal legs,
//! e.g. bra/ket copies), a dimension, and a kind tag.
//!
//! # Examples
//!
//! ```
//! use tensix_core::{Index, IndexKind};
//!
//! let s = Index::new("S", 2, IndexKind::Site)?;
//! assert_eq!(s.name(), "S");
//! assert_eq!(s.at(2).name(), "S''");
//!
//! // Copies keep the identity; priming distinguishes them.
//! let bra = s.at(1);
//! assert_ne!(s, bra);
//! assert!(s.no_prime_equals(&bra));
//! # Ok::<(), tensix_core::IndexError>(())
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{IndexError, Result};
use crate::id::IndexId;
use crate::kind::IndexKind;
use crate::prime::{put_primes, split_raw_name, PRIME, WILDCARD};

/// A labeled tensor leg.
///
/// Identity and dimension are fixed at construction; the prime level and
/// name may be changed through the dedicated mutators. The default value
/// (identity 0) is a placeholder that participates in no equality with a
/// real Index and cannot be serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    id: IndexId,
    prime_level: u32,
    dim: u64,
    kind: IndexKind,
    name: String,
}

impl Default for Index {
    fn default() -> Self {
        Index {
            id: IndexId::DEFAULT,
            prime_level: 0,
            dim: 1,
            kind: IndexKind::Null,
            name: String::new(),
        }
    }
}

fn check_bare_name(name: &str) -> Result<()> {
    if !name.is_ascii() {
        return Err(IndexError::NonAsciiName {
            name: name.to_string(),
        });
    }
    Ok(())
}

impl Index {
    /// Construct an Index with prime level 0.
    ///
    /// Equivalent to [`with_prime_level`](Self::with_prime_level) with a
    /// level of 0. A prime suffix in `name` (e.g. `"a''"`) sets the level
    /// instead.
    pub fn new(name: &str, dim: u64, kind: IndexKind) -> Result<Self> {
        Self::with_prime_level(name, dim, kind, 0)
    }

    /// Construct an Index, minting a fresh identity.
    ///
    /// Fails if `kind` is a sentinel, `dim` is 0, `name` is not ASCII, or
    /// `name` contains a wildcard. If `name` carries an explicit prime
    /// suffix its level overrides `prime_level`.
    pub fn with_prime_level(
        name: &str,
        dim: u64,
        kind: IndexKind,
        prime_level: u32,
    ) -> Result<Self> {
        if kind.is_sentinel() {
            return Err(IndexError::SentinelKind { kind: kind.name() });
        }
        if dim == 0 {
            return Err(IndexError::ZeroDim);
        }
        check_bare_name(name)?;

        let parsed = split_raw_name(name)?;
        if parsed.wildcard {
            return Err(IndexError::WildcardInName {
                name: name.to_string(),
            });
        }
        let level = if parsed.prime_level != 0 {
            parsed.prime_level
        } else {
            prime_level
        };

        Ok(Index {
            id: IndexId::generate(),
            prime_level: level,
            dim,
            kind,
            name: parsed.name,
        })
    }

    /// Rebuild an Index from stored fields without minting an identity.
    ///
    /// This is the deserialization entry point. The same construction
    /// invariants apply, plus the identity must be nonzero and the name
    /// must already be bare (no prime or wildcard markers).
    pub fn from_raw_parts(
        id: IndexId,
        prime_level: u32,
        dim: u64,
        kind: IndexKind,
        name: String,
    ) -> Result<Self> {
        if id.is_default() {
            return Err(IndexError::DefaultIndex);
        }
        if kind.is_sentinel() {
            return Err(IndexError::SentinelKind { kind: kind.name() });
        }
        if dim == 0 {
            return Err(IndexError::ZeroDim);
        }
        check_bare_name(&name)?;
        if name.contains(PRIME) || name.contains(WILDCARD) {
            return Err(IndexError::MisplacedWildcard { name });
        }

        Ok(Index {
            id,
            prime_level,
            dim,
            kind,
            name,
        })
    }

    /// The identity minted at construction (0 for the default Index).
    pub fn id(&self) -> IndexId {
        self.id
    }

    /// Current prime level.
    pub fn prime_level(&self) -> u32 {
        self.prime_level
    }

    /// Size of the tensor leg this Index labels.
    pub fn dim(&self) -> u64 {
        self.dim
    }

    /// Kind tag.
    pub fn kind(&self) -> IndexKind {
        self.kind
    }

    /// The bare name, without any prime suffix.
    pub fn raw_name(&self) -> &str {
        &self.name
    }

    /// The display name: bare name plus rendered prime suffix.
    ///
    /// ```
    /// use tensix_core::{Index, IndexKind};
    ///
    /// let x = Index::with_prime_level("x", 3, IndexKind::Link, 5)?;
    /// assert_eq!(x.name(), "x'5");
    /// # Ok::<(), tensix_core::IndexError>(())
    /// ```
    pub fn name(&self) -> String {
        put_primes(&self.name, self.prime_level)
    }

    /// True iff this Index was really constructed (identity nonzero).
    pub fn is_valid(&self) -> bool {
        !self.id.is_default()
    }

    /// Replace the prime level.
    pub fn set_prime_level(&mut self, prime_level: u32) {
        self.prime_level = prime_level;
    }

    /// Add `inc` (possibly negative) to the prime level.
    ///
    /// Fails without mutating if the result would be negative.
    pub fn prime(&mut self, inc: i32) -> Result<()> {
        let level = i64::from(self.prime_level) + i64::from(inc);
        if level < 0 {
            return Err(IndexError::NegativePrimeLevel { level });
        }
        self.prime_level = u32::try_from(level)
            .map_err(|_| IndexError::PrimeLevelOverflow { level: level as u64 })?;
        Ok(())
    }

    /// Add `inc` to the prime level only if this Index's kind equals
    /// `kind` or `kind` is the `All` sentinel. A non-matching kind is a
    /// no-op, not an error.
    pub fn prime_if_kind(&mut self, kind: IndexKind, inc: i32) -> Result<()> {
        if self.kind.matches(kind) {
            self.prime(inc)?;
        }
        Ok(())
    }

    /// Add `inc` to the prime level only if `pattern` matches this Index
    /// (see [`name_match`]). Returns whether the increase was applied.
    pub fn prime_if_match(&mut self, pattern: &str, inc: i32) -> Result<bool> {
        if name_match(self, pattern)? {
            self.prime(inc)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// If the prime level equals `old` and `kind` matches this Index's
    /// kind (or is `All`), set the level to `new`.
    pub fn map_prime(&mut self, old: u32, new: u32, kind: IndexKind) {
        if self.prime_level == old && self.kind.matches(kind) {
            self.prime_level = new;
        }
    }

    /// Re-run the name grammar over `raw` and update this Index.
    ///
    /// Without a wildcard both the bare name and the prime level are
    /// replaced from the parse. With a wildcard the bare name is replaced
    /// and the decoded increase is added to the current level; explicit
    /// primes before the `*` are an error. A failed parse leaves the
    /// Index untouched.
    pub fn rename(&mut self, raw: &str) -> Result<()> {
        check_bare_name(raw)?;
        let parsed = split_raw_name(raw)?;
        if parsed.wildcard {
            if parsed.prime_level > 0 {
                return Err(IndexError::PrimesBeforeWildcard {
                    name: raw.to_string(),
                });
            }
            let level = self
                .prime_level
                .checked_add(parsed.prime_increase)
                .ok_or(IndexError::PrimeLevelOverflow {
                    level: u64::from(self.prime_level) + u64::from(parsed.prime_increase),
                })?;
            self.name = parsed.name;
            self.prime_level = level;
        } else {
            self.name = parsed.name;
            self.prime_level = parsed.prime_level;
        }
        Ok(())
    }

    /// A copy of this Index at a different prime level.
    #[must_use]
    pub fn at(&self, prime_level: u32) -> Index {
        let mut copy = self.clone();
        copy.prime_level = prime_level;
        copy
    }

    /// A copy with `inc` added to the prime level.
    pub fn primed(&self, inc: i32) -> Result<Index> {
        let mut copy = self.clone();
        copy.prime(inc)?;
        Ok(copy)
    }

    /// A copy renamed through the grammar, identity preserved.
    pub fn renamed(&self, raw: &str) -> Result<Index> {
        let mut copy = self.clone();
        copy.rename(raw)?;
        Ok(copy)
    }

    /// Pair this Index with a coordinate along its leg.
    pub fn val(&self, val: i64) -> Result<IndexVal> {
        IndexVal::new(self.clone(), val)
    }

    /// Identity-only equality: true iff the identities match, ignoring
    /// name and prime level. The prime-compatible form of `==`.
    pub fn no_prime_equals(&self, other: &Index) -> bool {
        self.id == other.id
    }
}

/// A fresh-identity lookalike of `index`: same dimension and kind, bare
/// name prefixed with `~`, the given prime level.
pub fn sim(index: &Index, prime_level: u32) -> Result<Index> {
    if !index.is_valid() {
        return Err(IndexError::DefaultIndex);
    }
    Index::with_prime_level(
        &format!("~{}", index.raw_name()),
        index.dim(),
        index.kind(),
        prime_level,
    )
}

/// Match an Index against a raw-name pattern.
///
/// Without a wildcard the pattern matches exactly one (bare name, prime
/// level) pair. With a wildcard it matches the bare name at the encoded
/// level or any higher level.
///
/// ```
/// use tensix_core::{name_match, Index, IndexKind};
///
/// let z = Index::with_prime_level("z", 2, IndexKind::Site, 4)?;
/// assert!(name_match(&z, "z'4")?);
/// assert!(name_match(&z, "z*'2")?);
/// assert!(!name_match(&z, "z*'5")?);
/// # Ok::<(), tensix_core::IndexError>(())
/// ```
pub fn name_match(index: &Index, pattern: &str) -> Result<bool> {
    let parsed = split_raw_name(pattern)?;
    if index.raw_name() != parsed.name {
        return Ok(false);
    }
    if parsed.wildcard {
        // The threshold may be written before or after the `*`; a
        // pattern carries at most one of the two.
        let threshold = parsed.prime_level.max(parsed.prime_increase);
        Ok(index.prime_level() >= threshold)
    } else {
        Ok(index.prime_level() == parsed.prime_level)
    }
}

impl PartialEq for Index {
    /// Equality over (identity, prime level, bare name). Dimension and
    /// kind are fixed per identity and need no separate comparison.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.prime_level == other.prime_level && self.name == other.name
    }
}

impl Eq for Index {}

impl Hash for Index {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.prime_level.hash(state);
        self.name.hash(state);
    }
}

impl Ord for Index {
    /// Canonical leg order: dimension, then identity, then prime level,
    /// then bare name. Used to sort tensor legs independently of the
    /// order they were supplied in.
    fn cmp(&self, other: &Self) -> Ordering {
        self.dim
            .cmp(&other.dim)
            .then(self.id.cmp(&other.id))
            .then(self.prime_level.cmp(&other.prime_level))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Index {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Index {
    /// Renders as `("name",dim,Kind)primes`, with a short identity
    /// segment when [`config::set_show_ids`] is enabled.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"{}\",{},{}", self.name, self.dim, self.kind)?;
        if config::show_ids() {
            write!(f, "|{}", self.id.raw() % 1000)?;
        }
        write!(f, ")")?;
        f.write_str(&crate::prime::format_prime_level(self.prime_level))
    }
}

/// An Index paired with a concrete coordinate along its leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexVal {
    /// The leg being addressed.
    pub index: Index,
    /// The coordinate value along that leg.
    pub val: i64,
}

impl IndexVal {
    /// Pair an Index with a coordinate. Fails on a default Index.
    pub fn new(index: Index, val: i64) -> Result<Self> {
        if !index.is_valid() {
            return Err(IndexError::DefaultIndex);
        }
        Ok(IndexVal { index, val })
    }
}

impl PartialEq<Index> for IndexVal {
    fn eq(&self, other: &Index) -> bool {
        &self.index == other
    }
}

impl PartialEq<IndexVal> for Index {
    fn eq(&self, other: &IndexVal) -> bool {
        self == &other.index
    }
}

impl Display for IndexVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexVal: val = {}, ind = {}", self.val, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_and_prime_display() {
        let mut s = Index::new("S", 2, IndexKind::Site).unwrap();
        s.prime(2).unwrap();
        assert_eq!(s.name(), "S''");
    }

    #[test]
    fn test_numeric_display_beyond_three() {
        let x = Index::with_prime_level("x", 3, IndexKind::Link, 5).unwrap();
        assert_eq!(x.name(), "x'5");
    }

    #[test]
    fn test_constructor_rejects_sentinels() {
        assert!(matches!(
            Index::new("a", 2, IndexKind::All),
            Err(IndexError::SentinelKind { kind: "All" })
        ));
        assert!(matches!(
            Index::new("a", 2, IndexKind::Null),
            Err(IndexError::SentinelKind { kind: "Null" })
        ));
    }

    #[test]
    fn test_constructor_rejects_wildcard_and_zero_dim() {
        assert!(matches!(
            Index::new("a*", 2, IndexKind::Site),
            Err(IndexError::WildcardInName { .. })
        ));
        assert!(matches!(
            Index::new("a", 0, IndexKind::Site),
            Err(IndexError::ZeroDim)
        ));
    }

    #[test]
    fn test_constructor_rejects_non_ascii() {
        assert!(matches!(
            Index::new("ψ", 2, IndexKind::Site),
            Err(IndexError::NonAsciiName { .. })
        ));
    }

    #[test]
    fn test_explicit_prime_suffix_overrides_argument() {
        let a = Index::with_prime_level("a''", 2, IndexKind::Site, 7).unwrap();
        assert_eq!(a.raw_name(), "a");
        assert_eq!(a.prime_level(), 2);

        let b = Index::with_prime_level("b", 2, IndexKind::Site, 7).unwrap();
        assert_eq!(b.prime_level(), 7);
    }

    #[test]
    fn test_prime_underflow_leaves_index_unchanged() {
        let mut a = Index::with_prime_level("a", 2, IndexKind::Site, 1).unwrap();
        let err = a.prime(-3).unwrap_err();
        assert_eq!(err, IndexError::NegativePrimeLevel { level: -2 });
        assert_eq!(a.prime_level(), 1);

        a.prime(-1).unwrap();
        assert_eq!(a.prime_level(), 0);
    }

    #[test]
    fn test_prime_if_kind() {
        let mut a = Index::new("a", 2, IndexKind::Site).unwrap();
        a.prime_if_kind(IndexKind::Link, 1).unwrap();
        assert_eq!(a.prime_level(), 0);
        a.prime_if_kind(IndexKind::Site, 1).unwrap();
        assert_eq!(a.prime_level(), 1);
        a.prime_if_kind(IndexKind::All, 2).unwrap();
        assert_eq!(a.prime_level(), 3);
    }

    #[test]
    fn test_prime_if_match() {
        let mut a = Index::with_prime_level("a", 2, IndexKind::Site, 2).unwrap();
        assert!(!a.prime_if_match("b*", 1).unwrap());
        assert_eq!(a.prime_level(), 2);
        assert!(a.prime_if_match("a*", 1).unwrap());
        assert_eq!(a.prime_level(), 3);
        assert!(a.prime_if_match("a'3", 1).unwrap());
        assert_eq!(a.prime_level(), 4);
    }

    #[test]
    fn test_map_prime() {
        let mut a = Index::with_prime_level("a", 2, IndexKind::Site, 2).unwrap();
        a.map_prime(1, 5, IndexKind::All);
        assert_eq!(a.prime_level(), 2);
        a.map_prime(2, 5, IndexKind::Link);
        assert_eq!(a.prime_level(), 2);
        a.map_prime(2, 5, IndexKind::All);
        assert_eq!(a.prime_level(), 5);
        a.map_prime(5, 0, IndexKind::Site);
        assert_eq!(a.prime_level(), 0);
    }

    #[test]
    fn test_rename_plain() {
        let mut a = Index::with_prime_level("a", 2, IndexKind::Site, 2).unwrap();
        a.rename("b'3").unwrap();
        assert_eq!(a.raw_name(), "b");
        assert_eq!(a.prime_level(), 3);
    }

    #[test]
    fn test_rename_wildcard_keeps_level() {
        let mut a = Index::with_prime_level("x", 2, IndexKind::Site, 2).unwrap();
        a.rename("y*").unwrap();
        assert_eq!(a.raw_name(), "y");
        assert_eq!(a.prime_level(), 2);
    }

    #[test]
    fn test_rename_wildcard_adds_increase() {
        let mut a = Index::with_prime_level("x", 2, IndexKind::Site, 2).unwrap();
        a.rename("y*'3").unwrap();
        assert_eq!(a.raw_name(), "y");
        assert_eq!(a.prime_level(), 5);
    }

    #[test]
    fn test_prime_level_arithmetic_overflow() {
        let mut a = Index::with_prime_level("a", 2, IndexKind::Site, u32::MAX).unwrap();
        assert!(matches!(
            a.prime(1),
            Err(IndexError::PrimeLevelOverflow { .. })
        ));
        assert_eq!(a.prime_level(), u32::MAX);

        let err = a.rename("b*'2").unwrap_err();
        assert!(matches!(err, IndexError::PrimeLevelOverflow { .. }));
        // Overflow detected before any field changes.
        assert_eq!(a.raw_name(), "a");
        assert_eq!(a.prime_level(), u32::MAX);
    }

    #[test]
    fn test_rename_rejects_primes_before_wildcard() {
        let mut a = Index::with_prime_level("x", 2, IndexKind::Site, 2).unwrap();
        let err = a.rename("y'2*").unwrap_err();
        assert!(matches!(err, IndexError::PrimesBeforeWildcard { .. }));
        // Failed parse leaves prior state intact.
        assert_eq!(a.raw_name(), "x");
        assert_eq!(a.prime_level(), 2);
    }

    #[test]
    fn test_rename_failure_is_atomic() {
        let mut a = Index::with_prime_level("x", 2, IndexKind::Site, 2).unwrap();
        assert!(a.rename("y''2").is_err());
        assert_eq!(a.raw_name(), "x");
        assert_eq!(a.prime_level(), 2);
    }

    #[test]
    fn test_rename_keeps_identity() {
        let a = Index::new("x", 2, IndexKind::Site).unwrap();
        let b = a.renamed("y").unwrap();
        assert!(a.no_prime_equals(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_name_match_exact() {
        let z = Index::with_prime_level("z", 2, IndexKind::Site, 4).unwrap();
        assert!(name_match(&z, "z'4").unwrap());
        assert!(!name_match(&z, "z'3").unwrap());
        assert!(!name_match(&z, "z").unwrap());
        assert!(!name_match(&z, "w'4").unwrap());
    }

    #[test]
    fn test_name_match_wildcard_threshold() {
        let z = Index::with_prime_level("z", 2, IndexKind::Site, 4).unwrap();
        assert!(name_match(&z, "z*").unwrap());
        assert!(name_match(&z, "z*'2").unwrap());
        assert!(name_match(&z, "z*'4").unwrap());
        assert!(!name_match(&z, "z*'5").unwrap());
        assert!(!name_match(&z, "w*").unwrap());
    }

    #[test]
    fn test_name_match_bad_grammar() {
        let z = Index::new("z", 2, IndexKind::Site).unwrap();
        assert!(name_match(&z, "z*x").is_err());
        assert!(name_match(&z, "z''2").is_err());
    }

    #[test]
    fn test_copies_at_levels_compare_prime_compatible() {
        let s = Index::new("s", 2, IndexKind::Site).unwrap();
        let a = s.at(1);
        let b = s.at(2);
        assert_ne!(a, b);
        assert!(a.no_prime_equals(&b));
        assert_eq!(a.at(2), b);
    }

    #[test]
    fn test_distinct_constructions_never_equal() {
        let a = Index::new("s", 2, IndexKind::Site).unwrap();
        let b = Index::new("s", 2, IndexKind::Site).unwrap();
        assert_ne!(a, b);
        assert!(!a.no_prime_equals(&b));
    }

    #[test]
    fn test_default_index_invariants() {
        let d = Index::default();
        assert!(!d.is_valid());
        assert_eq!(d.dim(), 1);
        assert_eq!(d.kind(), IndexKind::Null);
        assert_ne!(d, Index::new("a", 1, IndexKind::Site).unwrap());
    }

    #[test]
    fn test_ordering_dim_first_then_id_then_level() {
        let small = Index::new("a", 2, IndexKind::Site).unwrap();
        let large = Index::new("b", 9, IndexKind::Site).unwrap();
        assert!(small < large);

        let lo = small.at(0);
        let hi = small.at(3);
        assert!(lo < hi);

        let mut legs = vec![large.clone(), hi.clone(), lo.clone()];
        legs.sort();
        assert_eq!(legs, vec![lo, hi, large]);
    }

    #[test]
    fn test_ordering_consistent_with_equality() {
        let a = Index::new("a", 2, IndexKind::Site).unwrap();
        let b = a.renamed("b").unwrap();
        // Same identity, dim, level; only the name differs.
        assert_ne!(a, b);
        assert_ne!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_sim_is_a_fresh_lookalike() {
        let a = Index::new("a", 4, IndexKind::Link).unwrap();
        let s = sim(&a, 2).unwrap();
        assert_eq!(s.raw_name(), "~a");
        assert_eq!(s.dim(), 4);
        assert_eq!(s.kind(), IndexKind::Link);
        assert_eq!(s.prime_level(), 2);
        assert!(!s.no_prime_equals(&a));
    }

    #[test]
    fn test_index_val_construction() {
        let a = Index::new("a", 4, IndexKind::Site).unwrap();
        let iv = a.val(3).unwrap();
        assert_eq!(iv.val, 3);
        assert_eq!(iv, a);
        assert_eq!(a, iv);

        assert!(matches!(
            IndexVal::new(Index::default(), 1),
            Err(IndexError::DefaultIndex)
        ));
    }

    #[test]
    fn test_index_val_equality_is_structural() {
        let a = Index::new("a", 4, IndexKind::Site).unwrap();
        assert_eq!(a.val(2).unwrap(), a.val(2).unwrap());
        assert_ne!(a.val(2).unwrap(), a.val(3).unwrap());
        assert_ne!(a.val(2).unwrap(), a.at(1).val(2).unwrap());
    }

    // Single test for both flag states: show_ids is process-wide, so
    // splitting this across parallel test threads would race.
    #[test]
    fn test_display_forms() {
        let a = Index::with_prime_level("a", 3, IndexKind::Site, 2).unwrap();
        assert_eq!(format!("{a}"), "(\"a\",3,Site)''");

        let x = Index::with_prime_level("x", 3, IndexKind::Link, 5).unwrap();
        assert_eq!(format!("{x}"), "(\"x\",3,Link)'5");

        crate::config::set_show_ids(true);
        let rendered = format!("{a}");
        assert!(rendered.starts_with("(\"a\",3,Site|"));
        assert!(rendered.ends_with(")''"));
        crate::config::set_show_ids(false);
    }

    #[test]
    fn test_from_raw_parts_validation() {
        let id = IndexId::generate();
        let ok = Index::from_raw_parts(id, 2, 3, IndexKind::Site, "a".to_string()).unwrap();
        assert_eq!(ok.id(), id);
        assert_eq!(ok.prime_level(), 2);

        assert!(Index::from_raw_parts(IndexId::DEFAULT, 0, 3, IndexKind::Site, "a".into()).is_err());
        assert!(Index::from_raw_parts(id, 0, 0, IndexKind::Site, "a".into()).is_err());
        assert!(Index::from_raw_parts(id, 0, 3, IndexKind::All, "a".into()).is_err());
        assert!(Index::from_raw_parts(id, 0, 3, IndexKind::Site, "a'".into()).is_err());
        assert!(Index::from_raw_parts(id, 0, 3, IndexKind::Site, "a*".into()).is_err());
    }
}
