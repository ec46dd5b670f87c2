//! The prime-level name grammar.
//!
//! Raw index names carry an optional prime-level suffix and an optional
//! wildcard:
//!
//! - `"a"` — bare name `a`, level 0
//! - `"a'"`, `"a''"`, `"a'''"` — levels 1..=3 as apostrophe runs
//! - `"a'7"` — level 7 in numeric form
//! - `"a*"` — wildcard: match `a` at any level
//! - `"a*'2"` — wildcard with a threshold/increase of 2
//!
//! Parsing is pure: a malformed name yields an error and nothing else.
//! Mixed fragments such as `''2` are rejected rather than guessed at.

use crate::error::{IndexError, Result};

/// The wildcard marker in raw names.
pub const WILDCARD: char = '*';

/// The prime marker in raw names.
pub const PRIME: char = '\'';

/// Result of splitting a raw name into its grammar components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// The bare name, free of prime and wildcard markers.
    pub name: String,
    /// Explicit prime level encoded before any wildcard (0 if none).
    pub prime_level: u32,
    /// Whether the name ended in the wildcard marker.
    pub wildcard: bool,
    /// Prime increase/threshold encoded after the wildcard (0 if none).
    pub prime_increase: u32,
}

/// Decode a prime-level fragment: a string starting with `'`.
///
/// `'` is level 1, a run of `k` apostrophes is level `k`, and `'N` with
/// decimal digits is level `N`. Anything else fails.
///
/// # Examples
///
/// ```
/// use tensix_core::prime::parse_prime_fragment;
///
/// assert_eq!(parse_prime_fragment("'").unwrap(), 1);
/// assert_eq!(parse_prime_fragment("'''").unwrap(), 3);
/// assert_eq!(parse_prime_fragment("'12").unwrap(), 12);
/// assert!(parse_prime_fragment("''2").is_err());
/// assert!(parse_prime_fragment("2").is_err());
/// ```
pub fn parse_prime_fragment(fragment: &str) -> Result<u32> {
    let bad = || IndexError::BadPrimeFragment {
        fragment: fragment.to_string(),
    };

    let rest = fragment.strip_prefix(PRIME).ok_or_else(bad)?;
    if rest.is_empty() {
        return Ok(1);
    }
    if rest.chars().all(|c| c == PRIME) {
        // A run of k apostrophes encodes level k (the stripped prefix
        // counts as one of them).
        return u32::try_from(fragment.chars().count()).map_err(|_| bad());
    }
    rest.parse::<u32>().map_err(|_| bad())
}

/// Split a raw name into bare name, explicit prime level, wildcard flag,
/// and post-wildcard prime increase.
///
/// The wildcard must be the final character or be followed by a
/// prime-level fragment; a wildcard anywhere else is an error.
pub fn split_raw_name(raw: &str) -> Result<ParsedName> {
    let (head, wildcard, prime_increase) = match raw.find(WILDCARD) {
        None => (raw, false, 0),
        Some(w) => {
            let tail = &raw[w + WILDCARD.len_utf8()..];
            if tail.is_empty() {
                (&raw[..w], true, 0)
            } else if tail.starts_with(PRIME) {
                (&raw[..w], true, parse_prime_fragment(tail)?)
            } else {
                return Err(IndexError::MisplacedWildcard {
                    name: raw.to_string(),
                });
            }
        }
    };

    match head.find(PRIME) {
        None => Ok(ParsedName {
            name: head.to_string(),
            prime_level: 0,
            wildcard,
            prime_increase,
        }),
        Some(i) => Ok(ParsedName {
            name: head[..i].to_string(),
            prime_level: parse_prime_fragment(&head[i..])?,
            wildcard,
            prime_increase,
        }),
    }
}

/// Render `level` as a prime suffix: empty for 0, apostrophes for
/// levels 1..=3, `'N` beyond that.
pub fn format_prime_level(level: u32) -> String {
    match level {
        0 => String::new(),
        1..=3 => PRIME.to_string().repeat(level as usize),
        _ => format!("{PRIME}{level}"),
    }
}

/// Append the prime suffix for `level` to a bare name.
///
/// # Examples
///
/// ```
/// use tensix_core::prime::put_primes;
///
/// assert_eq!(put_primes("S", 0), "S");
/// assert_eq!(put_primes("S", 2), "S''");
/// assert_eq!(put_primes("x", 5), "x'5");
/// ```
pub fn put_primes(name: &str, level: u32) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    out.push_str(name);
    out.push_str(&format_prime_level(level));
    out
}
