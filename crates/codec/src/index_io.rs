//! Binary persistence for [`Index`].
//!
//! Field order is fixed and unpadded:
//! `prime_level (i32) | kind tag (u32) | id (u64) | dim (u64) | name (len-prefixed)`.
//!
//! Files written by generators with the old 32-bit identity width are
//! still readable: [`IdWidth::Legacy32`] reads the id field as 32 bits
//! and zero-extends it. That branch is decided before the id field is
//! consumed and is read-only; writers always emit 64 bits.

use std::io::{Read, Write};

use tensix_core::{Index, IndexError, IndexId, IndexKind};

use crate::error::{CodecError, Result};
use crate::wire;

/// Width of the identity field on the read side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdWidth {
    /// Current format: 64-bit identities.
    #[default]
    Wide64,
    /// Identities written by the old 32-bit generator; zero-extended on
    /// read. Never written.
    Legacy32,
}

/// Decode-time configuration.
///
/// Passed explicitly rather than read from process globals so callers
/// decide per stream which vintage they are reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// Identity field width of the stream being read.
    pub id_width: IdWidth,
}

impl ReadOptions {
    /// Options for streams written by the old 32-bit identity generator.
    pub const fn legacy32() -> Self {
        ReadOptions {
            id_width: IdWidth::Legacy32,
        }
    }
}

/// Serialize an Index. Fails on a default-initialized Index.
pub fn write_index<W: Write>(w: &mut W, index: &Index) -> Result<()> {
    if !index.is_valid() {
        return Err(IndexError::DefaultIndex.into());
    }
    // prime_level fits i32: the grammar only produces u32 values and the
    // write side narrows checked.
    let level = i32::try_from(index.prime_level()).map_err(|_| CodecError::Corrupt {
        reason: format!("prime level {} exceeds wire range", index.prime_level()),
    })?;
    let tag = index
        .kind()
        .tag()
        .ok_or_else(|| IndexError::SentinelKind {
            kind: index.kind().name(),
        })?;

    wire::write_i32(w, level)?;
    wire::write_u32(w, tag)?;
    wire::write_u64(w, index.id().raw())?;
    wire::write_u64(w, index.dim())?;
    wire::write_string(w, index.raw_name())?;
    Ok(())
}

/// Deserialize an Index written by [`write_index`].
///
/// All construction invariants are re-checked: a negative prime level,
/// an unknown or sentinel kind tag, a zero identity, or a zero dimension
/// mark the record as corrupt.
pub fn read_index<R: Read>(r: &mut R, options: ReadOptions) -> Result<Index> {
    let level = wire::read_i32(r)?;
    let level = u32::try_from(level).map_err(|_| CodecError::Corrupt {
        reason: format!("negative prime level {level}"),
    })?;

    let tag = wire::read_u32(r)?;
    let kind = IndexKind::from_tag(tag).ok_or(CodecError::BadKindTag { tag })?;

    let id = match options.id_width {
        IdWidth::Wide64 => wire::read_u64(r)?,
        IdWidth::Legacy32 => {
            tracing::debug!("reading legacy 32-bit index identity");
            u64::from(wire::read_u32(r)?)
        }
    };

    let dim = wire::read_u64(r)?;
    let name = wire::read_string(r)?;

    Ok(Index::from_raw_parts(
        IndexId::from_raw(id),
        level,
        dim,
        kind,
        name,
    )?)
}
