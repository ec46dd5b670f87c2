//! Primitive wire encoding.
//!
//! Little-endian fixed-width integers and length-prefixed byte strings
//! over `std::io` streams. Every persisted structure in tensix is built
//! from these primitives; stream lifetime belongs to the caller.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{CodecError, Result};

/// Write a 32-bit signed integer.
pub fn write_i32<W: Write>(w: &mut W, v: i32) -> Result<()> {
    w.write_i32::<LittleEndian>(v)?;
    Ok(())
}

/// Read a 32-bit signed integer.
pub fn read_i32<R: Read>(r: &mut R) -> Result<i32> {
    Ok(r.read_i32::<LittleEndian>()?)
}

/// Write a 32-bit unsigned integer.
pub fn write_u32<W: Write>(w: &mut W, v: u32) -> Result<()> {
    w.write_u32::<LittleEndian>(v)?;
    Ok(())
}

/// Read a 32-bit unsigned integer.
pub fn read_u32<R: Read>(r: &mut R) -> Result<u32> {
    Ok(r.read_u32::<LittleEndian>()?)
}

/// Write a 64-bit unsigned integer.
pub fn write_u64<W: Write>(w: &mut W, v: u64) -> Result<()> {
    w.write_u64::<LittleEndian>(v)?;
    Ok(())
}

/// Read a 64-bit unsigned integer.
pub fn read_u64<R: Read>(r: &mut R) -> Result<u64> {
    Ok(r.read_u64::<LittleEndian>()?)
}

/// Longest string the wire format will encode or decode. Persisted
/// strings are short labels; a prefix beyond this marks the record
/// corrupt before any buffer is allocated.
pub const MAX_STRING_LEN: usize = 1 << 16;

/// Write a string as a u32 byte-length prefix followed by its bytes.
pub fn write_string<W: Write>(w: &mut W, s: &str) -> Result<()> {
    if s.len() > MAX_STRING_LEN {
        return Err(CodecError::StringTooLong { len: s.len() });
    }
    write_u32(w, s.len() as u32)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

/// Read a length-prefixed string.
///
/// The length prefix is validated against [`MAX_STRING_LEN`] before the
/// buffer is allocated, so a corrupt prefix cannot demand an arbitrary
/// allocation.
pub fn read_string<R: Read>(r: &mut R) -> Result<String> {
    let len = read_u32(r)? as usize;
    if len > MAX_STRING_LEN {
        return Err(CodecError::Corrupt {
            reason: format!("string length prefix {len} exceeds {MAX_STRING_LEN}"),
        });
    }
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|_| CodecError::InvalidString)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_integer_roundtrips() {
        let mut buf = Vec::new();
        write_i32(&mut buf, -7).unwrap();
        write_u32(&mut buf, 42).unwrap();
        write_u64(&mut buf, u64::MAX - 1).unwrap();

        let mut cur = Cursor::new(buf);
        assert_eq!(read_i32(&mut cur).unwrap(), -7);
        assert_eq!(read_u32(&mut cur).unwrap(), 42);
        assert_eq!(read_u64(&mut cur).unwrap(), u64::MAX - 1);
    }

    #[test]
    fn test_string_roundtrip() {
        let mut buf = Vec::new();
        write_string(&mut buf, "").unwrap();
        write_string(&mut buf, "leg_name").unwrap();

        let mut cur = Cursor::new(buf);
        assert_eq!(read_string(&mut cur).unwrap(), "");
        assert_eq!(read_string(&mut cur).unwrap(), "leg_name");
    }

    #[test]
    fn test_truncated_stream_is_an_io_error() {
        let mut buf = Vec::new();
        write_u64(&mut buf, 1).unwrap();
        buf.truncate(3);

        let mut cur = Cursor::new(buf);
        assert!(matches!(read_u64(&mut cur), Err(CodecError::Io(_))));
    }

    #[test]
    fn test_oversized_length_prefix_rejected_before_allocation() {
        let mut buf = Vec::new();
        write_u32(&mut buf, u32::MAX).unwrap();

        let mut cur = Cursor::new(buf);
        assert!(matches!(
            read_string(&mut cur),
            Err(CodecError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_string_length_prefix_is_honored() {
        let mut buf = Vec::new();
        write_string(&mut buf, "abc").unwrap();
        // Claim more bytes than the stream holds.
        buf[0] = 200;

        let mut cur = Cursor::new(buf);
        assert!(read_string(&mut cur).is_err());
    }
}
