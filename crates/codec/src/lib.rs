//! Binary persistence for tensix index types.
//!
//! The tensor library's object-serialization layer calls
//! [`write_index`]/[`read_index`] for each Index held inside a larger
//! stream. The primitive encoding lives in [`wire`]; streams are plain
//! `std::io` readers/writers owned by the caller.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use tensix_core::{Index, IndexKind};
//! use tensix_codec::{read_index, write_index, ReadOptions};
//!
//! let leg = Index::new("bond", 16, IndexKind::Link)?;
//! let mut buf = Vec::new();
//! write_index(&mut buf, &leg)?;
//!
//! let back = read_index(&mut Cursor::new(buf), ReadOptions::default())?;
//! assert_eq!(back, leg);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod wire;

mod error;
mod index_io;

pub use error::{CodecError, Result};
pub use index_io::{read_index, write_index, IdWidth, ReadOptions};
