//! Byte-buffer primitives for the chronicle wire formats.
//!
//! Both persisted formats (signatures and audit histories) are built from a
//! small set of primitive encodings: unsigned varints for lengths, zigzag
//! varints for signed integers, IEEE-754 bits for floats, and
//! length-prefixed strings and byte blobs. This crate provides the writer
//! and reader for those primitives; the formats themselves live in the
//! crates that own the types.
//!
//! # Key Types
//!
//! - [`ByteWriter`] — infallible append-only encoder over `Vec<u8>`
//! - [`ByteReader`] — bounds-checked cursor over a byte slice
//! - [`WireError`] / [`WireResult`] — decode failures

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{WireError, WireResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;
