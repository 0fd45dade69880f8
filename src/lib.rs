//! ubuf: a minimal tagged binary message format
//!
//! This crate provides a growable [`Writer`], a bounds-checked [`Reader`],
//! a most-significant-digit-first varint used for every length prefix, and a
//! convention for fixed-schema messages identified by a one-byte tag.
//!
//! # Wire Format
//!
//! ```text
//! +---------+------------------------------------------------+
//! | Tag u8  | Fields in declared order                       |
//! +---------+------------------------------------------------+
//!   scalar     raw little-endian bytes, no prefix
//!   text/bytes varint length (MSB digit first) + payload
//!   composite  its own fields, recursively
//! ```
//!
//! Framing is not part of the format: callers decide how many bytes make up
//! one message. Decoding never reads the tag; the caller strips it, picks
//! the type, and decodes the body.
//!
//! # Example
//!
//! ```rust
//! use ubuf::messages::{Pos, ServerUpdateMsg};
//! use ubuf::*;
//!
//! let msg = ServerUpdateMsg {
//!     user_id: "u1".into(),
//!     name: "Ann".into(),
//!     pos: Pos { x: 1.5, y: -2.25 },
//! };
//! let bytes = serialize(&msg);
//!
//! let (tag, body) = split_tag(&bytes).unwrap();
//! assert_eq!(tag, ServerUpdateMsg::TAG);
//! let decoded: ServerUpdateMsg = decode_body(body)?;
//! assert_eq!(decoded, msg);
//! # Ok::<(), ubuf::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod error;
pub mod messages;
pub mod reader;
pub mod scalar;
pub mod schema;
pub mod varint;
pub mod writer;

// Re-export main types
pub use error::{Error, Result};
pub use reader::Reader;
pub use scalar::Scalar;
pub use schema::{decode_body, serialize, split_tag, Decode, Encode, Message};
pub use varint::MAX_VARINT_LEN;
pub use writer::{Writer, DEFAULT_INITIAL_CAPACITY};
