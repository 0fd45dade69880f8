//! Bounds-checked reader over a borrowed message body
//!
//! The reader never allocates for scalars and never mutates the source
//! bytes. Length-prefixed values are copied out into owned buffers.
//! A failed read leaves the cursor where it was before that read.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::schema::Decode;
use crate::varint;

/// Cursor for reading fields in declared order
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `buf`
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Get remaining bytes in reader
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Get current read position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if reader is at end
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Read a fixed-width scalar (little-endian)
    #[inline]
    pub fn read_scalar<T: Scalar>(&mut self) -> Result<T> {
        if self.remaining() < T::SIZE {
            return Err(Error::TruncatedInput);
        }
        let value = T::read_le(&self.buf[self.pos..]);
        self.pos += T::SIZE;
        Ok(value)
    }

    /// Read a varint length prefix
    #[inline]
    pub fn read_varint(&mut self) -> Result<u64> {
        let (value, varint_size) = varint::decode(&self.buf[self.pos..])?;
        self.pos += varint_size;
        Ok(value)
    }

    /// Borrow the payload of a length-prefixed value without copying
    ///
    /// Both the prefix and the payload are consumed, or neither is.
    #[inline]
    pub fn read_slice(&mut self) -> Result<&'a [u8]> {
        let (len, varint_size) = varint::decode(&self.buf[self.pos..])?;
        let len = usize::try_from(len).map_err(|_| Error::VarintOverflow)?;

        let start = self.pos + varint_size;
        if self.buf.len() - start < len {
            return Err(Error::TruncatedInput);
        }

        self.pos = start + len;
        Ok(&self.buf[start..start + len])
    }

    /// Read a length-prefixed byte field into an owned buffer
    #[inline]
    pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
        self.read_slice().map(<[u8]>::to_vec)
    }

    /// Read a length-prefixed UTF-8 text field
    ///
    /// The cursor does not move if the payload is not valid UTF-8.
    #[inline]
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.pos;
        let bytes = self.read_slice()?;
        match core::str::from_utf8(bytes) {
            Ok(text) => Ok(String::from(text)),
            Err(_) => {
                self.pos = start;
                Err(Error::InvalidUtf8)
            }
        }
    }

    /// Read a nested composite by delegating to its field reader
    ///
    /// Inner failures propagate unchanged. Fields read before the failing
    /// one stay consumed.
    #[inline]
    pub fn read_composite<C: Decode>(&mut self) -> Result<C> {
        C::decode(self)
    }

    /// Read any field type through its [`Decode`] impl
    #[inline]
    pub fn read<T: Decode>(&mut self) -> Result<T> {
        T::decode(self)
    }
}
