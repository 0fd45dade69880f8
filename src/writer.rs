//! Growable, owned message writer
//!
//! The writer owns its buffer and doubles the tracked capacity whenever an
//! append would not fit, so a sequence of appends costs amortized O(1) per
//! byte. Writing never fails.

use alloc::vec::Vec;

use crate::scalar::Scalar;
use crate::schema::Encode;
use crate::varint;

/// Initial buffer capacity of [`Writer::new`]
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Owned byte buffer with typed append operations
#[derive(Debug, Clone)]
pub struct Writer {
    buf: Vec<u8>,
    capacity: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Create a writer with [`DEFAULT_INITIAL_CAPACITY`]
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Create a writer with the given initial capacity (at least 1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of bytes written so far
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been written
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current capacity under the doubling policy
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Make room for `additional` more bytes
    ///
    /// Doubles the capacity until `len + additional` fits, then reallocates
    /// once.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        let required = self.buf.len().saturating_add(additional);
        if required <= self.capacity {
            return;
        }

        let mut capacity = self.capacity;
        while capacity < required {
            capacity = capacity.saturating_mul(2);
        }
        self.buf.reserve_exact(capacity - self.buf.len());
        self.capacity = capacity;
    }

    /// Append a fixed-width scalar (little-endian)
    #[inline]
    pub fn write_scalar<T: Scalar>(&mut self, value: T) {
        self.reserve(T::SIZE);
        let start = self.buf.len();
        self.buf.resize(start + T::SIZE, 0);
        value.write_le(&mut self.buf[start..]);
    }

    /// Append a varint-encoded length prefix
    #[inline]
    pub fn write_varint(&mut self, value: u64) {
        let mut digits = [0u8; varint::MAX_VARINT_LEN];
        let len = varint::encode(value, &mut digits);
        self.write_raw(&digits[..len]);
    }

    /// Append a length-prefixed byte field
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.write_varint(bytes.len() as u64);
        self.write_raw(bytes);
    }

    /// Append a length-prefixed UTF-8 text field
    #[inline]
    pub fn write_str(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    /// Append a nested composite by delegating to its field writer
    #[inline]
    pub fn write_composite<C: Encode + ?Sized>(&mut self, value: &C) {
        value.encode(self);
    }

    /// Append any field type through its [`Encode`] impl
    #[inline]
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) {
        value.encode(self);
    }

    /// Append raw bytes without length prefix
    #[inline]
    fn write_raw(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        self.buf.extend_from_slice(bytes);
    }

    /// Borrow the written bytes
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Copy the written bytes out into an independent buffer
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buf.clone()
    }

    /// Consume the writer and return its buffer without copying
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
