//! Field traits and the fixed-schema message convention
//!
//! Every field type implements [`Encode`] and [`Decode`]. A composite is a
//! struct whose fields are encoded back to back in declared order. A
//! [`Message`] is a composite with a one-byte tag.
//!
//! # Tag asymmetry
//!
//! A message's [`Encode`] impl always writes its tag first. Its [`Decode`]
//! impl never reads the tag: it starts at the first field. Callers inspect
//! the leading byte themselves (see [`split_tag`]), pick the matching type,
//! and decode the rest with [`decode_body`]. Making `decode` consume the tag
//! would break every existing reader of the format.
//!
//! The [`composite!`](crate::composite) and [`message!`](crate::message)
//! macros generate the struct and both impls from a single field list, so
//! encode and decode cannot disagree on field order.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Result;
use crate::reader::Reader;
use crate::writer::Writer;

/// Append a value's wire representation to a [`Writer`]
pub trait Encode {
    /// Write every field in declared order
    fn encode(&self, writer: &mut Writer);
}

/// Read a value's fields from a [`Reader`] in declared order
pub trait Decode: Sized {
    /// Read every field in declared order
    fn decode(reader: &mut Reader<'_>) -> Result<Self>;
}

/// A fixed-schema value identified on the wire by a one-byte tag
pub trait Message: Encode + Decode {
    /// Tag byte, unique within the message family
    const TAG: u8;

    /// Serialize this message, tag included
    #[inline]
    fn to_bytes(&self) -> Vec<u8>
    where
        Self: Sized,
    {
        serialize(self)
    }
}

/// Serialize one message into a fresh buffer
///
/// The first byte of the result is `M::TAG`.
#[inline]
pub fn serialize<M: Message>(message: &M) -> Vec<u8> {
    let mut writer = Writer::new();
    message.encode(&mut writer);
    writer.into_bytes()
}

/// Split a serialized message into its tag and body
///
/// Returns `None` for an empty buffer. Whether the tag is known and whether
/// the buffer holds exactly one message is for the caller to decide.
#[inline]
pub fn split_tag(bytes: &[u8]) -> Option<(u8, &[u8])> {
    bytes.split_first().map(|(&tag, body)| (tag, body))
}

/// Decode a message body that has already had its tag removed
#[inline]
pub fn decode_body<M: Decode>(body: &[u8]) -> Result<M> {
    let mut reader = Reader::new(body);
    M::decode(&mut reader)
}

macro_rules! impl_scalar_field {
    ($($t:ty),* $(,)?) => {
        $(
            impl Encode for $t {
                #[inline]
                fn encode(&self, writer: &mut Writer) {
                    writer.write_scalar(*self);
                }
            }

            impl Decode for $t {
                #[inline]
                fn decode(reader: &mut Reader<'_>) -> Result<Self> {
                    reader.read_scalar()
                }
            }
        )*
    };
}

impl_scalar_field!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl Encode for str {
    #[inline]
    fn encode(&self, writer: &mut Writer) {
        writer.write_str(self);
    }
}

impl Encode for String {
    #[inline]
    fn encode(&self, writer: &mut Writer) {
        writer.write_str(self);
    }
}

impl Decode for String {
    #[inline]
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_string()
    }
}

impl Encode for [u8] {
    #[inline]
    fn encode(&self, writer: &mut Writer) {
        writer.write_bytes(self);
    }
}

impl Encode for Vec<u8> {
    #[inline]
    fn encode(&self, writer: &mut Writer) {
        writer.write_bytes(self);
    }
}

impl Decode for Vec<u8> {
    #[inline]
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_bytes()
    }
}

/// Define a composite: a struct encoded as its fields in declared order
///
/// ```rust
/// ubuf::composite! {
///     /// A point on the plane
///     #[derive(Debug, Clone, Copy, PartialEq, Default)]
///     pub struct Point {
///         pub x: f64,
///         pub y: f64,
///     }
/// }
///
/// let mut writer = ubuf::Writer::new();
/// writer.write_composite(&Point { x: 1.0, y: 2.0 });
/// assert_eq!(writer.len(), 16);
/// ```
#[macro_export]
macro_rules! composite {
    (@decode $name:ident { $($field:ident),* }) => {
        impl $crate::Decode for $name {
            #[allow(unused_variables)]
            fn decode(reader: &mut $crate::Reader<'_>) -> $crate::Result<Self> {
                ::core::result::Result::Ok(Self {
                    $($field: reader.read()?,)*
                })
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($(#[$field_meta])* $field_vis $field: $ty,)*
        }

        impl $crate::Encode for $name {
            #[allow(unused_variables)]
            fn encode(&self, writer: &mut $crate::Writer) {
                $(writer.write(&self.$field);)*
            }
        }

        $crate::composite!(@decode $name { $($field),* });
    };
}

/// Define a tagged message
///
/// The tag attribute must come first. The generated [`Encode`] impl writes
/// the tag byte and then the fields; the generated [`Decode`] impl reads
/// only the fields.
///
/// ```rust
/// ubuf::message! {
///     #[tag = 7]
///     /// Heartbeat with a sequence number
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Ping {
///         pub seq: u32,
///     }
/// }
///
/// use ubuf::Message;
/// let bytes = Ping { seq: 1 }.to_bytes();
/// assert_eq!(bytes, [7, 1, 0, 0, 0]);
/// assert_eq!(ubuf::decode_body::<Ping>(&bytes[1..]), Ok(Ping { seq: 1 }));
/// ```
#[macro_export]
macro_rules! message {
    (
        #[tag = $tag:expr]
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($(#[$field_meta])* $field_vis $field: $ty,)*
        }

        impl $crate::Message for $name {
            const TAG: u8 = $tag;
        }

        impl $crate::Encode for $name {
            fn encode(&self, writer: &mut $crate::Writer) {
                writer.write_scalar(<Self as $crate::Message>::TAG);
                $(writer.write(&self.$field);)*
            }
        }

        $crate::composite!(@decode $name { $($field),* });
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use alloc::string::ToString;
    use alloc::vec;

    crate::composite! {
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        struct Size {
            w: u16,
            h: u16,
        }
    }

    crate::composite! {
        #[derive(Debug, Clone, PartialEq, Default)]
        struct Window {
            title: String,
            size: Size,
            depth: i8,
        }
    }

    crate::message! {
        #[tag = 9]
        #[derive(Debug, Clone, PartialEq, Default)]
        struct Open {
            window: Window,
            payload: Vec<u8>,
        }
    }

    crate::message! {
        #[tag = 10]
        #[derive(Debug, Clone, PartialEq, Default)]
        struct Close {}
    }

    fn sample() -> Open {
        Open {
            window: Window {
                title: "ab".to_string(),
                size: Size { w: 0x0102, h: 3 },
                depth: -1,
            },
            payload: vec![0xEE],
        }
    }

    #[test]
    fn test_nested_composite_layout() {
        let bytes = serialize(&sample());
        assert_eq!(
            bytes,
            [9, 0x02, b'a', b'b', 0x02, 0x01, 0x03, 0x00, 0xFF, 0x01, 0xEE]
        );
    }

    #[test]
    fn test_decode_skips_no_tag() {
        let bytes = sample().to_bytes();
        let (tag, body) = split_tag(&bytes).unwrap();

        assert_eq!(tag, Open::TAG);
        assert_eq!(decode_body::<Open>(body).unwrap(), sample());
    }

    #[test]
    fn test_decode_with_tag_still_present_misreads() {
        // The tag is not consumed by decode: leaving it in shifts every field
        let bytes = sample().to_bytes();
        assert_ne!(decode_body::<Open>(&bytes).ok(), Some(sample()));
    }

    #[test]
    fn test_empty_message() {
        let bytes = Close {}.to_bytes();
        assert_eq!(bytes, [10]);
        assert_eq!(decode_body::<Close>(&[]).unwrap(), Close {});
    }

    #[test]
    fn test_split_tag_empty() {
        assert_eq!(split_tag(&[]), None);
        assert_eq!(split_tag(&[4]), Some((4, &[][..])));
    }

    #[test]
    fn test_truncated_nested_field() {
        let bytes = sample().to_bytes();
        let body = &bytes[1..];

        for cut in 0..body.len() {
            assert_eq!(
                decode_body::<Open>(&body[..cut]),
                Err(Error::TruncatedInput),
                "cut at {}",
                cut
            );
        }
    }

    #[test]
    fn test_read_composite_propagates_position() {
        let mut writer = Writer::new();
        writer.write_composite(&Size { w: 1, h: 2 });
        writer.write_scalar(0x7Fu8);
        let bytes = writer.into_bytes();

        let mut reader = Reader::new(&bytes);
        let size: Size = reader.read_composite().unwrap();
        assert_eq!(size, Size { w: 1, h: 2 });
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.read_scalar::<u8>().unwrap(), 0x7F);
    }
}
