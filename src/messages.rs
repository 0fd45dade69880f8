//! Sample message catalogue: player registration, position updates, deletion
//!
//! The catalogue is an application of the [`message!`](crate::message)
//! convention and fixes the reference field layouts:
//!
//! | Tag | Message             | Fields                                  |
//! |-----|---------------------|-----------------------------------------|
//! | 0   | [`ClientRegisterMsg`] | `name: text`                          |
//! | 1   | [`ServerRegisterMsg`] | none                                  |
//! | 2   | [`ClientUpdateMsg`]   | `pos: Pos`                            |
//! | 3   | [`ServerUpdateMsg`]   | `user_id: text, name: text, pos: Pos` |
//! | 4   | [`ServerDeleteMsg`]   | `user_id: text`                       |
//!
//! [`AnyMessage`] shows how a receiver bridges the tag asymmetry: it reads
//! the tag itself and then decodes the body of the selected type.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::schema::{decode_body, split_tag, Message};

/// Message tag constants
pub mod tags {
    /// Client asks to register under a display name
    pub const CLIENT_REGISTER: u8 = 0;
    /// Server acknowledges a registration
    pub const SERVER_REGISTER: u8 = 1;
    /// Client reports its own position
    pub const CLIENT_UPDATE: u8 = 2;
    /// Server broadcasts a user's position
    pub const SERVER_UPDATE: u8 = 3;
    /// Server announces that a user left
    pub const SERVER_DELETE: u8 = 4;
}

/// Coordinate type used by [`Pos`]
pub type Coord = f64;

/// Opaque user identifier assigned by the server
pub type UserId = String;

crate::composite! {
    /// Position on the plane, `x` then `y`
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Pos {
        /// Horizontal coordinate
        pub x: Coord,
        /// Vertical coordinate
        pub y: Coord,
    }
}

crate::message! {
    #[tag = tags::CLIENT_REGISTER]
    /// Registration request sent by a client
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct ClientRegisterMsg {
        /// Display name
        pub name: String,
    }
}

crate::message! {
    #[tag = tags::SERVER_REGISTER]
    /// Registration acknowledgement; carries no fields
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ServerRegisterMsg {}
}

crate::message! {
    #[tag = tags::CLIENT_UPDATE]
    /// Position update sent by a client
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct ClientUpdateMsg {
        /// New position
        pub pos: Pos,
    }
}

crate::message! {
    #[tag = tags::SERVER_UPDATE]
    /// Position of one user, broadcast by the server
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct ServerUpdateMsg {
        /// User the update is about
        pub user_id: UserId,
        /// That user's display name
        pub name: String,
        /// That user's position
        pub pos: Pos,
    }
}

crate::message! {
    #[tag = tags::SERVER_DELETE]
    /// Removal of a user, broadcast by the server
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct ServerDeleteMsg {
        /// User that left
        pub user_id: UserId,
    }
}

/// Errors from [`AnyMessage::from_bytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The buffer held no tag byte
    Empty,
    /// The tag byte does not name a message in this catalogue
    UnknownTag(u8),
    /// The body of a known message failed to decode
    Body(Error),
}

impl core::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DispatchError::Empty => f.write_str("empty message buffer"),
            DispatchError::UnknownTag(tag) => write!(f, "unknown message tag {}", tag),
            DispatchError::Body(err) => write!(f, "malformed message body: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Body(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Error> for DispatchError {
    fn from(err: Error) -> Self {
        DispatchError::Body(err)
    }
}

/// Any message of the sample catalogue
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMessage {
    /// Tag 0
    ClientRegister(ClientRegisterMsg),
    /// Tag 1
    ServerRegister(ServerRegisterMsg),
    /// Tag 2
    ClientUpdate(ClientUpdateMsg),
    /// Tag 3
    ServerUpdate(ServerUpdateMsg),
    /// Tag 4
    ServerDelete(ServerDeleteMsg),
}

macro_rules! impl_any_message {
    ($($variant:ident($msg:ty)),* $(,)?) => {
        impl AnyMessage {
            /// Read the tag byte and decode the body of the matching message
            ///
            /// `bytes` must hold exactly one message. Trailing bytes after the
            /// last field are ignored.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self, DispatchError> {
                let (tag, body) = split_tag(bytes).ok_or(DispatchError::Empty)?;
                $(
                    if tag == <$msg as Message>::TAG {
                        return Ok(AnyMessage::$variant(decode_body(body)?));
                    }
                )*
                Err(DispatchError::UnknownTag(tag))
            }

            /// Tag of the wrapped message
            pub fn tag(&self) -> u8 {
                match self {
                    $(AnyMessage::$variant(_) => <$msg as Message>::TAG,)*
                }
            }

            /// Serialize the wrapped message, tag included
            pub fn to_bytes(&self) -> Vec<u8> {
                match self {
                    $(AnyMessage::$variant(msg) => msg.to_bytes(),)*
                }
            }
        }

        $(
            impl From<$msg> for AnyMessage {
                fn from(msg: $msg) -> Self {
                    AnyMessage::$variant(msg)
                }
            }
        )*
    };
}

impl_any_message!(
    ClientRegister(ClientRegisterMsg),
    ServerRegister(ServerRegisterMsg),
    ClientUpdate(ClientUpdateMsg),
    ServerUpdate(ServerUpdateMsg),
    ServerDelete(ServerDeleteMsg),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::serialize;
    use alloc::string::ToString;

    fn server_update() -> ServerUpdateMsg {
        ServerUpdateMsg {
            user_id: "u1".to_string(),
            name: "Ann".to_string(),
            pos: Pos { x: 1.5, y: -2.25 },
        }
    }

    #[test]
    fn test_server_update_roundtrip() {
        let bytes = serialize(&server_update());
        assert_eq!(bytes[0], tags::SERVER_UPDATE);

        let decoded: ServerUpdateMsg = decode_body(&bytes[1..]).unwrap();
        assert_eq!(decoded.user_id, "u1");
        assert_eq!(decoded.name, "Ann");
        assert_eq!(decoded.pos.x, 1.5);
        assert_eq!(decoded.pos.y, -2.25);
    }

    #[test]
    fn test_server_update_layout() {
        let bytes = server_update().to_bytes();

        let mut expected = alloc::vec![3, 2, b'u', b'1', 3, b'A', b'n', b'n'];
        expected.extend_from_slice(&1.5f64.to_le_bytes());
        expected.extend_from_slice(&(-2.25f64).to_le_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_tags() {
        assert_eq!(ClientRegisterMsg::TAG, 0);
        assert_eq!(ServerRegisterMsg::TAG, 1);
        assert_eq!(ClientUpdateMsg::TAG, 2);
        assert_eq!(ServerUpdateMsg::TAG, 3);
        assert_eq!(ServerDeleteMsg::TAG, 4);
    }

    #[test]
    fn test_server_register_is_tag_only() {
        assert_eq!(ServerRegisterMsg {}.to_bytes(), [tags::SERVER_REGISTER]);
    }

    #[test]
    fn test_client_update_size() {
        let msg = ClientUpdateMsg {
            pos: Pos { x: 0.0, y: 0.0 },
        };
        assert_eq!(msg.to_bytes().len(), 1 + 16);
    }

    #[test]
    fn test_dispatch() {
        let bytes = server_update().to_bytes();
        let any = AnyMessage::from_bytes(&bytes).unwrap();

        assert_eq!(any.tag(), tags::SERVER_UPDATE);
        assert_eq!(any, AnyMessage::ServerUpdate(server_update()));
        assert_eq!(any.to_bytes(), bytes);
    }

    #[test]
    fn test_dispatch_errors() {
        assert_eq!(AnyMessage::from_bytes(&[]), Err(DispatchError::Empty));
        assert_eq!(
            AnyMessage::from_bytes(&[42, 0]),
            Err(DispatchError::UnknownTag(42))
        );
        assert_eq!(
            AnyMessage::from_bytes(&[tags::CLIENT_UPDATE, 0, 0]),
            Err(DispatchError::Body(Error::TruncatedInput))
        );
    }

    #[test]
    fn test_dispatch_error_display() {
        assert_eq!(
            DispatchError::UnknownTag(9).to_string(),
            "unknown message tag 9"
        );
        assert_eq!(
            DispatchError::from(Error::TruncatedInput).to_string(),
            "malformed message body: input ended before the value was complete"
        );
    }
}
