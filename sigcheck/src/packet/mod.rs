//! Packet-related types.
//!
//! This crate does not parse the OpenPGP wire format; the packets
//! here are the in-memory records a parser (or a test) hands to the
//! verifier.  Only the packet types that participate in signature
//! verification are modeled.

use std::fmt;

mod key;
pub use self::key::{BacksigStatus, Key};
mod signature;
pub use self::signature::{Signature, VerificationStatus};
mod userid;
pub use self::userid::UserID;
mod user_attribute;
pub use self::user_attribute::UserAttribute;

/// The OpenPGP packet tags as defined in [Section 4.3 of RFC 4880].
///
///   [Section 4.3 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-4.3
///
/// Note: This enum cannot be exhaustively matched to allow future
/// extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// Signature Packet.
    Signature,
    /// Public-Key Packet.
    PublicKey,
    /// Public-Subkey Packet.
    PublicSubkey,
    /// User ID Packet.
    UserID,
    /// User Attribute Packet.
    UserAttribute,
    /// Unknown or unsupported packet.
    Unknown(u8),
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::Signature => f.write_str("Signature"),
            Tag::PublicKey => f.write_str("PublicKey"),
            Tag::PublicSubkey => f.write_str("PublicSubkey"),
            Tag::UserID => f.write_str("UserID"),
            Tag::UserAttribute => f.write_str("UserAttribute"),
            Tag::Unknown(u) =>
                f.write_fmt(format_args!("Unknown({})", u)),
        }
    }
}

/// The packets understood by the verification core.
///
/// Note: This enum cannot be exhaustively matched to allow future
/// extensions.
#[derive(Clone, Debug, PartialEq)]
pub enum Packet {
    /// Signature packet.
    Signature(Signature),
    /// Public key packet.
    PublicKey(Key),
    /// Public subkey packet.
    PublicSubkey(Key),
    /// User ID packet.
    UserID(UserID),
    /// User attribute packet.
    UserAttribute(UserAttribute),
}

impl Packet {
    /// Returns the `Packet's` corresponding OpenPGP tag.
    pub fn tag(&self) -> Tag {
        match self {
            Packet::Signature(_) => Tag::Signature,
            Packet::PublicKey(_) => Tag::PublicKey,
            Packet::PublicSubkey(_) => Tag::PublicSubkey,
            Packet::UserID(_) => Tag::UserID,
            Packet::UserAttribute(_) => Tag::UserAttribute,
        }
    }
}

impl From<Signature> for Packet {
    fn from(s: Signature) -> Self {
        Packet::Signature(s)
    }
}

impl From<Key> for Packet {
    fn from(k: Key) -> Self {
        if k.primary() {
            Packet::PublicKey(k)
        } else {
            Packet::PublicSubkey(k)
        }
    }
}

impl From<UserID> for Packet {
    fn from(u: UserID) -> Self {
        Packet::UserID(u)
    }
}

impl From<UserAttribute> for Packet {
    fn from(u: UserAttribute) -> Self {
        Packet::UserAttribute(u)
    }
}
