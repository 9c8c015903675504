//! Keyblocks.
//!
//! A keyblock is the ordered packet sequence that makes up one
//! transferable public key ([Section 11.1 of RFC 4880]): a primary
//! key followed by user IDs, user attributes, subkeys, and the
//! signatures over them.  Order matters: a signature applies to the
//! nearest preceding packet of the kind it certifies, so the block
//! is modeled as an indexed sequence and neighbor searches walk
//! toward the root.
//!
//!   [Section 11.1 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-11.1

use crate::Error;
use crate::Result;
use crate::packet::{Key, Packet, Signature, Tag};

/// An ordered packet sequence rooted at a primary public key.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyblock {
    packets: Vec<Packet>,
}

impl Keyblock {
    /// Creates a keyblock from a packet sequence.
    ///
    /// The first packet must be a primary public key.
    pub fn from_packets(packets: Vec<Packet>) -> Result<Self> {
        match packets.first() {
            Some(Packet::PublicKey(_)) => Ok(Keyblock { packets }),
            _ => Err(Error::InvalidArgument(
                "keyblock must be rooted at a primary public key"
                    .into()).into()),
        }
    }

    /// Returns the primary key.
    pub fn primary(&self) -> &Key {
        match &self.packets[0] {
            Packet::PublicKey(key) => key,
            // Enforced by the constructor.
            _ => unreachable!("keyblock not rooted at a public key"),
        }
    }

    /// Returns the packet at `index`.
    pub fn get(&self, index: usize) -> Option<&Packet> {
        self.packets.get(index)
    }

    /// Returns the number of packets.
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    /// Returns whether the keyblock is empty.  It never is.
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Iterates over the packets in order.
    pub fn packets(&self) -> impl Iterator<Item = &Packet> {
        self.packets.iter()
    }

    /// Iterates over the signatures in the block, with their
    /// indices.
    pub fn signatures(&self)
                      -> impl Iterator<Item = (usize, &Signature)> {
        self.packets.iter().enumerate()
            .filter_map(|(i, p)| match p {
                Packet::Signature(sig) => Some((i, sig)),
                _ => None,
            })
    }

    /// Finds the packet of kind `tag` closest before `index`,
    /// scanning toward the root.
    ///
    /// This is how a signature is matched to the subkey or user ID
    /// it applies to.
    pub fn find_prev(&self, index: usize, tag: Tag)
                     -> Option<(usize, &Packet)> {
        self.packets[..index.min(self.packets.len())].iter()
            .enumerate()
            .rev()
            .find(|(_, p)| p.tag() == tag)
    }
}
