//! Multi Precision Integers.
//!
//! An MPI is the wire representation of an arbitrarily large
//! unsigned integer: a two byte big-endian bit count followed by the
//! minimal big-endian encoding of the value ([Section 3.2 of RFC
//! 4880]).  The signature and key material this crate verifies is
//! made up of them.
//!
//!   [Section 3.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-3.2

use std::fmt;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

use crate::crypto::hash::{self, Hash};

/// Holds a single MPI.
#[derive(Clone, PartialEq, Eq, std::hash::Hash)]
pub struct MPI {
    /// Integer value as big-endian.
    value: Box<[u8]>,
}

impl From<Vec<u8>> for MPI {
    fn from(v: Vec<u8>) -> Self {
        Self::new(&v)
    }
}

impl MPI {
    /// Creates a new MPI.
    ///
    /// This function takes care of leading zeros.
    pub fn new(value: &[u8]) -> Self {
        let offset = value.iter().take_while(|&&b| b == 0).count();
        let value = Vec::from(&value[offset..]).into_boxed_slice();

        MPI {
            value,
        }
    }

    /// Returns the length of the MPI in bits.
    pub fn bits(&self) -> usize {
        self.value.len() * 8
            - self.value.get(0).map(|&b| b.leading_zeros() as usize)
                  .unwrap_or(0)
    }

    /// Returns the value of this MPI.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the wire serialization of this MPI.
    ///
    /// That is the two byte big-endian bit count followed by the
    /// value.
    pub fn to_pgp(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.serialized_len());
        buf.extend_from_slice(&(self.bits() as u16).to_be_bytes());
        buf.extend_from_slice(&self.value);
        buf
    }

    /// Returns the length of the wire serialization in bytes.
    pub fn serialized_len(&self) -> usize {
        2 + self.value.len()
    }
}

impl fmt::Debug for MPI {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_fmt(format_args!(
            "{} bits: {}", self.bits(),
            crate::fmt::to_hex(&self.value, true)))
    }
}

impl Hash for MPI {
    /// Update the Hash with a hash of the MPI.
    fn hash(&self, hash: &mut hash::Context) {
        let len = self.bits() as u16;

        hash.update(&len.to_be_bytes());
        hash.update(&self.value);
    }
}

#[cfg(test)]
impl Arbitrary for MPI {
    fn arbitrary(g: &mut Gen) -> Self {
        MPI::new(&Vec::<u8>::arbitrary(g))
    }
}

/// A public key's crypto-system specific parts.
///
/// Note: This enum cannot be exhaustively matched to allow future
/// extensions.
#[derive(Clone, PartialEq, Eq, std::hash::Hash, Debug)]
pub enum PublicKey {
    /// RSA public key.
    RSA {
        /// Public exponent.
        e: MPI,
        /// Public modulus m = p * q.
        n: MPI,
    },

    /// NIST DSA public key.
    DSA {
        /// Prime of the ring Zp.
        p: MPI,
        /// Order of `g` in Zp.
        q: MPI,
        /// Public generator of Zp.
        g: MPI,
        /// Public key g^x mod p.
        y: MPI,
    },

    /// Unknown number of MPIs for an unknown algorithm.
    Unknown {
        /// The successfully parsed MPIs.
        mpis: Box<[MPI]>,
    },
}

impl PublicKey {
    /// Returns the MPIs in wire order.
    pub fn mpis(&self) -> Vec<&MPI> {
        use self::PublicKey::*;
        match self {
            RSA { e, n } => vec![n, e],
            DSA { p, q, g, y } => vec![p, q, g, y],
            Unknown { mpis } => mpis.iter().collect(),
        }
    }

    /// Returns the length of the wire serialization in bytes.
    pub fn serialized_len(&self) -> usize {
        self.mpis().iter().map(|m| m.serialized_len()).sum()
    }

    /// Returns, if known, the size of the subgroup the signature
    /// scheme works in, in bits.
    ///
    /// Digests are truncated to this size before the discrete
    /// logarithm based signature algorithms consume them.
    pub fn subgroup_bits(&self) -> Option<usize> {
        match self {
            PublicKey::DSA { q, .. } => Some(q.bits()),
            _ => None,
        }
    }

    /// Returns the size of the modulus in bits, if the crypto-system
    /// has one.
    pub fn modulus_bits(&self) -> Option<usize> {
        match self {
            PublicKey::RSA { n, .. } => Some(n.bits()),
            PublicKey::DSA { p, .. } => Some(p.bits()),
            PublicKey::Unknown { .. } => None,
        }
    }
}

impl Hash for PublicKey {
    /// Update the Hash with a hash of the MPIs.
    fn hash(&self, hash: &mut hash::Context) {
        for mpi in self.mpis() {
            mpi.hash(hash);
        }
    }
}

/// A signature's crypto-system specific parts.
///
/// Note: This enum cannot be exhaustively matched to allow future
/// extensions.
#[derive(Clone, PartialEq, Eq, std::hash::Hash, Debug)]
pub enum Signature {
    /// RSA signature.
    RSA {
        /// Signature m^d mod n.
        s: MPI,
    },

    /// NIST's DSA signature.
    DSA {
        /// `r` value.
        r: MPI,
        /// `s` value.
        s: MPI,
    },

    /// Unknown number of MPIs for an unknown algorithm.
    Unknown {
        /// The successfully parsed MPIs.
        mpis: Box<[MPI]>,
    },
}

impl Signature {
    /// Returns the MPIs in wire order.
    pub fn mpis(&self) -> Vec<&MPI> {
        use self::Signature::*;
        match self {
            RSA { s } => vec![s],
            DSA { r, s } => vec![r, s],
            Unknown { mpis } => mpis.iter().collect(),
        }
    }
}
