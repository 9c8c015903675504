use std::cell::Cell;
use std::fmt;

use crate::KeyID;
use crate::crypto::mpi;
use crate::types::{HashAlgorithm, PublicKeyAlgorithm, SignatureType,
                   Timestamp};

/// The memoized outcome of verifying a signature.
///
/// There are exactly three legal states.  Failures other than a bad
/// signature (a missing key, say) leave the state `Unchecked`, so a
/// later attempt verifies again instead of trusting a transient
/// error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    /// Not verified yet, or the last attempt failed transiently.
    #[default]
    Unchecked,
    /// Proven valid.
    Good,
    /// Proven invalid.
    Bad,
}

/// Holds a signature packet.
///
/// Signature packets are used both for certification purposes as
/// well as for document signing purposes.  See [Section 5.2 of RFC
/// 4880] for details.
///
/// The verification status is memoized in the packet through a
/// shared reference, so a signature that sits inside a keyblock can
/// be checked without taking the whole block mutably.
///
///   [Section 5.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.2
// Note: we can't derive PartialEq, because that would include the
// cached verification status.
#[derive(Clone, Debug)]
pub struct Signature {
    /// Version of the signature packet.  3 and 4 are understood.
    version: u8,
    /// Type of signature.
    typ: SignatureType,
    /// Public-key algorithm used for this signature.
    pk_algo: PublicKeyAlgorithm,
    /// Hash algorithm used to compute the signature.
    hash_algo: HashAlgorithm,
    /// When the signature was made.
    timestamp: Timestamp,
    /// The alleged issuer of the signature.
    issuer: KeyID,
    /// Serialized subpackets that are part of the signature.
    hashed_area: Vec<u8>,
    /// Serialized subpackets that are _not_ part of the signature.
    unhashed_area: Vec<u8>,
    /// Signature MPIs.
    mpis: mpi::Signature,

    /// The hashed area contains a critical subpacket the parser did
    /// not understand.
    unknown_critical: bool,

    /// Cached verification outcome.
    status: Cell<VerificationStatus>,
}

impl Signature {
    /// Creates a new signature packet.
    pub fn new(version: u8, typ: SignatureType,
               pk_algo: PublicKeyAlgorithm, hash_algo: HashAlgorithm,
               timestamp: Timestamp, issuer: KeyID,
               mpis: mpi::Signature)
               -> Self
    {
        Signature {
            version,
            typ,
            pk_algo,
            hash_algo,
            timestamp,
            issuer,
            hashed_area: Vec::new(),
            unhashed_area: Vec::new(),
            mpis,
            unknown_critical: false,
            status: Cell::new(VerificationStatus::Unchecked),
        }
    }

    /// Gets the version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Gets the signature type.
    pub fn typ(&self) -> SignatureType {
        self.typ
    }

    /// Gets the public key algorithm.
    pub fn pk_algo(&self) -> PublicKeyAlgorithm {
        self.pk_algo
    }

    /// Gets the hash algorithm.
    pub fn hash_algo(&self) -> HashAlgorithm {
        self.hash_algo
    }

    /// Gets the signature's creation time.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Gets the signature's alleged issuer.
    ///
    /// The issuer is a hint taken from the signature's subpackets;
    /// it is not authenticated by the signature itself and is easy
    /// to forge.
    pub fn issuer(&self) -> &KeyID {
        &self.issuer
    }

    /// Gets a reference to the hashed area.
    pub fn hashed_area(&self) -> &[u8] {
        &self.hashed_area
    }

    /// Sets the hashed area.
    pub fn set_hashed_area(&mut self, data: Vec<u8>) {
        self.hashed_area = data;
    }

    /// Gets a reference to the unhashed area.
    pub fn unhashed_area(&self) -> &[u8] {
        &self.unhashed_area
    }

    /// Sets the unhashed area.
    pub fn set_unhashed_area(&mut self, data: Vec<u8>) {
        self.unhashed_area = data;
    }

    /// Gets the signature packet's MPIs.
    pub fn mpis(&self) -> &mpi::Signature {
        &self.mpis
    }

    /// Sets the signature packet's MPIs.
    pub fn set_mpis(&mut self, mpis: mpi::Signature) {
        self.mpis = mpis;
    }

    /// Returns whether the hashed area carries an unrecognized
    /// critical subpacket.
    ///
    /// Per [Section 5.2.3.1 of RFC 4880] such a signature must be
    /// considered invalid even if it verifies.
    ///
    ///   [Section 5.2.3.1 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.2.3.1
    pub fn unknown_critical(&self) -> bool {
        self.unknown_critical
    }

    /// Records that the hashed area carries an unrecognized critical
    /// subpacket.
    pub fn set_unknown_critical(&mut self, yes: bool) {
        self.unknown_critical = yes;
    }

    /// Returns the cached verification outcome.
    pub fn status(&self) -> VerificationStatus {
        self.status.get()
    }

    /// Records a verification outcome.
    pub fn set_status(&self, status: VerificationStatus) {
        self.status.set(status);
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Signature) -> bool {
        self.version == other.version
            && self.typ == other.typ
            && self.pk_algo == other.pk_algo
            && self.hash_algo == other.hash_algo
            && self.timestamp == other.timestamp
            && self.issuer == other.issuer
            && self.hashed_area == other.hashed_area
            && self.unhashed_area == other.unhashed_area
            && self.mpis == other.mpis
            && self.unknown_critical == other.unknown_critical
    }
}

impl Eq for Signature {}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} signature by {}", self.typ, self.issuer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::crypto::mpi::MPI;

    #[test]
    fn status_is_shared() {
        let sig = Signature::new(
            4, SignatureType::Binary,
            PublicKeyAlgorithm::RSAEncryptSign, HashAlgorithm::SHA256,
            Timestamp::from(10), KeyID::from(1),
            mpi::Signature::RSA { s: MPI::new(&[7]) });

        assert_eq!(sig.status(), VerificationStatus::Unchecked);
        let alias = &sig;
        alias.set_status(VerificationStatus::Good);
        assert_eq!(sig.status(), VerificationStatus::Good);
    }
}
