use std::cell::Cell;
use std::fmt;

use crate::Fingerprint;
use crate::KeyID;
use crate::crypto::hash::{self, Hash};
use crate::crypto::mpi;
use crate::types::{HashAlgorithm, PublicKeyAlgorithm, RevocationKey,
                   Timestamp};

/// Whether a signing subkey has certified its binding to the primary
/// key with a back signature.
///
/// Without a valid back signature anyone could take a signing subkey
/// and claim, with a binding signature of their own, that signatures
/// issued by it are theirs.  See [Section 5.2.1 of RFC 4880], type
/// 0x19.
///
///   [Section 5.2.1 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.2.1
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BacksigStatus {
    /// The binding has not been evaluated yet.
    #[default]
    Unchecked,
    /// The binding carries no back signature.
    Missing,
    /// The binding carries a back signature that does not verify.
    Invalid,
    /// The binding carries a valid back signature.
    Valid,
}

/// Holds a public key packet, either a primary key or a subkey.
///
/// See [Section 5.5 of RFC 4880] for details.  The merged state
/// flags (`valid`, `expired`, `revoked`, the back signature status)
/// are not wire data; whoever assembles the keyblock computes them
/// by evaluating the key's self-signatures and records the result
/// here.
///
///   [Section 5.5 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.5
#[derive(Clone, Debug, PartialEq)]
pub struct Key {
    /// When the key was created.
    creation_time: Timestamp,
    /// When the key expires, per its self-signature.
    expiration_time: Option<Timestamp>,
    /// Public key algorithm of this key.
    pk_algo: PublicKeyAlgorithm,
    /// The key's crypto-system specific parts.
    mpis: mpi::PublicKey,

    /// False for subkeys.
    primary: bool,
    /// Whether the key has a valid (self-)signature binding it.
    valid: bool,
    /// Whether the key was expired when its block was merged.
    expired: bool,
    /// Whether the key has been revoked.
    revoked: bool,
    /// The subkey's cross certification state.
    backsig: BacksigStatus,
    /// Third parties authorized to revoke this key.
    revocation_keys: Vec<RevocationKey>,

    /// When set, the key's merged state must not be written to any
    /// persistent cache.
    dont_cache: Cell<bool>,
}

impl Key {
    /// Creates a new primary key.
    ///
    /// The key starts out valid, unexpired, unrevoked, and without
    /// designated revokers; use the setters to adjust the merged
    /// state.
    pub fn new(creation_time: Timestamp, pk_algo: PublicKeyAlgorithm,
               mpis: mpi::PublicKey)
               -> Self
    {
        Key {
            creation_time,
            expiration_time: None,
            pk_algo,
            mpis,
            primary: true,
            valid: true,
            expired: false,
            revoked: false,
            backsig: BacksigStatus::default(),
            revocation_keys: Vec::new(),
            dont_cache: Cell::new(false),
        }
    }

    /// Gets the key's creation time.
    pub fn creation_time(&self) -> Timestamp {
        self.creation_time
    }

    /// Gets the key's expiration time, if limited.
    pub fn expiration_time(&self) -> Option<Timestamp> {
        self.expiration_time
    }

    /// Sets the key's expiration time.
    pub fn set_expiration_time(&mut self, t: Option<Timestamp>) {
        self.expiration_time = t;
    }

    /// Gets the public key algorithm.
    pub fn pk_algo(&self) -> PublicKeyAlgorithm {
        self.pk_algo
    }

    /// Gets the key's crypto-system specific parts.
    pub fn mpis(&self) -> &mpi::PublicKey {
        &self.mpis
    }

    /// Returns true for primary keys, false for subkeys.
    pub fn primary(&self) -> bool {
        self.primary
    }

    /// Marks the key as a primary key or a subkey.
    pub fn set_primary(&mut self, primary: bool) {
        self.primary = primary;
    }

    /// Returns whether the key has a valid binding.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Sets whether the key has a valid binding.
    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Returns whether the key was expired at merge time.
    ///
    /// The verifier additionally compares the expiration time to the
    /// current time, in case the merge is stale.
    pub fn expired(&self) -> bool {
        self.expired
    }

    /// Sets whether the key is expired.
    pub fn set_expired(&mut self, expired: bool) {
        self.expired = expired;
    }

    /// Returns whether the key has been revoked.
    pub fn revoked(&self) -> bool {
        self.revoked
    }

    /// Sets whether the key has been revoked.
    pub fn set_revoked(&mut self, revoked: bool) {
        self.revoked = revoked;
    }

    /// Returns the subkey's cross certification state.
    pub fn backsig(&self) -> BacksigStatus {
        self.backsig
    }

    /// Records the subkey's cross certification state.
    pub fn set_backsig(&mut self, status: BacksigStatus) {
        self.backsig = status;
    }

    /// Returns the designated revokers of this key.
    pub fn revocation_keys(&self) -> &[RevocationKey] {
        &self.revocation_keys
    }

    /// Designates a third-party revoker.
    pub fn add_revocation_key(&mut self, rk: RevocationKey) {
        self.revocation_keys.push(rk);
    }

    /// Returns whether the key's merged state may be cached.
    pub fn dont_cache(&self) -> bool {
        self.dont_cache.get()
    }

    /// Poisons the key against persistent caching.
    ///
    /// Set when the key's revocation status could not be fully
    /// determined, so the next evaluation must start from scratch.
    pub fn set_dont_cache(&self) {
        self.dont_cache.set(true);
    }

    /// Computes the key's fingerprint.
    ///
    /// A v4 fingerprint is the SHA-1 hash of the framed key body
    /// ([Section 12.2 of RFC 4880]).
    ///
    ///   [Section 12.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-12.2
    pub fn fingerprint(&self) -> Fingerprint {
        let mut ctx = hash::Context::new(HashAlgorithm::SHA1)
            .expect("SHA1 is supported");
        self.hash(&mut ctx);
        Fingerprint::from_bytes(
            &ctx.digest(HashAlgorithm::SHA1).expect("enabled above"))
    }

    /// Computes the key's key ID.
    pub fn keyid(&self) -> KeyID {
        self.fingerprint().to_keyid()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.keyid())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::crypto::mpi::MPI;

    fn key() -> Key {
        Key::new(Timestamp::from(1136073600),
                 PublicKeyAlgorithm::RSAEncryptSign,
                 mpi::PublicKey::RSA {
                     e: MPI::new(&[0x01, 0x00, 0x01]),
                     n: MPI::new(&[0xC0; 128]),
                 })
    }

    #[test]
    fn fingerprint_is_stable() {
        let k = key();
        assert_eq!(k.fingerprint(), k.fingerprint());
        assert!(matches!(k.fingerprint(), Fingerprint::V4(_)));
        assert_eq!(KeyID::from(&k.fingerprint()), k.keyid());
    }

    #[test]
    fn fingerprint_covers_creation_time() {
        let mut k = key();
        let fp = k.fingerprint();
        k.creation_time = Timestamp::from(1136073601);
        assert!(fp != k.fingerprint());
    }

    #[test]
    fn merged_state_does_not_affect_fingerprint() {
        let mut k = key();
        let fp = k.fingerprint();
        k.set_revoked(true);
        k.set_primary(false);
        k.set_dont_cache();
        assert_eq!(fp, k.fingerprint());
    }
}
