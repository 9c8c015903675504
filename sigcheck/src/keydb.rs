//! Access to the local key database.
//!
//! The verifier needs one thing from a key database: resolving the
//! issuer hint of a signature to a usable public key.  The
//! [`KeyStore`] trait is that seam.  Where the keys come from (a
//! keyring file, an on-disk database, a test fixture) is the
//! implementor's business; lookups may block on I/O.
//!
//!   [`KeyStore`]: trait.KeyStore.html

use crate::Error;
use crate::KeyID;
use crate::Result;
use crate::packet::Key;

/// Looks up public keys by key ID.
pub trait KeyStore {
    /// Returns a copy of the key with the given key ID.
    ///
    /// The copy is the caller's; implementations must not hand out
    /// references into their own storage.  Fails with
    /// `Error::NoPublicKey` if no such key is known.
    fn lookup_by_keyid(&self, keyid: &KeyID) -> Result<Key>;
}

/// A flat in-memory key store.
#[derive(Clone, Debug, Default)]
pub struct KeyRing {
    keys: Vec<Key>,
}

impl KeyRing {
    /// Returns a new empty key ring.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a key.
    pub fn insert(&mut self, key: Key) -> &mut Self {
        self.keys.push(key);
        self
    }

    /// Returns the number of keys in the ring.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns whether the ring is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl KeyStore for KeyRing {
    fn lookup_by_keyid(&self, keyid: &KeyID) -> Result<Key> {
        self.keys.iter()
            .find(|k| k.keyid() == *keyid)
            .cloned()
            .ok_or_else(|| Error::NoPublicKey(keyid.clone()).into())
    }
}
