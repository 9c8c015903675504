//! Functionality to hash packets, and generate hashes.
//!
//! Signature verification needs to hash several packets in
//! combination, under the digest algorithm the signature names.  A
//! message may additionally announce more than one digest algorithm
//! up front (one-pass headers, the clearsign `Hash:` header), so a
//! [`Context`] can carry several enabled algorithms at once and is
//! finalized per algorithm.
//!
//!   [`Context`]: struct.Context.html

use digest::{DynDigest, FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update};
use sha1collisiondetection::Sha1CD;

use crate::Error;
use crate::Result;
use crate::packet::{Key, Signature, UserAttribute, UserID};
use crate::types::HashAlgorithm;

/// State of one or more hash functions.
pub struct Context {
    contexts: Vec<(HashAlgorithm, Box<dyn DynDigest>)>,
}

impl Context {
    /// Creates a new hash context with `algo` enabled.
    ///
    /// # Errors
    ///
    /// Fails with `Error::UnsupportedHashAlgorithm` if this crate
    /// does not support `algo`.  See [`HashAlgorithm::is_supported`].
    ///
    ///   [`HashAlgorithm::is_supported`]: ../../types/enum.HashAlgorithm.html#method.is_supported
    pub fn new(algo: HashAlgorithm) -> Result<Context> {
        let mut ctx = Context { contexts: Vec::with_capacity(1) };
        ctx.enable(algo)?;
        Ok(ctx)
    }

    /// Enables `algo` in addition to the already enabled algorithms.
    ///
    /// Enabling an algorithm a second time is a no-op; the running
    /// state is kept.
    pub fn enable(&mut self, algo: HashAlgorithm) -> Result<()> {
        if !self.is_enabled(algo) {
            self.contexts.push((algo, algo.new_hasher()?));
        }
        Ok(())
    }

    /// Returns whether `algo` is enabled in this context.
    pub fn is_enabled(&self, algo: HashAlgorithm) -> bool {
        self.contexts.iter().any(|(a, _)| *a == algo)
    }

    /// Returns the enabled algorithms.
    pub fn algos(&self) -> Vec<HashAlgorithm> {
        self.contexts.iter().map(|(a, _)| *a).collect()
    }

    /// Writes data into the enabled hash functions.
    pub fn update<D: AsRef<[u8]>>(&mut self, data: D) {
        for (_, ctx) in self.contexts.iter_mut() {
            ctx.update(data.as_ref());
        }
    }

    /// Writes a single octet into the enabled hash functions.
    pub fn update_byte(&mut self, b: u8) {
        self.update([b]);
    }

    /// Finalizes the hash function for `algo` and returns the
    /// digest.
    ///
    /// # Errors
    ///
    /// Fails with `Error::UnsupportedHashAlgorithm` if `algo` is not
    /// enabled in this context.
    pub fn digest(&mut self, algo: HashAlgorithm) -> Result<Vec<u8>> {
        self.contexts.iter_mut()
            .find(|(a, _)| *a == algo)
            .map(|(_, ctx)| ctx.finalize_reset().into_vec())
            .ok_or_else(|| Error::UnsupportedHashAlgorithm(algo).into())
    }
}

impl Clone for Context {
    fn clone(&self) -> Self {
        Context {
            contexts: self.contexts.iter()
                .map(|(a, ctx)| (*a, ctx.box_clone()))
                .collect(),
        }
    }
}

impl std::io::Write for Context {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Wraps [`Sha1CD`] so it can be boxed as a `dyn DynDigest`.
///
/// `sha1collisiondetection` implements `FixedOutput` and `Reset` for
/// `Sha1CD`, but not `FixedOutputReset` (required by `DynDigest`'s
/// blanket impl).  This newtype forwards to the existing reset-aware
/// `finalize_reset_cd` method to supply that missing impl without
/// changing SHA-1's behavior.
#[derive(Clone, Default)]
struct Sha1CdDigest(Sha1CD);

impl HashMarker for Sha1CdDigest {}

impl Update for Sha1CdDigest {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
}

impl Reset for Sha1CdDigest {
    fn reset(&mut self) {
        Sha1CD::reset(&mut self.0);
    }
}

impl OutputSizeUser for Sha1CdDigest {
    type OutputSize = <Sha1CD as OutputSizeUser>::OutputSize;
}

impl FixedOutput for Sha1CdDigest {
    fn finalize_into(self, out: &mut digest::Output<Self>) {
        self.0.finalize_into(out);
    }
}

impl FixedOutputReset for Sha1CdDigest {
    fn finalize_into_reset(&mut self, out: &mut digest::Output<Self>) {
        // Mirrors `Sha1CD`'s own `FixedOutput::finalize_into`: always
        // write the digest, discarding the collision signal, then
        // reset the hasher state for reuse.
        let mut buf = sha1collisiondetection::Output::default();
        let _ = self.0.finalize_into_dirty_cd(&mut buf);
        out.copy_from_slice(buf.as_slice());
        Sha1CD::reset(&mut self.0);
    }
}

impl HashAlgorithm {
    /// Whether this crate supports this algorithm.
    pub fn is_supported(self) -> bool {
        match self {
            HashAlgorithm::MD5 => true,
            HashAlgorithm::SHA1 => true,
            HashAlgorithm::RipeMD => true,
            HashAlgorithm::SHA256 => true,
            HashAlgorithm::SHA384 => true,
            HashAlgorithm::SHA512 => true,
            HashAlgorithm::SHA224 => true,
            HashAlgorithm::Private(_) => false,
            HashAlgorithm::Unknown(_) => false,
        }
    }

    /// Creates a fresh hash function for this algorithm.
    fn new_hasher(self) -> Result<Box<dyn DynDigest>> {
        use md5::Md5;
        use ripemd::Ripemd160;
        use sha2::{Sha224, Sha256, Sha384, Sha512};

        match self {
            HashAlgorithm::MD5 => Ok(Box::new(Md5::default())),
            HashAlgorithm::SHA1 => Ok(Box::new(Sha1CdDigest::default())),
            HashAlgorithm::RipeMD => Ok(Box::new(Ripemd160::default())),
            HashAlgorithm::SHA256 => Ok(Box::new(Sha256::default())),
            HashAlgorithm::SHA384 => Ok(Box::new(Sha384::default())),
            HashAlgorithm::SHA512 => Ok(Box::new(Sha512::default())),
            HashAlgorithm::SHA224 => Ok(Box::new(Sha224::default())),
            HashAlgorithm::Private(_) | HashAlgorithm::Unknown(_) =>
                Err(Error::UnsupportedHashAlgorithm(self).into()),
        }
    }

    /// Returns the digest size of this algorithm in bytes.
    pub fn digest_size(self) -> Result<usize> {
        match self {
            HashAlgorithm::MD5 => Ok(16),
            HashAlgorithm::SHA1 | HashAlgorithm::RipeMD => Ok(20),
            HashAlgorithm::SHA224 => Ok(28),
            HashAlgorithm::SHA256 => Ok(32),
            HashAlgorithm::SHA384 => Ok(48),
            HashAlgorithm::SHA512 => Ok(64),
            HashAlgorithm::Private(_) | HashAlgorithm::Unknown(_) =>
                Err(Error::UnsupportedHashAlgorithm(self).into()),
        }
    }

    /// Returns the prefix of a serialized `DigestInfo` structure
    /// naming this algorithm.
    ///
    /// PKCS#1 v1.5 framing wraps a digest in a DER encoded ASN.1
    /// blob whose prefix is constant per algorithm; the digest bytes
    /// follow it directly.
    pub fn oid(self) -> Result<&'static [u8]> {
        match self {
            HashAlgorithm::MD5 => Ok(&[
                0x30, 0x20, 0x30, 0x0c, 0x06, 0x08, 0x2a, 0x86, 0x48,
                0x86, 0xf7, 0x0d, 0x02, 0x05, 0x05, 0x00, 0x04, 0x10,
            ]),
            HashAlgorithm::SHA1 => Ok(&[
                0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03,
                0x02, 0x1a, 0x05, 0x00, 0x04, 0x14,
            ]),
            HashAlgorithm::RipeMD => Ok(&[
                0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x24, 0x03,
                0x02, 0x01, 0x05, 0x00, 0x04, 0x14,
            ]),
            HashAlgorithm::SHA224 => Ok(&[
                0x30, 0x2d, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48,
                0x01, 0x65, 0x03, 0x04, 0x02, 0x04, 0x05, 0x00, 0x04,
                0x1c,
            ]),
            HashAlgorithm::SHA256 => Ok(&[
                0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48,
                0x01, 0x65, 0x03, 0x04, 0x02, 0x01, 0x05, 0x00, 0x04,
                0x20,
            ]),
            HashAlgorithm::SHA384 => Ok(&[
                0x30, 0x41, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48,
                0x01, 0x65, 0x03, 0x04, 0x02, 0x02, 0x05, 0x00, 0x04,
                0x30,
            ]),
            HashAlgorithm::SHA512 => Ok(&[
                0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48,
                0x01, 0x65, 0x03, 0x04, 0x02, 0x03, 0x05, 0x00, 0x04,
                0x40,
            ]),
            HashAlgorithm::Private(_) | HashAlgorithm::Unknown(_) =>
                Err(Error::UnsupportedHashAlgorithm(self).into()),
        }
    }
}

/// Hashes OpenPGP packets and related types.
pub trait Hash {
    /// Updates the given hash with this object.
    fn hash(&self, hash: &mut Context);
}

impl Hash for Key {
    /// Update the Hash with a hash of the key.
    ///
    /// A key is hashed as the three byte frame `0x99, len_hi,
    /// len_lo` followed by the key packet body ([Section 5.2.4 of
    /// RFC 4880]).
    ///
    ///   [Section 5.2.4 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.2.4
    fn hash(&self, hash: &mut Context) {
        // Version, creation time, algorithm, MPIs.
        let len = 6 + self.mpis().serialized_len();

        let mut header: Vec<u8> = Vec::with_capacity(9);

        // Tag.
        header.push(0x99);

        // Length (big endian).
        header.push(((len >> 8) & 0xFF) as u8);
        header.push((len & 0xFF) as u8);

        // Version.
        header.push(4);

        // Creation time.
        header.extend_from_slice(&self.creation_time().to_be_bytes());

        // Algorithm.
        header.push(self.pk_algo().into());

        hash.update(&header[..]);

        // MPIs.
        self.mpis().hash(hash);
    }
}

impl Hash for UserID {
    /// Update the Hash with a hash of the user id.
    ///
    /// This uses the v4 framing; v3 signatures hash the body without
    /// a header.
    fn hash(&self, hash: &mut Context) {
        let mut header = [0; 5];

        header[0] = 0xB4;
        let len = self.value().len() as u32;
        header[1] = (len >> 24) as u8;
        header[2] = (len >> 16) as u8;
        header[3] = (len >> 8) as u8;
        header[4] = len as u8;

        hash.update(&header[..]);
        hash.update(self.value());
    }
}

impl Hash for UserAttribute {
    /// Update the Hash with a hash of the user attribute.
    ///
    /// This uses the v4 framing; v3 signatures hash the body without
    /// a header.
    fn hash(&self, hash: &mut Context) {
        let mut header = [0; 5];

        header[0] = 0xD1;
        let len = self.value().len() as u32;
        header[1] = (len >> 24) as u8;
        header[2] = (len >> 16) as u8;
        header[3] = (len >> 8) as u8;
        header[4] = len as u8;

        hash.update(&header[..]);
        hash.update(self.value());
    }
}

impl Hash for Signature {
    /// Adds the signature's own metadata to the hash.
    ///
    /// This is the final portion of the data a signature signs: "the
    /// concatenation of the data being signed and the signature data
    /// from the version number through the hashed subpacket data
    /// (inclusive) is hashed", followed for v4 signatures by the
    /// trailer described in [Section 5.2.4 of RFC 4880].
    ///
    ///   [Section 5.2.4 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.2.4
    fn hash(&self, hash: &mut Context) {
        if self.version() < 4 {
            hash.update_byte(self.typ().into());
            hash.update(self.timestamp().to_be_bytes());
            return;
        }

        hash.update_byte(self.version());
        hash.update_byte(self.typ().into());
        hash.update_byte(self.pk_algo().into());
        hash.update_byte(self.hash_algo().into());

        // The length of the hashed area, as a 16-bit big endian
        // number.  An absent area hashes as a zero length.
        let alen = self.hashed_area().len();
        hash.update(&(alen as u16).to_be_bytes());
        hash.update(self.hashed_area());

        // Trailer magic.  The length field counts the six octets of
        // signature metadata plus the hashed area, and is itself
        // authenticated; that is what stops an attacker from moving
        // bytes in and out of the hashed area.
        let n = alen + 6;
        let trailer = [
            self.version(),
            0xff,
            (n >> 24) as u8,
            (n >> 16) as u8,
            (n >> 8) as u8,
            n as u8,
        ];
        hash.update(&trailer[..]);
    }
}
