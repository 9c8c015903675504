//! Cryptographic primitives.
//!
//! This module hosts the hash contexts, the multi precision
//! integers, and the seam to the public key verification primitive.
//! The verification state machine in [`verify`] is generic over the
//! primitive through the [`VerifyBackend`] trait; the bundled
//! [`Builtin`] backend implements RSA and DSA.
//!
//!   [`verify`]: ../verify/index.html
//!   [`VerifyBackend`]: trait.VerifyBackend.html
//!   [`Builtin`]: struct.Builtin.html

pub mod hash;
pub mod mpi;

mod backend;
pub use backend::Builtin;

use crate::Error;
use crate::Result;
use crate::packet::Key;
use crate::types::{HashAlgorithm, PublicKeyAlgorithm};

/// Verifies an asymmetric signature over a message digest.
///
/// Implementations receive the digest already encoded for the
/// algorithm (see [`encode_digest`]) and return `Ok(())` if and only
/// if the signature is cryptographically good.  Failures must be
/// `Error::BadSignature`, or one of the unsupported-algorithm errors
/// if the algorithm itself is the problem.
///
///   [`encode_digest`]: fn.encode_digest.html
pub trait VerifyBackend {
    /// Checks `sig` over `digest` against the key material `key`.
    fn pk_verify(&self, pk_algo: PublicKeyAlgorithm, digest: &mpi::MPI,
                 sig: &mpi::Signature, key: &mpi::PublicKey)
                 -> Result<()>;
}

/// Encodes a finalized digest as the integer the verification
/// primitive expects.
///
/// For RSA this is the full EMSA-PKCS1-v1_5 frame sized to the
/// key's modulus ([Section 5.2.2 of RFC 4880]): padding, a DER
/// `DigestInfo` prefix, and the digest.  For the discrete logarithm
/// families (DSA, ECDSA) the digest is interpreted as a big-endian
/// integer and truncated to the leftmost bits of the subgroup size.
///
///   [Section 5.2.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.2.2
pub fn encode_digest(key: &Key, digest: &[u8], hash_algo: HashAlgorithm)
                     -> Result<mpi::MPI>
{
    use self::PublicKeyAlgorithm::*;
    #[allow(deprecated)]
    match key.pk_algo() {
        RSAEncryptSign | RSAEncrypt | RSASign =>
            pkcs1_frame(key, digest, hash_algo),
        DSA | ECDSA => {
            let qbits = key.mpis().subgroup_bits()
                .ok_or_else(|| Error::MalformedMPI(
                    "key material lacks a subgroup order".into()))?;
            Ok(truncate_digest(digest, qbits))
        },
        algo => Err(Error::UnsupportedPublicKeyAlgorithm(algo).into()),
    }
}

/// Builds the EMSA-PKCS1-v1_5 frame for `digest`.
fn pkcs1_frame(key: &Key, digest: &[u8], hash_algo: HashAlgorithm)
               -> Result<mpi::MPI>
{
    let asn = hash_algo.oid()?;
    let nframe = key.mpis().modulus_bits()
        .ok_or_else(|| Error::MalformedMPI(
            "key material lacks a modulus".into()))
        .map(|bits| (bits + 7) / 8)?;

    // Frame: 00 01 PS 00 ASN DIGEST, with at least eight octets of
    // 0xFF padding.
    if digest.len() + asn.len() + 3 + 8 > nframe {
        return Err(Error::InvalidArgument(
            format!("digest too long for a {} octet modulus", nframe))
                   .into());
    }

    let mut frame = Vec::with_capacity(nframe);
    frame.push(0x00);
    frame.push(0x01);
    frame.resize(nframe - digest.len() - asn.len() - 1, 0xff);
    frame.push(0x00);
    frame.extend_from_slice(asn);
    frame.extend_from_slice(digest);

    Ok(mpi::MPI::new(&frame))
}

/// Truncates `digest` to its leftmost `qbits` bits.
fn truncate_digest(digest: &[u8], qbits: usize) -> mpi::MPI {
    if digest.len() * 8 <= qbits {
        return mpi::MPI::new(digest);
    }

    let qbytes = (qbits + 7) / 8;
    let mut value = digest[..qbytes].to_vec();

    // The subgroup order need not end on an octet boundary.
    let surplus = (8 - qbits % 8) % 8;
    if surplus > 0 {
        let mut carry = 0u8;
        for b in value.iter_mut() {
            let next_carry = *b << (8 - surplus);
            *b = (*b >> surplus) | carry;
            carry = next_carry;
        }
    }

    mpi::MPI::new(&value)
}
