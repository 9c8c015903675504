//! The bundled verification primitive.
//!
//! RSA and DSA are implemented directly over big integers; that is
//! all the arithmetic signature *verification* needs, since only
//! public material is involved.  Other algorithms are reported as
//! unsupported; callers wanting them plug in their own
//! [`VerifyBackend`].
//!
//!   [`VerifyBackend`]: trait.VerifyBackend.html

use num_bigint_dig::{BigUint, ModInverse};

use crate::Error;
use crate::Result;
use crate::crypto::VerifyBackend;
use crate::crypto::mpi::{self, MPI};
use crate::types::PublicKeyAlgorithm;

/// The verification primitive bundled with this crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Builtin {}

impl VerifyBackend for Builtin {
    fn pk_verify(&self, pk_algo: PublicKeyAlgorithm, digest: &MPI,
                 sig: &mpi::Signature, key: &mpi::PublicKey)
                 -> Result<()>
    {
        use self::PublicKeyAlgorithm::*;
        #[allow(deprecated)]
        match (pk_algo, key, sig) {
            (RSAEncryptSign, mpi::PublicKey::RSA { e, n },
             mpi::Signature::RSA { s }) |
            (RSASign, mpi::PublicKey::RSA { e, n },
             mpi::Signature::RSA { s }) =>
                rsa_verify(digest, s, e, n),

            (DSA, mpi::PublicKey::DSA { p, q, g, y },
             mpi::Signature::DSA { r, s }) =>
                dsa_verify(digest, r, s, p, q, g, y),

            (algo, _, _) if !algo.is_supported() =>
                Err(Error::UnsupportedPublicKeyAlgorithm(algo).into()),

            (algo, _, _) => Err(Error::BadSignature(format!(
                "key or signature material does not match {}", algo))
                                .into()),
        }
    }
}

fn uint(m: &MPI) -> BigUint {
    BigUint::from_bytes_be(m.value())
}

/// RSASSA-PKCS1-v1_5 verification: the signature raised to the
/// public exponent must equal the encoded frame.
fn rsa_verify(digest: &MPI, s: &MPI, e: &MPI, n: &MPI) -> Result<()> {
    let n = uint(n);
    let s = uint(s);
    if s >= n {
        return Err(Error::BadSignature(
            "signature exceeds the modulus".into()).into());
    }

    if s.modpow(&uint(e), &n) == uint(digest) {
        Ok(())
    } else {
        Err(Error::BadSignature("digest mismatch".into()).into())
    }
}

/// DSA verification per FIPS 186-4, 4.7.
fn dsa_verify(digest: &MPI, r: &MPI, s: &MPI,
              p: &MPI, q: &MPI, g: &MPI, y: &MPI)
              -> Result<()>
{
    let p = uint(p);
    let q = uint(q);
    let r = uint(r);
    let s = uint(s);
    let zero = BigUint::default();

    if r == zero || r >= q || s == zero || s >= q {
        return Err(Error::BadSignature(
            "signature out of range".into()).into());
    }

    let w = (&s).mod_inverse(&q)
        .and_then(|w| w.to_biguint())
        .ok_or_else(|| Error::BadSignature(
            "signature is not invertible".into()))?;

    let h = uint(digest);
    let u1 = h * &w % &q;
    let u2 = &r * &w % &q;
    let v = uint(g).modpow(&u1, &p) * uint(y).modpow(&u2, &p) % &p % &q;

    if v == r {
        Ok(())
    } else {
        Err(Error::BadSignature("digest mismatch".into()).into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // An RSA key with a public exponent of one turns verification
    // into a comparison against the padded frame; good enough to
    // exercise the plumbing without a signing implementation.
    fn rsa_e1() -> mpi::PublicKey {
        mpi::PublicKey::RSA {
            e: MPI::new(&[1]),
            n: MPI::new(&[0xFF; 64]),
        }
    }

    #[test]
    fn rsa_exponent_one() {
        let key = rsa_e1();
        let digest = MPI::new(&[0xAB; 32]);

        let good = mpi::Signature::RSA { s: MPI::new(&[0xAB; 32]) };
        assert!(Builtin::default()
                .pk_verify(PublicKeyAlgorithm::RSAEncryptSign,
                           &digest, &good, &key)
                .is_ok());

        let bad = mpi::Signature::RSA { s: MPI::new(&[0xAC; 32]) };
        let err = Builtin::default()
            .pk_verify(PublicKeyAlgorithm::RSAEncryptSign,
                       &digest, &bad, &key)
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(),
                         Some(Error::BadSignature(_))));
    }

    #[test]
    fn rsa_signature_exceeding_modulus() {
        let key = mpi::PublicKey::RSA {
            e: MPI::new(&[1]),
            n: MPI::new(&[0x10]),
        };
        let err = Builtin::default()
            .pk_verify(PublicKeyAlgorithm::RSAEncryptSign,
                       &MPI::new(&[0x01]),
                       &mpi::Signature::RSA { s: MPI::new(&[0x20]) },
                       &key)
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(),
                         Some(Error::BadSignature(_))));
    }

    #[test]
    fn dsa_known_answer() {
        // Toy parameters: p = 23, q = 11, g = 4, x = 3, y = 18,
        // h = 5 signed with k = 7 gives (r, s) = (8, 1).
        let key = mpi::PublicKey::DSA {
            p: MPI::new(&[23]),
            q: MPI::new(&[11]),
            g: MPI::new(&[4]),
            y: MPI::new(&[18]),
        };

        let sig = mpi::Signature::DSA {
            r: MPI::new(&[8]),
            s: MPI::new(&[1]),
        };
        assert!(Builtin::default()
                .pk_verify(PublicKeyAlgorithm::DSA,
                           &MPI::new(&[5]), &sig, &key)
                .is_ok());

        // Any other digest must fail.
        let err = Builtin::default()
            .pk_verify(PublicKeyAlgorithm::DSA,
                       &MPI::new(&[6]), &sig, &key)
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(),
                         Some(Error::BadSignature(_))));
    }

    #[test]
    fn dsa_out_of_range() {
        let key = mpi::PublicKey::DSA {
            p: MPI::new(&[23]),
            q: MPI::new(&[11]),
            g: MPI::new(&[4]),
            y: MPI::new(&[18]),
        };

        for (r, s) in [(0u8, 1u8), (8, 0), (11, 1), (8, 11)] {
            let sig = mpi::Signature::DSA {
                r: MPI::new(&[r]),
                s: MPI::new(&[s]),
            };
            assert!(Builtin::default()
                    .pk_verify(PublicKeyAlgorithm::DSA,
                               &MPI::new(&[5]), &sig, &key)
                    .is_err());
        }
    }

    #[test]
    fn unsupported_algorithm() {
        let err = Builtin::default()
            .pk_verify(PublicKeyAlgorithm::EdDSA,
                       &MPI::new(&[5]),
                       &mpi::Signature::Unknown {
                           mpis: vec![MPI::new(&[1])].into_boxed_slice(),
                       },
                       &mpi::PublicKey::Unknown {
                           mpis: vec![].into_boxed_slice(),
                       })
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnsupportedPublicKeyAlgorithm(
                PublicKeyAlgorithm::EdDSA))));
    }

    #[test]
    fn mismatched_material() {
        // DSA algorithm id with RSA material.
        let err = Builtin::default()
            .pk_verify(PublicKeyAlgorithm::DSA,
                       &MPI::new(&[5]),
                       &mpi::Signature::RSA { s: MPI::new(&[1]) },
                       &rsa_e1())
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(),
                         Some(Error::BadSignature(_))));
    }
}
