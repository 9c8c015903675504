//! OpenPGP signature verification machinery.
//!
//! This crate is the signature verification core of the Tamarack
//! suite.  Given a [`Signature`] packet, a hash context that has
//! already digested the signed data, and a [`KeyStore`] holding the
//! locally known public keys, it decides whether the signature is
//! cryptographically valid, whether it is trustworthy in context (the
//! signing key existed when the signature was made, a signing subkey
//! is cross-certified, no unknown critical annotation degrades it),
//! and reports whether the signing key is expired or revoked.
//!
//! The verification recipes implemented here are defined in [Section
//! 5.2 of RFC 4880].  Verification over keys (bindings,
//! certifications, revocations, back signatures) is dispatched by
//! [`Verifier::verify_key_signature`]; verification over data by
//! [`Verifier::verify_data_signature`].
//!
//! A few things are deliberately *not* here: packet parsing, trust
//! models, network key retrieval, and signature creation.  This crate
//! consumes parsed packets and produces verdicts.
//!
//!   [Section 5.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.2
//!   [`Signature`]: packet/struct.Signature.html
//!   [`KeyStore`]: keydb/trait.KeyStore.html
//!   [`Verifier::verify_key_signature`]: verify/struct.Verifier.html#method.verify_key_signature
//!   [`Verifier::verify_data_signature`]: verify/struct.Verifier.html#method.verify_data_signature

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod fmt;
pub mod crypto;

pub mod packet;
pub use crate::packet::Packet;

mod keyblock;
pub use keyblock::Keyblock;
pub mod keydb;
pub use keydb::KeyStore;

pub mod status;
mod options;
pub use options::Options;

pub mod types;
use crate::types::{
    HashAlgorithm,
    PublicKeyAlgorithm,
    SignatureType,
};

mod fingerprint;
pub use fingerprint::Fingerprint;
mod keyid;
pub use keyid::KeyID;

pub mod verify;
pub use verify::Verifier;

/// Crate result specialization.
pub type Result<T> = ::std::result::Result<T, anyhow::Error>;

#[derive(thiserror::Error, Debug, Clone)]
/// Errors returned by this crate.
///
/// Note: This enum cannot be exhaustively matched to allow future
/// extensions.
pub enum Error {
    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unsupported hash algorithm identifier.
    ///
    /// Also returned when a digest algorithm is disabled by the weak
    /// digest policy.
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedHashAlgorithm(HashAlgorithm),

    /// Unsupported public key algorithm identifier.
    #[error("Unsupported public key algorithm: {0}")]
    UnsupportedPublicKeyAlgorithm(PublicKeyAlgorithm),

    /// Unsupported signature type.
    #[error("Unsupported signature type: {0}")]
    UnsupportedSignatureType(SignatureType),

    /// The signer's public key is not in the key store.
    #[error("No public key for {0}")]
    NoPublicKey(KeyID),

    /// The signer's public key is present but unusable.
    ///
    /// Typically a subkey that has no valid binding.
    #[error("Bad public key {0}")]
    BadPublicKey(KeyID),

    /// The key is newer than the signature, or lies in the future.
    ///
    /// The payload carries the diagnostic, including the magnitude of
    /// the skew in seconds or days.
    #[error("Time conflict: {0}")]
    TimeConflict(String),

    /// Bad signature.
    #[error("Bad signature: {0}")]
    BadSignature(String),

    /// A key signature misses the packet it certifies.
    ///
    /// For example, a subkey revocation with no preceding subkey, or
    /// a certification with no preceding user ID.
    #[error("Key signature without a preceding {0} packet")]
    MissingComponent(packet::Tag),

    /// Malformed MPI.
    #[error("Malformed MPI: {0}")]
    MalformedMPI(String),

    /// Catch-all for failures without a more specific code.
    ///
    /// Used for digest mismatches against the message headers, for
    /// strictly-required cross-certification that is absent, and for
    /// a refused re-entry into the designated-revoker resolver.
    #[error("{0}")]
    General(String),

    /// This marks this enum as non-exhaustive.  Do not use this
    /// variant.
    #[doc(hidden)] #[error("__Nonexhaustive")] __Nonexhaustive,
}
