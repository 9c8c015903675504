//! Signature verification.
//!
//! The verification state machine lives here.  A [`Verifier`] ties
//! together the ambient [`Options`], a [`KeyStore`], a status sink,
//! and the public key primitive, and exposes three entry points:
//!
//!   - [`verify_data_signature`] checks a signature over document
//!     data whose hash the caller has already computed;
//!   - [`verify_key_signature`] checks a signature over packets of a
//!     keyblock (bindings, certifications, revocations), deciding
//!     per signature type what gets hashed and which key must have
//!     signed;
//!   - [`check_backsig`] checks a subkey's cross certification.
//!
//! Whatever the entry point, verification funnels through the same
//! tail: validate the signer/signature metadata, feed the
//! signature's own metadata into the hash, encode the digest, and
//! ask the primitive.  Key expiry and revocation are reported out of
//! band; they are facts about the signer, not defects of the
//! signature.
//!
//!   [`Verifier`]: struct.Verifier.html
//!   [`Options`]: ../struct.Options.html
//!   [`KeyStore`]: ../keydb/trait.KeyStore.html
//!   [`verify_data_signature`]: struct.Verifier.html#method.verify_data_signature
//!   [`verify_key_signature`]: struct.Verifier.html#method.verify_key_signature
//!   [`check_backsig`]: struct.Verifier.html#method.check_backsig

use std::cell::Cell;

use base64::prelude::{Engine as _, BASE64_STANDARD_NO_PAD};

use crate::Error;
use crate::KeyID;
use crate::Keyblock;
use crate::Options;
use crate::Result;
use crate::crypto::{self, Builtin, VerifyBackend};
use crate::crypto::hash::{Context, Hash};
use crate::keydb::KeyStore;
use crate::packet::{BacksigStatus, Key, Packet, Signature, Tag,
                    VerificationStatus};
use crate::status::{Status, StatusSink};
use crate::types::{HashAlgorithm, SignatureType, Timestamp};

const TRACE: bool = false;

thread_local! {
    // Re-entry barrier for the designated revoker resolver.  Two
    // keys can designate each other and carry mutual revocations;
    // resolving one revocation then asks for the other key, whose
    // merge asks to resolve the mutual revocation, and so on.  The
    // barrier cuts the cycle: a nested resolution fails and poisons
    // the key against caching instead of recursing.
    static REVOCATION_BUSY: Cell<bool> = Cell::new(false);
}

static BUILTIN: Builtin = Builtin {};

/// What verifying a data signature reports beyond "the signature is
/// good".
#[derive(Clone, Debug)]
pub struct Verification {
    expired: bool,
    revoked: bool,
    expiration: Option<Timestamp>,
    signer: Key,
}

impl Verification {
    /// Returns whether the signing key is expired.
    pub fn expired(&self) -> bool {
        self.expired
    }

    /// Returns whether the signing key has been revoked.
    pub fn revoked(&self) -> bool {
        self.revoked
    }

    /// Returns when the signing key expires, if limited.
    pub fn expiration(&self) -> Option<Timestamp> {
        self.expiration
    }

    /// Returns the key that made the signature.
    pub fn signer(&self) -> &Key {
        &self.signer
    }
}

/// What verifying a key signature reports beyond "the signature is
/// good".
#[derive(Clone, Debug, Default)]
pub struct KeyVerification {
    selfsig: bool,
    expired: bool,
    expiration: Option<Timestamp>,
    signer: Option<Key>,
}

impl KeyVerification {
    /// Returns whether the signature is a self-signature.
    pub fn selfsig(&self) -> bool {
        self.selfsig
    }

    /// Returns whether the signing key is expired.
    pub fn expired(&self) -> bool {
        self.expired
    }

    /// Returns when the signing key expires, if that is known and
    /// limited.
    pub fn expiration(&self) -> Option<Timestamp> {
        self.expiration
    }

    /// Returns the key that made the signature, where the check
    /// identified one.
    pub fn signer(&self) -> Option<&Key> {
        self.signer.as_ref()
    }
}

/// Checks signatures.
///
/// A `Verifier` is cheap to construct; it borrows its collaborators
/// and keeps no state of its own.  One logical verification should
/// be in flight per thread: the designated revoker barrier is
/// thread-local, so concurrent verifications on separate threads are
/// isolated from each other, at the price that a mutual-revoker
/// cycle spanning threads would not be detected.
pub struct Verifier<'a> {
    opts: &'a Options,
    keydb: &'a dyn KeyStore,
    status: &'a dyn StatusSink,
    backend: &'a dyn VerifyBackend,
}

impl<'a> Verifier<'a> {
    /// Creates a verifier using the bundled verification primitive.
    pub fn new(opts: &'a Options, keydb: &'a dyn KeyStore,
               status: &'a dyn StatusSink)
               -> Self
    {
        Verifier {
            opts,
            keydb,
            status,
            backend: &BUILTIN,
        }
    }

    /// Replaces the verification primitive.
    pub fn with_backend(mut self, backend: &'a dyn VerifyBackend)
                        -> Self
    {
        self.backend = backend;
        self
    }

    /// Checks a signature over document data.
    ///
    /// `digest` must already contain the signed data; this function
    /// adds the signature's own metadata before finalizing.  (See
    /// Section 5.2 of RFC 4880: "The concatenation of the data being
    /// signed and the signature data from the version number through
    /// the hashed subpacket data (inclusive) is hashed.")
    ///
    /// Looks up the signer through the key store by the signature's
    /// issuer hint.  If the signer is a subkey, it must be valid and
    /// should be cross-certified; a missing back signature is a
    /// warning, or an error under
    /// [`Options::require_cross_cert`].
    ///
    /// On success, binary and text signatures additionally emit
    /// their deterministic identifier as a [`Status::SigId`] event.
    ///
    /// Never returns `Ok` for a signature that fails the
    /// cryptographic check.
    ///
    ///   [`Options::require_cross_cert`]: ../struct.Options.html#method.require_cross_cert
    ///   [`Status::SigId`]: ../status/enum.Status.html#variant.SigId
    pub fn verify_data_signature(&self, sig: &Signature,
                                 digest: &mut Context)
                                 -> Result<Verification>
    {
        tracer!(TRACE || self.opts.verbose(), "verify_data_signature");

        if !sig.hash_algo().is_supported() {
            return Err(Error::UnsupportedHashAlgorithm(
                sig.hash_algo()).into());
        }
        if !sig.pk_algo().is_supported() {
            return Err(Error::UnsupportedPublicKeyAlgorithm(
                sig.pk_algo()).into());
        }

        if !digest.is_enabled(sig.hash_algo()) {
            // The message announced other digests than the signature
            // uses.  This happens if a one-pass header does not
            // match the actual signature, and also if the clearsign
            // "Hash:" header is missing or does not match.
            trace!(!self.opts.quiet(),
                   "WARNING: signature digest conflict in message");
            return Err(Error::General(
                "signature digest conflict in message".into()).into());
        }

        let pk = self.keydb.lookup_by_keyid(sig.issuer())?;

        if !pk.valid() && !pk.primary() {
            // You cannot have a good sig from an invalid subkey.
            return Err(Error::BadPublicKey(pk.keyid()).into());
        }

        let mut expired = false;
        let mut revoked = false;
        let mut rc = self.check_signature_end(&pk, sig, digest,
                                              &mut expired,
                                              &mut revoked);

        // Check the cross certification.  The signer being a subkey
        // without a valid back signature means someone could have
        // taken the subkey and claimed ownership of its signatures.
        if rc.is_ok() && !pk.primary()
            && pk.backsig() != BacksigStatus::Valid
        {
            match pk.backsig() {
                BacksigStatus::Unchecked | BacksigStatus::Missing => {
                    trace!(!self.opts.quiet(),
                           "WARNING: signing subkey {} is not \
                            cross-certified", pk.keyid());
                    if self.opts.require_cross_cert() {
                        rc = Err(Error::General(format!(
                            "signing subkey {} is not cross-certified",
                            pk.keyid())).into());
                    }
                },
                BacksigStatus::Invalid => {
                    trace!(!self.opts.quiet(),
                           "WARNING: signing subkey {} has an invalid \
                            cross-certification", pk.keyid());
                    rc = Err(Error::General(format!(
                        "signing subkey {} has an invalid \
                         cross-certification", pk.keyid())).into());
                },
                BacksigStatus::Valid => unreachable!(),
            }
        }

        rc?;

        if sig.typ().is_document() {
            t!("good signature by {}, emitting its id", pk.keyid());
            self.emit_sig_id(sig);
        }

        Ok(Verification {
            expired,
            revoked,
            expiration: pk.expiration_time(),
            signer: pk,
        })
    }

    /// Checks a signature over packets of a keyblock.
    ///
    /// `index` names a signature packet inside `root`.  The
    /// signature's type decides what is hashed and who must have
    /// signed:
    ///
    ///   - a key revocation is checked against the primary key, or
    ///     routed through the designated revoker resolution if the
    ///     issuer is a third party;
    ///   - a subkey binding or revocation is checked over the
    ///     primary key and the nearest preceding subkey;
    ///   - a direct key signature is checked over the primary key;
    ///   - anything else certifies the nearest preceding user ID or
    ///     user attribute, and is checked against the primary key
    ///     (self-signature), against `check_pk` if the caller
    ///     supplied one, or against whatever key the key store
    ///     resolves the issuer to.
    ///
    /// Unless [`Options::no_sig_cache`] is set, a memoized outcome
    /// short-circuits the cryptography; the signer metadata is still
    /// validated so that expiry reflects the current clock.
    ///
    ///   [`Options::no_sig_cache`]: ../struct.Options.html#method.no_sig_cache
    pub fn verify_key_signature(&self, root: &Keyblock, index: usize,
                                check_pk: Option<&Key>)
                                -> Result<KeyVerification>
    {
        tracer!(TRACE || self.opts.verbose(), "verify_key_signature");

        let pk = root.primary();
        let sig = match root.get(index) {
            Some(Packet::Signature(sig)) => sig,
            _ => return Err(Error::InvalidArgument(format!(
                "packet {} is not a signature", index)).into()),
        };

        let mut out = KeyVerification::default();

        // A memoized outcome from an earlier check.  We may no
        // longer have the key or hash needed to verify the
        // signature, but can still use the cached verdict.
        if !self.opts.no_sig_cache()
            && sig.status() != VerificationStatus::Unchecked
        {
            out.selfsig = pk.keyid() == *sig.issuer();

            if out.selfsig || !self.opts.cache_checks_actual_signer() {
                // Historically the primary key stands in for the
                // actual signer here; see DESIGN.md.
                let mut revoked = false;
                self.check_metadata_validity(pk, sig,
                                             &mut out.expired,
                                             &mut revoked)?;
            } else {
                let signer = self.keydb.lookup_by_keyid(sig.issuer())?;
                let mut revoked = false;
                self.check_metadata_validity(&signer, sig,
                                             &mut out.expired,
                                             &mut revoked)?;
            }

            t!("using cached status of signature by {}: {:?}",
               sig.issuer(), sig.status());
            return match sig.status() {
                VerificationStatus::Good => Ok(out),
                _ => Err(Error::BadSignature(
                    "cached verification result".into()).into()),
            };
        }

        if !sig.pk_algo().is_supported() {
            return Err(Error::UnsupportedPublicKeyAlgorithm(
                sig.pk_algo()).into());
        }
        if !sig.hash_algo().is_supported() {
            return Err(Error::UnsupportedHashAlgorithm(
                sig.hash_algo()).into());
        }

        let mut revoked = false;
        match sig.typ() {
            SignatureType::KeyRevocation => {
                out.selfsig = pk.keyid() == *sig.issuer();
                if !out.selfsig {
                    // Is it a designated revoker?
                    self.check_revocation_keys(pk, sig)?;
                    Ok(out)
                } else {
                    let mut md = Context::new(sig.hash_algo())?;
                    pk.hash(&mut md);
                    let rc = self.check_signature_end(
                        pk, sig, &mut md, &mut out.expired,
                        &mut revoked);
                    Self::cache_sig_result(sig, &rc);
                    rc?;
                    out.signer = Some(pk.clone());
                    Ok(out)
                }
            },

            SignatureType::SubkeyRevocation
            | SignatureType::SubkeyBinding => {
                let sub = match root.find_prev(index, Tag::PublicSubkey) {
                    Some((_, Packet::PublicSubkey(sub))) => sub,
                    _ => {
                        t!("key {}: no subkey for subkey {} signature",
                           pk.keyid(),
                           if sig.typ() == SignatureType::SubkeyBinding {
                               "binding"
                           } else {
                               "revocation"
                           });
                        return Err(Error::MissingComponent(
                            Tag::PublicSubkey).into());
                    },
                };

                if sig.typ() == SignatureType::SubkeyBinding {
                    // It should always be a selfsig, but we cannot
                    // be sure, and need to be able to say.
                    out.selfsig = pk.keyid() == *sig.issuer();
                }

                let mut md = Context::new(sig.hash_algo())?;
                pk.hash(&mut md);
                sub.hash(&mut md);
                let rc = self.check_signature_end(
                    pk, sig, &mut md, &mut out.expired, &mut revoked);
                Self::cache_sig_result(sig, &rc);
                rc?;
                out.signer = Some(pk.clone());
                Ok(out)
            },

            SignatureType::DirectKey => {
                let mut md = Context::new(sig.hash_algo())?;
                pk.hash(&mut md);
                let rc = self.check_signature_end(
                    pk, sig, &mut md, &mut out.expired, &mut revoked);
                Self::cache_sig_result(sig, &rc);
                rc?;
                out.signer = Some(pk.clone());
                Ok(out)
            },

            // All other classes certify a user ID or user attribute.
            _ => {
                let unode = {
                    let uid = root.find_prev(index, Tag::UserID);
                    let ua = root.find_prev(index, Tag::UserAttribute);
                    // The nearer of the two.
                    match (uid, ua) {
                        (Some((i, u)), Some((j, a))) =>
                            Some(if i > j { u } else { a }),
                        (Some((_, u)), None) => Some(u),
                        (None, Some((_, a))) => Some(a),
                        (None, None) => None,
                    }
                };
                let unode = match unode {
                    Some(unode) => unode,
                    None => {
                        trace!(!self.opts.quiet(),
                               "key {}: no user ID for key signature \
                                packet of class {:02x}",
                               pk.keyid(), u8::from(sig.typ()));
                        return Err(Error::MissingComponent(
                            Tag::UserID).into());
                    },
                };

                let mut md = Context::new(sig.hash_algo())?;
                pk.hash(&mut md);
                Self::hash_uid_node(unode, &mut md, sig);

                let rc = if pk.keyid() == *sig.issuer() {
                    // The primary key is the signing key.
                    out.selfsig = true;
                    let rc = self.check_signature_end(
                        pk, sig, &mut md, &mut out.expired,
                        &mut revoked);
                    if rc.is_ok() {
                        out.signer = Some(pk.clone());
                    }
                    rc
                } else if let Some(check_pk) = check_pk {
                    // The caller specified a key.  Try that.
                    let rc = self.check_signature_end(
                        check_pk, sig, &mut md, &mut out.expired,
                        &mut revoked);
                    if rc.is_ok() {
                        out.signer = Some(check_pk.clone());
                    }
                    rc
                } else {
                    // Look up the key.
                    self.verify_data_signature(sig, &mut md)
                        .map(|v| {
                            out.expired = v.expired;
                            out.expiration = v.expiration;
                            out.signer = Some(v.signer);
                        })
                };

                Self::cache_sig_result(sig, &rc);
                rc?;
                Ok(out)
            },
        }
    }

    /// Checks whether a key revocation was issued by one of the
    /// key's designated revokers.
    ///
    /// `pk` is the key that `sig` allegedly revokes.  Returns `Ok`
    /// if the revocation is valid, i.e. `pk` is revoked.  A
    /// designated revoker being itself revoked does not invalidate
    /// its revocations; only the signature's cryptographic validity
    /// matters.  `Error::NoPublicKey` is only returned when the
    /// issuer is an advertised revoker whose key cannot be found,
    /// which is distinguishable from an issuer that is no revoker at
    /// all: that yields `Error::General`.
    ///
    /// Re-entry on the same thread is refused with `Error::General`,
    /// and `pk` is poisoned against caching, since its revocation
    /// status was not actually determined.
    ///
    /// # Panics
    ///
    /// `sig` must be a key revocation, and not a self-revocation.
    pub fn check_revocation_keys(&self, pk: &Key, sig: &Signature)
                                 -> Result<()>
    {
        assert_eq!(sig.typ(), SignatureType::KeyRevocation);
        assert!(*sig.issuer() != pk.keyid());

        if REVOCATION_BUSY.with(|busy| busy.get()) {
            // Return an error (i.e. not revoked), but mark the key
            // as uncacheable: we don't really know its revocation
            // status until it is checked directly.
            pk.set_dont_cache();
            return Err(Error::General(
                "designated revoker check already in progress"
                    .into()).into());
        }

        REVOCATION_BUSY.with(|busy| busy.set(true));
        let rc = self.check_revocation_keys_inner(pk, sig);
        REVOCATION_BUSY.with(|busy| busy.set(false));
        rc
    }

    fn check_revocation_keys_inner(&self, pk: &Key, sig: &Signature)
                                   -> Result<()>
    {
        tracer!(TRACE || self.opts.verbose(), "check_revocation_keys");
        t!("looking at {} with a sig from {}", pk.keyid(),
           sig.issuer());

        // Is the issuer of the sig one of our revokers?
        for revoker in pk.revocation_keys() {
            if KeyID::from(revoker.revoker()) == *sig.issuer() {
                // The signature was generated by a designated
                // revoker.  Verify the signature.
                let mut md = Context::new(sig.hash_algo())?;
                pk.hash(&mut md);
                // Note: this only checks that the signature is
                // good; a revoked revoker does not make it fail.
                let rc = self.verify_data_signature(sig, &mut md)
                    .map(|_| ());
                Self::cache_sig_result(sig, &rc);
                return rc;
            }
        }

        Err(Error::General(
            "issuer is not a designated revoker".into()).into())
    }

    /// Checks a subkey's back signature over the primary key.
    ///
    /// Back signatures (type 0x19) are hashed like binding
    /// signatures (0x18), but checked against the *subkey*: the
    /// subkey itself asserts that it belongs to the primary key.
    /// There is no expiry handling; what an expiring back signature
    /// would mean is questionable.
    pub fn check_backsig(&self, primary: &Key, subkey: &Key,
                         backsig: &Signature)
                         -> Result<()>
    {
        // Always check whether the algorithm is available; the
        // cached path must not hide an unusable signature behind an
        // old verdict.
        if !backsig.hash_algo().is_supported() {
            return Err(Error::UnsupportedHashAlgorithm(
                backsig.hash_algo()).into());
        }

        if !self.opts.no_sig_cache()
            && backsig.status() != VerificationStatus::Unchecked
        {
            return match backsig.status() {
                VerificationStatus::Good => Ok(()),
                _ => Err(Error::BadSignature(
                    "cached verification result".into()).into()),
            };
        }

        let mut md = Context::new(backsig.hash_algo())?;
        primary.hash(&mut md);
        subkey.hash(&mut md);

        let mut expired = false;
        let mut revoked = false;
        let rc = self.check_signature_end(subkey, backsig, &mut md,
                                          &mut expired, &mut revoked);
        Self::cache_sig_result(backsig, &rc);
        rc
    }

    /// The tail end of every verification: metadata, digest
    /// finalization, and the public key primitive.
    fn check_signature_end(&self, pk: &Key, sig: &Signature,
                           digest: &mut Context,
                           expired: &mut bool, revoked: &mut bool)
                           -> Result<()>
    {
        tracer!(TRACE || self.opts.verbose(), "check_signature_end");

        self.check_metadata_validity(pk, sig, expired, revoked)?;

        if !self.opts.allow_weak_digest_algos()
            && self.opts.weak_digests().contains(&sig.hash_algo())
        {
            trace!(!self.opts.quiet(),
                   "Note: signatures using the {} algorithm are \
                    rejected", sig.hash_algo());
            return Err(Error::UnsupportedHashAlgorithm(
                sig.hash_algo()).into());
        }

        // Make sure the digest algo is enabled (in case of a
        // detached signature).
        digest.enable(sig.hash_algo())?;

        // Complete the digest.
        sig.hash(digest);
        let d = digest.digest(sig.hash_algo())?;
        let d = crypto::encode_digest(pk, &d, sig.hash_algo())?;

        // Verify the signature.
        let mut rc = self.backend
            .pk_verify(sig.pk_algo(), &d, sig.mpis(), pk.mpis())
            .map_err(|e| {
                let keep = matches!(
                    e.downcast_ref::<Error>(),
                    Some(Error::UnsupportedPublicKeyAlgorithm(_))
                    | Some(Error::UnsupportedHashAlgorithm(_))
                    | Some(Error::BadSignature(_)));
                if keep {
                    e
                } else {
                    // Whatever else went wrong down there, the
                    // signature did not verify.
                    Error::BadSignature(e.to_string()).into()
                }
            });

        if rc.is_ok() && sig.unknown_critical() {
            t!("assuming bad signature from key {} due to an unknown \
                critical bit", pk.keyid());
            rc = Err(Error::BadSignature(format!(
                "assuming bad signature from key {} due to an \
                 unknown critical bit", pk.keyid())).into());
        }

        rc
    }

    /// Validates the signer/signature metadata.
    ///
    /// The key must have existed when the signature was made, and
    /// must not come from the future.  Expiry and revocation are
    /// reported through the out parameters and are *not* failures.
    fn check_metadata_validity(&self, pk: &Key, sig: &Signature,
                               expired: &mut bool, revoked: &mut bool)
                               -> Result<()>
    {
        tracer!(TRACE || self.opts.verbose(),
                "check_metadata_validity");

        *expired = false;
        *revoked = false;

        if pk.creation_time() > sig.timestamp() {
            let d = pk.creation_time().as_secs()
                - sig.timestamp().as_secs();
            let msg = format!("public key {} is {} newer than the \
                               signature", pk.keyid(), skew(d));
            trace!(!self.opts.quiet(), "{}", msg);
            if !self.opts.ignore_time_conflict() {
                return Err(Error::TimeConflict(msg).into());
            }
        }

        let cur_time = Timestamp::now();
        if pk.creation_time() > cur_time {
            let d = pk.creation_time().as_secs() - cur_time.as_secs();
            let msg = format!("key {} was created {} in the future \
                               (time warp or clock problem)",
                              pk.keyid(), skew(d));
            trace!(!self.opts.quiet(), "{}", msg);
            if !self.opts.ignore_time_conflict() {
                return Err(Error::TimeConflict(msg).into());
            }
        }

        // Check whether the key has expired.  We check the merged
        // flag as well as a simple compare against the current time,
        // in case the merge has for whatever reason not been done.
        if pk.expired()
            || pk.expiration_time().map(|e| e < cur_time)
                 .unwrap_or(false)
        {
            t!("Note: signature key {} expired {}", pk.keyid(),
               pk.expiration_time().unwrap_or_default()
                 .to_date_string());
            self.status.emit(Status::KeyExpired {
                expiration: pk.expiration_time().unwrap_or_default(),
            });
            *expired = true;
        }

        if pk.revoked() {
            t!("Note: signature key {} has been revoked", pk.keyid());
            *revoked = true;
        }

        Ok(())
    }

    /// Memoizes a verification outcome in the signature packet.
    ///
    /// Only proof counts: anything but success or a hard signature
    /// mismatch leaves the signature unchecked, so transient errors
    /// are not cached.
    fn cache_sig_result(sig: &Signature, rc: &Result<()>) {
        match rc {
            Ok(()) =>
                sig.set_status(VerificationStatus::Good),
            Err(e) => match e.downcast_ref::<Error>() {
                Some(Error::BadSignature(_)) =>
                    sig.set_status(VerificationStatus::Bad),
                _ =>
                    sig.set_status(VerificationStatus::Unchecked),
            },
        }
    }

    /// Adds a user ID or user attribute packet to the hash.
    ///
    /// v4 signatures frame the body with a tag octet and a four
    /// octet length (Section 5.2.4 of RFC 4880); v3 signatures hash
    /// the bare body.
    fn hash_uid_node(unode: &Packet, md: &mut Context,
                     sig: &Signature) {
        match unode {
            Packet::UserID(uid) => {
                if sig.version() >= 4 {
                    uid.hash(md);
                } else {
                    md.update(uid.value());
                }
            },
            Packet::UserAttribute(ua) => {
                if sig.version() >= 4 {
                    ua.hash(md);
                } else {
                    md.update(ua.value());
                }
            },
            _ => unreachable!("not a user ID packet"),
        }
    }

    /// Computes and emits the deterministic id of a data signature.
    ///
    /// The id is the radix-64 encoded SHA-1 of the signature's
    /// algorithms, timestamp, and MPIs in wire form.  This exact
    /// construction is a compatibility requirement: replay detection
    /// consumers compare ids across implementations, so neither the
    /// hash nor the field set may change.  (This id works best with
    /// the DLP algorithms, which use a random parameter per
    /// signature; with RSA, identical documents signed within one
    /// second collide.)
    fn emit_sig_id(&self, sig: &Signature) {
        let mut buffer = Vec::new();
        buffer.push(sig.pk_algo().into());
        buffer.push(sig.hash_algo().into());
        buffer.extend_from_slice(&sig.timestamp().to_be_bytes());
        for mpi in sig.mpis().mpis() {
            buffer.extend_from_slice(&mpi.to_pgp());
        }

        let mut ctx = Context::new(HashAlgorithm::SHA1)
            .expect("SHA1 is supported");
        ctx.update(&buffer);
        let hash = ctx.digest(HashAlgorithm::SHA1)
            .expect("enabled above");

        self.status.emit(Status::SigId {
            id: BASE64_STANDARD_NO_PAD.encode(hash),
            timestamp: sig.timestamp(),
        });
    }
}

/// Renders a time difference with second or day granularity.
fn skew(d: u32) -> String {
    if d < 86400 {
        format!("{} second{}", d, if d == 1 { "" } else { "s" })
    } else {
        let d = d / 86400;
        format!("{} day{}", d, if d == 1 { "" } else { "s" })
    }
}
