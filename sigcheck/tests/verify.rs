//! End-to-end verification tests over the public API.
//!
//! The fixtures are synthesized: an RSA key with a public exponent
//! of one makes the verification equation `s^e = EM (mod n)` hold
//! exactly when the signature MPI equals the PKCS#1 frame of the
//! digest, so signatures can be "issued" by computing the same hash
//! chain the verifier computes.  That exercises the real digest
//! pipeline, framing, and big-integer comparison without a signing
//! implementation.

use std::cell::{Cell, RefCell};

use tamarack_sigcheck::{Error, KeyID, Keyblock, Options, Result,
                        Verifier};
use tamarack_sigcheck::crypto::{self, Builtin, VerifyBackend};
use tamarack_sigcheck::crypto::hash::{Context, Hash};
use tamarack_sigcheck::crypto::mpi::{self, MPI};
use tamarack_sigcheck::keydb::{KeyRing, KeyStore};
use tamarack_sigcheck::Packet;
use tamarack_sigcheck::packet::{Key, Signature, VerificationStatus};
use tamarack_sigcheck::status::{Discard, Recorder, Status};
use tamarack_sigcheck::types::{HashAlgorithm, PublicKeyAlgorithm,
                               RevocationKey, SignatureType,
                               Timestamp};

const KEY_CREATION: u32 = 1136073600;
const SIG_TIME: u32 = 1136073600 + 86400;

fn rsa_key(creation: u32) -> Key {
    Key::new(Timestamp::from(creation),
             PublicKeyAlgorithm::RSAEncryptSign,
             mpi::PublicKey::RSA {
                 e: MPI::new(&[1]),
                 n: MPI::new(&[0xFF; 256]),
             })
}

fn sig_packet(typ: SignatureType, signer: &Key, timestamp: u32)
              -> Signature
{
    let mut sig = Signature::new(
        4, typ, signer.pk_algo(), HashAlgorithm::SHA256,
        Timestamp::from(timestamp), signer.keyid(),
        mpi::Signature::RSA { s: MPI::new(&[0]) });
    sig.set_hashed_area(vec![0xA5, 0x01, 0x02, 0x03]);
    sig
}

/// "Issues" the signature: finalizes the digest the way the
/// verifier will, and stores its PKCS#1 frame as the signature MPI.
fn seal(signer: &Key, sig: &mut Signature, md: &Context) {
    let mut md = md.clone();
    sig.hash(&mut md);
    let digest = md.digest(sig.hash_algo()).unwrap();
    let em = crypto::encode_digest(signer, &digest, sig.hash_algo())
        .unwrap();
    sig.set_mpis(mpi::Signature::RSA { s: MPI::new(em.value()) });
}

fn data_context(payload: &[u8]) -> Context {
    let mut ctx = Context::new(HashAlgorithm::SHA256).unwrap();
    ctx.update(payload);
    ctx
}

fn err_of(e: anyhow::Error) -> Error {
    e.downcast::<Error>().expect("crate error")
}

/// Counts invocations of the bundled primitive.
#[derive(Default)]
struct Counting {
    inner: Builtin,
    calls: Cell<usize>,
}

impl VerifyBackend for Counting {
    fn pk_verify(&self, pk_algo: PublicKeyAlgorithm, digest: &MPI,
                 sig: &mpi::Signature, key: &mpi::PublicKey)
                 -> Result<()>
    {
        self.calls.set(self.calls.get() + 1);
        self.inner.pk_verify(pk_algo, digest, sig, key)
    }
}

#[test]
fn good_rsa_data_signature() {
    let key = rsa_key(KEY_CREATION);
    let mut sig = sig_packet(SignatureType::Binary, &key, SIG_TIME);
    seal(&key, &mut sig, &data_context(b"hello\n"));

    let mut ring = KeyRing::new();
    ring.insert(key.clone());
    let opts = Options::new();
    let status = Recorder::new();

    let v = Verifier::new(&opts, &ring, &status)
        .verify_data_signature(&sig, &mut data_context(b"hello\n"))
        .unwrap();
    assert!(!v.expired());
    assert!(!v.revoked());
    assert_eq!(v.signer().keyid(), key.keyid());

    // No events beyond the signature id.
    let events = status.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        Status::SigId { id, timestamp } => {
            // 20 bytes of SHA-1 in unpadded radix-64.
            assert_eq!(id.len(), 27);
            assert_eq!(timestamp.as_secs(), SIG_TIME);
        },
        e => panic!("unexpected event {}", e),
    }

    // The wrong payload does not verify.
    let err = Verifier::new(&opts, &ring, &status)
        .verify_data_signature(&sig, &mut data_context(b"hello"))
        .unwrap_err();
    assert!(matches!(err_of(err), Error::BadSignature(_)));
}

#[test]
fn tampered_hashed_area_is_detected() {
    let key = rsa_key(KEY_CREATION);
    let mut sig = sig_packet(SignatureType::Binary, &key, SIG_TIME);
    seal(&key, &mut sig, &data_context(b"hello\n"));

    // Flip one bit in the authenticated subpacket area.
    let mut area = sig.hashed_area().to_vec();
    area[0] ^= 0x01;
    sig.set_hashed_area(area);

    let mut ring = KeyRing::new();
    ring.insert(key);
    let opts = Options::new();

    let err = Verifier::new(&opts, &ring, &Discard::default())
        .verify_data_signature(&sig, &mut data_context(b"hello\n"))
        .unwrap_err();
    assert!(matches!(err_of(err), Error::BadSignature(_)));
}

#[test]
fn stretched_hashed_area_is_detected() {
    // Appending to the hashed area moves the trailer's
    // authenticated length; the digest changes even though the
    // original bytes are still a prefix.
    let key = rsa_key(KEY_CREATION);
    let mut sig = sig_packet(SignatureType::Binary, &key, SIG_TIME);
    seal(&key, &mut sig, &data_context(b"hello\n"));

    let mut area = sig.hashed_area().to_vec();
    area.push(0x00);
    sig.set_hashed_area(area);

    let mut ring = KeyRing::new();
    ring.insert(key);
    let opts = Options::new();

    let err = Verifier::new(&opts, &ring, &Discard::default())
        .verify_data_signature(&sig, &mut data_context(b"hello\n"))
        .unwrap_err();
    assert!(matches!(err_of(err), Error::BadSignature(_)));
}

#[test]
fn v3_data_signature() {
    let key = rsa_key(KEY_CREATION);
    let mut sig = Signature::new(
        3, SignatureType::Binary, key.pk_algo(),
        HashAlgorithm::SHA256, Timestamp::from(SIG_TIME),
        key.keyid(), mpi::Signature::RSA { s: MPI::new(&[0]) });
    seal(&key, &mut sig, &data_context(b"hello\n"));

    let mut ring = KeyRing::new();
    ring.insert(key);
    let opts = Options::new();

    assert!(Verifier::new(&opts, &ring, &Discard::default())
            .verify_data_signature(&sig, &mut data_context(b"hello\n"))
            .is_ok());

    // A v3 signature is bound to its timestamp.
    let mut other = Signature::new(
        3, SignatureType::Binary, sig.pk_algo(), sig.hash_algo(),
        Timestamp::from(SIG_TIME + 1), sig.issuer().clone(),
        sig.mpis().clone());
    other.set_hashed_area(sig.hashed_area().to_vec());
    let err = Verifier::new(&opts, &ring, &Discard::default())
        .verify_data_signature(&other, &mut data_context(b"hello\n"))
        .unwrap_err();
    assert!(matches!(err_of(err), Error::BadSignature(_)));
}

#[test]
fn expired_key_still_verifies() {
    let mut key = rsa_key(KEY_CREATION);
    // Expired long ago, but after the signature was made.
    key.set_expiration_time(Some(Timestamp::from(SIG_TIME + 86400)));
    let mut sig = sig_packet(SignatureType::Binary, &key, SIG_TIME);
    seal(&key, &mut sig, &data_context(b"hello\n"));

    let mut ring = KeyRing::new();
    ring.insert(key);
    let opts = Options::new();
    let status = Recorder::new();

    let v = Verifier::new(&opts, &ring, &status)
        .verify_data_signature(&sig, &mut data_context(b"hello\n"))
        .unwrap();
    assert!(v.expired());
    assert_eq!(v.expiration(),
               Some(Timestamp::from(SIG_TIME + 86400)));

    let events = status.events();
    assert_eq!(events[0], Status::KeyExpired {
        expiration: Timestamp::from(SIG_TIME + 86400),
    });
}

/// Builds a canonical keyblock whose self-signatures all verify.
/// When `tamper` names a packet index, that signature's hashed area
/// is modified after issuing.
fn make_block(primary: &Key, tamper: Option<usize>)
              -> (Keyblock, Vec<usize>)
{
    use tamarack_sigcheck::packet::{UserAttribute, UserID};

    let uid = UserID::from("Alice Lovelace <alice@example.org>");
    let attr = UserAttribute::from(vec![0x01, 0x10, 0x20, 0x30]);
    let mut subkey = rsa_key(KEY_CREATION + 1);
    subkey.set_primary(false);

    let hash_primary = || {
        let mut md = Context::new(HashAlgorithm::SHA256).unwrap();
        primary.hash(&mut md);
        md
    };

    // User ID certification.
    let mut uid_cert = sig_packet(
        SignatureType::PositiveCertification, primary, SIG_TIME);
    let mut md = hash_primary();
    uid.hash(&mut md);
    seal(primary, &mut uid_cert, &md);

    // User attribute certification.
    let mut attr_cert = sig_packet(
        SignatureType::GenericCertification, primary, SIG_TIME);
    let mut md = hash_primary();
    attr.hash(&mut md);
    seal(primary, &mut attr_cert, &md);

    // Subkey binding and revocation.
    let mut binding = sig_packet(
        SignatureType::SubkeyBinding, primary, SIG_TIME);
    let mut md = hash_primary();
    subkey.hash(&mut md);
    seal(primary, &mut binding, &md);

    let mut subkey_rev = sig_packet(
        SignatureType::SubkeyRevocation, primary, SIG_TIME);
    let mut md = hash_primary();
    subkey.hash(&mut md);
    seal(primary, &mut subkey_rev, &md);

    // Direct key signature and key revocation.
    let mut direct = sig_packet(
        SignatureType::DirectKey, primary, SIG_TIME);
    seal(primary, &mut direct, &hash_primary());

    let mut key_rev = sig_packet(
        SignatureType::KeyRevocation, primary, SIG_TIME);
    seal(primary, &mut key_rev, &hash_primary());

    let mut packets = vec![
        primary.clone().into(),  // 0
        uid.into(),              // 1
        uid_cert.into(),         // 2
        attr.into(),             // 3
        attr_cert.into(),        // 4
        subkey.into(),           // 5
        binding.into(),          // 6
        subkey_rev.into(),       // 7
        direct.into(),           // 8
        key_rev.into(),          // 9
    ];
    let sig_indices = vec![2, 4, 6, 7, 8, 9];

    if let Some(index) = tamper {
        if let Packet::Signature(sig) =
            &mut packets[index]
        {
            let mut area = sig.hashed_area().to_vec();
            area[0] ^= 0x80;
            sig.set_hashed_area(area);
        } else {
            panic!("tamper index {} is not a signature", index);
        }
    }

    (Keyblock::from_packets(packets).unwrap(), sig_indices)
}

#[test]
fn keyblock_self_signatures_roundtrip() {
    let primary = rsa_key(KEY_CREATION);
    let (block, sig_indices) = make_block(&primary, None);

    let ring = KeyRing::new();
    let opts = Options::new();
    let discard = Discard::default();
    let verifier = Verifier::new(&opts, &ring, &discard);

    for &i in &sig_indices {
        let v = verifier.verify_key_signature(&block, i, None)
            .unwrap_or_else(|e| panic!("signature {} failed: {}", i, e));
        assert!(v.selfsig(), "signature {} not recognized as selfsig", i);
        assert!(!v.expired());
    }

    // A second pass over the same block takes the cache.
    for &i in &sig_indices {
        assert!(verifier.verify_key_signature(&block, i, None).is_ok());
    }
}

#[test]
fn keyblock_tampering_is_isolated() {
    let primary = rsa_key(KEY_CREATION);
    let ring = KeyRing::new();
    let opts = Options::new();
    let discard = Discard::default();
    let verifier = Verifier::new(&opts, &ring, &discard);

    let sig_indices = make_block(&primary, None).1;
    for &bad in &sig_indices {
        let (block, _) = make_block(&primary, Some(bad));
        for &i in &sig_indices {
            let result = verifier.verify_key_signature(&block, i, None);
            if i == bad {
                assert!(matches!(err_of(result.unwrap_err()),
                                 Error::BadSignature(_)),
                        "signature {} should have failed", i);
            } else {
                assert!(result.is_ok(),
                        "signature {} should have survived", i);
            }
        }
    }
}

#[test]
fn key_signature_without_neighbor() {
    let primary = rsa_key(KEY_CREATION);

    // A subkey binding with no subkey before it.
    let mut binding = sig_packet(
        SignatureType::SubkeyBinding, &primary, SIG_TIME);
    let mut md = Context::new(HashAlgorithm::SHA256).unwrap();
    primary.hash(&mut md);
    seal(&primary, &mut binding, &md);

    let block = Keyblock::from_packets(vec![
        primary.clone().into(),
        binding.into(),
    ]).unwrap();

    let ring = KeyRing::new();
    let opts = Options::new();
    let err = Verifier::new(&opts, &ring, &Discard::default())
        .verify_key_signature(&block, 1, None)
        .unwrap_err();
    assert!(matches!(err_of(err), Error::MissingComponent(_)));
}

#[test]
fn third_party_certification() {
    use tamarack_sigcheck::packet::UserID;

    let primary = rsa_key(KEY_CREATION);
    let mut certifier = rsa_key(KEY_CREATION);
    certifier.set_expiration_time(
        Some(Timestamp::from(u32::MAX)));
    let uid = UserID::from("Alice Lovelace <alice@example.org>");

    let build = || {
        let mut cert = sig_packet(
            SignatureType::GenericCertification, &certifier, SIG_TIME);
        let mut md = Context::new(HashAlgorithm::SHA256).unwrap();
        primary.hash(&mut md);
        uid.hash(&mut md);
        seal(&certifier, &mut cert, &md);

        Keyblock::from_packets(vec![
            primary.clone().into(),
            uid.clone().into(),
            cert.into(),
        ]).unwrap()
    };

    // With the certifier supplied by the caller.
    let block = build();
    let ring = KeyRing::new();
    let opts = Options::new();
    let v = Verifier::new(&opts, &ring, &Discard::default())
        .verify_key_signature(&block, 2, Some(&certifier))
        .unwrap();
    assert!(!v.selfsig());
    assert_eq!(v.signer().unwrap().keyid(), certifier.keyid());

    // With the certifier resolved through the key store.
    let block = build();
    let mut ring = KeyRing::new();
    ring.insert(certifier.clone());
    let v = Verifier::new(&opts, &ring, &Discard::default())
        .verify_key_signature(&block, 2, None)
        .unwrap();
    assert!(!v.selfsig());
    assert_eq!(v.signer().unwrap().keyid(), certifier.keyid());
    assert_eq!(v.expiration(), Some(Timestamp::from(u32::MAX)));

    // Unknown certifier.
    let block = build();
    let ring = KeyRing::new();
    let err = Verifier::new(&opts, &ring, &Discard::default())
        .verify_key_signature(&block, 2, None)
        .unwrap_err();
    assert!(matches!(err_of(err), Error::NoPublicKey(_)));
}

#[test]
fn cache_fast_path_skips_the_crypto() {
    let primary = rsa_key(KEY_CREATION);
    let (block, _) = make_block(&primary, None);

    let ring = KeyRing::new();
    let opts = Options::new();
    let counting = Counting::default();
    let discard = Discard::default();
    let verifier = Verifier::new(&opts, &ring, &discard)
        .with_backend(&counting);

    assert!(verifier.verify_key_signature(&block, 2, None).is_ok());
    assert_eq!(counting.calls.get(), 1);

    // Memoized; the primitive is not consulted again.
    assert!(verifier.verify_key_signature(&block, 2, None).is_ok());
    assert_eq!(counting.calls.get(), 1);

    // Unless caching is off.
    let mut nocache = Options::new();
    nocache.set_no_sig_cache(true);
    let verifier = Verifier::new(&nocache, &ring, &discard)
        .with_backend(&counting);
    assert!(verifier.verify_key_signature(&block, 2, None).is_ok());
    assert_eq!(counting.calls.get(), 2);
}

#[test]
fn cache_fast_path_reports_fresh_expiry() {
    let mut primary = rsa_key(KEY_CREATION);
    primary.set_expiration_time(
        Some(Timestamp::from(SIG_TIME + 86400)));
    let (block, _) = make_block(&primary, None);

    // Pretend an earlier run proved the certification good; the
    // signature MPIs don't even matter anymore.
    match block.get(2).unwrap() {
        Packet::Signature(sig) =>
            sig.set_status(VerificationStatus::Good),
        _ => unreachable!(),
    }

    let ring = KeyRing::new();
    let opts = Options::new();
    let status = Recorder::new();
    let counting = Counting::default();
    let v = Verifier::new(&opts, &ring, &status)
        .with_backend(&counting)
        .verify_key_signature(&block, 2, None)
        .unwrap();

    assert_eq!(counting.calls.get(), 0);
    assert!(v.selfsig());
    assert!(v.expired());
    assert!(status.events().iter()
            .any(|e| matches!(e, Status::KeyExpired { .. })));

    // A cached bad verdict also skips the crypto.
    match block.get(4).unwrap() {
        Packet::Signature(sig) =>
            sig.set_status(VerificationStatus::Bad),
        _ => unreachable!(),
    }
    let err = Verifier::new(&opts, &ring, &status)
        .with_backend(&counting)
        .verify_key_signature(&block, 4, None)
        .unwrap_err();
    assert!(matches!(err_of(err), Error::BadSignature(_)));
    assert_eq!(counting.calls.get(), 0);
}

fn designated_revocation(revokee: &Key, revoker: &Key) -> Signature {
    let mut rev = sig_packet(
        SignatureType::KeyRevocation, revoker, SIG_TIME);
    let mut md = Context::new(HashAlgorithm::SHA256).unwrap();
    revokee.hash(&mut md);
    seal(revoker, &mut rev, &md);
    rev
}

#[test]
fn designated_revoker() {
    let mut revokee = rsa_key(KEY_CREATION);
    let revoker = rsa_key(KEY_CREATION);
    revokee.add_revocation_key(RevocationKey::new(
        revoker.pk_algo(), revoker.fingerprint(), false));

    let revoked_block = || Keyblock::from_packets(vec![
        revokee.clone().into(),
        designated_revocation(&revokee, &revoker).into(),
    ]).unwrap();

    let block = revoked_block();
    let mut ring = KeyRing::new();
    ring.insert(revoker.clone());
    let opts = Options::new();
    let v = Verifier::new(&opts, &ring, &Discard::default())
        .verify_key_signature(&block, 1, None)
        .unwrap();
    assert!(!v.selfsig());

    // The verdict is memoized in the revocation signature.
    match block.get(1).unwrap() {
        Packet::Signature(sig) =>
            assert_eq!(sig.status(), VerificationStatus::Good),
        _ => unreachable!(),
    }

    // The advertised revoker's key being absent is a distinct
    // failure ...
    let block = revoked_block();
    let empty = KeyRing::new();
    let err = Verifier::new(&opts, &empty, &Discard::default())
        .verify_key_signature(&block, 1, None)
        .unwrap_err();
    assert!(matches!(err_of(err), Error::NoPublicKey(_)));

    // ... from the issuer not being a revoker at all.
    let stranger = rsa_key(KEY_CREATION + 17);
    let rev = designated_revocation(&revokee, &stranger);
    let block = Keyblock::from_packets(vec![
        revokee.clone().into(),
        rev.into(),
    ]).unwrap();
    let mut ring = KeyRing::new();
    ring.insert(stranger);
    let err = Verifier::new(&opts, &ring, &Discard::default())
        .verify_key_signature(&block, 1, None)
        .unwrap_err();
    assert!(matches!(err_of(err), Error::General(_)));
}

/// A key store that, like a real key database, evaluates a key's
/// own designated revocations while merging it for a lookup.
struct MergingStore {
    merged: Key,
    merged_revocation: Signature,
    refusal: RefCell<Option<Error>>,
}

impl KeyStore for MergingStore {
    fn lookup_by_keyid(&self, keyid: &KeyID) -> Result<Key> {
        if *keyid == self.merged.keyid() {
            let opts = Options::new();
            let empty = KeyRing::new();
            let discard = Discard::default();
            let verifier = Verifier::new(&opts, &empty,
                                         &discard);
            let err = verifier
                .check_revocation_keys(&self.merged,
                                       &self.merged_revocation)
                .expect_err("nested resolution must be refused");
            self.refusal.borrow_mut()
                .replace(err.downcast::<Error>().unwrap());
            Ok(self.merged.clone())
        } else {
            Err(Error::NoPublicKey(keyid.clone()).into())
        }
    }
}

#[test]
fn designated_revoker_ring_is_cut() {
    // A is revoked by B, B by C, C by A; resolving A's revocation
    // looks up B, whose merge wants to resolve B's revocation.  The
    // nested resolution is refused and B is poisoned against
    // caching; the outer verification is undisturbed.
    let mut a = rsa_key(KEY_CREATION);
    let mut b = rsa_key(KEY_CREATION + 1);
    let c = rsa_key(KEY_CREATION + 2);

    a.add_revocation_key(RevocationKey::new(
        b.pk_algo(), b.fingerprint(), false));
    b.add_revocation_key(RevocationKey::new(
        c.pk_algo(), c.fingerprint(), false));

    let rev_a = designated_revocation(&a, &b);
    let rev_b = designated_revocation(&b, &c);

    let block = Keyblock::from_packets(vec![
        a.clone().into(),
        rev_a.into(),
    ]).unwrap();

    let store = MergingStore {
        merged: b,
        merged_revocation: rev_b,
        refusal: RefCell::new(None),
    };

    let opts = Options::new();
    let v = Verifier::new(&opts, &store, &Discard::default())
        .verify_key_signature(&block, 1, None)
        .unwrap();
    assert!(!v.selfsig());

    // The inner resolution was refused, not recursed into.
    match store.refusal.borrow().as_ref() {
        Some(Error::General(msg)) =>
            assert!(msg.contains("already in progress"), "{}", msg),
        other => panic!("unexpected refusal {:?}", other),
    }
    assert!(store.merged.dont_cache());
}

#[test]
fn backsig() {
    let primary = rsa_key(KEY_CREATION);
    let mut subkey = rsa_key(KEY_CREATION + 1);
    subkey.set_primary(false);

    let issue = || {
        let mut backsig = sig_packet(
            SignatureType::PrimaryKeyBinding, &subkey, SIG_TIME);
        let mut md = Context::new(HashAlgorithm::SHA256).unwrap();
        primary.hash(&mut md);
        subkey.hash(&mut md);
        seal(&subkey, &mut backsig, &md);
        backsig
    };

    let ring = KeyRing::new();
    let opts = Options::new();
    let counting = Counting::default();
    let discard = Discard::default();
    let verifier = Verifier::new(&opts, &ring, &discard)
        .with_backend(&counting);

    let backsig = issue();
    assert!(verifier.check_backsig(&primary, &subkey, &backsig)
            .is_ok());
    assert_eq!(counting.calls.get(), 1);
    assert_eq!(backsig.status(), VerificationStatus::Good);

    // Cached on the second try.
    assert!(verifier.check_backsig(&primary, &subkey, &backsig)
            .is_ok());
    assert_eq!(counting.calls.get(), 1);

    // A tampered back signature fails, and the failure is cached.
    let mut bad = issue();
    let mut area = bad.hashed_area().to_vec();
    area[0] ^= 0x01;
    bad.set_hashed_area(area);
    let err = verifier.check_backsig(&primary, &subkey, &bad)
        .unwrap_err();
    assert!(matches!(err_of(err), Error::BadSignature(_)));
    assert_eq!(bad.status(), VerificationStatus::Bad);
    assert_eq!(counting.calls.get(), 2);
    let err = verifier.check_backsig(&primary, &subkey, &bad)
        .unwrap_err();
    assert!(matches!(err_of(err), Error::BadSignature(_)));
    assert_eq!(counting.calls.get(), 2);
}

#[test]
fn events_flow_to_the_sink_in_order() {
    // KEYEXPIRED precedes SIG_ID: the metadata is evaluated before
    // the signature id is assembled.
    let mut key = rsa_key(KEY_CREATION);
    key.set_expiration_time(Some(Timestamp::from(SIG_TIME + 1)));
    let mut sig = sig_packet(SignatureType::Text, &key, SIG_TIME);
    seal(&key, &mut sig, &data_context(b"hello\n"));

    let mut ring = KeyRing::new();
    ring.insert(key);
    let opts = Options::new();
    let status = Recorder::new();
    Verifier::new(&opts, &ring, &status)
        .verify_data_signature(&sig, &mut data_context(b"hello\n"))
        .unwrap();

    let events = status.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], Status::KeyExpired { .. }));
    assert!(matches!(events[1], Status::SigId { .. }));
}
