//! Runtime options for the verifier.

use crate::types::HashAlgorithm;

/// Ambient options consulted during verification.
///
/// The defaults are the strict ones; every loosening is an explicit
/// caller decision.
#[derive(Clone, Debug)]
pub struct Options {
    ignore_time_conflict: bool,
    require_cross_cert: bool,
    allow_weak_digest_algos: bool,
    weak_digests: Vec<HashAlgorithm>,
    no_sig_cache: bool,
    cache_checks_actual_signer: bool,
    verbose: bool,
    quiet: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            ignore_time_conflict: false,
            require_cross_cert: false,
            allow_weak_digest_algos: false,
            weak_digests: vec![HashAlgorithm::MD5],
            no_sig_cache: false,
            cache_checks_actual_signer: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl Options {
    /// Returns the default options.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns whether key-newer-than-signature conflicts are
    /// tolerated.
    pub fn ignore_time_conflict(&self) -> bool {
        self.ignore_time_conflict
    }

    /// Tolerates keys that are newer than the signatures they made,
    /// or lie in the future.  The conflicts are still traced.
    pub fn set_ignore_time_conflict(&mut self, yes: bool) -> &mut Self {
        self.ignore_time_conflict = yes;
        self
    }

    /// Returns whether subkey signatures require a valid back
    /// signature.
    pub fn require_cross_cert(&self) -> bool {
        self.require_cross_cert
    }

    /// Makes a missing back signature an error instead of a warning.
    pub fn set_require_cross_cert(&mut self, yes: bool) -> &mut Self {
        self.require_cross_cert = yes;
        self
    }

    /// Returns whether rejected digest algorithms are allowed
    /// anyway.
    pub fn allow_weak_digest_algos(&self) -> bool {
        self.allow_weak_digest_algos
    }

    /// Allows signatures over digests on the weak list.
    pub fn set_allow_weak_digest_algos(&mut self, yes: bool) -> &mut Self {
        self.allow_weak_digest_algos = yes;
        self
    }

    /// Returns the digest algorithms considered too weak to accept.
    pub fn weak_digests(&self) -> &[HashAlgorithm] {
        &self.weak_digests
    }

    /// Adds an algorithm to the weak digest list.
    pub fn add_weak_digest(&mut self, algo: HashAlgorithm) -> &mut Self {
        if !self.weak_digests.contains(&algo) {
            self.weak_digests.push(algo);
        }
        self
    }

    /// Returns whether cached verification results are ignored.
    pub fn no_sig_cache(&self) -> bool {
        self.no_sig_cache
    }

    /// Ignores cached verification results; every check redoes the
    /// cryptography.
    pub fn set_no_sig_cache(&mut self, yes: bool) -> &mut Self {
        self.no_sig_cache = yes;
        self
    }

    /// Returns whether the cache fast path validates metadata
    /// against the actual signer.
    pub fn cache_checks_actual_signer(&self) -> bool {
        self.cache_checks_actual_signer
    }

    /// Makes the cache fast path of the key-signature check look up
    /// the actual signer for the metadata validation.
    ///
    /// Historically the primary key is used even for third-party
    /// certifications; see DESIGN.md.  Enabling this costs a key
    /// database lookup per cached third-party signature.
    pub fn set_cache_checks_actual_signer(&mut self, yes: bool)
                                          -> &mut Self {
        self.cache_checks_actual_signer = yes;
        self
    }

    /// Returns whether tracing is verbose.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Enables verbose tracing.
    pub fn set_verbose(&mut self, yes: bool) -> &mut Self {
        self.verbose = yes;
        self
    }

    /// Returns whether warnings are suppressed.
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Suppresses warnings.
    pub fn set_quiet(&mut self, yes: bool) -> &mut Self {
        self.quiet = yes;
        self
    }
}
