//! Status events.
//!
//! Verification reports a few machine readable facts to an event
//! sink while it runs: that the signing key is expired, and the
//! deterministic id of a data signature.  The events carry the
//! historical keyword and payload format, so a consumer driving this
//! crate can feed them to tooling that grew up parsing a GnuPG
//! status fd.

use std::cell::RefCell;
use std::fmt;

use crate::types::Timestamp;

/// A status event emitted during verification.
///
/// Note: This enum cannot be exhaustively matched to allow future
/// extensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// The signing key is expired.
    KeyExpired {
        /// When the key expired; zero if only the merged flag says
        /// so.
        expiration: Timestamp,
    },

    /// The deterministic identifier of a data signature.
    ///
    /// Consumers use it for replay detection.
    SigId {
        /// Radix-64 identifier.
        id: String,
        /// The signature's creation time.
        timestamp: Timestamp,
    },
}

impl Status {
    /// Returns the event's keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Status::KeyExpired { .. } => "KEYEXPIRED",
            Status::SigId { .. } => "SIG_ID",
        }
    }

    /// Returns the event's payload string.
    pub fn payload(&self) -> String {
        match self {
            Status::KeyExpired { expiration } =>
                format!("{}", expiration.as_secs()),
            Status::SigId { id, timestamp } =>
                format!("{} {} {}", id, timestamp.to_date_string(),
                        timestamp.as_secs()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.keyword(), self.payload())
    }
}

/// A fire-and-forget receiver for status events.
pub trait StatusSink {
    /// Delivers one event.  Failures are the sink's problem.
    fn emit(&self, status: Status);
}

/// A sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard {}

impl StatusSink for Discard {
    fn emit(&self, _: Status) {
    }
}

/// A sink that records every event, in order.
#[derive(Debug, Default)]
pub struct Recorder {
    events: RefCell<Vec<Status>>,
}

impl Recorder {
    /// Returns a new empty recorder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the recorded events, in emission order.
    pub fn events(&self) -> Vec<Status> {
        self.events.borrow().clone()
    }
}

impl StatusSink for Recorder {
    fn emit(&self, status: Status) {
        self.events.borrow_mut().push(status);
    }
}
