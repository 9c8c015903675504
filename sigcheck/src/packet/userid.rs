use std::fmt;

/// Holds a UserID packet.
///
/// See [Section 5.11 of RFC 4880] for details.  The body is
/// conventionally UTF-8 of the form `Name (Comment) <address>`, but
/// nothing is validated here; for hashing purposes it is an opaque
/// byte string.
///
///   [Section 5.11 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.11
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserID {
    value: Vec<u8>,
}

impl From<Vec<u8>> for UserID {
    fn from(u: Vec<u8>) -> Self {
        UserID {
            value: u,
        }
    }
}

impl From<&str> for UserID {
    fn from(u: &str) -> Self {
        u.as_bytes().to_vec().into()
    }
}

impl UserID {
    /// Gets the user ID packet's value.
    pub fn value(&self) -> &[u8] {
        self.value.as_slice()
    }
}

impl fmt::Display for UserID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let userid = String::from_utf8_lossy(&self.value[..]);
        write!(f, "{}", userid)
    }
}

impl fmt::Debug for UserID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let userid = String::from_utf8_lossy(&self.value[..]);
        write!(f, "UserID({:?})", userid)
    }
}
