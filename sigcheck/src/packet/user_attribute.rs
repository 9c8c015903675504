use std::fmt;

/// Holds a UserAttribute packet.
///
/// See [Section 5.12 of RFC 4880] for details.  The body is a
/// sequence of attribute subpackets, typically holding an image;
/// this crate treats it as an opaque byte string.
///
///   [Section 5.12 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.12
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserAttribute {
    value: Vec<u8>,
}

impl From<Vec<u8>> for UserAttribute {
    fn from(u: Vec<u8>) -> Self {
        UserAttribute {
            value: u,
        }
    }
}

impl UserAttribute {
    /// Gets the user attribute packet's raw value.
    pub fn value(&self) -> &[u8] {
        self.value.as_slice()
    }
}

impl fmt::Debug for UserAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UserAttribute")
            .field("value", &crate::fmt::hex::encode(&self.value))
            .finish()
    }
}
