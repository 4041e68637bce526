use std::fmt::{self, Debug, Formatter};

/// Wraps a preformatted [`String`] so that it passes through [`Debug`] unquoted. Used to compose
/// container internals into `debug_struct` fields.
pub struct Unquoted(pub String);

impl Debug for Unquoted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
