use derive_more::{Display, Error};

/// The error produced when an index resolves outside a container's valid range. `index` holds the
/// index exactly as the caller provided it, before any negative-index resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for container with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: isize,
    pub len: usize,
}

/// The error produced when a container's backing allocation or tracked length would exceed the
/// maximum the platform can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
