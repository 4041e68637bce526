use std::num::NonZero;

/// The length of a non-empty list. Wrapping [`NonZero`] keeps the niche optimization for the
/// list's state enum while providing checked arithmetic in list terms.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(NonZero<usize>);

impl Length {
    pub const fn checked_add(self, other: usize) -> Option<Length> {
        match self.0.checked_add(other) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    /// Checked subtraction which also maps a zero result to [`None`], folding "now empty" into
    /// the same branch as underflow.
    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(res) => match NonZero::new(res) {
                Some(val) => Some(Length(val)),
                None => None,
            },
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
