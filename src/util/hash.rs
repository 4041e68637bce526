use std::hash::{BuildHasher, Hash, Hasher};

/// A test instrument with a fully controlled hash: the wrapped `hash` is fed to the hasher as-is
/// while equality considers only `value`. Together with [`EchoHasher`] this pins down exactly
/// which bucket a dictionary key lands in.
#[derive(Debug)]
#[allow(unused)]
pub struct FixedHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> FixedHash<T> {
    #[allow(unused)]
    pub const fn new(hash: u64, value: T) -> FixedHash<T> {
        FixedHash {
            hash,
            value,
        }
    }

    #[allow(unused)]
    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for FixedHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<T: Eq> PartialEq for FixedHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for FixedHash<T> {}

/// A hasher which folds input bytes into a u64 at their little-endian positions, so a single
/// hashed u64 comes back out unchanged. Useless for real hashing, ideal for deterministic bucket
/// placement in tests.
#[derive(Debug)]
pub struct EchoHasher {
    state: u64,
}

impl Hasher for EchoHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.state ^= u64::from(*byte) << ((offset % 8) * 8);
        }
    }
}

#[derive(Debug, Default)]
pub struct EchoHasherBuilder;

impl BuildHasher for EchoHasherBuilder {
    type Hasher = EchoHasher;

    fn build_hasher(&self) -> Self::Hasher {
        EchoHasher {
            state: 0
        }
    }
}
