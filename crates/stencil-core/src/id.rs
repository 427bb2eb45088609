//! Widget identity.
//!
//! An [`Id`] is a 32-bit FNV-1a hash of the enclosing scope's id and some
//! caller bytes (a label, an index, an address). The same chain of scopes
//! plus the same bytes always yields the same id, which is what lets the
//! engine recognise a widget from one frame to the next. Collisions between
//! unrelated widgets are possible and are not detected.

use std::fmt;

/// FNV-1a offset basis, used as the seed when no scope is pushed.
pub const HASH_INITIAL: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(pub u32);

impl Id {
    /// "No widget". Handlers registered under `NONE` are global.
    pub const NONE: Id = Id(0);
    pub const ROOT: Id = Id(HASH_INITIAL);

    /// Continues the hash chain from `seed` over `bytes`.
    pub fn hash(seed: Id, bytes: &[u8]) -> Id {
        let mut h = seed.0;
        for &b in bytes {
            h = (h ^ b as u32).wrapping_mul(FNV_PRIME);
        }
        Id(h)
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    pub fn is_some(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({:#010x})", self.0)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Things that can seed an id.
///
/// Strings and byte slices hash their contents; integers hash their
/// little-endian bytes, which is how loop indices get disambiguated.
pub trait IdSource {
    fn id_bytes(&self) -> std::borrow::Cow<'_, [u8]>;
}

impl IdSource for str {
    fn id_bytes(&self) -> std::borrow::Cow<'_, [u8]> {
        self.as_bytes().into()
    }
}

impl IdSource for String {
    fn id_bytes(&self) -> std::borrow::Cow<'_, [u8]> {
        self.as_bytes().into()
    }
}

impl IdSource for [u8] {
    fn id_bytes(&self) -> std::borrow::Cow<'_, [u8]> {
        self.into()
    }
}

macro_rules! int_id_source {
    ($($t:ty),*) => {$(
        impl IdSource for $t {
            fn id_bytes(&self) -> std::borrow::Cow<'_, [u8]> {
                self.to_le_bytes().to_vec().into()
            }
        }
    )*};
}

int_id_source!(i32, u32, i64, u64, usize);

impl<T: IdSource + ?Sized> IdSource for &T {
    fn id_bytes(&self) -> std::borrow::Cow<'_, [u8]> {
        (**self).id_bytes()
    }
}

/// Identity of a value by its address, for widgets bound to a `&mut T`.
pub fn ptr_bytes<T: ?Sized>(value: &T) -> [u8; std::mem::size_of::<usize>()] {
    (value as *const T as *const () as usize).to_ne_bytes()
}
