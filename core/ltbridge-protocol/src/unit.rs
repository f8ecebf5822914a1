use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

bitflags! {
    /// Kind markers carried by a [`LexicalUnit`](crate::LexicalUnit).
    ///
    /// `SPACE_TOKEN` never appears without `UNKNOWN`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct UnitFlags: u8 {
        /// No analysis was available; lemma and symbols echo the surface form.
        const UNKNOWN = 1;
        /// Whitespace or bare punctuation carried through unanalysed.
        const SPACE_TOKEN = 2;
    }
}

impl UnitFlags {
    /// Restores the `SPACE_TOKEN => UNKNOWN` implication.
    pub const fn normalized(self) -> Self {
        if self.contains(Self::SPACE_TOKEN) {
            self.union(Self::UNKNOWN)
        } else {
            self
        }
    }
}

// rkyv support for UnitFlags
impl Archive for UnitFlags {
    type Archived = u8;
    type Resolver = ();

    unsafe fn resolve(&self, _pos: usize, _resolver: Self::Resolver, out: *mut Self::Archived) {
        out.write(self.bits());
    }
}

impl<S: rkyv::Fallible + ?Sized> Serialize<S> for UnitFlags {
    fn serialize(&self, _serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        Ok(())
    }
}

impl<D: rkyv::Fallible + ?Sized> Deserialize<UnitFlags, D> for u8 {
    fn deserialize(&self, _deserializer: &mut D) -> Result<UnitFlags, D::Error> {
        Ok(UnitFlags::from_bits_truncate(*self).normalized())
    }
}
