//! Typed identifiers.
//!
//! Both ids are plain `u32` indices into dense storage: `EntityId` into
//! `Population`, `PatchId` into the world's patch vector.  `u32::MAX` is
//! reserved as the "unset" marker.

use std::fmt;

/// Generate a `u32` index wrapper with a short display prefix.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident, $prefix:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Marker for "no id".
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a cop or agent in `Population` storage.
    ///
    /// Cops occupy the low ids, agents follow.
    pub struct EntityId, "entity";
}

typed_id! {
    /// Row-major index of a patch: `y * dimension + x`.
    pub struct PatchId, "patch";
}
