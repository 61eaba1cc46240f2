//! Entity identifiers for the simulation under inspection.

use std::fmt;

/// An entity in the simulation under inspection.
///
/// Identifiers are opaque non-zero numbers assigned by the introspection
/// provider. Zero is reserved as the result of a failed name lookup, and a
/// distinguished singleton identifier exists that is displayed to the
/// operator as id 0.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Entity(pub u64);

impl Entity {
    /// The "no entity" sentinel a failed lookup resolves to.
    pub const NULL: Self = Self(0);

    /// The distinguished singleton entity, displayed as id 0.
    pub const SINGLETON: Self = Self(u64::MAX);

    /// Returns true if this is the null sentinel.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this is the singleton entity.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        self.0 == u64::MAX
    }

    /// Returns the numeric id as displayed to the operator.
    ///
    /// The singleton renders as 0; every real entity renders as itself.
    #[must_use]
    pub const fn display_id(self) -> u64 {
        if self.is_singleton() { 0 } else { self.0 }
    }
}

impl From<u64> for Entity {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Entity(null)")
        } else if self.is_singleton() {
            write!(f, "Entity(singleton)")
        } else {
            write!(f, "Entity({})", self.0)
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_id())
    }
}
