//! Component identifiers, type sets, and filters.
//!
//! A type is an ordered, de-duplicated set of component ids. Its canonical
//! textual form `[A, B]` doubles as the console's filter syntax; converting
//! between ids and names is the introspection provider's job, so `TypeSet`
//! itself only deals in ids.

use std::fmt;

/// Identifier of a component kind.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ComponentId(pub u64);

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({})", self.0)
    }
}

impl From<u64> for ComponentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An ordered, de-duplicated set of component ids.
///
/// Backed by a sorted `Vec`; the sets this console handles are small (a
/// handful of components per table), so binary search beats hashing.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct TypeSet {
    ids: Vec<ComponentId>,
}

impl TypeSet {
    /// Creates an empty type set.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Inserts a component id, keeping the set sorted and de-duplicated.
    ///
    /// Returns true if the id was not already present.
    pub fn insert(&mut self, id: ComponentId) -> bool {
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(pos) => {
                self.ids.insert(pos, id);
                true
            }
        }
    }

    /// Removes a component id. Returns true if it was present.
    pub fn remove(&mut self, id: ComponentId) -> bool {
        match self.ids.binary_search(&id) {
            Ok(pos) => {
                self.ids.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns true if the set contains the given id.
    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// Returns true if every id in `other` is also in this set.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.ids.iter().all(|id| self.contains(*id))
    }

    /// Returns true if any id in `other` is in this set.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        other.ids.iter().any(|id| self.contains(*id))
    }

    /// Returns the union of this set and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for id in &other.ids {
            result.insert(*id);
        }
        result
    }

    /// Returns the set difference `self - other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            ids: self
                .ids
                .iter()
                .copied()
                .filter(|id| !other.contains(*id))
                .collect(),
        }
    }

    /// Returns the number of component ids in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates the component ids in order.
    pub fn iter(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.ids.iter().copied()
    }
}

impl From<ComponentId> for TypeSet {
    fn from(id: ComponentId) -> Self {
        Self { ids: vec![id] }
    }
}

impl FromIterator<ComponentId> for TypeSet {
    fn from_iter<I: IntoIterator<Item = ComponentId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// A type-set used to select tables and entities by superset membership.
///
/// A table or entity passes when its owned type contains every id in the
/// include set. The absence of a filter selects everything.
#[derive(Clone, Default, Debug)]
pub struct Filter {
    /// Components a passing type must own.
    pub include: TypeSet,
}

impl Filter {
    /// Creates a filter with the given include set.
    #[must_use]
    pub const fn new(include: TypeSet) -> Self {
        Self { include }
    }

    /// Returns true if the given owned type passes this filter.
    #[must_use]
    pub fn accepts(&self, owned: &TypeSet) -> bool {
        owned.is_superset(&self.include)
    }
}
