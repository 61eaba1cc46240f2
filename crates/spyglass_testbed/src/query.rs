//! Query terms for testbed systems.
//!
//! A system's query is an ordered list of terms; the console reports query
//! columns 1-indexed in this order. Match evaluation walks the terms and
//! stops at the first failing condition.

use spyglass_foundation::{ComponentId, Entity, TypeSet};

/// How a term combines its components.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Oper {
    /// All components must be present.
    And,

    /// At least one component must be present.
    Or,

    /// No component may be present.
    Not,
}

/// Where a term's components are resolved from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Source {
    /// The matched entity itself, owned or shared.
    This,

    /// The matched entity's owned type only.
    Owned,

    /// The matched entity's shared (inherited) type only.
    Shared,

    /// Any container of the matched entity.
    Container,

    /// A fixed entity, independent of the matched one. If the component is
    /// missing there the system can never run.
    Entity(Entity),
}

/// One column of a system query.
#[derive(Clone, Debug)]
pub struct Term {
    /// How the components combine.
    pub oper: Oper,

    /// Where the components are resolved from.
    pub source: Source,

    /// The components the term refers to.
    pub components: TypeSet,
}

impl Term {
    fn new(oper: Oper, source: Source, components: impl IntoIterator<Item = ComponentId>) -> Self {
        Self {
            oper,
            source,
            components: components.into_iter().collect(),
        }
    }

    /// Requires the component, owned or shared.
    #[must_use]
    pub fn has(component: ComponentId) -> Self {
        Self::new(Oper::And, Source::This, [component])
    }

    /// Requires the component in the owned type.
    #[must_use]
    pub fn has_owned(component: ComponentId) -> Self {
        Self::new(Oper::And, Source::Owned, [component])
    }

    /// Requires the component in the shared type.
    #[must_use]
    pub fn has_shared(component: ComponentId) -> Self {
        Self::new(Oper::And, Source::Shared, [component])
    }

    /// Requires the component on a container.
    #[must_use]
    pub fn from_container(component: ComponentId) -> Self {
        Self::new(Oper::And, Source::Container, [component])
    }

    /// Requires the component on a fixed entity.
    #[must_use]
    pub fn from_entity(target: Entity, component: ComponentId) -> Self {
        Self::new(Oper::And, Source::Entity(target), [component])
    }

    /// Requires at least one of the components, owned or shared.
    #[must_use]
    pub fn any_of(components: impl IntoIterator<Item = ComponentId>) -> Self {
        Self::new(Oper::Or, Source::This, components)
    }

    /// Requires at least one of the components on a container.
    #[must_use]
    pub fn any_of_container(components: impl IntoIterator<Item = ComponentId>) -> Self {
        Self::new(Oper::Or, Source::Container, components)
    }

    /// Forbids the component, owned or shared.
    #[must_use]
    pub fn without(component: ComponentId) -> Self {
        Self::new(Oper::Not, Source::This, [component])
    }

    /// Forbids the component in the owned type.
    #[must_use]
    pub fn without_owned(component: ComponentId) -> Self {
        Self::new(Oper::Not, Source::Owned, [component])
    }

    /// Forbids the component in the shared type.
    #[must_use]
    pub fn without_shared(component: ComponentId) -> Self {
        Self::new(Oper::Not, Source::Shared, [component])
    }

    /// Forbids the component on any container.
    #[must_use]
    pub fn without_container(component: ComponentId) -> Self {
        Self::new(Oper::Not, Source::Container, [component])
    }
}
