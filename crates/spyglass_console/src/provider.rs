//! The introspection interface to the simulation under inspection.
//!
//! The console never touches entity or component storage directly; everything
//! it shows or mutates goes through this trait. An engine embeds the console
//! by implementing [`Provider`] over its world state and sharing that state
//! with the console through a [`TurnLock`](crate::TurnLock).

use spyglass_foundation::{Entity, Filter, Result, TypeSet};

use crate::explain::MatchReport;

/// Debug view of a table: a group of entities sharing one owned type.
#[derive(Clone, Debug, Default)]
pub struct TableInfo {
    /// The type every entity in the table owns.
    pub owned: TypeSet,

    /// Types available to the table's entities via inheritance, if any.
    pub shared: Option<TypeSet>,

    /// Types available to the table's entities via containment, if any.
    pub container: Option<TypeSet>,

    /// Parent entities of the table's entities, if any.
    pub parents: Vec<Entity>,

    /// Base entities the table's entities inherit from, if any.
    pub bases: Vec<Entity>,

    /// The entities stored in the table.
    pub entities: Vec<Entity>,

    /// The systems whose queries currently match the table.
    pub systems_matched: Vec<Entity>,
}

/// Debug view of a single entity.
#[derive(Clone, Debug)]
pub struct EntityInfo {
    /// The type the entity owns.
    pub owned: TypeSet,

    /// Index of the table holding the entity, if it occupies one.
    pub table: Option<usize>,

    /// True if the entity is being watched by the engine.
    pub is_watched: bool,

    /// Row of the entity within its table.
    pub row: usize,
}

/// Debug view of a system's scheduling metadata.
#[derive(Clone, Copy, Debug)]
pub struct SystemInfo {
    /// Whether the system is enabled.
    pub enabled: bool,

    /// Number of matched tables that are active (non-empty).
    pub active_tables: u32,

    /// Number of matched tables that are inactive (empty).
    pub inactive_tables: u32,

    /// Total number of matched entities across all matched tables.
    pub entities_matched: u32,
}

/// Read and mutate accessors over simulation state.
///
/// Tables are addressed by a stable zero-based index in an enumeration order
/// the provider defines; the console exposes them to the operator 1-indexed.
/// Name/id resolution, type/expression conversion, and match diagnosis all
/// live behind this trait so the console stays engine-agnostic.
pub trait Provider {
    /// An opaque, provider-owned copy of simulation state.
    type Snapshot;

    /// Returns the number of tables currently enumerable.
    fn table_count(&self) -> usize;

    /// Describes the table at the given zero-based index.
    fn table(&self, index: usize) -> Option<TableInfo>;

    /// Describes an entity, or `None` if it does not exist.
    fn entity_info(&self, entity: Entity) -> Option<EntityInfo>;

    /// Describes a system, or `None` if the entity is not a system.
    fn system_info(&self, entity: Entity) -> Option<SystemInfo>;

    /// Returns the human-readable name of an entity, if it has one.
    fn entity_name(&self, entity: Entity) -> Option<String>;

    /// Resolves a name to an entity; [`Entity::NULL`] on a miss.
    fn lookup(&self, name: &str) -> Entity;

    /// Renders a type as its canonical comma-separated expression text,
    /// without the surrounding brackets.
    fn type_to_expr(&self, ty: &TypeSet) -> String;

    /// Compiles a comma-separated component list (the interior of a
    /// bracketed filter) into a type set.
    ///
    /// # Errors
    ///
    /// Returns a resolution error for any token that is neither a numeric id
    /// nor a known component name.
    fn expr_to_type(&self, expr: &str) -> Result<TypeSet>;

    /// Evaluates a filter against a table.
    ///
    /// The default is superset membership over the owned type; providers with
    /// richer filter semantics may override it.
    fn matches_filter(&self, table: &TableInfo, filter: &Filter) -> bool {
        filter.accepts(&table.owned)
    }

    /// Tests whether an entity matches a system, with failure diagnostics.
    fn explain_match(&self, entity: Entity, system: Entity) -> MatchReport;

    /// Returns the declared type of a system query column (1-indexed).
    fn column_type(&self, system: Entity, column: u32) -> Option<TypeSet>;

    /// True if the entity has the whole type, owned or inherited.
    fn has(&self, entity: Entity, ty: &TypeSet) -> bool;

    /// True if the entity owns the whole type itself.
    fn has_owned(&self, entity: Entity, ty: &TypeSet) -> bool;

    /// Returns the single-component type corresponding to a component entity.
    fn component_type(&self, component: Entity) -> TypeSet;

    /// Adds (or overrides) the given type on an entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the mutation.
    fn add(&mut self, entity: Entity, ty: &TypeSet) -> Result<()>;

    /// Removes the given type (or clears an override) from an entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the mutation.
    fn remove(&mut self, entity: Entity, ty: &TypeSet) -> Result<()>;

    /// Deletes an entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the deletion.
    fn delete(&mut self, entity: Entity) -> Result<()>;

    /// Captures current state, optionally restricted by a filter.
    fn take_snapshot(&self, filter: Option<&Filter>) -> Self::Snapshot;

    /// Replaces live state with a previously captured snapshot.
    fn restore_snapshot(&mut self, snapshot: Self::Snapshot);

    /// Requests simulation shutdown. The console itself keeps reading input;
    /// the host loop is expected to observe the request and exit.
    fn quit(&mut self);
}
