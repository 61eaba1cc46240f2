//! The synthetic world behind the console's introspection trait.
//!
//! State lives in `im` persistent maps, so a snapshot is a structural-sharing
//! clone rather than a deep copy. Tables are not stored; they are derived on
//! demand by grouping entities on identical owned type in first-seen (id)
//! order, which keeps every mutation trivially consistent with the table
//! view.

use im::OrdMap;

use spyglass_console::{EntityInfo, MatchReason, MatchReport, Provider, SystemInfo, TableInfo};
use spyglass_foundation::{ComponentId, Entity, Error, Filter, Result, TypeSet};

use crate::query::{Oper, Source, Term};

/// Base-chain walks are capped to stay finite on accidental cycles.
const MAX_CHAIN_DEPTH: usize = 16;

#[derive(Clone, Debug, Default)]
struct EntityRecord {
    owned: TypeSet,
    base: Option<Entity>,
    parent: Option<Entity>,
    disabled: bool,
    prefab: bool,
    watched: bool,
}

#[derive(Clone, Debug)]
struct SystemRecord {
    terms: Vec<Term>,
    enabled: bool,
    task: bool,
}

/// A small in-memory simulation world for tests and the demo binary.
pub struct Testbed {
    next_id: u64,
    tick: u64,
    quit_requested: bool,
    names: OrdMap<String, Entity>,
    labels: OrdMap<u64, String>,
    entities: OrdMap<u64, EntityRecord>,
    systems: OrdMap<u64, SystemRecord>,
}

/// A captured copy of testbed entity state.
///
/// Captures taken with a filter only cover the passing entities and merge
/// back over live state on restore; unfiltered captures replace entity state
/// wholesale.
pub struct TestbedSnapshot {
    names: OrdMap<String, Entity>,
    labels: OrdMap<u64, String>,
    entities: OrdMap<u64, EntityRecord>,
    next_id: u64,
    filtered: bool,
}

impl Default for Testbed {
    fn default() -> Self {
        Self::new()
    }
}

impl Testbed {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            tick: 0,
            quit_requested: false,
            names: OrdMap::new(),
            labels: OrdMap::new(),
            entities: OrdMap::new(),
            systems: OrdMap::new(),
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn name_id(&mut self, id: u64, name: &str) {
        self.names.insert(name.to_string(), Entity(id));
        self.labels.insert(id, name.to_string());
    }

    /// Registers a named component kind.
    pub fn register_component(&mut self, name: &str) -> ComponentId {
        let id = self.alloc_id();
        self.name_id(id, name);
        ComponentId(id)
    }

    /// Spawns an entity, optionally named, owning the given components.
    pub fn spawn(&mut self, name: Option<&str>, components: &[ComponentId]) -> Entity {
        let id = self.alloc_id();
        if let Some(name) = name {
            self.name_id(id, name);
        }
        self.entities.insert(
            id,
            EntityRecord {
                owned: components.iter().copied().collect(),
                ..EntityRecord::default()
            },
        );
        Entity(id)
    }

    /// Registers a system with the given query terms. The system is itself
    /// an entity; it occupies a table like any other.
    pub fn register_system(&mut self, name: &str, terms: Vec<Term>) -> Entity {
        let system_component = self.system_component();
        let entity = self.spawn(Some(name), &[system_component]);
        self.systems.insert(
            entity.0,
            SystemRecord {
                terms,
                enabled: true,
                task: false,
            },
        );
        entity
    }

    /// The component marking system entities, registered on first use.
    fn system_component(&mut self) -> ComponentId {
        if let Some(&entity) = self.names.get("System") {
            ComponentId(entity.0)
        } else {
            self.register_component("System")
        }
    }

    /// Sets the base entity components are inherited (shared) from.
    pub fn set_base(&mut self, entity: Entity, base: Entity) {
        if let Some(record) = self.entities.get_mut(&entity.0) {
            record.base = Some(base);
        }
    }

    /// Sets the parent entity components are visible (container) from.
    pub fn set_parent(&mut self, entity: Entity, parent: Entity) {
        if let Some(record) = self.entities.get_mut(&entity.0) {
            record.parent = Some(parent);
        }
    }

    /// Marks an entity disabled.
    pub fn set_disabled(&mut self, entity: Entity, disabled: bool) {
        if let Some(record) = self.entities.get_mut(&entity.0) {
            record.disabled = disabled;
        }
    }

    /// Marks an entity as a prefab.
    pub fn set_prefab(&mut self, entity: Entity, prefab: bool) {
        if let Some(record) = self.entities.get_mut(&entity.0) {
            record.prefab = prefab;
        }
    }

    /// Marks an entity watched.
    pub fn set_watched(&mut self, entity: Entity, watched: bool) {
        if let Some(record) = self.entities.get_mut(&entity.0) {
            record.watched = watched;
        }
    }

    /// Disables or enables a system.
    pub fn set_system_enabled(&mut self, system: Entity, enabled: bool) {
        if let Some(record) = self.systems.get_mut(&system.0) {
            record.enabled = enabled;
        }
    }

    /// Marks a system as a task; tasks never match entities.
    pub fn set_system_task(&mut self, system: Entity, task: bool) {
        if let Some(record) = self.systems.get_mut(&system.0) {
            record.task = task;
        }
    }

    /// Advances the simulation by one step.
    pub fn step(&mut self) {
        self.tick += 1;
    }

    /// Number of steps taken so far.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// True once `quit` has been requested through the console.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// Groups entities by identical owned type, in first-seen id order.
    /// Entities owning nothing occupy no table.
    fn table_groups(&self) -> Vec<(TypeSet, Vec<Entity>)> {
        let mut groups: Vec<(TypeSet, Vec<Entity>)> = Vec::new();
        for (id, record) in &self.entities {
            if record.owned.is_empty() {
                continue;
            }
            match groups.iter_mut().find(|(owned, _)| *owned == record.owned) {
                Some((_, members)) => members.push(Entity(*id)),
                None => groups.push((record.owned.clone(), vec![Entity(*id)])),
            }
        }
        groups
    }

    /// The components an entity inherits through its base chain.
    fn shared_of(&self, record: &EntityRecord) -> TypeSet {
        let mut shared = TypeSet::new();
        let mut base = record.base;
        let mut depth = 0;
        while let Some(entity) = base {
            let Some(record) = self.entities.get(&entity.0) else {
                break;
            };
            shared = shared.union(&record.owned);
            base = record.base;
            depth += 1;
            if depth >= MAX_CHAIN_DEPTH {
                break;
            }
        }
        shared
    }

    /// The components visible to an entity through its container chain.
    fn container_of(&self, record: &EntityRecord) -> TypeSet {
        let mut container = TypeSet::new();
        let mut parent = record.parent;
        let mut depth = 0;
        while let Some(entity) = parent {
            let Some(record) = self.entities.get(&entity.0) else {
                break;
            };
            container = container.union(&record.owned).union(&self.shared_of(record));
            parent = record.parent;
            depth += 1;
            if depth >= MAX_CHAIN_DEPTH {
                break;
            }
        }
        container
    }

    /// The components visible on a fixed entity, owned or shared.
    fn visible_type(&self, entity: Entity) -> TypeSet {
        self.entities
            .get(&entity.0)
            .map_or_else(TypeSet::new, |record| {
                record.owned.union(&self.shared_of(record))
            })
    }

    /// The shared/container scopes of a table, unioned over its members.
    fn table_scopes(&self, members: &[Entity]) -> (TypeSet, TypeSet) {
        let mut shared = TypeSet::new();
        let mut container = TypeSet::new();
        for entity in members {
            if let Some(record) = self.entities.get(&entity.0) {
                shared = shared.union(&self.shared_of(record));
                container = container.union(&self.container_of(record));
            }
        }
        (shared, container)
    }

    fn build_table(&self, owned: &TypeSet, members: &[Entity]) -> TableInfo {
        let (shared, container) = self.table_scopes(members);

        let mut parents: Vec<Entity> = Vec::new();
        let mut bases: Vec<Entity> = Vec::new();
        for entity in members {
            let Some(record) = self.entities.get(&entity.0) else {
                continue;
            };
            if let Some(parent) = record.parent {
                if !parents.contains(&parent) {
                    parents.push(parent);
                }
            }
            if let Some(base) = record.base {
                if !bases.contains(&base) {
                    bases.push(base);
                }
            }
        }

        let systems_matched = self
            .systems
            .iter()
            .filter(|&(_, system)| self.system_matches_scopes(system, owned, &shared, &container))
            .map(|(id, _)| Entity(*id))
            .collect();

        TableInfo {
            owned: owned.clone(),
            shared: (!shared.is_empty()).then_some(shared),
            container: (!container.is_empty()).then_some(container),
            parents,
            bases,
            entities: members.to_vec(),
            systems_matched,
        }
    }

    /// Table-level match: entity flags play no part here.
    fn system_matches_scopes(
        &self,
        system: &SystemRecord,
        owned: &TypeSet,
        shared: &TypeSet,
        container: &TypeSet,
    ) -> bool {
        if system.task {
            return false;
        }
        system.terms.iter().all(|term| {
            let scope = match term.source {
                Source::This => owned.union(shared),
                Source::Owned => owned.clone(),
                Source::Shared => shared.clone(),
                Source::Container => container.clone(),
                Source::Entity(target) => self.visible_type(target),
            };
            match term.oper {
                Oper::And => scope.is_superset(&term.components),
                Oper::Or => scope.intersects(&term.components),
                Oper::Not => !scope.intersects(&term.components),
            }
        })
    }
}

impl Provider for Testbed {
    type Snapshot = TestbedSnapshot;

    fn table_count(&self) -> usize {
        self.table_groups().len()
    }

    fn table(&self, index: usize) -> Option<TableInfo> {
        let groups = self.table_groups();
        let (owned, members) = groups.get(index)?;
        Some(self.build_table(owned, members))
    }

    fn entity_info(&self, entity: Entity) -> Option<EntityInfo> {
        let record = self.entities.get(&entity.0)?;
        let mut table = None;
        let mut row = 0;
        for (index, (owned, members)) in self.table_groups().iter().enumerate() {
            if *owned == record.owned {
                table = Some(index);
                row = members.iter().position(|&e| e == entity).unwrap_or(0);
                break;
            }
        }
        Some(EntityInfo {
            owned: record.owned.clone(),
            table,
            is_watched: record.watched,
            row,
        })
    }

    fn system_info(&self, entity: Entity) -> Option<SystemInfo> {
        let system = self.systems.get(&entity.0)?;
        let mut active_tables = 0u32;
        let mut entities_matched = 0u32;
        for (owned, members) in self.table_groups() {
            let (shared, container) = self.table_scopes(&members);
            if self.system_matches_scopes(system, &owned, &shared, &container) {
                active_tables += 1;
                entities_matched += u32::try_from(members.len()).unwrap_or(u32::MAX);
            }
        }
        Some(SystemInfo {
            enabled: system.enabled,
            active_tables,
            // Derived tables are never empty, so no matched table is inactive.
            inactive_tables: 0,
            entities_matched,
        })
    }

    fn entity_name(&self, entity: Entity) -> Option<String> {
        self.labels.get(&entity.0).cloned()
    }

    fn lookup(&self, name: &str) -> Entity {
        self.names.get(name).copied().unwrap_or(Entity::NULL)
    }

    fn type_to_expr(&self, ty: &TypeSet) -> String {
        let names: Vec<String> = ty
            .iter()
            .map(|id| {
                self.labels
                    .get(&id.0)
                    .cloned()
                    .unwrap_or_else(|| id.0.to_string())
            })
            .collect();
        names.join(", ")
    }

    fn expr_to_type(&self, expr: &str) -> Result<TypeSet> {
        expr.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                if token.starts_with(|c: char| c.is_ascii_digit()) {
                    token
                        .parse::<u64>()
                        .map(ComponentId)
                        .map_err(|_| Error::resolve(token))
                } else {
                    match self.names.get(token) {
                        Some(entity) => Ok(ComponentId(entity.0)),
                        None => Err(Error::resolve(token)),
                    }
                }
            })
            .collect()
    }

    fn explain_match(&self, entity: Entity, system: Entity) -> MatchReport {
        let Some(record) = self.systems.get(&system.0) else {
            return MatchReport::failure(MatchReason::NotASystem, 0);
        };
        if record.task {
            return MatchReport::failure(MatchReason::SystemIsATask, 0);
        }

        let empty = EntityRecord::default();
        let subject = self.entities.get(&entity.0).unwrap_or(&empty);
        if subject.disabled {
            return MatchReport::failure(MatchReason::EntityDisabled, 0);
        }
        if subject.prefab {
            return MatchReport::failure(MatchReason::EntityIsPrefab, 0);
        }

        let shared = self.shared_of(subject);
        let container = self.container_of(subject);

        for (index, term) in record.terms.iter().enumerate() {
            let column = u32::try_from(index + 1).unwrap_or(u32::MAX);
            match term.oper {
                Oper::And => {
                    let (scope, reason) = match term.source {
                        Source::This => (subject.owned.union(&shared), MatchReason::MissingSelf),
                        Source::Owned => (subject.owned.clone(), MatchReason::MissingOwned),
                        Source::Shared => (shared.clone(), MatchReason::MissingShared),
                        Source::Container => (container.clone(), MatchReason::MissingContainer),
                        Source::Entity(target) => {
                            (self.visible_type(target), MatchReason::MissingEntityRef)
                        }
                    };
                    if !scope.is_superset(&term.components) {
                        return MatchReport::failure(reason, column);
                    }
                }
                Oper::Or => {
                    let (scope, reason) = match term.source {
                        Source::Container => {
                            (container.clone(), MatchReason::OrMissingContainer)
                        }
                        Source::Entity(target) => {
                            (self.visible_type(target), MatchReason::OrMissingSelf)
                        }
                        _ => (subject.owned.union(&shared), MatchReason::OrMissingSelf),
                    };
                    if !scope.intersects(&term.components) {
                        return MatchReport::failure(reason, column);
                    }
                }
                Oper::Not => {
                    let (scope, reason) = match term.source {
                        Source::This => (subject.owned.union(&shared), MatchReason::NotHasSelf),
                        Source::Owned => (subject.owned.clone(), MatchReason::NotHasOwned),
                        Source::Shared => (shared.clone(), MatchReason::NotHasShared),
                        Source::Container | Source::Entity(_) => {
                            (container.clone(), MatchReason::NotHasContainer)
                        }
                    };
                    if scope.intersects(&term.components) {
                        return MatchReport::failure(reason, column);
                    }
                }
            }
        }

        MatchReport::ok()
    }

    fn column_type(&self, system: Entity, column: u32) -> Option<TypeSet> {
        let record = self.systems.get(&system.0)?;
        let index = usize::try_from(column.checked_sub(1)?).ok()?;
        record.terms.get(index).map(|term| term.components.clone())
    }

    fn has(&self, entity: Entity, ty: &TypeSet) -> bool {
        self.entities.get(&entity.0).is_some_and(|record| {
            record.owned.union(&self.shared_of(record)).is_superset(ty)
        })
    }

    fn has_owned(&self, entity: Entity, ty: &TypeSet) -> bool {
        self.entities
            .get(&entity.0)
            .is_some_and(|record| record.owned.is_superset(ty))
    }

    fn component_type(&self, component: Entity) -> TypeSet {
        TypeSet::from(ComponentId(component.0))
    }

    fn add(&mut self, entity: Entity, ty: &TypeSet) -> Result<()> {
        if let Some(record) = self.entities.get_mut(&entity.0) {
            for id in ty.iter() {
                record.owned.insert(id);
            }
        } else {
            self.entities.insert(
                entity.0,
                EntityRecord {
                    owned: ty.clone(),
                    ..EntityRecord::default()
                },
            );
            self.next_id = self.next_id.max(entity.0 + 1);
        }
        Ok(())
    }

    fn remove(&mut self, entity: Entity, ty: &TypeSet) -> Result<()> {
        if let Some(record) = self.entities.get_mut(&entity.0) {
            for id in ty.iter() {
                record.owned.remove(id);
            }
        }
        Ok(())
    }

    fn delete(&mut self, entity: Entity) -> Result<()> {
        self.entities.remove(&entity.0);
        if let Some(name) = self.labels.remove(&entity.0) {
            self.names.remove(&name);
        }
        Ok(())
    }

    fn take_snapshot(&self, filter: Option<&Filter>) -> TestbedSnapshot {
        let entities = match filter {
            None => self.entities.clone(),
            Some(filter) => self
                .entities
                .iter()
                .filter(|(_, record)| filter.accepts(&record.owned))
                .map(|(id, record)| (*id, record.clone()))
                .collect(),
        };
        TestbedSnapshot {
            names: self.names.clone(),
            labels: self.labels.clone(),
            entities,
            next_id: self.next_id,
            filtered: filter.is_some(),
        }
    }

    fn restore_snapshot(&mut self, snapshot: TestbedSnapshot) {
        if snapshot.filtered {
            // Filtered captures merge back over live state.
            for (id, record) in snapshot.entities {
                self.entities.insert(id, record);
            }
        } else {
            self.entities = snapshot.entities;
            self.names = snapshot.names;
            self.labels = snapshot.labels;
            self.next_id = self.next_id.max(snapshot.next_id);
        }
    }

    fn quit(&mut self) {
        self.quit_requested = true;
    }
}
