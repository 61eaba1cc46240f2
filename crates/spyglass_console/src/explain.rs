//! Match-failure diagnostics.
//!
//! When an entity does not match a system's query, the provider reports the
//! first failing condition it found as a reason from a closed taxonomy, plus
//! the 1-indexed query column that failed where one applies. This module
//! holds the taxonomy and turns a report into the operator-facing text.

/// Why an entity did or did not match a system.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MatchReason {
    /// The entity matches; no further explanation is produced.
    Ok,

    /// The second argument does not identify a system.
    NotASystem,

    /// The system is a task and never matches entities.
    SystemIsATask,

    /// The entity is disabled.
    EntityDisabled,

    /// The entity is a prefab.
    EntityIsPrefab,

    /// A required component is missing, owned or shared.
    MissingSelf,

    /// A required component is missing from the owned type.
    MissingOwned,

    /// A required component is missing from the shared type.
    MissingShared,

    /// A required component is missing from every container.
    MissingContainer,

    /// A component read from a fixed entity is missing; the system can never
    /// run regardless of the entity tested.
    MissingEntityRef,

    /// No alternative of an OR expression is present, owned or shared.
    OrMissingSelf,

    /// No alternative of an OR expression is present in any container.
    OrMissingContainer,

    /// A forbidden (NOT) component is present, owned or shared.
    NotHasSelf,

    /// A forbidden (NOT) component is present in the owned type.
    NotHasOwned,

    /// A forbidden (NOT) component is present in the shared type.
    NotHasShared,

    /// A forbidden (NOT) component is present in a container.
    NotHasContainer,
}

/// Result of testing an entity against a system's query.
#[derive(Copy, Clone, Debug)]
pub struct MatchReport {
    /// Whether the entity matched.
    pub matched: bool,

    /// The first failing condition, or [`MatchReason::Ok`].
    pub reason: MatchReason,

    /// The 1-indexed query column the reason refers to; 0 when the reason is
    /// not tied to a column.
    pub column: u32,
}

impl MatchReport {
    /// A positive match.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            matched: true,
            reason: MatchReason::Ok,
            column: 0,
        }
    }

    /// A negative match with the given reason and column.
    #[must_use]
    pub const fn failure(reason: MatchReason, column: u32) -> Self {
        Self {
            matched: false,
            reason,
            column,
        }
    }
}

/// Renders a failure reason as one line of report text.
///
/// `type_expr` is the bracketless expression of the failing column's type,
/// empty when the reason carries no column. `system_token` is the token the
/// operator typed for the system argument.
#[must_use]
pub fn describe(reason: MatchReason, type_expr: &str, system_token: &str) -> String {
    match reason {
        MatchReason::Ok => String::new(),
        MatchReason::NotASystem => format!("entity '{system_token}' is not a system"),
        MatchReason::SystemIsATask => "system is a task".to_string(),
        MatchReason::EntityDisabled => "entity is disabled".to_string(),
        MatchReason::EntityIsPrefab => "entity is a prefab".to_string(),
        MatchReason::MissingSelf => format!("[{type_expr}] missing (owned or shared)"),
        MatchReason::MissingOwned => format!("[{type_expr}] missing (owned)"),
        MatchReason::MissingShared => format!("[{type_expr}] missing (shared)"),
        MatchReason::MissingContainer => format!("[{type_expr}] missing (container)"),
        MatchReason::MissingEntityRef => {
            format!("[{type_expr}] missing (from entity, system will never run!)")
        }
        MatchReason::OrMissingSelf => {
            format!("[{type_expr}] missing in OR expression (owned or shared)")
        }
        MatchReason::OrMissingContainer => {
            format!("[{type_expr}] missing in OR expression (from container)")
        }
        MatchReason::NotHasSelf => {
            format!("has [{type_expr}] from NOT expression (owned or shared)")
        }
        MatchReason::NotHasOwned => format!("has [{type_expr}] in NOT expression (owned)"),
        MatchReason::NotHasShared => format!("has [{type_expr}] in NOT expression (shared)"),
        MatchReason::NotHasContainer => {
            format!("has [{type_expr}] in NOT expression (from container)")
        }
    }
}
