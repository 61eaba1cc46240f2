//! Command parsing and dispatch.
//!
//! One input line is `<command> [<ws> <args>]`. A command may be written by
//! its full name or by its first letter; matching tries each candidate in a
//! fixed order with an exact-name test first, then the single-letter test, so
//! `s` resolves to `system` (not `snapshot`) and `r` to `remove` (not
//! `restore`).
//!
//! Handlers return a plain success/failure result; the dispatcher's caller
//! collapses any failure into the single diagnostic line
//! `error executing '<line>'`. Output a handler produced before failing stays
//! visible; handlers are not transactional.

use std::io::Write;

use spyglass_foundation::{Entity, Error, Filter, Result, TypeSet};

use crate::explain;
use crate::filter::parse_filter;
use crate::provider::{Provider, TableInfo};
use crate::render::{Cell, ColumnSpec, DetailWriter, TableWriter, joined_or_dash};
use crate::snapshot::SnapshotSlot;

/// Candidate commands in matching order. The order is what disambiguates
/// single-letter abbreviations.
const COMMANDS: &[&str] = &[
    "table", "system", "entity", "match", "add", "remove", "delete", "help", "quit", "snapshot",
    "restore",
];

const ENTITY_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        header: "id",
        width: 6,
    },
    ColumnSpec {
        header: "name",
        width: 20,
    },
    ColumnSpec {
        header: "type",
        width: 0,
    },
];

const TABLE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        header: "id",
        width: 4,
    },
    ColumnSpec {
        header: "type",
        width: 64,
    },
    ColumnSpec {
        header: "entities",
        width: 12,
    },
    ColumnSpec {
        header: "matched with",
        width: 0,
    },
];

const SYSTEM_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        header: "id",
        width: 4,
    },
    ColumnSpec {
        header: "name",
        width: 20,
    },
    ColumnSpec {
        header: "tables matched",
        width: 18,
    },
    ColumnSpec {
        header: "entities matched",
        width: 0,
    },
];

/// Label column width for entity and table detail dumps.
const DETAIL_WIDTH: usize = 24;

/// Label column width for system detail dumps.
const SYSTEM_DETAIL_WIDTH: usize = 32;

/// Tests one candidate command name against the input line.
///
/// Returns the argument tail (leading whitespace trimmed) when the line
/// starts with the full name, or with the name's first letter, followed by
/// whitespace or end-of-line.
fn match_command<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    if let Some(rest) = line.strip_prefix(name) {
        if rest.is_empty() {
            return Some(rest);
        }
        if rest.starts_with(char::is_whitespace) {
            return Some(rest.trim_start());
        }
    }

    // Single-letter abbreviation. Command names are ASCII, so byte slicing
    // past the first character is safe once it matched.
    if line.as_bytes().first() == name.as_bytes().first() {
        match line[1..].chars().next() {
            None => return Some(""),
            Some(c) if c.is_whitespace() => return Some(line[1..].trim_start()),
            Some(_) => {}
        }
    }

    None
}

/// Routes a line to its command name and argument tail.
fn route(line: &str) -> Option<(&'static str, &str)> {
    COMMANDS
        .iter()
        .find_map(|name| match_command(line, name).map(|args| (*name, args)))
}

/// Parses and executes one input line against the provider.
///
/// An empty line is a no-op success. The caller is expected to print the
/// generic `error executing '<line>'` diagnostic on failure.
///
/// # Errors
///
/// Returns an error for unknown commands, malformed arguments, failed
/// name/id resolution, out-of-range table ids, a restore without a held
/// snapshot, or an output write failure.
pub fn dispatch<P: Provider, W: Write>(
    world: &mut P,
    snapshot: &mut SnapshotSlot<P::Snapshot>,
    line: &str,
    out: &mut W,
) -> Result<()> {
    if line.is_empty() {
        return Ok(());
    }

    let Some((name, args)) = route(line) else {
        return Err(Error::unknown_command(line));
    };

    match name {
        "table" => cmd_table(world, args, out),
        "system" => cmd_system(world, args, out),
        "entity" => cmd_entity(world, args, out),
        "match" => cmd_match(world, args, out),
        "add" => cmd_add_remove(world, args, out, false),
        "remove" => cmd_add_remove(world, args, out, true),
        "delete" => cmd_delete(world, args, out),
        "help" => cmd_help(out),
        "quit" => {
            world.quit();
            Ok(())
        }
        "snapshot" => cmd_snapshot(world, snapshot, args),
        "restore" => cmd_restore(world, snapshot),
        _ => Err(Error::internal(format!("unrouted command '{name}'"))),
    }
}

/// Resolves an entity/component/system token: numeric id if it starts with a
/// digit, name lookup otherwise. A null result is an error.
fn resolve_id<P: Provider>(world: &P, token: &str) -> Result<Entity> {
    let entity = if token.starts_with(|c: char| c.is_ascii_digit()) {
        Entity(token.parse::<u64>().map_err(|_| Error::resolve(token))?)
    } else {
        world.lookup(token)
    };

    if entity.is_null() {
        Err(Error::resolve(token))
    } else {
        Ok(entity)
    }
}

/// Splits a two-argument tail at the first whitespace run.
fn split_args(args: &str) -> Result<(&str, &str)> {
    let pos = args
        .find(char::is_whitespace)
        .ok_or_else(|| Error::parse("expected two arguments"))?;
    let (first, rest) = args.split_at(pos);
    let rest = rest.trim_start();
    if rest.is_empty() {
        return Err(Error::parse("expected two arguments"));
    }
    Ok((first, rest))
}

/// Renders the names of the given entities, falling back to the displayed id
/// for unnamed ones.
fn entity_names<P: Provider>(world: &P, entities: &[Entity]) -> Vec<String> {
    entities
        .iter()
        .map(|&e| {
            world
                .entity_name(e)
                .unwrap_or_else(|| e.display_id().to_string())
        })
        .collect()
}

/// The `matched with:` cell for a table (or for an entity via its table).
fn matched_with<P: Provider>(world: &P, table: Option<&TableInfo>) -> Cell {
    let systems = table.map_or(&[][..], |t| t.systems_matched.as_slice());
    joined_or_dash(&entity_names(world, systems))
}

// =============================================================================
// entity
// =============================================================================

fn cmd_entity<P: Provider, W: Write>(world: &mut P, args: &str, out: &mut W) -> Result<()> {
    if args.is_empty() {
        dump_entities(world, None, out)
    } else if args.starts_with('[') {
        let filter = parse_filter(world, args)?;
        dump_entities(world, Some(&filter), out)
    } else {
        let entity = resolve_id(world, args)?;
        dump_entity(world, args, entity, out)
    }
}

fn dump_entities<P: Provider, W: Write>(
    world: &P,
    filter: Option<&Filter>,
    out: &mut W,
) -> Result<()> {
    let mut writer = TableWriter::new(out, ENTITY_COLUMNS);
    writer.header()?;

    for index in 0..world.table_count() {
        let Some(table) = world.table(index) else {
            continue;
        };
        if let Some(filter) = filter {
            if !world.matches_filter(&table, filter) {
                continue;
            }
        }

        let type_expr = world.type_to_expr(&table.owned);
        for &entity in &table.entities {
            let name = world.entity_name(entity).map_or(Cell::Dash, Cell::Text);
            writer.row(&[
                Cell::Num(entity.display_id()),
                name,
                Cell::TypeExpr(type_expr.clone()),
            ])?;
        }
    }

    Ok(())
}

fn dump_entity<P: Provider, W: Write>(
    world: &P,
    token: &str,
    entity: Entity,
    out: &mut W,
) -> Result<()> {
    let info = world
        .entity_info(entity)
        .ok_or_else(|| Error::resolve(token))?;
    let table = info.table.and_then(|index| world.table(index));

    let mut detail = DetailWriter::new(out, DETAIL_WIDTH);
    detail.field("id:", &Cell::Num(entity.display_id()))?;
    if let Some(name) = world.entity_name(entity) {
        detail.field("name:", &Cell::Text(name))?;
    }
    detail.field(
        "type (owned):",
        &Cell::TypeExpr(world.type_to_expr(&info.owned)),
    )?;
    write_type_details(world, table.as_ref(), &mut detail)?;
    detail.field("matched with:", &matched_with(world, table.as_ref()))?;
    detail.field("is watched:", &Cell::Text(info.is_watched.to_string()))?;
    detail.field("row:", &Cell::Num(info.row as u64))?;

    Ok(())
}

/// The shared/container/parent/base block common to entity and table dumps.
fn write_type_details<P: Provider, W: Write>(
    world: &P,
    table: Option<&TableInfo>,
    detail: &mut DetailWriter<'_, W>,
) -> Result<()> {
    let type_cell = |ty: Option<&TypeSet>| {
        ty.map_or(Cell::Dash, |ty| Cell::TypeExpr(world.type_to_expr(ty)))
    };

    detail.field(
        "type (shared):",
        &type_cell(table.and_then(|t| t.shared.as_ref())),
    )?;
    detail.field(
        "type (container):",
        &type_cell(table.and_then(|t| t.container.as_ref())),
    )?;

    let parents = table.map_or(&[][..], |t| t.parents.as_slice());
    detail.field("child of:", &joined_or_dash(&entity_names(world, parents)))?;

    let bases = table.map_or(&[][..], |t| t.bases.as_slice());
    detail.field(
        "inherits from:",
        &joined_or_dash(&entity_names(world, bases)),
    )?;

    Ok(())
}

// =============================================================================
// table
// =============================================================================

fn cmd_table<P: Provider, W: Write>(world: &mut P, args: &str, out: &mut W) -> Result<()> {
    if args.is_empty() {
        dump_tables(world, None, out)
    } else if args.starts_with('[') {
        let filter = parse_filter(world, args)?;
        dump_tables(world, Some(&filter), out)
    } else if args.starts_with(|c: char| c.is_ascii_digit()) {
        let id: u64 = args.parse().map_err(|_| Error::parse("expected a table id"))?;
        dump_table(world, id, out)
    } else {
        Err(Error::parse(format!("expected a table id or filter, got '{args}'")))
    }
}

fn dump_tables<P: Provider, W: Write>(
    world: &P,
    filter: Option<&Filter>,
    out: &mut W,
) -> Result<()> {
    let mut writer = TableWriter::new(out, TABLE_COLUMNS);
    writer.header()?;

    for index in 0..world.table_count() {
        let Some(table) = world.table(index) else {
            continue;
        };
        if let Some(filter) = filter {
            if !world.matches_filter(&table, filter) {
                continue;
            }
        }

        writer.row(&[
            Cell::Num(index as u64 + 1),
            Cell::TypeExpr(world.type_to_expr(&table.owned)),
            Cell::Num(table.entities.len() as u64),
            matched_with(world, Some(&table)),
        ])?;
    }

    Ok(())
}

/// Dumps one table addressed by its 1-indexed operator-facing id.
fn dump_table<P: Provider, W: Write>(world: &P, id: u64, out: &mut W) -> Result<()> {
    let table = id
        .checked_sub(1)
        .and_then(|index| world.table(usize::try_from(index).ok()?))
        .ok_or_else(|| Error::no_such_table(id))?;

    let mut detail = DetailWriter::new(out, DETAIL_WIDTH);
    detail.field(
        "type (owned):",
        &Cell::TypeExpr(world.type_to_expr(&table.owned)),
    )?;
    write_type_details(world, Some(&table), &mut detail)?;
    detail.field("entities:", &Cell::Num(table.entities.len() as u64))?;
    detail.field("matched with:", &matched_with(world, Some(&table)))?;

    Ok(())
}

// =============================================================================
// system
// =============================================================================

fn cmd_system<P: Provider, W: Write>(world: &mut P, args: &str, out: &mut W) -> Result<()> {
    if args.is_empty() {
        dump_systems(world, out)
    } else {
        let system = resolve_id(world, args)?;
        dump_system(world, args, system, out)
    }
}

fn dump_systems<P: Provider, W: Write>(world: &P, out: &mut W) -> Result<()> {
    let mut writer = TableWriter::new(out, SYSTEM_COLUMNS);
    writer.header()?;

    for index in 0..world.table_count() {
        let Some(table) = world.table(index) else {
            continue;
        };
        for &entity in &table.entities {
            let Some(info) = world.system_info(entity) else {
                continue;
            };
            let name = world.entity_name(entity).map_or(Cell::Dash, Cell::Text);
            writer.row(&[
                Cell::Num(entity.display_id()),
                name,
                Cell::Num(u64::from(info.active_tables + info.inactive_tables)),
                Cell::Num(u64::from(info.entities_matched)),
            ])?;
        }
    }

    Ok(())
}

fn dump_system<P: Provider, W: Write>(
    world: &P,
    token: &str,
    system: Entity,
    out: &mut W,
) -> Result<()> {
    let info = world
        .system_info(system)
        .ok_or_else(|| Error::resolve(token))?;

    let mut detail = DetailWriter::new(out, SYSTEM_DETAIL_WIDTH);
    detail.field("id:", &Cell::Num(system.display_id()))?;
    detail.field(
        "name:",
        &world.entity_name(system).map_or(Cell::Dash, Cell::Text),
    )?;
    detail.field("enabled:", &Cell::Text(info.enabled.to_string()))?;
    detail.field(
        "entities matched:",
        &Cell::Num(u64::from(info.entities_matched)),
    )?;
    detail.field("active matched:", &Cell::Num(u64::from(info.active_tables)))?;
    detail.field(
        "inactive matched:",
        &Cell::Num(u64::from(info.inactive_tables)),
    )?;

    Ok(())
}

// =============================================================================
// match
// =============================================================================

fn cmd_match<P: Provider, W: Write>(world: &mut P, args: &str, out: &mut W) -> Result<()> {
    let (entity_token, system_token) = split_args(args)?;
    let entity = resolve_id(world, entity_token)?;
    let system = resolve_id(world, system_token)?;

    let report = world.explain_match(entity, system);
    let system_name = world
        .entity_name(system)
        .unwrap_or_else(|| system_token.to_string());

    if report.matched {
        writeln!(
            out,
            "entity '{entity_token}' matches with system '{system_name}'"
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "entity '{entity_token}' does not match with system '{system_name}'"
    )?;

    let mut type_expr = String::new();
    if report.column > 0 {
        if let Some(ty) = world.column_type(system, report.column) {
            type_expr = world.type_to_expr(&ty);
        }
        write!(out, "column {}: ", report.column)?;
    }

    let reason = explain::describe(report.reason, &type_expr, system_token);
    if !reason.is_empty() {
        writeln!(out, "{reason}")?;
    }

    Ok(())
}

// =============================================================================
// add / remove / delete
// =============================================================================

fn cmd_add_remove<P: Provider, W: Write>(
    world: &mut P,
    args: &str,
    out: &mut W,
    is_remove: bool,
) -> Result<()> {
    let (entity_token, component_token) = split_args(args)?;
    let entity = resolve_id(world, entity_token)?;

    let ty = if component_token.starts_with('[') {
        parse_filter(world, component_token)?.include
    } else {
        let component = resolve_id(world, component_token)?;
        world.component_type(component)
    };

    let expr = world.type_to_expr(&ty);

    if is_remove {
        if world.has_owned(entity, &ty) {
            world.remove(entity, &ty)?;
            if world.has(entity, &ty) {
                writeln!(out, "removed override [{expr}] from entity '{entity_token}'")?;
            } else {
                writeln!(out, "removed [{expr}] from entity '{entity_token}'")?;
            }
        } else if world.has(entity, &ty) {
            writeln!(out, "entity '{entity_token}' does not own [{expr}]")?;
        } else {
            writeln!(out, "entity '{entity_token}' does not have [{expr}]")?;
        }
    } else if world.has_owned(entity, &ty) {
        writeln!(out, "entity '{entity_token}' already has [{expr}]")?;
    } else if world.has(entity, &ty) {
        world.add(entity, &ty)?;
        writeln!(out, "overridden [{expr}] for entity '{entity_token}'")?;
    } else {
        world.add(entity, &ty)?;
        writeln!(out, "added [{expr}] to entity '{entity_token}'")?;
    }

    Ok(())
}

fn cmd_delete<P: Provider, W: Write>(world: &mut P, args: &str, out: &mut W) -> Result<()> {
    let entity = resolve_id(world, args)?;
    world.delete(entity)?;
    writeln!(out, "deleted entity '{args}'")?;
    Ok(())
}

// =============================================================================
// snapshot / restore / help
// =============================================================================

fn cmd_snapshot<P: Provider>(
    world: &P,
    snapshot: &mut SnapshotSlot<P::Snapshot>,
    args: &str,
) -> Result<()> {
    let capture = if args.starts_with('[') {
        let filter = parse_filter(world, args)?;
        world.take_snapshot(Some(&filter))
    } else {
        world.take_snapshot(None)
    };

    snapshot.take(capture);
    Ok(())
}

fn cmd_restore<P: Provider>(world: &mut P, snapshot: &mut SnapshotSlot<P::Snapshot>) -> Result<()> {
    let capture = snapshot.restore()?;
    world.restore_snapshot(capture);
    Ok(())
}

fn cmd_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(
        out,
        " - [e]ntity entity                  - Display information about one or more matching entities"
    )?;
    writeln!(
        out,
        " - [t]able  entity                  - Display information about one or more matching tables"
    )?;
    writeln!(
        out,
        " - [s]ystem system                  - Display information about a matching system"
    )?;
    writeln!(
        out,
        " - [m]atch  entity system           - Display if entity matches with system and why (not)"
    )?;
    writeln!(
        out,
        " - [a]dd entity component           - Add component to entity"
    )?;
    writeln!(
        out,
        " - [r]emove entity component        - Remove component from entity"
    )?;
    writeln!(out, " - [d]elete entity                  - Delete entity")?;
    writeln!(
        out,
        " - snapshot                         - Take a snapshot of the current state"
    )?;
    writeln!(
        out,
        " - restore                          - Restore the previous snapshot"
    )?;
    writeln!(out)?;
    writeln!(out, " entity can be any of the following:")?;
    writeln!(out, " - id         (e.g. 42)")?;
    writeln!(out, " - name       (e.g. MyEntity)")?;
    writeln!(
        out,
        " - expression (e.g. [Position, Velocity], matches multiple)"
    )?;
    writeln!(out)?;
    writeln!(out, " component, system can be any of the following:")?;
    writeln!(out, " - id         (e.g. 42)")?;
    writeln!(out, " - name       (e.g. MyEntity)")?;
    writeln!(out)?;
    writeln!(
        out,
        " If no argument is provided for either 'entity' or 'table', all entities or tables"
    )?;
    writeln!(out, " are shown, respectively.")?;
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    writeln!(out, "  entity 42")?;
    writeln!(out, "  e 42")?;
    writeln!(out, "  e MyEntity")?;
    writeln!(out, "  e [Position, Velocity]")?;
    writeln!(out, "  add 42 Position")?;
    writeln!(out, "  match 42 Move")?;
    writeln!(out)?;
    Ok(())
}
