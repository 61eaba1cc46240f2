//! The `snapshot` and `restore` commands.

use spyglass_console::Provider;
use spyglass_testbed::demo_world;

use crate::util::{run_console, run_output};

#[test]
fn restore_undoes_mutations_since_the_snapshot() {
    let (output, world) = run_console(
        demo_world(),
        &["snapshot", "delete Moon", "remove Earth Velocity", "restore"],
    );
    assert_eq!(
        output,
        "deleted entity 'Moon'\nremoved [Velocity] from entity 'Earth'\n"
    );
    assert!(!world.lookup("Moon").is_null());
    assert!(world.entity_info(world.lookup("Moon")).is_some());
    let velocity = world.expr_to_type("Velocity").unwrap();
    assert!(world.has_owned(world.lookup("Earth"), &velocity));
}

#[test]
fn a_snapshot_can_be_restored_only_once() {
    let output = run_output(demo_world(), &["snapshot", "restore", "restore"]);
    assert_eq!(output, "error executing 'restore'\n");
}

#[test]
fn restore_without_snapshot_fails() {
    let output = run_output(demo_world(), &["restore"]);
    assert_eq!(output, "error executing 'restore'\n");
}

#[test]
fn a_new_snapshot_replaces_the_held_one() {
    let (output, world) = run_console(
        demo_world(),
        &["snapshot", "delete Moon", "snapshot", "delete Sun", "restore"],
    );
    assert_eq!(output, "deleted entity 'Moon'\ndeleted entity 'Sun'\n");
    // The second snapshot was taken after Moon's deletion; only Sun returns.
    assert!(world.lookup("Moon").is_null());
    assert!(!world.lookup("Sun").is_null());
}

#[test]
fn filtered_snapshot_restores_matching_entities_only() {
    let (output, world) = run_console(
        demo_world(),
        &[
            "snapshot [Mass]",
            "remove Sun Mass",
            "remove Moon Position",
            "restore",
        ],
    );
    assert_eq!(
        output,
        "removed [Mass] from entity 'Sun'\nremoved [Position] from entity 'Moon'\n"
    );
    // Sun passed the filter and is restored; Moon did not and keeps its
    // mutated state.
    let mass = world.expr_to_type("Mass").unwrap();
    let position = world.expr_to_type("Position").unwrap();
    assert!(world.has_owned(world.lookup("Sun"), &mass));
    assert!(!world.has_owned(world.lookup("Moon"), &position));
}

#[test]
fn snapshot_with_a_bad_filter_fails_and_holds_nothing() {
    let output = run_output(demo_world(), &["snapshot [Bogus]", "restore"]);
    assert_eq!(
        output,
        "error executing 'snapshot [Bogus]'\nerror executing 'restore'\n"
    );
}
