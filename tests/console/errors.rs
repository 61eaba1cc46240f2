//! Error reporting and loop resilience: a failing command prints one
//! diagnostic and the session keeps going.

use spyglass_console::Provider;
use spyglass_testbed::demo_world;

use crate::util::{run_console, run_output};

#[test]
fn unknown_command_prints_the_generic_diagnostic() {
    let output = run_output(demo_world(), &["frobnicate"]);
    assert_eq!(output, "error executing 'frobnicate'\n");
}

#[test]
fn table_ids_out_of_range_fail() {
    // Tables are 1-indexed; 0 and count+1 are both out of range.
    let output = run_output(demo_world(), &["table 0", "table 6"]);
    assert_eq!(
        output,
        "error executing 'table 0'\nerror executing 'table 6'\n"
    );
}

#[test]
fn unresolved_names_fail() {
    let output = run_output(demo_world(), &["entity Pluto", "match 0 Move"]);
    assert_eq!(
        output,
        "error executing 'entity Pluto'\nerror executing 'match 0 Move'\n"
    );
}

#[test]
fn malformed_filters_fail() {
    let output = run_output(demo_world(), &["entity [Position", "table Position]"]);
    assert_eq!(
        output,
        "error executing 'entity [Position'\nerror executing 'table Position]'\n"
    );
}

#[test]
fn a_failing_command_does_not_end_the_session() {
    let output = run_output(demo_world(), &["table 99", "match Earth Move"]);
    assert_eq!(
        output,
        "error executing 'table 99'\n\
         entity 'Earth' matches with system 'Move'\n"
    );
}

#[test]
fn quit_requests_shutdown_and_keeps_reading() {
    let (output, world) = run_console(demo_world(), &["quit", "match Earth Move"]);
    assert!(world.should_quit());
    // The loop only ends at EOF; commands after `quit` still run.
    assert_eq!(output, "entity 'Earth' matches with system 'Move'\n");
}

#[test]
fn help_lists_every_command() {
    let output = run_output(demo_world(), &["help"]);
    assert!(output.starts_with("Commands:\n"));
    for line in [
        " - [e]ntity entity",
        " - [t]able  entity",
        " - [s]ystem system",
        " - [m]atch  entity system",
        " - [a]dd entity component",
        " - [r]emove entity component",
        " - [d]elete entity",
        " - snapshot",
        " - restore",
    ] {
        assert!(output.contains(line), "help is missing '{line}'");
    }
}

#[test]
fn match_requires_two_arguments() {
    let output = run_output(demo_world(), &["match Earth"]);
    assert_eq!(output, "error executing 'match Earth'\n");
}

#[test]
fn failed_mutations_leave_the_world_untouched() {
    let (_, world) = run_console(demo_world(), &["add Pluto Mass", "delete Pluto"]);
    // Resolution failed before any mutation; the demo entities are intact.
    assert_eq!(world.table_count(), 5);
    assert!(world.entity_info(world.lookup("Earth")).is_some());
}
