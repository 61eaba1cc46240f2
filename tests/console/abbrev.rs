//! Single-letter command abbreviations behave exactly like full names.

use proptest::prelude::*;
use spyglass_testbed::demo_world;

use crate::util::run_output;

fn assert_same_output(full: &str, abbreviated: &str) {
    let long = run_output(demo_world(), &[full]);
    let short = run_output(demo_world(), &[abbreviated]);
    assert_eq!(long, short, "'{abbreviated}' diverged from '{full}'");
}

#[test]
fn listing_abbreviations() {
    assert_same_output("entity", "e");
    assert_same_output("table", "t");
    assert_same_output("system", "s");
}

#[test]
fn argument_abbreviations() {
    assert_same_output("entity Earth", "e Earth");
    assert_same_output("table 2", "t 2");
    assert_same_output("system Move", "s Move");
    assert_same_output("match Moon Move", "m Moon Move");
    assert_same_output("help", "h");
}

#[test]
fn mutation_abbreviations() {
    assert_same_output("add Moon Velocity", "a Moon Velocity");
    assert_same_output("remove Earth Velocity", "r Earth Velocity");
    assert_same_output("delete Moon", "d Moon");
}

#[test]
fn ambiguous_letters_resolve_in_fixed_order() {
    // `s` is system (not snapshot), `r` is remove (not restore); the longer
    // commands stay reachable by their full names.
    let output = run_output(demo_world(), &["s", "r Earth Velocity"]);
    assert!(output.contains("tables matched"));
    assert!(output.contains("removed [Velocity] from entity 'Earth'"));

    let output = run_output(demo_world(), &["snapshot", "restore"]);
    assert!(output.is_empty());
}

proptest! {
    /// Whole sessions, not just routing: for any command whose single letter
    /// resolves to itself, the full-name and abbreviated sessions over a
    /// fresh world print byte-identical output.
    #[test]
    fn abbreviated_sessions_match_full_sessions(
        name_index in 0..9usize,
        args in "[A-Za-z0-9 ]{0,16}",
    ) {
        const NAMES: &[&str] = &[
            "table", "system", "entity", "match", "add", "remove", "delete",
            "help", "quit",
        ];
        let name = NAMES[name_index];
        let full = format!("{name} {args}");
        let short = format!("{} {args}", &name[..1]);

        let long_output = run_output(demo_world(), &[full.as_str()]);
        let short_output = run_output(demo_world(), &[short.as_str()]);

        // Diagnostics echo the typed line in quotes; normalize only that
        // quoted echo so surrounding text is compared verbatim.
        let long_output = long_output.replace(&format!("'{full}'"), "'<line>'");
        let short_output = short_output.replace(&format!("'{short}'"), "'<line>'");
        prop_assert_eq!(long_output, short_output);
    }
}

#[test]
fn empty_arguments_fail_identically_for_both_forms() {
    // `remove` with no arguments fails; each form echoes its own line and
    // nothing else differs.
    let long = run_output(demo_world(), &["remove "]);
    let short = run_output(demo_world(), &["r "]);
    assert_eq!(long, "error executing 'remove '\n");
    assert_eq!(short, "error executing 'r '\n");
}

#[test]
fn prefixes_other_than_one_letter_do_not_route() {
    let output = run_output(demo_world(), &["ent", "tab 1", "sys Move"]);
    assert_eq!(
        output,
        "error executing 'ent'\n\
         error executing 'tab 1'\n\
         error executing 'sys Move'\n"
    );
}
