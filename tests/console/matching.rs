//! The `match` command and its failure diagnostics.

use spyglass_console::Provider;
use spyglass_testbed::{demo_world, Term, Testbed};

use crate::util::run_output;

#[test]
fn matching_entity_reports_success() {
    let output = run_output(demo_world(), &["match Earth Move"]);
    assert_eq!(output, "entity 'Earth' matches with system 'Move'\n");
}

#[test]
fn shared_components_satisfy_a_match() {
    // Earth owns no Mass; it inherits one from PlanetBase.
    let output = run_output(demo_world(), &["match Earth Weigh"]);
    assert_eq!(output, "entity 'Earth' matches with system 'Weigh'\n");
}

#[test]
fn missing_component_names_the_failing_column() {
    let output = run_output(demo_world(), &["match Moon Move"]);
    assert_eq!(
        output,
        "entity 'Moon' does not match with system 'Move'\n\
         column 2: [Velocity] missing (owned or shared)\n"
    );
}

#[test]
fn non_system_argument_is_diagnosed() {
    let output = run_output(demo_world(), &["match Earth Sun"]);
    assert_eq!(
        output,
        "entity 'Earth' does not match with system 'Sun'\n\
         entity 'Sun' is not a system\n"
    );
}

#[test]
fn prefab_entities_never_match() {
    let output = run_output(demo_world(), &["match PlanetBase Weigh"]);
    assert_eq!(
        output,
        "entity 'PlanetBase' does not match with system 'Weigh'\n\
         entity is a prefab\n"
    );
}

#[test]
fn disabled_entities_never_match() {
    let mut world = demo_world();
    let earth = world.lookup("Earth");
    world.set_disabled(earth, true);
    let output = run_output(world, &["match Earth Move"]);
    assert_eq!(
        output,
        "entity 'Earth' does not match with system 'Move'\n\
         entity is disabled\n"
    );
}

#[test]
fn task_systems_never_match() {
    let mut world = demo_world();
    let system = world.lookup("Move");
    world.set_system_task(system, true);
    let output = run_output(world, &["match Earth Move"]);
    assert_eq!(
        output,
        "entity 'Earth' does not match with system 'Move'\n\
         system is a task\n"
    );
}

#[test]
fn owned_only_terms_reject_shared_components() {
    let mut world = Testbed::new();
    let mass = world.register_component("Mass");
    let spin = world.register_component("Spin");
    let base = world.spawn(Some("Base"), &[mass]);
    let leaf = world.spawn(Some("Leaf"), &[spin]);
    world.set_base(leaf, base);
    world.register_system("OwnWeigh", vec![Term::has_owned(mass)]);

    let output = run_output(world, &["match Leaf OwnWeigh"]);
    assert_eq!(
        output,
        "entity 'Leaf' does not match with system 'OwnWeigh'\n\
         column 1: [Mass] missing (owned)\n"
    );
}

#[test]
fn shared_only_terms_reject_owned_components() {
    let mut world = Testbed::new();
    let mass = world.register_component("Mass");
    world.spawn(Some("Boulder"), &[mass]);
    world.register_system("Inherited", vec![Term::has_shared(mass)]);

    let output = run_output(world, &["match Boulder Inherited"]);
    assert_eq!(
        output,
        "entity 'Boulder' does not match with system 'Inherited'\n\
         column 1: [Mass] missing (shared)\n"
    );
}

#[test]
fn entity_ref_terms_fail_for_every_candidate() {
    let mut world = Testbed::new();
    let tick = world.register_component("Tick");
    let spin = world.register_component("Spin");
    world.spawn(Some("Clock"), &[]);
    world.spawn(Some("Node"), &[spin]);
    let clock = world.lookup("Clock");
    world.register_system("Sync", vec![Term::from_entity(clock, tick)]);

    let output = run_output(world, &["match Node Sync"]);
    assert_eq!(
        output,
        "entity 'Node' does not match with system 'Sync'\n\
         column 1: [Tick] missing (from entity, system will never run!)\n"
    );
}

#[test]
fn or_container_terms_need_one_alternative_on_a_parent() {
    let mut world = Testbed::new();
    let hull = world.register_component("Hull");
    let deck = world.register_component("Deck");
    let crate_ = world.register_component("Crate");
    world.spawn(Some("Cargo"), &[crate_]);
    world.register_system("Stow", vec![Term::any_of_container([hull, deck])]);

    let output = run_output(world, &["match Cargo Stow"]);
    assert_eq!(
        output,
        "entity 'Cargo' does not match with system 'Stow'\n\
         column 1: [Hull, Deck] missing in OR expression (from container)\n"
    );
}

#[test]
fn not_terms_fail_when_the_component_is_present() {
    let mut world = Testbed::new();
    let position = world.register_component("Position");
    let frozen = world.register_component("Frozen");
    world.spawn(Some("Rock"), &[position, frozen]);
    world.register_system(
        "Drift",
        vec![Term::has(position), Term::without(frozen)],
    );
    let output = run_output(world, &["match Rock Drift"]);
    assert_eq!(
        output,
        "entity 'Rock' does not match with system 'Drift'\n\
         column 2: has [Frozen] from NOT expression (owned or shared)\n"
    );
}

#[test]
fn not_owned_terms_fail_on_owned_components_only() {
    let mut world = Testbed::new();
    let frozen = world.register_component("Frozen");
    world.spawn(Some("Glacier"), &[frozen]);
    world.register_system("Thaw", vec![Term::without_owned(frozen)]);

    let output = run_output(world, &["match Glacier Thaw"]);
    assert_eq!(
        output,
        "entity 'Glacier' does not match with system 'Thaw'\n\
         column 1: has [Frozen] in NOT expression (owned)\n"
    );
}

#[test]
fn not_shared_terms_fail_on_inherited_components() {
    let mut world = Testbed::new();
    let frozen = world.register_component("Frozen");
    let spin = world.register_component("Spin");
    let base = world.spawn(Some("IceBase"), &[frozen]);
    let leaf = world.spawn(Some("Berg"), &[spin]);
    world.set_base(leaf, base);
    world.register_system("Melt", vec![Term::without_shared(frozen)]);

    let output = run_output(world, &["match Berg Melt"]);
    assert_eq!(
        output,
        "entity 'Berg' does not match with system 'Melt'\n\
         column 1: has [Frozen] in NOT expression (shared)\n"
    );
}

#[test]
fn not_container_terms_fail_on_parent_components() {
    let mut world = Testbed::new();
    let hull = world.register_component("Hull");
    let turret = world.register_component("Turret");
    let ship = world.spawn(Some("Ship"), &[hull]);
    let gun = world.spawn(Some("Gun"), &[turret]);
    world.set_parent(gun, ship);
    world.register_system("Loose", vec![Term::without_container(hull)]);

    let output = run_output(world, &["match Gun Loose"]);
    assert_eq!(
        output,
        "entity 'Gun' does not match with system 'Loose'\n\
         column 1: has [Hull] in NOT expression (from container)\n"
    );
}

#[test]
fn or_terms_need_one_alternative() {
    let mut world = Testbed::new();
    let heat = world.register_component("Heat");
    let cold = world.register_component("Cold");
    let spin = world.register_component("Spin");
    world.spawn(Some("Top"), &[spin]);
    world.register_system("Thermal", vec![Term::any_of([heat, cold])]);
    let output = run_output(world, &["match Top Thermal"]);
    assert_eq!(
        output,
        "entity 'Top' does not match with system 'Thermal'\n\
         column 1: [Heat, Cold] missing in OR expression (owned or shared)\n"
    );
}

#[test]
fn container_terms_look_at_the_parent_chain() {
    let mut world = Testbed::new();
    let hull = world.register_component("Hull");
    let turret = world.register_component("Turret");
    let ship = world.spawn(Some("Ship"), &[hull]);
    let gun = world.spawn(Some("Gun"), &[turret]);
    world.set_parent(gun, ship);
    world.spawn(Some("Stray"), &[turret]);
    world.register_system(
        "Mount",
        vec![Term::has(turret), Term::from_container(hull)],
    );

    let mounted = run_output(world, &["match Gun Mount", "match Stray Mount"]);
    assert_eq!(
        mounted,
        "entity 'Gun' matches with system 'Mount'\n\
         entity 'Stray' does not match with system 'Mount'\n\
         column 2: [Hull] missing (container)\n"
    );
}
