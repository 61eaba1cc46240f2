//! A canned solar-system world for the demo binary and the behavior tests.

use crate::query::Term;
use crate::world::Testbed;

/// Builds a small world with a prefab, inheritance, containment, and two
/// systems, enough to exercise every console command.
#[must_use]
pub fn demo_world() -> Testbed {
    let mut world = Testbed::new();

    let position = world.register_component("Position");
    let velocity = world.register_component("Velocity");
    let mass = world.register_component("Mass");

    let planet_base = world.spawn(Some("PlanetBase"), &[mass]);
    world.set_prefab(planet_base, true);

    let earth = world.spawn(Some("Earth"), &[position, velocity]);
    world.set_base(earth, planet_base);

    let moon = world.spawn(Some("Moon"), &[position]);
    world.set_parent(moon, earth);

    world.spawn(Some("Sun"), &[position, mass]);

    world.register_system("Move", vec![Term::has(position), Term::has(velocity)]);
    world.register_system("Weigh", vec![Term::has(position), Term::has(mass)]);

    world
}
