use convex_impulse::*;

fn main() {
    let mut world = PhysicsWorld::default();
    let hexagon = world.add_body(RigidBody::new(
        Material::default(),
        Polygon::regular(Vec2::new(3.0, 3.0), 2.0, 6),
    ));

    let cursor = Vec2::new(3.5, 2.5);
    match world.pick_body(cursor) {
        Some(id) => println!("cursor {cursor} grabs body {id}"),
        None => println!("cursor {cursor} hits nothing"),
    }

    // a soft-body particle that drifted inside gets pushed back to the surface
    let particle = Vec2::new(4.6, 3.1);
    if let Some(body) = world.body(hexagon) {
        if let Some(hit) = boundary_contact(particle, body.vertices()) {
            println!(
                "particle {particle} is {:.3} deep, move it to {} (normal {})",
                hit.distance, hit.point, hit.normal
            );
        }
    }
}
