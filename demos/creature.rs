use convex_impulse::*;

fn main() -> PhysicsResult<()> {
    let mut world = PhysicsWorld::default();
    world.add_body(
        RigidBody::new(
            Material::ground(),
            Polygon::rectangle(Vec2::new(0.0, 6.0), Vec2::new(30.0, 1.0)),
        )
        .floor(),
    );

    // torso plus two legs, pinned at the torso's bottom corners
    let torso = world.add_body(
        RigidBody::new(
            Material::default(),
            Polygon::rectangle(Vec2::new(0.0, 2.0), Vec2::new(1.0, 0.3)),
        )
        .fragile(),
    );
    let left = world.add_body(RigidBody::new(
        Material::rubber(),
        Polygon::rectangle(Vec2::new(-1.0, 3.0), Vec2::new(0.15, 0.8)),
    ));
    let right = world.add_body(RigidBody::new(
        Material::rubber(),
        Polygon::rectangle(Vec2::new(1.0, 3.0), Vec2::new(0.15, 0.8)),
    ));

    world.add_associated_group(&[torso, left, right])?;
    for (leg, torso_corner) in [(left, 3), (right, 2)] {
        world.add_joint(Joint::Pin {
            body_a: torso,
            body_b: leg,
            vertex_a: torso_corner,
            vertex_b: 0,
        })?;
    }

    for frame in 0..240 {
        if let Some(leg) = world.body_mut(left) {
            leg.apply_torque(if frame % 60 < 30 { 40.0 } else { -40.0 });
        }
        world.step_frame()?;
    }

    let snapshot = world.snapshot(torso).ok_or(PhysicsError::UnknownBody(torso))?;
    println!(
        "torso at {:?}, velocity {:?}, fell over: {}",
        snapshot.centroid, snapshot.velocity.linear, snapshot.is_broken
    );
    Ok(())
}
