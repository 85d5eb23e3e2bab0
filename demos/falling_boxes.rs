use convex_impulse::*;

fn main() -> PhysicsResult<()> {
    let mut world = PhysicsWorld::new(WorldConfig::default())?;

    world.add_body(
        RigidBody::new(
            Material::ground(),
            Polygon::rectangle(Vec2::new(0.0, 10.0), Vec2::new(20.0, 1.0)),
        )
        .floor(),
    );

    let mut ids = Vec::new();
    for i in 0..5 {
        let center = Vec2::new(i as f32 * 0.3, 7.5 - i as f32 * 1.2);
        let mut polygon = Polygon::rectangle(center, Vec2::splat(0.5));
        polygon.rotate(i as f32 * 12.0);
        ids.push(world.add_body(RigidBody::new(Material::default(), polygon)));
    }
    ids.push(world.add_body(
        RigidBody::new(Material::ice(), Polygon::regular(Vec2::new(2.0, 2.0), 0.6, 6)).fragile(),
    ));

    for frame in 0..120 {
        let report = world.step_frame()?;
        for id in &report.newly_broken {
            println!("frame {frame}: body {id} broke");
        }
    }

    for id in ids {
        if let Some(body) = world.snapshot(id) {
            println!(
                "body {}: centroid {:?} angle {:.1} broken {}",
                body.id, body.centroid, body.angle, body.is_broken
            );
        }
    }
    Ok(())
}
