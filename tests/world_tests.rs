use approx::assert_abs_diff_eq;
use convex_impulse::{Material, PhysicsError, PhysicsWorld, Polygon, RigidBody, Vec2, WorldConfig};

fn still_world() -> PhysicsWorld {
    PhysicsWorld::new(WorldConfig {
        gravity: Vec2::ZERO,
        ..WorldConfig::default()
    })
    .expect("valid config")
}

fn floor() -> RigidBody {
    RigidBody::new(
        Material::ground(),
        Polygon::rectangle(Vec2::new(0.0, 5.0), Vec2::new(20.0, 1.0)),
    )
    .floor()
}

fn square(center: Vec2) -> RigidBody {
    RigidBody::new(Material::default(), Polygon::rectangle(center, Vec2::splat(0.5)))
}

#[test]
fn static_floor_absorbs_no_correction() {
    let mut world = still_world();
    let floor_id = world.add_body(floor());
    // bottom edge at 4.2, floor top at 4.0: 0.2 deep
    let square_id = world.add_body(square(Vec2::new(0.0, 3.7)));

    let report = world.step_body(square_id, 1.0 / 480.0).expect("live body");
    assert_eq!(report.overlaps, 1);

    let floor_body = world.body(floor_id).unwrap();
    assert_eq!(floor_body.centroid(), Vec2::new(0.0, 5.0));
    assert_eq!(floor_body.velocity, Default::default());

    let square_body = world.body(square_id).unwrap();
    assert_abs_diff_eq!(square_body.centroid().y, 3.5, epsilon = 1e-5);
    assert_abs_diff_eq!(square_body.centroid().x, 0.0, epsilon = 1e-5);
}

#[test]
fn fragile_body_breaks_once_on_floor() {
    let mut world = still_world();
    world.add_body(floor());
    let vase = world.add_body(square(Vec2::new(0.0, 3.7)).fragile());

    let first = world.step_body(vase, 1.0 / 480.0).unwrap();
    assert_eq!(first.newly_broken, vec![vase]);
    assert!(world.body(vase).unwrap().is_broken());

    // lift it clear and keep stepping
    {
        let body = world.body_mut(vase).unwrap();
        body.polygon_mut().translate(Vec2::new(0.0, -10.0));
        body.set_velocity(Vec2::ZERO, 0.0);
    }
    for _ in 0..5 {
        let report = world.step(1.0 / 480.0).unwrap();
        assert_eq!(report.overlaps, 0);
        assert!(report.newly_broken.is_empty());
    }
    assert!(world.body(vase).unwrap().is_broken());
}

#[test]
fn fragile_body_survives_non_floor_contact() {
    let mut world = still_world();
    let shelf = world.add_body(RigidBody::new(
        Material::ground(),
        Polygon::rectangle(Vec2::new(0.0, 5.0), Vec2::new(20.0, 1.0)),
    ));
    let vase = world.add_body(square(Vec2::new(0.0, 3.7)).fragile());

    world.step(1.0 / 480.0).unwrap();

    assert!(!world.body(vase).unwrap().is_broken());
    assert!(!world.body(shelf).unwrap().is_broken());
}

#[test]
fn associated_bodies_never_collide() {
    let mut world = still_world();
    let upper_arm = world.add_body(square(Vec2::ZERO));
    let forearm = world.add_body(square(Vec2::new(0.6, 0.0)));
    world.add_associated_body(upper_arm, forearm).unwrap();
    let before = world.body(forearm).unwrap().centroid();

    let report = world.step(1.0 / 480.0).unwrap();

    assert_eq!(report.overlaps, 0);
    assert_eq!(world.body(upper_arm).unwrap().centroid(), Vec2::ZERO);
    assert_eq!(world.body(forearm).unwrap().centroid(), before);
}

#[test]
fn unassociated_overlap_is_pushed_apart() {
    let mut world = still_world();
    let left = world.add_body(square(Vec2::ZERO));
    let right = world.add_body(square(Vec2::new(0.6, 0.0)));

    world.step_body(left, 1.0 / 480.0).unwrap();

    let gap = world.body(right).unwrap().centroid().x - world.body(left).unwrap().centroid().x;
    assert_abs_diff_eq!(gap, 1.0, epsilon = 1e-5);
}

#[test]
fn box_comes_to_rest_on_floor() {
    let mut world = PhysicsWorld::default();
    world.add_body(floor());
    let crate_id = world.add_body(square(Vec2::new(0.0, 1.0)));

    for _ in 0..180 {
        world.step_frame().unwrap();
    }

    let body = world.body(crate_id).unwrap();
    assert!(body.centroid().y < 3.6, "crate sank to {}", body.centroid().y);
    assert!(body.centroid().y > 3.3, "crate hovers at {}", body.centroid().y);
    assert!(body.velocity.linear.length() < 0.5);
}

#[test]
fn stale_handles_are_reported() {
    let mut world = still_world();
    let id = world.add_body(square(Vec2::ZERO));
    world.remove_body(id).unwrap();

    assert_eq!(world.step_body(id, 0.01).unwrap_err(), PhysicsError::UnknownBody(id));
    assert!(world.remove_body(id).is_err());
    assert!(world.add_associated_body(id, id).is_err());
}

#[test]
fn degenerate_polygon_aborts_the_step() {
    let mut world = still_world();
    let dot = world.add_body(RigidBody::new(
        Material::default(),
        Polygon::new(vec![Vec2::ZERO]),
    ));
    world.add_body(square(Vec2::new(3.0, 0.0)));

    let err = world.step_body(dot, 0.01).unwrap_err();
    assert_eq!(err, PhysicsError::DegeneratePolygon { vertex_count: 1 });
}

#[test]
fn pick_body_prefers_topmost() {
    let mut world = still_world();
    let bottom = world.add_body(square(Vec2::ZERO));
    let top = world.add_body(square(Vec2::new(0.5, 0.0)));

    assert_eq!(world.pick_body(Vec2::new(0.3, 0.1)), Some(top));
    assert_eq!(world.pick_body(Vec2::new(-0.3, 0.1)), Some(bottom));
    assert_eq!(world.pick_body(Vec2::new(5.0, 5.0)), None);
}

#[test]
fn snapshots_expose_render_state() {
    let mut world = still_world();
    let id = world.add_body(RigidBody::new(
        Material::rubber().with_color([255, 0, 0, 255]),
        Polygon::rectangle(Vec2::new(2.0, 2.0), Vec2::ONE),
    ));

    let snapshot = world.snapshot(id).expect("live body");
    assert_eq!(snapshot.id, id);
    assert_eq!(snapshot.color, [255, 0, 0, 255]);
    assert_eq!(snapshot.centroid, Vec2::new(2.0, 2.0));
    assert_eq!(snapshot.vertices.len(), 4);
    assert!(!snapshot.is_static);
    assert_eq!(world.snapshots().len(), 1);
}

#[test]
fn world_config_sets_inertia_of_added_bodies() {
    let mut world = PhysicsWorld::new(WorldConfig {
        inverse_inertia_scale: 0.5,
        ..WorldConfig::default()
    })
    .expect("valid config");
    let id = world.add_body(square(Vec2::ZERO));
    let floor_id = world.add_body(floor());

    let body = world.body(id).expect("live body");
    assert_abs_diff_eq!(body.inverse_inertia(), body.inverse_mass() * 0.5, epsilon = 1e-6);
    assert_eq!(world.body(floor_id).expect("live body").inverse_inertia(), 0.0);
}

#[test]
fn invalid_config_is_rejected_by_world() {
    let backwards = WorldConfig {
        time_step: -1.0 / 60.0,
        ..WorldConfig::default()
    };
    assert!(matches!(
        PhysicsWorld::new(backwards),
        Err(PhysicsError::InvalidConfig(_))
    ));
    assert!(PhysicsWorld::new(WorldConfig::default()).is_ok());
}

#[test]
fn associated_group_excludes_every_pair() {
    let mut world = still_world();
    let torso = world.add_body(square(Vec2::ZERO));
    let left_leg = world.add_body(square(Vec2::new(0.6, 0.0)));
    let right_leg = world.add_body(square(Vec2::new(-0.6, 0.0)));
    world.add_associated_group(&[torso, left_leg, right_leg]).unwrap();

    let report = world.step(1.0 / 480.0).unwrap();
    assert_eq!(report.overlaps, 0);
    assert_eq!(world.associations.len(), 3);

    world.remove_body(right_leg).unwrap();
    assert!(world.add_associated_group(&[torso, right_leg]).is_err());
}

#[test]
fn associated_bodies_link_one_body_to_many() {
    let mut world = still_world();
    let torso = world.add_body(square(Vec2::ZERO));
    let arm = world.add_body(square(Vec2::new(0.6, 0.0)));
    let leg = world.add_body(square(Vec2::new(0.0, 0.6)));
    world.add_associated_bodies(torso, &[arm, leg]).unwrap();

    assert!(world.associations.are_associated(torso, arm));
    assert!(world.associations.are_associated(leg, torso));
    assert!(!world.associations.are_associated(arm, leg));
}
