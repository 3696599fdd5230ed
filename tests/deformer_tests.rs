use rand::rngs::SmallRng;
use rand::SeedableRng;
use squish::{
    CollisionProxy, ConfigError, DeformError, DeformerConfig, Hit, LogStepObserver, MeshDeformer,
    NoOpStepObserver, Point3, Surface, Vec3,
};

fn quad() -> Surface<f32> {
    Surface::new(
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2], [2, 1, 3]],
    )
    .unwrap()
}

fn deformer(config: DeformerConfig<f32>) -> MeshDeformer<f32, SmallRng> {
    MeshDeformer::new(quad(), config, SmallRng::seed_from_u64(17)).unwrap()
}

#[derive(Default)]
struct CountingCollider {
    syncs: usize,
    vertices: usize,
    triangles: usize,
}

impl CollisionProxy<f32> for CountingCollider {
    fn resync(&mut self, positions: &[Point3<f32>], triangles: &[[usize; 3]]) {
        self.syncs += 1;
        self.vertices = positions.len();
        self.triangles = triangles.len();
    }
}

#[test]
fn press_is_queued_until_step() {
    let mut d = deformer(DeformerConfig::new());
    d.press(Hit::new(Vec3::new(0.5, 0.5, 0.0), Vec3::new(0.0, 0.0, 1.0))).unwrap();
    assert_eq!(d.pending_impulses().len(), 1);
    assert!(d.surface().velocities().iter().all(|v| *v == Vec3::zero()));

    d.step(0.02, &mut NoOpStepObserver).unwrap();
    assert!(d.pending_impulses().is_empty());
    assert!(d.surface().max_displacement() > 0.0);
}

#[test]
fn press_origin_is_offset_along_normal() {
    let mut d = deformer(DeformerConfig::new().with_force_offset(0.5).with_force(4.0));
    d.press(Hit::new(Vec3::new(0.5, 0.5, 0.0), Vec3::new(0.0, 0.0, 1.0))).unwrap();
    let impulse = d.pending_impulses()[0];
    assert_eq!(impulse.origin, Vec3::new(0.5, 0.5, 0.5));
    assert_eq!(impulse.magnitude, 4.0);

    // Origin sits above the surface, so the push has a downward component.
    d.step(0.02, &mut NoOpStepObserver).unwrap();
    assert!(d.surface().velocities().iter().all(|v| v.z < 0.0));
}

#[test]
fn press_with_overrides_magnitude() {
    let mut d = deformer(DeformerConfig::new());
    d.press_with(Hit::new(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0)), -3.0).unwrap();
    assert_eq!(d.pending_impulses()[0].magnitude, -3.0);
}

#[test]
fn non_finite_hits_are_rejected() {
    let mut d = deformer(DeformerConfig::new());
    let err = d.press(Hit::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)));
    assert_eq!(err, Err(DeformError::NonFiniteInput));
    let err = d.press_with(Hit::new(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0)), f32::INFINITY);
    assert_eq!(err, Err(DeformError::NonFiniteInput));
    assert!(d.pending_impulses().is_empty());
}

#[test]
fn invalid_timesteps_are_rejected() {
    let mut d = deformer(DeformerConfig::new());
    assert_eq!(d.step(0.0, &mut NoOpStepObserver), Err(DeformError::InvalidTimestep));
    assert_eq!(d.step(-0.02, &mut NoOpStepObserver), Err(DeformError::InvalidTimestep));
    assert_eq!(d.step(f32::NAN, &mut NoOpStepObserver), Err(DeformError::InvalidTimestep));
    assert_eq!(
        d.apply_impulse(Vec3::zero(), 1.0, 0.0),
        Err(DeformError::InvalidTimestep)
    );
}

#[test]
fn invalid_config_is_rejected() {
    let result = MeshDeformer::new(
        quad(),
        DeformerConfig::new().with_vertex_mass(-1.0),
        SmallRng::seed_from_u64(0),
    );
    assert!(matches!(
        result,
        Err(DeformError::InvalidConfig(ConfigError::NonPositiveMass))
    ));

    let mut d = deformer(DeformerConfig::new());
    let err = d.set_config(DeformerConfig::new().with_wiggle(3.0, 1.0));
    assert_eq!(err, Err(DeformError::InvalidConfig(ConfigError::WiggleDelayOrder)));
    assert_eq!(*d.config(), DeformerConfig::new());
}

#[test]
fn scenario_through_deformer() {
    let config = DeformerConfig::new()
        .with_spring_force(20.0)
        .with_damping(5.0)
        .with_vertex_mass(1.0);
    let mut d = deformer(config);
    d.apply_impulse(Vec3::new(0.5, 0.5, 0.0), 10.0, 0.02).unwrap();
    let mut observer = LogStepObserver::new();
    for _ in 0..50 {
        d.step(0.02, &mut observer).unwrap();
    }
    assert_eq!(observer.steps(), 50);
    for i in 0..d.surface().vertex_count() {
        assert!(d.surface().displacement(i).length() < 1e-3);
    }
}

#[test]
fn center_tracking_follows_gravity() {
    let config = DeformerConfig::new()
        .with_gravity(9.81)
        .with_auto_recalculate_center(true);
    let mut d = deformer(config);
    assert_eq!(d.center(), None);
    d.step(0.02, &mut NoOpStepObserver).unwrap();
    let center = d.center().unwrap();
    assert!((center.x - 0.5).abs() < 1e-6);
    assert!(center.y < 0.5);

    let config = d.config().clone().with_auto_recalculate_center(false);
    d.set_config(config).unwrap();
    assert_eq!(d.center(), None);
}

#[test]
fn center_not_tracked_by_default() {
    let mut d = deformer(DeformerConfig::new().with_gravity(1.0));
    d.step(0.02, &mut NoOpStepObserver).unwrap();
    assert_eq!(d.center(), None);
    assert!(d.centroid().is_some());
}

#[test]
fn normals_and_bounds_on_demand() {
    let d = deformer(DeformerConfig::new());
    let normals = d.normals();
    assert_eq!(normals.len(), 4);
    assert!(normals.iter().all(|n| *n == Vec3::new(0.0, 0.0, 1.0)));
    let bounds = d.bounds().unwrap();
    assert_eq!(bounds.min, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(bounds.max, Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn normals_tilt_after_poke() {
    let mut d = deformer(DeformerConfig::new());
    d.apply_impulse(Vec3::new(1.0, 1.0, -0.5), 500.0, 0.02).unwrap();
    d.step(0.02, &mut NoOpStepObserver).unwrap();
    let n = d.normals()[0];
    assert!((n.length() - 1.0).abs() < 1e-5);
    assert!(n.z < 1.0);
}

#[test]
fn collider_resync_is_explicit() {
    let mut d = deformer(DeformerConfig::new());
    let mut collider = CountingCollider::default();
    for _ in 0..10 {
        d.step(0.02, &mut NoOpStepObserver).unwrap();
    }
    assert_eq!(collider.syncs, 0);
    d.sync_collider(&mut collider);
    assert_eq!(collider.syncs, 1);
    assert_eq!(collider.vertices, 4);
    assert_eq!(collider.triangles, 2);
}

#[test]
fn reset_clears_motion_and_queue() {
    let mut d = deformer(DeformerConfig::new());
    d.press(Hit::new(Vec3::new(0.5, 0.5, 0.0), Vec3::new(0.0, 0.0, 1.0))).unwrap();
    d.step(0.02, &mut NoOpStepObserver).unwrap();
    d.press(Hit::new(Vec3::new(0.5, 0.5, 0.0), Vec3::new(0.0, 0.0, 1.0))).unwrap();
    d.reset();
    assert!(d.pending_impulses().is_empty());
    assert!(d.surface().is_settled(1e-9, 1e-9));
    let surface = d.into_surface();
    assert_eq!(surface.positions(), surface.rest_positions());
}
