use squish::{apply_point_force, integrate, stability_hint, Stability, Surface, Vec3};
use test_case::test_case;

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

#[test_case(20.0, 5.0, 0.02 ; "reference parameters")]
#[test_case(5.0, 1.0, 0.02 ; "soft and lightly damped")]
#[test_case(200.0, 10.0, 0.01 ; "stiff")]
#[test_case(20.0, 40.0, 0.02 ; "heavily damped")]
fn converges_to_rest(spring_k: f32, damping: f32, dt: f32) {
    let mut surface = quad();
    for i in 0..surface.vertex_count() {
        surface.add_velocity(i, Vec3::new(0.5, -0.3, 0.8));
    }
    let mut peak = 0.0f32;
    for _ in 0..5000 {
        integrate(&mut surface, spring_k, damping, dt);
        peak = peak.max(surface.max_displacement());
    }
    assert!(peak > 0.0);
    assert!(surface.is_settled(1e-4, 1e-4), "max displacement {}", surface.max_displacement());
}

#[test]
fn energy_decays_with_reference_parameters() {
    let mut surface = quad();
    surface.add_velocity(0, Vec3::new(1.0, 0.0, 0.0));
    let energy = |s: &Surface<f32>| {
        s.displacement(0).length_sq() * 20.0 + s.velocity(0).length_sq()
    };
    let start = energy(&surface);
    for _ in 0..200 {
        integrate(&mut surface, 20.0, 5.0, 0.02);
    }
    assert!(energy(&surface) < start * 0.01);
}

#[test]
fn reference_scenario_relaxes_within_fifty_ticks() {
    let mut surface = quad();
    apply_point_force(&mut surface, Vec3::new(0.5, 0.5, 0.0), 10.0, 1.0, 0.02, 2000.0);

    let mut peak = 0.0f32;
    for _ in 0..50 {
        integrate(&mut surface, 20.0, 5.0, 0.02);
        peak = peak.max(surface.max_displacement());
    }

    assert!(peak > 1e-2, "vertices should visibly move, peak {}", peak);
    for i in 0..surface.vertex_count() {
        let d = surface.displacement(i).length();
        assert!(d < 1e-3, "vertex {} still {} from rest", i, d);
    }
}

#[test]
fn scenario_pushes_corners_outward() {
    let mut surface = quad();
    apply_point_force(&mut surface, Vec3::new(0.5, 0.5, 0.0), 10.0, 1.0, 0.02, 2000.0);
    integrate(&mut surface, 20.0, 5.0, 0.02);
    let p0 = surface.position(0);
    let p3 = surface.position(3);
    assert!(p0.x < 0.0 && p0.y < 0.0);
    assert!(p3.x > 1.0 && p3.y > 1.0);
    assert_eq!(p0.z, 0.0);
}

#[test]
fn oversized_damping_step_diverges() {
    let (spring_k, damping, dt) = (20.0f32, 150.0, 0.02);
    assert_eq!(stability_hint(spring_k, damping, dt), Stability::Divergent);

    let mut surface = quad();
    surface.add_velocity(0, Vec3::new(1.0, 0.0, 0.0));
    for _ in 0..20 {
        integrate(&mut surface, spring_k, damping, dt);
    }
    assert!(surface.velocity(0).length() > 1000.0);
}

#[test]
fn damping_step_above_one_drifts_away() {
    let (spring_k, damping, dt) = (20.0f32, 60.0, 0.02);
    assert_eq!(stability_hint(spring_k, damping, dt), Stability::Divergent);

    let mut surface = quad();
    surface.add_velocity(0, Vec3::new(1.0, 0.0, 0.0));
    integrate(&mut surface, spring_k, damping, dt);
    assert!(surface.velocity(0).x < 0.0, "velocity should flip sign");
    for _ in 0..5000 {
        integrate(&mut surface, spring_k, damping, dt);
    }
    assert!(surface.max_displacement() > 1.0);
}

#[test_case(20.0, 5.0, 0.02 ; "reference parameters")]
#[test_case(200.0, 10.0, 0.01 ; "stiff")]
#[test_case(20.0, 40.0, 0.02 ; "heavily damped")]
fn converging_parameters_are_classified_stable(spring_k: f32, damping: f32, dt: f32) {
    assert_eq!(stability_hint(spring_k, damping, dt), Stability::Stable);
}
