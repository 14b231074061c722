use posekit_math::quaternion::Quaternion;
use posekit_math::vector::Vector3;
use posekit_rigid::dual_quaternion::DualQuaternion;
use posekit_rigid::transform::Transform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 64;

fn random_vector(rng: &mut StdRng, range: f64) -> Vector3<f64> {
    Vector3::new(
        rng.random_range(-range..range),
        rng.random_range(-range..range),
        rng.random_range(-range..range),
    )
}

fn random_rigid_transform(rng: &mut StdRng) -> Transform<f64> {
    let axis = loop {
        let axis = random_vector(rng, 1.0);
        if axis.norm() > 0.1 {
            break axis;
        }
    };
    Transform::new(
        random_vector(rng, 10.0),
        Quaternion::from_axis_angle(&axis, rng.random_range(-3.0..3.0)),
        Vector3::new(1.0, 1.0, 1.0),
    )
}

fn assert_near(actual: &Vector3<f64>, expected: &Vector3<f64>) {
    assert!(
        (*actual - *expected).norm() < 1e-9,
        "{actual} is not close to {expected}"
    );
}

#[test]
fn dual_quaternion_round_trip_preserves_rigid_transform() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let transform = random_rigid_transform(&mut rng);

        let back = DualQuaternion::from_transform(&transform).to_transform();

        assert_near(&back.position, &transform.position);
        assert!(back.rotation.same_orientation(&transform.rotation));
    }
}

#[test]
fn dual_quaternion_moves_points_like_transform() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..SAMPLES {
        let transform = random_rigid_transform(&mut rng);
        let point = random_vector(&mut rng, 5.0);

        let moved = DualQuaternion::from_transform(&transform).transform_point(&point);

        assert_near(&moved, &transform.transform_point(&point));
    }
}

#[test]
fn dual_quaternion_composition_matches_transform_combine() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..SAMPLES {
        let parent = random_rigid_transform(&mut rng);
        let child = random_rigid_transform(&mut rng);
        let point = random_vector(&mut rng, 5.0);

        let composed = DualQuaternion::from(parent) * DualQuaternion::from(child);

        assert_near(
            &composed.transform_point(&point),
            &parent.combine(&child).transform_point(&point),
        );
    }
}

#[test]
fn transform_inverse_round_trip_with_uniform_scale() {
    let mut rng = StdRng::seed_from_u64(14);
    for _ in 0..SAMPLES {
        let scale = rng.random_range(0.5..3.0);
        let transform = Transform {
            scale: Vector3::new(scale, scale, scale),
            ..random_rigid_transform(&mut rng)
        };
        let point = random_vector(&mut rng, 5.0);

        let round_trip = transform
            .inverse()
            .transform_point(&transform.transform_point(&point));

        assert_near(&round_trip, &point);
    }
}
