//! Algebraic properties of `Vector` checked over seeded random inputs
//!
//! Covers negation, commutativity, anti-commutativity and orthogonality of the
//! cross product, normalization, and the zero-vector policy shared by
//! `angle_between` and `normalize`.
//!
//! Run tests with: `cargo test --test vector_properties`

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ctor::ctor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;
use vectorial_core::{PiConvention, Vector, VectorError};

const SAMPLES: usize = 500;

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_vector(rng: &mut StdRng) -> Vector {
    Vector::new(
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
    )
}

fn sample_pairs(seed: u64) -> Vec<(Vector, Vector)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES)
        .map(|_| (random_vector(&mut rng), random_vector(&mut rng)))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: ARITHMETIC
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_double_negation_is_identity() {
    for (a, _) in sample_pairs(1) {
        assert_eq!(-(-a), a);
    }
}

#[test]
fn test_addition_commutes() {
    for (a, b) in sample_pairs(2) {
        assert_eq!(a + b, b + a);
        assert_eq!(Vector::sum(a, b), Vector::sum(b, a));
    }
}

#[test]
fn test_dot_product_commutes() {
    for (a, b) in sample_pairs(3) {
        assert_eq!(Vector::dot_product(a, b), Vector::dot_product(b, a));
    }
}

#[test]
fn test_subtraction_matches_negated_addition() {
    for (a, b) in sample_pairs(4) {
        assert_eq!(a - b, a + (-b));
        assert_eq!(a - a, Vector::zeros());
    }
}

#[test]
fn test_concrete_sum() {
    let v = Vector::new(1.0, 2.0, 3.0) + Vector::new(4.0, 5.0, 6.0);
    assert_eq!(v, Vector::new(5.0, 7.0, 9.0));
    assert_relative_eq!(v.magnitude(), 155.0_f64.sqrt());
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: CROSS PRODUCT
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_cross_product_anti_commutes() {
    for (a, b) in sample_pairs(5) {
        assert_eq!(Vector::cross_product(a, b), -Vector::cross_product(b, a));
    }
}

#[test]
fn test_cross_product_is_orthogonal_to_operands() {
    for (a, b) in sample_pairs(6) {
        let c = a * b;
        // Scale the tolerance by the size of the terms being cancelled
        let scale = a.magnitude() * a.magnitude() * b.magnitude();
        assert!(
            Vector::dot_product(a, c).abs() <= 1e-9 * scale,
            "a·(a×b) = {} for a={a}, b={b}",
            Vector::dot_product(a, c)
        );
        assert!(
            Vector::dot_product(b, c).abs() <= 1e-9 * scale,
            "b·(a×b) = {} for a={a}, b={b}",
            Vector::dot_product(b, c)
        );
    }
}

#[test]
fn test_unit_axes_cross_product() {
    let x = Vector::new(1.0, 0.0, 0.0);
    let y = Vector::new(0.0, 1.0, 0.0);
    let z = Vector::new(0.0, 0.0, 1.0);
    assert_eq!(Vector::cross_product(x, y), z);
    assert_eq!(Vector::cross_product(y, z), x);
    assert_eq!(Vector::cross_product(z, x), y);
    assert_eq!(Vector::dot_product(x, y), 0.0);
}

#[test]
fn test_cross_product_magnitude_matches_sine() {
    for (a, b) in sample_pairs(7) {
        let theta = Vector::angle_between_with(a, b, PiConvention::Precise)
            .to_radians_with(PiConvention::Precise);
        let expected = a.magnitude() * b.magnitude() * theta.sin();
        assert_relative_eq!(
            (a * b).magnitude(),
            expected,
            max_relative = 1e-6,
            epsilon = 1e-6
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: NORMALIZATION AND ANGLES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_normalize_gives_unit_magnitude() {
    for (mut a, _) in sample_pairs(8) {
        let direction = a;
        a.normalize();
        assert_abs_diff_eq!(a.magnitude(), 1.0, epsilon = 1e-12);
        // Same direction as before
        assert_abs_diff_eq!(
            Vector::angle_between_with(a, direction, PiConvention::Precise).value(),
            0.0,
            epsilon = 1e-5
        );
    }
}

#[test]
fn test_angle_with_itself_is_zero() {
    for (a, _) in sample_pairs(9) {
        assert_eq!(Vector::angle_between(a, a), 0.0, "a = {a}");
        assert_eq!(
            Vector::angle_between_with(a, a, PiConvention::Precise),
            0.0,
            "a = {a}"
        );
    }
    let x = Vector::new(2.0, 0.0, 0.0);
    assert_eq!(Vector::angle_between(x, x), 0.0);
}

#[test]
fn test_angle_is_symmetric_and_bounded() {
    for (a, b) in sample_pairs(10) {
        let ab = Vector::angle_between_with(a, b, PiConvention::Precise);
        let ba = Vector::angle_between_with(b, a, PiConvention::Precise);
        assert_eq!(ab, ba);
        assert!((0.0..=180.0).contains(&ab.value()), "angle out of range: {ab}");
    }
}

#[test]
fn test_right_angle_between_axes() {
    let angle = Vector::angle_between(Vector::new(1.0, 0.0, 0.0), Vector::new(0.0, 1.0, 0.0));
    assert_abs_diff_eq!(angle.value(), 90.0, epsilon = 1e-4);
}

#[test]
fn test_zero_vector_policy_is_uniform() {
    let zero = Vector::zeros();
    let a = Vector::new(-3.0, 0.5, 7.0);

    assert_eq!(Vector::angle_between(a, zero), 0.0);
    assert_eq!(Vector::angle_between(zero, a), 0.0);
    assert_eq!(Vector::angle_between(zero, zero), 0.0);

    let mut z = zero;
    z.normalize();
    assert_eq!(z, zero);

    assert_eq!(
        Vector::try_angle_between(zero, a),
        Err(VectorError::ZeroMagnitude {
            operation: "angle_between"
        })
    );
    assert_eq!(
        z.try_normalize(),
        Err(VectorError::ZeroMagnitude {
            operation: "normalize"
        })
    );
}
