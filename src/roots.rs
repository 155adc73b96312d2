//! Polynomial root helpers using `tinyvec::ArrayVec`.
//!
//! Available functions:
//! - `solve_quadratic()`
use super::*;

/// Real roots of `a*t^2 + b*t + c = 0` that lie in the closed interval `[0, 1]`.
///
/// The roots are returned in the order `(-b + sqrt(disc)) / 2a`, `(-b - sqrt(disc)) / 2a`
/// (filtered, not sorted). With `a == 0` the equation degenerates to a linear one;
/// with `a == b == 0` there is either no solution or every t is one, both are
/// reported as no roots.
pub fn solve_quadratic<F>(a: F, b: F, c: F) -> ArrayVec<[F; 2]>
where
    F: Float + Default,
{
    let mut result = ArrayVec::new();
    let in_unit_interval = |t: F| t >= F::zero() && t <= F::one();

    if a == F::zero() {
        if b != F::zero() {
            let root = -c / b;
            if in_unit_interval(root) {
                result.push(root);
            }
        }
        return result;
    }

    let two = F::one() + F::one();
    let four = two + two;
    let discriminant = b * b - four * a * c;
    if discriminant < F::zero() {
        return result;
    }

    let disc_root = discriminant.sqrt();
    for root in [(-b + disc_root) / (two * a), (-b - disc_root) / (two * a)] {
        if in_unit_interval(root) {
            result.push(root);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_constant_has_no_roots() {
        assert!(solve_quadratic(0f64, 0f64, 5f64).is_empty());
        assert!(solve_quadratic(0f64, 0f64, 0f64).is_empty());
    }

    #[test]
    fn linear_root() {
        let roots = solve_quadratic(0f64, 2f64, -1f64);
        assert_eq!(roots.as_slice(), &[0.5]);
    }

    #[test]
    fn linear_root_outside_interval_is_dropped() {
        assert!(solve_quadratic(0f64, 1f64, 1f64).is_empty());
        assert!(solve_quadratic(0f64, 1f64, -3f64).is_empty());
    }

    #[test]
    fn quadratic_roots_are_filtered() {
        // (t - 1)(t - 2)
        let roots = solve_quadratic(1f64, -3f64, 2f64);
        assert_eq!(roots.as_slice(), &[1.0]);
    }

    #[test]
    fn quadratic_roots_keep_formula_order() {
        // 4(t - 0.25)(t - 0.75) = 4t^2 - 4t + 0.75
        let roots = solve_quadratic(4f64, -4f64, 0.75f64);
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 0.75).abs() < EPSILON);
        assert!((roots[1] - 0.25).abs() < EPSILON);
    }

    #[test]
    fn double_root() {
        // (t - 0.5)^2
        let roots = solve_quadratic(1f64, -1f64, 0.25f64);
        assert_eq!(roots.len(), 2);
        assert!(roots.iter().all(|r| (r - 0.5).abs() < EPSILON));
    }

    #[test]
    fn negative_discriminant() {
        assert!(solve_quadratic(1f64, 0f64, 1f64).is_empty());
    }

    #[test]
    fn generic_over_f32() {
        let roots = solve_quadratic(0f32, 4f32, -1f32);
        assert_eq!(roots.as_slice(), &[0.25f32]);
    }
}
