//! Organic blobs: a circle with seeded random radii, smoothed with cubic segments.

use core::f64::consts::PI;

use tracing::debug;

use super::*;

/// One sample on the blob outline with its two tangential handles.
#[derive(Copy, Clone, Debug)]
struct Knot {
    point: Point2<NativeFloat>,
    /// handle pointing back along the outline
    ctrl_in: Point2<NativeFloat>,
    /// handle pointing forward along the outline
    ctrl_out: Point2<NativeFloat>,
    radius: NativeFloat,
}

impl Knot {
    fn new(angle: NativeFloat, radius: NativeFloat, kappa: NativeFloat) -> Self {
        let point = Point2::polar(radius, angle);
        // unit tangent in the direction of increasing angle
        let tangent = Point2::new(-angle.sin(), angle.cos());
        let handle = tangent * (kappa * radius);
        Knot {
            point,
            ctrl_in: point - handle,
            ctrl_out: point + handle,
            radius,
        }
    }
}

/// Ratio of handle length to radius for smoothing `point_count` arcs of a circle.
pub fn kappa(point_count: usize) -> NativeFloat {
    4.0 / 3.0 * (PI / (2.0 * point_count as NativeFloat)).tan()
}

/// Generate a closed blob that exactly fills `[0, width] x [0, height]`.
///
/// `strength` in `[0, 10]` sets how far radii may shrink below the base radius
/// (0 gives a regular rounded polygon, 10 lets radii drop to zero). The same
/// `seed` always gives the same outline.
pub fn generate(
    width: NativeFloat,
    height: NativeFloat,
    point_count: usize,
    strength: NativeFloat,
    seed: u32,
) -> Path {
    let mut random = SeededRandom::new(seed.wrapping_mul(500));
    let radius = width.min(height) / 3.0;
    let angle_step = 2.0 * PI / point_count as NativeFloat;
    let kappa = kappa(point_count);
    let floor = radius * (1.0 - strength / 10.0);

    let mut knots: Vec<Knot> = Vec::with_capacity(point_count + 1);
    for i in 0..=point_count {
        // the closing knot repeats the first radius so the outline joins smoothly
        let knot_radius = match knots.first() {
            Some(first) if i == point_count => first.radius,
            _ => random.range(floor, radius),
        };
        knots.push(Knot::new(angle_step * i as NativeFloat, knot_radius, kappa));
    }

    let start = knots.first().map(|k| k.point).unwrap_or_default();
    let mut outline = Path::with_capacity(start, point_count);
    for pair in knots.windows(2) {
        outline.cubic_to(pair[0].ctrl_out, pair[1].ctrl_in, pair[1].point);
    }
    outline.close();

    let bounds = outline.bounds();
    let fit = bounds.fit(width, height, Fit::Stretch);
    debug!(
        point_count,
        strength,
        seed,
        ?bounds,
        scale_x = fit.scale.x,
        scale_y = fit.scale.y,
        "blob fitted to curve bounds"
    );
    outline.transform(&fit)
}

/// Parameters of a blob.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlobParams {
    pub point_count: usize,
    pub strength: NativeFloat,
    pub seed: u32,
}

impl Default for BlobParams {
    fn default() -> Self {
        BlobParams {
            point_count: 5,
            strength: 5.0,
            seed: 9,
        }
    }
}

impl BlobParams {
    pub fn path(&self, width: NativeFloat, height: NativeFloat) -> Path {
        generate(width, height, self.point_count, self.strength, self.seed)
    }

    /// Reports the combinations `generate` does not guard against.
    pub fn validate(&self, width: NativeFloat, height: NativeFloat) -> Result<(), ShapeError> {
        ShapeError::check_dimensions(width, height)?;
        ShapeError::check_count("point_count", self.point_count, 3)?;
        ShapeError::check_range("strength", self.strength, 0.0, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_fills(path: &Path, width: f64, height: f64) {
        let bounds = path.bounds();
        let tol = 1e-9 * width.max(height);
        assert!(bounds.min_x.abs() < tol, "min_x {}", bounds.min_x);
        assert!(bounds.min_y.abs() < tol, "min_y {}", bounds.min_y);
        assert!((bounds.max_x - width).abs() < tol, "max_x {}", bounds.max_x);
        assert!((bounds.max_y - height).abs() < tol, "max_y {}", bounds.max_y);
    }

    #[test]
    fn kappa_for_four_points_is_circle_constant() {
        assert!((kappa(4) - 0.5522847498307936).abs() < EPSILON);
    }

    #[test]
    fn structure() {
        let path = generate(200.0, 120.0, 6, 5.0, 3);
        assert!(path.is_closed());
        assert_eq!(path.len(), 6);
        let d = path.to_string();
        assert!(d.starts_with("M "));
        assert_eq!(d.matches('C').count(), 6);
        assert!(d.ends_with(" Z"));
    }

    #[test]
    fn contour_returns_to_start() {
        let path = generate(300.0, 300.0, 7, 8.0, 42);
        let last = path.segments().last().map(|s| s.end());
        let (Some(last), Some(start)) = (last, path.start()) else {
            panic!("empty blob path");
        };
        assert!(last.distance(start) < 1e-9);
    }

    #[test]
    fn fills_target_rectangle() {
        for (w, h, n, s, seed) in [
            (200.0, 200.0, 5, 5.0, 9),
            (640.0, 120.0, 3, 10.0, 1),
            (80.0, 300.0, 12, 2.5, 1234),
            (50.0, 50.0, 4, 0.0, 0),
        ] {
            assert_fills(&generate(w, h, n, s, seed), w, h);
        }
    }

    /// Compare the `M` and first `C` of `path` with known coordinates.
    fn assert_leading_commands(path: &Path, expected: [(f64, f64); 4]) {
        let mut commands = path.commands();
        let (Some(PathCommand::MoveTo(start)), Some(PathCommand::CubicTo(ctrl1, ctrl2, end))) =
            (commands.next(), commands.next())
        else {
            panic!("blob must start with M followed by C");
        };
        for (got, (x, y)) in [*start, *ctrl1, *ctrl2, *end].into_iter().zip(expected) {
            assert!(got.distance(Point2::new(x, y)) < 1e-9, "{got:?} != ({x}, {y})");
        }
    }

    #[test]
    fn reference_outline() {
        assert_leading_commands(
            &generate(200.0, 120.0, 5, 5.0, 9),
            [
                (200.0, 60.9881284384584),
                (200.0, 96.85923546861349),
                (140.12938912471296, 110.38427329319939),
                (102.1057898071553, 118.47656027134263),
            ],
        );
    }

    #[test]
    fn reference_outline_with_wrapping_seed() {
        // 123456789 * 500 does not fit in 32 bits, the seed wraps around
        assert_leading_commands(
            &generate(333.0, 77.0, 11, 8.5, 123456789),
            [
                (265.19732493670125, 41.79466083750443),
                (265.19732493670125, 46.29231387046424),
                (349.067928485399, 60.22172581045086),
                (330.2479754511859, 68.05518340479684),
            ],
        );
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            generate(200.0, 150.0, 5, 7.0, 11).to_string(),
            generate(200.0, 150.0, 5, 7.0, 11).to_string()
        );
    }

    #[test]
    fn seed_changes_outline() {
        assert_ne!(
            generate(200.0, 200.0, 5, 5.0, 1).to_string(),
            generate(200.0, 200.0, 5, 5.0, 2).to_string()
        );
    }

    #[test]
    fn zero_strength_ignores_seed() {
        let a = generate(200.0, 200.0, 5, 0.0, 1);
        let b = generate(200.0, 200.0, 5, 0.0, 99);
        for (sa, sb) in a.segments().zip(b.segments()) {
            assert!(sa.end().distance(sb.end()) < 1e-9);
        }
    }

    #[test]
    fn params_validate() {
        assert!(BlobParams::default().validate(100.0, 100.0).is_ok());
        let params = BlobParams {
            point_count: 2,
            ..BlobParams::default()
        };
        assert!(matches!(
            params.validate(100.0, 100.0),
            Err(ShapeError::TooFewPoints { got: 2, .. })
        ));
        let params = BlobParams {
            strength: 11.0,
            ..BlobParams::default()
        };
        assert!(params.validate(100.0, 100.0).is_err());
        assert!(BlobParams::default().validate(0.0, 100.0).is_err());
    }

    #[test]
    fn params_path_matches_generate() {
        let params = BlobParams::default();
        assert_eq!(params.path(120.0, 90.0), generate(120.0, 90.0, 5, 5.0, 9));
    }
}
