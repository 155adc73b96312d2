//! Superformula curves sampled into a dense polyline.
//!
//! `r(θ) = (|cos(mθ/4)|^n2 + |sin(mθ/4) / ratio|^n3)^(-1/n1)`
//!
//! Degenerate exponents (`n1 = 0`, `ratio = 0`) are not guarded and show up as
//! non-finite coordinates in the path.

use core::f64::consts::TAU;

use tracing::debug;

use super::*;

/// Angular steps over a full turn. The polyline has one more point, closing at 2π.
pub const SEGMENTS: usize = 7560;

/// Radius of the superformula at `angle`.
pub fn radius(
    angle: NativeFloat,
    m: NativeFloat,
    n1: NativeFloat,
    n2: NativeFloat,
    n3: NativeFloat,
    ratio: NativeFloat,
) -> NativeFloat {
    let phase = m * angle / 4.0;
    (phase.cos().abs().powf(n2) + (phase.sin() / ratio).abs().powf(n3)).powf(-1.0 / n1)
}

/// Generate a supershape centered in `[0, width] x [0, height]`, scaled uniformly
/// until it touches two opposite edges.
pub fn generate(
    width: NativeFloat,
    height: NativeFloat,
    m: NativeFloat,
    n1: NativeFloat,
    n2: NativeFloat,
    n3: NativeFloat,
    ratio: NativeFloat,
) -> Path {
    generate_with_fit(width, height, m, n1, n2, n3, ratio, Fit::Contain)
}

/// Like [`generate`], with the sampled outline mapped onto the target by `fit`.
#[allow(clippy::too_many_arguments)]
pub fn generate_with_fit(
    width: NativeFloat,
    height: NativeFloat,
    m: NativeFloat,
    n1: NativeFloat,
    n2: NativeFloat,
    n3: NativeFloat,
    ratio: NativeFloat,
    fit: Fit,
) -> Path {
    let point_at = |i: usize| {
        let angle = i as NativeFloat / SEGMENTS as NativeFloat * TAU;
        Point2::polar(radius(angle, m, n1, n2, n3, ratio), angle)
    };
    let mut outline = Path::with_capacity(point_at(0), SEGMENTS);
    for i in 1..=SEGMENTS {
        outline.line_to(point_at(i));
    }
    outline.close();

    // a polyline never leaves its vertices' hull, point bounds are exact
    let bounds = outline.bounds();
    let transform = bounds.fit(width, height, fit);
    debug!(m, n1, n2, n3, ratio, ?fit, ?bounds, "superellipse fitted to sample bounds");
    outline.transform(&transform)
}

/// Parameters of a supershape. The default is a spiky, slightly oval star.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SuperellipseParams {
    pub m: NativeFloat,
    pub n1: NativeFloat,
    pub n2: NativeFloat,
    pub n3: NativeFloat,
    pub ratio: NativeFloat,
    pub fit: Fit,
}

impl Default for SuperellipseParams {
    fn default() -> Self {
        SuperellipseParams {
            m: 47.0,
            n1: 15.0,
            n2: 22.0,
            n3: 28.0,
            ratio: 1.3,
            fit: Fit::Contain,
        }
    }
}

impl SuperellipseParams {
    /// Plain ellipse-like superellipse `|x|^n + |y|^n = 1`.
    pub fn superellipse(n: NativeFloat) -> Self {
        SuperellipseParams {
            m: 4.0,
            n1: n,
            n2: n,
            n3: n,
            ratio: 1.0,
            fit: Fit::Stretch,
        }
    }

    pub fn path(&self, width: NativeFloat, height: NativeFloat) -> Path {
        generate_with_fit(
            width, height, self.m, self.n1, self.n2, self.n3, self.ratio, self.fit,
        )
    }

    /// Only rejects what makes the formula itself undefined; any other real
    /// exponent is a valid supershape.
    pub fn validate(&self, width: NativeFloat, height: NativeFloat) -> Result<(), ShapeError> {
        ShapeError::check_dimensions(width, height)?;
        ShapeError::check_non_zero("n1", self.n1)?;
        ShapeError::check_non_zero("ratio", self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_radius_is_one() {
        for i in 0..100 {
            let angle = i as f64 / 100.0 * TAU;
            assert!((radius(angle, 4.0, 2.0, 2.0, 2.0, 1.0) - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn structure() {
        let path = SuperellipseParams::default().path(300.0, 200.0);
        assert!(path.is_closed());
        assert_eq!(path.len(), SEGMENTS);
        let d = path.to_string();
        assert!(d.starts_with("M "));
        assert_eq!(d.matches('L').count(), SEGMENTS);
        assert!(!d.contains('C'));
        assert!(d.ends_with(" Z"));
    }

    #[test]
    fn polyline_closes_at_full_turn() {
        let path = generate(200.0, 200.0, 6.0, 1.0, 1.0, 1.0, 1.0);
        let last = path.segments().last().map(|s| s.end());
        let (Some(last), Some(start)) = (last, path.start()) else {
            panic!("empty superellipse path");
        };
        assert!(last.distance(start) < 1e-9);
    }

    #[test]
    fn contain_centers() {
        // circle on a wide target: diameter equals the height, centered horizontally
        let bounds = generate(300.0, 100.0, 4.0, 2.0, 2.0, 2.0, 1.0).bounds();
        assert!((bounds.height() - 100.0).abs() < 1e-9);
        assert!((bounds.width() - 100.0).abs() < 1e-6);
        assert!((bounds.center().x - 150.0).abs() < 1e-6);
    }

    #[test]
    fn stretch_fills() {
        let bounds = SuperellipseParams::superellipse(4.0).path(300.0, 100.0).bounds();
        assert!(bounds.min_x.abs() < 1e-9 && (bounds.max_x - 300.0).abs() < 1e-9);
        assert!(bounds.min_y.abs() < 1e-9 && (bounds.max_y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn deterministic() {
        let params = SuperellipseParams::default();
        assert_eq!(params.path(64.0, 64.0), params.path(64.0, 64.0));
    }

    #[test]
    fn degenerate_exponent_is_not_finite() {
        // cos^4 + sin^4 < 1 off the axes, raised to -1/0 the radius is infinite
        let path = generate(100.0, 100.0, 4.0, 0.0, 4.0, 4.0, 1.0);
        let bounds = path.bounds();
        assert!(!(bounds.min_x.is_finite() && bounds.max_x.is_finite()));
        let params = SuperellipseParams {
            n1: 0.0,
            ..SuperellipseParams::default()
        };
        assert_eq!(
            params.validate(100.0, 100.0),
            Err(ShapeError::Zero { name: "n1" })
        );
        let params = SuperellipseParams {
            ratio: 0.0,
            ..SuperellipseParams::default()
        };
        assert_eq!(
            params.validate(100.0, 100.0),
            Err(ShapeError::Zero { name: "ratio" })
        );
    }
}
