//! Regular polygons whose edges bend into cubic arcs.

use core::f64::consts::PI;

use tracing::debug;

use super::*;

/// Vertices of a regular polygon on the unit circle, the first one at the top.
pub fn unit_vertices(corner_count: usize) -> Vec<Point2<NativeFloat>> {
    let increment = 2.0 * PI / corner_count as NativeFloat;
    (0..corner_count)
        .map(|i| Point2::polar(1.0, -PI / 2.0 + increment * i as NativeFloat))
        .collect()
}

/// Largest perpendicular handle offset, relative to the circumradius, that keeps
/// adjacent bent edges from crossing for `|bend| <= 1`.
pub fn safe_distance(corner_count: usize) -> NativeFloat {
    0.25 * (2.0 * (PI / corner_count as NativeFloat).cos())
}

/// Generate a bent polygon that exactly fills `[0, width] x [0, height]`.
///
/// `bend` in `[-1, 1]`: positive values bulge the edges outward, negative values
/// pull them in, zero keeps them straight.
pub fn generate(
    width: NativeFloat,
    height: NativeFloat,
    corner_count: usize,
    bend: NativeFloat,
) -> Path {
    generate_with_fit(width, height, corner_count, bend, Fit::Stretch)
}

/// Like [`generate`], with the final bent outline mapped onto the target by `fit`.
pub fn generate_with_fit(
    width: NativeFloat,
    height: NativeFloat,
    corner_count: usize,
    bend: NativeFloat,
    fit: Fit,
) -> Path {
    let unit = unit_vertices(corner_count);

    // first pass: fit the straight polygon uniformly and center it
    let unit_bounds = Bounds::from_points(unit.iter().copied());
    let scale = (width / unit_bounds.width()).min(height / unit_bounds.height());
    let center = Point2::new(width / 2.0, height / 2.0);
    let unit_center = unit_bounds.center();
    let vertices: Vec<Point2<NativeFloat>> = unit
        .iter()
        .map(|&v| (v - unit_center) * scale + center)
        .collect();

    let offset = -bend * safe_distance(corner_count) * scale;
    let start = vertices.first().copied().unwrap_or_default();
    let mut outline = Path::with_capacity(start, corner_count);
    for i in 0..corner_count {
        let from = vertices[i];
        let to = vertices[(i + 1) % corner_count];
        let edge = to - from;
        let normal = edge.normalize().perpendicular() * offset;
        outline.cubic_to(from + edge * 0.25 + normal, to - edge * 0.25 + normal, to);
    }
    outline.close();

    // second pass: bending moved the true extent, fit the curves themselves
    let bounds = outline.bounds();
    let transform = bounds.fit(width, height, fit);
    debug!(
        corner_count,
        bend,
        ?fit,
        ?bounds,
        scale_x = transform.scale.x,
        scale_y = transform.scale.y,
        "polygon fitted to bent bounds"
    );
    outline.transform(&transform)
}

/// Parameters of a bent polygon.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolygonParams {
    pub corner_count: usize,
    pub bend: NativeFloat,
    pub fit: Fit,
}

impl Default for PolygonParams {
    fn default() -> Self {
        PolygonParams {
            corner_count: 5,
            bend: 0.0,
            fit: Fit::Stretch,
        }
    }
}

impl PolygonParams {
    pub fn path(&self, width: NativeFloat, height: NativeFloat) -> Path {
        generate_with_fit(width, height, self.corner_count, self.bend, self.fit)
    }

    pub fn validate(&self, width: NativeFloat, height: NativeFloat) -> Result<(), ShapeError> {
        ShapeError::check_dimensions(width, height)?;
        ShapeError::check_count("corner_count", self.corner_count, 3)?;
        ShapeError::check_range("bend", self.bend, -1.0, 1.0)
    }
}
