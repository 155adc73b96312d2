//! Rounded rectangles with smoothed, curvature-continuous corners.
//!
//! Each corner is a circular arc of `90° * (1 - smoothing)` framed by two cubic
//! transitions that ease the straight edge into the arc. With `smoothing = 0` the
//! corner is a plain quarter circle, with `smoothing = 1` there is no arc left and
//! the two transitions meet at the diagonal. The whole corner spans exactly `p`
//! along both edges, and `p` never exceeds half the shorter side, so no bounding
//! box correction is needed.
//!
//! Corner radii are given in CSS order: top left, top right, bottom right,
//! bottom left. The outline is drawn clockwise starting with the top right corner.

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

use tracing::{debug, trace};

use super::*;

/// Geometry of one smoothed corner, see [`corner_params`].
///
/// Along the incoming edge the corner consists of a transition cubic spanning
/// `a + b + c` (rising by `d`), the arc covering `arc_section_length` on both axes,
/// and the mirrored transition. `a + b + c + d + arc_section_length == p`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CornerParams {
    pub a: NativeFloat,
    pub b: NativeFloat,
    pub c: NativeFloat,
    pub d: NativeFloat,
    /// Distance from the corner of the rectangle at which the curve starts.
    pub p: NativeFloat,
    pub arc_section_length: NativeFloat,
    /// Radius after clamping to the available space.
    pub corner_radius: NativeFloat,
    /// Smoothing after clamping to the available space.
    pub smoothing: NativeFloat,
}

impl CornerParams {
    /// Angle swept by the circular part, in radians.
    pub fn arc_angle(&self) -> NativeFloat {
        FRAC_PI_2 * (1.0 - self.smoothing)
    }

    /// Angle between the incoming edge and the tangent where the arc begins.
    pub fn transition_angle(&self) -> NativeFloat {
        FRAC_PI_4 * self.smoothing
    }
}

/// Derive the corner geometry for `corner_radius` and `smoothing`, given that a
/// corner may use at most `max_radius` of each adjacent edge.
pub fn corner_params(
    corner_radius: NativeFloat,
    smoothing: NativeFloat,
    max_radius: NativeFloat,
) -> CornerParams {
    let radius = corner_radius.min(max_radius);
    // a smoothed corner needs (1 + smoothing) * radius of edge
    let smoothing = smoothing.min(max_radius / radius - 1.0);
    let p = ((1.0 + smoothing) * radius).min(max_radius);

    let arc_angle = FRAC_PI_2 * (1.0 - smoothing);
    let arc_section_length = (arc_angle / 2.0).sin() * radius * SQRT_2;
    let alpha = (FRAC_PI_2 - arc_angle) / 2.0;
    let p3_to_p4 = radius * (alpha / 2.0).tan();
    let beta = FRAC_PI_4 * smoothing;
    let c = p3_to_p4 * beta.cos();
    let d = c * beta.tan();
    let b = (p - arc_section_length - c - d) / 3.0;
    let a = 2.0 * b;

    if radius < corner_radius {
        debug!(
            requested = corner_radius,
            radius, max_radius, "squircle corner radius clamped"
        );
    }

    CornerParams {
        a,
        b,
        c,
        d,
        p,
        arc_section_length,
        corner_radius: radius,
        smoothing,
    }
}

/// The four corners of a rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Local frame of the corner when drawn clockwise: `u` runs along the
    /// incoming edge, `v` along the outgoing one.
    fn frame(&self) -> (Point2<NativeFloat>, Point2<NativeFloat>) {
        match self {
            Corner::TopRight => (Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)),
            Corner::BottomRight => (Point2::new(0.0, 1.0), Point2::new(-1.0, 0.0)),
            Corner::BottomLeft => (Point2::new(-1.0, 0.0), Point2::new(0.0, -1.0)),
            Corner::TopLeft => (Point2::new(0.0, -1.0), Point2::new(1.0, 0.0)),
        }
    }
}

/// Append one corner starting at `from`, returns the point where it ends.
fn draw_corner(
    path: &mut Path,
    from: Point2<NativeFloat>,
    corner: Corner,
    params: &CornerParams,
) -> Point2<NativeFloat> {
    let (u, v) = corner.frame();
    let CornerParams { a, b, c, d, .. } = *params;

    if params.corner_radius == 0.0 {
        let to = from + u * d;
        path.line_to(to);
        return to;
    }

    let local = |origin: Point2<NativeFloat>, along: NativeFloat, across: NativeFloat| {
        origin + u * along + v * across
    };

    // edge into arc
    let arc_start = local(from, a + b + c, d);
    path.cubic_to(local(from, a, 0.0), local(from, a + b, 0.0), arc_start);

    // the arc as a single cubic, handles tangent to the circle
    let s = params.arc_section_length;
    let arc_end = local(arc_start, s, s);
    let handle = 4.0 / 3.0 * (params.arc_angle() / 4.0).tan() * params.corner_radius;
    let beta = params.transition_angle();
    let tangent_in = u * beta.cos() + v * beta.sin();
    let tangent_out = u * beta.sin() + v * beta.cos();
    path.cubic_to(
        arc_start + tangent_in * handle,
        arc_end - tangent_out * handle,
        arc_end,
    );

    // arc into edge
    let to = local(arc_end, d, a + b + c);
    path.cubic_to(local(arc_end, d, c), local(arc_end, d, b + c), to);
    to
}

/// Generate a squircle outline for a `width` x `height` box.
///
/// `adjustment` shrinks the box by that amount on every side and `offset`
/// translates the result; together they produce the inset outline of a border.
pub fn generate(
    width: NativeFloat,
    height: NativeFloat,
    radii: [NativeFloat; 4],
    smoothing: NativeFloat,
    adjustment: NativeFloat,
    offset: Point2<NativeFloat>,
) -> Path {
    let adjusted_width = width - 2.0 * adjustment;
    let adjusted_height = height - 2.0 * adjustment;
    let max_radius = adjusted_width.min(adjusted_height) / 2.0;

    let [top_left, top_right, bottom_right, bottom_left] =
        radii.map(|radius| corner_params(radius, smoothing, max_radius));
    trace!(?top_left, ?top_right, ?bottom_right, ?bottom_left, "squircle corners");

    let at = |x: NativeFloat, y: NativeFloat| Point2::new(x, y) + offset;

    let start = at(adjusted_width - top_right.p, 0.0);
    let mut path = Path::with_capacity(start, 15);
    draw_corner(&mut path, start, Corner::TopRight, &top_right);

    let right = at(adjusted_width, adjusted_height - bottom_right.p);
    path.line_to(right);
    draw_corner(&mut path, right, Corner::BottomRight, &bottom_right);

    let bottom = at(bottom_left.p, adjusted_height);
    path.line_to(bottom);
    draw_corner(&mut path, bottom, Corner::BottomLeft, &bottom_left);

    let left = at(0.0, top_left.p);
    path.line_to(left);
    draw_corner(&mut path, left, Corner::TopLeft, &top_left);

    path.close();
    path
}

/// A squircle border: the outline plus the inset outline that, filled together
/// with the even-odd rule, paint a ring of constant width with matching corners.
#[derive(Clone, Debug, PartialEq)]
pub struct SquircleRing {
    pub outer: Path,
    /// Missing when the border is at least as wide as half the box.
    pub inner: Option<Path>,
}

impl SquircleRing {
    /// Path data of both contours, meant for `fill-rule="evenodd"`.
    pub fn even_odd_d(&self) -> String {
        match &self.inner {
            Some(inner) => format!("{} {}", self.outer, inner),
            None => self.outer.to_string(),
        }
    }
}

/// Build the outer outline and the inset outline for a border of `stroke_width`.
pub fn ring(
    width: NativeFloat,
    height: NativeFloat,
    radii: [NativeFloat; 4],
    smoothing: NativeFloat,
    stroke_width: NativeFloat,
) -> SquircleRing {
    let outer = generate(width, height, radii, smoothing, 0.0, Point2::default());
    let inner = (width > stroke_width * 2.0 && height > stroke_width * 2.0).then(|| {
        generate(
            width,
            height,
            radii.map(|radius| (radius - stroke_width).max(0.0)),
            smoothing,
            stroke_width,
            Point2::new(stroke_width, stroke_width),
        )
    });
    SquircleRing { outer, inner }
}

/// Parse a CSS `border-radius` shorthand such as `"20px"` or `"8px 16px 0 4px"`
/// into radii in CSS order. Missing or unparsable entries repeat the first
/// value, an unparsable first value is 0. Units are ignored.
pub fn parse_border_radius(value: &str) -> [NativeFloat; 4] {
    let values: Vec<Option<NativeFloat>> = value.split_whitespace().map(leading_number).collect();
    let first = values.first().copied().flatten().unwrap_or(0.0);
    let mut radii = [first; 4];
    for (radius, parsed) in radii.iter_mut().zip(values.iter()) {
        if let Some(parsed) = parsed {
            *radius = *parsed;
        }
    }
    radii
}

/// The numeric prefix of a CSS length, e.g. `12.5` for `"12.5px"`.
fn leading_number(token: &str) -> Option<NativeFloat> {
    let is_numeric = |i: usize, ch: char| {
        ch.is_ascii_digit() || ch == '.' || (i == 0 && (ch == '-' || ch == '+'))
    };
    let end = token
        .char_indices()
        .find(|&(i, ch)| !is_numeric(i, ch))
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    token[..end].parse().ok()
}

/// Parameters of a squircle and its optional border.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SquircleParams {
    /// top left, top right, bottom right, bottom left
    pub radii: [NativeFloat; 4],
    pub smoothing: NativeFloat,
    pub stroke_width: NativeFloat,
}

impl Default for SquircleParams {
    fn default() -> Self {
        SquircleParams {
            radii: [20.0; 4],
            smoothing: 0.5,
            stroke_width: 10.0,
        }
    }
}

impl SquircleParams {
    pub fn with_border_radius(mut self, border_radius: &str) -> Self {
        self.radii = parse_border_radius(border_radius);
        self
    }

    pub fn path(&self, width: NativeFloat, height: NativeFloat) -> Path {
        generate(width, height, self.radii, self.smoothing, 0.0, Point2::default())
    }

    pub fn ring(&self, width: NativeFloat, height: NativeFloat) -> SquircleRing {
        ring(width, height, self.radii, self.smoothing, self.stroke_width)
    }

    pub fn validate(&self, width: NativeFloat, height: NativeFloat) -> Result<(), ShapeError> {
        ShapeError::check_dimensions(width, height)?;
        ShapeError::check_range("smoothing", self.smoothing, 0.0, 1.0)?;
        for radius in self.radii {
            ShapeError::check_range("corner radius", radius, 0.0, NativeFloat::INFINITY)?;
        }
        ShapeError::check_range("stroke_width", self.stroke_width, 0.0, NativeFloat::INFINITY)
    }
}
