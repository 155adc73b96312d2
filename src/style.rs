//! Fill and shadow definitions shared by every shape.
//!
//! These only produce SVG `<defs>` markup and geometry; attaching them to an
//! element is left to the host.

use core::f64::consts::FRAC_PI_2;
use core::fmt;

use tracing::trace;

use super::*;

/// Linear gradient across the target box, rotated by `angle` degrees around
/// its center. At 0° the gradient runs from bottom to top.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearGradient {
    pub angle: NativeFloat,
    pub colors: Vec<Rgba>,
}

impl LinearGradient {
    pub fn new(angle: NativeFloat, colors: Vec<Rgba>) -> Self {
        LinearGradient { angle, colors }
    }

    /// Start and end of the gradient line in user space. Both lie on the circle
    /// through the corners of the box, so every angle covers the whole shape.
    pub fn endpoints(
        &self,
        width: NativeFloat,
        height: NativeFloat,
    ) -> (Point2<NativeFloat>, Point2<NativeFloat>) {
        let center = Point2::new(width / 2.0, height / 2.0);
        let radius = width.hypot(height) / 2.0;
        let angle = self.angle.to_radians();
        (
            center + Point2::polar(radius, angle + FRAC_PI_2),
            center + Point2::polar(radius, angle - FRAC_PI_2),
        )
    }

    /// Stop positions in `[0, 1]`, evenly spread. A lone color sits at 0.
    pub fn stop_offsets(&self) -> Vec<NativeFloat> {
        let last = self.colors.len().saturating_sub(1).max(1) as NativeFloat;
        (0..self.colors.len())
            .map(|i| i as NativeFloat / last)
            .collect()
    }

    /// `<linearGradient>` element in user space units for a `width` x `height` box.
    pub fn to_svg(&self, id: &str, width: NativeFloat, height: NativeFloat) -> String {
        let (start, end) = self.endpoints(width, height);
        trace!(id, angle = self.angle, ?start, ?end, "gradient endpoints");
        let mut out = format!(
            r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
            start.x, start.y, end.x, end.y
        );
        for (color, offset) in self.colors.iter().zip(self.stop_offsets()) {
            out.push_str(&format!(
                r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                offset * 100.0,
                color.rgb_string(),
                color.a
            ));
        }
        out.push_str("</linearGradient>");
        out
    }
}

/// One box shadow. `inset` shadows are drawn inside the outline, the others
/// behind it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Shadow {
    pub dx: NativeFloat,
    pub dy: NativeFloat,
    pub blur: NativeFloat,
    pub color: Rgba,
    pub inset: bool,
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow {
            dx: 0.0,
            dy: 0.0,
            blur: 0.0,
            color: Rgba::BLACK,
            inset: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShadowKind {
    Drop,
    Inset,
}

/// An SVG `<filter>` rendering a stack of shadows of the same kind.
///
/// Each shadow offsets and blurs the source alpha, inset shadows additionally
/// cut that blur out of the source, then the result is flooded with the shadow
/// color. The first shadow in the list ends up on top.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowFilter {
    id: String,
    kind: ShadowKind,
    shadows: Vec<Shadow>,
}

impl ShadowFilter {
    /// Filter for `shadows`, or `None` when there is nothing to draw.
    pub fn new(id: &str, kind: ShadowKind, shadows: Vec<Shadow>) -> Option<Self> {
        if shadows.is_empty() {
            return None;
        }
        Some(ShadowFilter {
            id: id.to_owned(),
            kind,
            shadows,
        })
    }

    /// Sort `shadows` into a drop shadow filter and an inset one, keeping order.
    pub fn split(
        id: &str,
        shadows: &[Shadow],
    ) -> (Option<ShadowFilter>, Option<ShadowFilter>) {
        let (inset, drop): (Vec<Shadow>, Vec<Shadow>) = shadows.iter().partition(|s| s.inset);
        trace!(id, drop = drop.len(), inset = inset.len(), "split shadows");
        (
            ShadowFilter::new(id, ShadowKind::Drop, drop),
            ShadowFilter::new(id, ShadowKind::Inset, inset),
        )
    }

    pub fn kind(&self) -> ShadowKind {
        self.kind
    }

    pub fn shadows(&self) -> &[Shadow] {
        &self.shadows
    }

    /// Element id, `outside-shadow-{id}` or `inside-shadow-{id}`.
    pub fn filter_id(&self) -> String {
        match self.kind {
            ShadowKind::Drop => format!("outside-shadow-{}", self.id),
            ShadowKind::Inset => format!("inside-shadow-{}", self.id),
        }
    }

    /// Value for a `filter` attribute.
    pub fn url(&self) -> String {
        format!("url(#{})", self.filter_id())
    }

    /// How far the filter region reaches past the element on every side.
    /// Inset shadows never leave the outline and use the default region.
    pub fn expansion(&self) -> NativeFloat {
        match self.kind {
            ShadowKind::Drop => self.shadows.iter().fold(1.0, |acc: NativeFloat, s| {
                acc.max(s.dx.abs().max(s.dy.abs()) + s.blur)
            }),
            ShadowKind::Inset => 0.0,
        }
    }
}

impl fmt::Display for ShadowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<filter id="{}""#, self.filter_id())?;
        if self.kind == ShadowKind::Drop {
            let e = self.expansion();
            write!(
                f,
                r#" x="-{e}px" y="-{e}px" width="{}px" height="{}px""#,
                2.0 * e,
                2.0 * e
            )?;
        }
        f.write_str(">")?;

        for (i, shadow) in self.shadows.iter().enumerate() {
            // a zero horizontal offset makes some renderers drop the primitive
            let dx = if shadow.dx == 0.0 { 0.001 } else { shadow.dx };
            write!(
                f,
                r#"<feOffset dx="{dx}" dy="{}" in="SourceAlpha" result="offset-{i}"/>"#,
                shadow.dy
            )?;
            write!(
                f,
                r#"<feGaussianBlur stdDeviation="{}" in="offset-{i}" result="blur-{i}"/>"#,
                shadow.blur
            )?;
            let mask = match self.kind {
                ShadowKind::Drop => format!("blur-{i}"),
                ShadowKind::Inset => {
                    write!(
                        f,
                        r#"<feComposite operator="out" in="SourceAlpha" in2="blur-{i}" result="composite-{i}"/>"#
                    )?;
                    format!("composite-{i}")
                }
            };
            write!(
                f,
                r#"<feFlood flood-color="{}" flood-opacity="{}" result="color-{i}"/>"#,
                shadow.color.rgb_string(),
                shadow.color.a
            )?;
            write!(
                f,
                r#"<feComposite operator="in" in="color-{i}" in2="{mask}" result="shadow-{i}"/>"#
            )?;
        }

        f.write_str("<feMerge>")?;
        for i in (0..self.shadows.len()).rev() {
            write!(f, r#"<feMergeNode in="shadow-{i}"/>"#)?;
        }
        f.write_str("</feMerge></filter>")
    }
}
