//! Closed contours and their serialization as SVG path data.

use core::fmt;
use core::slice;

use super::*;

/// One drawing command of a contour, with absolute coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2<NativeFloat>),
    LineTo(Point2<NativeFloat>),
    CubicTo(Point2<NativeFloat>, Point2<NativeFloat>, Point2<NativeFloat>),
    Close,
}

/// Sum type for the drawable pieces of a contour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Segment {
    Linear(LineSegment<NativeFloat>),
    Cubic(CubicBezier<NativeFloat>),
}

impl Segment {
    pub fn start(&self) -> Point2<NativeFloat> {
        match self {
            Segment::Linear(segment) => segment.start,
            Segment::Cubic(segment) => segment.start,
        }
    }

    pub fn end(&self) -> Point2<NativeFloat> {
        match self {
            Segment::Linear(segment) => segment.end,
            Segment::Cubic(segment) => segment.end,
        }
    }

    /// Evaluate the segment at `t` in `[0, 1]`.
    pub fn eval(&self, t: NativeFloat) -> Point2<NativeFloat> {
        match self {
            Segment::Linear(segment) => segment.eval(t),
            Segment::Cubic(segment) => segment.eval(t),
        }
    }

    pub fn bounding_box(&self) -> Bounds<NativeFloat> {
        match self {
            Segment::Linear(segment) => segment.bounding_box(),
            Segment::Cubic(segment) => segment.bounding_box(),
        }
    }

    /// Exact for lines, flattened with `nsteps` for cubics.
    pub fn arclen(&self, nsteps: usize) -> NativeFloat {
        match self {
            Segment::Linear(segment) => segment.length(),
            Segment::Cubic(segment) => segment.arclen(nsteps),
        }
    }
}

/// A single closed contour: one `MoveTo`, any number of lines and cubics, one `Close`.
///
/// `Display` writes the SVG path data, e.g. `M 0,0 C 1,0 2,1 2,2 L 0,2 Z`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Start a new contour at `start`.
    pub fn new(start: Point2<NativeFloat>) -> Self {
        Self::with_capacity(start, 0)
    }

    pub fn with_capacity(start: Point2<NativeFloat>, segments: usize) -> Self {
        let mut commands = Vec::with_capacity(segments + 2);
        commands.push(PathCommand::MoveTo(start));
        Path { commands }
    }

    pub fn line_to(&mut self, to: Point2<NativeFloat>) {
        self.commands.push(PathCommand::LineTo(to));
    }

    pub fn cubic_to(
        &mut self,
        ctrl1: Point2<NativeFloat>,
        ctrl2: Point2<NativeFloat>,
        to: Point2<NativeFloat>,
    ) {
        self.commands.push(PathCommand::CubicTo(ctrl1, ctrl2, to));
    }

    /// Terminate the contour. Closing twice has no effect.
    pub fn close(&mut self) {
        if !self.is_closed() {
            self.commands.push(PathCommand::Close);
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn commands(&self) -> slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    /// The point passed to `MoveTo`.
    pub fn start(&self) -> Option<Point2<NativeFloat>> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// The explicit segments of the contour, in drawing order.
    /// The implicit closing line of `Z` is not included.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let mut current = Point2::default();
        self.commands.iter().filter_map(move |command| match *command {
            PathCommand::MoveTo(p) => {
                current = p;
                None
            }
            PathCommand::LineTo(p) => {
                let segment = Segment::Linear(LineSegment::new(current, p));
                current = p;
                Some(segment)
            }
            PathCommand::CubicTo(c1, c2, p) => {
                let segment = Segment::Cubic(CubicBezier::new(current, c1, c2, p));
                current = p;
                Some(segment)
            }
            PathCommand::Close => None,
        })
    }

    pub fn len(&self) -> usize {
        self.segments().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tight bounding box of the drawn contour, including the start point.
    pub fn bounds(&self) -> Bounds<NativeFloat> {
        let mut bounds = Bounds::empty();
        if let Some(start) = self.start() {
            bounds.include(start);
        }
        self.segments()
            .fold(bounds, |acc, segment| acc.union(&segment.bounding_box()))
    }

    /// Apply a per-axis scale and offset to every coordinate.
    pub fn transform(&self, fit: &FitTransform<NativeFloat>) -> Path {
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(fit.apply(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(fit.apply(p)),
                PathCommand::CubicTo(c1, c2, p) => {
                    PathCommand::CubicTo(fit.apply(c1), fit.apply(c2), fit.apply(p))
                }
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {},{}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {},{}", p.x, p.y),
            PathCommand::CubicTo(c1, c2, p) => write!(
                f,
                "C {},{} {},{} {},{}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> Path {
        let mut path = Path::new(Point2::new(0.0, 0.0));
        path.line_to(Point2::new(1.0, 0.0));
        path.cubic_to(
            Point2::new(1.5, 0.8),
            Point2::new(2.0, 0.8),
            Point2::new(2.5, 0.0),
        );
        path.close();
        path
    }

    #[test]
    fn serializes_svg_commands() {
        assert_eq!(
            sample_path().to_string(),
            "M 0,0 L 1,0 C 1.5,0.8 2,0.8 2.5,0 Z"
        );
    }

    #[test]
    fn close_is_idempotent() {
        let mut path = sample_path();
        path.close();
        assert!(path.is_closed());
        assert_eq!(path.to_string().matches('Z').count(), 1);
    }

    #[test]
    fn segments_chain_end_to_start() {
        let path = sample_path();
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start(), Point2::new(0.0, 0.0));
        assert_eq!(segments[0].end(), segments[1].start());
    }

    #[test]
    fn bounds_union() {
        let bounds = sample_path().bounds();
        assert_eq!((bounds.min_x, bounds.max_x), (0.0, 2.5));
        // the cubic peaks at 0.75 * 0.8
        assert!((bounds.max_y - 0.6).abs() < EPSILON);
        assert_eq!(bounds.min_y, 0.0);
    }

    #[test]
    fn transform_maps_every_coordinate() {
        let fit = FitTransform {
            scale: Point2::new(2.0, 10.0),
            offset: Point2::new(1.0, -1.0),
        };
        let moved = sample_path().transform(&fit);
        assert_eq!(
            moved.to_string(),
            "M 1,-1 L 3,-1 C 4,7 5,7 6,-1 Z"
        );
    }
}
