use super::*;

/// Any of the supported shapes with its parameters, one value per on-screen shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Shape {
    Blob(BlobParams),
    Polygon(PolygonParams),
    Squircle(SquircleParams),
    Superellipse(SuperellipseParams),
}

impl Shape {
    /// Outline for a `width` x `height` box. Call again whenever the size or
    /// the parameters change; nothing is cached.
    pub fn path(&self, width: NativeFloat, height: NativeFloat) -> Path {
        match self {
            Shape::Blob(params) => params.path(width, height),
            Shape::Polygon(params) => params.path(width, height),
            Shape::Squircle(params) => params.path(width, height),
            Shape::Superellipse(params) => params.path(width, height),
        }
    }

    pub fn validate(&self, width: NativeFloat, height: NativeFloat) -> Result<(), ShapeError> {
        match self {
            Shape::Blob(params) => params.validate(width, height),
            Shape::Polygon(params) => params.validate(width, height),
            Shape::Squircle(params) => params.validate(width, height),
            Shape::Superellipse(params) => params.validate(width, height),
        }
    }

    /// Validates first, so hosts can skip drawing instead of emitting NaN coordinates.
    pub fn checked_path(
        &self,
        width: NativeFloat,
        height: NativeFloat,
    ) -> Result<Path, ShapeError> {
        self.validate(width, height)?;
        Ok(self.path(width, height))
    }
}

impl From<BlobParams> for Shape {
    fn from(params: BlobParams) -> Self {
        Shape::Blob(params)
    }
}

impl From<PolygonParams> for Shape {
    fn from(params: PolygonParams) -> Self {
        Shape::Polygon(params)
    }
}

impl From<SquircleParams> for Shape {
    fn from(params: SquircleParams) -> Self {
        Shape::Squircle(params)
    }
}

impl From<SuperellipseParams> for Shape {
    fn from(params: SuperellipseParams) -> Self {
        Shape::Superellipse(params)
    }
}
