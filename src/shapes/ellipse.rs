use crate::core::base::*;
use crate::core::capability::Serializable;
use crate::core::display::DrawTarget;
use crate::core::error::GeomError;
use crate::core::param_set::ParamSet;
use crate::core::shape::*;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Axis-aligned ellipse given by its two semi-axes.
#[derive(Debug, PartialEq, Clone)]
pub struct Ellipse {
    pub base: BaseShape,
    semi_major: Float,
    semi_minor: Float,
}

impl Ellipse {
    pub fn new(position: Point2f, semi_major: Float, semi_minor: Float) -> Result<Self, GeomError> {
        let semi_major = validate_dimension("majoraxis", semi_major)?;
        let semi_minor = validate_dimension("minoraxis", semi_minor)?;
        return Ok(Ellipse {
            base: BaseShape::new(position),
            semi_major,
            semi_minor,
        });
    }

    pub fn semi_major(&self) -> Float {
        return self.semi_major;
    }

    pub fn semi_minor(&self) -> Float {
        return self.semi_minor;
    }

    /// Replaces both semi-axes. Either value failing validation leaves
    /// the ellipse unchanged.
    pub fn set_axes(&mut self, semi_major: Float, semi_minor: Float) -> Result<(), GeomError> {
        let semi_major = validate_dimension("majoraxis", semi_major)?;
        let semi_minor = validate_dimension("minoraxis", semi_minor)?;
        self.semi_major = semi_major;
        self.semi_minor = semi_minor;
        return Ok(());
    }
}

impl Shape for Ellipse {
    fn base(&self) -> &BaseShape {
        return &self.base;
    }

    fn base_mut(&mut self) -> &mut BaseShape {
        return &mut self.base;
    }

    fn kind(&self) -> ShapeKind {
        return ShapeKind::Ellipse;
    }

    fn area(&self) -> Float {
        return PI * self.semi_major * self.semi_minor;
    }

    fn draw(&self, target: &mut dyn DrawTarget) {
        target.draw(self);
    }

    fn render(&self, target: &mut dyn DrawTarget) {
        target.render(self);
    }

    fn as_any(&self) -> &dyn Any {
        return self;
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        return self;
    }
}

impl Shape2d for Ellipse {
    /// Ramanujan's closed-form approximation; exact when the axes are
    /// equal.
    fn perimeter(&self) -> Float {
        let a = self.semi_major;
        let b = self.semi_minor;
        return PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt());
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "ellipse {} a={} b={} at {}",
            self.base.id, self.semi_major, self.semi_minor, self.base.position
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct EllipseParams {
    x: Float,
    y: Float,
    semi_major: Float,
    semi_minor: Float,
}

impl Serializable for Ellipse {
    fn serialize(&self) -> Result<String, GeomError> {
        let params = EllipseParams {
            x: self.base.position.x,
            y: self.base.position.y,
            semi_major: self.semi_major,
            semi_minor: self.semi_minor,
        };
        return Ok(serde_json::to_string(&params)?);
    }

    fn deserialize(&mut self, data: &str) -> Result<(), GeomError> {
        let params: EllipseParams = serde_json::from_str(data)?;
        self.set_axes(params.semi_major, params.semi_minor)?;
        self.base.position = Point2f::new(params.x, params.y);
        return Ok(());
    }
}

pub fn create_ellipse_shape(params: &ParamSet) -> Result<Ellipse, GeomError> {
    let x = params.find_one_float("x", 0.0);
    let y = params.find_one_float("y", 0.0);
    let semi_major = params.find_one_float("majoraxis", 1.0);
    let semi_minor = params.find_one_float("minoraxis", 1.0);
    return Ellipse::new(Point2f::new(x, y), semi_major, semi_minor);
}
