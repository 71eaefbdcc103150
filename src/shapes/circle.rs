use crate::core::base::*;
use crate::core::capability::Serializable;
use crate::core::display::DrawTarget;
use crate::core::error::GeomError;
use crate::core::param_set::ParamSet;
use crate::core::shape::*;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Disc in the plane, parameterized by its radius.
#[derive(Debug, PartialEq, Clone)]
pub struct Circle {
    pub base: BaseShape,
    radius: Float,
}

impl Circle {
    pub fn new(position: Point2f, radius: Float) -> Result<Self, GeomError> {
        let radius = validate_dimension("radius", radius)?;
        return Ok(Circle {
            base: BaseShape::new(position),
            radius,
        });
    }

    pub fn radius(&self) -> Float {
        return self.radius;
    }

    pub fn set_radius(&mut self, radius: Float) -> Result<(), GeomError> {
        self.radius = validate_dimension("radius", radius)?;
        return Ok(());
    }
}

impl Shape for Circle {
    fn base(&self) -> &BaseShape {
        return &self.base;
    }

    fn base_mut(&mut self) -> &mut BaseShape {
        return &mut self.base;
    }

    fn kind(&self) -> ShapeKind {
        return ShapeKind::Circle;
    }

    fn area(&self) -> Float {
        return PI * self.radius * self.radius;
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

impl Shape2d for Circle {
    fn perimeter(&self) -> Float {
        return 2.0 * PI * self.radius;
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "circle {} r={} at {}",
            self.base.id, self.radius, self.base.position
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct CircleParams {
    x: Float,
    y: Float,
    radius: Float,
}

impl Serializable for Circle {
    fn serialize(&self) -> Result<String, GeomError> {
        let params = CircleParams {
            x: self.base.position.x,
            y: self.base.position.y,
            radius: self.radius,
        };
        return Ok(serde_json::to_string(&params)?);
    }

    fn deserialize(&mut self, data: &str) -> Result<(), GeomError> {
        let params: CircleParams = serde_json::from_str(data)?;
        self.set_radius(params.radius)?;
        self.base.position = Point2f::new(params.x, params.y);
        return Ok(());
    }
}

pub fn create_circle_shape(params: &ParamSet) -> Result<Circle, GeomError> {
    let x = params.find_one_float("x", 0.0);
    let y = params.find_one_float("y", 0.0);
    let radius = params.find_one_float("radius", 1.0);
    return Circle::new(Point2f::new(x, y), radius);
}
