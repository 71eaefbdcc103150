use crate::core::base::*;
use crate::core::capability::Serializable;
use crate::core::display::DrawTarget;
use crate::core::error::GeomError;
use crate::core::param_set::ParamSet;
use crate::core::shape::*;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Axis-aligned rectangle given by width and height.
#[derive(Debug, PartialEq, Clone)]
pub struct Rectangle {
    pub base: BaseShape,
    width: Float,
    height: Float,
}

impl Rectangle {
    pub fn new(position: Point2f, width: Float, height: Float) -> Result<Self, GeomError> {
        let width = validate_dimension("width", width)?;
        let height = validate_dimension("height", height)?;
        return Ok(Rectangle {
            base: BaseShape::new(position),
            width,
            height,
        });
    }

    pub fn width(&self) -> Float {
        return self.width;
    }

    pub fn height(&self) -> Float {
        return self.height;
    }

    /// Replaces both dimensions. Either value failing validation leaves
    /// the rectangle unchanged.
    pub fn set_dimensions(&mut self, width: Float, height: Float) -> Result<(), GeomError> {
        let width = validate_dimension("width", width)?;
        let height = validate_dimension("height", height)?;
        self.width = width;
        self.height = height;
        return Ok(());
    }
}

impl Shape for Rectangle {
    fn base(&self) -> &BaseShape {
        return &self.base;
    }

    fn base_mut(&mut self) -> &mut BaseShape {
        return &mut self.base;
    }

    fn kind(&self) -> ShapeKind {
        return ShapeKind::Rectangle;
    }

    fn area(&self) -> Float {
        return self.width * self.height;
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

impl Shape2d for Rectangle {
    fn perimeter(&self) -> Float {
        return 2.0 * (self.width + self.height);
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "rectangle {} {}x{} at {}",
            self.base.id, self.width, self.height, self.base.position
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct RectangleParams {
    x: Float,
    y: Float,
    width: Float,
    height: Float,
}

impl Serializable for Rectangle {
    fn serialize(&self) -> Result<String, GeomError> {
        let params = RectangleParams {
            x: self.base.position.x,
            y: self.base.position.y,
            width: self.width,
            height: self.height,
        };
        return Ok(serde_json::to_string(&params)?);
    }

    fn deserialize(&mut self, data: &str) -> Result<(), GeomError> {
        let params: RectangleParams = serde_json::from_str(data)?;
        self.set_dimensions(params.width, params.height)?;
        self.base.position = Point2f::new(params.x, params.y);
        return Ok(());
    }
}

pub fn create_rectangle_shape(params: &ParamSet) -> Result<Rectangle, GeomError> {
    let x = params.find_one_float("x", 0.0);
    let y = params.find_one_float("y", 0.0);
    let width = params.find_one_float("width", 1.0);
    let height = params.find_one_float("height", 1.0);
    return Rectangle::new(Point2f::new(x, y), width, height);
}
