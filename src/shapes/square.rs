use crate::core::base::*;
use crate::core::capability::Serializable;
use crate::core::display::DrawTarget;
use crate::core::error::GeomError;
use crate::core::param_set::ParamSet;
use crate::core::shape::*;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

use super::rectangle::Rectangle;

/// Square as a constrained rectangle; both dimensions stay equal, so
/// every rectangle query holds for it unchanged.
#[derive(Debug, PartialEq, Clone)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    pub fn new(position: Point2f, side: Float) -> Result<Self, GeomError> {
        let side = validate_dimension("side", side)?;
        return Ok(Square {
            rect: Rectangle::new(position, side, side)?,
        });
    }

    pub fn side(&self) -> Float {
        return self.rect.width();
    }

    pub fn set_side(&mut self, side: Float) -> Result<(), GeomError> {
        let side = validate_dimension("side", side)?;
        return self.rect.set_dimensions(side, side);
    }

    /// The rectangle this square constrains.
    pub fn as_rectangle(&self) -> &Rectangle {
        return &self.rect;
    }
}

impl Shape for Square {
    fn base(&self) -> &BaseShape {
        return &self.rect.base;
    }

    fn base_mut(&mut self) -> &mut BaseShape {
        return &mut self.rect.base;
    }

    fn kind(&self) -> ShapeKind {
        return ShapeKind::Square;
    }

    fn area(&self) -> Float {
        return self.rect.area();
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

impl Shape2d for Square {
    fn perimeter(&self) -> Float {
        return self.rect.perimeter();
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "square {} side={} at {}",
            self.rect.base.id,
            self.side(),
            self.rect.base.position
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct SquareParams {
    x: Float,
    y: Float,
    side: Float,
}

impl Serializable for Square {
    fn serialize(&self) -> Result<String, GeomError> {
        let params = SquareParams {
            x: self.rect.base.position.x,
            y: self.rect.base.position.y,
            side: self.side(),
        };
        return Ok(serde_json::to_string(&params)?);
    }

    fn deserialize(&mut self, data: &str) -> Result<(), GeomError> {
        let params: SquareParams = serde_json::from_str(data)?;
        self.set_side(params.side)?;
        self.rect.base.position = Point2f::new(params.x, params.y);
        return Ok(());
    }
}

pub fn create_square_shape(params: &ParamSet) -> Result<Square, GeomError> {
    let x = params.find_one_float("x", 0.0);
    let y = params.find_one_float("y", 0.0);
    let side = params.find_one_float("side", 1.0);
    return Square::new(Point2f::new(x, y), side);
}
