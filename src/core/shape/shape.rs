use std::any::Any;
use std::fmt;
use std::str::FromStr;

use crate::core::base::*;
use crate::core::capability::CapabilitySet;
use crate::core::display::DrawTarget;
use crate::core::error::GeomError;

use super::base_shape::BaseShape;
use super::entity_id::EntityId;

/// The closed set of kinds the model understands. Factories dispatch on
/// it and refuse anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
    Ellipse,
    Sphere,
    Cube,
    Cylinder,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Cylinder => "cylinder",
        }
    }

    /// True for kinds that carry volume.
    pub fn is_solid(&self) -> bool {
        return matches!(
            self,
            ShapeKind::Sphere | ShapeKind::Cube | ShapeKind::Cylinder
        );
    }
}

impl FromStr for ShapeKind {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "square" => Ok(ShapeKind::Square),
            "ellipse" => Ok(ShapeKind::Ellipse),
            "sphere" => Ok(ShapeKind::Sphere),
            "cube" => Ok(ShapeKind::Cube),
            "cylinder" => Ok(ShapeKind::Cylinder),
            _ => Err(GeomError::UnknownShapeKind(String::from(s))),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.as_str());
    }
}

/// Contract every geometric entity answers: identity, position, area and
/// presentation through a draw target. Queries are recomputed from
/// current parameters on every call; nothing is cached.
pub trait Shape: fmt::Display + fmt::Debug {
    fn base(&self) -> &BaseShape;
    fn base_mut(&mut self) -> &mut BaseShape;

    fn kind(&self) -> ShapeKind;

    /// Area in square units. Solids answer with their surface area
    /// unless the type documents a cross-section policy.
    fn area(&self) -> Float;

    fn draw(&self, target: &mut dyn DrawTarget);
    fn render(&self, target: &mut dyn DrawTarget);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn id(&self) -> EntityId {
        return self.base().id;
    }

    fn position(&self) -> Point2f {
        return self.base().position;
    }

    fn set_position(&mut self, position: Point2f) {
        self.base_mut().position = position;
    }

    fn translate(&mut self, dx: Float, dy: Float) {
        let p = self.base().position;
        self.base_mut().position = Point2f::new(p.x + dx, p.y + dy);
    }

    fn capabilities(&self) -> &CapabilitySet {
        return &self.base().capabilities;
    }

    fn capabilities_mut(&mut self) -> &mut CapabilitySet {
        return &mut self.base_mut().capabilities;
    }
}

/// Planar shapes.
pub trait Shape2d: Shape {
    /// Perimeter in linear units.
    fn perimeter(&self) -> Float;
}

/// Shapes with spatial extent. The z coordinate is a position, not a
/// dimension, and may be negative.
pub trait Shape3d: Shape {
    fn z(&self) -> Float;
    fn set_z(&mut self, z: Float);

    fn volume(&self) -> Float;
    fn surface_area(&self) -> Float;
}

//-------------------------------------------------------------
