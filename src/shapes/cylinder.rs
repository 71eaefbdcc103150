use crate::core::base::*;
use crate::core::capability::Serializable;
use crate::core::display::DrawTarget;
use crate::core::error::GeomError;
use crate::core::param_set::ParamSet;
use crate::core::shape::*;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Right circular cylinder. Purely a solid; it has no planar contract,
/// so its plain area answer is the full surface.
#[derive(Debug, PartialEq, Clone)]
pub struct Cylinder {
    pub base: BaseShape,
    z: Float,
    radius: Float,
    height: Float,
}

impl Cylinder {
    pub fn new(position: Point2f, z: Float, radius: Float, height: Float) -> Result<Self, GeomError> {
        let radius = validate_dimension("radius", radius)?;
        let height = validate_dimension("height", height)?;
        return Ok(Cylinder {
            base: BaseShape::new(position),
            z,
            radius,
            height,
        });
    }

    pub fn radius(&self) -> Float {
        return self.radius;
    }

    pub fn height(&self) -> Float {
        return self.height;
    }

    /// Replaces radius and height. Either value failing validation
    /// leaves the cylinder unchanged.
    pub fn set_dimensions(&mut self, radius: Float, height: Float) -> Result<(), GeomError> {
        let radius = validate_dimension("radius", radius)?;
        let height = validate_dimension("height", height)?;
        self.radius = radius;
        self.height = height;
        return Ok(());
    }
}

impl Shape for Cylinder {
    fn base(&self) -> &BaseShape {
        return &self.base;
    }

    fn base_mut(&mut self) -> &mut BaseShape {
        return &mut self.base;
    }

    fn kind(&self) -> ShapeKind {
        return ShapeKind::Cylinder;
    }

    fn area(&self) -> Float {
        return self.surface_area();
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

impl Shape3d for Cylinder {
    fn z(&self) -> Float {
        return self.z;
    }

    fn set_z(&mut self, z: Float) {
        self.z = z;
    }

    fn volume(&self) -> Float {
        return PI * self.radius * self.radius * self.height;
    }

    fn surface_area(&self) -> Float {
        return 2.0 * PI * self.radius * (self.radius + self.height);
    }
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "cylinder {} r={} h={} at ({}, {}, {})",
            self.base.id, self.radius, self.height, self.base.position.x, self.base.position.y, self.z
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct CylinderParams {
    x: Float,
    y: Float,
    z: Float,
    radius: Float,
    height: Float,
}

impl Serializable for Cylinder {
    fn serialize(&self) -> Result<String, GeomError> {
        let params = CylinderParams {
            x: self.base.position.x,
            y: self.base.position.y,
            z: self.z,
            radius: self.radius,
            height: self.height,
        };
        return Ok(serde_json::to_string(&params)?);
    }

    fn deserialize(&mut self, data: &str) -> Result<(), GeomError> {
        let params: CylinderParams = serde_json::from_str(data)?;
        self.set_dimensions(params.radius, params.height)?;
        self.base.position = Point2f::new(params.x, params.y);
        self.z = params.z;
        return Ok(());
    }
}

pub fn create_cylinder_shape(params: &ParamSet) -> Result<Cylinder, GeomError> {
    let x = params.find_one_float("x", 0.0);
    let y = params.find_one_float("y", 0.0);
    let z = params.find_one_float("z", 0.0);
    let radius = params.find_one_float("radius", 1.0);
    let height = params.find_one_float("height", 1.0);
    return Cylinder::new(Point2f::new(x, y), z, radius, height);
}
