use crate::core::base::*;
use crate::core::capability::Serializable;
use crate::core::display::DrawTarget;
use crate::core::error::GeomError;
use crate::core::param_set::ParamSet;
use crate::core::shape::*;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

use super::circle::Circle;

/// Ball in space. Planar queries answer for the disc through its
/// center; the z coordinate places that center out of plane.
#[derive(Debug, PartialEq, Clone)]
pub struct Sphere {
    section: Circle,
    z: Float,
}

impl Sphere {
    pub fn new(position: Point2f, z: Float, radius: Float) -> Result<Self, GeomError> {
        return Ok(Sphere {
            section: Circle::new(position, radius)?,
            z,
        });
    }

    pub fn radius(&self) -> Float {
        return self.section.radius();
    }

    pub fn set_radius(&mut self, radius: Float) -> Result<(), GeomError> {
        return self.section.set_radius(radius);
    }
}

impl Shape for Sphere {
    fn base(&self) -> &BaseShape {
        return &self.section.base;
    }

    fn base_mut(&mut self) -> &mut BaseShape {
        return &mut self.section.base;
    }

    fn kind(&self) -> ShapeKind {
        return ShapeKind::Sphere;
    }

    /// Cross-section policy: the plain area answer is the center disc,
    /// not the surface.
    fn area(&self) -> Float {
        return self.section.area();
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

impl Shape2d for Sphere {
    /// Great-circle perimeter.
    fn perimeter(&self) -> Float {
        return self.section.perimeter();
    }
}

impl Shape3d for Sphere {
    fn z(&self) -> Float {
        return self.z;
    }

    fn set_z(&mut self, z: Float) {
        self.z = z;
    }

    fn volume(&self) -> Float {
        let r = self.section.radius();
        return (4.0 / 3.0) * PI * r * r * r;
    }

    fn surface_area(&self) -> Float {
        let r = self.section.radius();
        return 4.0 * PI * r * r;
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "sphere {} r={} at ({}, {}, {})",
            self.section.base.id,
            self.section.radius(),
            self.section.base.position.x,
            self.section.base.position.y,
            self.z
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct SphereParams {
    x: Float,
    y: Float,
    z: Float,
    radius: Float,
}

impl Serializable for Sphere {
    fn serialize(&self) -> Result<String, GeomError> {
        let params = SphereParams {
            x: self.section.base.position.x,
            y: self.section.base.position.y,
            z: self.z,
            radius: self.section.radius(),
        };
        return Ok(serde_json::to_string(&params)?);
    }

    fn deserialize(&mut self, data: &str) -> Result<(), GeomError> {
        let params: SphereParams = serde_json::from_str(data)?;
        self.set_radius(params.radius)?;
        self.section.base.position = Point2f::new(params.x, params.y);
        self.z = params.z;
        return Ok(());
    }
}

pub fn create_sphere_shape(params: &ParamSet) -> Result<Sphere, GeomError> {
    let x = params.find_one_float("x", 0.0);
    let y = params.find_one_float("y", 0.0);
    let z = params.find_one_float("z", 0.0);
    let radius = params.find_one_float("radius", 1.0);
    return Sphere::new(Point2f::new(x, y), z, radius);
}
