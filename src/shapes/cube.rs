use crate::core::base::*;
use crate::core::capability::Serializable;
use crate::core::display::DrawTarget;
use crate::core::error::GeomError;
use crate::core::param_set::ParamSet;
use crate::core::shape::*;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

use super::square::Square;

/// Axis-aligned cube. Planar queries answer for its base face; the z
/// coordinate places that face out of plane.
#[derive(Debug, PartialEq, Clone)]
pub struct Cube {
    face: Square,
    z: Float,
}

impl Cube {
    pub fn new(position: Point2f, z: Float, side: Float) -> Result<Self, GeomError> {
        return Ok(Cube {
            face: Square::new(position, side)?,
            z,
        });
    }

    pub fn side(&self) -> Float {
        return self.face.side();
    }

    pub fn set_side(&mut self, side: Float) -> Result<(), GeomError> {
        return self.face.set_side(side);
    }

    /// The square this cube extrudes.
    pub fn face(&self) -> &Square {
        return &self.face;
    }
}

impl Shape for Cube {
    fn base(&self) -> &BaseShape {
        return self.face.base();
    }

    fn base_mut(&mut self) -> &mut BaseShape {
        return self.face.base_mut();
    }

    fn kind(&self) -> ShapeKind {
        return ShapeKind::Cube;
    }

    /// Base-face policy: the plain area answer is one face, not the
    /// whole surface.
    fn area(&self) -> Float {
        return self.face.area();
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

impl Shape2d for Cube {
    /// Perimeter of the base face.
    fn perimeter(&self) -> Float {
        return self.face.perimeter();
    }
}

impl Shape3d for Cube {
    fn z(&self) -> Float {
        return self.z;
    }

    fn set_z(&mut self, z: Float) {
        self.z = z;
    }

    fn volume(&self) -> Float {
        let s = self.face.side();
        return s * s * s;
    }

    fn surface_area(&self) -> Float {
        let s = self.face.side();
        return 6.0 * s * s;
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.face.position();
        return write!(
            f,
            "cube {} side={} at ({}, {}, {})",
            self.face.id(),
            self.face.side(),
            p.x,
            p.y,
            self.z
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct CubeParams {
    x: Float,
    y: Float,
    z: Float,
    side: Float,
}

impl Serializable for Cube {
    fn serialize(&self) -> Result<String, GeomError> {
        let p = self.face.position();
        let params = CubeParams {
            x: p.x,
            y: p.y,
            z: self.z,
            side: self.face.side(),
        };
        return Ok(serde_json::to_string(&params)?);
    }

    fn deserialize(&mut self, data: &str) -> Result<(), GeomError> {
        let params: CubeParams = serde_json::from_str(data)?;
        self.face.set_side(params.side)?;
        self.face.set_position(Point2f::new(params.x, params.y));
        self.z = params.z;
        return Ok(());
    }
}

pub fn create_cube_shape(params: &ParamSet) -> Result<Cube, GeomError> {
    let x = params.find_one_float("x", 0.0);
    let y = params.find_one_float("y", 0.0);
    let z = params.find_one_float("z", 0.0);
    let side = params.find_one_float("side", 1.0);
    return Cube::new(Point2f::new(x, y), z, side);
}
