use serde::{Deserialize, Serialize};

use crate::core::base::*;

/// Accumulating planar transform. Rotation and offset add up, scale
/// multiplies; values are kept exactly as given, nothing is normalized
/// or clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2d {
    rotation: Float,
    scale: Float,
    offset: Vector2f,
}

impl Transform2d {
    pub fn new() -> Self {
        return Transform2d {
            rotation: 0.0,
            scale: 1.0,
            offset: Vector2f::zero(),
        };
    }

    pub fn rotate(&mut self, angle: Float) {
        self.rotation += angle;
    }

    pub fn scale_by(&mut self, factor: Float) {
        self.scale *= factor;
    }

    pub fn translate(&mut self, dx: Float, dy: Float) {
        self.offset += Vector2f::new(dx, dy);
    }

    pub fn rotation(&self) -> Float {
        return self.rotation;
    }

    pub fn scale(&self) -> Float {
        return self.scale;
    }

    pub fn offset(&self) -> Vector2f {
        return self.offset;
    }
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------
