use crate::core::geometry::Vector2;

pub type Float = f64;

pub type Vector2f = Vector2<Float>;
pub type Point2f = Vector2<Float>;
