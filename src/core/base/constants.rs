use super::types::Float;

pub const PI: Float = std::f64::consts::PI; //3.14159265358979323846
