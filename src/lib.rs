//! A polymorphic geometric entity model: a closed family of 2D and 3D
//! shapes behind common trait contracts, attachable capability records,
//! a tag-driven factory and an owning manager context.

pub mod core;
pub mod shapes;
pub mod targets;
