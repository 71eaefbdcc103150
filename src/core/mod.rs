pub mod base;
pub mod capability;
pub mod display;
pub mod error;
pub mod geometry;
pub mod manager;
pub mod param_set;
pub mod shape;
