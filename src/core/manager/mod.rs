pub mod shape_manager;

pub use shape_manager::ShapeManager;
