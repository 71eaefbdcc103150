pub mod base_shape;
pub mod entity_id;
pub mod shape;

pub use base_shape::*;
pub use entity_id::*;
pub use shape::*;
