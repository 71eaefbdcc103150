pub mod appearance;
pub mod capability_set;
pub mod color;
pub mod fill;
pub mod render_mode;
pub mod serialize;
pub mod transform2d;

pub use appearance::Appearance;
pub use capability_set::CapabilitySet;
pub use color::Color;
pub use fill::Fill;
pub use render_mode::RenderMode;
pub use serialize::Serializable;
pub use transform2d::Transform2d;
