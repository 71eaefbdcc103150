pub mod circle;
pub mod create_shape;
pub mod cube;
pub mod cylinder;
pub mod ellipse;
pub mod rectangle;
pub mod sphere;
pub mod square;

pub use circle::*;
pub use create_shape::*;
pub use cube::*;
pub use cylinder::*;
pub use ellipse::*;
pub use rectangle::*;
pub use sphere::*;
pub use square::*;
