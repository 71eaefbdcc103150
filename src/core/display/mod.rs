pub mod draw_target;

pub use draw_target::DrawTarget;
