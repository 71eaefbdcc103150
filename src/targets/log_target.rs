use log::debug;

use crate::core::display::DrawTarget;
use crate::core::shape::Shape;

/// Draw target that reports every call through the log crate. The
/// built-in sink for callers that want presentation side effects
/// without a real backend.
#[derive(Debug, Default)]
pub struct LogTarget;

impl LogTarget {
    pub fn new() -> Self {
        return LogTarget;
    }
}

impl DrawTarget for LogTarget {
    fn draw(&mut self, shape: &dyn Shape) {
        debug!("draw {}", shape);
    }

    fn render(&mut self, shape: &dyn Shape) {
        let mode = shape.capabilities().render_mode().unwrap_or_default();
        debug!("render {} as {}", shape, mode.as_str());
    }
}
