use crate::core::shape::Shape;

/// Receiver for draw and render calls. The model hands each shape over
/// and never inspects a result; what a target does with the call is its
/// own business. Targets may read the shape's identity, kind, display
/// form and capability records to decide presentation.
pub trait DrawTarget {
    fn draw(&mut self, shape: &dyn Shape);
    fn render(&mut self, shape: &dyn Shape);
}
