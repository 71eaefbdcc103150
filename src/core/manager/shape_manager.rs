use log::debug;

use crate::core::base::Float;
use crate::core::display::DrawTarget;
use crate::core::shape::{Shape2d, Shape3d};

/// Owning context for a mixed population of shapes. Planar and solid
/// members live in two disjoint collections that keep insertion order.
/// Aggregates are recomputed from current member state on every call,
/// so mutation after insertion is always visible. Members cannot be
/// removed individually; dropping the manager releases them together.
#[derive(Default)]
pub struct ShapeManager {
    shapes: Vec<Box<dyn Shape2d>>,
    shapes_3d: Vec<Box<dyn Shape3d>>,
}

impl ShapeManager {
    pub fn new() -> Self {
        return ShapeManager {
            shapes: Vec::new(),
            shapes_3d: Vec::new(),
        };
    }

    /// Takes ownership of a planar shape.
    pub fn add_shape(&mut self, shape: Box<dyn Shape2d>) {
        debug!("manager: added {}", shape);
        self.shapes.push(shape);
    }

    /// Takes ownership of a solid shape.
    pub fn add_shape_3d(&mut self, shape: Box<dyn Shape3d>) {
        debug!("manager: added {}", shape);
        self.shapes_3d.push(shape);
    }

    pub fn count(&self) -> usize {
        return self.shapes.len();
    }

    pub fn count_3d(&self) -> usize {
        return self.shapes_3d.len();
    }

    pub fn shape(&self, index: usize) -> Option<&dyn Shape2d> {
        return self.shapes.get(index).map(|s| s.as_ref());
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut dyn Shape2d> {
        return self.shapes.get_mut(index).map(|s| s.as_mut() as &mut dyn Shape2d);
    }

    pub fn shape_3d(&self, index: usize) -> Option<&dyn Shape3d> {
        return self.shapes_3d.get(index).map(|s| s.as_ref());
    }

    pub fn shape_3d_mut(&mut self, index: usize) -> Option<&mut dyn Shape3d> {
        return self.shapes_3d.get_mut(index).map(|s| s.as_mut() as &mut dyn Shape3d);
    }

    pub fn shapes(&self) -> impl Iterator<Item = &dyn Shape2d> + '_ {
        return self.shapes.iter().map(|s| s.as_ref());
    }

    pub fn shapes_3d(&self) -> impl Iterator<Item = &dyn Shape3d> + '_ {
        return self.shapes_3d.iter().map(|s| s.as_ref());
    }

    /// Sum of planar member areas, recomputed now.
    pub fn total_area(&self) -> Float {
        return self.shapes.iter().map(|s| s.area()).sum();
    }

    /// Sum of solid member volumes, recomputed now.
    pub fn total_volume(&self) -> Float {
        return self.shapes_3d.iter().map(|s| s.volume()).sum();
    }

    /// Draws every member once, planar collection first, each in
    /// insertion order.
    pub fn draw_all(&self, target: &mut dyn DrawTarget) {
        for shape in self.shapes.iter() {
            shape.draw(target);
        }
        for shape in self.shapes_3d.iter() {
            shape.draw(target);
        }
    }

    /// Renders every member once, same order as `draw_all`.
    pub fn render_all(&self, target: &mut dyn DrawTarget) {
        for shape in self.shapes.iter() {
            shape.render(target);
        }
        for shape in self.shapes_3d.iter() {
            shape.render(target);
        }
    }
}
