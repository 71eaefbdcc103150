use serde::{Deserialize, Serialize};

use super::color::Color;

/// Stroke and fill colors a target may honor when presenting the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    stroke: Color,
    fill: Color,
}

impl Appearance {
    pub fn new() -> Self {
        return Appearance {
            stroke: Color::BLACK,
            fill: Color::WHITE,
        };
    }

    pub fn with_stroke(stroke: Color) -> Self {
        return Appearance {
            stroke,
            fill: Color::WHITE,
        };
    }

    pub fn stroke(&self) -> Color {
        return self.stroke;
    }

    pub fn set_stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    pub fn fill(&self) -> Color {
        return self.fill;
    }

    pub fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new()
    }
}
