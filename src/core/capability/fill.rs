use serde::{Deserialize, Serialize};

use super::color::Color;

/// Whether the interior is painted and with what color. Fresh records
/// are unfilled white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    filled: bool,
    color: Color,
}

impl Fill {
    pub fn new() -> Self {
        return Fill {
            filled: false,
            color: Color::WHITE,
        };
    }

    pub fn with_color(color: Color) -> Self {
        return Fill {
            filled: true,
            color,
        };
    }

    pub fn is_filled(&self) -> bool {
        return self.filled;
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    pub fn color(&self) -> Color {
        return self.color;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for Fill {
    fn default() -> Self {
        Self::new()
    }
}
