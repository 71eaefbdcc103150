use serde::{Deserialize, Serialize};

/// How a target should present the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    #[default]
    Wireframe,
    Solid,
    Textured,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Wireframe => "wireframe",
            RenderMode::Solid => "solid",
            RenderMode::Textured => "textured",
        }
    }

    /// Resolves a mode keyword such as "solid". Case-insensitive.
    pub fn from_name(name: &str) -> Option<RenderMode> {
        match name.to_lowercase().as_str() {
            "wireframe" => Some(RenderMode::Wireframe),
            "solid" => Some(RenderMode::Solid),
            "textured" => Some(RenderMode::Textured),
            _ => None,
        }
    }
}
