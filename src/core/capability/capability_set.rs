use serde::{Deserialize, Serialize};

use super::appearance::Appearance;
use super::fill::Fill;
use super::render_mode::RenderMode;
use super::transform2d::Transform2d;

/// The capability records attached to a shape, one optional slot per
/// concern. Attaching to an occupied slot replaces the record, so a
/// capability can never be present twice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CapabilitySet {
    appearance: Option<Appearance>,
    fill: Option<Fill>,
    transform: Option<Transform2d>,
    render_mode: Option<RenderMode>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        return CapabilitySet::default();
    }

    pub fn is_empty(&self) -> bool {
        return self.appearance.is_none()
            && self.fill.is_none()
            && self.transform.is_none()
            && self.render_mode.is_none();
    }

    pub fn attach_appearance(&mut self, appearance: Appearance) -> Option<Appearance> {
        return self.appearance.replace(appearance);
    }

    pub fn appearance(&self) -> Option<&Appearance> {
        return self.appearance.as_ref();
    }

    pub fn appearance_mut(&mut self) -> Option<&mut Appearance> {
        return self.appearance.as_mut();
    }

    pub fn attach_fill(&mut self, fill: Fill) -> Option<Fill> {
        return self.fill.replace(fill);
    }

    pub fn fill(&self) -> Option<&Fill> {
        return self.fill.as_ref();
    }

    pub fn fill_mut(&mut self) -> Option<&mut Fill> {
        return self.fill.as_mut();
    }

    pub fn attach_transform(&mut self, transform: Transform2d) -> Option<Transform2d> {
        return self.transform.replace(transform);
    }

    pub fn transform(&self) -> Option<&Transform2d> {
        return self.transform.as_ref();
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform2d> {
        return self.transform.as_mut();
    }

    pub fn attach_render_mode(&mut self, mode: RenderMode) -> Option<RenderMode> {
        return self.render_mode.replace(mode);
    }

    pub fn render_mode(&self) -> Option<RenderMode> {
        return self.render_mode;
    }
}

//-------------------------------------------------------------
