use super::*;

use crate::core::capability::{Appearance, Color, Fill, RenderMode};
use crate::core::error::GeomError;
use crate::core::param_set::ParamSet;
use crate::core::shape::*;

use std::str::FromStr;

/// Creates a planar shape from its kind tag. Tags outside the planar
/// set fail with UnknownShapeKind and construct nothing.
pub fn create_shape_2d(name: &str, params: &ParamSet) -> Result<Box<dyn Shape2d>, GeomError> {
    let mut shape: Box<dyn Shape2d> = match ShapeKind::from_str(name)? {
        ShapeKind::Circle => Box::new(create_circle_shape(params)?),
        ShapeKind::Rectangle => Box::new(create_rectangle_shape(params)?),
        ShapeKind::Square => Box::new(create_square_shape(params)?),
        ShapeKind::Ellipse => Box::new(create_ellipse_shape(params)?),
        _ => {
            return Err(GeomError::UnknownShapeKind(String::from(name)));
        }
    };
    apply_capability_params(shape.as_mut(), params)?;
    return Ok(shape);
}

/// Creates a solid shape from its kind tag. Tags outside the solid set
/// fail with UnknownShapeKind and construct nothing.
pub fn create_shape_3d(name: &str, params: &ParamSet) -> Result<Box<dyn Shape3d>, GeomError> {
    let mut shape: Box<dyn Shape3d> = match ShapeKind::from_str(name)? {
        ShapeKind::Sphere => Box::new(create_sphere_shape(params)?),
        ShapeKind::Cube => Box::new(create_cube_shape(params)?),
        ShapeKind::Cylinder => Box::new(create_cylinder_shape(params)?),
        _ => {
            return Err(GeomError::UnknownShapeKind(String::from(name)));
        }
    };
    apply_capability_params(shape.as_mut(), params)?;
    return Ok(shape);
}

/// Attaches the capability records named by the parameter bag: "color"
/// (stroke appearance), "filled" and "fillcolor" (fill), "rendermode".
pub fn apply_capability_params<S: Shape + ?Sized>(
    shape: &mut S,
    params: &ParamSet,
) -> Result<(), GeomError> {
    if let Some(names) = params.get_strings("color") {
        if let Some(name) = names.first() {
            let color = parse_color("color", name)?;
            shape
                .capabilities_mut()
                .attach_appearance(Appearance::with_stroke(color));
        }
    }

    let filled = params.find_one_bool("filled", false);
    let fill_color = params.get_strings("fillcolor").and_then(|v| v.first());
    if filled || fill_color.is_some() {
        let mut fill = Fill::new();
        fill.set_filled(filled);
        if let Some(name) = fill_color {
            fill.set_color(parse_color("fillcolor", name)?);
        }
        shape.capabilities_mut().attach_fill(fill);
    }

    if let Some(names) = params.get_strings("rendermode") {
        if let Some(name) = names.first() {
            let mode = RenderMode::from_name(name).ok_or_else(|| GeomError::InvalidParameter {
                name: String::from("rendermode"),
                reason: format!("unknown render mode \"{}\"", name),
            })?;
            shape.capabilities_mut().attach_render_mode(mode);
        }
    }
    return Ok(());
}

fn parse_color(param: &str, name: &str) -> Result<Color, GeomError> {
    return Color::from_name(name).ok_or_else(|| GeomError::InvalidParameter {
        name: String::from(param),
        reason: format!("unknown color \"{}\"", name),
    });
}
