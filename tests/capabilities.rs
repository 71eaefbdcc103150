use shapekit::core::base::*;
use shapekit::core::capability::*;
use shapekit::core::error::GeomError;
use shapekit::core::shape::*;
use shapekit::shapes::*;

#[test]
fn fill_defaults_to_unfilled_white() {
    let fill = Fill::new();
    assert_eq!(fill.is_filled(), false);
    assert_eq!(fill.color(), Color::WHITE);
}

#[test]
fn appearance_tracks_stroke_and_fill() {
    let mut appearance = Appearance::new();
    assert_eq!(appearance.stroke(), Color::BLACK);
    assert_eq!(appearance.fill(), Color::WHITE);

    appearance.set_stroke(Color::MAGENTA);
    appearance.set_fill(Color::GRAY);
    assert_eq!(appearance.stroke(), Color::MAGENTA);
    assert_eq!(appearance.fill(), Color::GRAY);
}

#[test]
fn fill_state_flips_freely() {
    let mut circle = Circle::new(Point2f::zero(), 1.0).unwrap();
    circle.capabilities_mut().attach_fill(Fill::new());

    let fill = circle.capabilities_mut().fill_mut().unwrap();
    fill.set_filled(true);
    fill.set_color(Color::RED);

    let fill = circle.capabilities().fill().unwrap();
    assert_eq!(fill.is_filled(), true);
    assert_eq!(fill.color(), Color::RED);
}

#[test]
fn transform_accumulates() {
    let mut square = Square::new(Point2f::zero(), 2.0).unwrap();
    square.capabilities_mut().attach_transform(Transform2d::new());

    let t = square.capabilities_mut().transform_mut().unwrap();
    t.rotate(45.0);
    t.rotate(45.0);
    t.scale_by(2.0);
    t.translate(1.0, 0.0);
    t.translate(0.0, 2.0);

    let t = square.capabilities().transform().unwrap();
    assert_eq!(t.rotation(), 90.0);
    assert_eq!(t.scale(), 2.0);
    assert_eq!(t.offset(), Vector2f::new(1.0, 2.0));

    // The capability never touches the shape's own geometry.
    assert_eq!(square.side(), 2.0);
    assert_eq!(square.position(), Point2f::zero());
}

#[test]
fn geometry_and_capability_state_are_independent() {
    let mut circle = Circle::new(Point2f::zero(), 1.0).unwrap();
    circle
        .capabilities_mut()
        .attach_fill(Fill::with_color(Color::BLUE));

    circle.set_radius(3.0).unwrap();
    assert_eq!(
        circle.capabilities().fill().map(|f| f.color()),
        Some(Color::BLUE)
    );

    circle.capabilities_mut().fill_mut().unwrap().set_filled(false);
    assert_eq!(circle.radius(), 3.0);
}

#[test]
fn reattaching_replaces_instead_of_stacking() {
    let mut cube = Cube::new(Point2f::zero(), 0.0, 1.0).unwrap();
    assert!(cube
        .capabilities_mut()
        .attach_render_mode(RenderMode::Solid)
        .is_none());

    let old = cube.capabilities_mut().attach_render_mode(RenderMode::Textured);
    assert_eq!(old, Some(RenderMode::Solid));
    assert_eq!(cube.capabilities().render_mode(), Some(RenderMode::Textured));
}

#[test]
fn unattached_capabilities_read_as_none() {
    let circle = Circle::new(Point2f::zero(), 1.0).unwrap();
    let caps = circle.capabilities();
    assert!(caps.is_empty());
    assert!(caps.appearance().is_none());
    assert!(caps.fill().is_none());
    assert!(caps.transform().is_none());
    assert!(caps.render_mode().is_none());
}

#[test]
fn color_names_cover_the_palette() {
    assert_eq!(Color::from_name("red"), Some(Color::RED));
    assert_eq!(Color::from_name("grey"), Some(Color::GRAY));
    assert_eq!(Color::from_name("heliotrope"), None);
}

#[test]
fn serialize_round_trips_parameters() {
    let mut source = Rectangle::new(Point2f::new(1.0, 2.0), 3.0, 4.0).unwrap();
    source
        .capabilities_mut()
        .attach_fill(Fill::with_color(Color::CYAN));
    let payload = source.serialize().unwrap();

    let mut restored = Rectangle::new(Point2f::zero(), 1.0, 1.0).unwrap();
    let id = restored.id();
    restored
        .capabilities_mut()
        .attach_render_mode(RenderMode::Solid);
    restored.deserialize(&payload).unwrap();

    assert_eq!(restored.width(), 3.0);
    assert_eq!(restored.height(), 4.0);
    assert_eq!(restored.position(), Point2f::new(1.0, 2.0));

    // Identity and attached capabilities stay local to the instance.
    assert_eq!(restored.id(), id);
    assert_eq!(restored.capabilities().render_mode(), Some(RenderMode::Solid));
    assert!(restored.capabilities().fill().is_none());
}

#[test]
fn sphere_round_trip_keeps_z() {
    let source = Sphere::new(Point2f::new(0.5, -0.5), 2.5, 1.5).unwrap();
    let payload = source.serialize().unwrap();

    let mut restored = Sphere::new(Point2f::zero(), 0.0, 1.0).unwrap();
    restored.deserialize(&payload).unwrap();
    assert_eq!(restored.radius(), 1.5);
    assert_eq!(restored.z(), 2.5);
    assert_eq!(restored.position(), Point2f::new(0.5, -0.5));
}

#[test]
fn garbage_input_is_malformed_data() {
    let mut circle = Circle::new(Point2f::zero(), 1.0).unwrap();
    let err = circle.deserialize("not a payload").unwrap_err();
    assert!(matches!(err, GeomError::MalformedData(_)));

    // The shape is untouched.
    assert_eq!(circle.radius(), 1.0);
}

#[test]
fn parseable_but_invalid_values_are_rejected() {
    let mut circle = Circle::new(Point2f::zero(), 1.0).unwrap();
    let err = circle
        .deserialize(r#"{"x":0.0,"y":0.0,"radius":-2.0}"#)
        .unwrap_err();
    assert!(matches!(err, GeomError::InvalidParameter { .. }));
    assert_eq!(circle.radius(), 1.0);
}
