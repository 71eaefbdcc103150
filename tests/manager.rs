use shapekit::core::base::*;
use shapekit::core::display::DrawTarget;
use shapekit::core::manager::ShapeManager;
use shapekit::core::shape::*;
use shapekit::shapes::*;
use shapekit::targets::LogTarget;

const TOLERANCE: Float = 1e-9;

/// Records every call it receives, in order.
struct RecordingTarget {
    draws: Vec<(EntityId, ShapeKind)>,
    renders: Vec<(EntityId, ShapeKind)>,
}

impl RecordingTarget {
    fn new() -> Self {
        RecordingTarget {
            draws: Vec::new(),
            renders: Vec::new(),
        }
    }
}

impl DrawTarget for RecordingTarget {
    fn draw(&mut self, shape: &dyn Shape) {
        self.draws.push((shape.id(), shape.kind()));
    }

    fn render(&mut self, shape: &dyn Shape) {
        self.renders.push((shape.id(), shape.kind()));
    }
}

fn rect(width: Float, height: Float) -> Box<Rectangle> {
    Box::new(Rectangle::new(Point2f::zero(), width, height).unwrap())
}

#[test]
fn total_area_sums_members() {
    let mut manager = ShapeManager::new();
    manager.add_shape(rect(5.0, 2.0));
    manager.add_shape(rect(4.0, 5.0));
    manager.add_shape(rect(6.0, 5.0));
    assert_eq!(manager.total_area(), 60.0);

    manager.add_shape(rect(5.0, 1.0));
    assert_eq!(manager.total_area(), 65.0);
}

#[test]
fn total_volume_sums_solids() {
    let mut manager = ShapeManager::new();
    manager.add_shape_3d(Box::new(Cube::new(Point2f::zero(), 0.0, 2.0).unwrap()));
    manager.add_shape_3d(Box::new(Sphere::new(Point2f::zero(), 0.0, 1.0).unwrap()));
    let expected = 8.0 + (4.0 / 3.0) * PI;
    assert!(
        (manager.total_volume() - expected).abs() < TOLERANCE,
        "total volume: {}",
        manager.total_volume()
    );
}

#[test]
fn empty_manager_aggregates_to_zero() {
    let manager = ShapeManager::new();
    assert_eq!(manager.count(), 0);
    assert_eq!(manager.count_3d(), 0);
    assert_eq!(manager.total_area(), 0.0);
    assert_eq!(manager.total_volume(), 0.0);
}

#[test]
fn draw_all_follows_insertion_order() {
    let mut manager = ShapeManager::new();
    manager.add_shape(Box::new(Circle::new(Point2f::zero(), 1.0).unwrap()));
    manager.add_shape(rect(2.0, 1.0));
    manager.add_shape(Box::new(Square::new(Point2f::zero(), 1.0).unwrap()));
    manager.add_shape_3d(Box::new(
        Cylinder::new(Point2f::zero(), 0.0, 1.0, 1.0).unwrap(),
    ));

    let mut target = RecordingTarget::new();
    manager.draw_all(&mut target);

    let kinds: Vec<ShapeKind> = target.draws.iter().map(|(_, kind)| *kind).collect();
    assert_eq!(
        kinds,
        vec![
            ShapeKind::Circle,
            ShapeKind::Rectangle,
            ShapeKind::Square,
            ShapeKind::Cylinder
        ]
    );

    // One call per member, planar members before solids, each collection
    // in insertion order.
    for pair in target.draws.windows(2) {
        assert!(pair[0].0 < pair[1].0, "ids out of order: {:?}", target.draws);
    }
    assert!(target.renders.is_empty());
}

#[test]
fn render_all_covers_both_collections() {
    let mut manager = ShapeManager::new();
    manager.add_shape(Box::new(Circle::new(Point2f::zero(), 1.0).unwrap()));
    manager.add_shape_3d(Box::new(Sphere::new(Point2f::zero(), 0.0, 1.0).unwrap()));

    let mut target = RecordingTarget::new();
    manager.render_all(&mut target);

    assert_eq!(target.renders.len(), 2);
    assert_eq!(target.renders[0].1, ShapeKind::Circle);
    assert_eq!(target.renders[1].1, ShapeKind::Sphere);
    assert!(target.draws.is_empty());
}

#[test]
fn counts_track_collections() {
    let mut manager = ShapeManager::new();
    manager.add_shape(rect(1.0, 1.0));
    manager.add_shape_3d(Box::new(Cube::new(Point2f::zero(), 0.0, 1.0).unwrap()));
    manager.add_shape_3d(Box::new(Cube::new(Point2f::zero(), 0.0, 2.0).unwrap()));
    assert_eq!(manager.count(), 1);
    assert_eq!(manager.count_3d(), 2);
}

#[test]
fn iterators_walk_members() {
    let mut manager = ShapeManager::new();
    manager.add_shape(rect(2.0, 2.0));
    manager.add_shape(rect(3.0, 1.0));

    let areas: Vec<Float> = manager.shapes().map(|s| s.area()).collect();
    assert_eq!(areas, vec![4.0, 3.0]);
    assert_eq!(manager.shapes_3d().count(), 0);
}

#[test]
fn members_can_be_mutated_in_place() {
    let mut manager = ShapeManager::new();
    manager.add_shape(Box::new(Circle::new(Point2f::zero(), 1.0).unwrap()));
    assert!((manager.total_area() - PI).abs() < TOLERANCE);

    {
        let member = manager.shape_mut(0).unwrap();
        let circle = member.as_any_mut().downcast_mut::<Circle>().unwrap();
        circle.set_radius(2.0).unwrap();
    }
    assert!(
        (manager.total_area() - 4.0 * PI).abs() < TOLERANCE,
        "total area after mutation: {}",
        manager.total_area()
    );

    // Trait-level mutation needs no concrete type.
    manager.shape_mut(0).unwrap().translate(1.0, 1.0);
    assert_eq!(manager.shape(0).unwrap().position(), Point2f::new(1.0, 1.0));
}

#[test]
fn solid_members_can_be_mutated_in_place() {
    let mut manager = ShapeManager::new();
    manager.add_shape_3d(Box::new(Cube::new(Point2f::zero(), 0.0, 1.0).unwrap()));

    {
        let member = manager.shape_3d_mut(0).unwrap();
        let cube = member.as_any_mut().downcast_mut::<Cube>().unwrap();
        cube.set_side(2.0).unwrap();
        cube.set_z(5.0);
    }
    assert_eq!(manager.total_volume(), 8.0);
    assert_eq!(manager.shape_3d(0).unwrap().z(), 5.0);
}

#[test]
fn out_of_range_access_is_none() {
    let manager = ShapeManager::new();
    assert!(manager.shape(0).is_none());
    assert!(manager.shape_3d(0).is_none());
}

// A sphere counts as planar or solid depending on which door it enters.
#[test]
fn combined_shapes_fit_either_collection() {
    let mut manager = ShapeManager::new();
    manager.add_shape(Box::new(Sphere::new(Point2f::zero(), 0.0, 1.0).unwrap()));
    manager.add_shape_3d(Box::new(Sphere::new(Point2f::zero(), 0.0, 1.0).unwrap()));

    assert_eq!(manager.count(), 1);
    assert_eq!(manager.count_3d(), 1);
    assert!((manager.total_area() - PI).abs() < TOLERANCE);
    assert!((manager.total_volume() - (4.0 / 3.0) * PI).abs() < TOLERANCE);
}

#[test]
fn log_target_smoke() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut manager = ShapeManager::new();
    manager.add_shape(Box::new(Circle::new(Point2f::zero(), 1.0).unwrap()));
    manager.add_shape_3d(Box::new(
        Cylinder::new(Point2f::zero(), 0.0, 1.0, 2.0).unwrap(),
    ));

    let mut target = LogTarget::new();
    manager.draw_all(&mut target);
    manager.render_all(&mut target);
}
