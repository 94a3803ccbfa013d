use std::collections::BTreeSet;

use drape::{
    GridCoord, Interaction, AnchorSet, Pick, PointGrid, PointMassSystem, SolverConfig, Vec2,
    VerletSystem, VertexBuffer, VertexLayout, WorldTransform, SEGMENT_VERTICES,
};
use test_case::test_case;

fn unit_system(width: usize, height: usize) -> VerletSystem<f32> {
    VerletSystem::new(PointGrid::new(width, height, 1.0).unwrap(), SolverConfig::new())
}

fn identity() -> WorldTransform<f32> {
    WorldTransform::new(1.0, Vec2::zero()).unwrap()
}

/// Undo the local-frame y flip and round back to a cell.
fn cell_of(p: Vec2<f32>) -> GridCoord {
    GridCoord::new(p.x.round() as usize, (-p.y).round() as usize)
}

#[test_case(1, 1)]
#[test_case(1, 5)]
#[test_case(5, 1)]
#[test_case(2, 2)]
#[test_case(3, 4)]
#[test_case(4, 3)]
#[test_case(7, 2)]
#[test_case(16, 9)]
fn packs_exactly_one_segment_per_link(width: usize, height: usize) {
    let system = unit_system(width, height);
    let expected = (width - 1) * height + (height - 1) * width;

    for layout in [VertexLayout::Xy, VertexLayout::Xyz] {
        let mut buf = VertexBuffer::new(system.topology(), layout);
        assert_eq!(buf.len(), expected * SEGMENT_VERTICES * layout.components());
        assert_eq!(buf.pack(&system, &identity()), expected);

        let mut seen = BTreeSet::new();
        for n in 0..expected {
            let (a, b) = buf.segment(n).unwrap();
            let (ca, cb) = (cell_of(a), cell_of(b));
            let t = system.topology();
            assert!(t.right(ca) == Some(cb) || t.bottom(ca) == Some(cb), "bogus segment {:?}", (ca, cb));
            assert!(seen.insert((ca, cb)), "segment {:?} emitted twice", (ca, cb));
        }
        assert_eq!(seen.len(), expected);
    }
}

#[test]
fn z_component_is_zero() {
    let system = unit_system(3, 3);
    let mut buf = VertexBuffer::new(system.topology(), VertexLayout::Xyz);
    buf.pack(&system, &WorldTransform::new(2.4, Vec2::zero()).unwrap());
    for vertex in buf.as_slice().chunks(3) {
        assert_eq!(vertex[2], 0.0);
    }
}

#[test]
fn scale_applies_to_vertices() {
    let system = unit_system(2, 1);
    let mut buf = VertexBuffer::new(system.topology(), VertexLayout::Xy);
    buf.pack(&system, &WorldTransform::new(2.0, Vec2::new(100.0, 100.0)).unwrap());
    // Local frame: origin is left to the renderer.
    assert_eq!(buf.as_slice(), &[0.0, -0.0, 2.0, -0.0]);
}

#[test]
fn repack_reflects_new_positions_without_reallocating() {
    let mut system = unit_system(3, 3);
    let mut buf = VertexBuffer::new(system.topology(), VertexLayout::Xy);
    buf.pack(&system, &identity());
    let len = buf.len();
    let ptr = buf.as_slice().as_ptr();

    let mut ctl = Interaction::new();
    ctl.pointer_down(&mut system, &AnchorSet::new(), Pick::Plane(Vec2::new(0.0, 0.0)));
    ctl.pointer_move(&mut system, Vec2::new(-3.0, -4.0));
    buf.pack(&system, &identity());

    assert_eq!(buf.len(), len);
    assert_eq!(buf.as_slice().as_ptr(), ptr);
    let (a, _) = buf.segment(0).unwrap();
    assert_eq!(a, Vec2::new(-3.0, 4.0));
}
