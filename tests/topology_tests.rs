use drape::{DrapeError, GridCoord, PointGrid, Topology};
use test_case::test_case;

#[test_case(1, 1)]
#[test_case(1, 6)]
#[test_case(6, 1)]
#[test_case(4, 3)]
#[test_case(9, 9)]
fn boundary_links_are_absent_exactly_on_last_column_and_row(width: usize, height: usize) {
    let t = Topology::new(width, height).unwrap();
    for j in 0..height {
        for i in 0..width {
            let c = GridCoord::new(i, j);
            assert_eq!(t.right(c).is_none(), i == width - 1, "right of ({}, {})", i, j);
            assert_eq!(t.bottom(c).is_none(), j == height - 1, "bottom of ({}, {})", i, j);
        }
    }
}

#[test_case(0, 0)]
#[test_case(0, 4)]
#[test_case(4, 0)]
fn non_positive_dimensions_rejected(width: usize, height: usize) {
    assert_eq!(
        PointGrid::<f32>::new(width, height, 1.0).unwrap_err(),
        DrapeError::InvalidDimensions { width, height }
    );
}

#[test]
fn every_link_is_owned_by_its_left_or_top_end() {
    let t = Topology::new(5, 4).unwrap();
    for (a, b) in t.links() {
        let (ca, cb) = (t.coord(a), t.coord(b));
        assert!(
            t.right(ca) == Some(cb) || t.bottom(ca) == Some(cb),
            "{:?} does not own link to {:?}",
            ca,
            cb
        );
    }
}

#[test]
fn grid_links_rest_at_spacing() {
    let grid = PointGrid::<f64>::new(3, 3, 2.5).unwrap();
    for link in grid.links() {
        let a = grid.points()[link.a].pos;
        let b = grid.points()[link.b].pos;
        assert!((a.distance(b) - link.rest_length).abs() < 1e-12);
    }
}
