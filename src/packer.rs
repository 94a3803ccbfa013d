//! Serpentine packing of the grid's links into a flat line-segment buffer.
//!
//! Columns are visited in pairs: the even column top to bottom, its odd
//! partner bottom to top. Each visited cell emits a segment to its right
//! neighbor and one to its bottom neighbor when they exist. Every link is
//! owned by its left/top end, so each appears exactly once and no visited
//! set is needed.

use crate::float::Float;
use crate::system::PointMassSystem;
use crate::topology::{GridCoord, Topology};
use crate::transform::WorldTransform;
use crate::vec::Vec2;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Component layout of each vertex in the buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexLayout {
    /// `x, y`
    Xy,
    /// `x, y, 0`
    Xyz,
}

impl VertexLayout {
    pub fn components(self) -> usize {
        match self {
            VertexLayout::Xy => 2,
            VertexLayout::Xyz => 3,
        }
    }
}

/// Vertices per segment.
pub const SEGMENT_VERTICES: usize = 2;

/// Preallocated segment endpoints for one grid topology.
///
/// The length is fixed at construction to
/// `segments * SEGMENT_VERTICES * components` and [`pack`](Self::pack) only
/// overwrites values.
#[derive(Clone, Debug)]
pub struct VertexBuffer<F: Float> {
    topology: Topology,
    layout: VertexLayout,
    data: AllocVec<F>,
}

impl<F: Float> VertexBuffer<F> {
    pub fn new(topology: Topology, layout: VertexLayout) -> Self {
        let len = topology.segment_count() * SEGMENT_VERTICES * layout.components();
        log::debug!(
            "vertex buffer for {}x{} grid: {} segments, {} values",
            topology.width(),
            topology.height(),
            topology.segment_count(),
            len
        );
        VertexBuffer { topology, layout, data: vec![F::zero(); len] }
    }

    pub fn layout(&self) -> VertexLayout { self.layout }
    pub fn topology(&self) -> Topology { self.topology }
    pub fn segment_count(&self) -> usize { self.topology.segment_count() }
    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
    pub fn as_slice(&self) -> &[F] { &self.data }

    /// Segment `n` as its two endpoints, ignoring any z component.
    pub fn segment(&self, n: usize) -> Option<(Vec2<F>, Vec2<F>)> {
        let stride = self.layout.components();
        let start = n.checked_mul(SEGMENT_VERTICES * stride)?;
        let values = self.data.get(start..start + SEGMENT_VERTICES * stride)?;
        Some((
            Vec2::new(values[0], values[1]),
            Vec2::new(values[stride], values[stride + 1]),
        ))
    }

    /// Rewrite the buffer from the system's current positions, in the
    /// transform's local frame. Returns the number of segments written.
    ///
    /// # Panics
    /// If the system's topology differs from the one the buffer was sized
    /// for, or if traversal does not land exactly on the end of the
    /// buffer. Both are packer/topology mismatches, not runtime input.
    pub fn pack<S>(&mut self, system: &S, transform: &WorldTransform<F>) -> usize
    where
        S: PointMassSystem<F> + ?Sized,
    {
        let topology = system.topology();
        assert_eq!(topology, self.topology, "vertex buffer sized for a different grid");

        let mut writer = Writer {
            data: &mut self.data,
            cursor: 0,
            layout: self.layout,
            transform,
        };
        let (width, height) = (topology.width(), topology.height());

        for i in (0..width).step_by(2) {
            for j in 0..height {
                writer.cell(system, topology, GridCoord::new(i, j));
            }
            if i + 1 < width {
                for j in (0..height).rev() {
                    writer.cell(system, topology, GridCoord::new(i + 1, j));
                }
            }
        }

        let written = writer.cursor;
        assert_eq!(
            written,
            self.data.len(),
            "packed {} values into a buffer of {}",
            written,
            self.data.len()
        );
        written / (SEGMENT_VERTICES * self.layout.components())
    }
}

struct Writer<'a, F: Float> {
    data: &'a mut [F],
    cursor: usize,
    layout: VertexLayout,
    transform: &'a WorldTransform<F>,
}

impl<F: Float> Writer<'_, F> {
    fn cell<S>(&mut self, system: &S, topology: Topology, c: GridCoord)
    where
        S: PointMassSystem<F> + ?Sized,
    {
        let Some(point) = system.point_at(c) else {
            return;
        };
        let neighbors = [topology.right(c), topology.bottom(c)];
        for n in neighbors.into_iter().flatten() {
            if let Some(other) = system.point_at(n) {
                self.vertex(point.pos);
                self.vertex(other.pos);
            }
        }
    }

    fn vertex(&mut self, p: Vec2<F>) {
        let local = self.transform.to_local(p);
        self.push(local.x);
        self.push(local.y);
        if self.layout == VertexLayout::Xyz {
            self.push(F::zero());
        }
    }

    fn push(&mut self, v: F) {
        self.data[self.cursor] = v;
        self.cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::grid::PointGrid;
    use crate::solver::VerletSystem;

    fn system(width: usize, height: usize) -> VerletSystem<f32> {
        VerletSystem::new(PointGrid::new(width, height, 1.0).unwrap(), SolverConfig::new())
    }

    #[test]
    fn buffer_length_from_topology() {
        let s = system(4, 3);
        let buf = VertexBuffer::<f32>::new(s.topology(), VertexLayout::Xyz);
        assert_eq!(buf.len(), 17 * 2 * 3);
    }

    #[test]
    fn single_cell_packs_nothing() {
        let s = system(1, 1);
        let t = WorldTransform::new(1.0, Vec2::zero()).unwrap();
        let mut buf = VertexBuffer::new(s.topology(), VertexLayout::Xy);
        assert!(buf.is_empty());
        assert_eq!(buf.pack(&s, &t), 0);
    }

    #[test]
    fn first_segments_walk_column_zero_downward() {
        let s = system(2, 3);
        let t = WorldTransform::new(1.0, Vec2::zero()).unwrap();
        let mut buf = VertexBuffer::new(s.topology(), VertexLayout::Xy);
        buf.pack(&s, &t);
        // (0,0) -> right, (0,0) -> bottom, (0,1) -> right ...
        assert_eq!(buf.segment(0), Some((Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0))));
        assert_eq!(buf.segment(1), Some((Vec2::new(0.0, 0.0), Vec2::new(0.0, -1.0))));
        assert_eq!(buf.segment(2), Some((Vec2::new(0.0, -1.0), Vec2::new(1.0, -1.0))));
        // Column 1 walks upward and only has bottom links: (1,1) -> (1,2) first.
        assert_eq!(buf.segment(5), Some((Vec2::new(1.0, -1.0), Vec2::new(1.0, -2.0))));
        assert_eq!(buf.segment(6), Some((Vec2::new(1.0, 0.0), Vec2::new(1.0, -1.0))));
        assert_eq!(buf.segment(7), None);
    }

    #[test]
    #[should_panic(expected = "different grid")]
    fn mismatched_topology_panics() {
        let s = system(3, 3);
        let t = WorldTransform::new(1.0, Vec2::zero()).unwrap();
        let mut buf = VertexBuffer::new(Topology::new(2, 3).unwrap(), VertexLayout::Xy);
        buf.pack(&s, &t);
    }
}
