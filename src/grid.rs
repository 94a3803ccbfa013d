//! Point-mass grid: the owned point array plus its structural links.

use crate::error::DrapeError;
use crate::float::Float;
use crate::link::Link;
use crate::point::PointMass;
use crate::topology::{GridCoord, Topology};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::Rng;

/// A `width x height` lattice of point masses.
///
/// Point `(i, j)` starts at `(i * spacing, j * spacing)` in grid space,
/// which is y-down: row 0 is the top and a positive `y` force pulls toward
/// the bottom rows. Each cell is linked to its right and bottom neighbor
/// with a rest length of `spacing`. The topology never changes after
/// construction.
#[derive(Clone, Debug)]
pub struct PointGrid<F: Float> {
    topology: Topology,
    points: AllocVec<PointMass<F>>,
    links: AllocVec<Link<F>>,
    spacing: F,
}

impl<F: Float> PointGrid<F> {
    pub fn new(width: usize, height: usize, spacing: F) -> Result<Self, DrapeError> {
        let topology = Topology::new(width, height)?;
        if !(spacing.is_finite() && spacing > F::zero()) {
            return Err(DrapeError::InvalidSpacing);
        }

        let mut points = AllocVec::with_capacity(topology.cell_count());
        for j in 0..height {
            for i in 0..width {
                let x = F::from_usize(i) * spacing;
                let y = F::from_usize(j) * spacing;
                points.push(PointMass::new(Vec2::new(x, y)));
            }
        }

        let links: AllocVec<_> = topology
            .links()
            .map(|(a, b)| Link::new(a, b, spacing, F::one()))
            .collect();

        log::debug!(
            "built {}x{} point grid with {} links",
            width,
            height,
            links.len()
        );

        Ok(PointGrid { topology, points, links, spacing })
    }

    pub fn topology(&self) -> Topology { self.topology }
    pub fn width(&self) -> usize { self.topology.width() }
    pub fn height(&self) -> usize { self.topology.height() }
    pub fn spacing(&self) -> F { self.spacing }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    pub fn point_at(&self, c: GridCoord) -> Option<&PointMass<F>> {
        let idx = self.topology.index(c)?;
        Some(&self.points[idx])
    }

    pub fn point_at_mut(&mut self, c: GridCoord) -> Option<&mut PointMass<F>> {
        let idx = self.topology.index(c)?;
        Some(&mut self.points[idx])
    }

    pub fn points(&self) -> &[PointMass<F>] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [PointMass<F>] {
        &mut self.points
    }

    pub fn links(&self) -> &[Link<F>] {
        &self.links
    }

    /// Split borrow used by the solver: links read-only, points mutable.
    pub(crate) fn links_and_points_mut(&mut self) -> (&[Link<F>], &mut [PointMass<F>]) {
        (&self.links, &mut self.points)
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    pub fn pin(&mut self, c: GridCoord) -> Result<(), DrapeError> {
        let idx = self.topology.checked_index(c)?;
        self.points[idx].pin();
        Ok(())
    }

    pub fn pin_row(&mut self, j: usize) -> Result<(), DrapeError> {
        for i in 0..self.width() {
            self.pin(GridCoord::new(i, j))?;
        }
        Ok(())
    }

    /// Nudge every point by up to `amount` per axis. The previous position
    /// moves with it, so the perturbation carries no velocity.
    pub fn jitter<R: Rng + ?Sized>(&mut self, rng: &mut R, amount: F) {
        if !(amount.is_finite() && amount > F::zero()) {
            return;
        }
        // Sample a unit offset and scale in `F`, so tiny f64 amounts do not
        // collapse to an empty f32 range.
        for p in self.points.iter_mut() {
            let dx = F::from_f32(rng.random_range(-1.0f32..1.0)) * amount;
            let dy = F::from_f32(rng.random_range(-1.0f32..1.0)) * amount;
            p.pos = p.pos + Vec2::new(dx, dy);
            p.settle();
        }
    }

    /// The cell whose current position is closest to `pos`.
    ///
    /// Ties go to the lowest flat index. Returns `None` only for a
    /// non-finite query.
    pub fn nearest(&self, pos: Vec2<F>) -> Option<GridCoord> {
        if !pos.is_finite() {
            return None;
        }
        let mut best: Option<(usize, F)> = None;
        for (idx, p) in self.points.iter().enumerate() {
            let d = p.pos.distance_sq(pos);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((idx, d)),
            }
        }
        best.map(|(idx, _)| self.topology.coord(idx))
    }
}
