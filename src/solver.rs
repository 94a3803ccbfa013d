//! Verlet integration with iterative link relaxation.

use crate::config::SolverConfig;
use crate::float::Float;
use crate::grid::PointGrid;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point::PointMass;
use crate::system::PointMassSystem;
use crate::topology::{GridCoord, Topology};
use crate::vec::Vec2;

/// A [`PointGrid`] driven by Verlet integration.
///
/// Each sub-step accumulates the constant force on every unpinned point,
/// integrates, then runs `iterations` relaxation passes over the links.
/// Pinned points take no share of a link correction, so toggling a pin
/// between steps never injects energy.
pub struct VerletSystem<F: Float, O: StepObserver = NoOpStepObserver> {
    grid: PointGrid<F>,
    config: SolverConfig<F>,
    observer: O,
}

impl<F: Float> VerletSystem<F> {
    pub fn new(grid: PointGrid<F>, config: SolverConfig<F>) -> Self {
        VerletSystem { grid, config, observer: NoOpStepObserver }
    }
}

impl<F: Float, O: StepObserver> VerletSystem<F, O> {
    pub fn with_observer(grid: PointGrid<F>, config: SolverConfig<F>, observer: O) -> Self {
        VerletSystem { grid, config, observer }
    }

    pub fn grid(&self) -> &PointGrid<F> { &self.grid }
    pub fn grid_mut(&mut self) -> &mut PointGrid<F> { &mut self.grid }
    pub fn config(&self) -> &SolverConfig<F> { &self.config }
    pub fn config_mut(&mut self) -> &mut SolverConfig<F> { &mut self.config }
    pub fn observer(&self) -> &O { &self.observer }
    pub fn into_grid(self) -> PointGrid<F> { self.grid }
}

impl<F: Float, O: StepObserver> PointMassSystem<F> for VerletSystem<F, O> {
    fn topology(&self) -> Topology {
        self.grid.topology()
    }

    fn point_at(&self, c: GridCoord) -> Option<&PointMass<F>> {
        self.grid.point_at(c)
    }

    fn point_at_mut(&mut self, c: GridCoord) -> Option<&mut PointMass<F>> {
        self.grid.point_at_mut(c)
    }

    fn nearest_point(&self, pos: Vec2<F>) -> Option<GridCoord> {
        self.grid.nearest(pos)
    }

    fn step(&mut self, dt: F) {
        if !(dt.is_finite() && dt > F::zero()) {
            return;
        }
        let sub_dt = dt / F::from_usize(self.config.sub_steps);
        let (links, points) = self.grid.links_and_points_mut();

        for _sub in 0..self.config.sub_steps {
            for p in points.iter_mut() {
                p.apply_force(self.config.force);
            }

            for p in points.iter_mut() {
                p.integrate(sub_dt, self.config.damping);
            }
            self.observer.on_integrate();

            for i in 0..self.config.iterations {
                for link in links.iter() {
                    link.solve(points);
                }
                self.observer.on_relax_iteration(i);
            }
        }

        self.observer.on_step_complete();
    }
}
