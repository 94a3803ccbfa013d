//! The point-mass system capability the packer and the interaction
//! controller are written against.

use crate::float::Float;
use crate::point::PointMass;
use crate::topology::{GridCoord, Topology};
use crate::vec::Vec2;

/// A steppable grid of point masses.
///
/// Implementations must honor the following when [`step`](Self::step)
/// returns:
/// - points with `inv_mass > 0` have moved under the constant force and
///   their neighbor links;
/// - points with `inv_mass == 0` have not moved, whatever the force;
/// - all positions are final, so they can be read right away.
///
/// Pin state may change between any two steps and the implementation must
/// stay stable when it does.
pub trait PointMassSystem<F: Float> {
    fn topology(&self) -> Topology;

    fn point_at(&self, c: GridCoord) -> Option<&PointMass<F>>;

    fn point_at_mut(&mut self, c: GridCoord) -> Option<&mut PointMass<F>>;

    /// The cell nearest to `pos` in grid space.
    fn nearest_point(&self, pos: Vec2<F>) -> Option<GridCoord>;

    /// Advance every point by `dt`.
    fn step(&mut self, dt: F);

    fn width(&self) -> usize {
        self.topology().width()
    }

    fn height(&self) -> usize {
        self.topology().height()
    }
}
