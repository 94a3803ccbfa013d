//! Point masses with implicit Verlet velocity and a grab-pin slot.

use crate::float::Float;
use crate::vec::Vec2;

/// One lattice cell of the grid.
///
/// Velocity is implicit: `pos - prev_pos`. An `inv_mass` of zero means the
/// point is pinned, either permanently (anchor) or for the duration of a
/// grab. `saved_inv_mass` holds the value to restore when a grab ends.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub force: Vec2<F>,
    pub inv_mass: F,
    pub saved_inv_mass: F,
}

impl<F: Float> PointMass<F> {
    /// A movable point with unit inverse mass, at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        PointMass {
            pos,
            prev_pos: pos,
            force: Vec2::zero(),
            inv_mass: F::one(),
            saved_inv_mass: F::one(),
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.inv_mass == F::zero()
    }

    /// Permanently pin the point. Not undone by [`release`](Self::release),
    /// even when the point is grabbed at the time.
    pub fn pin(&mut self) {
        self.inv_mass = F::zero();
        self.saved_inv_mass = F::zero();
        self.prev_pos = self.pos;
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        if !self.is_pinned() {
            self.force = self.force + force;
        }
    }

    /// Verlet step. Pinned points keep their position and drop any force.
    pub fn integrate(&mut self, dt: F, damping: F) {
        if self.is_pinned() {
            self.force = Vec2::zero();
            return;
        }
        let velocity = (self.pos - self.prev_pos).scale(damping);
        let accel = self.force.scale(self.inv_mass);
        let new_pos = self.pos + velocity + accel.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.force = Vec2::zero();
    }

    /// Drop the implied velocity.
    pub fn settle(&mut self) {
        self.prev_pos = self.pos;
    }

    /// Start a grab: remember the current inverse mass and pin.
    pub fn grab(&mut self) {
        self.saved_inv_mass = self.inv_mass;
        self.inv_mass = F::zero();
        self.settle();
    }

    /// Overwrite the position while grabbed, with zero implied velocity.
    pub fn drag_to(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// End a grab: restore the saved inverse mass and drop velocity.
    ///
    /// A point that was already an anchor saved zero, so it stays pinned.
    pub fn release(&mut self) {
        self.inv_mass = self.saved_inv_mass;
        self.settle();
    }

    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_point_ignores_force() {
        let mut p = PointMass::new(Vec2::new(5.0f32, 5.0));
        p.pin();
        p.apply_force(Vec2::new(1000.0, 1000.0));
        p.integrate(1.0 / 60.0, 1.0);
        assert_eq!(p.pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn free_point_falls_along_force() {
        let mut p = PointMass::new(Vec2::new(0.0f32, 0.0));
        for _ in 0..10 {
            p.apply_force(Vec2::new(0.0, 98.0));
            p.integrate(1.0 / 60.0, 1.0);
        }
        assert!(p.pos.y > 0.0);
        assert_eq!(p.pos.x, 0.0);
    }

    #[test]
    fn grab_release_restores_movable_mass() {
        let mut p = PointMass::new(Vec2::new(1.0f64, 1.0));
        p.prev_pos = Vec2::new(0.0, 0.0);
        p.grab();
        assert!(p.is_pinned());
        assert_eq!(p.velocity_raw(), Vec2::zero());
        p.drag_to(Vec2::new(4.0, 2.0));
        p.release();
        assert_eq!(p.inv_mass, 1.0);
        assert_eq!(p.prev_pos, p.pos);
    }

    #[test]
    fn grab_release_keeps_anchor_pinned() {
        let mut p = PointMass::new(Vec2::new(1.0f32, 1.0));
        p.pin();
        p.grab();
        p.release();
        assert!(p.is_pinned());
    }

    #[test]
    fn pin_while_grabbed_survives_release() {
        let mut p = PointMass::new(Vec2::new(1.0f32, 1.0));
        p.grab();
        p.pin();
        p.release();
        assert!(p.is_pinned());
        assert_eq!(p.saved_inv_mass, 0.0);
    }
}
