//! Structural links between orthogonal neighbors.

use crate::float::Float;
use crate::point::PointMass;

/// Distance link between two neighbor cells, relaxed toward `rest_length`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
}

impl<F: Float> Link<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F) -> Self {
        Link { a, b, rest_length, stiffness }
    }

    /// Move both ends toward the rest length, split by inverse mass.
    /// Pinned ends (zero inverse mass) take none of the correction.
    pub fn solve(&self, points: &mut [PointMass<F>]) {
        let a_inv = points[self.a].inv_mass;
        let b_inv = points[self.b].inv_mass;

        let w_total = a_inv + b_inv;
        if w_total.is_near_zero(F::from_f32(1e-10)) {
            return; // both pinned
        }

        let delta = points[self.b].pos - points[self.a].pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return; // degenerate
        }

        let error = dist - self.rest_length;
        let correction = delta.scale(error * self.stiffness / dist);

        points[self.a].pos = points[self.a].pos + correction.scale(a_inv / w_total);
        points[self.b].pos = points[self.b].pos - correction.scale(b_inv / w_total);
    }
}
