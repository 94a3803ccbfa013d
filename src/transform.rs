//! Mapping between grid space (y-down) and world space (y-up).

use crate::error::DrapeError;
use crate::float::Float;
use crate::vec::Vec2;

/// `world = (x * scale + origin.x, -y * scale + origin.y)`.
///
/// The vertex buffer is written in the line's local frame, i.e. the same
/// mapping without the origin; the renderer places the line at `origin`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldTransform<F: Float> {
    scale: F,
    origin: Vec2<F>,
}

impl<F: Float> WorldTransform<F> {
    pub fn new(scale: F, origin: Vec2<F>) -> Result<Self, DrapeError> {
        if !(scale.is_finite() && scale > F::zero()) {
            return Err(DrapeError::InvalidScale);
        }
        Ok(WorldTransform { scale, origin })
    }

    /// Origin at `(-scale * width / 2, scale * height / 2)`, which centers a
    /// unit-spaced grid on the world origin.
    pub fn centered(width: usize, height: usize, scale: F) -> Result<Self, DrapeError> {
        let origin = Vec2::new(
            -scale * F::from_usize(width) / F::two(),
            scale * F::from_usize(height) / F::two(),
        );
        Self::new(scale, origin)
    }

    pub fn scale(&self) -> F { self.scale }
    pub fn origin(&self) -> Vec2<F> { self.origin }

    /// Grid position in the line's local frame.
    pub fn to_local(&self, p: Vec2<F>) -> Vec2<F> {
        Vec2::new(p.x * self.scale, -p.y * self.scale)
    }

    pub fn to_world(&self, p: Vec2<F>) -> Vec2<F> {
        self.to_local(p) + self.origin
    }

    /// Inverse of [`to_world`](Self::to_world), used to project a picked
    /// world point back into grid space.
    pub fn to_grid(&self, world: Vec2<F>) -> Vec2<F> {
        Vec2::new(
            (world.x - self.origin.x) / self.scale,
            (-world.y + self.origin.y) / self.scale,
        )
    }
}
