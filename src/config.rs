//! Configuration types for the solver and the scene.

use crate::error::DrapeError;
use crate::float::Float;
use crate::vec::Vec2;

/// Configuration for the Verlet solver.
///
/// # Builder Pattern
/// ```
/// use drape::config::SolverConfig;
/// use drape::vec::Vec2;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(8)
///     .with_force(Vec2::new(0.0, 98.0))
///     .with_damping(0.99)
///     .with_sub_steps(2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Link relaxation passes per sub-step. Default: 4.
    pub iterations: usize,
    /// Uniform force applied to every unpinned point. Default: zero.
    /// Grid space is y-down, so a positive `y` pulls toward the bottom rows.
    pub force: Vec2<F>,
    /// Velocity damping factor [0, 1]. 1.0 = no damping. Default: 0.99.
    pub damping: F,
    /// Number of sub-steps per frame. Default: 1.
    pub sub_steps: usize,
}

impl<F: Float> SolverConfig<F> {
    pub fn new() -> Self {
        SolverConfig {
            iterations: 4,
            force: Vec2::zero(),
            damping: F::from_f32(0.99),
            sub_steps: 1,
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_force(mut self, force: Vec2<F>) -> Self {
        self.force = force;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping.clamp(F::zero(), F::one());
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything needed to set up a [`Scene`](crate::scene::Scene): grid
/// size, world scale, initial jitter, and the anchor policy.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig<F: Float> {
    pub width: usize,
    pub height: usize,
    /// Rest distance between neighbors in grid space. Default: 1.
    pub spacing: F,
    /// Grid-to-world scale factor. Default: 2.4.
    pub scale: F,
    /// Per-axis random perturbation applied after construction. Default: 0.01.
    pub jitter: F,
    /// Permanently pin row 0. Default: true.
    pub pin_top_row: bool,
    /// Inclusive range for the number of randomly placed anchors.
    /// Default: 3..=12.
    pub random_anchors: (usize, usize),
    pub solver: SolverConfig<F>,
}

impl<F: Float> SceneConfig<F> {
    pub fn new(width: usize, height: usize) -> Self {
        SceneConfig {
            width,
            height,
            spacing: F::one(),
            scale: F::from_f32(2.4),
            jitter: F::from_f32(0.01),
            pin_top_row: true,
            random_anchors: (3, 12),
            solver: SolverConfig::new()
                .with_force(Vec2::new(F::zero(), F::from_f32(98.0)))
                .with_iterations(8)
                .with_sub_steps(2),
        }
    }

    /// One column per `resolution` pixels across the viewport and one row
    /// per `resolution` pixels down its top two thirds.
    pub fn for_viewport(width_px: F, height_px: F, resolution: F) -> Result<Self, DrapeError> {
        if !(width_px.is_finite() && height_px.is_finite()) {
            return Err(DrapeError::InvalidResolution);
        }
        if !(resolution.is_finite() && resolution > F::zero()) {
            return Err(DrapeError::InvalidResolution);
        }
        let cells = |px: F| {
            let n = (px / resolution).floor().max(F::zero()).to_f32() as usize;
            n.saturating_add(1)
        };
        let rows_px = F::two() * height_px / F::from_f32(3.0);
        Ok(Self::new(cells(width_px), cells(rows_px)))
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_scale(mut self, scale: F) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_jitter(mut self, jitter: F) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_pin_top_row(mut self, pin: bool) -> Self {
        self.pin_top_row = pin;
        self
    }

    pub fn with_random_anchors(mut self, min: usize, max: usize) -> Self {
        self.random_anchors = (min.min(max), max.max(min));
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig<F>) -> Self {
        self.solver = solver;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_steps_never_zero() {
        let c = SolverConfig::<f32>::new().with_sub_steps(0);
        assert_eq!(c.sub_steps, 1);
    }

    #[test]
    fn viewport_sizing() {
        let c = SceneConfig::<f32>::for_viewport(1500.0, 900.0, 15.0).unwrap();
        assert_eq!(c.width, 101);
        assert_eq!(c.height, 41);
    }

    #[test]
    fn viewport_rejects_bad_resolution() {
        for res in [0.0, -15.0, f32::NAN, f32::INFINITY] {
            assert_eq!(
                SceneConfig::<f32>::for_viewport(800.0, 600.0, res).unwrap_err(),
                DrapeError::InvalidResolution
            );
        }
        assert!(SceneConfig::<f32>::for_viewport(f32::INFINITY, 600.0, 15.0).is_err());
    }

    #[test]
    fn huge_viewport_saturates() {
        let c = SceneConfig::<f32>::for_viewport(1e30, 600.0, 1e-30).unwrap();
        assert_eq!(c.width, usize::MAX);
    }

    #[test]
    fn anchor_range_is_ordered() {
        let c = SceneConfig::<f64>::new(2, 2).with_random_anchors(9, 2);
        assert_eq!(c.random_anchors, (2, 9));
    }
}
