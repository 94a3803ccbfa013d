//! Step observer trait for monitoring solver progress.

/// Trait for observing solver steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or profiling). All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called after all points have been integrated in a sub-step.
    fn on_integrate(&mut self) {}

    /// Called after each link relaxation pass.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called when a full `step(dt)` is complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Used as the default when no observation is needed.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
