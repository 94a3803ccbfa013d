//! Frame driver tying the system, anchors, pointer input, and the vertex
//! buffer together.
//!
//! A tick runs three phases in order, each with exclusive access: the
//! solver step, then every pointer event queued since the last tick, then
//! the packer. Nothing can observe a half-applied drag because all three
//! phases go through `&mut self`.

use crate::anchor::{AnchorId, AnchorSet};
use crate::config::SceneConfig;
use crate::error::DrapeError;
use crate::float::Float;
use crate::grid::PointGrid;
use crate::interaction::{DragState, Interaction, Pick, PointerEvent};
use crate::packer::{VertexBuffer, VertexLayout};
use crate::solver::VerletSystem;
use crate::system::PointMassSystem;
use crate::topology::GridCoord;
use crate::transform::WorldTransform;
use crate::vec::Vec2;
use alloc::collections::VecDeque;
use alloc::vec::Vec as AllocVec;
use rand::Rng;

pub struct Scene<F: Float, S: PointMassSystem<F> = VerletSystem<F>> {
    system: S,
    anchors: AnchorSet,
    interaction: Interaction,
    transform: WorldTransform<F>,
    buffer: VertexBuffer<F>,
    pending: VecDeque<PointerEvent<F>>,
}

impl<F: Float> Scene<F> {
    /// Build a Verlet-backed scene from `config`: grid, jitter, top-row
    /// pin, and a random number of marker anchors drawn from `rng`.
    pub fn from_config<R: Rng + ?Sized>(
        config: &SceneConfig<F>,
        layout: VertexLayout,
        rng: &mut R,
    ) -> Result<Self, DrapeError> {
        let mut grid = PointGrid::new(config.width, config.height, config.spacing)?;
        grid.jitter(rng, config.jitter);
        if config.pin_top_row {
            grid.pin_row(0)?;
        }

        let transform = WorldTransform::centered(config.width, config.height, config.scale)?;
        let mut scene = Scene::new(VerletSystem::new(grid, config.solver.clone()), transform, layout);

        let (min, max) = config.random_anchors;
        let count = if max > min { rng.random_range(min..=max) } else { min };
        scene.anchors.scatter(&mut scene.system, rng, count);

        log::debug!(
            "scene ready: {}x{} grid, {} anchors",
            config.width,
            config.height,
            scene.anchors.len()
        );
        Ok(scene)
    }
}

impl<F: Float, S: PointMassSystem<F>> Scene<F, S> {
    /// Wrap an existing system. The vertex buffer is sized here, once.
    pub fn new(system: S, transform: WorldTransform<F>, layout: VertexLayout) -> Self {
        let buffer = VertexBuffer::new(system.topology(), layout);
        Scene {
            system,
            anchors: AnchorSet::new(),
            interaction: Interaction::new(),
            transform,
            buffer,
            pending: VecDeque::new(),
        }
    }

    pub fn system(&self) -> &S { &self.system }
    pub fn system_mut(&mut self) -> &mut S { &mut self.system }
    pub fn anchors(&self) -> &AnchorSet { &self.anchors }
    pub fn transform(&self) -> &WorldTransform<F> { &self.transform }
    pub fn vertices(&self) -> &VertexBuffer<F> { &self.buffer }
    pub fn drag_state(&self) -> DragState { self.interaction.state() }

    /// Register a marker anchor at `c`.
    pub fn add_anchor(&mut self, c: GridCoord) -> Result<AnchorId, DrapeError> {
        self.anchors.add(&mut self.system, c)
    }

    /// Queue an event for the input phase of the next tick.
    pub fn push(&mut self, event: PointerEvent<F>) {
        self.pending.push_back(event);
    }

    /// Apply an event now, between ticks.
    pub fn apply(&mut self, event: PointerEvent<F>) {
        self.interaction.apply(&mut self.system, &self.anchors, event);
    }

    /// Project a world-space pick into grid space.
    pub fn pick_world(&self, world: Option<Vec2<F>>, anchor: Option<AnchorId>) -> Pick<F> {
        match (anchor, world) {
            (Some(id), _) => Pick::Anchor(id),
            (None, Some(p)) => Pick::Plane(self.transform.to_grid(p)),
            (None, None) => Pick::Miss,
        }
    }

    pub fn world_to_grid(&self, world: Vec2<F>) -> Vec2<F> {
        self.transform.to_grid(world)
    }

    /// Solver step, queued input, then packing. Returns segments packed.
    pub fn tick(&mut self, dt: F) -> usize {
        self.system.step(dt);
        while let Some(event) = self.pending.pop_front() {
            self.interaction.apply(&mut self.system, &self.anchors, event);
        }
        self.buffer.pack(&self.system, &self.transform)
    }

    /// Repack without stepping, e.g. for the first frame.
    pub fn repack(&mut self) -> usize {
        self.buffer.pack(&self.system, &self.transform)
    }

    /// World positions of every anchor marker, in id order.
    pub fn marker_positions(&self) -> AllocVec<Vec2<F>> {
        self.anchors
            .iter()
            .filter_map(|(id, _)| self.anchors.marker_position(id, &self.system, &self.transform).ok())
            .collect()
    }
}
