//! Permanent anchors and the markers a renderer draws for them.
//!
//! An anchor is a point mass pinned for the life of the grid. Anchors that
//! carry a visible marker are registered here under an [`AnchorId`] so a
//! pointer pick on the marker can be resolved back to its grid cell.

use crate::error::DrapeError;
use crate::float::Float;
use crate::system::PointMassSystem;
use crate::topology::GridCoord;
use crate::transform::WorldTransform;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::Rng;

/// Opaque handle for a marker-bearing anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub usize);

/// Mapping from anchor id to grid coordinate.
#[derive(Clone, Debug, Default)]
pub struct AnchorSet {
    coords: AllocVec<GridCoord>,
}

impl AnchorSet {
    pub fn new() -> Self {
        AnchorSet::default()
    }

    /// Pin `c` and register a marker for it.
    pub fn add<F, S>(&mut self, system: &mut S, c: GridCoord) -> Result<AnchorId, DrapeError>
    where
        F: Float,
        S: PointMassSystem<F> + ?Sized,
    {
        let topology = system.topology();
        topology.checked_index(c)?;
        if let Some(p) = system.point_at_mut(c) {
            p.pin();
        }
        let id = AnchorId(self.coords.len());
        self.coords.push(c);
        log::trace!("anchor {} pinned at ({}, {})", id.0, c.i, c.j);
        Ok(id)
    }

    /// Pin `count` uniformly random cells. The same cell may be drawn more
    /// than once; it then has several markers.
    pub fn scatter<F, S, R>(&mut self, system: &mut S, rng: &mut R, count: usize) -> AllocVec<AnchorId>
    where
        F: Float,
        S: PointMassSystem<F> + ?Sized,
        R: Rng + ?Sized,
    {
        let topology = system.topology();
        let mut ids = AllocVec::with_capacity(count);
        for _ in 0..count {
            let c = GridCoord::new(
                rng.random_range(0..topology.width()),
                rng.random_range(0..topology.height()),
            );
            if let Ok(id) = self.add(system, c) {
                ids.push(id);
            }
        }
        log::debug!("scattered {} anchors", ids.len());
        ids
    }

    pub fn coord(&self, id: AnchorId) -> Result<GridCoord, DrapeError> {
        self.coords.get(id.0).copied().ok_or(DrapeError::UnknownAnchor(id))
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnchorId, GridCoord)> + '_ {
        self.coords.iter().enumerate().map(|(n, &c)| (AnchorId(n), c))
    }

    /// World position of an anchor's marker: its point's current position
    /// through `transform`.
    pub fn marker_position<F, S>(
        &self,
        id: AnchorId,
        system: &S,
        transform: &WorldTransform<F>,
    ) -> Result<Vec2<F>, DrapeError>
    where
        F: Float,
        S: PointMassSystem<F> + ?Sized,
    {
        let c = self.coord(id)?;
        let topology = system.topology();
        let point = system.point_at(c).ok_or(DrapeError::PointOutOfBounds {
            i: c.i,
            j: c.j,
            width: topology.width(),
            height: topology.height(),
        })?;
        Ok(transform.to_world(point.pos))
    }
}
