//! Pointer-driven grab, drag, and release of single points.

use crate::anchor::{AnchorId, AnchorSet};
use crate::float::Float;
use crate::system::PointMassSystem;
use crate::topology::GridCoord;
use crate::vec::Vec2;

/// What a pointer-down hit, already projected into grid space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Pick<F: Float> {
    /// An anchor marker directly under the pointer.
    Anchor(AnchorId),
    /// The picking plane, at this grid-space point.
    Plane(Vec2<F>),
    /// Nothing under the pointer.
    Miss,
}

/// Pointer input in grid space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent<F: Float> {
    Down(Pick<F>),
    Move(Vec2<F>),
    Up,
}

/// Controller state. At most one point is ever selected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Selected(GridCoord),
}

/// The grab/drag/release state machine.
///
/// While a point is selected it is grab-pinned (zero inverse mass, old
/// value saved on the point) so the solver leaves it alone, and pointer
/// moves overwrite its position directly.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
    state: DragState,
}

impl Interaction {
    pub fn new() -> Self {
        Interaction::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn selected(&self) -> Option<GridCoord> {
        match self.state {
            DragState::Idle => None,
            DragState::Selected(c) => Some(c),
        }
    }

    pub fn apply<F, S>(&mut self, system: &mut S, anchors: &AnchorSet, event: PointerEvent<F>)
    where
        F: Float,
        S: PointMassSystem<F> + ?Sized,
    {
        match event {
            PointerEvent::Down(pick) => self.press(system, anchors, pick),
            PointerEvent::Move(pos) => self.pointer_move(system, pos),
            PointerEvent::Up => self.pointer_up(system),
        }
    }

    /// Resolve `pick` to a point and grab it, returning the selection. A
    /// pick that resolves to nothing leaves the controller idle.
    pub fn pointer_down<F, S>(
        &mut self,
        system: &mut S,
        anchors: &AnchorSet,
        pick: Pick<F>,
    ) -> Option<GridCoord>
    where
        F: Float,
        S: PointMassSystem<F> + ?Sized,
    {
        self.press(system, anchors, pick);
        self.selected()
    }

    fn press<F, S>(&mut self, system: &mut S, anchors: &AnchorSet, pick: Pick<F>)
    where
        F: Float,
        S: PointMassSystem<F> + ?Sized,
    {
        // A second press without a release would leave two grab-pins.
        self.pointer_up(system);

        let target = match pick {
            Pick::Anchor(id) => match anchors.coord(id) {
                Ok(c) => Some(c),
                Err(err) => {
                    log::warn!("ignoring pick: {}", err);
                    None
                }
            },
            Pick::Plane(pos) => system.nearest_point(pos),
            Pick::Miss => None,
        };

        let Some(c) = target else {
            log::trace!("pointer down missed the grid");
            return;
        };
        let Some(point) = system.point_at_mut(c) else {
            return;
        };
        point.grab();
        log::trace!("grabbed ({}, {}), saved inv mass {}", c.i, c.j, point.saved_inv_mass);
        self.state = DragState::Selected(c);
    }

    /// Move the selected point to `pos` on both axes. No-op when idle.
    pub fn pointer_move<F, S>(&mut self, system: &mut S, pos: Vec2<F>)
    where
        F: Float,
        S: PointMassSystem<F> + ?Sized,
    {
        let DragState::Selected(c) = self.state else {
            return;
        };
        if !pos.is_finite() {
            log::warn!("ignoring non-finite drag position");
            return;
        }
        if let Some(point) = system.point_at_mut(c) {
            point.drag_to(pos);
        }
    }

    /// Release the selected point, restoring its inverse mass and dropping
    /// its velocity. No-op when idle.
    pub fn pointer_up<F, S>(&mut self, system: &mut S)
    where
        F: Float,
        S: PointMassSystem<F> + ?Sized,
    {
        let DragState::Selected(c) = self.state else {
            return;
        };
        if let Some(point) = system.point_at_mut(c) {
            point.release();
            log::trace!("released ({}, {}), inv mass {}", c.i, c.j, point.inv_mass);
        }
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::grid::PointGrid;
    use crate::solver::VerletSystem;

    fn system() -> VerletSystem<f32> {
        VerletSystem::new(PointGrid::new(4, 4, 1.0).unwrap(), SolverConfig::new())
    }

    #[test]
    fn miss_stays_idle() {
        let mut s = system();
        let mut ctl = Interaction::new();
        assert_eq!(ctl.pointer_down(&mut s, &AnchorSet::new(), Pick::<f32>::Miss), None);
        assert_eq!(ctl.state(), DragState::Idle);
    }

    #[test]
    fn unknown_anchor_stays_idle() {
        let mut s = system();
        let mut ctl = Interaction::new();
        let pick = Pick::<f32>::Anchor(AnchorId(9));
        assert_eq!(ctl.pointer_down(&mut s, &AnchorSet::new(), pick), None);
        assert_eq!(ctl.selected(), None);
    }

    #[test]
    fn move_and_up_while_idle_are_noops() {
        let mut s = system();
        let before = s.grid().positions();
        let mut ctl = Interaction::new();
        ctl.pointer_move(&mut s, Vec2::new(3.0, 3.0));
        ctl.pointer_up(&mut s);
        assert_eq!(s.grid().positions(), before);
    }

    #[test]
    fn second_press_releases_first() {
        let mut s = system();
        let anchors = AnchorSet::new();
        let mut ctl = Interaction::new();
        ctl.pointer_down(&mut s, &anchors, Pick::Plane(Vec2::new(0.0, 0.0)));
        ctl.pointer_down(&mut s, &anchors, Pick::Plane(Vec2::new(3.0, 3.0)));
        assert_eq!(ctl.selected(), Some(GridCoord::new(3, 3)));
        assert!(!s.point_at(GridCoord::new(0, 0)).unwrap().is_pinned());
        let pinned = s.grid().points().iter().filter(|p| p.is_pinned()).count();
        assert_eq!(pinned, 1);
    }

    #[test]
    fn drag_moves_both_axes() {
        let mut s = system();
        let mut ctl = Interaction::new();
        ctl.apply(&mut s, &AnchorSet::new(), PointerEvent::Down(Pick::Plane(Vec2::new(1.0, 1.0))));
        ctl.apply(&mut s, &AnchorSet::new(), PointerEvent::Move(Vec2::new(7.0, -2.0)));
        let p = s.point_at(GridCoord::new(1, 1)).unwrap();
        assert_eq!(p.pos, Vec2::new(7.0, -2.0));
        assert_eq!(p.prev_pos, p.pos);
    }

    #[test]
    fn apply_down_matches_pointer_down() {
        let anchors = AnchorSet::new();
        let pick = Pick::Plane(Vec2::new(2.2, 0.9));

        let mut direct = system();
        let mut ctl = Interaction::new();
        let selected = ctl.pointer_down(&mut direct, &anchors, pick);

        let mut queued = system();
        let mut ctl2 = Interaction::new();
        ctl2.apply(&mut queued, &anchors, PointerEvent::Down(pick));
        assert_eq!(ctl2.selected(), selected);
        assert_eq!(selected, Some(GridCoord::new(2, 1)));
        assert_eq!(queued.grid().points(), direct.grid().points());

        ctl2.apply(&mut queued, &anchors, PointerEvent::Down(Pick::Miss));
        assert_eq!(ctl2.state(), DragState::Idle);
        assert!(!queued.point_at(GridCoord::new(2, 1)).unwrap().is_pinned());
    }
}
