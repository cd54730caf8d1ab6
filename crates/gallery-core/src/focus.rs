//! Single-slot proximity focus with hysteresis.
//!
//! At most one exhibit holds focus. An exhibit acquires the slot only while
//! it is empty, so evaluating exhibits in a fixed order is the whole
//! arbitration policy: the first exhibit in a tick that satisfies its enter
//! distance wins and later ones see the slot occupied.

use crate::exhibit::Exhibit;
use glam::Vec3;
use smallvec::SmallVec;

/// What the camera needs while an exhibit is focused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusTarget {
    pub exhibit_id: u32,
    pub cam_target: Vec3,
    pub look_at: Vec3,
}

impl FocusTarget {
    pub fn for_exhibit(exhibit: &Exhibit) -> Self {
        Self {
            exhibit_id: exhibit.routed_id(),
            cam_target: exhibit.camera_target(),
            look_at: exhibit.position,
        }
    }
}

/// The global focus slot. Owned by the gallery session; `focus`/`unfocus`
/// are its only mutators.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusState {
    slot: Option<FocusTarget>,
    // Exhibit cleared by an external dismiss; it may not re-acquire until the
    // player has been beyond its exit distance.
    dismissed: Option<u32>,
}

impl FocusState {
    #[inline]
    pub fn focused(&self) -> Option<&FocusTarget> {
        self.slot.as_ref()
    }

    #[inline]
    pub fn focused_id(&self) -> Option<u32> {
        self.slot.map(|t| t.exhibit_id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    #[inline]
    pub fn is_focused(&self, exhibit_id: u32) -> bool {
        self.focused_id() == Some(exhibit_id)
    }

    pub fn dismissed(&self) -> Option<u32> {
        self.dismissed
    }

    /// Claim the slot. Fails (returns false) when it is already held: no
    /// preemption, no queueing.
    pub fn focus(&mut self, target: FocusTarget) -> bool {
        if self.slot.is_some() {
            return false;
        }
        self.slot = Some(target);
        true
    }

    pub fn unfocus(&mut self) -> Option<FocusTarget> {
        self.slot.take()
    }

    /// Clear the slot from outside the proximity rule and latch the exhibit.
    pub fn dismiss(&mut self) -> Option<FocusTarget> {
        let released = self.unfocus();
        if let Some(t) = released {
            self.dismissed = Some(t.exhibit_id);
        }
        released
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTransition {
    Acquired(u32),
    Released(u32),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProximityFocusArbiter;

impl ProximityFocusArbiter {
    /// Evaluate every exhibit once, in slice order, against `player`.
    pub fn evaluate(
        &self,
        player: Vec3,
        exhibits: &[Exhibit],
        state: &mut FocusState,
    ) -> SmallVec<[FocusTransition; 2]> {
        let mut transitions = SmallVec::new();
        for exhibit in exhibits {
            let id = exhibit.routed_id();
            let dist = exhibit.distance_to(player);
            let holds = state.is_focused(id);

            if state.dismissed == Some(id) && dist > exhibit.exit_distance {
                state.dismissed = None;
            }

            if dist < exhibit.enter_distance
                && state.is_empty()
                && !holds
                && state.dismissed != Some(id)
                && state.focus(FocusTarget::for_exhibit(exhibit))
            {
                log::info!("[focus] exhibit {id} acquired at distance {dist:.2}");
                transitions.push(FocusTransition::Acquired(id));
            }

            if holds && dist > exhibit.exit_distance {
                state.unfocus();
                log::info!("[focus] exhibit {id} released at distance {dist:.2}");
                transitions.push(FocusTransition::Released(id));
            }
        }
        transitions
    }
}
