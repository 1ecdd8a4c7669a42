use serde::{Deserialize, Serialize};

/// Snapshot of held-key flags consumed once per tick.
///
/// The controller never sees raw key events; whatever windowing layer sits
/// above translates its events into one of these per frame. `active` is the
/// pointer-lock equivalent: while false the player is frozen in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    /// Jump requested this tick. Consumed only when jump eligibility allows.
    pub jump: bool,
    /// Whether input capture is live; gates the whole tick.
    pub active: bool,
}

impl InputState {
    /// An active snapshot with no keys held.
    pub fn idle() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// True if any movement key is held.
    pub fn any_movement(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
