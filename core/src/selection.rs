use rand::Rng;

use crate::roster::{PlayerId, Roster};

/// Highlight frames shown before the final draw commits.
pub const SPIN_FRAMES: u32 = 10;
pub const SPIN_TICK_MS: u32 = 200;

/// One uniform draw over the active subset, stable id order.
/// Every spin frame and the final pick are independent draws; an empty
/// active subset selects nothing.
pub fn pick_active<R: Rng>(roster: &Roster, rng: &mut R) -> Option<PlayerId> {
    let active = roster.active_ids();
    if active.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..active.len());
    Some(active[index])
}
