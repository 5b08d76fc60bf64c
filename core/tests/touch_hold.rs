use chooser_core::{
    key_touch_id, HoldGate, HoldPhase, TouchMap, HOLD_DURATION_MS, HOLD_TICK_MS,
};

#[test]
fn press_and_release_track_slots() {
    let mut map = TouchMap::new(3);
    assert!(map.press(10, 0));
    assert!(map.press(11, 2));
    assert_eq!(map.held_flags(), vec![true, false, true]);
    assert_eq!(map.held_count(), 2);
    assert!(!map.all_held());

    assert!(map.press(12, 1));
    assert!(map.all_held());

    assert_eq!(map.release(11), Some(2));
    assert!(!map.all_held());
    assert_eq!(map.release(11), None);
}

#[test]
fn same_identifier_never_counts_twice() {
    let mut map = TouchMap::new(2);
    assert!(map.press(5, 0));
    assert!(!map.press(5, 0));
    assert!(!map.press(5, 1));
    assert_eq!(map.release(5), Some(0));
    assert!(!map.is_held(0));
}

#[test]
fn out_of_range_slot_is_ignored() {
    let mut map = TouchMap::new(2);
    assert!(!map.press(1, 2));
    assert_eq!(map.held_flags(), vec![false, false]);
}

#[test]
fn two_touches_on_one_slot_need_both_releases() {
    let mut map = TouchMap::new(2);
    map.press(1, 0);
    map.press(2, 0);
    map.release(1);
    assert!(map.is_held(0));
    map.release(2);
    assert!(!map.is_held(0));
}

#[test]
fn keyboard_ids_share_the_map_with_touches() {
    let mut map = TouchMap::new(2);
    assert!(map.press(0, 0));
    assert!(map.press(key_touch_id(1), 1));
    assert!(map.all_held());
    map.release(key_touch_id(1));
    assert!(!map.all_held());
}

#[test]
fn clear_drops_everything() {
    let mut map = TouchMap::new(3);
    map.press(1, 0);
    map.press(2, 1);
    map.clear();
    assert_eq!(map.held_count(), 0);
    // Cleared identifiers are free to press again.
    assert!(map.press(1, 2));
}

#[test]
fn release_before_deadline_resets_progress_to_zero() {
    let mut gate = HoldGate::new();
    gate.set_all_held(true);
    for _ in 0..15 {
        assert!(!gate.tick());
    }
    assert_eq!(gate.progress_ms(), 15 * HOLD_TICK_MS);

    gate.set_all_held(false);
    assert_eq!(gate.phase(), HoldPhase::Idle);
    assert_eq!(gate.progress_ms(), 0);

    // No partial credit on the next hold.
    gate.set_all_held(true);
    assert!(!gate.tick());
    assert_eq!(gate.progress_ms(), HOLD_TICK_MS);
}

#[test]
fn gate_fires_exactly_once_at_the_deadline() {
    let mut gate = HoldGate::new();
    gate.set_all_held(true);
    let ticks_to_fire = HOLD_DURATION_MS / HOLD_TICK_MS;
    let mut fired = 0;
    for _ in 0..ticks_to_fire + 10 {
        if gate.tick() {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
    assert_eq!(gate.phase(), HoldPhase::Fired);
    assert_eq!(gate.progress_ms(), HOLD_DURATION_MS);

    // A late release does not re-arm a fired gate.
    gate.set_all_held(false);
    assert_eq!(gate.phase(), HoldPhase::Fired);
    gate.reset();
    assert_eq!(gate.phase(), HoldPhase::Idle);
}

#[test]
fn idle_gate_ignores_ticks() {
    let mut gate = HoldGate::new();
    assert!(!gate.tick());
    assert_eq!(gate.progress_ms(), 0);
    assert_eq!(gate.progress_fraction(), 0.0);
}
