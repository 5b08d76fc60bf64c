use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use chooser_core::{pick_active, Roster};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn pick_stays_inside_active_subset() {
    let mut rng = rng(7);
    for count in 2..=5usize {
        let mut roster = Roster::new(count);
        while roster.active_count() > 0 {
            for _ in 0..50 {
                let chosen = pick_active(&roster, &mut rng).expect("active players remain");
                assert!(roster.is_active(chosen));
            }
            let victim = pick_active(&roster, &mut rng).unwrap();
            assert!(roster.eliminate(victim));
        }
    }
}

#[test]
fn empty_active_subset_picks_nothing() {
    let mut rng = rng(11);
    let mut roster = Roster::new(3);
    for id in 0..3 {
        roster.eliminate(id);
    }
    let before = roster.clone();
    assert_eq!(pick_active(&roster, &mut rng), None);
    assert_eq!(roster, before);
}

#[test]
fn every_active_player_is_reachable() {
    let mut rng = rng(23);
    let mut roster = Roster::new(5);
    roster.eliminate(1);
    roster.eliminate(3);

    let mut seen = [false; 5];
    for _ in 0..500 {
        let chosen = pick_active(&roster, &mut rng).unwrap();
        seen[chosen] = true;
    }
    assert_eq!(seen, [true, false, true, false, true]);
}

#[test]
fn consecutive_draws_are_independent() {
    // No anti-repeat constraint: with two active players, 200 draws must
    // produce at least one immediate repeat.
    let mut rng = rng(31);
    let roster = Roster::new(2);
    let mut last = None;
    let mut repeated = false;
    for _ in 0..200 {
        let chosen = pick_active(&roster, &mut rng).unwrap();
        if last == Some(chosen) {
            repeated = true;
        }
        last = Some(chosen);
    }
    assert!(repeated);
}
