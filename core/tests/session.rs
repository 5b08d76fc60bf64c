use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use chooser_core::{
    Difficulty, GameConfig, GameSession, GameType, SettleEffect, TaskVerdict,
};

fn config(players: u8, elimination: bool, game_type: GameType) -> GameConfig {
    GameConfig {
        players,
        elimination,
        game_type,
        use_ai: false,
        difficulty: Difficulty::Normal,
    }
}

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn simple_elimination_runs_down_to_a_winner() {
    // players=3, elimination, simple: each settled round removes the chosen
    // player; after two rounds the last id standing is the winner.
    let mut rng = rng(42);
    let mut session = GameSession::new(config(3, true, GameType::Simple));

    let first = session.draw(&mut rng).unwrap();
    assert_eq!(session.settle(first, TaskVerdict::NotRequired), SettleEffect::Eliminated);
    assert!(!session.roster().is_active(first));
    assert_eq!(session.take_winner(), None);
    assert!(session.can_select());

    let second = session.draw(&mut rng).unwrap();
    assert_ne!(second, first);
    assert_eq!(session.settle(second, TaskVerdict::NotRequired), SettleEffect::Eliminated);

    let winner = session.take_winner().expect("one player left");
    assert_ne!(winner, first);
    assert_ne!(winner, second);
    assert!(session.roster().is_active(winner));
    assert!(!session.can_select());
}

#[test]
fn active_set_never_grows() {
    let mut rng = rng(9);
    let mut session = GameSession::new(config(5, true, GameType::Simple));
    let mut previous = session.roster().active_ids();
    while session.can_select() {
        let chosen = session.draw(&mut rng).unwrap();
        session.settle(chosen, TaskVerdict::NotRequired);
        let current = session.roster().active_ids();
        assert!(current.len() < previous.len());
        assert!(current.iter().all(|id| previous.contains(id)));
        previous = current;
    }
    assert_eq!(previous.len(), 1);
}

#[test]
fn winner_is_announced_exactly_once() {
    let mut session = GameSession::new(config(2, true, GameType::Simple));
    session.settle(0, TaskVerdict::NotRequired);
    assert!(session.take_winner().is_some());
    assert_eq!(session.take_winner(), None);
    assert_eq!(session.take_winner(), None);
}

#[test]
fn no_winner_without_elimination_mode() {
    let mut session = GameSession::new(config(2, false, GameType::Simple));
    // Without elimination nothing is ever removed, but even a hand-built
    // sole-active state must not announce.
    session.settle(0, TaskVerdict::NotRequired);
    assert_eq!(session.roster().active_count(), 2);
    assert_eq!(session.take_winner(), None);
}

#[test]
fn completed_task_keeps_the_player() {
    let mut session = GameSession::new(config(3, true, GameType::Tasks));
    assert!(session.needs_verdict());
    assert_eq!(session.settle(1, TaskVerdict::Completed), SettleEffect::Kept);
    assert!(session.roster().is_active(1));
}

#[test]
fn failed_task_eliminates_the_player() {
    let mut session = GameSession::new(config(3, true, GameType::Tasks));
    assert_eq!(session.settle(1, TaskVerdict::Failed), SettleEffect::Eliminated);
    assert!(!session.roster().is_active(1));
}

#[test]
fn tasks_without_elimination_never_touch_the_roster() {
    // Intentional: tasks without consequence.
    let mut session = GameSession::new(config(3, false, GameType::Tasks));
    assert!(!session.needs_verdict());
    assert_eq!(session.settle(2, TaskVerdict::Failed), SettleEffect::Kept);
    assert_eq!(session.roster().active_count(), 3);
}

#[test]
fn simple_mode_ignores_verdicts() {
    let mut session = GameSession::new(config(3, true, GameType::Simple));
    assert!(!session.needs_verdict());
    // Even a stray Completed verdict eliminates in simple elimination mode.
    assert_eq!(session.settle(0, TaskVerdict::Completed), SettleEffect::Eliminated);
}

#[test]
fn settle_on_inactive_player_changes_nothing() {
    let mut session = GameSession::new(config(3, true, GameType::Simple));
    session.settle(0, TaskVerdict::NotRequired);
    assert_eq!(session.settle(0, TaskVerdict::NotRequired), SettleEffect::Kept);
    assert_eq!(session.roster().active_count(), 2);
}
