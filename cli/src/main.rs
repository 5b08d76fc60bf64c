use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use chooser_core::{
    random_task, Difficulty, GameConfig, GameSession, GameType, PlayerId, SettleEffect,
    TaskVerdict, SPIN_FRAMES, TASK_FALLBACK_RANDOM,
};

#[derive(Parser)]
#[command(
    name = "chooser-cli",
    version,
    about = "Rehearse a chooser session in the terminal"
)]
struct Cli {
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=5))]
    players: u8,
    /// Picked (or failing) players drop out until one remains.
    #[arg(long)]
    elimination: bool,
    /// Hand the picked player a task from the built-in list.
    #[arg(long)]
    tasks: bool,
    #[arg(long, env = "CHOOSER_DIFFICULTY", default_value = "normal")]
    difficulty: Difficulty,
    /// Seed for a reproducible run; omitted means a fresh one each time.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 20)]
    rounds: u32,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let config = GameConfig {
        players: cli.players,
        elimination: cli.elimination,
        game_type: if cli.tasks {
            GameType::Tasks
        } else {
            GameType::Simple
        },
        use_ai: false,
        difficulty: cli.difficulty,
    };

    println!(
        "players: {} | elimination: {} | type: {} | difficulty: {}",
        config.players,
        config.elimination,
        config.game_type.as_str(),
        config.difficulty
    );

    match play(config, &mut rng, cli.rounds) {
        Some(winner) => println!("winner: player {}", winner + 1),
        None if config.elimination => println!("round cap reached, no winner"),
        None => {}
    }
}

fn play<R: Rng>(config: GameConfig, rng: &mut R, rounds: u32) -> Option<PlayerId> {
    let mut session = GameSession::new(config);
    for round in 1..=rounds {
        play_round(&mut session, rng, round);
        if let Some(winner) = session.take_winner() {
            return Some(winner);
        }
    }
    None
}

fn play_round<R: Rng>(session: &mut GameSession, rng: &mut R, round: u32) {
    let mut frames = Vec::new();
    for _ in 0..SPIN_FRAMES {
        if let Some(id) = session.draw(rng) {
            frames.push((id + 1).to_string());
        }
    }
    println!("round {round}: spin {}", frames.join(" "));

    let Some(pick) = session.draw(rng) else {
        println!("round {round}: nobody left to pick");
        return;
    };
    println!("round {round}: picked player {}", pick + 1);

    let config = session.config();
    let verdict = if config.game_type == GameType::Tasks {
        let task = random_task(config.difficulty, rng).unwrap_or(TASK_FALLBACK_RANDOM);
        println!("round {round}: task: {task}");
        if session.needs_verdict() {
            // Coin flip stands in for the group's completed/failed call.
            let completed = rng.gen_bool(0.5);
            println!(
                "round {round}: task {}",
                if completed { "completed" } else { "failed" }
            );
            if completed {
                TaskVerdict::Completed
            } else {
                TaskVerdict::Failed
            }
        } else {
            TaskVerdict::NotRequired
        }
    } else {
        TaskVerdict::NotRequired
    };

    if session.settle(pick, verdict) == SettleEffect::Eliminated {
        println!("round {round}: player {} is out", pick + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(players: u8, elimination: bool, game_type: GameType) -> GameConfig {
        GameConfig {
            players,
            elimination,
            game_type,
            use_ai: false,
            difficulty: Difficulty::Normal,
        }
    }

    #[test]
    fn elimination_session_finds_a_winner() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let winner = play(config(4, true, GameType::Simple), &mut rng, 20);
        assert!(winner.is_some());
        assert!((winner.unwrap()) < 4);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut first = ChaCha8Rng::seed_from_u64(99);
        let mut second = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(
            play(config(5, true, GameType::Tasks), &mut first, 50),
            play(config(5, true, GameType::Tasks), &mut second, 50)
        );
    }

    #[test]
    fn no_elimination_never_ends() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(play(config(3, false, GameType::Simple), &mut rng, 10), None);
    }
}
