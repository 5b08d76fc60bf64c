use rand::Rng;

use crate::config::Difficulty;

#[derive(Clone, Copy, Debug)]
pub struct TaskCatalogEntry {
    pub text: &'static str,
    pub difficulty: Difficulty,
}

/// Built-in task list used by offline rehearsals; the server keeps its own.
pub const TASK_CATALOG: &[TaskCatalogEntry] = &[
    TaskCatalogEntry {
        text: "Do ten squats",
        difficulty: Difficulty::Easy,
    },
    TaskCatalogEntry {
        text: "Impersonate an animal until someone guesses it",
        difficulty: Difficulty::Easy,
    },
    TaskCatalogEntry {
        text: "Hold a plank for twenty seconds",
        difficulty: Difficulty::Easy,
    },
    TaskCatalogEntry {
        text: "Speak only in a whisper until your next turn",
        difficulty: Difficulty::Easy,
    },
    TaskCatalogEntry {
        text: "Sing the chorus of a song the group picks",
        difficulty: Difficulty::Normal,
    },
    TaskCatalogEntry {
        text: "Tell a joke that gets at least one laugh",
        difficulty: Difficulty::Normal,
    },
    TaskCatalogEntry {
        text: "Name ten capital cities in thirty seconds",
        difficulty: Difficulty::Normal,
    },
    TaskCatalogEntry {
        text: "Swap seats and mannerisms with the player to your left",
        difficulty: Difficulty::Normal,
    },
    TaskCatalogEntry {
        text: "Dance for ten seconds with full commitment",
        difficulty: Difficulty::Hard,
    },
    TaskCatalogEntry {
        text: "Improvise a one-minute speech on a topic the group picks",
        difficulty: Difficulty::Hard,
    },
    TaskCatalogEntry {
        text: "Impersonate another player until someone names them",
        difficulty: Difficulty::Hard,
    },
];

pub fn tasks_for(difficulty: Difficulty) -> Vec<&'static str> {
    TASK_CATALOG
        .iter()
        .filter(|entry| entry.difficulty == difficulty)
        .map(|entry| entry.text)
        .collect()
}

pub fn random_task<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Option<&'static str> {
    let tasks = tasks_for(difficulty);
    if tasks.is_empty() {
        return None;
    }
    Some(tasks[rng.gen_range(0..tasks.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DIFFICULTIES;

    #[test]
    fn every_difficulty_has_tasks() {
        for difficulty in DIFFICULTIES {
            assert!(!tasks_for(difficulty).is_empty(), "{difficulty} is empty");
        }
    }
}
