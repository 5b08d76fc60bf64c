use serde::Deserialize;

use crate::config::Difficulty;

pub const TASK_FALLBACK_AI: &str = "The AI could not come up with a task";
pub const TASK_FALLBACK_RANDOM: &str = "Could not fetch a task";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskSource {
    Random,
    Ai,
}

impl TaskSource {
    pub fn from_use_ai(use_ai: bool) -> Self {
        if use_ai {
            TaskSource::Ai
        } else {
            TaskSource::Random
        }
    }

    pub fn path_segment(&self) -> &'static str {
        match self {
            TaskSource::Random => "random",
            TaskSource::Ai => "ai",
        }
    }

    /// Fixed text substituted for any fetch or parse failure.
    pub fn fallback(&self) -> &'static str {
        match self {
            TaskSource::Random => TASK_FALLBACK_RANDOM,
            TaskSource::Ai => TASK_FALLBACK_AI,
        }
    }
}

pub fn task_url(base: &str, source: TaskSource, difficulty: Difficulty) -> String {
    let base = base.trim_end_matches('/');
    format!(
        "{base}/task/{}?difficulty={}",
        source.path_segment(),
        difficulty.as_str()
    )
}

#[derive(Deserialize)]
struct AiTaskBody {
    task: String,
}

#[derive(Deserialize)]
struct RandomTaskBody {
    text: String,
}

/// The AI endpoint answers `{"task": …}`, the random endpoint `{"text": …}`.
/// Anything else, including blank task text, reads as failure.
pub fn parse_task_body(source: TaskSource, body: &str) -> Option<String> {
    let text = match source {
        TaskSource::Ai => serde_json::from_str::<AiTaskBody>(body).ok()?.task,
        TaskSource::Random => serde_json::from_str::<RandomTaskBody>(body).ok()?.text,
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_builds_per_source_and_difficulty() {
        assert_eq!(
            task_url("http://localhost:8000", TaskSource::Ai, Difficulty::Hard),
            "http://localhost:8000/task/ai?difficulty=hard"
        );
        assert_eq!(
            task_url("http://localhost:8000/", TaskSource::Random, Difficulty::Easy),
            "http://localhost:8000/task/random?difficulty=easy"
        );
    }

    #[test]
    fn body_fields_differ_per_source() {
        assert_eq!(
            parse_task_body(TaskSource::Ai, r#"{"task": "sing"}"#),
            Some("sing".to_string())
        );
        assert_eq!(
            parse_task_body(TaskSource::Random, r#"{"text": "dance", "id": 4, "difficulty": "easy"}"#),
            Some("dance".to_string())
        );
        assert_eq!(parse_task_body(TaskSource::Ai, r#"{"text": "sing"}"#), None);
        assert_eq!(parse_task_body(TaskSource::Random, r#"{"task": "sing"}"#), None);
    }

    #[test]
    fn garbage_and_blank_bodies_are_failures() {
        assert_eq!(parse_task_body(TaskSource::Ai, "not json"), None);
        assert_eq!(parse_task_body(TaskSource::Ai, r#"{"task": "  "}"#), None);
        assert_eq!(parse_task_body(TaskSource::Random, ""), None);
    }
}
