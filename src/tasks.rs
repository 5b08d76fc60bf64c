use gloo::net::http::Request;

use chooser_core::{parse_task_body, task_url, Difficulty, TaskSource};

/// Resolves to the fetched task text or the source's fixed fallback; the
/// caller never sees an error and never waits on a retry.
pub(crate) async fn fetch_task(base: &str, source: TaskSource, difficulty: Difficulty) -> String {
    match request_task(base, source, difficulty).await {
        Some(text) => text,
        None => source.fallback().to_string(),
    }
}

async fn request_task(base: &str, source: TaskSource, difficulty: Difficulty) -> Option<String> {
    let url = task_url(base, source, difficulty);
    let response = match Request::get(&url).send().await {
        Ok(response) => response,
        Err(err) => {
            gloo::console::warn!("task fetch failed", url, err.to_string());
            return None;
        }
    };
    if !response.ok() {
        gloo::console::warn!("task fetch rejected", url, response.status().to_string());
        return None;
    }
    let body = response.text().await.ok()?;
    let parsed = parse_task_body(source, &body);
    if parsed.is_none() {
        gloo::console::warn!("task body unreadable", url);
    }
    parsed
}
