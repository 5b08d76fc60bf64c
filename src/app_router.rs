use std::cell::RefCell;

use web_sys::UrlSearchParams;

/// Boot-time knobs read from the page URL once, before the first render:
/// `?lobby` keeps the legacy lobby step in the flow, `?tasks_base=` points
/// the task fetch somewhere other than the default backend.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct InitConfig {
    pub(crate) legacy_lobby: bool,
    pub(crate) task_base: String,
}

pub(crate) const DEFAULT_TASK_BASE: &str = "http://localhost:8000";

thread_local! {
    static INIT_CONFIG: RefCell<Option<InitConfig>> = RefCell::new(None);
}

pub(crate) fn set_init_config(config: InitConfig) {
    INIT_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

/// The config captured at boot; reloads from the URL if boot never ran
/// (tests mount components directly).
pub(crate) fn init_config() -> InitConfig {
    INIT_CONFIG
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(load_init_config)
}

pub(crate) fn load_init_config() -> InitConfig {
    let legacy_lobby = query_value("lobby")
        .map(|value| parse_flag(&value))
        .unwrap_or(false);
    let task_base = query_value("tasks_base")
        .map(|raw| normalize_base(&raw))
        .filter(|base| !base.is_empty())
        .unwrap_or_else(default_task_base);
    InitConfig {
        legacy_lobby,
        task_base,
    }
}

pub(crate) fn default_task_base() -> String {
    if let Some(raw) = option_env!("CHOOSER_TASKS_BASE")
        .or(option_env!("TRUNK_PUBLIC_TASKS_BASE"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return normalize_base(trimmed);
        }
    }
    DEFAULT_TASK_BASE.to_string()
}

fn query_value(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// A bare `?lobby` counts as enabled.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "1" | "true" | "yes" | "on"
    )
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn flag_values() {
        assert!(parse_flag(""));
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }

    #[wasm_bindgen_test]
    fn base_normalization() {
        assert_eq!(normalize_base("http://host:8000/"), "http://host:8000");
        assert_eq!(normalize_base("  http://host "), "http://host");
    }

    #[wasm_bindgen_test]
    fn default_base_is_local_backend() {
        assert!(load_init_config().task_base.starts_with("http"));
    }
}
