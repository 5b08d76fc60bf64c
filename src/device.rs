//! Best-effort device surface: vibration, viewport size, orientation.

pub(crate) fn vibrate(duration_ms: u32) {
    // No success contract; browsers without the API just report false.
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().vibrate_with_duration(duration_ms);
    }
}

pub(crate) fn viewport_size() -> (f32, f32) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Treats environments without matchMedia (and desktops reporting nothing)
/// as portrait so the advisory never blocks them.
pub(crate) fn is_portrait() -> bool {
    media_query_matches("(orientation: portrait)", true)
}

/// Coarse-pointer devices are the ones the rotate advisory is for; desktops
/// on the keyboard fallback stay usable in landscape.
pub(crate) fn is_handheld() -> bool {
    media_query_matches("(pointer: coarse)", false)
}

fn media_query_matches(query: &str, fallback: bool) -> bool {
    let Some(window) = web_sys::window() else {
        return fallback;
    };
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        _ => fallback,
    }
}
