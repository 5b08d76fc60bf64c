//! Per-player-count layout of the touch targets: a lookup table of
//! fractional centers resolved against the viewport, and the circular hit
//! test the touch tracker runs against it.

pub const TOUCH_TARGET_RADIUS: f32 = 48.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

const CENTERS_2: [(f32, f32); 2] = [(0.5, 0.3), (0.5, 0.6)];
const CENTERS_3: [(f32, f32); 3] = [(0.5, 0.2), (0.5, 0.45), (0.5, 0.7)];
const CENTERS_4: [(f32, f32); 4] = [(0.25, 0.3), (0.75, 0.3), (0.25, 0.6), (0.75, 0.6)];
const CENTERS_5: [(f32, f32); 5] = [
    (0.3, 0.3),
    (0.7, 0.3),
    (0.2, 0.5),
    (0.8, 0.5),
    (0.5, 0.65),
];

fn center_fractions(player_count: u8) -> Option<&'static [(f32, f32)]> {
    match player_count {
        2 => Some(&CENTERS_2),
        3 => Some(&CENTERS_3),
        4 => Some(&CENTERS_4),
        5 => Some(&CENTERS_5),
        _ => None,
    }
}

pub fn slot_center(player_count: u8, slot: usize, viewport: Viewport) -> Option<(f32, f32)> {
    let fractions = center_fractions(player_count)?;
    let (fx, fy) = fractions.get(slot)?;
    Some((fx * viewport.width, fy * viewport.height))
}

pub fn slot_centers(player_count: u8, viewport: Viewport) -> Vec<(f32, f32)> {
    center_fractions(player_count)
        .map(|fractions| {
            fractions
                .iter()
                .map(|(fx, fy)| (fx * viewport.width, fy * viewport.height))
                .collect()
        })
        .unwrap_or_default()
}

/// Slot whose circular region contains the point, if any. Regions do not
/// overlap at the table's spacings, so first match is the match.
pub fn hit_test(player_count: u8, viewport: Viewport, x: f32, y: f32) -> Option<usize> {
    let radius_sq = TOUCH_TARGET_RADIUS * TOUCH_TARGET_RADIUS;
    let fractions = center_fractions(player_count)?;
    fractions.iter().position(|(fx, fy)| {
        let dx = x - fx * viewport.width;
        let dy = y - fy * viewport.height;
        dx * dx + dy * dy <= radius_sq
    })
}
