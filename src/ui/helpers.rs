//! Small layout and animation helpers shared by the screens

use ratatui::layout::Rect;

/// Spinner frames for the pending-request indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame; the UI ticks every 16ms
const TICKS_PER_FRAME: u64 = 5;

/// Spinner frame for the given tick count
pub fn spinner_frame(tick_count: u64) -> &'static str {
    let index = (tick_count / TICKS_PER_FRAME) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[index]
}

/// A `width` x `height` rect centered in `area`, clamped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
