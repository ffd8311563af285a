//! Viewer tunables.

pub const DEFAULT_SESSION_KEY: &str = "panelview.mode";
pub const DEFAULT_LIST_HINT: &str = " · Tap to return to reading";
pub const DEFAULT_EMPTY_STATUS: &str = "No episodes available";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ViewerConfig {
    /// Minimum horizontal travel, in pixels, for a swipe to turn the panel.
    pub horizontal_swipe_px: u32,
    /// Minimum vertical travel, in pixels, for a swipe to change mode.
    pub vertical_swipe_px: u32,
    pub session_key: &'static str,
    /// Appended to the status line while the episode list is shown.
    pub list_hint: &'static str,
    pub empty_status: &'static str,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            horizontal_swipe_px: 40,
            vertical_swipe_px: 50,
            session_key: DEFAULT_SESSION_KEY,
            list_hint: DEFAULT_LIST_HINT,
            empty_status: DEFAULT_EMPTY_STATUS,
        }
    }
}

impl ViewerConfig {
    pub const fn with_horizontal_swipe_px(mut self, horizontal_swipe_px: u32) -> Self {
        self.horizontal_swipe_px = horizontal_swipe_px;
        self
    }

    pub const fn with_vertical_swipe_px(mut self, vertical_swipe_px: u32) -> Self {
        self.vertical_swipe_px = vertical_swipe_px;
        self
    }
}
