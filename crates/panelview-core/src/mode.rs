//! Session-scoped display mode.

use log::debug;

const READ_VALUE: &str = "read";
const EPISODES_VALUE: &str = "episodes";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Read,
    EpisodeList,
}

impl Mode {
    /// Value written to session storage.
    pub const fn as_session_value(self) -> &'static str {
        match self {
            Self::Read => READ_VALUE,
            Self::EpisodeList => EPISODES_VALUE,
        }
    }

    /// Absent or unrecognised values decode as [`Mode::Read`].
    pub fn from_session_value(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(EPISODES_VALUE) => Self::EpisodeList,
            _ => Self::Read,
        }
    }

    pub const fn is_episode_list(self) -> bool {
        matches!(self, Self::EpisodeList)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Mode holder with the transitions the viewer allows.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ModeFlag {
    mode: Mode,
}

impl ModeFlag {
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub const fn get(self) -> Mode {
        self.mode
    }

    /// Overwrites the mode. Returns whether the value changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        let changed = self.mode != mode;
        if changed {
            debug!("mode: {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        changed
    }

    /// Up opens the episode list, down returns to reading.
    pub fn toggle_on_vertical_gesture(&mut self, direction: SwipeDirection) -> Mode {
        match direction {
            SwipeDirection::Up => {
                self.set_mode(Mode::EpisodeList);
            }
            SwipeDirection::Down => {
                self.set_mode(Mode::Read);
            }
            SwipeDirection::Left | SwipeDirection::Right => {}
        }
        self.mode
    }

    /// An externally driven position change always leaves list browsing.
    pub fn on_fragment_navigation(&mut self) -> bool {
        self.set_mode(Mode::Read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_values_round_trip() {
        for mode in [Mode::Read, Mode::EpisodeList] {
            assert_eq!(Mode::from_session_value(Some(mode.as_session_value())), mode);
        }
    }

    #[test]
    fn unknown_session_value_is_read() {
        assert_eq!(Mode::from_session_value(None), Mode::Read);
        assert_eq!(Mode::from_session_value(Some("list")), Mode::Read);
    }

    #[test]
    fn set_mode_is_idempotent() {
        let mut flag = ModeFlag::default();
        assert!(flag.set_mode(Mode::EpisodeList));
        assert!(!flag.set_mode(Mode::EpisodeList));
        assert_eq!(flag.get(), Mode::EpisodeList);
    }

    #[test]
    fn horizontal_gestures_leave_mode_alone() {
        let mut flag = ModeFlag::new(Mode::EpisodeList);
        assert_eq!(flag.toggle_on_vertical_gesture(SwipeDirection::Left), Mode::EpisodeList);
        assert_eq!(flag.toggle_on_vertical_gesture(SwipeDirection::Right), Mode::EpisodeList);
        assert_eq!(flag.toggle_on_vertical_gesture(SwipeDirection::Down), Mode::Read);
        assert_eq!(flag.toggle_on_vertical_gesture(SwipeDirection::Up), Mode::EpisodeList);
    }

    #[test]
    fn fragment_navigation_forces_read() {
        let mut flag = ModeFlag::new(Mode::EpisodeList);
        assert!(flag.on_fragment_navigation());
        assert_eq!(flag.get(), Mode::Read);
    }
}
