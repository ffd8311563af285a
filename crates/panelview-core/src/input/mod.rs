//! Input abstraction layer.

pub mod gesture;
pub mod mock;

use log::debug;

use crate::{fragment, mode::SwipeDirection};

use self::gesture::GestureTracker;

/// Raw events emitted by the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum RawInput {
    /// Click on the panel image; `x` is relative to its left edge.
    Click { x: f32, width: f32 },
    /// Key name as reported by the host, e.g. `"ArrowRight"`.
    Key(String),
    TouchStart { x: f32, y: f32 },
    TouchEnd { x: f32, y: f32 },
    PrevButton,
    NextButton,
    ShowEpisodes,
    StatusActivated,
    /// The location fragment changed outside the viewer.
    FragmentChanged(String),
}

/// Logical actions consumed by the viewer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ViewerEvent {
    Next,
    Prev,
    JumpTo { episode_id: String, panel: usize },
    ShowEpisodeList,
    ReturnToRead,
    SwipeUp,
    SwipeDown,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<RawInput>, Self::Error>;
}

/// Left half goes back, right half goes forward.
pub fn click_zone_event(x: f32, width: f32) -> ViewerEvent {
    if x < width / 2.0 {
        ViewerEvent::Prev
    } else {
        ViewerEvent::Next
    }
}

pub fn key_event(key: &str) -> Option<ViewerEvent> {
    match key {
        "ArrowRight" => Some(ViewerEvent::Next),
        "ArrowLeft" => Some(ViewerEvent::Prev),
        _ => None,
    }
}

pub fn swipe_event(direction: SwipeDirection) -> ViewerEvent {
    match direction {
        SwipeDirection::Left => ViewerEvent::Next,
        SwipeDirection::Right => ViewerEvent::Prev,
        SwipeDirection::Up => ViewerEvent::SwipeUp,
        SwipeDirection::Down => ViewerEvent::SwipeDown,
    }
}

/// Turns raw presentation events into viewer events.
#[derive(Clone, Copy, Debug)]
pub struct RawInputMapper {
    gestures: GestureTracker,
}

impl RawInputMapper {
    pub fn new(horizontal_swipe_px: u32, vertical_swipe_px: u32) -> Self {
        Self {
            gestures: GestureTracker::new(horizontal_swipe_px, vertical_swipe_px),
        }
    }

    pub fn map(&mut self, raw: RawInput) -> Option<ViewerEvent> {
        let event = match raw {
            RawInput::Click { x, width } => Some(click_zone_event(x, width)),
            RawInput::Key(ref key) => key_event(key),
            RawInput::TouchStart { x, y } => {
                self.gestures.touch_start(x, y);
                None
            }
            RawInput::TouchEnd { x, y } => self.gestures.touch_end(x, y).map(swipe_event),
            RawInput::PrevButton => Some(ViewerEvent::Prev),
            RawInput::NextButton => Some(ViewerEvent::Next),
            RawInput::ShowEpisodes => Some(ViewerEvent::ShowEpisodeList),
            RawInput::StatusActivated => Some(ViewerEvent::ReturnToRead),
            RawInput::FragmentChanged(ref raw_fragment) => {
                fragment::decode(raw_fragment).map(|target| ViewerEvent::JumpTo {
                    episode_id: target.episode_id,
                    panel: target.panel,
                })
            }
        };

        if event.is_none() {
            debug!("input: ignored raw={:?}", raw);
        }
        event
    }
}
