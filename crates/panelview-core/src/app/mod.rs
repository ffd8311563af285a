//! Viewer controller: single owner of position, mode and the loaded manifest.

use std::collections::VecDeque;

use log::{debug, info, warn};

use crate::{
    config::ViewerConfig,
    fragment,
    input::{InputProvider, RawInput, RawInputMapper, ViewerEvent},
    manifest::EpisodeManifest,
    mode::{Mode, ModeFlag, SwipeDirection},
    position::{self, Position},
    render::{self, EpisodeLink, RenderState, Screen},
    session::{self, SessionStore},
};

/// Outcome of one dispatched event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transition {
    pub position: Position,
    pub mode: Mode,
    /// Fragment to publish to the address bar. Only set for in-app moves.
    pub fragment: Option<String>,
    /// Whether position or mode changed, i.e. a redraw is due.
    pub changed: bool,
}

pub struct ViewerApp<S>
where
    S: SessionStore,
{
    manifest: EpisodeManifest,
    store: S,
    config: ViewerConfig,
    position: Position,
    mode: ModeFlag,
    mapper: RawInputMapper,
    /// Published fragments whose change notification has not come back yet.
    pending_echoes: VecDeque<String>,
}

include!("runtime.rs");
include!("navigation.rs");
include!("input.rs");
include!("view.rs");
