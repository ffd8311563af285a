//! Pure projection from (manifest, position, mode) to what the UI shows.

use crate::{
    config::ViewerConfig,
    fragment,
    manifest::EpisodeManifest,
    mode::Mode,
    position::Position,
    text_policy::{alt_text, caption_text, status_text},
};

/// Everything the presentation layer needs to draw one panel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderState<'a> {
    pub image_ref: &'a str,
    pub alt_text: String,
    pub caption_text: String,
    pub status_text: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// The status element accepts focus/activation to return to reading.
    pub status_interactive: bool,
    pub mode: Mode,
}

/// One entry of the episode navigation list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EpisodeLink<'a> {
    pub href: String,
    pub label: &'a str,
    pub current: bool,
}

/// View model consumed by the host renderer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Screen<'a> {
    Panel(RenderState<'a>),
    /// No episode/panel to show. Navigation buttons are disabled.
    Empty { status_text: &'a str, mode: Mode },
}

impl Screen<'_> {
    pub fn prev_enabled(&self) -> bool {
        matches!(self, Screen::Panel(state) if state.prev_enabled)
    }

    pub fn next_enabled(&self) -> bool {
        matches!(self, Screen::Panel(state) if state.next_enabled)
    }
}

/// `None` when `position` does not address a panel, e.g. an empty manifest.
pub fn project<'a>(
    manifest: &'a EpisodeManifest,
    position: Position,
    mode: Mode,
    config: &ViewerConfig,
) -> Option<RenderState<'a>> {
    let episode = manifest.episode_at(position.episode_index())?;
    let image_ref = episode.panel_at(position.panel_index())?;

    let label = episode.label();
    let panel_number = position.panel_number();
    let panel_total = episode.panel_count();
    let list_shown = mode.is_episode_list();
    let hint = list_shown.then_some(config.list_hint);

    Some(RenderState {
        image_ref,
        alt_text: alt_text(label, panel_number),
        caption_text: caption_text(label, panel_number, panel_total),
        status_text: status_text(label, panel_number, panel_total, hint),
        prev_enabled: position.panel_index() > 0,
        next_enabled: position.panel_index() < episode.last_panel_index(),
        status_interactive: list_shown,
        mode,
    })
}

/// Navigation list entries, each linking to the first panel of an episode.
pub fn episode_list(manifest: &EpisodeManifest, position: Position) -> Vec<EpisodeLink<'_>> {
    manifest
        .episodes()
        .enumerate()
        .map(|(index, episode)| EpisodeLink {
            href: format!("#{}", fragment::encode(episode.id(), 1)),
            label: episode.label(),
            current: index == position.episode_index(),
        })
        .collect()
}
