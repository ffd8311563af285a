//! Episode manifest loaded once at startup and immutable thereafter.

use std::{fs::File, io::BufReader, io::Read, path::Path};

use log::{debug, warn};
use serde::Deserialize;

use crate::error::ManifestError;

/// One reading unit: an ordered, non-empty list of panel image references.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Episode {
    id: String,
    title: Option<String>,
    panels: Vec<String>,
}

impl Episode {
    /// Returns `None` when `panels` is empty. Blank titles are treated as absent.
    pub fn new<I, P>(id: impl Into<String>, title: Option<&str>, panels: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let panels: Vec<String> = panels.into_iter().map(Into::into).collect();
        if panels.is_empty() {
            return None;
        }

        Some(Self {
            id: id.into(),
            title: title
                .map(str::trim)
                .filter(|title| !title.is_empty())
                .map(str::to_owned),
            panels,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Display label: the title, falling back to the id.
    pub fn label(&self) -> &str {
        self.title().unwrap_or(&self.id)
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn last_panel_index(&self) -> usize {
        self.panels.len().saturating_sub(1)
    }

    pub fn panel_at(&self, index: usize) -> Option<&str> {
        self.panels.get(index).map(String::as_str)
    }
}

/// Ordered episode collection.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EpisodeManifest {
    episodes: Vec<Episode>,
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    episodes: Vec<RawEpisode>,
}

#[derive(Deserialize)]
struct RawEpisode {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    panels: Vec<String>,
}

impl EpisodeManifest {
    pub fn new(episodes: Vec<Episode>) -> Self {
        for (index, episode) in episodes.iter().enumerate() {
            if let Some(first) = episodes[..index].iter().position(|e| e.id == episode.id) {
                warn!(
                    "manifest: duplicate episode id={:?} index={} first_index={}",
                    episode.id, index, first
                );
            }
        }

        Self { episodes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawManifest) -> Self {
        let total = raw.episodes.len();
        let episodes: Vec<Episode> = raw
            .episodes
            .into_iter()
            .filter_map(|raw_episode| {
                let RawEpisode { id, title, panels } = raw_episode;
                let episode = Episode::new(id.as_str(), title.as_deref(), panels);
                if episode.is_none() {
                    warn!("manifest: dropping episode id={:?} reason=no_panels", id);
                }
                episode
            })
            .collect();

        debug!("manifest: loaded episodes={}/{}", episodes.len(), total);
        Self::new(episodes)
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    pub fn episode_at(&self, index: usize) -> Option<&Episode> {
        self.episodes.get(index)
    }

    /// First episode with a matching id.
    pub fn find_index(&self, id: &str) -> Option<usize> {
        self.episodes.iter().position(|episode| episode.id == id)
    }

    pub fn episodes(&self) -> impl Iterator<Item = &Episode> {
        self.episodes.iter()
    }
}
