//! Current (episode, panel) position and its bounds.

use crate::manifest::EpisodeManifest;

/// Zero-based reading position. Always clamped to the episode it names.
///
/// Only [`initial`], [`resolve`] and [`advance`] hand out positions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Position {
    episode_index: usize,
    panel_index: usize,
}

impl Position {
    pub(crate) const fn new(episode_index: usize, panel_index: usize) -> Self {
        Self {
            episode_index,
            panel_index,
        }
    }

    pub const fn episode_index(self) -> usize {
        self.episode_index
    }

    pub const fn panel_index(self) -> usize {
        self.panel_index
    }

    /// 1-based panel number as shown to the user and written to fragments.
    pub const fn panel_number(self) -> usize {
        self.panel_index + 1
    }
}

/// Start of the first episode.
pub fn initial(_manifest: &EpisodeManifest) -> Position {
    Position::new(0, 0)
}

/// Looks up `episode_id` and clamps the 1-based `requested_panel` into it.
///
/// `None` means the id is unknown and the caller keeps its prior position.
pub fn resolve(
    manifest: &EpisodeManifest,
    episode_id: &str,
    requested_panel: usize,
) -> Option<Position> {
    let episode_index = manifest.find_index(episode_id)?;
    let episode = manifest.episode_at(episode_index)?;
    let panel_index = requested_panel
        .saturating_sub(1)
        .min(episode.last_panel_index());

    Some(Position::new(episode_index, panel_index))
}

/// Moves `delta` panels within the same episode, stopping at either end.
pub fn advance(manifest: &EpisodeManifest, position: Position, delta: isize) -> Position {
    let Some(episode) = manifest.episode_at(position.episode_index) else {
        return position;
    };

    let panel_index = position
        .panel_index
        .saturating_add_signed(delta)
        .min(episode.last_panel_index());

    Position::new(position.episode_index, panel_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Episode;

    fn manifest() -> EpisodeManifest {
        EpisodeManifest::new(vec![
            Episode::new("ep1", Some("A"), ["p1.png", "p2.png"]).unwrap(),
            Episode::new("ep2", None, ["q1.png", "q2.png", "q3.png", "q4.png"]).unwrap(),
        ])
    }

    #[test]
    fn resolve_clamps_high_panel_to_last() {
        assert_eq!(resolve(&manifest(), "ep1", 5), Some(Position::new(0, 1)));
    }

    #[test]
    fn resolve_clamps_zero_panel_to_first() {
        assert_eq!(resolve(&manifest(), "ep1", 0), Some(Position::new(0, 0)));
    }

    #[test]
    fn resolve_unknown_episode_is_not_found() {
        assert_eq!(resolve(&manifest(), "missing", 1), None);
    }

    #[test]
    fn resolved_position_exposes_clamped_indices() {
        let manifest = manifest();
        let position = resolve(&manifest, "ep2", 9).unwrap();

        assert_eq!(position.episode_index(), 1);
        assert_eq!(position.panel_index(), 3);
        assert_eq!(position.panel_number(), 4);

        let stepped = advance(&manifest, position, -2);
        assert_eq!((stepped.episode_index(), stepped.panel_index()), (1, 1));
    }

    #[test]
    fn advance_stays_within_episode() {
        let manifest = manifest();
        for episode_index in 0..manifest.episode_count() {
            let last = manifest.episode_at(episode_index).unwrap().last_panel_index();
            for delta in [-3isize, -1, 1, 2, 7] {
                let mut position = Position::new(episode_index, 0);
                for _ in 0..10 {
                    position = advance(&manifest, position, delta);
                    assert!(position.panel_index() <= last);
                    assert_eq!(position.episode_index(), episode_index);
                }
            }
        }
    }

    #[test]
    fn advance_does_not_wrap_into_next_episode() {
        let manifest = manifest();
        let end = Position::new(0, 1);
        assert_eq!(advance(&manifest, end, 1), end);
        assert_eq!(advance(&manifest, Position::new(1, 0), -1), Position::new(1, 0));
    }

    #[test]
    fn advance_on_empty_manifest_is_inert() {
        let empty = EpisodeManifest::empty();
        let start = initial(&empty);
        assert_eq!(advance(&empty, start, 1), start);
    }
}
