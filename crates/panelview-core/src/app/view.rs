impl<S> ViewerApp<S>
where
    S: SessionStore,
{
    pub fn render_state(&self) -> Option<RenderState<'_>> {
        render::project(&self.manifest, self.position, self.mode(), &self.config)
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.render_state() {
            Some(state) => Screen::Panel(state),
            None => Screen::Empty {
                status_text: self.config.empty_status,
                mode: self.mode(),
            },
        }
    }

    pub fn episode_list(&self) -> Vec<EpisodeLink<'_>> {
        render::episode_list(&self.manifest, self.position)
    }

    /// Fragment for the current position, `None` without episodes.
    pub fn current_fragment(&self) -> Option<String> {
        let episode = self.manifest.episode_at(self.position.episode_index())?;
        Some(fragment::encode(episode.id(), self.position.panel_number()))
    }
}
