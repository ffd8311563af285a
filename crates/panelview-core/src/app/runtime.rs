impl<S> ViewerApp<S>
where
    S: SessionStore,
{
    /// Restores the mode from `store`; position starts at the first panel.
    pub fn new(manifest: EpisodeManifest, store: S, config: ViewerConfig) -> Self {
        let mode = session::load_mode(&store, config.session_key);
        let position = position::initial(&manifest);
        info!(
            "viewer: start episodes={} mode={:?} key={}",
            manifest.episode_count(),
            mode,
            config.session_key
        );

        Self {
            manifest,
            store,
            config,
            position,
            mode: ModeFlag::new(mode),
            mapper: RawInputMapper::new(config.horizontal_swipe_px, config.vertical_swipe_px),
            pending_echoes: VecDeque::new(),
        }
    }

    /// Applies the fragment present at startup.
    ///
    /// Unlike external navigation this keeps the restored mode and publishes
    /// nothing. Returns whether the fragment resolved.
    pub fn restore_from_fragment(&mut self, raw: Option<&str>) -> bool {
        let Some(target) = fragment::decode_hash(raw) else {
            debug!("viewer: no startup fragment");
            return false;
        };

        match position::resolve(&self.manifest, &target.episode_id, target.panel) {
            Some(resolved) => {
                debug!(
                    "viewer: restored episode={:?} panel={} -> index={}/{}",
                    target.episode_id,
                    target.panel,
                    resolved.episode_index(),
                    resolved.panel_index()
                );
                self.position = resolved;
                true
            }
            None => {
                warn!(
                    "viewer: startup fragment unresolved episode={:?}",
                    target.episode_id
                );
                false
            }
        }
    }

    /// Swaps in a freshly loaded manifest and rewinds to its first panel.
    pub fn replace_manifest(&mut self, manifest: EpisodeManifest) {
        info!(
            "viewer: manifest replaced episodes={}",
            manifest.episode_count()
        );
        self.manifest = manifest;
        self.position = position::initial(&self.manifest);
        self.pending_echoes.clear();
    }

    pub fn has_episodes(&self) -> bool {
        !self.manifest.is_empty()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
