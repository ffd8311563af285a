impl<S> ViewerApp<S>
where
    S: SessionStore,
{
    /// Reducer: applies one event and reports the resulting state.
    pub fn dispatch(&mut self, event: ViewerEvent) -> Transition {
        if !self.has_episodes() {
            debug!("nav: inert without episodes event={:?}", event);
            return self.transition(false, None);
        }

        match event {
            ViewerEvent::Next => self.step(1),
            ViewerEvent::Prev => self.step(-1),
            ViewerEvent::JumpTo { episode_id, panel } => self.jump_to(&episode_id, panel),
            ViewerEvent::ShowEpisodeList => {
                let changed = self.enter_mode(Mode::EpisodeList);
                self.transition(changed, None)
            }
            ViewerEvent::ReturnToRead => {
                let changed = self.mode().is_episode_list() && self.enter_mode(Mode::Read);
                self.transition(changed, None)
            }
            ViewerEvent::SwipeUp => self.vertical_gesture(SwipeDirection::Up),
            ViewerEvent::SwipeDown => self.vertical_gesture(SwipeDirection::Down),
        }
    }

    fn step(&mut self, delta: isize) -> Transition {
        let previous = self.position;
        let next = position::advance(&self.manifest, previous, delta);
        debug!(
            "nav: step delta={} episode={} panel={} -> {}",
            delta, previous.episode_index(), previous.panel_index(), next.panel_index()
        );

        if next == previous {
            return self.transition(false, None);
        }

        self.position = next;
        let published = self.current_fragment();
        if let Some(fragment) = published.as_ref() {
            self.pending_echoes.push_back(fragment.clone());
        }
        self.transition(true, published)
    }

    fn jump_to(&mut self, episode_id: &str, panel: usize) -> Transition {
        let Some(resolved) = position::resolve(&self.manifest, episode_id, panel) else {
            debug!(
                "nav: jump ignored episode={:?} panel={} reason=unknown_episode",
                episode_id, panel
            );
            return self.transition(false, None);
        };

        debug!(
            "nav: jump episode={:?} panel={} -> index={}/{}",
            episode_id, panel, resolved.episode_index(), resolved.panel_index()
        );
        let moved = resolved != self.position;
        self.position = resolved;

        let mode_changed = self.mode.on_fragment_navigation();
        if mode_changed {
            self.persist_mode();
        }

        self.transition(moved || mode_changed, None)
    }

    fn vertical_gesture(&mut self, direction: SwipeDirection) -> Transition {
        let before = self.mode();
        let after = self.mode.toggle_on_vertical_gesture(direction);
        let changed = before != after;
        if changed {
            self.persist_mode();
        }
        self.transition(changed, None)
    }

    fn enter_mode(&mut self, mode: Mode) -> bool {
        let changed = self.mode.set_mode(mode);
        if changed {
            self.persist_mode();
        }
        changed
    }

    fn persist_mode(&mut self) {
        let mode = self.mode();
        session::store_mode(&mut self.store, self.config.session_key, mode);
    }

    fn transition(&self, changed: bool, fragment: Option<String>) -> Transition {
        Transition {
            position: self.position,
            mode: self.mode(),
            fragment,
            changed,
        }
    }
}
