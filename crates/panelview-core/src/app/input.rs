impl<S> ViewerApp<S>
where
    S: SessionStore,
{
    /// Drains `input`, dispatching every event. Stops at the first provider
    /// error.
    pub fn poll<IN: InputProvider>(&mut self, input: &mut IN) -> Vec<Transition> {
        let mut transitions = Vec::new();
        loop {
            match input.poll_event() {
                Ok(Some(raw)) => {
                    if let Some(transition) = self.handle_input(raw) {
                        transitions.push(transition);
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error, stopping poll");
                    break;
                }
            }
        }
        transitions
    }

    /// Classifies one raw event and dispatches it. `None` when the event
    /// maps to nothing.
    pub fn handle_input(&mut self, raw: RawInput) -> Option<Transition> {
        if let RawInput::FragmentChanged(ref raw_fragment) = raw
            && self.take_own_echo(raw_fragment)
        {
            debug!(
                "input: fragment echo suppressed fragment={:?} pending={}",
                raw_fragment,
                self.pending_echoes.len()
            );
            return None;
        }

        let event = self.mapper.map(raw)?;
        Some(self.dispatch(event))
    }

    // The host fires a change notification for every fragment the viewer
    // published, in publish order; those must not count as external
    // navigation. Any other fragment means the pending echoes were superseded.
    fn take_own_echo(&mut self, raw_fragment: &str) -> bool {
        let raw_fragment = raw_fragment.strip_prefix('#').unwrap_or(raw_fragment);
        if self.pending_echoes.front().map(String::as_str) == Some(raw_fragment) {
            self.pending_echoes.pop_front();
            return true;
        }

        if !self.pending_echoes.is_empty() {
            debug!(
                "input: dropping pending echoes count={} external={:?}",
                self.pending_echoes.len(),
                raw_fragment
            );
            self.pending_echoes.clear();
        }
        false
    }
}
