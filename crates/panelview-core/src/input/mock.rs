use std::collections::VecDeque;

use super::{InputProvider, RawInput};

/// Replays a fixed list of raw events. Used by hosts without a live input
/// source and by tests.
#[derive(Default, Debug, Clone)]
pub struct ScriptedInput {
    events: VecDeque<RawInput>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = RawInput>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputProvider for ScriptedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<RawInput>, Self::Error> {
        Ok(self.events.pop_front())
    }
}
