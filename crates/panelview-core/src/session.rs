//! Session-scoped key/value storage for the display mode.

use std::collections::BTreeMap;

use log::warn;

use crate::mode::Mode;

/// Abstract session storage backend (a browser tab's session storage, a
/// scratch file, memory).
pub trait SessionStore {
    type Error: core::fmt::Debug;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-process store. Lives exactly as long as the viewer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemorySessionStore {
    entries: BTreeMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    type Error = core::convert::Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Reads the stored mode, defaulting to [`Mode::Read`] on absence or error.
pub fn load_mode<S: SessionStore>(store: &S, key: &str) -> Mode {
    match store.get(key) {
        Ok(raw) => Mode::from_session_value(raw.as_deref()),
        Err(err) => {
            warn!("session: read failed key={} err={:?}", key, err);
            Mode::Read
        }
    }
}

/// Writes `mode`. Failures are logged and otherwise ignored.
pub fn store_mode<S: SessionStore>(store: &mut S, key: &str, mode: Mode) {
    if let Err(err) = store.set(key, mode.as_session_value()) {
        warn!(
            "session: write failed key={} mode={:?} err={:?}",
            key, mode, err
        );
    }
}
