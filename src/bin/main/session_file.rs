use std::{
    fs, io,
    path::{Path, PathBuf},
};

use panelview_core::session::SessionStore;

/// Session storage kept in a scratch file of `key=value` lines.
///
/// Delete the file to end the "session".
#[derive(Debug, Clone)]
pub(super) struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub(super) fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_entries(&self) -> io::Result<Vec<(String, String)>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        Ok(contents
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
            .collect())
    }
}

impl SessionStore for FileSessionStore {
    type Error = io::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self
            .read_entries()?
            .into_iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut entries = self.read_entries()?;
        match entries.iter_mut().find(|(entry_key, _)| entry_key == key) {
            Some(entry) => entry.1 = value.to_owned(),
            None => entries.push((key.to_owned(), value.to_owned())),
        }

        let mut contents = String::new();
        for (entry_key, entry_value) in &entries {
            contents.push_str(entry_key);
            contents.push('=');
            contents.push_str(entry_value);
            contents.push('\n');
        }
        fs::write(&self.path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session"));
        assert_eq!(store.get("panelview.mode").unwrap(), None);
    }

    #[test]
    fn values_are_replaced_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");
        let mut store = FileSessionStore::new(&path);

        store.set("other", "1").unwrap();
        store.set("panelview.mode", "episodes").unwrap();
        store.set("panelview.mode", "read").unwrap();

        assert_eq!(store.get("panelview.mode").unwrap().as_deref(), Some("read"));
        assert_eq!(store.get("other").unwrap().as_deref(), Some("1"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "other=1\npanelview.mode=read\n"
        );
    }
}
