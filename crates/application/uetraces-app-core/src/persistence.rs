use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uetraces_config::SETTINGS_FILE_NAME;

use crate::ports::SettingsRepo;

/// Remembers the last launched executable in a one-line text file.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Settings file next to the launcher executable.
    pub fn beside_executable() -> Self {
        Self::in_dir(&uetraces_infra::platform::launcher_dir())
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::at(dir.join(SETTINGS_FILE_NAME))
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsRepo for SettingsStore {
    fn read_last_path(&self) -> String {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "No saved executable path: {e}");
                return String::new();
            }
        };

        content
            .lines()
            .next()
            .map(|line| line.trim_end_matches('\r').to_string())
            .unwrap_or_default()
    }

    /// Replaces the file in one step so a crash never leaves a half-written
    /// path behind.
    fn write_last_path(&self, path: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to stage settings in {}", dir.display()))?;
        tmp.write_all(path.as_bytes()).context("Failed to write settings")?;
        tmp.as_file().sync_all().context("Failed to flush settings")?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "Saved executable path");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(dir.path());
        assert_eq!(store.read_last_path(), "");
    }

    #[test]
    fn empty_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(dir.path());
        fs::write(store.path(), "").expect("write");
        assert_eq!(store.read_last_path(), "");
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(dir.path());

        for p in [
            r"C:\Builds\Windows\MyGame.exe",
            r"D:\Packaged Builds\Shipping\Game With Spaces.exe",
            "/opt/builds/game",
            r"C:\Спецсборка\ゲーム.exe",
        ] {
            store.write_last_path(p).expect("write");
            assert_eq!(store.read_last_path(), p);
        }
    }

    #[test]
    fn repeated_writes_leave_only_the_settings_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(dir.path());
        fs::write(store.path(), "C:\\stale.exe\r\nleftover\r\n").expect("write");

        store.write_last_path(r"C:\a.exe").expect("write");
        store.write_last_path(r"C:\b.exe").expect("write");

        let names: Vec<_> = fs::read_dir(dir.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name())
            .collect();
        assert_eq!(names, ["UETracesRecorder.settings"]);
        assert_eq!(fs::read_to_string(store.path()).expect("read"), r"C:\b.exe");
    }

    #[test]
    fn only_the_first_line_is_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(dir.path());
        fs::write(store.path(), "C:\\a.exe\r\nC:\\b.exe\r\n").expect("write");
        assert_eq!(store.read_last_path(), r"C:\a.exe");
    }

    #[test]
    fn settings_file_name_is_fixed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(dir.path());
        assert_eq!(store.path(), dir.path().join("UETracesRecorder.settings"));
    }

    #[test]
    fn write_into_missing_directory_fails_without_panicking() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::in_dir(&dir.path().join("does-not-exist"));
        assert!(store.write_last_path(r"C:\a.exe").is_err());
        assert_eq!(store.read_last_path(), "");
    }
}
