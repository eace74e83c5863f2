use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{LeaderboardEntry, LeaderboardError};

/// Append-only list of finished games.
pub trait ScoreStore: Send + Sync + 'static {
    fn load(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;
    fn append(&self, entry: &LeaderboardEntry) -> Result<(), LeaderboardError>;
}

#[derive(Default)]
pub struct MemoryScoreStore {
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|_| LeaderboardError::Unavailable("memory store poisoned".to_string()))
    }

    fn append(&self, entry: &LeaderboardEntry) -> Result<(), LeaderboardError> {
        self.entries
            .lock()
            .map(|mut entries| entries.push(entry.clone()))
            .map_err(|_| LeaderboardError::Unavailable("memory store poisoned".to_string()))
    }
}

/// Keeps every entry in one YAML list. A missing file is an empty board.
pub struct YamlFileScoreStore {
    file_path: PathBuf,
    write_lock: Mutex<()>,
}

impl YamlFileScoreStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Sibling file the next version is written to before it replaces the board.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn read_entries(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_yaml_ng::from_str(&content)?)
    }
}

impl ScoreStore for YamlFileScoreStore {
    fn load(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        self.read_entries()
    }

    fn append(&self, entry: &LeaderboardEntry) -> Result<(), LeaderboardError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| LeaderboardError::Unavailable("score file lock poisoned".to_string()))?;

        let mut entries = self.read_entries()?;
        entries.push(entry.clone());

        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        // The board is only ever replaced by a complete file.
        let staging_path = self.staging_path();
        std::fs::write(&staging_path, serde_yaml_ng::to_string(&entries)?)?;
        std::fs::rename(&staging_path, &self.file_path)?;
        Ok(())
    }
}
