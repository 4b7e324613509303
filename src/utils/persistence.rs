//! JSON save file for the whole [`GameState`].
//!
//! The file holds one record `{tasks, monsters, player, items}` with no
//! version header.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::config::GameConfig;
use crate::error::{Result, StoreError};
use crate::game::constants::{APP_NAME, SAVE_FILE_NAME};
use crate::game::game_state::GameState;

pub struct SaveStore {
    save_path: PathBuf,
}

impl SaveStore {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    /// Store at the configured path, or the platform data dir.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        match &config.save_path {
            Some(path) => Ok(Self::new(path.clone())),
            None => Ok(Self::new(default_save_path()?)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Reads the save and checks it before handing it out.
    pub fn load(&self) -> Result<GameState> {
        let json = fs::read_to_string(&self.save_path)?;
        let state: GameState = serde_json::from_str(&json)?;
        state.validate()?;
        tracing::debug!(path = %self.save_path.display(), "save loaded");
        Ok(state)
    }

    /// Loads the save, or returns a fresh state if no file exists yet.
    ///
    /// A file that exists but does not parse is an error, not a reset.
    pub fn load_or_default(&self) -> Result<GameState> {
        if !self.exists() {
            tracing::info!(path = %self.save_path.display(), "no save found, starting fresh");
            return Ok(GameState::new());
        }
        self.load()
    }

    pub fn save(&self, state: &GameState) -> Result<()> {
        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.save_path, json)?;
        tracing::debug!(path = %self.save_path.display(), "save written");
        Ok(())
    }
}

/// `<data dir>/taskquest/state.json` for the current platform.
pub fn default_save_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_NAME).ok_or(StoreError::NoDataDir)?;
    Ok(dirs.data_dir().join(SAVE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::Player;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("nested").join("state.json"));
        let state = GameState::new().with_player(Player {
            gold: 42,
            ..Player::new()
        });

        store.save(&state).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("state.json"));

        assert!(!store.exists());
        assert_eq!(store.load_or_default().unwrap(), GameState::new());
    }

    #[test]
    fn test_corrupted_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let err = SaveStore::new(path).load_or_default().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn test_level_zero_save_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(
            &path,
            r#"{"player":{"level":0,"xp":0,"gold":0,"hp":10,"maxHp":100}}"#,
        )
        .unwrap();

        let err = SaveStore::new(path).load().unwrap_err();
        assert!(matches!(err, StoreError::InvalidState(_)));
    }

    #[test]
    fn test_overhealed_save_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(
            &path,
            r#"{"player":{"level":1,"xp":0,"gold":0,"hp":140,"maxHp":100}}"#,
        )
        .unwrap();

        let err = SaveStore::new(path).load_or_default().unwrap_err();
        assert!(matches!(err, StoreError::InvalidState(_)));
    }

    #[test]
    fn test_from_config_uses_override() {
        let config = GameConfig {
            save_path: Some(PathBuf::from("/tmp/custom.json")),
            ..GameConfig::default()
        };
        let store = SaveStore::from_config(&config).unwrap();
        assert_eq!(store.path(), Path::new("/tmp/custom.json"));
    }

    #[test]
    fn test_saved_json_uses_original_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("state.json"));
        store.save(&GameState::new()).unwrap();

        let json = fs::read_to_string(store.path()).unwrap();
        for key in ["\"tasks\"", "\"monsters\"", "\"player\"", "\"items\"", "\"maxHp\""] {
            assert!(json.contains(key), "missing {}", key);
        }
    }
}
