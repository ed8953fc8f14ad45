//! Client-side state kept between command invocations.
//!
//! Two small JSON files live under the configured data directory: the
//! session token from the last login, and the most recent batch of
//! recipe suggestions so one can be saved by number later.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::RecipeSuggestion;

const SESSION_FILE: &str = "session.json";
const SUGGESTIONS_FILE: &str = "suggestions.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Persisted login token.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    /// Read the stored token, if any.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file: {}", self.path.display()))?;
        let session: StoredSession = serde_json::from_str(&content)
            .context("Session file is corrupt; log in again to replace it")?;
        Ok(Some(session.token))
    }

    /// Write a new token, creating the data directory if needed.
    pub fn save(&self, token: &str) -> Result<()> {
        ensure_dir(parent(&self.path))?;

        let session = StoredSession {
            token: token.to_string(),
        };
        let content = serde_json::to_string_pretty(&session)?;
        write_private(&self.path, &content)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))?;

        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Forget the stored token. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove session file: {}", self.path.display())
            })?;
            debug!("Session cleared");
        }
        Ok(())
    }
}

/// Last suggestion batch, so `recipes save <n>` can refer to it.
pub struct SuggestionCache {
    path: PathBuf,
}

impl SuggestionCache {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SUGGESTIONS_FILE),
        }
    }

    pub fn store(&self, suggestions: &[RecipeSuggestion]) -> Result<()> {
        ensure_dir(parent(&self.path))?;

        let content = serde_json::to_string_pretty(suggestions)?;
        fs::write(&self.path, content).with_context(|| {
            format!("Failed to write suggestions file: {}", self.path.display())
        })?;
        Ok(())
    }

    /// Load the cached batch. Fails when no suggest run has happened yet.
    pub fn load(&self) -> Result<Vec<RecipeSuggestion>> {
        if !self.path.exists() {
            anyhow::bail!("No suggestions available. Run 'stockchef recipes suggest' first.");
        }

        let content = fs::read_to_string(&self.path).with_context(|| {
            format!("Failed to read suggestions file: {}", self.path.display())
        })?;
        serde_json::from_str(&content).context("Suggestions file is corrupt; suggest again")
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove suggestions file: {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

/// Write a file only its owner can read.
///
/// The token grants full account access, so the file must be owner-only
/// from the moment it exists, not tightened after the fact. A leftover
/// file may carry old permissions and is recreated rather than truncated.
#[cfg(unix)]
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(content.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}

fn parent(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        assert_eq!(store.load().unwrap(), None);

        store.save("tok-123").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok-123".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(&dir.path().join("nested"));

        store.save("tok").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok".to_string()));
    }

    #[test]
    fn test_clear_without_session_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_corrupt_session_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SESSION_FILE), "not json").unwrap();

        let store = SessionStore::new(dir.path());
        assert!(store.load().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        store.save("tok").unwrap();

        let mode = fs::metadata(dir.path().join(SESSION_FILE))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_replaces_loose_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        fs::write(&path, "{\"token\":\"old\"}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let store = SessionStore::new(dir.path());
        store.save("fresh").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.load().unwrap(), Some("fresh".to_string()));
    }

    #[test]
    fn test_suggestion_cache_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SuggestionCache::new(dir.path());

        let batch = vec![RecipeSuggestion {
            recipe_name: "Quick Marinara".to_string(),
            description: "Weeknight sauce".to_string(),
            ingredients: vec!["Tomato".to_string()],
            approx_time: "25 minutes".to_string(),
            steps: vec!["Simmer".to_string()],
        }];

        cache.store(&batch).unwrap();
        let loaded = cache.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].recipe_name, "Quick Marinara");

        cache.clear().unwrap();
        assert!(cache.load().is_err());
    }

    #[test]
    fn test_suggestion_cache_empty_load_hints_at_suggest() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SuggestionCache::new(dir.path());

        let err = cache.load().unwrap_err();
        assert!(err.to_string().contains("recipes suggest"));
    }
}
