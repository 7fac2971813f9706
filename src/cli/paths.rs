//! Path utilities for haulplan.
//!
//! All data lives under `~/.haulplan/`:
//! - `~/.haulplan/config.toml` - main configuration
//! - `~/.haulplan/haulplan.db` - site database

use std::path::PathBuf;

/// Returns the haulplan home directory (`~/.haulplan/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".haulplan")
}

/// Returns the default config file path (`~/.haulplan/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.haulplan/haulplan.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("haulplan.db")
}

/// Ensures the haulplan home directory exists.
pub fn ensure_home_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(home_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_haulplan_home() {
        let home = home_dir();
        let config = default_config();
        let db = default_database();

        assert!(home.to_string_lossy().contains(".haulplan"));
        assert!(config.to_string_lossy().contains(".haulplan"));
        assert!(db.to_string_lossy().contains(".haulplan"));
    }
}
