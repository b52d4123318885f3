/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Signed-in operator session, persisted as a small JSON file.
//!
//! The session is passed explicitly to the flows that need it (claim
//! approval) rather than held in ambient global state. An absent or
//! unreadable file simply means signed-out.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub token: String,
}

impl Session {
    /// Reads the session file. Absent or malformed content yields `None`;
    /// signing in again rewrites the file either way.
    pub fn load(path: impl AsRef<Path>) -> Option<Session> {
        let raw = fs::read_to_string(path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Removes the session file. Missing files are not an error.
    pub fn clear(path: impl AsRef<Path>) {
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session {
            email: "ops@example.com".to_string(),
            token: "dev-token".to_string(),
        };
        session.save(&path).unwrap();

        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded.email, "ops@example.com");
        assert_eq!(loaded.token, "dev-token");
    }

    #[test]
    fn test_absent_file_means_signed_out() {
        assert!(Session::load("/nonexistent/zerogate-session.json").is_none());
    }

    #[test]
    fn test_malformed_file_means_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(Session::load(&path).is_none());
    }

    #[test]
    fn test_clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{}").unwrap();
        Session::clear(&path);
        assert!(!path.exists());
    }
}
