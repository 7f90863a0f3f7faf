use chrono::Utc;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use super::{Session, Subtitle, SubtitleList};

impl Session {
    // =========================================================================
    // Save/Load
    // =========================================================================

    /// Save the session to its folder
    pub fn save(&mut self) -> io::Result<()> {
        let path = self
            .session_path
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Session path not set"))?;
        self.save_to(&path)
    }

    /// Save the session to a specific folder
    pub fn save_to(&mut self, folder: &Path) -> io::Result<()> {
        fs::create_dir_all(folder)?;
        self.modified_at = Utc::now();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(folder.join("session.json"), json)?;
        Ok(())
    }

    /// Load a session from a folder
    pub fn load(folder: &Path) -> io::Result<Self> {
        let session_file = folder.join("session.json");
        let json = fs::read_to_string(&session_file)?;
        let mut session: Session = serde_json::from_str(&json)?;
        session.session_path = Some(folder.to_path_buf());
        Ok(session)
    }

    /// Create a new session in a folder
    pub fn create_in(folder: &Path, name: impl Into<String>) -> io::Result<Self> {
        let mut session = Session {
            name: name.into(),
            ..Default::default()
        };
        session.session_path = Some(folder.to_path_buf());
        session.save_to(folder)?;
        Ok(session)
    }
}

/// Shape of a transcript file produced by the transcription service:
/// either a bare array of entries or an object wrapping it in `content`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Bare(Vec<Subtitle>),
    Wrapped { content: Vec<Subtitle> },
}

/// Load a subtitle list from a transcript JSON file.
pub fn load_transcript(path: &Path) -> io::Result<SubtitleList> {
    let json = fs::read_to_string(path)?;
    let parsed: TranscriptFile = serde_json::from_str(&json)?;
    let entries = match parsed {
        TranscriptFile::Bare(entries) => entries,
        TranscriptFile::Wrapped { content } => content,
    };
    Ok(SubtitleList::from_entries(entries))
}
