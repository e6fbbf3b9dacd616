//! Audio asset model
//!
//! Prompts, IVR menus and hold music uploaded to the PBX.

use crate::error::AppError;
use crate::query::ListSpec;
use crate::traits::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File extensions accepted by the upload picker
pub const ACCEPTED_AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "ogg"];

/// Audio asset category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioCategory {
    #[default]
    Greeting,
    Ivr,
    Hold,
    Announcement,
}

impl AudioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCategory::Greeting => "greeting",
            AudioCategory::Ivr => "ivr",
            AudioCategory::Hold => "hold",
            AudioCategory::Announcement => "announcement",
        }
    }
}

impl fmt::Display for AudioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "greeting" => Ok(AudioCategory::Greeting),
            "ivr" => Ok(AudioCategory::Ivr),
            "hold" => Ok(AudioCategory::Hold),
            "announcement" => Ok(AudioCategory::Announcement),
            other => Err(AppError::InvalidInput(format!(
                "Invalid audio category: {}",
                other
            ))),
        }
    }
}

/// Audio asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audio {
    pub id: u32,
    pub name: String,
    /// Length in seconds
    pub duration: u32,
    pub category: AudioCategory,
    pub upload_date: NaiveDate,
}

impl Audio {
    /// Check a file name against the picker's extension filter.
    ///
    /// Only the extension is inspected; the content is never validated.
    pub fn is_accepted_file(file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .map(|(stem, ext)| {
                !stem.is_empty()
                    && ACCEPTED_AUDIO_EXTENSIONS
                        .iter()
                        .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    pub fn formatted_duration(&self) -> String {
        super::format_duration(self.duration)
    }
}

impl Audio {
    /// Search over name, filtered by category
    pub fn list_spec() -> ListSpec<Audio> {
        ListSpec::new()
            .search(name_field)
            .category(category_field)
    }
}

fn name_field(record: &Audio) -> &str {
    &record.name
}

fn category_field(record: &Audio) -> &str {
    record.category.as_str()
}

impl Record for Audio {
    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert!(Audio::is_accepted_file("welcome.mp3"));
        assert!(Audio::is_accepted_file("menu.WAV"));
        assert!(Audio::is_accepted_file("hold.music.ogg"));
        assert!(!Audio::is_accepted_file("track.flac"));
        assert!(!Audio::is_accepted_file("mp3"));
        assert!(!Audio::is_accepted_file(".mp3"));
    }
}
