//! Audio upload form
//!
//! The selected file is only checked by extension; nothing is read or
//! stored besides the resulting record.

use super::{require, today};
use crate::modal::EntityForm;
use pabx_core::models::{Audio, AudioCategory};
use pabx_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AudioForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    pub category: AudioCategory,

    /// Name of the picked file. Editing may leave it empty to keep the
    /// current audio.
    #[serde(default, alias = "fileName")]
    pub file_name: String,

    /// Length in seconds, as reported by the client
    #[serde(default)]
    pub duration: u32,
}

impl EntityForm for AudioForm {
    type Entity = Audio;
    const LABEL: &'static str = "Audio";

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(audio: &Audio) -> Self {
        Self {
            name: audio.name.clone(),
            category: audio.category,
            file_name: String::new(),
            duration: audio.duration,
        }
    }

    fn check(&self, editing: Option<&Audio>) -> AppResult<()> {
        let file_missing = editing.is_none() && self.file_name.trim().is_empty();
        require(self.validate(), file_missing.then_some("file"))?;

        if !self.file_name.is_empty() && !Audio::is_accepted_file(&self.file_name) {
            return Err(AppError::UnsupportedFileType(self.file_name.clone()));
        }
        Ok(())
    }

    fn build(&self, editing: Option<&Audio>) -> Audio {
        match editing {
            Some(audio) => Audio {
                name: self.name.clone(),
                category: self.category,
                duration: if self.file_name.is_empty() {
                    audio.duration
                } else {
                    self.duration
                },
                ..audio.clone()
            },
            None => Audio {
                id: 0,
                name: self.name.clone(),
                duration: self.duration,
                category: self.category,
                upload_date: today(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(file: &str) -> AudioForm {
        AudioForm {
            name: "Welcome".to_string(),
            category: AudioCategory::Greeting,
            file_name: file.to_string(),
            duration: 12,
        }
    }

    #[test]
    fn test_accepted_extensions() {
        for file in ["welcome.mp3", "welcome.WAV", "a.b.ogg"] {
            assert!(form(file).check(None).is_ok(), "{}", file);
        }
    }

    #[test]
    fn test_rejected_extension() {
        assert!(matches!(
            form("welcome.flac").check(None),
            Err(AppError::UnsupportedFileType(name)) if name == "welcome.flac"
        ));
    }

    #[test]
    fn test_file_required_for_new_audio() {
        match form("").check(None) {
            Err(AppError::MissingFields(fields)) => assert_eq!(fields, "file"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_edit_without_new_file_keeps_audio() {
        let existing = crate::seed::audios().remove(2);
        let mut edit = AudioForm::from_entity(&existing);
        edit.name = "Hold Music".to_string();
        assert!(edit.check(Some(&existing)).is_ok());

        let saved = edit.build(Some(&existing));
        assert_eq!(saved.duration, existing.duration);
        assert_eq!(saved.upload_date, existing.upload_date);
        assert_eq!(saved.name, "Hold Music");
    }
}
