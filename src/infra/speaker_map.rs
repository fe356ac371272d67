// ============================================================
// Speaker Map
// ============================================================
// speakers.json, written by the preprocessor, maps every speaker
// name in a closed-set corpus to the integer row of the speaker
// embedding table:
//
//   { "p225": 0, "p226": 1, ... }
//
// Loaded once per dataset and never modified.

use std::{collections::HashMap, fs, path::Path};

use crate::error::{DatasetError, Result};

pub const SPEAKER_MAP_FILE: &str = "speakers.json";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerMap {
    ids: HashMap<String, i64>,
}

impl SpeakerMap {
    pub fn new(ids: HashMap<String, i64>) -> Self {
        Self { ids }
    }

    /// Read `{preprocessed_path}/speakers.json`.
    pub fn load(preprocessed_path: &Path) -> Result<Self> {
        let path = preprocessed_path.join(SPEAKER_MAP_FILE);
        let raw = fs::read_to_string(&path).map_err(|source| DatasetError::Io {
            path: path.clone(),
            source,
        })?;
        let ids: HashMap<String, i64> = serde_json::from_str(&raw)
            .map_err(|source| DatasetError::SpeakerMap { path: path.clone(), source })?;

        tracing::info!("Loaded {} speakers from '{}'", ids.len(), path.display());
        Ok(Self { ids })
    }

    pub fn resolve(&self, speaker: &str) -> Result<i64> {
        self.ids
            .get(speaker)
            .copied()
            .ok_or_else(|| DatasetError::UnknownSpeaker(speaker.to_string()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
