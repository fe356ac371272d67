// ============================================================
// Configuration
// ============================================================
// Typed views over the two FastSpeech2 YAML files the data
// pipeline reads:
//
//   preprocess.yaml  → PreprocessConfig
//   train.yaml       → TrainConfig
//
// Only the keys this crate uses are modelled. serde fails on a
// missing required key, so a broken config is caught at load
// time instead of on the first sample. Extra keys (stft, mel,
// pitch settings ...) are ignored.

use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::error::{DatasetError, Result};
use crate::text::cleaners::Cleaner;

// ─── preprocess.yaml ─────────────────────────────────────────────────────────
#[derive(Debug, Clone, Deserialize)]
pub struct PreprocessConfig {
    /// Corpus name, e.g. "LJSpeech" or "VCTK"
    pub dataset: String,

    pub path: PathConfig,

    pub preprocessing: PreprocessingConfig,

    /// true  → speakers are per-utterance embedding vectors
    /// false → speakers are looked up in speakers.json
    pub open_set_speaker: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathConfig {
    /// Root of the preprocessed feature tree (mel/, pitch/, ...)
    pub preprocessed_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreprocessingConfig {
    pub text: TextConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    /// Cleaner names applied in order, e.g. ["english_cleaners"]
    pub text_cleaners: Vec<String>,
}

impl PreprocessConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let cfg: Self = load_yaml(path.as_ref())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse from an in-memory YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(yaml).map_err(|source| DatasetError::Config {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Resolve the configured cleaner names, failing on the first unknown one.
    pub fn cleaners(&self) -> Result<Vec<Cleaner>> {
        self.preprocessing
            .text
            .text_cleaners
            .iter()
            .map(|name| name.parse())
            .collect()
    }

    fn validate(&self) -> Result<()> {
        self.cleaners().map(|_| ())
    }
}

// ─── train.yaml ──────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Deserialize)]
pub struct TrainConfig {
    pub optimizer: OptimizerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptimizerConfig {
    /// Samples per padded batch
    pub batch_size: usize,

    /// How many batches one collate call produces. The loader asks
    /// for batch_size * group_size samples at once so that sorting
    /// by length has something to work with.
    #[serde(default = "default_group_size")]
    pub group_size: usize,
}

fn default_group_size() -> usize {
    4
}

impl TrainConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let cfg: Self = load_yaml(path.as_ref())?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(yaml).map_err(|source| DatasetError::Config {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.optimizer.batch_size == 0 {
            return Err(DatasetError::InvalidConfig(
                "optimizer.batch_size must be at least 1".into(),
            ));
        }
        if self.optimizer.group_size == 0 {
            return Err(DatasetError::InvalidConfig(
                "optimizer.group_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn load_yaml<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| DatasetError::Config {
        path: path.to_path_buf(),
        source,
    })
}
