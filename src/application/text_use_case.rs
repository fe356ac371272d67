// ============================================================
// Text Use Case
// ============================================================
// Prepares a synthesis manifest the way the inference script
// feeds the model:
//
//   Step 1: Load preprocess.yaml
//   Step 2: Build the TextDataset from the manifest path
//   Step 3: Load every entry and pad them as one batch
//
// The CLI prints the result; nothing here writes to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};

use fastspeech_data::data::text_dataset::TextDataset;
use fastspeech_data::domain::TextBatch;
use fastspeech_data::infra::config::PreprocessConfig;
use fastspeech_data::text::sequence_to_text;

pub struct TextUseCase {
    preprocess_config: PathBuf,
    source:            PathBuf,
}

/// The padded batch plus each row decoded back to symbols.
#[derive(Debug, Clone)]
pub struct PreparedText {
    pub batch:   TextBatch,
    pub decoded: Vec<String>,
}

impl TextUseCase {
    pub fn new(preprocess_config: PathBuf, source: PathBuf) -> Self {
        Self { preprocess_config, source }
    }

    pub fn execute(&self) -> Result<PreparedText> {
        // ── Step 1: Config ────────────────────────────────────────────────────
        let preprocess = PreprocessConfig::load(&self.preprocess_config).with_context(|| {
            format!("loading preprocess config '{}'", self.preprocess_config.display())
        })?;

        // ── Step 2: Dataset ───────────────────────────────────────────────────
        let dataset = TextDataset::new(&self.source, &preprocess)
            .with_context(|| format!("reading manifest '{}'", self.source.display()))?;

        // ── Step 3: Load and pad as one group ─────────────────────────────────
        let items = dataset.load_all()?;
        let batch = dataset.collate(&items)?;

        let decoded = items
            .iter()
            .map(|item| sequence_to_text(&item.text.to_vec()))
            .collect();

        tracing::info!(
            "Prepared {} utterances, longest {} symbols",
            batch.ids.len(),
            batch.max_text_len
        );
        Ok(PreparedText { batch, decoded })
    }
}
