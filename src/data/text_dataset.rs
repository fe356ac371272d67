// ============================================================
// Text Dataset (synthesis)
// ============================================================
// The inference-time sibling of FastSpeechDataset: same manifest
// format and text encoding, but only id, speaker and phonemes are
// produced. The manifest path is used as given, not joined onto
// the preprocessed directory.
//
// Open-set embeddings are read from speaker_embedding/{id}.npy,
// without the speaker prefix training manifests use.

use std::path::{Path, PathBuf};

use burn::data::dataset::Dataset;
use ndarray::Array1;

use crate::data::collate::collate_text;
use crate::data::meta::parse_manifest;
use crate::data::speaker::{EmbeddingLayout, SpeakerSource};
use crate::domain::{Manifest, TextBatch, TextSample};
use crate::error::{DatasetError, Result};
use crate::infra::config::PreprocessConfig;
use crate::text::PhonemeEncoder;

#[derive(Debug, Clone)]
pub struct TextDataset {
    source:   PathBuf,
    encoder:  PhonemeEncoder,
    manifest: Manifest,
    speakers: SpeakerSource,
}

impl TextDataset {
    pub fn new(filepath: impl AsRef<Path>, preprocess: &PreprocessConfig) -> Result<Self> {
        let source   = filepath.as_ref().to_path_buf();
        let encoder  = PhonemeEncoder::from_config(preprocess)?;
        let manifest = parse_manifest(&source)?;
        let speakers = SpeakerSource::from_preprocessed(
            &preprocess.path.preprocessed_path,
            preprocess.open_set_speaker,
            EmbeddingLayout::IdOnly,
        )?;

        tracing::info!(
            "Text dataset '{}': {} utterances",
            source.display(),
            manifest.len()
        );

        Ok(Self { source, encoder, manifest, speakers })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn load(&self, index: usize) -> Result<TextSample> {
        let entry = self.manifest.get(index).ok_or(DatasetError::IndexOutOfRange {
            index,
            len: self.manifest.len(),
        })?;

        Ok(TextSample {
            id:      entry.id.clone(),
            speaker: self.speakers.resolve(&entry.speaker, &entry.id)?,
            text:    Array1::from(self.encoder.encode(&entry.text)),
        })
    }

    /// Load every entry in manifest order.
    pub fn load_all(&self) -> Result<Vec<TextSample>> {
        (0..self.manifest.len()).map(|i| self.load(i)).collect()
    }

    /// Pad `items` as one batch; no chunking.
    pub fn collate(&self, items: &[TextSample]) -> Result<TextBatch> {
        collate_text(items)
    }
}

impl Dataset<TextSample> for TextDataset {
    fn get(&self, index: usize) -> Option<TextSample> {
        if index >= self.manifest.len() {
            return None;
        }
        match self.load(index) {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::error!("Failed to load text entry {index}: {e}");
                panic!("failed to load text entry {index}: {e}");
            }
        }
    }

    fn len(&self) -> usize {
        self.manifest.len()
    }
}
