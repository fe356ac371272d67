// ============================================================
// FastSpeech Training Dataset
// ============================================================
// Random access over a manifest of preprocessed utterances.
// Nothing is kept in memory except the manifest and the speaker
// table; every get(index) reads that utterance's arrays from disk.
//
// Implements Burn's Dataset trait so a DataLoader can drive it,
// and exposes the collate step the matching batcher uses.

use std::path::{Path, PathBuf};

use burn::data::dataset::Dataset;
use ndarray::Array1;

use crate::data::collate::{self, CollateOptions};
use crate::data::meta::parse_manifest;
use crate::data::paths::{feature_path, Feature};
use crate::data::speaker::{EmbeddingLayout, SpeakerSource};
use crate::data::loader::{load_f32, load_i64};
use crate::domain::{Batch, Manifest, Sample};
use crate::error::{DatasetError, Result};
use crate::infra::config::{PreprocessConfig, TrainConfig};
use crate::text::PhonemeEncoder;

#[derive(Debug, Clone)]
pub struct FastSpeechDataset {
    dataset_name:      String,
    preprocessed_path: PathBuf,
    encoder:           PhonemeEncoder,
    manifest:          Manifest,
    speakers:          SpeakerSource,
    options:           CollateOptions,
}

impl FastSpeechDataset {
    /// Build from a manifest file name relative to the preprocessed
    /// directory (e.g. "train.txt").
    pub fn new(
        filename:   impl AsRef<Path>,
        preprocess: &PreprocessConfig,
        train:      &TrainConfig,
        sort:       bool,
        drop_last:  bool,
    ) -> Result<Self> {
        let preprocessed_path = preprocess.path.preprocessed_path.clone();
        let encoder  = PhonemeEncoder::from_config(preprocess)?;
        let options  = CollateOptions::new(train.optimizer.batch_size, sort, drop_last)?;
        let manifest = parse_manifest(&preprocessed_path.join(filename))?;
        let speakers = SpeakerSource::from_preprocessed(
            &preprocessed_path,
            preprocess.open_set_speaker,
            EmbeddingLayout::SpeakerAndId,
        )?;

        tracing::info!(
            "{} dataset: {} utterances, {} speakers, batch_size={}",
            preprocess.dataset,
            manifest.len(),
            if speakers.is_open_set() { "open-set" } else { "closed-set" },
            options.batch_size()
        );

        Ok(Self {
            dataset_name: preprocess.dataset.clone(),
            preprocessed_path,
            encoder,
            manifest,
            speakers,
            options,
        })
    }

    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn options(&self) -> CollateOptions {
        self.options
    }

    /// Read every field of utterance `index` from disk.
    pub fn load(&self, index: usize) -> Result<Sample> {
        let entry = self.manifest.get(index).ok_or(DatasetError::IndexOutOfRange {
            index,
            len: self.manifest.len(),
        })?;
        let base = self.preprocessed_path.as_path();
        let path = |feature| feature_path(base, feature, &entry.speaker, &entry.id);

        let speaker = self.speakers.resolve(&entry.speaker, &entry.id)?;
        let text    = Array1::from(self.encoder.encode(&entry.text));

        let sample = Sample {
            id:         entry.id.clone(),
            speaker,
            text,
            mel:        load_f32(&path(Feature::Mel))?,
            pitch:      load_f32(&path(Feature::Pitch))?,
            energy:     load_f32(&path(Feature::Energy))?,
            duration:   load_i64(&path(Feature::Duration))?,
            avg_mel_ph: load_f32(&path(Feature::AvgMelPhoneme))?,
        };

        tracing::trace!(
            "Loaded {}: {} phonemes, {} frames",
            sample.id,
            sample.text_len(),
            sample.mel_len()
        );
        Ok(sample)
    }

    /// Pad the samples at `idxs` into one batch.
    pub fn reprocess(&self, data: &[Sample], idxs: &[usize]) -> Result<Batch> {
        collate::reprocess(data, idxs)
    }

    /// Split a loaded group into batches using this dataset's
    /// batch_size, sort and drop_last settings.
    pub fn collate(&self, data: &[Sample]) -> Result<Vec<Batch>> {
        collate::collate(data, self.options)
    }
}

impl Dataset<Sample> for FastSpeechDataset {
    fn get(&self, index: usize) -> Option<Sample> {
        if index >= self.manifest.len() {
            return None;
        }
        // Dataset::get cannot return an error; a broken utterance
        // must still stop the run rather than vanish from the epoch.
        match self.load(index) {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::error!("Failed to load utterance {index}: {e}");
                panic!("failed to load utterance {index}: {e}");
            }
        }
    }

    fn len(&self) -> usize {
        self.manifest.len()
    }
}
