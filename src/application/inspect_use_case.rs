// ============================================================
// Inspect Use Case
// ============================================================
// Runs a training manifest through exactly the pipeline the
// training loop would use, without a model:
//
//   Step 1: Load preprocess.yaml and train.yaml
//   Step 2: Build the FastSpeechDataset
//   Step 3: Wrap it in a Burn DataLoader with FastSpeechBatcher
//   Step 4: Pull groups, recording batch shapes and padding
//
// Every utterance in the manifest is read, so this doubles as a
// consistency check of a freshly preprocessed directory: a
// missing array stops the run with its path.

use std::path::PathBuf;

use anyhow::{Context, Result};
use burn::data::dataloader::DataLoaderBuilder;
use burn::data::dataset::Dataset;
use burn::tensor::backend::Backend;

use fastspeech_data::data::batcher::{FastSpeechBatch, FastSpeechBatcher};
use fastspeech_data::data::dataset::FastSpeechDataset;
use fastspeech_data::infra::config::{PreprocessConfig, TrainConfig};

type InspectBackend = burn::backend::NdArray;

// ─── Inspect Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub preprocess_config: PathBuf,
    pub train_config:      PathBuf,
    /// Manifest file inside the preprocessed directory
    pub manifest:          String,
    pub sort:              bool,
    pub drop_last:         bool,
    pub shuffle_seed:      Option<u64>,
    pub num_workers:       usize,
    /// Stop after this many groups
    pub max_groups:        Option<usize>,
}

/// What one inspect run saw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectSummary {
    pub dataset:        String,
    pub utterances:     usize,
    pub groups:         usize,
    pub batches:        usize,
    pub max_text_len:   usize,
    pub max_mel_len:    usize,
    /// Sum of real mel frames across all batches
    pub mel_frames:     usize,
    /// Sum of padded mel frames (batch * max_mel_len) across all batches
    pub padded_frames:  usize,
}

impl InspectSummary {
    /// Share of padded mel frames holding real data
    pub fn mel_fill_ratio(&self) -> f64 {
        if self.padded_frames == 0 {
            return 0.0;
        }
        self.mel_frames as f64 / self.padded_frames as f64
    }

    fn record<B: Backend>(&mut self, batch: &FastSpeechBatch<B>) -> Result<()> {
        let mel_lens: Vec<i64> = batch
            .mel_lens
            .clone()
            .into_data()
            .convert::<i64>()
            .to_vec()
            .map_err(|e| anyhow::anyhow!("cannot read mel lengths: {e:?}"))?;

        self.batches       += 1;
        self.utterances    += batch.ids.len();
        self.max_text_len   = self.max_text_len.max(batch.max_text_len);
        self.max_mel_len    = self.max_mel_len.max(batch.max_mel_len);
        self.mel_frames    += mel_lens.iter().map(|&l| l as usize).sum::<usize>();
        self.padded_frames += batch.ids.len() * batch.max_mel_len;
        Ok(())
    }
}

// ─── InspectUseCase ──────────────────────────────────────────────────────────
pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<InspectSummary> {
        let cfg = &self.config;

        // ── Step 1: Configs ───────────────────────────────────────────────────
        let preprocess = PreprocessConfig::load(&cfg.preprocess_config).with_context(|| {
            format!("loading preprocess config '{}'", cfg.preprocess_config.display())
        })?;
        let train = TrainConfig::load(&cfg.train_config)
            .with_context(|| format!("loading train config '{}'", cfg.train_config.display()))?;

        // ── Step 2: Dataset ───────────────────────────────────────────────────
        let dataset =
            FastSpeechDataset::new(&cfg.manifest, &preprocess, &train, cfg.sort, cfg.drop_last)
                .with_context(|| format!("building dataset from '{}'", cfg.manifest))?;

        let mut summary = InspectSummary {
            dataset: dataset.dataset_name().to_string(),
            ..Default::default()
        };
        if dataset.is_empty() {
            tracing::warn!("Manifest '{}' has no entries", cfg.manifest);
            return Ok(summary);
        }

        // ── Step 3: DataLoader ────────────────────────────────────────────────
        // One loader step = group_size padded batches.
        let group_size = train.optimizer.batch_size * train.optimizer.group_size;
        let batcher = FastSpeechBatcher::<InspectBackend>::new(dataset.options());

        let mut builder = DataLoaderBuilder::new(batcher).batch_size(group_size);
        if cfg.num_workers > 0 {
            builder = builder.num_workers(cfg.num_workers);
        }
        if let Some(seed) = cfg.shuffle_seed {
            builder = builder.shuffle(seed);
        }
        let loader = builder.build(dataset);

        // ── Step 4: Walk the groups ───────────────────────────────────────────
        // Groups past max_groups are never loaded
        let groups = loader.iter().take(cfg.max_groups.unwrap_or(usize::MAX));
        for batches in groups {
            summary.groups += 1;

            for batch in &batches {
                summary.record(batch)?;
                tracing::info!(
                    "group {} batch {}: {} utterances, text {:?}, mel {:?}",
                    summary.groups,
                    summary.batches,
                    batch.ids.len(),
                    batch.texts.dims(),
                    batch.mels.dims()
                );
            }
        }

        tracing::info!(
            "Inspected {} utterances in {} batches ({:.1}% of mel frames are real data)",
            summary.utterances,
            summary.batches,
            summary.mel_fill_ratio() * 100.0
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastspeech_data::data::paths::{feature_path, Feature};
    use ndarray::{Array1, Array2};
    use ndarray_npy::write_npy;
    use std::fs;
    use std::path::Path;

    fn write_corpus(base: &Path) {
        fs::write(base.join("speakers.json"), r#"{"LJSpeech": 0}"#).unwrap();
        let mut manifest = String::new();
        for (i, (phonemes, frames)) in [(2usize, 5usize), (4, 9), (3, 6)].into_iter().enumerate() {
            let id = format!("LJ001-000{i}");
            for feature in Feature::ALL {
                fs::create_dir_all(base.join(feature.dir_name())).unwrap();
            }
            let path = |feature| feature_path(base, feature, "LJSpeech", &id);
            write_npy(path(Feature::Mel), &Array2::<f32>::zeros((frames, 4))).unwrap();
            write_npy(path(Feature::Pitch), &Array1::<f32>::zeros(phonemes)).unwrap();
            write_npy(path(Feature::Energy), &Array1::<f32>::zeros(phonemes)).unwrap();
            write_npy(path(Feature::Duration), &Array1::<i64>::ones(phonemes)).unwrap();
            write_npy(path(Feature::AvgMelPhoneme), &Array2::<f32>::zeros((phonemes, 4))).unwrap();
            manifest.push_str(&format!("{id}|LJSpeech|{{{}}}\n", vec!["EH1"; phonemes].join(" ")));
        }
        fs::write(base.join("train.txt"), manifest).unwrap();
    }

    fn write_configs(base: &Path) -> (PathBuf, PathBuf) {
        let preprocess = base.join("preprocess.yaml");
        fs::write(
            &preprocess,
            format!(
                "dataset: LJSpeech\n\
                 open_set_speaker: false\n\
                 path:\n  preprocessed_path: {}\n\
                 preprocessing:\n  text:\n    text_cleaners: [english_cleaners]\n",
                base.display()
            ),
        )
        .unwrap();
        let train = base.join("train.yaml");
        fs::write(&train, "optimizer:\n  batch_size: 1\n  group_size: 2\n").unwrap();
        (preprocess, train)
    }

    fn config(base: &Path, max_groups: Option<usize>) -> InspectConfig {
        let (preprocess_config, train_config) = write_configs(base);
        InspectConfig {
            preprocess_config,
            train_config,
            manifest: "train.txt".into(),
            sort: true,
            drop_last: false,
            shuffle_seed: None,
            num_workers: 0,
            max_groups,
        }
    }

    #[test]
    fn walks_every_utterance_through_the_loader() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path());

        let summary = InspectUseCase::new(config(dir.path(), None)).execute().unwrap();
        assert_eq!(summary.dataset, "LJSpeech");
        assert_eq!(summary.utterances, 3);
        assert_eq!(summary.groups, 2);
        assert_eq!(summary.batches, 3);
        assert_eq!(summary.max_text_len, 4);
        assert_eq!(summary.max_mel_len, 9);
        // batch_size 1 means no padding at all
        assert_eq!(summary.mel_frames, 20);
        assert_eq!(summary.padded_frames, 20);
        assert!((summary.mel_fill_ratio() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn stops_after_max_groups() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path());

        let summary = InspectUseCase::new(config(dir.path(), Some(1))).execute().unwrap();
        assert_eq!(summary.groups, 1);
        assert_eq!(summary.batches, 2);
        assert_eq!(summary.utterances, 2);
    }

    #[test]
    fn groups_past_max_groups_are_never_read() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path());
        // Third utterance opens the second group; loading it would panic
        fs::remove_file(feature_path(dir.path(), Feature::Mel, "LJSpeech", "LJ001-0002")).unwrap();

        let mut cfg = config(dir.path(), Some(1));
        cfg.sort = false;
        let summary = InspectUseCase::new(cfg).execute().unwrap();
        assert_eq!(summary.groups, 1);
        assert_eq!(summary.utterances, 2);
    }

    #[test]
    fn missing_config_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path(), None);
        cfg.preprocess_config = dir.path().join("absent.yaml");

        let err = InspectUseCase::new(cfg).execute().unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }
}
