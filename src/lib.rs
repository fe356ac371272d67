//! Load, pad and batch preprocessed FastSpeech2 training data.
//!
//! ```text
//! preprocessed_data/LJSpeech/
//! ├── train.txt, val.txt        id|speaker|text manifests
//! ├── speakers.json             closed-set speaker table
//! ├── mel/ pitch/ energy/ duration/ avg_mel_phon/
//! └── speaker_embedding/        open-set embeddings
//! ```
//!
//! [`data::dataset::FastSpeechDataset`] and
//! [`data::text_dataset::TextDataset`] implement Burn's `Dataset`;
//! [`data::batcher`] turns their samples into padded tensor batches.

pub mod data;
pub mod domain;
pub mod error;
pub mod infra;
pub mod text;

pub use data::batcher::{FastSpeechBatch, FastSpeechBatcher, TextBatcher, TextTensorBatch};
pub use data::collate::CollateOptions;
pub use data::dataset::FastSpeechDataset;
pub use data::text_dataset::TextDataset;
pub use error::{DatasetError, Result};
pub use infra::config::{PreprocessConfig, TrainConfig};
