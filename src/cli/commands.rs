// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `inspect` and `text`, and their
// flags. Paths default to the usual LJSpeech config layout.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::inspect_use_case::InspectConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream a training manifest through the batcher and report shapes
    Inspect(InspectArgs),

    /// Encode and pad a synthesis manifest
    Text(TextArgs),
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// preprocess.yaml holding the preprocessed_path and text cleaners
    #[arg(long, default_value = "config/LJSpeech/preprocess.yaml")]
    pub preprocess_config: PathBuf,

    /// train.yaml holding batch_size and group_size
    #[arg(long, default_value = "config/LJSpeech/train.yaml")]
    pub train_config: PathBuf,

    /// Manifest name inside the preprocessed directory
    #[arg(long, default_value = "train.txt")]
    pub manifest: String,

    /// Sort each group by text length, longest first
    #[arg(long)]
    pub sort: bool,

    /// Drop the short tail batch of each group
    #[arg(long)]
    pub drop_last: bool,

    /// Shuffle utterances with this seed before grouping
    #[arg(long)]
    pub seed: Option<u64>,

    /// Loader worker threads (0 loads on the calling thread)
    #[arg(long, default_value_t = 0)]
    pub num_workers: usize,

    /// Stop after this many groups
    #[arg(long)]
    pub max_groups: Option<usize>,
}

/// The application layer never sees clap types.
impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            preprocess_config: a.preprocess_config,
            train_config:      a.train_config,
            manifest:          a.manifest,
            sort:              a.sort,
            drop_last:         a.drop_last,
            shuffle_seed:      a.seed,
            num_workers:       a.num_workers,
            max_groups:        a.max_groups,
        }
    }
}

#[derive(Args, Debug)]
pub struct TextArgs {
    /// Manifest of id|speaker|text lines to synthesize
    #[arg(long)]
    pub source: PathBuf,

    /// preprocess.yaml holding the preprocessed_path and text cleaners
    #[arg(long, default_value = "config/LJSpeech/preprocess.yaml")]
    pub preprocess_config: PathBuf,
}
