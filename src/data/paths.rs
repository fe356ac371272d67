// ============================================================
// Feature File Naming
// ============================================================
// The preprocessor writes one .npy per utterance per feature:
//
//   {base}/{dir}/{speaker}-{tag}-{id}.npy
//
//   mel        → mel/{spk}-mel-{id}.npy
//   pitch      → pitch/{spk}-pitch-{id}.npy
//   energy     → energy/{spk}-energy-{id}.npy
//   duration   → duration/{spk}-duration-{id}.npy
//   avg_mel_ph → avg_mel_phon/{spk}-avg_mel-{id}.npy
//
// Open-set speaker embeddings live under speaker_embedding/ with
// no feature tag. Training manifests name them {spk}-{id}.npy,
// synthesis manifests just {id}.npy.
//
// These functions are the only place the convention is spelled
// out. They never touch the disk.

use std::path::{Path, PathBuf};

pub const NPY_EXT: &str = "npy";
pub const SPEAKER_EMBEDDING_DIR: &str = "speaker_embedding";

/// Acoustic features stored per utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Mel,
    Pitch,
    Energy,
    Duration,
    AvgMelPhoneme,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Mel,
        Feature::Pitch,
        Feature::Energy,
        Feature::Duration,
        Feature::AvgMelPhoneme,
    ];

    /// Sub-directory under the preprocessed root
    pub fn dir_name(self) -> &'static str {
        match self {
            Feature::Mel => "mel",
            Feature::Pitch => "pitch",
            Feature::Energy => "energy",
            Feature::Duration => "duration",
            Feature::AvgMelPhoneme => "avg_mel_phon",
        }
    }

    /// Tag between speaker and id in the file name
    pub fn file_tag(self) -> &'static str {
        match self {
            Feature::AvgMelPhoneme => "avg_mel",
            other => other.dir_name(),
        }
    }
}

pub fn feature_path(base: &Path, feature: Feature, speaker: &str, id: &str) -> PathBuf {
    base.join(feature.dir_name())
        .join(format!("{speaker}-{}-{id}.{NPY_EXT}", feature.file_tag()))
}

/// Embedding path used by training manifests.
pub fn speaker_embedding_path(base: &Path, speaker: &str, id: &str) -> PathBuf {
    base.join(SPEAKER_EMBEDDING_DIR)
        .join(format!("{speaker}-{id}.{NPY_EXT}"))
}

/// Embedding path used by synthesis manifests (no speaker component).
pub fn text_speaker_embedding_path(base: &Path, id: &str) -> PathBuf {
    base.join(SPEAKER_EMBEDDING_DIR).join(format!("{id}.{NPY_EXT}"))
}
