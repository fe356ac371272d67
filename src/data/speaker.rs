// ============================================================
// Speaker Resolution
// ============================================================
// How a manifest speaker name becomes model input. The mode is
// fixed when a dataset is built:
//
//   closed set → integer row from speakers.json (loaded once)
//   open set   → f32 embedding vector, one .npy per utterance;
//                speakers.json is never opened
//
// Also stacks per-sample speakers into a batch.

use std::path::{Path, PathBuf};

use ndarray::{stack, Array1, ArrayView1, Axis};

use crate::data::{loader, paths};
use crate::domain::{Speaker, SpeakerBatch};
use crate::error::{DatasetError, Result};
use crate::infra::speaker_map::SpeakerMap;

/// Which embedding file layout an open-set dataset reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingLayout {
    /// `speaker_embedding/{speaker}-{id}.npy`
    SpeakerAndId,
    /// `speaker_embedding/{id}.npy`
    IdOnly,
}

#[derive(Debug, Clone)]
pub enum SpeakerSource {
    Closed(SpeakerMap),
    Open { base: PathBuf, layout: EmbeddingLayout },
}

impl SpeakerSource {
    /// Pick the mode from `open_set_speaker`, reading speakers.json
    /// only for a closed set.
    pub fn from_preprocessed(
        base: &Path,
        open_set: bool,
        layout: EmbeddingLayout,
    ) -> Result<Self> {
        if open_set {
            Ok(SpeakerSource::Open { base: base.to_path_buf(), layout })
        } else {
            Ok(SpeakerSource::Closed(SpeakerMap::load(base)?))
        }
    }

    pub fn is_open_set(&self) -> bool {
        matches!(self, SpeakerSource::Open { .. })
    }

    pub fn resolve(&self, speaker: &str, id: &str) -> Result<Speaker> {
        match self {
            SpeakerSource::Closed(map) => map.resolve(speaker).map(Speaker::Id),
            SpeakerSource::Open { base, layout } => {
                let path = match layout {
                    EmbeddingLayout::SpeakerAndId => {
                        paths::speaker_embedding_path(base, speaker, id)
                    }
                    EmbeddingLayout::IdOnly => paths::text_speaker_embedding_path(base, id),
                };
                let embedding: Array1<f32> = loader::load_f32(&path)?;
                Ok(Speaker::Embedding(embedding))
            }
        }
    }
}

/// Stack speakers of one batch. All must be ids or all embeddings
/// of the same width.
pub fn stack_speakers<'a>(speakers: impl IntoIterator<Item = &'a Speaker>) -> Result<SpeakerBatch> {
    let mut ids = Vec::new();
    let mut embeddings: Vec<ArrayView1<f32>> = Vec::new();

    for speaker in speakers {
        match speaker {
            Speaker::Id(id) => ids.push(*id),
            Speaker::Embedding(e) => embeddings.push(e.view()),
        }
    }

    match (ids.is_empty(), embeddings.is_empty()) {
        (_, true) => Ok(SpeakerBatch::Ids(Array1::from(ids))),
        (true, false) => stack(Axis(0), &embeddings)
            .map(SpeakerBatch::Embeddings)
            .map_err(|e| DatasetError::Shape(format!("speaker embeddings: {e}"))),
        (false, false) => Err(DatasetError::Shape(
            "batch mixes speaker ids and speaker embeddings".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use ndarray_npy::write_npy;
    use std::fs;

    #[test]
    fn closed_set_resolves_through_map() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("speakers.json"), r#"{"spkA": 0}"#).unwrap();

        let source =
            SpeakerSource::from_preprocessed(dir.path(), false, EmbeddingLayout::SpeakerAndId)
                .unwrap();
        assert!(!source.is_open_set());
        assert_eq!(source.resolve("spkA", "u1").unwrap(), Speaker::Id(0));
        assert!(matches!(
            source.resolve("spkB", "u1"),
            Err(DatasetError::UnknownSpeaker(_))
        ));
    }

    #[test]
    fn open_set_never_reads_speaker_map() {
        // No speakers.json on disk: construction must still succeed.
        let dir = tempfile::tempdir().unwrap();
        let emb_dir = dir.path().join(paths::SPEAKER_EMBEDDING_DIR);
        fs::create_dir_all(&emb_dir).unwrap();
        write_npy(emb_dir.join("spkA-u1.npy"), &array![0.25f64, -1.0]).unwrap();
        write_npy(emb_dir.join("u1.npy"), &array![3.0f32]).unwrap();

        let train =
            SpeakerSource::from_preprocessed(dir.path(), true, EmbeddingLayout::SpeakerAndId)
                .unwrap();
        assert_eq!(
            train.resolve("spkA", "u1").unwrap(),
            Speaker::Embedding(array![0.25f32, -1.0])
        );

        let synth =
            SpeakerSource::from_preprocessed(dir.path(), true, EmbeddingLayout::IdOnly).unwrap();
        assert_eq!(synth.resolve("spkA", "u1").unwrap(), Speaker::Embedding(array![3.0f32]));
    }

    #[test]
    fn stacks_ids_and_embeddings() {
        let ids = [Speaker::Id(3), Speaker::Id(1)];
        assert_eq!(stack_speakers(&ids).unwrap(), SpeakerBatch::Ids(array![3, 1]));

        let embs = [
            Speaker::Embedding(array![1.0f32, 2.0]),
            Speaker::Embedding(array![3.0f32, 4.0]),
        ];
        assert_eq!(
            stack_speakers(&embs).unwrap(),
            SpeakerBatch::Embeddings(array![[1.0, 2.0], [3.0, 4.0]])
        );
    }

    #[test]
    fn rejects_mixed_or_ragged_speakers() {
        let mixed = [Speaker::Id(0), Speaker::Embedding(array![1.0f32])];
        assert!(matches!(stack_speakers(&mixed), Err(DatasetError::Shape(_))));

        let ragged = [
            Speaker::Embedding(array![1.0f32]),
            Speaker::Embedding(array![1.0f32, 2.0]),
        ];
        assert!(matches!(stack_speakers(&ragged), Err(DatasetError::Shape(_))));
    }
}
