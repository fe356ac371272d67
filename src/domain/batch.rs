// ============================================================
// Batch Domain Types
// ============================================================
// Padded, stacked arrays for one training step. Every padded
// array shares its second dimension with the batch maximum on
// that axis; the unpadded lengths ride along so the model can
// build masks.
//
//   texts        [B, max_text_len]
//   mels         [B, max_mel_len, C]
//   pitches      [B, max_text_len]
//   energies     [B, max_text_len]
//   durations    [B, max_text_len]
//   avg_mel_phs  [B, max_text_len, C]

use ndarray::{Array1, Array2, Array3};

/// Speakers of a batch, one mode per batch.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeakerBatch {
    /// [B] speaker table rows
    Ids(Array1<i64>),

    /// [B, D] embedding vectors
    Embeddings(Array2<f32>),
}

impl SpeakerBatch {
    pub fn len(&self) -> usize {
        match self {
            SpeakerBatch::Ids(ids) => ids.len(),
            SpeakerBatch::Embeddings(e) => e.nrows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub ids:          Vec<String>,
    pub speakers:     SpeakerBatch,
    pub texts:        Array2<i64>,
    pub text_lens:    Array1<usize>,
    pub max_text_len: usize,
    pub mels:         Array3<f32>,
    pub mel_lens:     Array1<usize>,
    pub max_mel_len:  usize,
    pub pitches:      Array2<f32>,
    pub energies:     Array2<f32>,
    pub durations:    Array2<i64>,
    pub avg_mel_phs:  Array3<f32>,
}

impl Batch {
    /// Number of utterances in the batch
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Padded text-only batch for synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBatch {
    pub ids:          Vec<String>,
    pub speakers:     SpeakerBatch,
    pub texts:        Array2<i64>,
    pub text_lens:    Array1<usize>,
    pub max_text_len: usize,
}
