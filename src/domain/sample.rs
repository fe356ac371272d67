// ============================================================
// Sample Domain Types
// ============================================================
// What a dataset hands out for one index. Samples are built on
// demand, consumed by collate, then dropped; nothing is cached.
//
// Shapes (N = phonemes, T = mel frames, C = mel channels):
//
//   text        [N]      i64 symbol ids
//   mel         [T, C]   f32
//   pitch       [N]      f32, or [T] when stored frame-level
//   energy      [N]      f32, or [T] likewise
//   duration    [N]      i64 frames per phoneme, sums to T
//   avg_mel_ph  [N, C]   f32 mel averaged over each phoneme

use ndarray::{Array1, Array2};

/// Speaker identity of one utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum Speaker {
    /// Row in the speaker table (closed set, from speakers.json)
    Id(i64),

    /// Per-utterance embedding vector (open set)
    Embedding(Array1<f32>),
}

/// One fully loaded training example.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub id:         String,
    pub speaker:    Speaker,
    pub text:       Array1<i64>,
    pub mel:        Array2<f32>,
    pub pitch:      Array1<f32>,
    pub energy:     Array1<f32>,
    pub duration:   Array1<i64>,
    pub avg_mel_ph: Array2<f32>,
}

impl Sample {
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    pub fn mel_len(&self) -> usize {
        self.mel.nrows()
    }
}

/// One synthesis request: no acoustic targets, just what the model
/// is conditioned on.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSample {
    pub id:      String,
    pub speaker: Speaker,
    pub text:    Array1<i64>,
}
