// ============================================================
// Domain Layer
// ============================================================
// Plain data types the rest of the crate passes around:
//
//   ManifestEntry  — one line of a manifest
//   Sample         — one loaded training example
//   TextSample     — one synthesis request
//   Batch          — padded training arrays
//   TextBatch      — padded synthesis arrays
//
// No file I/O and no Burn types here; tensors only appear in
// data::batcher at the very end of the pipeline.

/// Manifest line and the parsed manifest
pub mod manifest;

/// Per-index examples
pub mod sample;

/// Padded batches
pub mod batch;

pub use batch::{Batch, SpeakerBatch, TextBatch};
pub use manifest::{Manifest, ManifestEntry};
pub use sample::{Sample, Speaker, TextSample};
