// ============================================================
// Data Pipeline
// ============================================================
// Everything between a preprocessed directory and tensor batches.
//
//   train.txt / val.txt
//       │
//       ▼
//   meta            → Manifest (id, speaker, text) per line
//       │
//       ▼
//   FastSpeechDataset::load(index)
//       ├── paths    → per-feature .npy file names
//       ├── loader   → ndarray arrays from .npy
//       ├── speaker  → speaker id or embedding
//       └── text     → phoneme ids
//       │
//       ▼
//   collate         → sort, chunk, pad (padding) into Batch
//       │
//       ▼
//   batcher         → Burn tensors on the target device
//
// TextDataset follows the same path without acoustic features.

/// Manifest parsing
pub mod meta;

/// Feature file naming convention
pub mod paths;

/// .npy array reading with dtype fallback
pub mod loader;

/// Closed / open-set speaker resolution
pub mod speaker;

/// pad_1d / pad_2d
pub mod padding;

/// Length sorting, chunking, per-batch padding
pub mod collate;

/// Training dataset (Burn Dataset)
pub mod dataset;

/// Synthesis dataset (Burn Dataset)
pub mod text_dataset;

/// Burn Batchers producing tensor batches
pub mod batcher;
