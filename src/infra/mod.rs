// ============================================================
// Infrastructure Layer
// ============================================================
// Files that describe the preprocessed corpus rather than any
// single example:
//
//   config.rs      — preprocess.yaml / train.yaml as typed structs
//   speaker_map.rs — speakers.json for closed-set corpora
//
// Both are read once when a dataset is built.

/// Typed FastSpeech2 YAML configs
pub mod config;

/// Closed-set speaker name → index table
pub mod speaker_map;
