// ============================================================
// Application / Use Cases
// ============================================================
// Workflows the CLI can run. Each one loads configs, builds a
// dataset and drives it; none of them print. Results come back
// as plain structs and the CLI decides how to show them.

/// Stream a training manifest through the Burn DataLoader
pub mod inspect_use_case;

/// Pad a synthesis manifest as one text batch
pub mod text_use_case;
