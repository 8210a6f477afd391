// ccprune-core/src/application/mod.rs

pub mod prune;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use ccprune_core::application::{run_prune, PrunePorts};`
pub use prune::{PruneOutcome, PrunePorts, run_prune};
