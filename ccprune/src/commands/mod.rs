// ccprune/src/commands/mod.rs

pub mod prune;
