// ccprune-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod prompt;
pub mod scanner;

pub use fs::FsRemover;
pub use manifest::JsonManifest;
pub use prompt::{AutoConfirm, ConsoleConfirmer};
pub use scanner::WalkScanner;
