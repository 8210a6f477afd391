// src/domain/ports/mod.rs

pub mod console;
pub mod manifest;
pub mod remover;
pub mod scanner;

pub use console::Confirmer;
pub use manifest::ManifestSource;
pub use remover::FileRemover;
pub use scanner::TreeScanner;
