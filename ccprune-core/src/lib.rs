// ccprune-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Domain (pure rules)
// Extension filter, keep-set, deletion plan and report, ports.
// Depends on nothing else in the crate.
pub mod domain;

// 2. Infrastructure (Adapters)
// JSON manifest, directory walk, stdin prompt, file removal, settings.
pub mod infrastructure;

// 3. Application (Use Cases)
// Load -> Scan -> Diff -> Confirm -> Delete -> Report.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::PruneError;
