pub mod error;
pub mod filter;
pub mod keep_set;
pub mod plan;
pub mod ports;
pub mod report;
pub mod settings;

// Handy re-exports to simplify imports elsewhere
pub use error::DeletionError;
pub use filter::SourceFilter;
pub use keep_set::KeepSet;
pub use plan::{DeletionPlan, Preview};
pub use report::DeletionReport;
pub use settings::PruneSettings;
