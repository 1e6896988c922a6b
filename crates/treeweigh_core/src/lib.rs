//! Bundle size analysis.
//!
//! This crate takes the per-module metadata a bundler emits after tree-shaking
//! and derives, for every module, its rendered and original size, its share of
//! the bundle, how much dead-code elimination removed, and which modules import
//! it.
//!
//! # Examples
//!
//! ```
//! use treeweigh_core::{AnalyzeOptions, ModuleInput, RawBundleDescriptor, analyze_bundle};
//!
//! # fn main() -> Result<(), treeweigh_core::AnalyzeError> {
//! let bundle = RawBundleDescriptor::new(vec![
//!     ModuleInput::new("/app/src/a.js").with_sizes(500, 1000),
//!     ModuleInput::new("/app/src/b.js").with_sizes(500, 500).with_dependencies(["/app/src/a.js"]),
//! ]);
//!
//! let result = analyze_bundle(&bundle, &AnalyzeOptions::new().with_root("/app"))?;
//! assert_eq!(result.bundle_size, 1000);
//! assert_eq!(result.bundle_reduction, 33.33);
//! # Ok(())
//! # }
//! ```

mod analyzer;
mod config;
mod error;
mod graph;
mod metrics;
mod types;

// Re-export public API
pub use analyzer::{analyze, analyze_bundle};
pub use config::{AnalyzeOptions, Filter, IdTransform, ReportPredicate, strip_root};
pub use error::{AnalyzeError, Result};
pub use graph::DependentsIndex;
pub use metrics::{percent_of, reduction, round2};
pub use types::{AnalysisResult, BundleCache, ModuleInput, ModuleReport, RawBundleDescriptor};
