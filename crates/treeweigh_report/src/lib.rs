//! Text reports for bundle size analysis.
//!
//! Renders a [`treeweigh_core::AnalysisResult`] as a fixed-layout report and
//! provides a hook adapter that runs the whole analysis from a bundler's
//! output chunks.
//!
//! # Examples
//!
//! ```
//! use treeweigh_core::{AnalyzeOptions, ModuleInput, RawBundleDescriptor};
//! use treeweigh_report::format_bundle;
//!
//! let bundle = RawBundleDescriptor::new(vec![
//!     ModuleInput::new("src/a.js").with_sizes(500, 1000),
//! ]);
//!
//! let report = format_bundle(&bundle, &AnalyzeOptions::default());
//! assert!(report.contains("code reduction: 50 %"));
//! ```

mod collector;
mod fmt;
mod formatted;
mod hook;
mod reporter;

// Re-export public API
pub use collector::{
    ModuleGraph, NoModuleGraph, OutputBundle, OutputChunk, RenderedModule, collect_modules,
};
pub use fmt::{format_bytes, format_percent};
pub use formatted::{format_bundle, formatted, formatted_value};
pub use hook::{AnalysisCallback, AnalyzerHook, HookOptions, ReportSink};
pub use reporter::{TITLE, render_report, write_report};
