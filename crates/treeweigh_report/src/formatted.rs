use log::{debug, warn};
use treeweigh_core::{AnalyzeOptions, RawBundleDescriptor, analyze_bundle};

use crate::reporter::render_report;

/// Analyze `bundle` and render the text report.
///
/// Never fails: an analysis error is returned as its message instead of the
/// report.
pub async fn formatted(bundle: &RawBundleDescriptor, options: &AnalyzeOptions) -> String {
    format_bundle(bundle, options)
}

/// Like [`formatted`], for a descriptor that has not been validated yet.
pub async fn formatted_value(bundle: serde_json::Value, options: &AnalyzeOptions) -> String {
    match RawBundleDescriptor::from_value(bundle) {
        Ok(bundle) => format_bundle(&bundle, options),
        Err(e) => {
            warn!("Could not read bundle descriptor: {}", e);
            e.to_string()
        }
    }
}

/// Synchronous core of [`formatted`].
pub fn format_bundle(bundle: &RawBundleDescriptor, options: &AnalyzeOptions) -> String {
    match analyze_bundle(bundle, options) {
        Ok(analysis) => render_report(&analysis, options),
        Err(e) => {
            debug!("Analysis failed, returning error text: {}", e);
            e.to_string()
        }
    }
}
