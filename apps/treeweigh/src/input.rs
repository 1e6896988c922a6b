use anyhow::{Context, Result};
use log::{debug, trace};
use std::{fs, path::Path};
use treeweigh_core::RawBundleDescriptor;

/// Read a bundle stats file: `{ "modules": [...] }` or `{ "cache": { "modules": [...] } }`.
pub fn load_bundle(path: &Path) -> Result<RawBundleDescriptor> {
    debug!("Loading bundle stats from {}", path.display());
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    trace!("Read {} bytes", content.len());

    let bundle: RawBundleDescriptor =
        content.parse().with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("Loaded {} modules", bundle.module_list().len());
    Ok(bundle)
}
