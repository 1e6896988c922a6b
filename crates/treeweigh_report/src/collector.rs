use indexmap::IndexMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use treeweigh_core::ModuleInput;

/// Per-module info the bundler attaches to an output chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedModule {
    #[serde(default)]
    pub original_length: Option<u64>,
    #[serde(default)]
    pub rendered_length: Option<u64>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub rendered_exports: Option<Vec<String>>,
    #[serde(default)]
    pub removed_exports: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputChunk {
    /// Module id -> module info, in bundler order
    #[serde(default)]
    pub modules: IndexMap<String, RenderedModule>,
}

/// Output file name -> chunk
pub type OutputBundle = IndexMap<String, OutputChunk>;

/// Lets the adapter ask the host bundler which ids a module imports.
pub trait ModuleGraph {
    fn imported_ids(&self, id: &str) -> Vec<String>;
}

/// A host that cannot report imports; every module gets no dependencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModuleGraph;

impl ModuleGraph for NoModuleGraph {
    fn imported_ids(&self, _id: &str) -> Vec<String> {
        Vec::new()
    }
}

impl ModuleGraph for std::collections::HashMap<String, Vec<String>> {
    fn imported_ids(&self, id: &str) -> Vec<String> {
        self.get(id).cloned().unwrap_or_default()
    }
}

/// Flatten every chunk of `bundle` into analyzer input, asking `graph` for each
/// module's imports.
pub fn collect_modules(bundle: &OutputBundle, graph: &dyn ModuleGraph) -> Vec<ModuleInput> {
    debug!("Collecting modules from {} output chunks", bundle.len());
    let mut modules = Vec::new();

    for (file, chunk) in bundle {
        trace!("Chunk {} has {} modules", file, chunk.modules.len());
        for (id, info) in &chunk.modules {
            modules.push(ModuleInput {
                id: id.clone(),
                original_length: info.original_length,
                rendered_length: info.rendered_length,
                code: info.code.clone(),
                dependencies: graph.imported_ids(id),
                rendered_exports: info.rendered_exports.clone(),
                removed_exports: info.removed_exports.clone(),
            });
        }
    }

    debug!("Collected {} modules", modules.len());
    modules
}
