use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzeError, Result};

/// A single module record as handed over by the bundler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInput {
    pub id: String,
    /// Size in bytes before dead-code elimination
    #[serde(default)]
    pub original_length: Option<u64>,
    /// Size in bytes after dead-code elimination
    #[serde(default)]
    pub rendered_length: Option<u64>,
    /// Rendered source text, used for sizing when `rendered_length` is absent
    #[serde(default)]
    pub code: Option<String>,
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub rendered_exports: Option<Vec<String>>,
    #[serde(default)]
    pub removed_exports: Option<Vec<String>>,
}

impl ModuleInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    pub fn with_sizes(mut self, rendered: u64, original: u64) -> Self {
        self.rendered_length = Some(rendered);
        self.original_length = Some(original);
        self
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exports(mut self, rendered: Vec<String>, removed: Vec<String>) -> Self {
        self.rendered_exports = Some(rendered);
        self.removed_exports = Some(removed);
        self
    }

    /// Rendered size in bytes: the explicit length if present, otherwise the
    /// UTF-8 length of `code`, otherwise 0.
    pub fn rendered_size(&self) -> u64 {
        match (self.rendered_length, &self.code) {
            (Some(len), _) => len,
            (None, Some(code)) => code.len() as u64,
            (None, None) => 0,
        }
    }

    pub fn original_size(&self) -> u64 {
        self.original_length.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleCache {
    #[serde(default)]
    pub modules: Vec<ModuleInput>,
}

/// Module metadata for one bundle, either listed directly or via the build cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBundleDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<ModuleInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<BundleCache>,
}

impl RawBundleDescriptor {
    pub fn new(modules: Vec<ModuleInput>) -> Self {
        Self { modules: Some(modules), cache: None }
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|source| AnalyzeError::Malformed { source })
    }

    /// The module list, preferring `modules` over `cache.modules`.
    pub fn module_list(&self) -> &[ModuleInput] {
        match (&self.modules, &self.cache) {
            (Some(modules), _) => modules,
            (None, Some(cache)) => &cache.modules,
            (None, None) => &[],
        }
    }
}

impl FromStr for RawBundleDescriptor {
    type Err = AnalyzeError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|source| AnalyzeError::Malformed { source })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReport {
    pub id: String,
    pub size: u64,
    pub orig_size: u64,
    /// Share of the total rendered bundle size, 0..=100
    pub percent: f64,
    pub reduction: f64,
    /// Ids of the modules importing this one
    pub dependents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_exports: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_exports: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub bundle_size: u64,
    pub bundle_orig_size: u64,
    pub bundle_reduction: f64,
    pub module_count: usize,
    pub modules: Vec<ModuleReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_size_prefers_explicit_length() {
        let mut m = ModuleInput::new("a.js").with_sizes(10, 20);
        m.code = Some("a much longer piece of code".to_string());
        assert_eq!(m.rendered_size(), 10);
    }

    #[test]
    fn test_rendered_size_keeps_explicit_zero() {
        let mut m = ModuleInput::new("a.js").with_sizes(0, 20);
        m.code = Some("abc".to_string());
        assert_eq!(m.rendered_size(), 0);
    }

    #[test]
    fn test_rendered_size_falls_back_to_code_bytes() {
        let mut m = ModuleInput::new("a.js");
        // "é" is two bytes in UTF-8
        m.code = Some("é!".to_string());
        assert_eq!(m.rendered_size(), 3);
    }

    #[test]
    fn test_rendered_size_defaults_to_zero() {
        assert_eq!(ModuleInput::new("a.js").rendered_size(), 0);
    }

    #[test]
    fn test_module_list_prefers_modules_over_cache() {
        let bundle = RawBundleDescriptor {
            modules: Some(vec![ModuleInput::new("direct")]),
            cache: Some(BundleCache { modules: vec![ModuleInput::new("cached")] }),
        };
        assert_eq!(bundle.module_list()[0].id, "direct");
    }

    #[test]
    fn test_module_list_uses_cache() {
        let bundle = RawBundleDescriptor {
            modules: None,
            cache: Some(BundleCache { modules: vec![ModuleInput::new("cached")] }),
        };
        assert_eq!(bundle.module_list().len(), 1);
        assert_eq!(bundle.module_list()[0].id, "cached");
    }

    #[test]
    fn test_module_list_empty() {
        assert!(RawBundleDescriptor::default().module_list().is_empty());
    }

    #[test]
    fn test_parse_camel_case_json() {
        let bundle: RawBundleDescriptor = r#"{
            "modules": [{
                "id": "/src/a.js",
                "originalLength": 120,
                "renderedLength": 80,
                "dependencies": ["/src/b.js"],
                "renderedExports": ["a"],
                "removedExports": ["b", "c"]
            }]
        }"#
        .parse()
        .unwrap();

        let m = &bundle.module_list()[0];
        assert_eq!(m.id, "/src/a.js");
        assert_eq!(m.original_length, Some(120));
        assert_eq!(m.rendered_length, Some(80));
        assert_eq!(m.dependencies, vec!["/src/b.js".to_string()]);
        assert_eq!(m.removed_exports.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_parse_rejects_module_without_dependencies() {
        let err =
            r#"{ "modules": [{ "id": "a.js" }] }"#.parse::<RawBundleDescriptor>().unwrap_err();
        assert!(matches!(err, AnalyzeError::Malformed { .. }));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = RawBundleDescriptor::from_value(serde_json::json!([1, 2, 3])).unwrap_err();
        assert!(err.to_string().contains("malformed bundle descriptor"));
    }
}
