use std::{fmt, sync::Arc};

use crate::types::ModuleReport;

pub type IdTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;
pub type ReportPredicate = Arc<dyn Fn(&ModuleReport) -> bool + Send + Sync>;

/// Restricts which modules end up in `AnalysisResult::modules`.
///
/// The string forms are matched against normalized ids before sorting; a
/// predicate runs last, over fully enriched reports.
#[derive(Clone)]
pub enum Filter {
    Substring(String),
    AnySubstring(Vec<String>),
    Predicate(ReportPredicate),
}

impl Filter {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&ModuleReport) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Arc::new(f))
    }

    /// Whether `id` passes the string forms of the filter. Predicates always
    /// pass here; they are applied after enrichment.
    pub fn matches_id(&self, id: &str) -> bool {
        match self {
            Filter::Substring(s) => id.contains(s.as_str()),
            Filter::AnySubstring(list) => list.iter().any(|s| id.contains(s.as_str())),
            Filter::Predicate(_) => true,
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Substring(s) => f.debug_tuple("Substring").field(s).finish(),
            Filter::AnySubstring(list) => f.debug_tuple("AnySubstring").field(list).finish(),
            Filter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for Filter {
    fn from(s: &str) -> Self {
        Filter::Substring(s.to_string())
    }
}

impl From<Vec<String>> for Filter {
    fn from(list: Vec<String>) -> Self {
        Filter::AnySubstring(list)
    }
}

/// Options shared by the analyzer, the report formatter and the bundle hook.
///
/// The core never looks at the process environment: `root` must already be
/// resolved by the caller.
#[derive(Clone, Default)]
pub struct AnalyzeOptions {
    /// Stripped from every module id and dependency id
    pub root: Option<String>,
    /// Keep only the `limit` largest modules
    pub limit: Option<usize>,
    pub filter: Option<Filter>,
    /// Applied to ids after root stripping
    pub transform_module_id: Option<IdTransform>,
    /// Omit the per-module dependents listing from the report
    pub hide_deps: bool,
    /// List used/unused exports in the report
    pub show_exports: bool,
}

impl AnalyzeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform_module_id = Some(Arc::new(f));
        self
    }

    pub fn with_hide_deps(mut self, hide: bool) -> Self {
        self.hide_deps = hide;
        self
    }

    pub fn with_show_exports(mut self, show: bool) -> Self {
        self.show_exports = show;
        self
    }

    /// Strip the first occurrence of `root`, then apply the id transform.
    pub fn normalize_id(&self, id: &str) -> String {
        let stripped = strip_root(id, self.root.as_deref());
        match &self.transform_module_id {
            Some(transform) => transform(&stripped),
            None => stripped,
        }
    }
}

impl fmt::Debug for AnalyzeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzeOptions")
            .field("root", &self.root)
            .field("limit", &self.limit)
            .field("filter", &self.filter)
            .field("transform_module_id", &self.transform_module_id.as_ref().map(|_| ".."))
            .field("hide_deps", &self.hide_deps)
            .field("show_exports", &self.show_exports)
            .finish()
    }
}

/// Removes the first occurrence of `root` from `id`.
pub fn strip_root(id: &str, root: Option<&str>) -> String {
    match root {
        Some(root) if !root.is_empty() => id.replacen(root, "", 1),
        _ => id.to_string(),
    }
}
