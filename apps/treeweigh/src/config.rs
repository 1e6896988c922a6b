use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use path_clean::PathClean;
use std::{env, path::PathBuf};
use treeweigh_core::{AnalyzeOptions, Filter};

#[derive(Debug, Clone, Parser)]
#[command(name = "report")]
#[command(about = "Report module sizes from a bundle stats file")]
pub struct ReportArgs {
    /// JSON file with the bundle's module list
    pub stats: PathBuf,

    /// Prefix removed from module ids (defaults to the current directory)
    #[arg(long)]
    pub root: Option<String>,

    /// Only report the N largest modules
    #[arg(long)]
    pub limit: Option<usize>,

    /// Only report modules whose id contains this text (repeatable)
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Do not list each module's dependents
    #[arg(long)]
    pub hide_deps: bool,

    /// List used and unused exports
    #[arg(long)]
    pub show_exports: bool,

    /// Print the analysis as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl ReportArgs {
    /// Build analyzer options, resolving the default root from the working directory.
    pub fn analyze_options(&self) -> Result<AnalyzeOptions> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => {
                let cwd = env::current_dir().context("Could not read current directory")?;
                cwd.clean().to_string_lossy().to_string()
            }
        };
        debug!("Using root: {}", root);

        let mut options = AnalyzeOptions::new()
            .with_root(root)
            .with_hide_deps(self.hide_deps)
            .with_show_exports(self.show_exports);
        options.limit = self.limit;
        options.filter = filter_from_args(&self.filters);
        Ok(options)
    }
}

fn filter_from_args(filters: &[String]) -> Option<Filter> {
    match filters {
        [] => None,
        [single] => Some(Filter::Substring(single.clone())),
        many => Some(Filter::AnySubstring(many.to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ReportArgs {
        ReportArgs::parse_from(std::iter::once("report").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&["stats.json"]);
        assert_eq!(args.stats, PathBuf::from("stats.json"));
        assert!(args.root.is_none());
        assert!(args.limit.is_none());
        assert!(args.filters.is_empty());
        assert!(!args.hide_deps && !args.show_exports && !args.json);
    }

    #[test]
    fn test_explicit_root_is_kept() {
        let opts = parse(&["stats.json", "--root", "/app/"]).analyze_options().unwrap();
        assert_eq!(opts.root.as_deref(), Some("/app/"));
    }

    #[test]
    fn test_default_root_is_cwd() {
        let opts = parse(&["stats.json"]).analyze_options().unwrap();
        let cwd = env::current_dir().unwrap().clean();
        assert_eq!(opts.root, Some(cwd.to_string_lossy().to_string()));
    }

    #[test]
    fn test_single_filter_is_substring() {
        let opts = parse(&["s.json", "--root", "/", "--filter", "src"]).analyze_options().unwrap();
        assert!(matches!(opts.filter, Some(Filter::Substring(ref s)) if s == "src"));
    }

    #[test]
    fn test_repeated_filter_is_any_substring() {
        let opts = parse(&["s.json", "--root", "/", "--filter", "src", "--filter", "lib"])
            .analyze_options()
            .unwrap();
        assert!(matches!(opts.filter, Some(Filter::AnySubstring(ref l)) if l.len() == 2));
    }

    #[test]
    fn test_flags() {
        let args = ["s.json", "--root", "/", "--limit", "5", "--hide-deps", "--show-exports"];
        let opts = parse(&args).analyze_options().unwrap();
        assert_eq!(opts.limit, Some(5));
        assert!(opts.hide_deps);
        assert!(opts.show_exports);
    }
}
