//! Adapter for running the analysis as a bundler's generate-bundle hook.
//!
//! The host hands over its output chunks and a way to look up a module's
//! imports; the hook assembles the analyzer input, reports the result to an
//! optional callback and writes the text report to a sink.

use std::{
    fmt,
    io::{self, Write},
    sync::Arc,
};

use log::{debug, error, info};
use treeweigh_core::{AnalysisResult, AnalyzeOptions, RawBundleDescriptor, analyze};

use crate::{
    collector::{ModuleGraph, OutputBundle, collect_modules},
    reporter::render_report,
};

pub type AnalysisCallback = Arc<dyn Fn(&AnalysisResult) + Send + Sync>;

/// Where the formatted report goes.
#[derive(Clone)]
pub enum ReportSink {
    Stdout,
    Stderr,
    Custom(Arc<dyn Fn(&str) + Send + Sync>),
}

impl ReportSink {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        ReportSink::Custom(Arc::new(f))
    }

    pub fn write(&self, report: &str) -> io::Result<()> {
        match self {
            ReportSink::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", report)?;
                out.flush()
            }
            ReportSink::Stderr => {
                let mut out = io::stderr().lock();
                writeln!(out, "{}", report)?;
                out.flush()
            }
            ReportSink::Custom(f) => {
                f(report);
                Ok(())
            }
        }
    }
}

impl fmt::Debug for ReportSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSink::Stdout => f.write_str("Stdout"),
            ReportSink::Stderr => f.write_str("Stderr"),
            ReportSink::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Clone, Default)]
pub struct HookOptions {
    pub analyze: AnalyzeOptions,
    /// Called with every completed analysis
    pub on_analysis: Option<AnalysisCallback>,
    /// Do not write the text report
    pub skip_formatted: bool,
    /// Overrides the default sink
    pub write_to: Option<ReportSink>,
    /// Default sink is stdout instead of stderr
    pub stdout: bool,
}

impl HookOptions {
    pub fn new(analyze: AnalyzeOptions) -> Self {
        Self { analyze, ..Default::default() }
    }

    pub fn on_analysis<F>(mut self, f: F) -> Self
    where
        F: Fn(&AnalysisResult) + Send + Sync + 'static,
    {
        self.on_analysis = Some(Arc::new(f));
        self
    }

    pub fn skip_formatted(mut self, skip: bool) -> Self {
        self.skip_formatted = skip;
        self
    }

    pub fn write_to(mut self, sink: ReportSink) -> Self {
        self.write_to = Some(sink);
        self
    }

    pub fn stdout(mut self, stdout: bool) -> Self {
        self.stdout = stdout;
        self
    }

    pub fn sink(&self) -> ReportSink {
        match &self.write_to {
            Some(sink) => sink.clone(),
            None if self.stdout => ReportSink::Stdout,
            None => ReportSink::Stderr,
        }
    }
}

impl fmt::Debug for HookOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookOptions")
            .field("analyze", &self.analyze)
            .field("on_analysis", &self.on_analysis.as_ref().map(|_| ".."))
            .field("skip_formatted", &self.skip_formatted)
            .field("write_to", &self.write_to)
            .field("stdout", &self.stdout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzerHook {
    options: HookOptions,
}

impl AnalyzerHook {
    pub fn new(options: HookOptions) -> Self {
        Self { options }
    }

    pub fn name(&self) -> &'static str {
        "treeweigh-analyzer"
    }

    /// Analyze the finished bundle.
    ///
    /// Failures are logged and swallowed so the host build is never aborted by
    /// the report.
    pub async fn generate_bundle(&self, bundle: &OutputBundle, graph: &dyn ModuleGraph) {
        let modules = collect_modules(bundle, graph);
        info!("{}: analyzing {} modules", self.name(), modules.len());

        let descriptor = RawBundleDescriptor::new(modules);
        match analyze(&descriptor, &self.options.analyze).await {
            Ok(analysis) => self.on_analysis(&analysis),
            Err(e) => error!("{}: analysis failed: {}", self.name(), e),
        }
    }

    fn on_analysis(&self, analysis: &AnalysisResult) {
        if let Some(callback) = &self.options.on_analysis {
            debug!("Invoking analysis callback");
            callback(analysis);
        }

        if self.options.skip_formatted {
            debug!("Skipping formatted report");
            return;
        }

        let report = render_report(analysis, &self.options.analyze);
        if let Err(e) = self.options.sink().write(&report) {
            error!("{}: could not write report: {}", self.name(), e);
        }
    }
}
