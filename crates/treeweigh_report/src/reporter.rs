use std::{
    fmt::{self, Write as _},
    io,
};

use log::{debug, trace};
use treeweigh_core::{AnalysisResult, AnalyzeOptions, ModuleReport, strip_root};

use crate::fmt::{format_bytes, format_percent};

pub const TITLE: &str = "Rollup File Analysis";
const BORDER_WIDTH: usize = 29;
const BUF: &str = " ";
const TAB: &str = "  ";

/// Render `analysis` as the fixed-layout text report.
///
/// Only `root`, `hide_deps` and `show_exports` are read from `options`.
pub fn render_report(analysis: &AnalysisResult, options: &AnalyzeOptions) -> String {
    debug!("Rendering report for {} modules", analysis.modules.len());
    let mut out = String::new();
    match render_into(&mut out, analysis, options) {
        Ok(()) => out,
        Err(e) => e.to_string(),
    }
}

/// Stream the report to `writer`.
pub fn write_report<W: io::Write>(
    writer: &mut W,
    analysis: &AnalysisResult,
    options: &AnalyzeOptions,
) -> io::Result<()> {
    writer.write_all(render_report(analysis, options).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn border() -> String {
    format!("{}\n", "-".repeat(BORDER_WIDTH))
}

fn render_into(
    out: &mut String,
    analysis: &AnalysisResult,
    options: &AnalyzeOptions,
) -> fmt::Result {
    let border = border();

    out.push_str(&border);
    writeln!(out, "{}", TITLE)?;
    out.push_str(&border);
    writeln!(out, "bundle size:    {}", format_bytes(analysis.bundle_size))?;
    writeln!(out, "original size:  {}", format_bytes(analysis.bundle_orig_size))?;
    writeln!(out, "code reduction: {} %", format_percent(analysis.bundle_reduction))?;
    writeln!(out, "module count:   {}", analysis.module_count)?;
    out.push_str(&border);

    for module in &analysis.modules {
        render_module(out, module, options)?;
        out.push_str(&border);
    }

    Ok(())
}

fn render_module(out: &mut String, m: &ModuleReport, options: &AnalyzeOptions) -> fmt::Result {
    trace!("Rendering module: {}", m.id);

    let orig_size =
        if m.orig_size == 0 { "unknown".to_string() } else { format_bytes(m.orig_size) };

    writeln!(out, "file:           {BUF}{}", m.id)?;
    writeln!(out, "bundle space:   {BUF}{} %", format_percent(m.percent))?;
    writeln!(out, "rendered size:  {BUF}{}", format_bytes(m.size))?;
    writeln!(out, "original size:  {BUF}{}", orig_size)?;
    writeln!(out, "code reduction: {BUF}{} %", format_percent(m.reduction))?;
    writeln!(out, "dependents:     {BUF}{}", m.dependents.len())?;

    if !options.hide_deps {
        for dep in &m.dependents {
            writeln!(out, "{TAB}-{BUF}{}", strip_root(dep, options.root.as_deref()))?;
        }
    }

    if options.show_exports
        && let (Some(used), Some(unused)) = (&m.rendered_exports, &m.removed_exports)
    {
        writeln!(out, "used exports:   {BUF}{}", used.len())?;
        for name in used {
            writeln!(out, "{TAB}-{BUF}{}", name)?;
        }
        writeln!(out, "unused exports: {BUF}{}", unused.len())?;
        for name in unused {
            writeln!(out, "{TAB}-{BUF}{}", name)?;
        }
    }

    Ok(())
}
