use log::{debug, info, trace};

use crate::{
    config::{AnalyzeOptions, Filter},
    error::{AnalyzeError, Result},
    graph::DependentsIndex,
    metrics::{percent_of, reduction},
    types::{AnalysisResult, ModuleInput, ModuleReport, RawBundleDescriptor},
};

/// A module after id normalization, before filtering.
struct Candidate<'a> {
    id: String,
    size: u64,
    orig_size: u64,
    input: &'a ModuleInput,
}

/// Everything computed over the unfiltered module set.
struct BundleFold<'a> {
    candidates: Vec<Candidate<'a>>,
    dependents: DependentsIndex,
    bundle_size: u64,
    bundle_orig_size: u64,
}

/// Analyze a bundle.
///
/// This is the asynchronous entry point; the work itself is synchronous and
/// done by [`analyze_bundle`]. Failures come back as `Err`, never as a panic.
pub async fn analyze(
    bundle: &RawBundleDescriptor,
    options: &AnalyzeOptions,
) -> Result<AnalysisResult> {
    analyze_bundle(bundle, options)
}

/// Build the size report for `bundle`.
///
/// Totals, `module_count` and dependents are computed over every module;
/// `filter` and `limit` only narrow the returned `modules` list. Modules of
/// equal size are not guaranteed to keep any particular relative order.
pub fn analyze_bundle(
    bundle: &RawBundleDescriptor,
    options: &AnalyzeOptions,
) -> Result<AnalysisResult> {
    let modules = bundle.module_list();
    info!("Analyzing {} modules", modules.len());
    debug!("Options: {:?}", options);

    let fold = fold_modules(modules, options)?;
    debug!(
        "Bundle size: {} bytes, original size: {} bytes, {} modules with importers",
        fold.bundle_size,
        fold.bundle_orig_size,
        fold.dependents.len()
    );

    let reports = build_reports(&fold, options);
    info!("Analysis complete. Reporting {} of {} modules", reports.len(), modules.len());

    Ok(AnalysisResult {
        bundle_size: fold.bundle_size,
        bundle_orig_size: fold.bundle_orig_size,
        bundle_reduction: reduction(fold.bundle_size, fold.bundle_orig_size),
        module_count: modules.len(),
        modules: reports,
    })
}

/// First pass: normalize ids, invert dependency edges and sum sizes over
/// every module, regardless of filtering.
fn fold_modules<'a>(
    modules: &'a [ModuleInput],
    options: &AnalyzeOptions,
) -> Result<BundleFold<'a>> {
    let mut fold = BundleFold {
        candidates: Vec::with_capacity(modules.len()),
        dependents: DependentsIndex::new(),
        bundle_size: 0,
        bundle_orig_size: 0,
    };

    for (index, input) in modules.iter().enumerate() {
        if input.id.is_empty() {
            return Err(AnalyzeError::MissingModuleId { index });
        }

        let id = options.normalize_id(&input.id);
        trace!("Module {} normalized to {}", input.id, id);

        fold.dependents
            .record(&id, input.dependencies.iter().map(|dep| options.normalize_id(dep)));

        let size = input.rendered_size();
        let orig_size = input.original_size();
        fold.bundle_size += size;
        fold.bundle_orig_size += orig_size;

        fold.candidates.push(Candidate { id, size, orig_size, input });
    }

    Ok(fold)
}

/// Second pass: filter, sort, limit, then enrich the survivors.
fn build_reports(fold: &BundleFold<'_>, options: &AnalyzeOptions) -> Vec<ModuleReport> {
    let mut selected: Vec<&Candidate<'_>> = fold
        .candidates
        .iter()
        .filter(|c| {
            let keep = options.filter.as_ref().is_none_or(|f| f.matches_id(&c.id));
            if !keep {
                trace!("Filtered out: {}", c.id);
            }
            keep
        })
        .collect();
    debug!("{} modules passed the id filter", selected.len());

    selected.sort_by(|a, b| b.size.cmp(&a.size));

    if let Some(limit) = options.limit {
        debug!("Limiting report to {} modules", limit);
        selected.truncate(limit);
    }

    let reports = selected.into_iter().map(|c| ModuleReport {
        id: c.id.clone(),
        size: c.size,
        orig_size: c.orig_size,
        percent: percent_of(c.size, fold.bundle_size),
        reduction: reduction(c.size, c.orig_size),
        dependents: fold.dependents.dependents_of(&c.id).to_vec(),
        rendered_exports: c.input.rendered_exports.clone(),
        removed_exports: c.input.removed_exports.clone(),
    });

    match &options.filter {
        Some(Filter::Predicate(predicate)) => reports.filter(|r| predicate(r)).collect(),
        _ => reports.collect(),
    }
}
