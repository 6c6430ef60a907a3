// src/cli/handlers.rs
//! Command handlers. Each loads what it needs and prints a report.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::catalog::{self, Catalog};
use crate::config::Config;
use crate::events::{EventKind, EventLogger};
use crate::exit::SeekerExit;
use crate::facets::{FacetAggregator, FacetBucket};
use crate::graph::{render, GraphView, RelationshipFilter};
use crate::recommend::Session;
use crate::search::{FilterContext, SearchIndex, SearchResult};
use crate::shell::{chronological, ComparisonSlots, MAX_COMPARED};

/// Shared inputs for every command.
pub struct AppContext {
    pub catalog: Catalog,
    pub config: Config,
    pub journal: Option<EventLogger>,
}

impl AppContext {
    /// Loads config and catalog.
    ///
    /// # Errors
    /// Returns error if either cannot be read or parsed.
    pub fn load(catalog_path: &Path, config_path: Option<&Path>, journal: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .context("loading configuration")?;

        let catalog = catalog::load_path(catalog_path)
            .with_context(|| format!("loading catalog from {}", catalog_path.display()))?;

        let journal = journal.then(|| EventLogger::new(Path::new(".")));
        if let Some(j) = &journal {
            j.log(EventKind::SessionStarted);
        }
        Ok(Self { catalog, config, journal })
    }

    fn emit(&self, kind: EventKind) {
        if let Some(j) = &self.journal {
            j.log(kind);
        }
    }
}

/// # Errors
/// Returns error on a malformed filter context.
pub fn handle_search(
    ctx: &AppContext,
    filters: &FilterContext,
    page: usize,
    page_size: Option<usize>,
    json: bool,
) -> Result<SeekerExit> {
    let size = page_size.unwrap_or(ctx.config.search.page_size);
    let index = SearchIndex::new(&ctx.catalog);
    let result = index.search(&filters.query, filters, page, size)?;
    ctx.emit(EventKind::SearchPerformed {
        query: filters.query.clone(),
        total: result.total,
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(SeekerExit::Success);
    }

    if result.results.is_empty() {
        println!("{}", "No results.".yellow());
        return Ok(SeekerExit::Success);
    }
    for (n, hit) in result.results.iter().enumerate() {
        let rank = (result.page - 1) * result.page_size + n + 1;
        print_result(rank, hit);
    }
    println!(
        "{}",
        format!(
            "page {} of {} · {} total{}",
            result.page,
            result.page_count().max(1),
            result.total,
            if result.has_more { " · more available" } else { "" }
        )
        .dimmed()
    );
    Ok(SeekerExit::Success)
}

/// # Errors
/// Returns error on a malformed filter context.
pub fn handle_facets(ctx: &AppContext, filters: &FilterContext, json: bool) -> Result<SeekerExit> {
    let facets = FacetAggregator::new(SearchIndex::new(&ctx.catalog)).facets(filters)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(SeekerExit::Success);
    }
    print_facet("Religion", &facets.religions);
    print_facet("Type", &facets.types);
    print_facet("Language", &facets.languages);
    print_facet("Topic", &facets.topics);
    Ok(SeekerExit::Success)
}

/// # Errors
/// Returns error if the focal id is unknown.
pub fn handle_recommend(
    ctx: &AppContext,
    id: &str,
    seen: &[String],
    limit: Option<usize>,
    json: bool,
) -> Result<SeekerExit> {
    let mut session =
        Session::new(ctx.config.recommend.clone()).with_history(seen.iter().collect());
    let limit = limit.unwrap_or(ctx.config.recommend.limit);
    let recs = session.select_with_limit(&ctx.catalog, id, limit)?;
    ctx.emit(EventKind::ResourceSelected { id: id.to_string() });
    ctx.emit(EventKind::RecommendationsServed {
        focal: id.to_string(),
        ids: recs.iter().map(|r| r.id().to_string()).collect(),
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&recs)?);
        return Ok(SeekerExit::Success);
    }
    let name = ctx.catalog.get(id).map_or(id, |r| r.name.as_str());
    println!("{} {}", "Because you opened".dimmed(), name.bold());
    if recs.is_empty() {
        println!("{}", "No recommendations.".yellow());
    }
    for (n, rec) in recs.iter().enumerate() {
        print_result(n + 1, rec);
    }
    Ok(SeekerExit::Success)
}

/// # Errors
/// Returns error if the SVG cannot be written.
pub fn handle_graph(
    ctx: &AppContext,
    filter: RelationshipFilter,
    max_steps: usize,
    svg: Option<&Path>,
    json: bool,
) -> Result<SeekerExit> {
    let mut view = GraphView::new(&ctx.catalog, filter, ctx.config.layout.clone(), &ctx.config.viewport);
    while view.simulation().steps() < max_steps {
        if !matches!(view.tick(), crate::graph::StepOutcome::Moved { .. }) {
            break;
        }
    }
    let steps = view.simulation().steps();
    if view.simulation().is_cool() {
        ctx.emit(EventKind::LayoutCooled { steps });
    }

    if let Some(path) = svg {
        fs::write(path, render::to_svg(&view))
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("{} {}", "Wrote".green(), path.display());
    }

    if json {
        let payload = serde_json::json!({
            "graph": view.graph(),
            "positions": view.simulation().nodes(),
            "steps": steps,
            "cooled": view.simulation().is_cool(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(SeekerExit::Success);
    }

    let graph = view.graph();
    println!(
        "{} nodes, {} edges ({filter}), {} after {steps} steps",
        graph.nodes.len(),
        graph.edges.len(),
        if view.simulation().is_cool() { "settled".green() } else { "still moving".yellow() },
    );
    for node in &graph.nodes {
        let Some(p) = view.simulation().position(&node.id) else {
            continue;
        };
        println!("  {:<24} {:<10} ({:>7.1}, {:>7.1})", node.id, node.kind.label(), p.x, p.y);
    }
    if !graph.dangling.is_empty() {
        println!("{} {}", "unknown:".yellow(), graph.dangling.join(", "));
    }
    Ok(SeekerExit::Success)
}

/// # Errors
/// Returns error on a malformed filter context.
pub fn handle_timeline(ctx: &AppContext, filters: &FilterContext) -> Result<SeekerExit> {
    let ranked = SearchIndex::new(&ctx.catalog).ranked(filters)?;
    let entries = chronological(ranked);
    if entries.is_empty() {
        println!("{}", "No results.".yellow());
    }
    for entry in entries {
        let when = entry
            .date
            .map_or_else(|| "undated   ".dimmed().to_string(), |d| d.to_string());
        println!("{when}  {}", entry.result.resource.name);
    }
    Ok(SeekerExit::Success)
}

/// # Errors
/// Returns error if any id is unknown.
pub fn handle_compare(ctx: &AppContext, ids: &[String]) -> Result<SeekerExit> {
    let mut slots = ComparisonSlots::new();
    for id in ids {
        if !ctx.catalog.contains(id) {
            return Err(crate::error::SeekerError::UnknownResource(id.clone()).into());
        }
        if !slots.add(id) {
            eprintln!(
                "{} {id} not added (comparison holds at most {MAX_COMPARED})",
                "warning:".yellow()
            );
            ctx.emit(EventKind::ComparisonRejected { id: id.clone() });
        }
    }
    ctx.emit(EventKind::ComparisonChanged {
        slots: slots.ids().to_vec(),
    });

    for r in slots.resolve(&ctx.catalog) {
        println!("{}", r.name.bold());
        println!("  type:      {}", r.source_type);
        println!("  religion:  {}", r.religion);
        println!("  language:  {}", r.language);
        println!("  verified:  {}", r.verified_by().unwrap_or(if r.verified { "yes" } else { "no" }));
        println!("  topics:    {}", r.topics.iter().cloned().collect::<Vec<_>>().join(", "));
        println!("  studies:   {}", r.scientific_studies.len());
        println!("  url:       {}", r.url);
    }
    Ok(SeekerExit::Success)
}

/// Reports dangling edges; exits non-zero when any exist.
///
/// # Errors
/// Never fails once the catalog is loaded.
pub fn handle_check(ctx: &AppContext) -> Result<SeekerExit> {
    let report = ctx.catalog.integrity_report();
    if report.is_empty() {
        println!("{} {} resources, no dangling edges", "✓".green(), ctx.catalog.len());
        return Ok(SeekerExit::Success);
    }
    for edge in &report {
        println!(
            "{} {} -[{}]-> {} (missing)",
            "✗".red(),
            edge.source,
            edge.relationship,
            edge.target
        );
    }
    Ok(SeekerExit::IntegrityWarning)
}

fn print_result(rank: usize, hit: &SearchResult) {
    let r = &hit.resource;
    let badge = if r.verified { "✓".green().to_string() } else { " ".to_string() };
    println!(
        "{rank:>3}. {badge} {} {}",
        r.name.bold(),
        format!("[{} · {} · {}]", r.source_type, r.religion, r.language).dimmed()
    );
    if hit.score > 0.0 {
        println!("       {}", format!("score {:.2}", hit.score).dimmed());
    }
}

fn print_facet(title: &str, buckets: &[FacetBucket]) {
    println!("{}", title.bold());
    if buckets.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for b in buckets {
        println!("  {:<28} {}", b.value, b.count.to_string().cyan());
    }
}
