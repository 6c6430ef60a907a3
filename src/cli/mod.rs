// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, FilterArgs};
pub use handlers::AppContext;

use anyhow::Result;

use crate::exit::SeekerExit;

/// Loads shared inputs and runs the selected command.
///
/// # Errors
/// Returns error if loading or the command itself fails.
pub fn dispatch(cli: &Cli) -> Result<SeekerExit> {
    let ctx = AppContext::load(&cli.catalog, cli.config.as_deref(), cli.journal)?;

    match &cli.command {
        Commands::Search {
            filters,
            page,
            page_size,
            json,
        } => handlers::handle_search(&ctx, &filters.to_context(), *page, *page_size, *json),
        Commands::Facets { filters, json } => {
            handlers::handle_facets(&ctx, &filters.to_context(), *json)
        }
        Commands::Recommend {
            id,
            seen,
            limit,
            json,
        } => handlers::handle_recommend(&ctx, id, seen, *limit, *json),
        Commands::Graph {
            relationship,
            max_steps,
            svg,
            json,
        } => handlers::handle_graph(&ctx, *relationship, *max_steps, svg.as_deref(), *json),
        Commands::Timeline { filters } => handlers::handle_timeline(&ctx, &filters.to_context()),
        Commands::Compare { ids } => handlers::handle_compare(&ctx, ids),
        Commands::Check => handlers::handle_check(&ctx),
    }
}
