//! Generate command - random oriented graphs as JSON

use anyhow::{Context, Result};
use seymour_core::{format, generate, RandomGraphConfig};
use std::path::Path;
use tracing::info;

use crate::reporters::RenderOptions;

/// Run the generate command
pub fn run(config: &RandomGraphConfig, output: Option<&Path>, options: RenderOptions) -> Result<()> {
    let graph = generate(config).context("Invalid generator settings")?;
    info!(
        "Generated {} vertices, {} edges (p = {}, seed = {:?})",
        graph.vertex_count(),
        graph.edge_count(),
        config.edge_probability,
        config.seed
    );

    let json = format::to_json(&graph)?;
    super::write_output(&json, output, true, options)
}
