//! Init command - write an example seymour.toml

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::config::{EXAMPLE_CONFIG, PROJECT_CONFIG_FILE};

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    let config_path = dir.join(PROJECT_CONFIG_FILE);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\nNext steps:");
    println!("  {} Random graph", style("seymour generate -o graph.json").cyan());
    println!("  {} Classify it", style("seymour analyze graph.json").cyan());
    println!("  {} Play the game", style("seymour play graph.json --game").cyan());

    Ok(())
}
