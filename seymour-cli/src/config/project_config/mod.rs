//! Project-level configuration support
//!
//! Loads per-project configuration from `seymour.toml` or `.seymourrc.json`
//! in the working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # seymour.toml
//!
//! [defaults]
//! format = "text"      # text | json
//! no_emoji = false
//!
//! [generator]
//! nodes = 6
//! edge_probability = 0.3
//! # seed = 42
//!
//! [editor]
//! mutual_edges = "reverse"   # reverse | reject | allow
//! game_mode = false
//! ```

use seymour_core::{EditPolicy, MutualEdgePolicy, RandomGraphConfig};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use super::user_config::UserConfig;

pub const PROJECT_CONFIG_FILE: &str = "seymour.toml";
pub const PROJECT_CONFIG_JSON: &str = ".seymourrc.json";

/// Default CLI flags that can be set in config
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Disable emoji by default
    #[serde(default)]
    pub no_emoji: Option<bool>,
}

/// Random graph defaults
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub nodes: Option<usize>,
    #[serde(default)]
    pub edge_probability: Option<f64>,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Editor and game defaults
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct EditorConfig {
    #[serde(default)]
    pub mutual_edges: Option<MutualEdgePolicy>,
    #[serde(default)]
    pub game_mode: Option<bool>,
}

/// Merged configuration (user file < project file < environment)
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ProjectConfig {
    #[serde(default)]
    pub defaults: CliDefaults,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

impl ProjectConfig {
    /// Load user config, then project config from `dir`, then environment.
    pub fn load(dir: &Path) -> Self {
        let mut config = UserConfig::load();
        config.merge(load_project_config(dir));
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: ProjectConfig) {
        self.defaults.format = other.defaults.format.or(self.defaults.format.take());
        self.defaults.no_emoji = other.defaults.no_emoji.or(self.defaults.no_emoji);
        self.generator.nodes = other.generator.nodes.or(self.generator.nodes);
        self.generator.edge_probability = other
            .generator
            .edge_probability
            .or(self.generator.edge_probability);
        self.generator.seed = other.generator.seed.or(self.generator.seed);
        self.editor.mutual_edges = other.editor.mutual_edges.or(self.editor.mutual_edges);
        self.editor.game_mode = other.editor.game_mode.or(self.editor.game_mode);
    }

    /// Environment variables override file settings.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("SEYMOUR_NODES") {
            match raw.trim().parse() {
                Ok(n) => self.generator.nodes = Some(n),
                Err(_) => warn!("Ignoring SEYMOUR_NODES={:?}: not a vertex count", raw),
            }
        }
        if let Some(raw) = lookup("SEYMOUR_EDGE_PROBABILITY") {
            match raw.trim().parse() {
                Ok(p) => self.generator.edge_probability = Some(p),
                Err(_) => warn!("Ignoring SEYMOUR_EDGE_PROBABILITY={:?}: not a number", raw),
            }
        }
        if let Some(raw) = lookup("SEYMOUR_SEED") {
            match raw.trim().parse() {
                Ok(seed) => self.generator.seed = Some(seed),
                Err(_) => warn!("Ignoring SEYMOUR_SEED={:?}: not an integer", raw),
            }
        }
    }

    pub fn format(&self) -> &str {
        self.defaults.format.as_deref().unwrap_or("text")
    }

    pub fn no_emoji(&self) -> bool {
        self.defaults.no_emoji.unwrap_or(false)
    }

    pub fn game_mode(&self) -> bool {
        self.editor.game_mode.unwrap_or(false)
    }

    pub fn edit_policy(&self) -> EditPolicy {
        EditPolicy {
            mutual_edges: self.editor.mutual_edges.unwrap_or_default(),
        }
    }

    pub fn random_graph_config(&self) -> RandomGraphConfig {
        let defaults = RandomGraphConfig::default();
        RandomGraphConfig {
            nodes: self.generator.nodes.unwrap_or(defaults.nodes),
            edge_probability: self
                .generator
                .edge_probability
                .unwrap_or(defaults.edge_probability),
            seed: self.generator.seed,
        }
    }
}

/// Load project configuration from `dir`, falling back to defaults.
///
/// Tries `seymour.toml` first, then `.seymourrc.json`. A file that fails to
/// parse is reported and skipped.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(PROJECT_CONFIG_FILE);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(PROJECT_CONFIG_JSON);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from a TOML file
pub(crate) fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from a JSON file
fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Example written by `seymour init`
pub const EXAMPLE_CONFIG: &str = r#"# Seymour configuration
# Flags given on the command line take priority over these values.

[defaults]
# Output format for `seymour analyze` (text, json)
format = "text"
# no_emoji = true

[generator]
# Random graphs: each pair of vertices gets one edge with this probability,
# pointing in a random direction (never a 2-cycle)
nodes = 6
edge_probability = 0.3
# seed = 42

[editor]
# Adding u -> v when v -> u exists: reverse | reject | allow
mutual_edges = "reverse"
# Start `seymour play` with the move counter running
game_mode = false
"#;
