//! CLI command definitions and handlers

mod analyze;
mod generate;
mod init;
pub(crate) mod play;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use console::style;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::reporters::RenderOptions;

/// Parse and validate an edge probability (0.0-1.0)
fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err("edge probability must be between 0 and 1".to_string())
    }
}

/// Seymour - second-neighbor analysis for directed graphs
#[derive(Parser, Debug)]
#[command(name = "seymour")]
#[command(
    version,
    about = "Check Seymour's Second Neighborhood Conjecture vertex by vertex",
    long_about = "For every vertex v of a directed graph, seymour computes the \
out-neighborhood N1(v) and the second out-neighborhood N2(v), and reports whether \
|N2(v)| >= |N1(v)| (a Seymour vertex).\n\n\
The conjecture says every oriented graph has at least one Seymour vertex.",
    after_help = "\
Examples:
  seymour analyze graph.json                  Classify every vertex
  seymour analyze graph.json --format json    JSON output for scripting
  seymour count graph.json                    Number of Seymour vertices
  seymour generate --nodes 8 --seed 42        Random oriented graph as JSON
  seymour play --game                         Try to eliminate every Seymour vertex"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes priority
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Plain tags instead of emoji in terminal output
    #[arg(long, global = true)]
    pub no_emoji: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every vertex of a graph file
    #[command(after_help = "\
Examples:
  seymour analyze graph.json                       Text report
  seymour analyze graph.json --format json -o r.json
  seymour analyze graph.json --only non-seymour    Only eliminated vertices")]
    Analyze {
        /// Graph file (JSON object with `nodes` and `edges`)
        file: PathBuf,

        /// Output format: text, json (default from config, else text)
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Which vertices to list: all, seymour, non-seymour
        #[arg(long, default_value = "all", value_parser = ["all", "seymour", "non-seymour"])]
        only: String,
    },

    /// Print the number of Seymour vertices in a graph file
    Count {
        /// Graph file
        file: PathBuf,
    },

    /// Generate a random oriented graph (no 2-cycles) as JSON
    Generate {
        /// Number of vertices
        #[arg(long, short = 'n')]
        nodes: Option<usize>,

        /// Chance that a pair of vertices gets an edge
        #[arg(long, short = 'p', value_parser = parse_probability)]
        edge_probability: Option<f64>,

        /// RNG seed for reproducible graphs
        #[arg(long, short = 's')]
        seed: Option<u64>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Interactive editor: change the graph and watch the classification
    #[command(after_help = "\
Type `help` at the prompt for the command list.
In game mode every move counts; the game is won when no Seymour vertex is left.")]
    Play {
        /// Graph file to start from (default: the starter graph)
        file: Option<PathBuf>,

        /// Start with game mode on
        #[arg(long)]
        game: bool,

        /// Start with game mode off, even if the config turns it on
        #[arg(long, conflicts_with = "game")]
        no_game: bool,
    },

    /// Write an example seymour.toml in the current directory
    Init,

    /// Show version info
    Version,
}

/// Print to stdout, or write to `output` and say so on stderr
fn write_output(
    content: &str,
    output: Option<&Path>,
    machine_readable: bool,
    options: RenderOptions,
) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            let file_icon = if options.emoji { "📄 " } else { "" };
            eprintln!(
                "{}Written to: {}",
                style(file_icon).bold(),
                style(path.display()).cyan()
            );
        }
        None => {
            // Keep stdout clean for piping
            if machine_readable {
                println!("{}", content);
            } else {
                print!("{}", content);
            }
        }
    }
    Ok(())
}

/// `--no-game` beats the config, `--game` beats nothing
fn resolve_game_mode(game: bool, no_game: bool, configured: bool) -> bool {
    !no_game && (game || configured)
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = ProjectConfig::load(&cwd);
    let options = RenderOptions {
        emoji: !(cli.no_emoji || config.no_emoji()),
    };

    match cli.command {
        Some(Commands::Analyze {
            file,
            format,
            output,
            only,
        }) => {
            let format = format.unwrap_or_else(|| config.format().to_string());
            analyze::run(&file, &format, output.as_deref(), &only, options)
        }

        Some(Commands::Count { file }) => analyze::count(&file),

        Some(Commands::Generate {
            nodes,
            edge_probability,
            seed,
            output,
        }) => {
            let mut generator = config.random_graph_config();
            if let Some(n) = nodes {
                generator.nodes = n;
            }
            if let Some(p) = edge_probability {
                generator.edge_probability = p;
            }
            if seed.is_some() {
                generator.seed = seed;
            }
            generate::run(&generator, output.as_deref(), options)
        }

        Some(Commands::Play {
            file,
            game,
            no_game,
        }) => {
            let game = resolve_game_mode(game, no_game, config.game_mode());
            play::run(file.as_deref(), game, &config, options)
        }

        Some(Commands::Init) => init::run(&cwd),

        Some(Commands::Version) => {
            println!("seymour {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
