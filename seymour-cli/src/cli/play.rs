//! Play command - interactive graph editor and elimination game
//!
//! Reads one command per line, applies it to a [`GameSession`] and prints the
//! updated classification. In game mode the moves are counted and the game is
//! won once no Seymour vertex is left.

use anyhow::Result;
use console::style;
use seymour_core::{analyze_vertex, GameSession, Move, RandomGraphConfig};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::ProjectConfig;
use crate::graph::{load_editable_graph, save_graph};
use crate::reporters::{render_status, vertex_marker, RenderOptions};

const HELP: &str = "\
Commands:
  add                 add a vertex (next free id)
  rm <v>              remove vertex v and its edges
  edge <u> <v>        add edge u -> v (reverses v -> u if present)
  unedge <u> <v>      remove edge u -> v
  flip <u> <v>        reverse edge u -> v
  clear               remove everything
  random [seed]       replace the graph with a random oriented graph
  show                print the classification
  vertex <v>          details for one vertex
  game on|off         toggle move counting
  reset               zero the move counter
  save <path>         write the graph as JSON
  help                this text
  quit                leave";

/// One parsed editor line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Apply(Move),
    Random(Option<u64>),
    Show,
    Vertex(u32),
    Game(bool),
    Reset,
    Save(PathBuf),
    Help,
    Quit,
}

/// Settings the loop needs besides the session
#[derive(Debug, Clone)]
pub struct PlayContext {
    pub random: RandomGraphConfig,
    pub options: RenderOptions,
}

fn vertex_arg(arg: Option<&str>) -> Result<u32, String> {
    let arg = arg.ok_or_else(|| "missing vertex id".to_string())?;
    arg.parse()
        .map_err(|_| format!("expected a vertex id, got '{}'", arg))
}

fn edge_args(args: &[&str]) -> Result<(u32, u32), String> {
    if args.len() != 2 {
        return Err("expected two vertex ids".to_string());
    }
    Ok((vertex_arg(Some(args[0]))?, vertex_arg(Some(args[1]))?))
}

/// Parse an editor line. Blank lines and `#` comments give `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut parts = line.split_whitespace();
    let Some(name) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let command = match name.to_lowercase().as_str() {
        "add" | "a" => Command::Apply(Move::AddVertex),
        "rm" | "remove" => Command::Apply(Move::RemoveVertex(vertex_arg(args.first().copied())?)),
        "edge" | "e" => {
            let (u, v) = edge_args(&args)?;
            Command::Apply(Move::AddEdge(u, v))
        }
        "unedge" => {
            let (u, v) = edge_args(&args)?;
            Command::Apply(Move::RemoveEdge(u, v))
        }
        "flip" | "reverse" => {
            let (u, v) = edge_args(&args)?;
            Command::Apply(Move::ReverseEdge(u, v))
        }
        "clear" => Command::Apply(Move::Clear),
        "random" => match args.first() {
            None => Command::Random(None),
            Some(seed) => Command::Random(Some(
                seed.parse()
                    .map_err(|_| format!("expected a seed, got '{}'", seed))?,
            )),
        },
        "show" | "s" => Command::Show,
        "vertex" | "v" => Command::Vertex(vertex_arg(args.first().copied())?),
        "game" => match args.first().copied() {
            Some("on") => Command::Game(true),
            Some("off") => Command::Game(false),
            _ => return Err("usage: game on|off".to_string()),
        },
        "reset" => Command::Reset,
        "save" => match args.first() {
            Some(path) => Command::Save(PathBuf::from(path)),
            None => return Err("usage: save <path>".to_string()),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{}' (try `help`)", other)),
    };
    Ok(Some(command))
}

/// Run the play command on stdin/stdout
pub fn run(
    file: Option<&Path>,
    game: bool,
    config: &ProjectConfig,
    options: RenderOptions,
) -> Result<()> {
    let graph = match file {
        Some(path) => load_editable_graph(path)?,
        None => GameSession::starter_graph(),
    };
    let mut session = GameSession::with_graph(graph).with_policy(config.edit_policy());
    session.set_game_mode(game)?;
    info!(
        "Editing {} vertices (mutual edges: {})",
        session.graph().vertex_count(),
        session.policy().mutual_edges
    );

    let ctx = PlayContext {
        random: config.random_graph_config(),
        options,
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_loop(&mut session, stdin.lock(), &mut stdout.lock(), &ctx)
}

/// Read commands from `input` until EOF or `quit`.
///
/// Command errors are printed and the loop keeps going; only I/O errors end it.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    out: &mut W,
    ctx: &PlayContext,
) -> Result<()> {
    writeln!(out, "{} (type `help` for commands)", style("Seymour editor").bold())?;
    print_status(session, out, ctx)?;
    announce_win(session, false, out, ctx)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{} {}", style("error:").red().bold(), msg)?;
                continue;
            }
        };
        debug!("play command: {:?}", command);

        if !execute(session, command, out, ctx)? {
            break;
        }
    }
    Ok(())
}

/// Returns false when the loop should stop.
fn execute<W: Write>(
    session: &mut GameSession,
    command: Command,
    out: &mut W,
    ctx: &PlayContext,
) -> Result<bool> {
    match command {
        Command::Apply(mv) => apply_move(session, mv, out, ctx)?,
        Command::Random(seed) => {
            let config = RandomGraphConfig {
                seed,
                ..ctx.random.clone()
            };
            apply_move(session, Move::Randomize(config), out, ctx)?;
        }
        Command::Show => print_status(session, out, ctx)?,
        Command::Vertex(v) => match analyze_vertex(session.graph(), &v) {
            Ok(a) => {
                let join = |set: &indexmap::IndexSet<u32>| {
                    set.iter().map(|w| w.to_string()).collect::<Vec<_>>().join(", ")
                };
                writeln!(
                    out,
                    "{} {}: N1 = {{{}}}  N2 = {{{}}}  |N1| = {}  |N2| = {}  ratio {:.2}",
                    vertex_marker(a.is_seymour, ctx.options),
                    v,
                    join(&a.first_neighbors),
                    join(&a.second_neighbors),
                    a.out_degree,
                    a.second_degree,
                    a.ratio
                )?;
            }
            Err(e) => writeln!(out, "{} {}", style("error:").red().bold(), e)?,
        },
        Command::Game(on) => {
            let was_won = session.is_won();
            session.set_game_mode(on)?;
            writeln!(
                out,
                "Game mode {} (moves: {})",
                if on { "on" } else { "off" },
                session.moves()
            )?;
            announce_win(session, was_won, out, ctx)?;
        }
        Command::Reset => {
            session.reset_game();
            writeln!(out, "Move counter reset")?;
        }
        Command::Save(path) => match save_graph(session.graph(), &path) {
            Ok(()) => writeln!(out, "Saved to {}", path.display())?,
            Err(e) => writeln!(out, "{} {:#}", style("error:").red().bold(), e)?,
        },
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn apply_move<W: Write>(
    session: &mut GameSession,
    mv: Move,
    out: &mut W,
    ctx: &PlayContext,
) -> Result<()> {
    let was_won = session.is_won();
    match session.apply(mv) {
        Ok(outcome) => {
            writeln!(out, "{}", outcome)?;
            if outcome.changed_graph() {
                print_status(session, out, ctx)?;
            }
            announce_win(session, was_won, out, ctx)?;
        }
        Err(e) => writeln!(out, "{} {}", style("error:").red().bold(), e)?,
    }
    Ok(())
}

fn announce_win<W: Write>(
    session: &GameSession,
    was_won: bool,
    out: &mut W,
    ctx: &PlayContext,
) -> Result<()> {
    if session.is_won() && !was_won {
        let tag = if ctx.options.emoji { "🎉 " } else { "" };
        writeln!(
            out,
            "{}{}",
            tag,
            style(format!(
                "All Seymour vertices eliminated in {} moves!",
                session.moves()
            ))
            .green()
            .bold()
        )?;
    }
    Ok(())
}

fn print_status<W: Write>(session: &GameSession, out: &mut W, ctx: &PlayContext) -> Result<()> {
    let analysis = session.analysis()?;
    let summary = session.summary()?;
    write!(out, "{}", render_status(&analysis, &summary, ctx.options))?;
    if session.game_mode() {
        writeln!(out, "Moves: {}", session.moves())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seymour_core::{EditPolicy, MutualEdgePolicy};
    use std::io::Cursor;

    fn ctx() -> PlayContext {
        console::set_colors_enabled(false);
        PlayContext {
            random: RandomGraphConfig::default(),
            options: RenderOptions { emoji: false },
        }
    }

    fn play(session: &mut GameSession, script: &str) -> String {
        let mut out = Vec::new();
        run_loop(session, Cursor::new(script), &mut out, &ctx()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("add").unwrap(), Some(Command::Apply(Move::AddVertex)));
        assert_eq!(
            parse_command("  edge 1 2 ").unwrap(),
            Some(Command::Apply(Move::AddEdge(1, 2)))
        );
        assert_eq!(
            parse_command("flip 2 0").unwrap(),
            Some(Command::Apply(Move::ReverseEdge(2, 0)))
        );
        assert_eq!(parse_command("random 7").unwrap(), Some(Command::Random(Some(7))));
        assert_eq!(parse_command("game on").unwrap(), Some(Command::Game(true)));
        assert_eq!(
            parse_command("save out.json").unwrap(),
            Some(Command::Save(PathBuf::from("out.json")))
        );
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("# note").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("edge 1").is_err());
        assert!(parse_command("rm x").is_err());
        assert!(parse_command("game maybe").is_err());
        assert!(parse_command("jump").is_err());
    }

    #[test]
    fn test_starter_graph_status() {
        let mut session = GameSession::new();
        let out = play(&mut session, "show\nquit\n");
        assert!(out.contains("[ ] 1"));
        assert!(out.contains("Seymour: 3  Non-Seymour: 1"));
    }

    #[test]
    fn test_edit_reverses_mutual_edge() {
        let mut session = GameSession::new();
        let out = play(&mut session, "edge 1 0\n");
        assert!(out.contains("Reversed edge: now 1 → 0"));
        assert!(session.graph().has_edge(&1, &0));
        assert!(!session.graph().has_edge(&0, &1));
    }

    #[test]
    fn test_errors_keep_loop_running() {
        let mut session = GameSession::new();
        let out = play(&mut session, "edge 0 0\nrm 9\nadd\n");
        assert!(out.contains("self-loop on 0 is not allowed"));
        assert!(out.contains("unknown vertex: 9"));
        assert!(out.contains("Added vertex 4"));
        assert_eq!(session.graph().vertex_count(), 5);
    }

    #[test]
    fn test_game_win_is_announced_once() {
        let mut session = GameSession::new().with_policy(EditPolicy {
            mutual_edges: MutualEdgePolicy::Allow,
        });
        let out = play(
            &mut session,
            "game on\nclear\nadd\nadd\nedge 0 1\nedge 1 0\nadd\nrm 2\nquit\n",
        );
        assert!(session.is_won());
        assert_eq!(session.moves(), 7);
        assert_eq!(out.matches("All Seymour vertices eliminated in 5 moves!").count(), 1);
        assert!(out.contains("Moves: 7"));
    }

    #[test]
    fn test_win_latched_before_loop_is_announced() {
        let graph = seymour_core::Digraph::from_edges([(0u32, 1u32), (1, 0)]);
        let mut session = GameSession::with_graph(graph).with_policy(EditPolicy {
            mutual_edges: MutualEdgePolicy::Allow,
        });
        session.set_game_mode(true).unwrap();
        assert!(session.is_won());

        let out = play(&mut session, "show\nadd\nquit\n");
        assert_eq!(out.matches("All Seymour vertices eliminated in 0 moves!").count(), 1);
        assert!(!out.contains("eliminated in 1 moves"));
    }

    #[test]
    fn test_moves_not_counted_outside_game() {
        let mut session = GameSession::new();
        play(&mut session, "add\nedge 3 4\n");
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_vertex_details() {
        let mut session = GameSession::new();
        let out = play(&mut session, "vertex 1\nvertex 42\n");
        assert!(out.contains("[ ] 1: N1 = {2, 3}  N2 = {0}"));
        assert!(out.contains("unknown vertex: 42"));
    }

    #[test]
    fn test_random_with_seed_is_reproducible() {
        let mut a = GameSession::new();
        let mut b = GameSession::new();
        play(&mut a, "random 11\n");
        play(&mut b, "random 11\n");
        assert_eq!(a.graph(), b.graph());
        assert_eq!(a.graph().vertex_count(), 6);
        assert!(a.graph().is_oriented());
    }

    #[test]
    fn test_save_writes_graph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");
        let mut session = GameSession::new();
        let out = play(&mut session, &format!("save {}\n", path.display()));
        assert!(out.contains("Saved to"));
        assert_eq!(&load_editable_graph(&path).unwrap(), session.graph());
    }
}
