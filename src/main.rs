//! Line-driven front-end for the searchbox library.
//!
//! This binary is the thin integration layer between the terminal and the
//! library. Each line read from stdin is either a command or the full text of
//! the search box; after every change the current view model is written to
//! stdout. Logs go to stderr.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Main task (tokio)     │
//! │  ┌──────────────────┐   │
//! │  │ Frontend         │   │  ← stdin lines, rendering, launching
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ LoadHandle   │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ Loader           │   │  ← enumeration on a blocking worker
//! │  │ (spawn_blocking) │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Start**: Read config, initialize tracing, create the session
//! 2. **First query**: The load starts in the background
//! 3. **Loop**: Wait for either the next stdin line or the load to finish
//! 4. **Exit**: `:q`, end of input or launching an application
//!
//! # Configuration
//!
//! The config file is `--config FILE`, else `$SEARCHBOX_CONFIG`, else
//! `~/.config/searchbox/config.toml` when it exists. Positional `key=value`
//! arguments override file values. See `searchbox --help`.
//!
//! # Commands
//!
//! - `:down` / `:up`: Move the selection
//! - `:open`: Launch the selected application
//! - `:open N`: Launch the application in row `N` (1-based)
//! - `:clear`: Clear the search box
//! - `:q`: Close
//! - anything else: Replace the query

use clap::Parser;
use searchbox::ui::{render, OutputFormat};
use searchbox::{Action, Config, Event, SearchSession};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

/// A parsed stdin line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Event(Event),
    Invalid(String),
}

/// Front-end state wrapper.
///
/// Wraps the library's `SearchSession` with terminal concerns: output format,
/// frame size and the launch command.
struct Frontend {
    session: SearchSession,
    output: OutputFormat,
    max_rows: usize,
    launch_command: Option<String>,
}

impl Frontend {
    fn new(config: &Config) -> Self {
        Self {
            session: searchbox::initialize(config),
            output: config.output,
            max_rows: config.max_rows,
            launch_command: config.launch_command.clone(),
        }
    }

    /// Maps a stdin line to an application event.
    fn map_line(line: &str) -> Command {
        let Some(command) = line.strip_prefix(':') else {
            return Command::Event(Event::QueryChanged(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        let event = match (parts.next(), parts.next()) {
            (Some("down"), None) => Event::KeyDown,
            (Some("up"), None) => Event::KeyUp,
            (Some("open"), None) => Event::Select,
            (Some("open"), Some(row)) => match row.parse::<usize>() {
                Ok(row) if row > 0 => Event::SelectAt(row - 1),
                _ => return Command::Invalid(format!("invalid row: {row}")),
            },
            (Some("clear"), None) => Event::ClearQuery,
            (Some("q" | "quit"), None) => Event::Close,
            _ => return Command::Invalid(format!("unknown command: {line}")),
        };
        Command::Event(event)
    }

    /// Handles one event. Returns `false` once the session is over.
    #[tracing::instrument(level = "debug", name = "frontend_update", skip(self))]
    async fn update(&mut self, event: &Event) -> bool {
        match self.session.dispatch(event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                if should_render {
                    self.draw();
                }
                let mut running = true;
                for action in &actions {
                    running &= self.execute_action(action).await;
                }
                running
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                true
            }
        }
    }

    /// Executes a front-end action. Returns `false` when the session ends.
    async fn execute_action(&mut self, action: &Action) -> bool {
        match action {
            Action::Launch { identifier, name } => {
                tracing::info!(identifier = %identifier, name = %name, "launching application");
                println!("launch {identifier}");
                self.launch(identifier).await;
                false
            }
            Action::Close => {
                tracing::debug!("session closed");
                false
            }
            Action::StartLoad | Action::CancelLoad => true,
        }
    }

    async fn launch(&self, identifier: &str) {
        let Some(program) = self.launch_command.as_deref() else {
            return;
        };

        match tokio::process::Command::new(program).arg(identifier).spawn() {
            Ok(mut child) => match child.wait().await {
                Ok(status) if status.success() => {
                    tracing::debug!(program = %program, "launch command finished");
                }
                Ok(status) => {
                    tracing::warn!(program = %program, status = %status, "launch command failed");
                }
                Err(e) => tracing::warn!(program = %program, error = %e, "launch command failed"),
            },
            Err(e) => tracing::warn!(program = %program, error = %e, "failed to spawn launch command"),
        }
    }

    async fn finish_load(&mut self) {
        match self.session.wait_for_load().await {
            Ok(true) => self.draw(),
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "error applying loaded applications"),
        }
    }

    fn draw(&self) {
        match render(&self.session.viewmodel(self.max_rows), self.output) {
            Ok(frame) => println!("{frame}"),
            Err(e) => tracing::warn!(error = %e, "failed to render view"),
        }
    }
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "searchbox", version, about = "Type-to-filter launcher for installed applications")]
struct Cli {
    /// TOML config file. Defaults to `~/.config/searchbox/config.toml` when it exists.
    #[arg(short, long, env = "SEARCHBOX_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Settings applied on top of the config file, e.g. `output=json max_rows=5`.
    #[arg(value_name = "KEY=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, String)>,
}

impl Cli {
    fn override_map(&self) -> BTreeMap<String, String> {
        self.overrides.iter().cloned().collect()
    }
}

fn parse_override(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{arg}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in `{arg}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn load_config(cli: &Cli) -> searchbox::Result<Config> {
    let path = cli
        .config
        .clone()
        .or_else(|| searchbox::infrastructure::config_file().filter(|path| path.is_file()));

    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    Ok(config.with_overrides(&cli.override_map()))
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("searchbox: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };
    searchbox::observability::init_tracing(&config);
    tracing::debug!(config = ?config, "parsed configuration");

    let mut frontend = Frontend::new(&config);
    frontend.draw();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            () = frontend.finish_load(), if frontend.session.is_loading() => {}
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to read stdin");
                        break;
                    }
                };

                match Frontend::map_line(&line) {
                    Command::Event(event) => {
                        if !frontend.update(&event).await {
                            return std::process::ExitCode::SUCCESS;
                        }
                    }
                    Command::Invalid(message) => eprintln!("searchbox: {message}"),
                }
            }
        }
    }

    if let Err(e) = frontend.session.close() {
        tracing::debug!(error = %e, "error closing session");
    }
    std::process::ExitCode::SUCCESS
}
