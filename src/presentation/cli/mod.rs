pub mod commands;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::common::result::{PamsResult, ResultExt};
use crate::domain::entities::AppsConfig;
use crate::infrastructure::console::{LineReader, LineWriter};
use crate::infrastructure::filesystem::AppStore;
use crate::infrastructure::process::{ProcessRunner, SystemProcessRunner};
use commands::{InstallCommand, RunCommand};

/// Usage block printed for a missing or unknown command
pub const USAGE: &str = "Usage:\n  pams install <owner/repo>\n  pams run <app-name>";

/// pams - install script applications from git and run them
#[derive(Parser, Debug)]
#[command(name = "pams")]
#[command(about = "Install script applications from git hosting and run them")]
#[command(version)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Directory holding installed applications
    #[arg(long, global = true, env = "PAMS_APPS_DIR", value_name = "DIR")]
    pub apps_dir: Option<PathBuf>,

    /// Git executable used to clone repositories
    #[arg(long = "git", global = true, env = "PAMS_GIT", value_name = "PATH", default_value = AppsConfig::DEFAULT_GIT)]
    pub git_executable: String,

    /// Interpreter used to run entry scripts
    #[arg(long = "python", global = true, env = "PAMS_PYTHON", value_name = "PATH", default_value = AppsConfig::DEFAULT_INTERPRETER)]
    pub interpreter: String,

    /// Hosting service that owner/repo identifiers refer to
    #[arg(long, global = true, env = "PAMS_HOST", default_value = AppsConfig::DEFAULT_HOST)]
    pub host: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone a repository into the apps directory
    Install {
        /// Repository written as owner/repo
        identifier: Option<String>,

        #[arg(hide = true)]
        extra: Vec<String>,
    },

    /// Run an installed application
    Run {
        /// Name of the application directory
        app_name: Option<String>,

        #[arg(hide = true)]
        extra: Vec<String>,
    },
}

impl Cli {
    /// Configuration assembled from flags, environment and defaults
    pub fn apps_config(&self) -> AppsConfig {
        let apps_dir = self
            .apps_dir
            .clone()
            .unwrap_or_else(AppsConfig::default_apps_dir);

        AppsConfig::new(apps_dir)
            .with_git_executable(&self.git_executable)
            .with_interpreter(&self.interpreter)
            .with_host(&self.host)
    }
}

enum Invocation {
    Command(Cli),
    /// `--help` / `--version` output rendered by clap
    Builtin(clap::Error),
    Unknown(clap::Error),
}

/// CLI application runner
pub struct CliApp {
    invocation: Invocation,
}

impl CliApp {
    pub fn new() -> Self {
        Self::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = normalize_command_token(args.into_iter().map(Into::into).collect());

        let invocation = match Cli::try_parse_from(args) {
            Ok(cli) => Invocation::Command(cli),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Invocation::Builtin(e)
            }
            Err(e) => Invocation::Unknown(e),
        };

        Self { invocation }
    }

    pub fn verbose(&self) -> bool {
        matches!(&self.invocation, Invocation::Command(cli) if cli.verbose)
    }

    /// Run against the real terminal and process table
    pub fn run(self) -> PamsResult<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        self.execute(&SystemProcessRunner::new(), &mut input, &mut output)
    }

    /// Dispatch the parsed command. Logical failures are printed and yield `Ok`.
    pub fn execute(
        self,
        runner: &dyn ProcessRunner,
        input: &mut dyn LineReader,
        output: &mut dyn LineWriter,
    ) -> PamsResult<()> {
        let cli = match self.invocation {
            Invocation::Command(cli) => cli,
            Invocation::Builtin(e) => {
                return output
                    .write_prompt(&e.render().to_string())
                    .with_console_error("Failed to write help");
            }
            Invocation::Unknown(e) => {
                debug!(error = %e.render(), "argument parsing failed");
                output
                    .write_line("Unknown command.")
                    .with_console_error("Failed to write usage")?;
                return print_usage(output);
            }
        };

        if cli.no_color {
            colored::control::set_override(false);
        }

        let Some(command) = cli.command.as_ref() else {
            return print_usage(output);
        };

        let config = cli.apps_config();
        config.validate()?;
        let config = config.resolve_apps_dir()?;

        let store = AppStore::new(&config);
        if let Err(e) = store.ensure_apps_dir() {
            warn!(error = ?e, "cannot prepare apps directory");
            return output
                .write_line(&e.to_string().red().to_string())
                .with_console_error("Failed to write error");
        }

        match command {
            Commands::Install { identifier, extra } => {
                if !extra.is_empty() {
                    debug!(?extra, "ignoring extra arguments");
                }
                InstallCommand::new(identifier.clone()).execute(&config, runner, output)
            }
            Commands::Run { app_name, extra } => {
                if !extra.is_empty() {
                    debug!(?extra, "ignoring extra arguments");
                }
                RunCommand::new(app_name.clone()).execute(&config, runner, input, output)
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

fn print_usage(output: &mut dyn LineWriter) -> PamsResult<()> {
    for line in USAGE.lines() {
        output
            .write_line(line)
            .with_console_error("Failed to write usage")?;
    }
    Ok(())
}

/// Global flags that consume the following argument as their value
const VALUE_FLAGS: &[&str] = &["--apps-dir", "--git", "--python", "--host"];

/// Command names are matched case-insensitively: lowercase the first
/// positional argument, skipping global flags and their values.
fn normalize_command_token(mut args: Vec<OsString>) -> Vec<OsString> {
    let mut index = 1;
    while index < args.len() {
        let Some(text) = args[index].to_str() else {
            break;
        };
        if VALUE_FLAGS.contains(&text) {
            index += 2;
            continue;
        }
        if text.starts_with('-') {
            index += 1;
            continue;
        }
        let lowered = text.to_ascii_lowercase();
        args[index] = OsString::from(lowered);
        break;
    }
    args
}
