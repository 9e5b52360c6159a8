mod commands;
mod config;
mod logging;
mod session;
mod shell;
mod ui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use commands::calc::CalcArgs;
use config::Settings;
use session::Session;
use ui::theme::Theme;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Complex-number calculator with a persisted history.
#[derive(Parser)]
#[command(
    name = "argand",
    version,
    about = "Complex-number calculator with a persisted history"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Path to a TOML config file (default: ./argand.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// History file (overrides the config file)
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    /// Color theme (overrides the config file)
    #[arg(long, global = true, value_enum)]
    theme: Option<Theme>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one calculation and print its history line
    Calc {
        /// Operation: + - * / conj sqrt arg plot (or add, sub, mul, div, ...)
        #[arg(allow_hyphen_values = true)]
        operation: String,
        /// Real part of the first operand
        #[arg(allow_negative_numbers = true)]
        re1: String,
        /// Imaginary part of the first operand
        #[arg(allow_negative_numbers = true)]
        im1: String,
        /// Real part of the second operand (binary operations)
        #[arg(allow_negative_numbers = true)]
        re2: Option<String>,
        /// Imaginary part of the second operand (binary operations)
        #[arg(allow_negative_numbers = true)]
        im2: Option<String>,
        /// Append the result to the history file
        #[arg(long)]
        record: bool,
    },

    /// Plot one or more complex numbers on an Argand diagram
    Plot {
        /// Real/imaginary pairs: <re> <im> [<re> <im> ...]
        #[arg(required = true, allow_negative_numbers = true)]
        coords: Vec<String>,
    },

    /// Inspect or reset the saved history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },

    /// Start an interactive calculator session
    Shell,

    /// List the supported operations
    Ops,
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// Print the saved history, one entry per line
    Show,
    /// Replace the saved history with an empty list
    Clear,
}

/// Resolved options shared by every command.
pub(crate) struct RunContext {
    pub output: OutputFormat,
    pub quiet: bool,
    pub history_path: PathBuf,
    pub theme: Theme,
    /// Whether terminal output may use ANSI styling.
    pub color: bool,
}

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::resolve(cli.config.as_deref()) {
        Ok(s) => s,
        Err(msg) => {
            report_error(&format!("error: {}", msg), cli.output, cli.quiet);
            process::exit(1);
        }
    };

    let level = if cli.quiet {
        "error"
    } else {
        settings.logging.level.as_str()
    };
    logging::init(level);

    let ctx = RunContext {
        output: cli.output,
        quiet: cli.quiet,
        history_path: cli.history.unwrap_or(settings.history.path),
        theme: cli.theme.unwrap_or(settings.display.theme),
        color: cli.output == OutputFormat::Text && settings.display.color.enabled(),
    };
    tracing::debug!(history = %ctx.history_path.display(), theme = ctx.theme.name(), "starting");

    match cli.command {
        Commands::Calc {
            operation,
            re1,
            im1,
            re2,
            im2,
            record,
        } => {
            commands::calc::cmd_calc(
                &ctx,
                CalcArgs {
                    operation,
                    re1,
                    im1,
                    re2,
                    im2,
                    record,
                },
            );
        }
        Commands::Plot { coords } => {
            commands::plot::cmd_plot(&ctx, &coords);
        }
        Commands::History { command } => match command {
            HistoryCommands::Show => commands::history::cmd_history_show(&ctx),
            HistoryCommands::Clear => commands::history::cmd_history_clear(&ctx),
        },
        Commands::Shell => {
            let mut session = Session::new(&ctx.history_path, ctx.theme);
            if let Err(e) = shell::run_interactive(&mut session, ctx.color) {
                report_error(&format!("error: shell I/O failed: {}", e), ctx.output, ctx.quiet);
                process::exit(1);
            }
        }
        Commands::Ops => {
            print!("{}", ui::help::operations_table());
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

pub(crate) fn report_warning(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "warning": msg }));
        }
    }
}
