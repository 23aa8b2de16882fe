#![forbid(unsafe_code)]

mod cmd;
mod output;
mod tui;

use clap::{CommandFactory, Parser, Subcommand};
use output::{CliError, OutputMode};
use shopfront_core::config::{self, UserConfig};
use shopfront_core::error::ShopfrontError;
use shopfront_core::payload::{self, HostPayload};
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "sf: terminal client for storefront dealer accounts",
    long_about = None
)]
struct Cli {
    /// Host payload file (JSON). Absent payload renders an empty account.
    #[arg(long, global = true, value_name = "FILE")]
    payload: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Account",
        about = "Show your order history",
        long_about = "Show the account's order history, optionally with one order expanded.",
        after_help = "EXAMPLES:\n    # List your order history\n    sf orders\n\n    # Expand one order's line items\n    sf orders --open 1\n\n    # Emit machine-readable output\n    sf orders --json"
    )]
    Orders(cmd::orders::OrdersArgs),

    #[command(
        next_help_heading = "Account",
        about = "Show the sign-in form or build a submission",
        long_about = "Show the sign-in form the host declared, or fill it with credentials to build a submission. Nothing is verified or posted locally.",
        after_help = "EXAMPLES:\n    # Show the sign-in form definition\n    sf login\n\n    # Build a filled submission\n    sf login --username dealer@example.com --password secret\n\n    # Emit machine-readable output\n    sf login --json"
    )]
    Login(cmd::login::LoginArgs),

    #[command(
        next_help_heading = "Interactive",
        about = "Open the interactive terminal UI",
        long_about = "Open a full-screen terminal UI: the order history browser or the sign-in screen.",
        after_help = "EXAMPLES:\n    # Browse your order history interactively\n    sf ui\n\n    # Open the sign-in screen\n    sf ui login"
    )]
    Ui(cmd::ui::UiArgs),

    #[command(
        next_help_heading = "Utilities",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    sf completions bash\n\n    # Generate zsh completions\n    sf completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SHOPFRONT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "shopfront_core=debug,shopfront_cli=debug,info"
        } else {
            "shopfront_core=info,shopfront_cli=info,warn"
        })
    });

    let format = env::var("SHOPFRONT_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays parseable in text and JSON modes.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Load the user config file, if the platform has a config dir.
fn load_user_config() -> Result<UserConfig, ShopfrontError> {
    match config::user_config_path() {
        Some(path) => config::load_user_config(&path),
        None => Ok(UserConfig::default()),
    }
}

/// Load the host payload named by flag, env var, or user config. No
/// configured source means the built-in empty payload, not an error.
fn load_host_payload(
    flag: Option<PathBuf>,
    user_config: &UserConfig,
    output: OutputMode,
) -> anyhow::Result<HostPayload> {
    let env_path = env::var_os("SHOPFRONT_PAYLOAD").map(PathBuf::from);
    let path = config::resolve_payload_path(flag, env_path, user_config.payload_path.clone());
    let Some(path) = path else {
        debug!("no payload source configured; rendering the empty account");
        return Ok(HostPayload::default());
    };
    match payload::load_payload(&path) {
        Ok(host) => Ok(host),
        Err(err) => {
            output::render_error(output, &CliError::from(&err))?;
            anyhow::bail!("{err}")
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let user_config = match load_user_config() {
        Ok(user_config) => user_config,
        Err(err) => {
            // The config's own output preference is unreadable here, so
            // resolve a mode without it.
            let output = output::resolve_output_mode(cli.format, cli.json, None);
            output::render_error(output, &CliError::from(&err))?;
            anyhow::bail!("{err}")
        }
    };

    let output = output::resolve_output_mode(cli.format, cli.json, user_config.output.as_deref());

    match cli.command {
        Commands::Orders(ref args) => {
            let payload = load_host_payload(cli.payload.clone(), &user_config, output)?;
            cmd::orders::run_orders(args, output, &payload.orders)
        }
        Commands::Login(ref args) => {
            let payload = load_host_payload(cli.payload.clone(), &user_config, output)?;
            cmd::login::run_login(args, output, &payload.login)
        }
        Commands::Ui(ref args) => {
            let payload = load_host_payload(cli.payload.clone(), &user_config, output)?;
            cmd::ui::run_ui(args, payload)
        }
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}
