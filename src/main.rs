mod cli;
mod core;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ocrbatch",
    about = "Batch image OCR via Gemini vision with cost reporting",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the configured directory and extract text from each image
    Run,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Generate default config file
    Init,
    /// Validate config file
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let opts = cli::output::OutputOptions {
        use_color: cli::output::detect_color(!cli.no_color),
        verbose: cli.verbose,
    };
    if !opts.use_color {
        colored::control::set_override(false);
    }

    match cli.command {
        None | Some(Commands::Run) => cli::run_cmd::run(&opts).await?,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => cli::config_cmd::init(&opts)?,
            ConfigAction::Check => cli::config_cmd::check(&opts)?,
        },
    }

    Ok(())
}
