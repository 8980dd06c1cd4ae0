use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use proof_panel::{
    error::Result,
    options::{self, OptionOverrides},
    tui,
};

#[derive(Parser)]
#[command(name = "proof-panel")]
#[command(about = "Side panel with goals, messages and packages for a proof assistant")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the panel (connects to the proof engine socket)
    Tui {
        /// Identifier of the IDE container, shown as the panel title
        #[arg(long)]
        wrapper_id: Option<String>,
        /// Root directory of the static assets
        #[arg(long)]
        base_path: Option<String>,
        /// Panel theme: light or dark
        #[arg(long)]
        theme: Option<String>,
        /// JSON file with `wrapper_id`, `base_path` and `theme`
        #[arg(long)]
        options: Option<PathBuf>,
    },
}

fn init_tracing() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("proof-panel")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(log_file) = fs::File::create(dir.join("proof-panel.log")) else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("proof_panel=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .init();
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Tui {
            wrapper_id,
            base_path,
            theme,
            options: options_file,
        } => {
            let overrides = OptionOverrides {
                wrapper_id,
                base_path,
                theme,
            };
            let options = options::resolve(options_file.as_deref(), overrides)?;
            tui::run(options).await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The terminal belongs to the TUI, so logs go to a file
    init_tracing();

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
