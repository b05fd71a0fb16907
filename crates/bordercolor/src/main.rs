mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bordercolor",
    version,
    about = "Custom window border colors without touching the title bar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Check the configuration and show the colors it resolves to
    Doctor,
    /// Show the color word a hex string packs into
    Parse {
        /// Color in #RRGGBB format
        hex: String,
    },
    /// Debugging and inspection tools
    #[cfg(windows)]
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
}

#[cfg(windows)]
#[derive(Subcommand)]
enum DebugCommands {
    /// List visible top-level windows and whether they get a border color
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Doctor => commands::doctor::execute(),
        Commands::Parse { hex } => commands::parse::execute(&hex),
        #[cfg(windows)]
        Commands::Debug { command } => match command {
            DebugCommands::List => commands::debug::list::execute(),
        },
    }
}
