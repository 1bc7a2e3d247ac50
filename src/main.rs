use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wrapcfg::{AppError, DoctorOptions, InitOptions};

#[derive(Parser)]
#[command(name = "wrapcfg")]
#[command(version)]
#[command(
    about = "Create and validate wrap.config.json app-wrapper build configuration",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter wrap.config.json in the current directory
    #[clap(visible_alias = "i")]
    Init {
        /// Reverse-DNS application identifier
        #[arg(long)]
        app_id: Option<String>,
        /// Human-readable application name
        #[arg(long)]
        app_name: Option<String>,
        /// Relative path to the built web assets
        #[arg(long)]
        web_dir: Option<String>,
    },
    /// Validate wrap.config.json and report diagnostics
    #[clap(visible_alias = "d")]
    Doctor {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Print the parsed configuration as JSON
    Show,
}

fn main() {
    let cli = Cli::parse();
    let cwd = PathBuf::from(".");

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { app_id, app_name, web_dir } => {
            let options = InitOptions { app_id, app_name, web_dir };
            wrapcfg::init(&cwd, options).map(|_| 0)
        }
        Commands::Doctor { strict } => {
            wrapcfg::doctor(&cwd, DoctorOptions { strict }).map(|outcome| outcome.exit_code)
        }
        Commands::Show => wrapcfg::show(&cwd).map(|_| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
