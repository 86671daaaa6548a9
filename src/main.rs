//! FramaSpace shell host binary.
//!
//! Loads a deployment config, assembles the shell, and drives it from the
//! command line: resolve and render a view, or inspect the registered
//! routes and settings sections.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use framaspace_shell::config::loader::load_config;
use framaspace_shell::observability::logging::init_logging;
use framaspace_shell::shell::Shell;
use framaspace_shell::view::component::View;

#[derive(Parser)]
#[command(name = "framaspace-shell")]
#[command(about = "FramaSpace application shell", long_about = None)]
struct Cli {
    /// Path to the deployment config file.
    #[arg(short, long, default_value = "config/standalone.toml")]
    config: PathBuf,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path and render its view
    Navigate { path: String },
    /// List registered routes
    Routes,
    /// List settings sections
    Sections,
    /// Validate the config file and exit
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli.config)?;
    init_logging(&config.observability);

    tracing::info!(
        config = %cli.config.display(),
        base_path = %config.mount.base_path,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    if let Commands::Check = cli.command {
        println!("{}: OK", cli.config.display());
        return Ok(());
    }

    let shell = Shell::new(config)?;

    match cli.command {
        Commands::Navigate { path } => {
            let component = shell.navigate(&path).await?;
            if cli.json {
                let route = shell.current_route();
                println!(
                    "{}",
                    serde_json::json!({
                        "path": path,
                        "route": route.as_ref().map(|r| r.path.clone()),
                        "view": component.id(),
                        "title": component.title(),
                    })
                );
            } else {
                println!("{}", component.title());
                print!("{}", component.render());
            }
        }
        Commands::Routes => {
            for route in shell.router().routes() {
                if cli.json {
                    println!(
                        "{}",
                        serde_json::json!({
                            "path": route.path,
                            "view": route.view,
                            "url": shell.urls().generate(&route.path),
                        })
                    );
                } else {
                    println!(
                        "{} -> {} ({})",
                        route.path,
                        route.view,
                        shell.urls().generate(&route.path)
                    );
                }
            }
        }
        Commands::Sections => {
            for section in shell.sections().ordered() {
                if cli.json {
                    println!(
                        "{}",
                        serde_json::json!({
                            "id": section.id(),
                            "name": section.display_name(),
                            "icon": section.icon_url(),
                            "priority": section.priority(),
                        })
                    );
                } else {
                    println!(
                        "[{}] {} ({}) icon={}",
                        section.priority(),
                        section.display_name(),
                        section.id(),
                        section.icon_url()
                    );
                }
            }
        }
        Commands::Check => {}
    }

    Ok(())
}
