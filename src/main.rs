use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use clap::Parser;

use tori_tray::config::GameConfig;
use tori_tray::console::{self, Flow, ViewMode};
use tori_tray::session::TrayGamePlugin;
use tori_tray::shared::MascotName;

/// Help Tori the squirrel build a balanced meal tray, one command at a time.
#[derive(Parser, Debug)]
#[command(name = "tori-tray", version)]
struct Cli {
    /// RON config file (defaults to ./tori_tray.ron when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Override the config's log filter, e.g. "debug"
    #[arg(long)]
    log_filter: Option<String>,

    /// Print the session snapshot as JSON after each command
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match GameConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tori-tray: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(filter) = cli.log_filter {
        config.log_filter = filter;
    }

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("tori-tray: could not open {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };
    let scripted = cli.script.is_some();
    let mode = if cli.json { ViewMode::Json } else { ViewMode::Text };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin {
            filter: config.log_filter.clone(),
            ..default()
        })
        .add_plugins(StatesPlugin)
        .add_plugins(TrayGamePlugin)
        .insert_resource(MascotName(config.mascot_name.clone()));
    app.finish();
    app.cleanup();

    // Startup: catalogs load, the wizard enters Start.
    app.update();
    println!("{}", console::view(&app, &config, mode));

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read input: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if scripted && config.echo_commands && !line.trim().is_empty() {
            println!("> {}", line.trim());
        }
        let command = match console::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("?? {e}");
                continue;
            }
        };

        let (flow, output) = console::execute(&mut app, command, &config, mode);
        if !output.is_empty() {
            println!("{output}");
        }
        if flow == Flow::Quit {
            break;
        }
    }

    info!("Goodbye from {}!", config.mascot_name);
    ExitCode::SUCCESS
}
