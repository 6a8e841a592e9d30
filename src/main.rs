mod auction;
mod config;
mod consts;
mod error;
mod events;
mod logging;
mod seed;
mod session;
mod ui;

use crate::auction::AuctionStatus;
use crate::config::{Config, get_config_path};
use crate::session::messages::SessionMessage;
use crate::session::{ListFormat, run_list_mode, run_tui_mode};
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Reverse-auction management dashboard
struct Args {
    /// Path to the config file (defaults to ~/.lorri/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Status tab to open on (upcoming, active, paused, closed)
        #[arg(long, value_name = "STATUS")]
        tab: Option<AuctionStatus>,

        /// Initial search term
        #[arg(long)]
        search: Option<String>,

        /// Paint a dark background behind the dashboard
        #[arg(long, action = ArgAction::SetTrue)]
        with_background: bool,

        /// Go straight to the dashboard
        #[arg(long, action = ArgAction::SetTrue)]
        no_splash: bool,
    },
    /// Print the auctions for a tab without starting the interactive UI
    List {
        /// Status tab to list (upcoming, active, paused, closed)
        #[arg(long, value_name = "STATUS")]
        tab: Option<AuctionStatus>,

        /// Case-insensitive text matched against title, description and company
        #[arg(long)]
        search: Option<String>,

        /// Print JSON instead of text
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Inspect or change saved preferences
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the current configuration
    Show,
    /// Set the tab the dashboard opens on
    SetTab {
        /// One of upcoming, active, paused, closed
        #[arg(value_name = "STATUS")]
        tab: AuctionStatus,
    },
    /// Delete the configuration file
    Reset,
}

/// Loads preferences, falling back to defaults when no file exists yet.
fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    Config::load_or_default(path)
        .map_err(|e| format!("Failed to load config: {}", e).into())
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => path,
        None => get_config_path()?,
    };

    match args.command {
        Command::Start {
            tab,
            search,
            with_background,
            no_splash,
        } => {
            let config = load_config(&config_path)?;
            let mut dashboard = DashboardState::new(
                seed::company_groups(),
                tab.unwrap_or(config.default_tab),
                false,
            );
            if let Some(term) = search {
                dashboard.set_search_term(term);
            }
            let ui_config = UIConfig::new(
                with_background || config.with_background_color,
                config.show_splash && !no_splash,
            );
            log::info!("Starting dashboard on the {} tab", dashboard.active_tab());
            run_tui_mode(dashboard, ui_config)
        }
        Command::List { tab, search, json } => {
            let config = load_config(&config_path)?;
            let tab = tab.unwrap_or(config.default_tab);
            let dashboard = DashboardState::new(seed::company_groups(), tab, false);
            let format = if json {
                ListFormat::Json
            } else {
                ListFormat::Text
            };
            run_list_mode(dashboard, tab, search, format)
        }
        Command::Config { action } => match action {
            ConfigCommand::Show => {
                let config = load_config(&config_path)?;
                SessionMessage::info(format!("Config file: {}", config_path.display())).print();
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigCommand::SetTab { tab } => {
                let mut config = load_config(&config_path)?;
                config.default_tab = tab;
                config.save(&config_path)?;
                SessionMessage::success(format!("Default tab set to {}", tab)).print();
                Ok(())
            }
            ConfigCommand::Reset => {
                Config::clear(&config_path)?;
                SessionMessage::success("Configuration reset to defaults").print();
                Ok(())
            }
        },
    }
}
