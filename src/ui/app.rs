//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{event_poll_interval, splash_duration};
use crate::ui::dashboard::{DashboardState, handle_key_event, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub show_splash: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool, show_splash: bool) -> Self {
        Self {
            with_background_color,
            show_splash,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Auction dashboard.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state, built up front so the splash can be skipped at any time.
    dashboard: DashboardState,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(mut dashboard: DashboardState, ui_config: UIConfig) -> Self {
        dashboard.with_background_color = ui_config.with_background_color;
        let current_screen = if ui_config.show_splash {
            Screen::Splash
        } else {
            Screen::Dashboard
        };
        Self {
            current_screen,
            dashboard,
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration() {
                app.current_screen = Screen::Dashboard;
                continue;
            }
        }

        if !event::poll(event_poll_interval())? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Skip events that are not KeyEventKind::Press
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match app.current_screen {
                Screen::Splash => {
                    if key.code == KeyCode::Char('q')
                        || (key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL))
                    {
                        return Ok(());
                    }
                    // Any other key skips the splash screen
                    app.current_screen = Screen::Dashboard;
                }
                Screen::Dashboard => {
                    if handle_key_event(&mut app.dashboard, key) {
                        log::debug!("Quit requested");
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::AuctionStatus;
    use crate::seed;

    fn dashboard() -> DashboardState {
        DashboardState::new(seed::company_groups(), AuctionStatus::Upcoming, false)
    }

    #[test]
    fn test_ui_config_controls_background_and_splash() {
        let app = App::new(dashboard(), UIConfig::new(true, false));
        assert!(app.dashboard.with_background_color);
        assert!(matches!(app.current_screen, Screen::Dashboard));

        let app = App::new(dashboard(), UIConfig::new(false, true));
        assert!(!app.dashboard.with_background_color);
        assert!(matches!(app.current_screen, Screen::Splash));
    }
}
