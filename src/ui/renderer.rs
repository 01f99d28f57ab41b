//! Terminal setup and the main UI loop

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use tokio::time::Duration;

use super::app_component::AppComponent;
use super::core::{Component, EventHandler};
use crate::config::Config;
use crate::logger::Logger;

/// Run the TUI application until the user quits
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    // Terminal initialization
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = AppComponent::new(config, logger);
    let mut events = EventHandler::new(tick_rate);
    info!("Started with tick rate {tick_rate:?}");

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &mut events).await;

    // Every cleanup step runs even when the loop or an earlier step failed
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to leave alternate screen");
    let cursor = terminal.show_cursor().context("Failed to show cursor");

    info!("Exiting with {} todos in memory", app.store().len());
    finish(res, [raw, screen, cursor])
}

/// The loop error wins over cleanup errors; the first cleanup error wins otherwise
fn finish(res: Result<()>, cleanup: [Result<()>; 3]) -> Result<()> {
    cleanup.into_iter().fold(res, Result::and)
}

/// Main UI loop: redraw when the app asks for it, then wait for the next event
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppComponent,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
        }

        let event = events.next_event().await?;
        app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_finish_prefers_loop_error() {
        let res = finish(Err(anyhow!("loop")), [Err(anyhow!("raw")), Ok(()), Err(anyhow!("cursor"))]);
        assert_eq!(res.unwrap_err().to_string(), "loop");
    }

    #[test]
    fn test_finish_reports_first_cleanup_error() {
        let res = finish(Ok(()), [Ok(()), Err(anyhow!("screen")), Err(anyhow!("cursor"))]);
        assert_eq!(res.unwrap_err().to_string(), "screen");
    }

    #[test]
    fn test_finish_ok_when_everything_succeeds() {
        assert!(finish(Ok(()), [Ok(()), Ok(()), Ok(())]).is_ok());
    }
}
