//! Keylag - typing delay measurement TUI
//!
//! A terminal typing surface that logs, for every committed character, how
//! long it took to type relative to the previous one.

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode as CtKeyCode,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::stdout;

use keylag::{
    config::Config,
    keys::key_name,
    ui::{App, AppState, LogPanel, StatsPanel, StatusBar, ThemeColors, TypingPanel},
};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load().unwrap_or_default();
    let colors = ThemeColors::from_theme(config.ui.theme);
    let tick_rate = config.refresh_interval();
    let mut app = App::new(config.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(8),  // Typing surface
                    Constraint::Min(10),    // Log + stats
                    Constraint::Length(1),  // Status bar
                ])
                .split(size);

            frame.render_widget(TypingPanel::new(&app.session.text, colors), chunks[0]);

            let middle = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(44), Constraint::Length(28)])
                .split(chunks[1]);

            let log_panel =
                LogPanel::new(app.log(), colors).max_rows(app.config.ui.log_rows);
            frame.render_widget(log_panel, middle[0]);

            let rows = app.stats_rows();
            frame.render_widget(StatsPanel::new(&rows, colors), middle[1]);

            let state_str = match app.state {
                AppState::Running => "RUNNING",
                AppState::Paused => "PAUSED",
                AppState::Quitting => "QUITTING",
            };
            let elapsed = app.elapsed_formatted();
            let status = StatusBar::new(state_str, &elapsed, app.total_keys, colors)
                .message(app.get_status());
            frame.render_widget(status, chunks[2]);
        })?;

        // Handle terminal events
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                    match key.code {
                        CtKeyCode::Esc => app.quit(),
                        CtKeyCode::Char('q') if ctrl => app.quit(),
                        CtKeyCode::Char('p') if ctrl => app.toggle_pause(),
                        CtKeyCode::Char('r') if ctrl => app.reset(),
                        CtKeyCode::Char('e') if ctrl => {
                            if let Err(e) = app.export_report() {
                                app.set_status(format!("Export failed: {}", e));
                            }
                        }
                        code => {
                            if let Some(name) = key_name(code) {
                                app.on_key(&name);
                            }
                        }
                    }
                }
                Event::Paste(pasted) => app.on_paste(&pasted),
                _ => {}
            }
        }

        if app.state == AppState::Quitting {
            break;
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    let report = app.generate_report();
    println!("\nKeylag session complete.");
    print!("{}", report.to_text(app.config.export.decimals));

    Ok(())
}
