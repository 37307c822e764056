//! Main application state and logic

use crate::config::Config;
use crate::engine::{reconcile, stats, CommittedKeystroke, KeyEvent, SessionState};
use crate::keys::{classify, KeyClass, SessionClock};
use crate::report::SessionReport;
use std::path::PathBuf;
use std::time::Instant;

/// Application running state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Paused,
    Quitting,
}

/// Main application
pub struct App {
    /// Application state
    pub state: AppState,
    /// Configuration
    pub config: Config,
    /// The measurement session aggregate
    pub session: SessionState,
    /// Session timebase
    pub clock: SessionClock,
    /// When Backspace/Delete last fired
    pub last_deletion_ms: Option<f64>,
    /// Total key presses seen (including filtered ones)
    pub total_keys: u64,
    /// Last status message
    status_message: Option<String>,
    /// Status message timestamp
    status_time: Option<Instant>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            state: AppState::Running,
            config,
            session: SessionState::new(),
            clock: SessionClock::start(),
            last_deletion_ms: None,
            total_keys: 0,
            status_message: None,
            status_time: None,
        }
    }

    /// Handle one named key press from the capture layer.
    ///
    /// Printable keys are queued and applied to the typing surface; deletion
    /// keys truncate the surface and record a deletion timestamp; everything
    /// else is dropped here, before the queue.
    pub fn on_key(&mut self, key: &str) {
        if self.state != AppState::Running {
            return;
        }
        self.total_keys += 1;
        let timestamp_ms = self.clock.now_ms();

        match classify(key) {
            KeyClass::Printable(stored) => {
                self.session.push_event(KeyEvent::new(stored, timestamp_ms));
                let mut new_text = self.session.text.clone();
                new_text.push_str(Self::surface_text(key));
                self.on_text_changed(new_text);
            }
            KeyClass::Deletion => {
                self.last_deletion_ms = Some(timestamp_ms);
                let mut new_text = self.session.text.clone();
                new_text.pop();
                self.on_text_changed(new_text);
            }
            KeyClass::Ignored => {}
        }
    }

    /// Handle pasted text: the surface grows with nothing queued, so the
    /// inserted characters stay unmeasured.
    pub fn on_paste(&mut self, pasted: &str) {
        if self.state != AppState::Running || pasted.is_empty() {
            return;
        }
        let mut new_text = self.session.text.clone();
        new_text.push_str(pasted);
        self.on_text_changed(new_text);
        self.set_status(format!("Pasted {} chars (unmeasured)", pasted.chars().count()));
    }

    /// Feed a full text snapshot through the reconciliation engine
    pub fn on_text_changed(&mut self, new_text: String) {
        let state = std::mem::take(&mut self.session);
        self.session = reconcile(state, &new_text);
    }

    /// What a printable key inserts into the typing surface. The committed
    /// log stores "\\n"/"\\t", the surface holds the real control character.
    fn surface_text(key: &str) -> &str {
        match key {
            "Enter" => "\n",
            "Tab" => "\t",
            other => other,
        }
    }

    /// The committed keystroke log
    pub fn log(&self) -> &[CommittedKeystroke] {
        &self.session.log
    }

    /// Average delay over the session, if at least two keystrokes committed
    pub fn average_delay_ms(&self) -> Option<f64> {
        stats::average_delay_ms(&self.session.log)
    }

    /// Label/value rows for the stats panel
    pub fn stats_rows(&self) -> Vec<(&'static str, String)> {
        let log = &self.session.log;
        let fmt = |v: Option<f64>| match v {
            Some(ms) => format!("{:.1} ms", ms),
            None => "n/a".to_string(),
        };

        vec![
            ("Keystrokes", format!("{}", log.len())),
            ("Buffer", format!("{} chars", self.session.text_chars())),
            ("Avg Delay", fmt(stats::average_delay_ms(log))),
            ("Min Delay", fmt(stats::min_delay_ms(log))),
            ("Max Delay", fmt(stats::max_delay_ms(log))),
            ("Std Dev", fmt(stats::std_dev_ms(log))),
            ("Pace", stats::pace_rating(log).to_string()),
            ("Last Delete", fmt(self.last_deletion_ms)),
        ]
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            AppState::Running => {
                self.set_status("Paused".to_string());
                AppState::Paused
            }
            AppState::Paused => {
                self.set_status("Resumed".to_string());
                AppState::Running
            }
            AppState::Quitting => AppState::Quitting,
        };
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.state = AppState::Quitting;
    }

    /// Clear the session back to its initial empty state
    pub fn reset(&mut self) {
        self.session = SessionState::new();
        self.last_deletion_ms = None;
        self.total_keys = 0;
        self.set_status("Session reset".to_string());
    }

    /// Set a status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_time = Some(Instant::now());
    }

    /// Get status message if still valid (within 3 seconds)
    pub fn get_status(&self) -> Option<&str> {
        match (&self.status_message, self.status_time) {
            (Some(msg), Some(time)) if time.elapsed().as_secs() < 3 => Some(msg),
            _ => None,
        }
    }

    /// Get elapsed time formatted
    pub fn elapsed_formatted(&self) -> String {
        let secs = self.clock.elapsed_secs() as u64;
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{:02}:{:02}", mins, secs)
    }

    /// Generate a session report
    pub fn generate_report(&self) -> SessionReport {
        SessionReport::new(
            &self.session.log,
            self.session.text_chars(),
            self.clock.elapsed_secs(),
        )
    }

    /// Export session report to a JSON file, returning the path written
    pub fn export_report(&mut self) -> Result<PathBuf, std::io::Error> {
        let filename = format!(
            "keylag_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        let path = match &self.config.export.directory {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        };
        let report = self.generate_report();
        report.export_json(&path)?;
        self.set_status(format!("Exported to {}", path.display()));
        log::info!("report exported to {}", path.display());
        Ok(path)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_commits_through_the_engine() {
        let mut app = App::default();
        app.on_key("h");
        app.on_key("i");

        assert_eq!(app.session.text, "hi");
        assert_eq!(app.log().len(), 2);
        assert!(app.session.pending.is_empty());
    }

    #[test]
    fn enter_is_stored_escaped_but_inserted_raw() {
        let mut app = App::default();
        app.on_key("a");
        app.on_key("Enter");

        assert_eq!(app.session.text, "a\n");
        assert_eq!(app.log()[1].ch, "\\n");
        assert_eq!(app.log().len(), app.session.text_chars());
    }

    #[test]
    fn ignored_keys_touch_nothing_but_the_counter() {
        let mut app = App::default();
        app.on_key("Shift");
        app.on_key("ArrowLeft");
        app.on_key("F5");

        assert_eq!(app.total_keys, 3);
        assert!(app.log().is_empty());
        assert!(app.session.pending.is_empty());
        assert_eq!(app.session.text, "");
    }

    #[test]
    fn backspace_truncates_and_records_timestamp() {
        let mut app = App::default();
        app.on_key("a");
        app.on_key("b");
        app.on_key("Backspace");

        assert_eq!(app.session.text, "a");
        assert_eq!(app.log().len(), 1);
        assert!(app.last_deletion_ms.is_some());
    }

    #[test]
    fn paste_leaves_the_log_alone() {
        let mut app = App::default();
        app.on_key("a");
        app.on_paste("hello");

        assert_eq!(app.session.text, "ahello");
        assert_eq!(app.log().len(), 1);
    }

    #[test]
    fn paused_app_ignores_input() {
        let mut app = App::default();
        app.toggle_pause();
        app.on_key("a");
        app.on_paste("xyz");

        assert_eq!(app.total_keys, 0);
        assert_eq!(app.session.text, "");
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut app = App::default();
        app.on_key("a");
        app.on_key("Backspace");
        app.on_key("b");

        app.reset();

        assert_eq!(app.session, SessionState::new());
        assert_eq!(app.last_deletion_ms, None);
        assert_eq!(app.total_keys, 0);
    }

    #[test]
    fn status_message_lifecycle() {
        let mut app = App::default();
        assert!(app.get_status().is_none());

        app.set_status("Test message".to_string());
        assert_eq!(app.get_status(), Some("Test message"));
    }

    #[test]
    fn stats_rows_cover_the_panel() {
        let mut app = App::default();
        app.on_key("a");
        app.on_key("b");

        let rows = app.stats_rows();
        let labels: Vec<&str> = rows.iter().map(|(l, _)| *l).collect();
        assert!(labels.contains(&"Keystrokes"));
        assert!(labels.contains(&"Avg Delay"));
        assert!(labels.contains(&"Pace"));
    }
}
