//! Session report and export functionality

use crate::engine::{stats, CommittedKeystroke};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Complete session report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Summary statistics
    pub summary: SessionSummary,
    /// One entry per committed keystroke
    pub keystrokes: Vec<KeystrokeEntry>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Report generation timestamp
    pub generated_at: String,
    /// Application version
    pub version: String,
    /// Session duration in seconds
    pub duration_secs: f64,
}

/// Session summary statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Committed keystrokes in the log
    pub keystrokes: usize,
    /// Characters currently in the buffer
    pub buffer_chars: usize,
    /// Average delay in milliseconds
    pub average_delay_ms: Option<f64>,
    /// Smallest delay in milliseconds
    pub min_delay_ms: Option<f64>,
    /// Largest delay in milliseconds
    pub max_delay_ms: Option<f64>,
    /// Qualitative pace rating
    pub pace: String,
}

/// Single keystroke entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeystrokeEntry {
    pub index: usize,
    pub ch: String,
    pub timestamp_ms: f64,
    pub baseline_ms: f64,
    /// Absent for the first keystroke, which has no delay
    pub delay_ms: Option<f64>,
}

impl KeystrokeEntry {
    fn from_log(index: usize, keystroke: &CommittedKeystroke) -> Self {
        Self {
            index,
            ch: keystroke.ch.clone(),
            timestamp_ms: keystroke.timestamp_ms,
            baseline_ms: keystroke.baseline_ms,
            delay_ms: (index > 0).then(|| keystroke.delay_ms()),
        }
    }

    /// Render one log line: index, char, timestamp, baseline, delay.
    ///
    /// Delay is `-` for the first keystroke.
    pub fn format_line(&self, decimals: usize) -> String {
        let delay = match self.delay_ms {
            Some(d) => format!("{:.decimals$}", d),
            None => "-".to_string(),
        };
        format!(
            "{:>4}  {:<4} {:>10.decimals$} {:>10.decimals$} {:>9}",
            self.index, self.ch, self.timestamp_ms, self.baseline_ms, delay
        )
    }
}

impl SessionReport {
    /// Create a new session report
    pub fn new(
        log: &[CommittedKeystroke],
        buffer_chars: usize,
        duration_secs: f64,
    ) -> Self {
        let now: DateTime<Utc> = Utc::now();

        Self {
            metadata: ReportMetadata {
                generated_at: now.to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                duration_secs,
            },
            summary: SessionSummary {
                keystrokes: log.len(),
                buffer_chars,
                average_delay_ms: stats::average_delay_ms(log),
                min_delay_ms: stats::min_delay_ms(log),
                max_delay_ms: stats::max_delay_ms(log),
                pace: stats::pace_rating(log).to_string(),
            },
            keystrokes: log
                .iter()
                .enumerate()
                .map(|(i, k)| KeystrokeEntry::from_log(i, k))
                .collect(),
        }
    }

    /// Export report to JSON file
    pub fn export_json(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Export report to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render the report as a plain-text table
    pub fn to_text(&self, decimals: usize) -> String {
        let mut out = String::new();
        out.push_str("KEYLAG SESSION REPORT\n");
        out.push_str(&format!("Generated: {}\n", self.metadata.generated_at));
        out.push_str(&format!(
            "Duration: {:.1}s  Keystrokes: {}  Buffer: {} chars\n",
            self.metadata.duration_secs, self.summary.keystrokes, self.summary.buffer_chars
        ));
        match self.summary.average_delay_ms {
            Some(avg) => out.push_str(&format!(
                "Average delay: {:.decimals$} ms  ({})\n",
                avg, self.summary.pace
            )),
            None => out.push_str("Average delay: n/a\n"),
        }
        out.push('\n');
        out.push_str("   #  key    timestamp   baseline     delay\n");
        for entry in &self.keystrokes {
            out.push_str(&entry.format_line(decimals));
            out.push('\n');
        }
        out
    }
}
