//! Custom TUI widgets

use crate::engine::CommittedKeystroke;
use crate::ui::ThemeColors;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// The typing surface: shows the committed buffer with a trailing cursor mark
pub struct TypingPanel<'a> {
    text: &'a str,
    colors: ThemeColors,
}

impl<'a> TypingPanel<'a> {
    pub fn new(text: &'a str, colors: ThemeColors) -> Self {
        Self { text, colors }
    }
}

impl<'a> Widget for TypingPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Typing Surface ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.accent));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Show the last lines that fit, cursor pinned to the end
        let mut lines: Vec<String> = self.text.split('\n').map(str::to_string).collect();
        if let Some(last) = lines.last_mut() {
            last.push('▏');
        }
        let skip = lines.len().saturating_sub(inner.height as usize);

        for (i, line) in lines.iter().skip(skip).enumerate() {
            buf.set_string(
                inner.x,
                inner.y + i as u16,
                line,
                Style::default().fg(self.colors.fg),
            );
        }
    }
}

/// Per-keystroke log panel: index, char, timestamp, baseline, delay
pub struct LogPanel<'a> {
    log: &'a [CommittedKeystroke],
    colors: ThemeColors,
    max_rows: usize,
}

impl<'a> LogPanel<'a> {
    pub fn new(log: &'a [CommittedKeystroke], colors: ThemeColors) -> Self {
        Self {
            log,
            colors,
            max_rows: usize::MAX,
        }
    }

    /// Cap the number of rows shown regardless of panel height
    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }
}

impl<'a> Widget for LogPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Keystroke Log ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.dim));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height <= 1 {
            return;
        }

        let header = format!(
            "{:>4}  {:<4} {:>9} {:>9} {:>8}",
            "#", "key", "time", "base", "delay"
        );
        buf.set_string(
            inner.x,
            inner.y,
            &header,
            Style::default()
                .fg(self.colors.dim)
                .add_modifier(Modifier::BOLD),
        );

        // Tail of the log, newest at the bottom
        let rows = ((inner.height - 1) as usize).min(self.max_rows);
        let skip = self.log.len().saturating_sub(rows);

        for (row, (index, keystroke)) in self.log.iter().enumerate().skip(skip).enumerate() {
            let delay = if index == 0 {
                Span::styled(format!("{:>8}", "-"), Style::default().fg(self.colors.dim))
            } else {
                let d = keystroke.delay_ms();
                Span::styled(
                    format!("{:>8.1}", d),
                    Style::default().fg(self.colors.delay_color(d)),
                )
            };

            let line = Line::from(vec![
                Span::styled(format!("{:>4}  ", index), Style::default().fg(self.colors.dim)),
                Span::styled(
                    format!("{:<4} ", keystroke.ch),
                    Style::default()
                        .fg(self.colors.fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:>9.1} {:>9.1} ", keystroke.timestamp_ms, keystroke.baseline_ms),
                    Style::default().fg(self.colors.fg),
                ),
                delay,
            ]);

            buf.set_line(inner.x, inner.y + 1 + row as u16, &line, inner.width);
        }
    }
}

/// Label/value statistics panel
pub struct StatsPanel<'a> {
    rows: &'a [(&'static str, String)],
    colors: ThemeColors,
}

impl<'a> StatsPanel<'a> {
    pub fn new(rows: &'a [(&'static str, String)], colors: ThemeColors) -> Self {
        Self { rows, colors }
    }
}

impl<'a> Widget for StatsPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.dim));

        let inner = block.inner(area);
        block.render(area, buf);

        for (i, (label, value)) in self.rows.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<12}", label),
                    Style::default()
                        .fg(self.colors.fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(value.as_str(), Style::default().fg(self.colors.accent)),
            ]);
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}

/// Status bar widget
pub struct StatusBar<'a> {
    state: &'a str,
    elapsed: &'a str,
    keys: u64,
    message: Option<&'a str>,
    colors: ThemeColors,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a str, elapsed: &'a str, keys: u64, colors: ThemeColors) -> Self {
        Self {
            state,
            elapsed,
            keys,
            message: None,
            colors,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(self.colors.dim).fg(self.colors.fg);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        // Left side: state and controls hint
        let left = format!(" {} | ^P pause ^R reset ^E export Esc quit ", self.state);
        buf.set_string(area.x, area.y, &left, bg_style.add_modifier(Modifier::BOLD));

        // Center: message if any
        if let Some(msg) = self.message {
            let msg_style = Style::default().bg(self.colors.dim).fg(self.colors.yellow);
            let msg_x = area.x + (area.width / 2).saturating_sub(msg.len() as u16 / 2);
            buf.set_string(msg_x, area.y, msg, msg_style);
        }

        // Right side: elapsed time and key count
        let right = format!(" {} | Keys: {} ", self.elapsed, self.keys);
        let right_x = area.x + area.width.saturating_sub(right.len() as u16);
        buf.set_string(right_x, area.y, &right, bg_style);
    }
}
