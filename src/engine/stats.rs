//! Delay statistics over the committed keystroke log
//!
//! Pure reads: calling any of these twice on the same log yields identical
//! results. The first keystroke carries no delay (its baseline is the start
//! of measurement), so every derivation skips index 0.

use super::CommittedKeystroke;

/// Per-keystroke delays in milliseconds, excluding the first entry
pub fn delays(log: &[CommittedKeystroke]) -> Vec<f64> {
    log.iter().skip(1).map(|k| k.delay_ms()).collect()
}

/// Arithmetic mean of the delays. `None` for logs with fewer than two
/// entries.
pub fn average_delay_ms(log: &[CommittedKeystroke]) -> Option<f64> {
    let delays = delays(log);
    if delays.is_empty() {
        return None;
    }
    Some(delays.iter().sum::<f64>() / delays.len() as f64)
}

/// Smallest delay seen
pub fn min_delay_ms(log: &[CommittedKeystroke]) -> Option<f64> {
    delays(log).into_iter().reduce(f64::min)
}

/// Largest delay seen
pub fn max_delay_ms(log: &[CommittedKeystroke]) -> Option<f64> {
    delays(log).into_iter().reduce(f64::max)
}

/// Standard deviation of the delays. Needs at least two delay samples.
pub fn std_dev_ms(log: &[CommittedKeystroke]) -> Option<f64> {
    let delays = delays(log);
    if delays.len() < 2 {
        return None;
    }
    let mean = delays.iter().sum::<f64>() / delays.len() as f64;
    let variance = delays
        .iter()
        .map(|&d| {
            let diff = d - mean;
            diff * diff
        })
        .sum::<f64>()
        / delays.len() as f64;
    Some(variance.sqrt())
}

/// Qualitative pace rating based on the average delay
pub fn pace_rating(log: &[CommittedKeystroke]) -> &'static str {
    match average_delay_ms(log) {
        None => "Not measured",
        Some(ms) if ms < 100.0 => "Very fast (<100ms)",
        Some(ms) if ms < 200.0 => "Fast (<200ms)",
        Some(ms) if ms < 400.0 => "Steady (<400ms)",
        Some(ms) if ms < 800.0 => "Deliberate (<800ms)",
        Some(_) => "Slow (>800ms)",
    }
}
