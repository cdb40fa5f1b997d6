//! CLI output formatting.

use std::time::Duration;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a list of multiples, eliding the middle of long lists.
#[must_use]
pub fn format_multiples(multiples: &[u32], verbose: bool) -> String {
    const SHOWN: usize = 8;
    if verbose || multiples.len() <= SHOWN * 2 {
        let items: Vec<String> = multiples.iter().map(u32::to_string).collect();
        return format!("[{}]", items.join(", "));
    }
    let head: Vec<String> = multiples[..SHOWN].iter().map(u32::to_string).collect();
    let tail: Vec<String> = multiples[multiples.len() - SHOWN..]
        .iter()
        .map(u32::to_string)
        .collect();
    format!(
        "[{}, ... {}] ({} multiples)",
        head.join(", "),
        tail.join(", "),
        multiples.len()
    )
}
