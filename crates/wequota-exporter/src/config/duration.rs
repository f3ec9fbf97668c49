//! Duration strings in the `1h30m` / `1.5h` / `300ms` form.
//!
//! A value is one or more `<decimal><unit>` terms; units are
//! `ns`, `us`/`µs`/`μs`, `ms`, `s`, `m`, `h`. A bare `0` is accepted.
//! Negative durations are rejected.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

static DURATION_REGEX: OnceLock<Regex> = OnceLock::new();
static TERM_REGEX: OnceLock<Regex> = OnceLock::new();

// Longer units first: alternation is leftmost-first.
const TERM: &str = r"(\d+(?:\.\d*)?|\.\d+)(ns|us|µs|μs|ms|s|m|h)";

#[allow(clippy::expect_used)]
fn get_duration_regex() -> &'static Regex {
    DURATION_REGEX.get_or_init(|| {
        Regex::new(&format!(r"^\+?(?:{TERM})+$")).expect("Duration regex is valid")
    })
}

#[allow(clippy::expect_used)]
fn get_term_regex() -> &'static Regex {
    TERM_REGEX.get_or_init(|| Regex::new(TERM).expect("Duration term regex is valid"))
}

fn unit_nanos(unit: &str) -> f64 {
    match unit {
        "ns" => 1.0,
        "us" | "µs" | "μs" => 1e3,
        "ms" => 1e6,
        "s" => 1e9,
        "m" => 60.0 * 1e9,
        _ => 3600.0 * 1e9,
    }
}

pub fn parse(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s.starts_with('-') {
        return Err(format!("negative duration {input:?}"));
    }
    if s == "0" || s == "+0" {
        return Ok(Duration::ZERO);
    }
    if !get_duration_regex().is_match(s) {
        tracing::debug!(input, "duration did not match");
        return Err(format!("invalid duration {input:?}"));
    }

    let mut total_nanos = 0f64;
    for caps in get_term_regex().captures_iter(s) {
        let value: f64 = caps[1]
            .parse()
            .map_err(|_| format!("invalid duration {input:?}"))?;
        total_nanos += value * unit_nanos(&caps[2]);
    }

    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return Err(format!("invalid duration {input:?}"));
    }
    Ok(Duration::from_nanos(total_nanos.round() as u64))
}
