//! Quota gauges and exporter self-metrics.
//!
//! Gauges hold an `f64` as raw bits in an `AtomicU64`, so the check routine
//! can write while a scrape reads without locking. Counter labels are
//! flattened into sorted key vectors to keep deterministic ordering.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use wequota_core::QuotaSnapshot;

pub const REMAINING_GB: &str = "we_quota_remaining_gb";
pub const TOTAL_GB: &str = "we_quota_total_gb";
pub const USAGE_PERCENTAGE: &str = "we_quota_usage_percentage";
pub const CHECKS_TOTAL: &str = "we_quota_checks_total";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Sample value in exposition syntax (`+Inf`, `-Inf`, `NaN` for non-finite).
fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v == f64::INFINITY {
        "+Inf".into()
    } else if v == f64::NEG_INFINITY {
        "-Inf".into()
    } else {
        v.to_string()
    }
}

/// Single unlabeled gauge, starts at 0.
#[derive(Default)]
pub struct Gauge {
    bits: AtomicU64,
}

impl Gauge {
    pub fn set(&self, v: f64) {
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} gauge", name);
        let _ = writeln!(out, "{} {}", name, format_value(self.get()));
    }
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        let mut key: Vec<(String, String)> = labels.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for a label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        let mut key: Vec<(String, String)> = labels.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();
        self.map.get(&key).map(|c| c.load(Ordering::Relaxed)).unwrap_or(0)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);
        let mut rows: Vec<(String, u64)> = self.map.iter()
            .map(|r| {
                let label_str = r.key().iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>().join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (label_str, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// Gauges published for the monitored account.
#[derive(Default)]
pub struct QuotaGauges {
    pub remaining_gb: Gauge,
    pub total_gb: Gauge,
    pub usage_percentage: Gauge,
    pub checks: CounterVec,
}

impl QuotaGauges {
    /// Overwrite all three gauges from a snapshot.
    /// Each store is atomic; a concurrent scrape may observe a mix of old and new values.
    pub fn apply(&self, quota: &QuotaSnapshot) {
        self.remaining_gb.set(quota.remain);
        self.usage_percentage.set(quota.usage_percentage());
        self.total_gb.set(quota.total);
    }

    pub fn record_check(&self, ok: bool) {
        let result = if ok { "success" } else { "failure" };
        self.checks.inc(&[("result", result)]);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.remaining_gb.render(REMAINING_GB, "Remaining internet quota in GB.", &mut out);
        self.total_gb.render(TOTAL_GB, "Total internet quota in GB.", &mut out);
        self.usage_percentage.render(USAGE_PERCENTAGE, "Internet quota usage percentage.", &mut out);
        self.checks.render(CHECKS_TOTAL, "Quota check cycles by result.", &mut out);
        out
    }
}
