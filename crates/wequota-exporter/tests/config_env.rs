#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::time::Duration;

use wequota_core::error::ErrorKind;
use wequota_exporter::config::{self, duration};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn load(pairs: &[(&str, &str)]) -> wequota_core::Result<config::ExporterConfig> {
    let vars = env(pairs);
    config::load_from_lookup(|k| vars.get(k).cloned())
}

#[test]
fn ok_minimal_env() {
    let cfg = load(&[
        ("LANDLINE_NUMBER", "0221234567"),
        ("PASSWORD", "pw"),
        ("INTERVAL", "5m"),
    ])
    .expect("must parse");

    assert_eq!(cfg.credentials.account_id(), "FBB221234567");
    assert_eq!(cfg.credentials.landline(), "0221234567");
    assert_eq!(cfg.interval, Duration::from_secs(300));
    assert_eq!(cfg.listen, "0.0.0.0:2222");
    assert_eq!(cfg.base_url, "https://api-my.te.eg");
}

#[test]
fn overrides_are_honoured() {
    let cfg = load(&[
        ("LANDLINE_NUMBER", "0221234567"),
        ("PASSWORD", "pw"),
        ("INTERVAL", "1h30m"),
        ("METRICS_LISTEN", "127.0.0.1:9999"),
        ("WE_API_BASE_URL", "http://127.0.0.1:8081"),
    ])
    .unwrap();
    assert_eq!(cfg.listen_addr().unwrap().port(), 9999);
    assert_eq!(cfg.base_url, "http://127.0.0.1:8081");
    assert_eq!(cfg.interval, Duration::from_secs(5400));
}

#[test]
fn missing_any_required_var_is_config_error() {
    let full = [
        ("LANDLINE_NUMBER", "0221234567"),
        ("PASSWORD", "pw"),
        ("INTERVAL", "5m"),
    ];
    for skip in 0..full.len() {
        let partial: Vec<_> = full.iter().enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, p)| *p)
            .collect();
        let err = load(&partial).expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}

#[test]
fn empty_value_counts_as_missing() {
    let err = load(&[("LANDLINE_NUMBER", "0221234567"), ("PASSWORD", ""), ("INTERVAL", "5m")])
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn bad_interval_is_rejected() {
    for bad in ["5", "five minutes", "0", "-1m", "10x"] {
        let err = load(&[("LANDLINE_NUMBER", "0221234567"), ("PASSWORD", "pw"), ("INTERVAL", bad)])
            .expect_err(bad);
        assert_eq!(err.kind(), ErrorKind::Config, "{bad}");
    }
}

#[test]
fn bad_listen_is_rejected() {
    let err = load(&[
        ("LANDLINE_NUMBER", "0221234567"),
        ("PASSWORD", "pw"),
        ("INTERVAL", "5m"),
        ("METRICS_LISTEN", ":2222"),
    ])
    .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn password_is_redacted_in_debug() {
    let cfg = load(&[("LANDLINE_NUMBER", "0221234567"), ("PASSWORD", "hunter2"), ("INTERVAL", "1m")])
        .unwrap();
    let dbg = format!("{cfg:?}");
    assert!(!dbg.contains("hunter2"));
    assert!(dbg.contains("FBB221234567"));
}

#[test]
fn duration_forms() {
    assert_eq!(duration::parse("30s").unwrap(), Duration::from_secs(30));
    assert_eq!(duration::parse("1.5h").unwrap(), Duration::from_secs(5400));
    assert_eq!(duration::parse("2h45m30s").unwrap(), Duration::from_secs(9930));
    assert_eq!(duration::parse("300ms").unwrap(), Duration::from_millis(300));
    assert_eq!(duration::parse("10us").unwrap(), Duration::from_micros(10));
    assert_eq!(duration::parse("10µs").unwrap(), Duration::from_micros(10));
    assert_eq!(duration::parse("0").unwrap(), Duration::ZERO);
    assert!(duration::parse("").is_err());
    assert!(duration::parse("m").is_err());
    assert!(duration::parse("1d").is_err());
    assert_eq!(duration::parse(".5s").unwrap(), Duration::from_millis(500));
    assert_eq!(duration::parse("1m0.25s").unwrap(), Duration::from_millis(60_250));
    assert!(duration::parse("5m junk").is_err());
    assert!(duration::parse("1h-5m").is_err());
}
