use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let config = Config::from_lookup(lookup(&[("LEADS_API_URL", "https://api.example.com")])).expect("config");
    assert_eq!(
        config,
        Config {
            port: DEFAULT_PORT,
            api_url: "https://api.example.com".to_owned(),
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_lookup_trims_trailing_slash() {
    let config = Config::from_lookup(lookup(&[("LEADS_API_URL", " http://localhost:8000/api/ ")])).expect("config");
    assert_eq!(config.api_url, "http://localhost:8000/api");
}

#[test]
fn from_lookup_reads_overrides() {
    let config = Config::from_lookup(lookup(&[
        ("LEADS_API_URL", "http://upstream"),
        ("PORT", "8080"),
        ("LEADS_API_TIMEOUT_SECS", "30"),
    ]))
    .expect("config");
    assert_eq!(config.port, 8080);
    assert_eq!(config.api_timeout_secs, 30);
}

#[test]
fn from_lookup_requires_api_url() {
    assert_eq!(Config::from_lookup(lookup(&[])), Err(ConfigError::Missing { var: "LEADS_API_URL" }));
    assert_eq!(
        Config::from_lookup(lookup(&[("LEADS_API_URL", "   ")])),
        Err(ConfigError::Missing { var: "LEADS_API_URL" })
    );
}

#[test]
fn from_lookup_rejects_non_http_url() {
    let err = Config::from_lookup(lookup(&[("LEADS_API_URL", "ftp://nope")])).expect_err("invalid");
    assert!(matches!(err, ConfigError::Invalid { var: "LEADS_API_URL", .. }));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = Config::from_lookup(lookup(&[("LEADS_API_URL", "http://x"), ("PORT", "eighty")])).expect_err("invalid");
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}
