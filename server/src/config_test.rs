use super::*;

use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert!(cfg.site_dir.ends_with("dist"));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("SITE_DIR", "/srv/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/site"));
}

#[test]
fn ipv6_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "::1")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_DIR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_dir.ends_with("dist"));
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "70000"));
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
}
