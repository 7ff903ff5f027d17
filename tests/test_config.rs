use std::path::PathBuf;

use courier::config::{Config, DEFAULT_LISTEN_ADDR};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.directory, std::env::temp_dir());
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml_str("listen_addr: 0.0.0.0:8080\ndirectory: /srv/files\n").unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
    assert_eq!(cfg.directory, PathBuf::from("/srv/files"));
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml_str("directory: /data\n").unwrap();
    assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.directory, PathBuf::from("/data"));
}

#[test]
fn test_config_rejects_unknown_keys() {
    assert!(Config::from_yaml_str("port: 80\n").is_err());
}

#[test]
fn test_config_cli_overrides_win() {
    let cfg = Config::default().with_overrides(
        Some("127.0.0.1:9000".to_string()),
        Some(PathBuf::from("/tmp/other")),
    );
    assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.directory, PathBuf::from("/tmp/other"));
}

#[test]
fn test_config_missing_overrides_keep_values() {
    let cfg = Config::default().with_overrides(None, None);
    assert_eq!(cfg, Config::default());
}

// The only test in this binary that touches process env vars.
#[test]
fn test_config_load_from_env() {
    unsafe {
        std::env::remove_var("COURIER_CONFIG");
        std::env::set_var("LISTEN", "0.0.0.0:3000");
        std::env::set_var("DIRECTORY", "/var/tmp/courier");
    }
    let cfg = Config::load().unwrap();
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("DIRECTORY");
    }

    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.directory, PathBuf::from("/var/tmp/courier"));
}
