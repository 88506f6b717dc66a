//! 配置功能测试

use agent_proxy::infrastructure::config::{
    apply_env_overrides, generate_config_sample, load_config, parse_config, Config,
    DEFAULT_MAX_BODY_BYTES, ENV_API_KEY, ENV_HOST, ENV_PORT,
};
use std::collections::HashMap;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert!(config.server.workers.is_none());
    assert_eq!(config.server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    assert!(config.server.max_body_bytes > 256 * 1024);
    assert_eq!(config.anthropic.base_url, "https://api.anthropic.com/v1");
    assert_eq!(config.anthropic.model, "claude-sonnet-4-20250514");
    assert_eq!(config.anthropic.max_tokens, 4000);
    assert_eq!(config.anthropic.api_version, "2023-06-01");
    assert!(config.anthropic.api_key().is_none());
    assert!(config.http_proxy.is_none());
}

#[test]
fn test_logging_defaults() {
    // 测试日志默认值
    let config = Config::default();

    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "WARN");
    assert!(config.logging.path.is_none());
}

#[test]
fn test_config_toml_format() {
    let toml_content = r#"
http_proxy = "http://proxy.local:8080"

[server]
host = "0.0.0.0"
port = 8787
workers = 2
max_body_bytes = 10485760

[anthropic]
api_key = "sk-test"
max_tokens = 2000

[logging]
enable = true
path = "/tmp/agent-proxy.log"
level = "DEBUG"
"#;

    let config = parse_config(toml_content).unwrap();

    assert_eq!(config.http_proxy.as_deref(), Some("http://proxy.local:8080"));
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8787);
    assert_eq!(config.server.workers, Some(2));
    assert_eq!(config.server.max_body_bytes, 10_485_760);
    assert_eq!(config.anthropic.api_key(), Some("sk-test"));
    assert_eq!(config.anthropic.max_tokens, 2000);
    // 未填写的字段使用默认值
    assert_eq!(config.anthropic.model, "claude-sonnet-4-20250514");
    assert_eq!(config.logging.level, "DEBUG");
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = parse_config("[server]\nport = 9000\n").unwrap();

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    assert_eq!(config.anthropic.max_tokens, 4000);
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(parse_config("[server\nport = ").is_err());
    assert!(parse_config("[server]\nport = \"not a number\"").is_err());
}

#[test]
fn test_blank_api_key_counts_as_missing() {
    let config = parse_config("[anthropic]\napi_key = \"  \"\n").unwrap();

    assert!(config.anthropic.api_key().is_none());
}

#[test]
fn test_env_overrides() {
    let mut config = Config::default();
    apply_env_overrides(
        &mut config,
        env_of(&[
            (ENV_API_KEY, "sk-from-env"),
            (ENV_HOST, "0.0.0.0"),
            (ENV_PORT, "8080"),
        ]),
    );

    assert_eq!(config.anthropic.api_key(), Some("sk-from-env"));
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
}

#[test]
fn test_env_overrides_ignore_empty_and_invalid() {
    let mut config = parse_config("[anthropic]\napi_key = \"sk-file\"\n").unwrap();
    apply_env_overrides(
        &mut config,
        env_of(&[(ENV_API_KEY, ""), (ENV_PORT, "eighty")]),
    );

    assert_eq!(config.anthropic.api_key(), Some("sk-file"));
    assert_eq!(config.server.port, 3000);
}

#[test]
fn test_load_config_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = 4100\n").unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.server.port, 4100);
}

#[test]
fn test_load_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    // 文件不存在
    let missing = dir.path().join("missing.toml");
    let config = load_config(Some(missing.as_path())).unwrap();
    assert_eq!(config.server.port, 3000);

    // 文件无法解析
    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "this is = = not toml").unwrap();
    let config = load_config(Some(broken.as_path())).unwrap();
    assert_eq!(config.server.port, 3000);
}

#[test]
fn test_generate_config_sample_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    generate_config_sample(Some(path.as_path())).unwrap();
    assert!(path.exists());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[server]"));
    assert!(content.contains("[anthropic]"));
    assert!(content.contains("[logging]"));

    let config = parse_config(&content).unwrap();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.anthropic.model, "claude-sonnet-4-20250514");

    // 已存在时不覆盖
    std::fs::write(&path, "[server]\nport = 1234\n").unwrap();
    generate_config_sample(Some(path.as_path())).unwrap();
    assert_eq!(load_config(Some(path.as_path())).unwrap().server.port, 1234);
}
