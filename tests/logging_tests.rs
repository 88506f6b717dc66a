//! 日志配置功能测试

use agent_proxy::infrastructure::config::{parse_config, Logging};

fn logging_with(level: &str) -> Logging {
    Logging {
        level: level.to_string(),
        ..Logging::default()
    }
}

#[test]
fn test_log_level_parsing() {
    // 测试日志级别解析
    let levels = [
        ("DEBUG", "debug"),
        ("INFO", "info"),
        ("WARN", "warn"),
        ("ERROR", "error"),
        ("info", "info"),
    ];

    for (level, expected) in levels {
        assert_eq!(logging_with(level).filter_directive(), expected);
    }
}

#[test]
fn test_unknown_level_falls_back_to_warn() {
    assert_eq!(logging_with("TRACE").filter_directive(), "warn");
    assert_eq!(logging_with("").filter_directive(), "warn");
}

#[test]
fn test_logging_config() {
    let config = parse_config(
        r#"
[logging]
enable = false
path = "/tmp/agent-proxy-test.log"
level = "DEBUG"
"#,
    )
    .unwrap();

    assert!(!config.logging.enable);
    assert_eq!(
        config.logging.path.as_deref(),
        Some("/tmp/agent-proxy-test.log")
    );
    assert_eq!(config.logging.filter_directive(), "debug");
}

#[test]
fn test_log_level_default() {
    let logging = Logging::default();

    assert!(logging.enable);
    assert_eq!(logging.filter_directive(), "warn");
}
