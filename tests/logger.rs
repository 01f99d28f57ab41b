use log::{Level, Log, Record};
use std::fs;
use todolist::config::LoggingConfig;
use todolist::logger::{self, Logger};

fn log_line(target: &dyn Log, level: Level, message: &str) {
    target.log(
        &Record::builder()
            .args(format_args!("{message}"))
            .level(level)
            .target("todolist::test")
            .build(),
    );
}

#[test]
fn test_logger_returns_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    assert_eq!(logger.get_logs(), vec!["second".to_string(), "first".to_string()]);
    assert_eq!(logger.len(), 2);
}

#[test]
fn test_logger_drops_oldest_when_full() {
    let logger = Logger::with_capacity(2);
    logger.log("one".to_string());
    logger.log("two".to_string());
    logger.log("three".to_string());

    assert_eq!(logger.get_logs(), vec!["three".to_string(), "two".to_string()]);
}

#[test]
fn test_logger_clear() {
    let logger = Logger::new();
    logger.log("message".to_string());
    logger.clear();
    assert!(logger.is_empty());
}

#[test]
fn test_logger_clones_share_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());
    assert_eq!(logger.get_logs(), vec!["from clone".to_string()]);
}

#[test]
fn test_dispatch_feeds_memory_buffer() {
    let sink = Logger::new();
    let config = LoggingConfig::default();

    let (level, log) = logger::dispatch(&config, sink.clone()).unwrap().into_log();
    assert_eq!(level, log::LevelFilter::Info);

    log_line(log.as_ref(), Level::Info, "hello buffer");
    log_line(log.as_ref(), Level::Debug, "filtered out");

    let logs = sink.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("hello buffer"));
    assert!(logs[0].contains("INFO"));
    assert!(logs[0].contains("todolist::test"));
}

#[test]
fn test_dispatch_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(logger::dispatch(&config, Logger::new()).is_err());
}

#[test]
fn test_dispatch_writes_log_file_when_enabled() {
    let dir = std::env::temp_dir().join(format!("todolist-log-{}", uuid::Uuid::new_v4()));
    let path = dir.join("todolist.log");
    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        file: Some(path.clone()),
    };
    let sink = Logger::new();

    let (_, log) = logger::dispatch(&config, sink.clone()).unwrap().into_log();
    log_line(log.as_ref(), Level::Debug, "Test message with file");
    log.flush();

    // In-memory logs (for the logs dialog) and the file both get the line
    assert!(sink.get_logs()[0].contains("Test message with file"));
    let file_content = fs::read_to_string(&path).unwrap();
    assert!(file_content.contains("Test message with file"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_default_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("todolist/todolist.log"));
    }
}
