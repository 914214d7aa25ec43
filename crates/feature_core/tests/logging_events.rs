use feature_core::{flush_logging, init_logging, logging_status, Feature};
use std::fs;
use std::path::Path;

fn read_all_logs(dir: &Path) -> String {
    let mut combined = String::new();
    for entry in fs::read_dir(dir).expect("log dir should be readable") {
        let path = entry.expect("dir entry").path();
        if path.is_file() {
            combined.push_str(&fs::read_to_string(&path).unwrap_or_default());
        }
    }
    combined
}

#[test]
fn feature_events_reach_log_file_and_config_is_locked() {
    assert!(logging_status().is_none());

    let log_dir = tempfile::tempdir().expect("temp dir");
    let log_dir_str = log_dir.path().to_str().expect("utf-8 temp path").to_string();
    let other_dir = tempfile::tempdir().expect("temp dir");
    let other_dir_str = other_dir
        .path()
        .to_str()
        .expect("utf-8 temp path")
        .to_string();

    init_logging("debug", &log_dir_str).expect("first init should succeed");
    init_logging("DEBUG", &log_dir_str).expect("same config should be idempotent");

    let level_err = init_logging("info", &log_dir_str).expect_err("level switch must fail");
    assert!(level_err.contains("refusing to switch"));
    let dir_err = init_logging("debug", &other_dir_str).expect_err("dir switch must fail");
    assert!(dir_err.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "debug");
    assert_eq!(dir, log_dir.path());

    Feature::new().process();
    flush_logging();

    let logs = read_all_logs(log_dir.path());
    assert!(logs.contains("event=core_init"), "logs: {logs}");
    assert!(logs.contains("event=feature_construct"), "logs: {logs}");
    assert!(
        logs.contains("event=feature_process module=model status=ok"),
        "logs: {logs}"
    );
    assert!(
        !logs.contains("Processing v4"),
        "status line must stay on stdout"
    );

    let panicked = std::panic::catch_unwind(|| panic!("first line\nsecond line"));
    assert!(panicked.is_err());
    flush_logging();

    let logs = read_all_logs(log_dir.path());
    assert!(logs.contains("event=panic_captured"), "logs: {logs}");
    assert!(
        logs.contains("payload=first line second line"),
        "panic payload must be logged on one line: {logs}"
    );
}
