//! Unit tests for the logging system
//!
//! These tests swap the process-global logger, so they run serialized.

#[cfg(test)]
use crate::log::{log, reset_logger, set_logger, LogEntry, LogSeverity, Logger};
#[cfg(test)]
use crate::{bridge_error, bridge_info};
#[cfg(test)]
use serial_test::serial;
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Captures entries into a shared vector for inspection
#[cfg(test)]
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

#[cfg(test)]
impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[cfg(test)]
fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    set_logger(CaptureLogger {
        entries: entries.clone(),
    });
    entries
}

#[test]
#[serial]
fn test_custom_logger_receives_entries() {
    let entries = install_capture();

    log(LogSeverity::Info, "prism::test", "hello".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].source, "prism::test");
    assert_eq!(captured[0].message, "hello");
    assert!(captured[0].file.is_none());
    drop(captured);

    reset_logger();
}

#[test]
#[serial]
fn test_info_macro_routes_through_global_logger() {
    let entries = install_capture();

    bridge_info!("prism::test", "formatted {} {}", 1, "two");

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "formatted 1 two");
    drop(captured);

    reset_logger();
}

#[test]
#[serial]
fn test_error_macro_carries_file_and_line() {
    let entries = install_capture();

    bridge_error!("prism::test", "boom");

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert!(captured[0].file.is_some());
    assert!(captured[0].line.is_some());
    drop(captured);

    reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let entries = install_capture();
    reset_logger();

    log(LogSeverity::Debug, "prism::test", "after reset".to_string());

    // The capture logger was replaced, so nothing new is recorded.
    assert!(entries.lock().unwrap().is_empty());
}
