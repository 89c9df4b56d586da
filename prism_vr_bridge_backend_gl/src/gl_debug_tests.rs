//! Unit tests for the KHR_debug severity and label mapping

#[cfg(test)]
use prism_vr_bridge::prism::log::LogSeverity;

#[cfg(test)]
use super::{severity_of, source_label, type_label};

#[test]
fn test_severity_mapping_follows_driver_classification() {
    assert_eq!(severity_of(glow::DEBUG_SEVERITY_HIGH), LogSeverity::Error);
    assert_eq!(severity_of(glow::DEBUG_SEVERITY_MEDIUM), LogSeverity::Warn);
    assert_eq!(severity_of(glow::DEBUG_SEVERITY_LOW), LogSeverity::Info);
    assert_eq!(
        severity_of(glow::DEBUG_SEVERITY_NOTIFICATION),
        LogSeverity::Trace
    );
}

#[test]
fn test_unrecognized_severity_stays_quiet() {
    // An enum the driver invents later must not escalate.
    assert_eq!(severity_of(0), LogSeverity::Trace);
}

#[test]
fn test_type_labels() {
    assert_eq!(type_label(glow::DEBUG_TYPE_ERROR), "error");
    assert_eq!(type_label(glow::DEBUG_TYPE_PERFORMANCE), "performance");
    assert_eq!(type_label(glow::DEBUG_TYPE_OTHER), "general");
}

#[test]
fn test_source_labels() {
    assert_eq!(source_label(glow::DEBUG_SOURCE_API), "api");
    assert_eq!(
        source_label(glow::DEBUG_SOURCE_SHADER_COMPILER),
        "shader compiler"
    );
    assert_eq!(source_label(glow::DEBUG_SOURCE_OTHER), "other");
}
