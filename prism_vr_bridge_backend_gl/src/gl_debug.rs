/// KHR_debug message forwarding
///
/// Installed on the context by the device gate in debug builds. Driver
/// diagnostics land in the bridge log with a severity matching the
/// driver's own classification.

use prism_vr_bridge::prism::log::LogSeverity;

const SOURCE: &str = "prism::gl";

/// Callback handed to `glDebugMessageCallback`
pub(crate) fn forward_debug_message(
    source: u32,
    message_type: u32,
    id: u32,
    severity: u32,
    message: &str,
) {
    prism_vr_bridge::log::log(
        severity_of(severity),
        SOURCE,
        format!(
            "[{}/{}] {:#06x}: {}",
            source_label(source),
            type_label(message_type),
            id,
            message
        ),
    );
}

fn severity_of(severity: u32) -> LogSeverity {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => LogSeverity::Error,
        glow::DEBUG_SEVERITY_MEDIUM => LogSeverity::Warn,
        glow::DEBUG_SEVERITY_LOW => LogSeverity::Info,
        _ => LogSeverity::Trace,
    }
}

fn type_label(message_type: u32) -> &'static str {
    match message_type {
        glow::DEBUG_TYPE_ERROR => "error",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "deprecated",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "undefined behavior",
        glow::DEBUG_TYPE_PERFORMANCE => "performance",
        glow::DEBUG_TYPE_PORTABILITY => "portability",
        _ => "general",
    }
}

fn source_label(source: u32) -> &'static str {
    match source {
        glow::DEBUG_SOURCE_API => "api",
        glow::DEBUG_SOURCE_WINDOW_SYSTEM => "window system",
        glow::DEBUG_SOURCE_SHADER_COMPILER => "shader compiler",
        glow::DEBUG_SOURCE_THIRD_PARTY => "third party",
        glow::DEBUG_SOURCE_APPLICATION => "application",
        _ => "other",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "gl_debug_tests.rs"]
mod tests;
