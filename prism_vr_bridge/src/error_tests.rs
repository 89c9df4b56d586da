//! Unit tests for the error taxonomy
//!
//! Verifies Display formatting and the bridge_bail! early-return behavior.

#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::bridge_bail;

#[test]
fn test_error_display_invalid_session() {
    let error = Error::InvalidSession("stale key".to_string());
    assert_eq!(format!("{}", error), "Invalid session: stale key");
}

#[test]
fn test_error_display_invalid_parameter() {
    let error = Error::InvalidParameter("unsupported texture type".to_string());
    assert_eq!(
        format!("{}", error),
        "Invalid parameter: unsupported texture type"
    );
}

#[test]
fn test_error_display_runtime_exception() {
    let error = Error::RuntimeException("context gate closed".to_string());
    assert_eq!(format!("{}", error), "Runtime exception: context gate closed");
}

#[test]
fn test_bridge_bail_returns_error_with_formatted_message() {
    fn failing(width: u32) -> Result<()> {
        bridge_bail!("prism::test", InvalidParameter, "bad width {}", width);
    }

    let result = failing(0);
    assert_eq!(
        result,
        Err(Error::InvalidParameter("bad width 0".to_string()))
    );
}

#[test]
fn test_bridge_bail_skipped_on_success_path() {
    fn checked(length: usize) -> Result<usize> {
        if length == 0 {
            bridge_bail!("prism::test", InvalidParameter, "zero length");
        }
        Ok(length)
    }

    assert_eq!(checked(3), Ok(3));
}
