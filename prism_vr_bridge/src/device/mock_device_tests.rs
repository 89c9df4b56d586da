//! Unit tests for the mock device itself
//!
//! The bridge tests lean on these counters, so the counters themselves
//! get a sanity pass here.

#[cfg(test)]
use crate::device::mock_device::MockDevice;
#[cfg(test)]
use crate::device::{GraphicsApi, GraphicsDevice, NativeTexture};
#[cfg(test)]
use crate::error::Error;
#[cfg(test)]
use crate::texture::PixelFormat;

#[test]
fn test_gate_opens_once_and_stays_open() {
    let mut device = MockDevice::new();

    assert!(device.ensure_ready().is_ok());
    assert!(device.ensure_ready().is_ok());
    assert!(device.ensure_ready().is_ok());

    assert_eq!(device.gate_attempts, 3);
    // The extension-loading side effect happened exactly once.
    assert_eq!(device.initializations, 1);
}

#[test]
fn test_scripted_gate_failures_then_success() {
    let mut device = MockDevice::failing_gate(2);

    assert!(matches!(
        device.ensure_ready(),
        Err(Error::RuntimeException(_))
    ));
    assert!(matches!(
        device.ensure_ready(),
        Err(Error::RuntimeException(_))
    ));
    assert!(device.ensure_ready().is_ok());
    assert!(device.ready);
    assert_eq!(device.initializations, 1);
}

#[test]
fn test_create_returns_distinct_nonzero_gl_names() {
    let mut device = MockDevice::new();
    device.ensure_ready().unwrap();

    let a = device
        .create_texture(64, 64, PixelFormat::R8G8B8A8_UNORM)
        .unwrap();
    let b = device
        .create_texture(64, 64, PixelFormat::R8G8B8A8_UNORM)
        .unwrap();

    assert_ne!(a, b);
    assert_eq!(a.api(), GraphicsApi::OpenGl);
    assert_eq!(device.created, 2);
    assert_eq!(device.live(), 2);
}

#[test]
fn test_destroy_records_handles_in_order() {
    let mut device = MockDevice::new();
    device.ensure_ready().unwrap();

    let a = device
        .create_texture(16, 16, PixelFormat::UNKNOWN)
        .unwrap();
    let b = device
        .create_texture(16, 16, PixelFormat::UNKNOWN)
        .unwrap();

    device.destroy_texture(b);
    device.destroy_texture(a);

    assert_eq!(device.destroyed, 2);
    assert_eq!(device.destroyed_handles, vec![b, a]);
    assert_eq!(device.live(), 0);
}

#[test]
fn test_scripted_create_failure_at_slot() {
    let mut device = MockDevice::failing_create_at(1);
    device.ensure_ready().unwrap();

    assert!(device
        .create_texture(8, 8, PixelFormat::D16_UNORM)
        .is_ok());
    assert!(matches!(
        device.create_texture(8, 8, PixelFormat::D16_UNORM),
        Err(Error::RuntimeException(_))
    ));
    assert_eq!(device.created, 1);
}

#[test]
fn test_resolve_format_is_counted_and_identity() {
    let device = MockDevice::new();

    let resolved = device.resolve_format(PixelFormat::B8G8R8A8_UNORM_SRGB);

    assert_eq!(resolved, PixelFormat::B8G8R8A8_UNORM_SRGB);
    assert_eq!(device.resolve_calls.get(), 1);
}

#[test]
fn test_native_texture_tag_matches_api() {
    let mut device = MockDevice::new();
    device.ensure_ready().unwrap();

    let texture = device
        .create_texture(4, 4, PixelFormat::UNKNOWN)
        .unwrap();
    let NativeTexture::OpenGl(name) = texture;
    assert!(name.get() > 0);
}
